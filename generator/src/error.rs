//! Error types for the keyword page generator.
//!
//! One enum per stage of the run:
//!
//! - [`ConfigError`] - flag / config file resolution
//! - [`PivotError`] - opening and parsing the CSV matrix
//! - [`RenderError`] - template compilation and page rendering
//! - [`PageError`] - top-level wrapper returned by the pipeline
//!
//! Every error is fatal: the binary reports it and exits non-zero.
//! Conversions go through `From` so `?` works across stage boundaries.

use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while resolving flags and the optional YAML config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid YAML for our keys.
    #[error("Invalid config file {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// No input file given on the command line, environment or config file.
    #[error("--infile is a required parameter")]
    MissingInput,
}

// =============================================================================
// Pivot Errors
// =============================================================================

/// Errors while reading the working-group / keyword matrix.
#[derive(Debug, Error)]
pub enum PivotError {
    /// Input file could not be opened.
    #[error("Unable to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input could not be read to the end.
    #[error("Unable to read CSV: {0}")]
    Read(#[source] std::io::Error),

    /// Quoting the csv reader would otherwise accept silently.
    #[error("Malformed CSV on line {line}: {message}")]
    Malformed { line: u64, message: String },

    /// Malformed CSV reported by the csv reader (e.g. invalid UTF-8).
    #[error("Unable to parse CSV: {0}")]
    Parse(#[from] csv::Error),
}

// =============================================================================
// Render Errors
// =============================================================================

/// Errors while producing the HTML page.
#[derive(Debug, Error)]
pub enum RenderError {
    /// An embedded template failed to compile.
    #[error("Invalid page template: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    /// Substitution or writing the rendered page failed.
    #[error("Failed to render page: {0}")]
    Render(#[from] handlebars::RenderError),
}

impl From<handlebars::TemplateError> for RenderError {
    fn from(err: handlebars::TemplateError) -> Self {
        RenderError::Template(Box::new(err))
    }
}

// =============================================================================
// Page Errors (top-level)
// =============================================================================

/// Top-level error returned by [`crate::pipeline::generate_page`].
#[derive(Debug, Error)]
pub enum PageError {
    /// Configuration error.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Input error.
    #[error("Input error: {0}")]
    Pivot(#[from] PivotError),

    /// Rendering error.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Flushing the output stream failed.
    #[error("Failed to write page: {0}")]
    Output(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for pivoting.
pub type PivotResult<T> = Result<T, PivotError>;

/// Result type for rendering.
pub type RenderResult<T> = Result<T, RenderError>;

/// Result type for the whole pipeline.
pub type PageResult<T> = Result<T, PageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // ConfigError -> PageError
        let page_err: PageError = ConfigError::MissingInput.into();
        assert!(page_err.to_string().contains("--infile"));

        // PivotError -> PageError
        let pivot_err = PivotError::Open {
            path: PathBuf::from("missing.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let page_err: PageError = pivot_err.into();
        let msg = page_err.to_string();
        assert!(msg.contains("missing.csv"));
        assert!(msg.contains("no such file"));

        let malformed = PivotError::Malformed {
            line: 3,
            message: "bare \" in non-quoted field".into(),
        };
        assert!(malformed.to_string().contains("line 3"));
    }

    #[test]
    fn test_template_error_is_boxed() {
        let mut registry = handlebars::Handlebars::new();
        let err = registry
            .register_template_string("broken", "{{#each}}")
            .unwrap_err();
        let render_err: RenderError = err.into();
        assert!(matches!(render_err, RenderError::Template(_)));
        assert!(render_err.to_string().starts_with("Invalid page template"));
    }
}
