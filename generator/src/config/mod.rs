//! Run settings: command-line flags merged with an optional YAML config file.
//!
//! The config file is named `config.yaml` (or `config.yml`) and is looked up
//! in `~/.ietf_keywords_to_page/` first, then in the current directory.
//! Example:
//!
//! ```yaml
//! infile: keywords.csv
//! overview: true
//! verbose: false
//! debug: false
//! ```
//!
//! A value given on the command line wins over the file, the file wins over
//! the built-in default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;

use crate::error::{ConfigError, ConfigResult};
use crate::models::PageOptions;

/// Used for the config directory name.
pub const PROGRAM_NAME: &str = "ietf_keywords_to_page";

/// Accepted config file names, in lookup order.
const CONFIG_FILE_NAMES: [&str; 2] = ["config.yaml", "config.yml"];

// =============================================================================
// Config File
// =============================================================================

/// Contents of the YAML config file. Every key is optional; unknown keys
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Input CSV file.
    pub infile: Option<PathBuf>,
    /// Generate the overview page.
    pub overview: Option<bool>,
    /// Info-level logging.
    pub verbose: Option<bool>,
    /// Debug-level logging.
    pub debug: Option<bool>,
}

impl FileConfig {
    /// Load a config file. An empty file is an empty config.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Directories searched for a config file, in priority order.
    pub fn search_dirs() -> Vec<PathBuf> {
        let mut search = Vec::with_capacity(2);
        if let Some(home) = dirs::home_dir() {
            search.push(home.join(format!(".{}", PROGRAM_NAME)));
        }
        search.push(PathBuf::from("."));
        search
    }
}

/// A config file that was found and parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub config: FileConfig,
}

impl LoadedConfig {
    /// Find and load the config file from the default search directories.
    pub fn discover() -> ConfigResult<Option<Self>> {
        Self::discover_in(&FileConfig::search_dirs())
    }

    /// Load the first config file found in `dirs`. `Ok(None)` when there is
    /// none; an error when one exists but is unreadable or malformed.
    pub fn discover_in(dirs: &[PathBuf]) -> ConfigResult<Option<Self>> {
        for dir in dirs {
            for name in CONFIG_FILE_NAMES {
                let path = dir.join(name);
                if path.is_file() {
                    let config = FileConfig::load(&path)?;
                    return Ok(Some(Self { path, config }));
                }
            }
        }
        Ok(None)
    }
}

// =============================================================================
// Flags
// =============================================================================

/// Values taken from the command line (or their environment variables).
/// `None` means "not given", so the config file decides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    pub infile: Option<PathBuf>,
    pub overview: Option<bool>,
    pub verbose: Option<bool>,
    pub debug: Option<bool>,
}

// =============================================================================
// Verbosity
// =============================================================================

/// Diagnostic level. Never changes the generated page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Warnings and errors only.
    #[default]
    Quiet,
    /// `--verbose`
    Verbose,
    /// `--debug`
    Debug,
}

impl Verbosity {
    /// Debug wins over verbose.
    pub fn from_switches(verbose: bool, debug: bool) -> Self {
        if debug {
            Verbosity::Debug
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Quiet
        }
    }

    /// Merge command-line switches with the config file.
    pub fn resolve(flags: &Flags, file: Option<&FileConfig>) -> Self {
        let verbose = switch(flags.verbose, file.and_then(|f| f.verbose));
        let debug = switch(flags.debug, file.and_then(|f| f.debug));
        Self::from_switches(verbose, debug)
    }

    pub fn level(&self) -> Level {
        match self {
            Verbosity::Quiet => Level::WARN,
            Verbosity::Verbose => Level::INFO,
            Verbosity::Debug => Level::DEBUG,
        }
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub infile: PathBuf,
    pub options: PageOptions,
    pub verbosity: Verbosity,
}

impl Settings {
    /// Merge flags with the config file. Fails with
    /// [`ConfigError::MissingInput`] when neither names an input file.
    pub fn resolve(flags: Flags, file: Option<&FileConfig>) -> ConfigResult<Self> {
        let verbosity = Verbosity::resolve(&flags, file);

        let overview = switch(flags.overview, file.and_then(|f| f.overview));

        let infile = flags
            .infile
            .or_else(|| file.and_then(|f| f.infile.clone()))
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(ConfigError::MissingInput)?;

        Ok(Self {
            infile,
            options: PageOptions { overview },
            verbosity,
        })
    }
}

/// A switch given on the command line wins, in either direction.
fn switch(flag: Option<bool>, file: Option<bool>) -> bool {
    flag.or(file).unwrap_or(false)
}
