//! # IETF keywords page generator
//!
//! Turns a CSV matrix of working groups and the keywords they listed into a
//! static HTML page of keyword -> working groups.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  CSV File   │────▶│    Pivot    │────▶│   Render    │────▶│ HTML stdout │
//! │ (WG x kw)   │     │ (normalize) │     │ (sorted)    │     │             │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use ietf_keywords::{pivot_str, PageOptions, Renderer};
//!
//! let csv = "tls,quic\n*TLS*,transport\n";
//! let keywords = pivot_str(csv, &PageOptions::detail()).unwrap();
//! let html = Renderer::new().unwrap().render(&keywords, &PageOptions::detail()).unwrap();
//! assert!(html.contains("<b>Transport</b>"));
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types per stage
//! - [`models`] - Keyword mapping and page options
//! - [`pivot`] - CSV parsing, keyword normalization, pivot
//! - [`render`] - HTML templates
//! - [`pipeline`] - File in, page out
//! - [`config`] - Flags and YAML config file
//! - [`logging`] - stderr diagnostics

// Core modules
pub mod error;
pub mod models;

// Stages
pub mod pivot;
pub mod render;
pub mod pipeline;

// Ambient
pub mod config;
pub mod logging;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ConfigError, PageError, PivotError, RenderError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{KeywordEntry, KeywordMap, PageOptions};

// =============================================================================
// Re-exports - Pivot
// =============================================================================

pub use pivot::{
    normalize_keyword,
    pivot_file,
    pivot_reader,
    pivot_records,
    pivot_str,
    title_case,
    OVERVIEW_MARKER,
};

// =============================================================================
// Re-exports - Render
// =============================================================================

pub use render::{sorted_entries, Renderer};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use pipeline::{generate_page, generate_page_from_reader, PageSummary};

// =============================================================================
// Re-exports - Config
// =============================================================================

pub use config::{FileConfig, Flags, LoadedConfig, Settings, Verbosity, PROGRAM_NAME};
