//! End-to-end page generation: CSV file in, HTML page out.
//!
//! # Example
//!
//! ```rust,no_run
//! use ietf_keywords::{generate_page, PageOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let stdout = std::io::stdout();
//!     let summary = generate_page("keywords.csv", &PageOptions::overview(), stdout.lock())?;
//!     eprintln!("{} keywords", summary.keyword_count);
//!     Ok(())
//! }
//! ```

use serde::Serialize;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

use crate::error::PageResult;
use crate::models::{KeywordMap, PageOptions};
use crate::pivot::{pivot_file, pivot_reader};
use crate::render::Renderer;

/// What ended up on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    /// Distinct keywords listed.
    pub keyword_count: usize,
    /// Working-group links across all keywords.
    pub link_count: usize,
}

impl PageSummary {
    fn of(keywords: &KeywordMap) -> Self {
        Self {
            keyword_count: keywords.len(),
            link_count: keywords.values().map(Vec::len).sum(),
        }
    }
}

/// Pivot the CSV file at `path` and write the page to `writer`.
pub fn generate_page<P: AsRef<Path>, W: Write>(
    path: P,
    options: &PageOptions,
    writer: W,
) -> PageResult<PageSummary> {
    let keywords = pivot_file(path, options)?;
    write_page(&keywords, options, writer)
}

/// Same as [`generate_page`] for CSV coming from any reader.
pub fn generate_page_from_reader<R: Read, W: Write>(
    reader: R,
    options: &PageOptions,
    writer: W,
) -> PageResult<PageSummary> {
    let keywords = pivot_reader(reader, options)?;
    write_page(&keywords, options, writer)
}

/// Nothing reaches `writer` unless the whole page rendered.
fn write_page<W: Write>(
    keywords: &KeywordMap,
    options: &PageOptions,
    mut writer: W,
) -> PageResult<PageSummary> {
    let html = Renderer::new()?.render(keywords, options)?;
    writer.write_all(html.as_bytes())?;
    writer.flush()?;

    let summary = PageSummary::of(keywords);
    info!(
        page = options.page_name(),
        "Wrote {} keywords with {} working group links",
        summary.keyword_count,
        summary.link_count
    );
    Ok(summary)
}
