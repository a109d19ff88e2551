//! Domain models shared by the pivot and render stages.
//!
//! - [`KeywordMap`] - normalized keyword -> working groups that listed it
//! - [`PageOptions`] - which page is being generated (overview or detail)
//! - [`KeywordEntry`] - one sorted row of the rendered page

use serde::Serialize;
use std::collections::HashMap;

// =============================================================================
// Keyword Mapping
// =============================================================================

/// Normalized keyword -> working-group names, in scan order.
///
/// Values are verbatim header cells. A group that matches a keyword twice
/// appears twice. Key order is irrelevant: keys are sorted at render time.
pub type KeywordMap = HashMap<String, Vec<String>>;

// =============================================================================
// Page Options
// =============================================================================

/// Explicit per-run options handed to the pivot and render stages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PageOptions {
    /// Generate the overview page (only `*`-marked keywords) instead of the
    /// detail page.
    pub overview: bool,
}

impl PageOptions {
    /// Options for the overview page.
    pub fn overview() -> Self {
        Self { overview: true }
    }

    /// Options for the detail page.
    pub fn detail() -> Self {
        Self { overview: false }
    }

    /// Human-readable name of the page being generated.
    pub fn page_name(&self) -> &'static str {
        if self.overview {
            "overview"
        } else {
            "detail"
        }
    }
}

// =============================================================================
// Rendered Entry
// =============================================================================

/// One keyword line of the page, borrowed from a [`KeywordMap`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordEntry<'a> {
    pub keyword: &'a str,
    pub groups: &'a [String],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_detail() {
        assert_eq!(PageOptions::default(), PageOptions::detail());
        assert_eq!(PageOptions::default().page_name(), "detail");
        assert_eq!(PageOptions::overview().page_name(), "overview");
    }

    #[test]
    fn test_entry_serializes_for_templates() {
        let groups = vec!["tls".to_string(), "quic".to_string()];
        let entry = KeywordEntry {
            keyword: "TLS",
            groups: &groups,
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["keyword"], "TLS");
        assert_eq!(value["groups"][1], "quic");
    }
}
