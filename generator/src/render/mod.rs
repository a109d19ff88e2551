//! HTML page rendering.
//!
//! The page is one of two fixed headers followed by a shared body listing
//! every keyword with links to its working groups on the IETF datatracker.
//! Templates are embedded at compile time from the `templates/` directory:
//!
//! - `overview_header.html.hbs` - intro for the high-level page
//! - `detail_header.html.hbs` - intro for the full page
//! - `body.html.hbs` - keyword list and footer
//!
//! Substituted text is HTML-escaped by Handlebars.

use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use crate::error::RenderResult;
use crate::models::{KeywordEntry, KeywordMap, PageOptions};

const OVERVIEW_TEMPLATE: &str = "overview";
const DETAIL_TEMPLATE: &str = "detail";

const OVERVIEW_PAGE: &str = concat!(
    include_str!("../../templates/overview_header.html.hbs"),
    include_str!("../../templates/body.html.hbs"),
);

const DETAIL_PAGE: &str = concat!(
    include_str!("../../templates/detail_header.html.hbs"),
    include_str!("../../templates/body.html.hbs"),
);

/// Data handed to the page templates.
#[derive(Debug, Serialize)]
struct PageContext<'a> {
    entries: Vec<KeywordEntry<'a>>,
}

/// Compiled page templates.
pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Renderer {
    /// Compile both page variants. Fails only if an embedded template is
    /// malformed.
    pub fn new() -> RenderResult<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_template_string(OVERVIEW_TEMPLATE, OVERVIEW_PAGE)?;
        registry.register_template_string(DETAIL_TEMPLATE, DETAIL_PAGE)?;

        Ok(Self { registry })
    }

    /// Render the page into a string.
    pub fn render(&self, keywords: &KeywordMap, options: &PageOptions) -> RenderResult<String> {
        let context = PageContext {
            entries: sorted_entries(keywords),
        };
        debug!(page = options.page_name(), "Rendering {} keywords", context.entries.len());

        Ok(self.registry.render(template_name(options), &context)?)
    }
}

fn template_name(options: &PageOptions) -> &'static str {
    if options.overview {
        OVERVIEW_TEMPLATE
    } else {
        DETAIL_TEMPLATE
    }
}

/// Keywords in ascending codepoint order, each with its working groups in
/// mapping order.
pub fn sorted_entries(keywords: &KeywordMap) -> Vec<KeywordEntry<'_>> {
    let mut entries: Vec<KeywordEntry<'_>> = keywords
        .iter()
        .map(|(keyword, groups)| KeywordEntry {
            keyword: keyword.as_str(),
            groups: groups.as_slice(),
        })
        .collect();

    entries.sort_by(|a, b| a.keyword.cmp(b.keyword));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: Vec<(&str, Vec<&str>)>) -> KeywordMap {
        entries
            .into_iter()
            .map(|(k, groups)| {
                (
                    k.to_string(),
                    groups.iter().map(|g| g.to_string()).collect(),
                )
            })
            .collect()
    }

    fn link(group: &str) -> String {
        format!(
            "<a href=\"https://datatracker.ietf.org/wg/{}/about/\">{}</a>",
            group, group
        )
    }

    #[test]
    fn test_sorted_entries_codepoint_order() {
        let keywords = map(vec![("Zeta", vec!["a"]), ("alpha", vec!["b"]), ("Mu", vec!["c"]), ("BGP", vec!["d"])]);
        let order: Vec<&str> = sorted_entries(&keywords).iter().map(|e| e.keyword).collect();

        assert_eq!(order, vec!["BGP", "Mu", "Zeta", "alpha"]);
    }

    #[test]
    fn test_groups_keep_mapping_order() {
        let keywords = map(vec![("TLS", vec!["tls", "quic", "emu"])]);
        let entries = sorted_entries(&keywords);

        assert_eq!(entries[0].groups, ["tls", "quic", "emu"]);
    }

    #[test]
    fn test_render_lists_keywords_in_order() {
        let keywords = map(vec![("Routing", vec!["idr"]), ("DNS", vec!["dnsop"]), ("Multicast", vec!["pim"])]);
        let html = Renderer::new().unwrap().render(&keywords, &PageOptions::detail()).unwrap();

        let dns = html.find("<b>DNS</b>").unwrap();
        let multicast = html.find("<b>Multicast</b>").unwrap();
        let routing = html.find("<b>Routing</b>").unwrap();
        assert!(dns < multicast && multicast < routing);
    }

    #[test]
    fn test_render_comma_separated_links() {
        let keywords = map(vec![("TLS", vec!["tls", "quic"])]);
        let html = Renderer::new().unwrap().render(&keywords, &PageOptions::detail()).unwrap();

        let expected = format!(" {}, {}", link("tls"), link("quic"));
        assert!(html.contains(&expected), "missing links in:\n{}", html);
        assert!(!html.contains(&format!(", {}", link("tls"))));
    }

    #[test]
    fn test_render_empty_mapping() {
        let html = Renderer::new()
            .unwrap()
            .render(&KeywordMap::new(), &PageOptions::detail())
            .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
        assert!(html.contains("<ul>"));
        assert!(html.contains("</ul>"));
        assert!(!html.contains("<li>"));
    }

    #[test]
    fn test_header_follows_mode() {
        let renderer = Renderer::new().unwrap();
        let keywords = map(vec![("QUIC", vec!["quic"])]);

        let overview = renderer.render(&keywords, &PageOptions::overview()).unwrap();
        assert!(overview.contains("<h1>Overview Keywords</h1>"));
        assert!(overview.contains("href=\"page.html\""));

        let detail = renderer.render(&keywords, &PageOptions::detail()).unwrap();
        assert!(detail.contains("<h1>Detail Keywords</h1>"));
        assert!(detail.contains("href=\"index.html\""));

        for html in [&overview, &detail] {
            assert!(html.contains("wagtail.css"));
            assert!(html.contains("body body-panel clearfix"));
            assert!(html.contains(&link("quic")));
        }
    }

    #[test]
    fn test_render_escapes_html() {
        let keywords = map(vec![("Ops & <Mgmt>", vec!["opsawg"])]);
        let html = Renderer::new().unwrap().render(&keywords, &PageOptions::detail()).unwrap();

        assert!(html.contains("<b>Ops &amp; &lt;Mgmt&gt;</b>"));
    }
}
