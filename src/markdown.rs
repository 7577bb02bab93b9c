//! Markdown Rendering
//!
//! Assistant replies (backend reasoning and the fixed error copy) are
//! markdown. They are rendered to HTML here so every front end shows the
//! same thing.

use pulldown_cmark::{html, Event, Options, Parser};

/// Render a reply body to HTML.
///
/// Raw HTML in the input is emitted as escaped text, so the output is safe
/// to set as `innerHTML`.
pub fn render_markdown(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::CONNECTION_ERROR;

    #[test]
    fn test_emphasis_and_lists() {
        let html = render_markdown("**False.** Sources:\n\n- WHO\n- PIB Fact Check");
        assert!(html.contains("<strong>False.</strong>"));
        assert!(html.contains("<li>WHO</li>"));
        assert!(html.contains("<li>PIB Fact Check</li>"));
    }

    #[test]
    fn test_error_copy_has_no_literal_markers() {
        let html = render_markdown(CONNECTION_ERROR);
        assert!(html.contains("<strong>Connection Error</strong>"));
        assert!(!html.contains("**"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("Claim <script>alert(1)</script> is false");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_plain_text_is_one_paragraph() {
        assert_eq!(render_markdown("No match found"), "<p>No match found</p>\n");
    }
}
