//! Markdown Rendering
//!
//! Idea descriptions and staff responses are user-authored markdown.
//! Raw HTML in the source is escaped, never passed through.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser};

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

/// Render markdown to HTML safe for `inner_html`
pub fn render_markdown(text: &str) -> String {
    let events = Parser::new_ext(text, get_options()).map(|event| match event {
        Event::Html(html) | Event::InlineHtml(html) => Event::Text(html),
        Event::Start(pulldown_cmark::Tag::Link { link_type, dest_url, title, id }) => {
            Event::Start(pulldown_cmark::Tag::Link {
                link_type,
                dest_url: safe_url(dest_url),
                title,
                id,
            })
        }
        Event::Start(pulldown_cmark::Tag::Image { link_type, dest_url, title, id }) => {
            Event::Start(pulldown_cmark::Tag::Image {
                link_type,
                dest_url: safe_url(dest_url),
                title,
                id,
            })
        }
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, events);
    html_output
}

/// Render for inline use (strips the outer <p> tags)
pub fn render_markdown_inline(text: &str) -> String {
    let html = render_markdown(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

/// Drop script-capable link targets
fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let lowered = url.trim().to_ascii_lowercase();
    if lowered.starts_with("javascript:") || lowered.starts_with("vbscript:") || lowered.starts_with("data:") {
        CowStr::from("#")
    } else {
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markdown() {
        let html = render_markdown("**bold** and ~~gone~~");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_javascript_links_are_neutralized() {
        let html = render_markdown("[click](javascript:alert(1))");
        assert!(html.contains(r##"href="#""##));
        let ok = render_markdown("[docs](https://example.com)");
        assert!(ok.contains(r#"href="https://example.com""#));
    }

    #[test]
    fn test_inline_strips_paragraph() {
        assert_eq!(render_markdown_inline("*hi*"), "<em>hi</em>");
    }
}
