//! Markdown rendering for assistant answers.
//!
//! Pure function of the message text: no DOM access, the caller injects the
//! returned HTML. Raw HTML inside an answer is rendered as escaped text.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let scheme = url.trim_start().to_ascii_lowercase();
    if scheme.starts_with("javascript:") || scheme.starts_with("data:") || scheme.starts_with("vbscript:") {
        CowStr::Borrowed("#")
    } else {
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_and_emphasis() {
        let html = render_markdown("Треба да се **пријавите** во *рок* од 30 дена.");
        assert!(html.starts_with("<p>"));
        assert!(html.contains("<strong>пријавите</strong>"));
        assert!(html.contains("<em>рок</em>"));
    }

    #[test]
    fn test_lists() {
        let html = render_markdown("Потребни документи:\n\n- лична карта\n- уверение\n\n1. прво\n2. второ");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>лична карта</li>"));
        assert!(html.contains("<ol>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("<script>alert(1)</script>\n\nтекст <b>тука</b>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_script_links_are_neutralized() {
        let html = render_markdown("[клик](javascript:alert(1)) и [закон](https://zdravstvo.gov.mk)");
        assert!(!html.contains("javascript:"));
        assert!(html.contains("href=\"#\""));
        assert!(html.contains("href=\"https://zdravstvo.gov.mk\""));
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(render_markdown("Да."), "<p>Да.</p>\n");
        assert_eq!(render_markdown(""), "");
    }
}
