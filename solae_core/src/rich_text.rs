//! Inline rich text as structured spans.
//!
//! Content is written with two markers: `**strong**` and `[text](href)`.
//! Parsing never fails. A marker without its closing half stays in the
//! output as literal text, and links are only kept for `mailto:`, `https://`
//! and `http://` targets. The result is rendered element by element, so no
//! content string ever reaches the page as raw HTML.

use serde::Deserialize;

/// One run of inline text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Strong(String),
    Link { text: String, href: String },
}

/// A paragraph of inline spans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub struct RichText(Vec<Span>);

const SAFE_SCHEMES: [&str; 3] = ["mailto:", "https://", "http://"];

impl RichText {
    /// Parse inline markup into spans.
    pub fn parse(source: &str) -> Self {
        let mut spans = Vec::new();
        let mut plain = String::new();
        let mut rest = source;

        while let Some(pos) = rest.find(['*', '[']) {
            let (before, tail) = rest.split_at(pos);
            plain.push_str(before);

            match strong(tail).or_else(|| link(tail)) {
                Some((Span::Plain(text), remaining)) => {
                    plain.push_str(&text);
                    rest = remaining;
                }
                Some((span, remaining)) => {
                    flush(&mut spans, &mut plain);
                    spans.push(span);
                    rest = remaining;
                }
                None => {
                    // both markers are single-byte ASCII
                    plain.push_str(&tail[..1]);
                    rest = &tail[1..];
                }
            }
        }

        plain.push_str(rest);
        flush(&mut spans, &mut plain);
        Self(spans)
    }

    pub fn spans(&self) -> &[Span] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Text content with all markup dropped.
    pub fn plain_text(&self) -> String {
        self.0
            .iter()
            .map(|span| match span {
                Span::Plain(text) | Span::Strong(text) => text.as_str(),
                Span::Link { text, .. } => text.as_str(),
            })
            .collect()
    }
}

impl From<String> for RichText {
    fn from(source: String) -> Self {
        Self::parse(&source)
    }
}

impl From<&str> for RichText {
    fn from(source: &str) -> Self {
        Self::parse(source)
    }
}

fn flush(spans: &mut Vec<Span>, plain: &mut String) {
    if !plain.is_empty() {
        spans.push(Span::Plain(std::mem::take(plain)));
    }
}

fn strong(tail: &str) -> Option<(Span, &str)> {
    let inner = tail.strip_prefix("**")?;
    let end = inner.find("**")?;
    let text = &inner[..end];
    if text.is_empty() {
        return None;
    }
    Some((Span::Strong(text.to_owned()), &inner[end + 2..]))
}

fn link(tail: &str) -> Option<(Span, &str)> {
    let inner = tail.strip_prefix('[')?;
    let close = inner.find("](")?;
    let text = &inner[..close];
    if text.is_empty() || text.contains('[') {
        return None;
    }
    let after = &inner[close + 2..];
    let end = after.find(')')?;
    let href = after[..end].trim();
    let remaining = &after[end + 1..];

    let span = if is_safe_href(href) {
        Span::Link {
            text: text.to_owned(),
            href: href.to_owned(),
        }
    } else {
        tracing::warn!(href, "dropping link with unsupported scheme");
        Span::Plain(text.to_owned())
    };
    Some((span, remaining))
}

/// Whether `href` uses a scheme the page is willing to link to.
pub fn is_safe_href(href: &str) -> bool {
    let lower = href.to_ascii_lowercase();
    SAFE_SCHEMES
        .iter()
        .any(|scheme| lower.starts_with(scheme) && lower.len() > scheme.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn plain(s: &str) -> Span {
        Span::Plain(s.into())
    }

    fn strong(s: &str) -> Span {
        Span::Strong(s.into())
    }

    #[test]
    fn parses_strong_runs() {
        let text = RichText::parse("We build **automated systems** for **billing**.");
        assert_eq!(
            text.spans(),
            &[
                plain("We build "),
                strong("automated systems"),
                plain(" for "),
                strong("billing"),
                plain("."),
            ]
        );
    }

    #[test]
    fn parses_mailto_link() {
        let text = RichText::parse("Always hiring. [Send us a note](mailto:hello@solae.app).");
        assert_eq!(
            text.spans(),
            &[
                plain("Always hiring. "),
                Span::Link {
                    text: "Send us a note".into(),
                    href: "mailto:hello@solae.app".into(),
                },
                plain("."),
            ]
        );
    }

    #[test]
    fn unbalanced_markers_stay_literal() {
        let text = RichText::parse("5 * 3 = **fifteen and [not a link");
        assert_eq!(text.spans(), &[plain("5 * 3 = **fifteen and [not a link")]);
    }

    #[test]
    fn empty_strong_is_literal() {
        let text = RichText::parse("a **** b");
        assert_eq!(text.plain_text(), "a **** b");
        assert!(text.spans().iter().all(|s| matches!(s, Span::Plain(_))));
    }

    #[test]
    fn unsafe_links_degrade_to_text() {
        let text = RichText::parse("click [here](javascript:alert(1)) now");
        // the first ")" closes the link, the payload's own ")" stays as text
        assert_eq!(text.spans(), &[plain("click here) now")]);
        let text = RichText::parse("[x](data:text/html,hi)");
        assert_eq!(text.spans(), &[plain("x")]);
    }

    #[test]
    fn markup_characters_are_never_interpreted() {
        let text = RichText::parse("<strong>raw</strong> & <script>");
        assert_eq!(text.spans(), &[plain("<strong>raw</strong> & <script>")]);
    }

    #[test]
    fn handles_multibyte_text_around_markers() {
        let text = RichText::parse("flows—then **monitors** “as you scale”");
        assert_eq!(text.plain_text(), "flows—then monitors “as you scale”");
        assert_eq!(text.spans().len(), 3);
    }

    #[test]
    fn safe_href_schemes() {
        assert!(is_safe_href("https://www.linkedin.com/company/x/"));
        assert!(is_safe_href("MAILTO:a@b.c"));
        assert!(!is_safe_href("https://"));
        assert!(!is_safe_href("ftp://example.com"));
        assert!(!is_safe_href("/relative"));
    }

    #[test]
    fn deserializes_from_string() {
        #[derive(Deserialize)]
        struct Doc {
            text: RichText,
        }
        let doc: Doc = toml::from_str(r#"text = "a **b** c""#).expect("valid toml");
        assert_eq!(doc.text.spans(), &[plain("a "), strong("b"), plain(" c")]);
    }
}
