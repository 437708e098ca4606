#![forbid(unsafe_code)]

//! Panel markup rendering.
//!
//! Produces the floating panel's inner markup from a collected anchor
//! list: one navigation link per anchor, an optional go-to-top link, and a
//! close control. The host's click wiring keys off the `data-role`
//! attributes.

use std::fmt::Write;

use crate::anchors::Anchor;

/// Markup configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkupConfig {
    /// Whether to append the go-to-top link.
    pub goto_top: bool,
    /// Text of the go-to-top link.
    pub top_text: String,
    /// Prefix for every generated class name.
    pub class_prefix: String,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            goto_top: true,
            top_text: "Back to top".to_string(),
            class_prefix: "floatnav".to_string(),
        }
    }
}

/// Render the panel's inner markup.
pub fn render_markup(anchors: &[Anchor], config: &MarkupConfig) -> String {
    let prefix = &config.class_prefix;
    let mut out = String::new();

    let _ = writeln!(out, r#"<ul class="{prefix}-list">"#);
    for anchor in anchors {
        let _ = writeln!(
            out,
            r##"<li><a class="{prefix}-item" href="#{id}">{title}</a></li>"##,
            id = escape(&anchor.id),
            title = escape(&anchor.title),
        );
    }
    let _ = writeln!(out, "</ul>");

    if config.goto_top {
        let _ = writeln!(
            out,
            r##"<a class="{prefix}-top" data-role="goTop" href="#">{text}</a>"##,
            text = escape(&config.top_text),
        );
    }
    let _ = writeln!(
        out,
        r##"<a class="{prefix}-close" data-role="close" href="#">&#215;</a>"##,
    );
    out
}

/// Minimal HTML escape for text and attribute positions.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(id: &str, title: &str) -> Anchor {
        Anchor {
            id: id.to_string(),
            title: title.to_string(),
        }
    }

    #[test]
    fn links_appear_in_anchor_order() {
        let markup = render_markup(
            &[anchor("intro", "Intro"), anchor("usage", "Usage")],
            &MarkupConfig::default(),
        );
        let intro = markup.find(r##"href="#intro""##).expect("intro link");
        let usage = markup.find(r##"href="#usage""##).expect("usage link");
        assert!(intro < usage);
    }

    #[test]
    fn goto_top_can_be_disabled() {
        let config = MarkupConfig {
            goto_top: false,
            ..MarkupConfig::default()
        };
        let markup = render_markup(&[], &config);
        assert!(!markup.contains("goTop"));
        // The close control is always present.
        assert!(markup.contains(r#"data-role="close""#));
    }

    #[test]
    fn custom_prefix_and_top_text() {
        let config = MarkupConfig {
            top_text: "Up".to_string(),
            class_prefix: "toc".to_string(),
            ..MarkupConfig::default()
        };
        let markup = render_markup(&[anchor("a", "A")], &config);
        assert!(markup.contains(r#"class="toc-list""#));
        assert!(markup.contains(r#"class="toc-item""#));
        assert!(markup.contains(">Up</a>"));
    }

    #[test]
    fn titles_and_ids_are_escaped() {
        let markup = render_markup(
            &[anchor(r#"a"b"#, "Fish & <Chips>")],
            &MarkupConfig::default(),
        );
        assert!(markup.contains("Fish &amp; &lt;Chips&gt;"));
        assert!(markup.contains("#a&quot;b"));
        assert!(!markup.contains(r#"#a"b"#));
    }
}
