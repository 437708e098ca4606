#![forbid(unsafe_code)]

//! Anchor-list building: heading scan to `{id, title}` pairs.
//!
//! Purely derivative, no state: the host scans its content root, this
//! module filters and normalizes.

/// One heading-like element as reported by the host's scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// The element's anchor id, if it has one.
    pub id: Option<String>,
    /// Explicit title attribute, if present.
    pub title: Option<String>,
    /// The element's text content.
    pub text: String,
}

/// Capability contract for scanning a content root.
///
/// Implementations return headings matching `selector` in document order.
pub trait HeadingSource {
    fn headings(&self, selector: &str) -> Vec<Heading>;
}

/// A navigation anchor: a linkable id plus its display title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub id: String,
    pub title: String,
}

/// Collect the ordered anchor list for a selector.
///
/// The title falls back to the element text when no explicit title
/// attribute is present. Headings without an id are skipped; they cannot
/// be linked.
pub fn collect_anchors<S: HeadingSource>(source: &S, selector: &str) -> Vec<Anchor> {
    source
        .headings(selector)
        .into_iter()
        .filter_map(|heading| {
            let id = heading.id?;
            let title = heading.title.unwrap_or(heading.text);
            Some(Anchor { id, title })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedHeadings(Vec<Heading>);

    impl HeadingSource for FixedHeadings {
        fn headings(&self, _selector: &str) -> Vec<Heading> {
            self.0.clone()
        }
    }

    fn heading(id: Option<&str>, title: Option<&str>, text: &str) -> Heading {
        Heading {
            id: id.map(str::to_string),
            title: title.map(str::to_string),
            text: text.to_string(),
        }
    }

    #[test]
    fn title_attribute_wins_over_text() {
        let source = FixedHeadings(vec![heading(Some("intro"), Some("Overview"), "1. Intro")]);
        let anchors = collect_anchors(&source, "h2");
        assert_eq!(
            anchors,
            vec![Anchor {
                id: "intro".into(),
                title: "Overview".into(),
            }]
        );
    }

    #[test]
    fn text_is_the_fallback_title() {
        let source = FixedHeadings(vec![heading(Some("usage"), None, "Usage")]);
        let anchors = collect_anchors(&source, "h2");
        assert_eq!(anchors[0].title, "Usage");
    }

    #[test]
    fn headings_without_an_id_are_skipped() {
        let source = FixedHeadings(vec![
            heading(Some("a"), None, "A"),
            heading(None, Some("no anchor"), "B"),
            heading(Some("c"), None, "C"),
        ]);
        let anchors = collect_anchors(&source, "h2");
        let ids: Vec<_> = anchors.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn document_order_is_preserved() {
        let source = FixedHeadings(vec![
            heading(Some("z"), None, "Z"),
            heading(Some("m"), None, "M"),
            heading(Some("a"), None, "A"),
        ]);
        let ids: Vec<_> = collect_anchors(&source, "h2")
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec!["z", "m", "a"]);
    }
}
