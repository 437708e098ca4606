#![forbid(unsafe_code)]

//! Viewport capability contract and per-tick metrics.
//!
//! The monitor never talks to a real scrolling surface directly; it reads
//! everything through [`ViewportSource`]. Hosts implement the trait over
//! whatever backs their single top-level viewport, and forward scroll and
//! resize notifications as [`Notice`] values.

use crate::geometry::Span;

/// Capability contract the monitor requires from its environment.
///
/// All measurements are in document coordinates. Implementations are
/// expected to be cheap; the monitor calls them on every notification.
pub trait ViewportSource {
    /// Current scroll offset of the viewport.
    fn scroll_offset(&self) -> f64;

    /// Visible height of the viewport.
    fn viewport_height(&self) -> f64;

    /// Total scrollable extent of the document.
    fn document_extent(&self) -> f64;

    /// Whether the source is currently backed by a real viewport.
    ///
    /// A headless host returns `false`; monitor construction fails fast
    /// rather than ticking against zeroed metrics.
    fn is_attached(&self) -> bool {
        true
    }
}

impl<T: ViewportSource + ?Sized> ViewportSource for &T {
    fn scroll_offset(&self) -> f64 {
        (**self).scroll_offset()
    }

    fn viewport_height(&self) -> f64 {
        (**self).viewport_height()
    }

    fn document_extent(&self) -> f64 {
        (**self).document_extent()
    }

    fn is_attached(&self) -> bool {
        (**self).is_attached()
    }
}

/// The notification kinds a host forwards into the monitor.
///
/// Both trigger the identical full recomputation; the distinction exists
/// for tracing and host-side bookkeeping only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The viewport scrolled.
    Scrolled,
    /// The viewport was resized.
    Resized,
}

/// Snapshot of the viewport taken at the start of a tick.
///
/// Derived, ephemeral, recomputed from scratch each tick; never partially
/// mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    /// Scroll offset (upper edge of the visible slice).
    pub viewport_top: f64,
    /// Lower edge of the visible slice.
    pub viewport_bottom: f64,
    /// Total scrollable extent.
    pub document_height: f64,
    /// Viewport midpoint shifted by the configured middle offset.
    pub middle_line: f64,
}

impl ViewportMetrics {
    /// Capture a fresh snapshot from the source.
    pub fn capture<V: ViewportSource>(source: &V, middle_offset: f64) -> Self {
        let viewport_top = source.scroll_offset();
        let viewport_bottom = viewport_top + source.viewport_height();
        Self {
            viewport_top,
            viewport_bottom,
            document_height: source.document_extent(),
            middle_line: (viewport_top + viewport_bottom) / 2.0 + middle_offset,
        }
    }

    /// The visible slice as a span.
    #[inline]
    pub fn viewport_span(&self) -> Span {
        Span::new(self.viewport_top, self.viewport_bottom)
    }

    /// Whether the viewport sits at the top of the document.
    #[inline]
    pub fn at_top(&self) -> bool {
        self.viewport_top <= 0.0
    }

    /// Whether the viewport reaches the bottom of the document.
    #[inline]
    pub fn at_bottom(&self) -> bool {
        self.viewport_bottom >= self.document_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedViewport {
        scroll: f64,
        height: f64,
        extent: f64,
    }

    impl ViewportSource for FixedViewport {
        fn scroll_offset(&self) -> f64 {
            self.scroll
        }

        fn viewport_height(&self) -> f64 {
            self.height
        }

        fn document_extent(&self) -> f64 {
            self.extent
        }
    }

    #[test]
    fn capture_derives_bottom_and_middle() {
        let source = FixedViewport {
            scroll: 100.0,
            height: 400.0,
            extent: 2000.0,
        };
        let metrics = ViewportMetrics::capture(&source, 0.0);
        assert_eq!(metrics.viewport_top, 100.0);
        assert_eq!(metrics.viewport_bottom, 500.0);
        assert_eq!(metrics.document_height, 2000.0);
        assert_eq!(metrics.middle_line, 300.0);
    }

    #[test]
    fn middle_offset_shifts_the_middle_line() {
        let source = FixedViewport {
            scroll: 0.0,
            height: 400.0,
            extent: 2000.0,
        };
        let metrics = ViewportMetrics::capture(&source, 50.0);
        assert_eq!(metrics.middle_line, 250.0);
    }

    #[test]
    fn edge_predicates() {
        let source = FixedViewport {
            scroll: 0.0,
            height: 800.0,
            extent: 800.0,
        };
        let metrics = ViewportMetrics::capture(&source, 0.0);
        // Document no taller than the viewport: both edges hold at once.
        assert!(metrics.at_top());
        assert!(metrics.at_bottom());

        let source = FixedViewport {
            scroll: 10.0,
            height: 800.0,
            extent: 2000.0,
        };
        let metrics = ViewportMetrics::capture(&source, 0.0);
        assert!(!metrics.at_top());
        assert!(!metrics.at_bottom());
    }

    #[test]
    fn sources_are_usable_behind_references() {
        let source = FixedViewport {
            scroll: 0.0,
            height: 100.0,
            extent: 100.0,
        };
        let by_ref: &dyn ViewportSource = &source;
        assert!(by_ref.is_attached());
        assert_eq!(by_ref.document_extent(), 100.0);
        let metrics = ViewportMetrics::capture(&by_ref, 0.0);
        assert_eq!(metrics.viewport_bottom, 100.0);
    }
}
