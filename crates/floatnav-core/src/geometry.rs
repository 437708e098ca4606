#![forbid(unsafe_code)]

//! Vertical-interval primitives.

/// A closed vertical interval in document coordinates.
///
/// `top` and `bottom` are both inclusive. A span with `top == bottom` is a
/// point region; a span with `bottom < top` is treated as empty by the
/// containment tests.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Span {
    /// Upper edge (inclusive).
    pub top: f64,
    /// Lower edge (inclusive).
    pub bottom: f64,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Height of the span.
    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Vertical midpoint of the span.
    #[inline]
    pub fn midpoint(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }

    /// Check if a coordinate lies within the span, inclusive on both ends.
    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y <= self.bottom
    }

    /// Loose overlap test: true iff either edge of `self` lies within
    /// `other`.
    ///
    /// This does NOT detect the case where `self` strictly contains `other`
    /// on both sides (both edges outside). The monitor's visibility test is
    /// defined in terms of this exact predicate, so the gap is part of the
    /// contract; see the regression test in `monitor.rs`.
    #[inline]
    pub fn touches(&self, other: &Span) -> bool {
        other.contains(self.top) || other.contains(self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::Span;

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let span = Span::new(100.0, 300.0);
        assert!(span.contains(100.0));
        assert!(span.contains(300.0));
        assert!(span.contains(200.0));
        assert!(!span.contains(99.9));
        assert!(!span.contains(300.1));
    }

    #[test]
    fn point_span_contains_only_itself() {
        let span = Span::new(50.0, 50.0);
        assert!(span.contains(50.0));
        assert!(!span.contains(50.5));
    }

    #[test]
    fn touches_when_one_edge_is_inside() {
        let viewport = Span::new(0.0, 400.0);
        assert!(Span::new(350.0, 500.0).touches(&viewport));
        assert!(Span::new(-100.0, 50.0).touches(&viewport));
        assert!(Span::new(100.0, 200.0).touches(&viewport));
    }

    #[test]
    fn touches_misses_disjoint_spans() {
        let viewport = Span::new(0.0, 400.0);
        assert!(!Span::new(500.0, 600.0).touches(&viewport));
        assert!(!Span::new(-300.0, -100.0).touches(&viewport));
    }

    #[test]
    fn touches_misses_strict_containment_of_other() {
        // Documented gap: a span that fully spans and exceeds the other on
        // both sides has neither edge inside, so the test reports false.
        let viewport = Span::new(100.0, 200.0);
        assert!(!Span::new(0.0, 1000.0).touches(&viewport));
    }

    #[test]
    fn height_and_midpoint() {
        let span = Span::new(100.0, 300.0);
        assert_eq!(span.height(), 200.0);
        assert_eq!(span.midpoint(), 200.0);
    }
}
