#![forbid(unsafe_code)]

//! Region measurement capability.

use crate::geometry::Span;

/// The narrow capability a watched region must provide.
///
/// The monitor holds only a handle to the region; the region itself (a DOM
/// node, a layout box, a test double) stays owned by the host. `bounds`
/// returning `None` means the region is detached or otherwise unmeasurable
/// this tick; the monitor keeps the last cached interval and carries on
/// rather than faulting the tick.
pub trait RegionBounds {
    /// Current bounding interval in document coordinates, if measurable.
    fn bounds(&self) -> Option<Span>;
}

impl<T: RegionBounds + ?Sized> RegionBounds for &T {
    fn bounds(&self) -> Option<Span> {
        (**self).bounds()
    }
}

impl<T: RegionBounds + ?Sized> RegionBounds for std::rc::Rc<T> {
    fn bounds(&self) -> Option<Span> {
        (**self).bounds()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    struct FixedRegion(Span);

    impl RegionBounds for FixedRegion {
        fn bounds(&self) -> Option<Span> {
            Some(self.0)
        }
    }

    #[test]
    fn bounds_pass_through_rc_and_refs() {
        let region = Rc::new(FixedRegion(Span::new(10.0, 20.0)));
        assert_eq!(region.bounds(), Some(Span::new(10.0, 20.0)));
        assert_eq!((&*region).bounds(), Some(Span::new(10.0, 20.0)));
    }
}
