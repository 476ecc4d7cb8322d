//! # Viewport Observer
//!
//! Width source injected into layout consumers instead of reading a global.

use super::columns::Breakpoints;

/// Supplies the current viewport width
pub trait ViewportObserver {
    /// Width in CSS pixels
    fn width(&self) -> u32;
}

/// A viewport with a known width, e.g. reported by a client request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedViewport(pub u32);

impl ViewportObserver for FixedViewport {
    fn width(&self) -> u32 {
        self.0
    }
}

/// Column count for whatever the observer currently reports
pub fn columns_for_viewport<V: ViewportObserver + ?Sized>(
    viewport: &V,
    breakpoints: &Breakpoints,
) -> usize {
    breakpoints.column_count(viewport.width())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct ResizingViewport {
        width: Cell<u32>,
    }

    impl ViewportObserver for ResizingViewport {
        fn width(&self) -> u32 {
            self.width.get()
        }
    }

    #[test]
    fn test_fixed_viewport() {
        let breakpoints = Breakpoints::default();
        assert_eq!(columns_for_viewport(&FixedViewport(1300), &breakpoints), 4);
        assert_eq!(columns_for_viewport(&FixedViewport(320), &breakpoints), 1);
    }

    #[test]
    fn test_recomputed_after_resize() {
        let breakpoints = Breakpoints::default();
        let viewport = ResizingViewport {
            width: Cell::new(700),
        };
        assert_eq!(columns_for_viewport(&viewport, &breakpoints), 2);

        viewport.width.set(1100);
        assert_eq!(columns_for_viewport(&viewport, &breakpoints), 3);
    }
}
