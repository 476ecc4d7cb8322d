//! # Responsive Column Layout
//!
//! Turns an ordered artwork list into per-column sequences for masonry and
//! scrolling galleries.
//!
//! - [`column_count_for_width`] is the only place breakpoints are applied.
//! - [`distribute_into_columns`] is a pure round-robin partition; it is
//!   recomputed whenever the list or the breakpoint changes.
//! - [`scroll_plan`] and [`fade_delays`] are presentation parameters layered
//!   on top of the same partition.

pub mod columns;
pub mod presentation;
pub mod viewport;

pub use columns::{column_count_for_width, distribute_into_columns, Breakpoints};
pub use presentation::{
    fade_delays, scroll_plan, ScrollColumn, ScrollConfig, ScrollDirection, ScrollItem,
};
pub use viewport::{columns_for_viewport, FixedViewport, ViewportObserver};
