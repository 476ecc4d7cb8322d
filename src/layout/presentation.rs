//! # Presentation Plan
//!
//! Infinite-scroll looping and fade timing derived from the column partition.
//! None of this changes which column an item belongs to.

use serde::{Deserialize, Serialize};

use super::columns::distribute_into_columns;

/// Scroll animation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// How many times the list is repeated so a column can loop seamlessly
    pub loop_copies: usize,

    /// Floor for one full scroll cycle, in seconds
    pub min_duration_secs: u32,

    /// Seconds of scroll per item in the column
    pub secs_per_item: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            loop_copies: 3,
            min_duration_secs: 40,
            secs_per_item: 12,
        }
    }
}

impl ScrollConfig {
    /// Cycle duration for a column holding `item_count` items
    pub fn duration_for(&self, item_count: usize) -> u32 {
        let derived = u32::try_from(item_count)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.secs_per_item);
        derived.max(self.min_duration_secs)
    }
}

/// Scroll direction of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    Up,
    Down,
}

impl ScrollDirection {
    /// Even columns scroll up, odd columns scroll down
    pub fn for_column(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Up
        } else {
            Self::Down
        }
    }
}

/// An item placed in a scrolling column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollItem<T> {
    pub item: T,
    /// Set on every loop copy after the first occurrence
    pub duplicate: bool,
}

/// One scrolling column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollColumn<T> {
    pub items: Vec<ScrollItem<T>>,
    pub direction: ScrollDirection,
    pub duration_secs: u32,
}

/// Build scrolling columns from `items`.
///
/// The list is repeated `loop_copies` times and the repeated list is
/// partitioned round-robin, exactly like the static grid.
pub fn scroll_plan<T: Clone>(
    items: &[T],
    column_count: usize,
    config: &ScrollConfig,
) -> Vec<ScrollColumn<T>> {
    let copies = config.loop_copies.max(1);
    let looped: Vec<ScrollItem<T>> = (0..copies)
        .flat_map(|copy| {
            items.iter().map(move |item| ScrollItem {
                item: item.clone(),
                duplicate: copy > 0,
            })
        })
        .collect();

    distribute_into_columns(&looped, column_count)
        .into_iter()
        .enumerate()
        .map(|(index, items)| ScrollColumn {
            direction: ScrollDirection::for_column(index),
            duration_secs: config.duration_for(items.len()),
            items,
        })
        .collect()
}

/// Staggered fade-in delays in milliseconds: `i * step_ms`
pub fn fade_delays(count: usize, step_ms: u64) -> Vec<u64> {
    (0..count as u64).map(|i| i * step_ms).collect()
}
