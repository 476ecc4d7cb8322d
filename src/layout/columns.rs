//! # Column Distribution

use serde::{Deserialize, Serialize};

/// Viewport width thresholds, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub sm: u32,
    pub lg: u32,
    pub xl: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            sm: 640,
            lg: 1024,
            xl: 1280,
        }
    }
}

impl Breakpoints {
    /// Step function from width to column count: 4 / 3 / 2 / 1.
    pub fn column_count(&self, width: u32) -> usize {
        if width >= self.xl {
            4
        } else if width >= self.lg {
            3
        } else if width >= self.sm {
            2
        } else {
            1
        }
    }
}

/// Column count for a viewport width using the default breakpoints
pub fn column_count_for_width(width: u32) -> usize {
    Breakpoints::default().column_count(width)
}

/// Partition `items` into `column_count` columns, round-robin by index.
///
/// Item `i` lands in column `i % column_count`; order within a column follows
/// input order. A column count of zero is treated as one. The input is never
/// mutated and the result depends only on the arguments.
pub fn distribute_into_columns<T: Clone>(items: &[T], column_count: usize) -> Vec<Vec<T>> {
    let column_count = column_count.max(1);
    let per_column = items.len().div_ceil(column_count);
    let mut columns: Vec<Vec<T>> = (0..column_count)
        .map(|_| Vec::with_capacity(per_column))
        .collect();

    for (index, item) in items.iter().enumerate() {
        columns[index % column_count].push(item.clone());
    }

    columns
}
