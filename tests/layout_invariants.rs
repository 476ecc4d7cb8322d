//! Layout Invariant Tests
//!
//! Properties of the column partition:
//! - Every item appears exactly once, in its round-robin column
//! - Column lengths differ by at most one
//! - Order within a column follows input order
//! - Scroll plans partition the looped list the same way

use artfolio::layout::{
    column_count_for_width, distribute_into_columns, fade_delays, scroll_plan, Breakpoints,
    ScrollConfig, ScrollDirection,
};

// =============================================================================
// Partition
// =============================================================================

/// Concatenating column `c` entries by round-robin position restores the input.
#[test]
fn test_partition_is_lossless() {
    for len in 0..25usize {
        let items: Vec<usize> = (0..len).collect();
        for column_count in 1..=5 {
            let columns = distribute_into_columns(&items, column_count);
            assert_eq!(columns.len(), column_count);

            let total: usize = columns.iter().map(Vec::len).sum();
            assert_eq!(total, len);

            for (c, column) in columns.iter().enumerate() {
                for (row, item) in column.iter().enumerate() {
                    assert_eq!(*item, row * column_count + c);
                }
            }
        }
    }
}

/// Column heights (in items) are balanced.
#[test]
fn test_columns_are_balanced() {
    for len in 0..40usize {
        let items: Vec<usize> = (0..len).collect();
        for column_count in 1..=4 {
            let columns = distribute_into_columns(&items, column_count);
            let max = columns.iter().map(Vec::len).max().unwrap_or(0);
            let min = columns.iter().map(Vec::len).min().unwrap_or(0);
            assert!(max - min <= 1);
            // Earlier columns are never shorter than later ones
            assert!(columns.windows(2).all(|w| w[0].len() >= w[1].len()));
        }
    }
}

/// Zero columns behaves like one column.
#[test]
fn test_zero_columns() {
    let items = ["a", "b", "c"];
    assert_eq!(distribute_into_columns(&items, 0), vec![vec!["a", "b", "c"]]);
}

/// The input is not consumed or reordered.
#[test]
fn test_partition_is_pure() {
    let items = vec!["x".to_string(), "y".to_string(), "z".to_string()];
    let first = distribute_into_columns(&items, 2);
    let second = distribute_into_columns(&items, 2);
    assert_eq!(first, second);
    assert_eq!(items, vec!["x", "y", "z"]);
}

// =============================================================================
// Breakpoints
// =============================================================================

/// Column count never decreases as the viewport widens.
#[test]
fn test_column_count_is_monotonic() {
    let mut previous = 0;
    for width in (0..2000).step_by(7) {
        let count = column_count_for_width(width);
        assert!((1..=4).contains(&count));
        assert!(count >= previous);
        previous = count;
    }
}

/// Custom breakpoints shift the thresholds.
#[test]
fn test_custom_breakpoints() {
    let breakpoints = Breakpoints {
        sm: 500,
        lg: 900,
        xl: 1600,
    };
    assert_eq!(breakpoints.column_count(499), 1);
    assert_eq!(breakpoints.column_count(500), 2);
    assert_eq!(breakpoints.column_count(1280), 3);
    assert_eq!(breakpoints.column_count(1600), 4);
}

// =============================================================================
// Presentation
// =============================================================================

/// The scroll plan holds every item `loop_copies` times with alternating directions.
#[test]
fn test_scroll_plan_loops() {
    let items: Vec<u32> = (0..5).collect();
    let config = ScrollConfig::default();
    let plan = scroll_plan(&items, 2, &config);

    assert_eq!(plan.len(), 2);
    assert_eq!(plan[0].direction, ScrollDirection::Up);
    assert_eq!(plan[1].direction, ScrollDirection::Down);

    let total: usize = plan.iter().map(|c| c.items.len()).sum();
    assert_eq!(total, items.len() * config.loop_copies);

    let originals = plan
        .iter()
        .flat_map(|c| c.items.iter())
        .filter(|i| !i.duplicate)
        .count();
    assert_eq!(originals, items.len());

    for column in &plan {
        assert!(column.duration_secs >= config.min_duration_secs);
    }
}

/// Fade delays step evenly from zero.
#[test]
fn test_fade_delays() {
    assert_eq!(fade_delays(0, 100), Vec::<u64>::new());
    assert_eq!(fade_delays(4, 100), vec![0, 100, 200, 300]);
}
