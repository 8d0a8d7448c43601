// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{SortAlgorithm, SortTraceBuilder, StepEffect, StepTag};

/// Lomuto partition with the last element as pivot. Elements strictly less than the
/// pivot go left, equal ones stay right. Ranges of one element are marked sorted in
/// place instead of recursing.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl SortAlgorithm for QuickSort {
    fn run(&self, builder: &mut SortTraceBuilder) {
        let n = builder.len();
        if n == 0 {
            return;
        }

        builder.note("Starting Quick Sort Algorithm...", StepTag::Phase);
        builder.note(
            format!("Initial Array: [{}]", join_range(builder, 0, n - 1)),
            StepTag::Info,
        );

        if n > 1 {
            sort_range(builder, 0, n - 1, 0);
        }
    }
}

/// Sort `low..=high`, which always holds at least two elements.
fn sort_range(builder: &mut SortTraceBuilder, low: usize, high: usize, depth: usize) {
    let indent = "  ".repeat(depth);

    builder.push(
        format!(
            "{indent}QuickSort({low}, {high}) - Working on [{}]",
            join_range(builder, low, high)
        ),
        StepTag::Phase,
        StepEffect::EnterPartition { low, high, depth },
    );

    let pivot_index = partition(builder, low, high, &indent);
    let pivot = builder.get(pivot_index);

    builder.push(
        format!("{indent}Pivot {pivot} placed at position {pivot_index}"),
        StepTag::Sorted,
        StepEffect::MarkSorted {
            from: pivot_index,
            to: pivot_index,
        },
    );

    let has_left = pivot_index > low;
    let has_right = pivot_index < high;
    if has_left || has_right {
        let left = if has_left {
            join_range(builder, low, pivot_index - 1)
        } else {
            "none".to_string()
        };
        let right = if has_right {
            join_range(builder, pivot_index + 1, high)
        } else {
            "none".to_string()
        };
        builder.note(
            format!("{indent}Left: [{left}] | Pivot: {pivot} | Right: [{right}]"),
            StepTag::Info,
        );
    }

    if pivot_index > low + 1 {
        builder.note(
            format!("{indent}Going LEFT to sort [{low}...{}]", pivot_index - 1),
            StepTag::Recurse,
        );
        sort_range(builder, low, pivot_index - 1, depth + 1);
    } else if pivot_index == low + 1 {
        mark_single(builder, low, &indent);
    }

    if pivot_index + 1 < high {
        builder.note(
            format!("{indent}Going RIGHT to sort [{}...{high}]", pivot_index + 1),
            StepTag::Recurse,
        );
        sort_range(builder, pivot_index + 1, high, depth + 1);
    } else if pivot_index + 1 == high {
        mark_single(builder, high, &indent);
    }

    builder.push(
        format!("{indent}Completed range [{low}...{high}]"),
        StepTag::Sorted,
        StepEffect::LeavePartition { depth },
    );
}

/// Returns the final position of the pivot.
fn partition(
    builder: &mut SortTraceBuilder,
    low: usize,
    high: usize,
    indent: &str,
) -> usize {
    let pivot = builder.get(high);
    builder.push(
        format!("{indent}  Partition: Pivot = arr[{high}] = {pivot}"),
        StepTag::Partition,
        StepEffect::PickPivot { index: high },
    );

    // Next slot of the left partition, the textbook `i` is `store - 1`.
    let mut store = low;
    builder.note(
        format!(
            "{indent}  Partition index i = {}",
            partition_index_label(store)
        ),
        StepTag::Partition,
    );

    for j in low..high {
        let value = builder.get(j);
        builder.push(
            format!("{indent}    arr[{j}]={value} vs pivot={pivot}"),
            StepTag::Compare,
            StepEffect::ComparePivot {
                index: j,
                pivot_index: high,
            },
        );

        if builder.compare(j, high).is_lt() {
            if store == j {
                builder.note(
                    format!("{indent}    {value} < {pivot}: Already in position"),
                    StepTag::Info,
                );
            } else {
                builder.push(
                    format!(
                        "{indent}    {value} < {pivot}: Move to left partition (i={store})"
                    ),
                    StepTag::Swap,
                    StepEffect::Swap { a: store, b: j },
                );
            }
            store += 1;
        } else {
            builder.note(
                format!("{indent}    {value} ≥ {pivot}: Stay in right partition"),
                StepTag::Info,
            );
        }
    }

    let text = format!("{indent}  Final step: Place pivot at position {store}");
    if store == high {
        builder.note(text, StepTag::Partition);
    } else {
        builder.push(
            text,
            StepTag::Partition,
            StepEffect::Swap { a: store, b: high },
        );
    }

    store
}

fn mark_single(builder: &mut SortTraceBuilder, index: usize, indent: &str) {
    builder.push(
        format!("{indent}  Single element at {index} is sorted"),
        StepTag::Sorted,
        StepEffect::MarkSorted {
            from: index,
            to: index,
        },
    );
}

fn partition_index_label(store: usize) -> String {
    match store.checked_sub(1) {
        Some(it) => it.to_string(),
        None => "-1".to_string(),
    }
}

fn join_range(builder: &SortTraceBuilder, low: usize, high: usize) -> String {
    builder.array().as_slice()[low..=high]
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use crate::{SortKind, StepEffect, StepTag, assert_eq2, run_sort};

    #[test]
    fn test_partition_trace() {
        let trace = run_sort(SortKind::Quick, &[3, 1, 2]);
        assert_eq2!(trace.sorted, vec![1, 2, 3]);
        assert_eq2!(
            trace.steps.texts(),
            vec![
                "Starting Quick Sort Algorithm...",
                "Initial Array: [3, 1, 2]",
                "QuickSort(0, 2) - Working on [3, 1, 2]",
                "  Partition: Pivot = arr[2] = 2",
                "  Partition index i = -1",
                "    arr[0]=3 vs pivot=2",
                "    3 ≥ 2: Stay in right partition",
                "    arr[1]=1 vs pivot=2",
                "    1 < 2: Move to left partition (i=0)",
                "  Final step: Place pivot at position 1",
                "Pivot 2 placed at position 1",
                "Left: [1] | Pivot: 2 | Right: [3]",
                "  Single element at 0 is sorted",
                "  Single element at 2 is sorted",
                "Completed range [0...2]",
                "Sorting complete!",
            ]
        );
        assert_eq2!(trace.stats.swaps, 2);
        assert_eq2!(trace.stats.comparisons, 2);
        assert_eq2!(trace.stats.max_recursion_depth, 1);
        assert_eq2!(trace.stats.recursion_depth, 0);
    }

    #[test]
    fn test_no_self_swaps() {
        let trace = run_sort(SortKind::Quick, &[1, 2, 3, 4]);
        assert_eq2!(trace.stats.swaps, 0);
        assert!(trace.steps.iter().all(|it| match it.effect {
            StepEffect::Swap { a, b } => a != b,
            _ => true,
        }));
        assert!(
            trace
                .steps
                .texts()
                .contains(&"    1 < 4: Already in position")
        );
    }

    #[test]
    fn test_recursion_depth_grows_on_sorted_input() {
        let trace = run_sort(SortKind::Quick, &[1, 2, 3, 4, 5]);
        assert_eq2!(trace.stats.max_recursion_depth, 4);
        assert_eq2!(trace.steps.count_tag(StepTag::Recurse), 3);
        assert!(
            trace
                .steps
                .texts()
                .contains(&"      QuickSort(0, 1) - Working on [1, 2]")
        );
    }

    #[test]
    fn test_equal_to_pivot_goes_right() {
        let trace = run_sort(SortKind::Quick, &[2, 2, 2]);
        assert_eq2!(trace.sorted, vec![2, 2, 2]);
        assert!(
            trace
                .steps
                .texts()
                .contains(&"    2 ≥ 2: Stay in right partition")
        );
    }
}
