// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{SortAlgorithm, SortTraceBuilder, StepEffect, StepTag};

/// Picks the key at `i`, shifts every greater element of the sorted prefix one slot to
/// the right, and writes the key into the hole. Equal keys stop the shift, which keeps
/// the sort stable.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl SortAlgorithm for InsertionSort {
    fn run(&self, builder: &mut SortTraceBuilder) {
        let n = builder.len();
        if n == 0 {
            return;
        }

        builder.push(
            "Start: First element arr[0] is already sorted",
            StepTag::Info,
            StepEffect::MarkSorted { from: 0, to: 0 },
        );

        for i in 1..n {
            let key = builder.get(i);
            builder.push(
                format!("Iteration {i}: Pick key = arr[{i}] = {key}"),
                StepTag::Phase,
                StepEffect::PickKey { index: i, key },
            );
            builder.note(
                format!("Compare key ({key}) with sorted portion"),
                StepTag::Info,
            );

            // Position the key will be written to.
            let mut hole = i;
            while hole > 0 {
                let j = hole - 1;
                let value = builder.get(j);
                builder.push(
                    format!("Compare: arr[{j}] ({value}) vs key ({key})"),
                    StepTag::Compare,
                    StepEffect::CompareKey { index: j, key },
                );

                if builder.compare_with(j, key).is_gt() {
                    builder.push(
                        format!("{value} > {key}: Shift arr[{j}] to arr[{hole}]"),
                        StepTag::Shift,
                        StepEffect::Shift { from: j, to: hole },
                    );
                    hole = j;
                } else {
                    builder.note(
                        format!("{value} ≤ {key}: Found correct position"),
                        StepTag::Info,
                    );
                    break;
                }
            }

            builder.push(
                format!("Insert key ({key}) at position {hole}"),
                StepTag::Insert,
                StepEffect::Write {
                    index: hole,
                    value: key,
                },
            );
            builder.push(
                format!("Elements 0 to {i} are now sorted"),
                StepTag::Sorted,
                StepEffect::MarkSorted { from: 0, to: i },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{SortKind, StepTag, assert_eq2, run_sort};

    #[test]
    fn test_shifts_and_inserts() {
        let trace = run_sort(SortKind::Insertion, &[3, 1, 2]);
        assert_eq2!(trace.sorted, vec![1, 2, 3]);
        assert_eq2!(
            trace.steps.texts(),
            vec![
                "Start: First element arr[0] is already sorted",
                "Iteration 1: Pick key = arr[1] = 1",
                "Compare key (1) with sorted portion",
                "Compare: arr[0] (3) vs key (1)",
                "3 > 1: Shift arr[0] to arr[1]",
                "Insert key (1) at position 0",
                "Elements 0 to 1 are now sorted",
                "Iteration 2: Pick key = arr[2] = 2",
                "Compare key (2) with sorted portion",
                "Compare: arr[1] (3) vs key (2)",
                "3 > 2: Shift arr[1] to arr[2]",
                "Compare: arr[0] (1) vs key (2)",
                "1 ≤ 2: Found correct position",
                "Insert key (2) at position 1",
                "Elements 0 to 2 are now sorted",
                "Sorting complete!",
            ]
        );
        assert_eq2!(trace.stats.shifts, 2);
        assert_eq2!(trace.stats.comparisons, 3);
        assert_eq2!(trace.stats.current_key, Some(2));
        // 2 picks + 3 compares + 2 shifts * 2 + 2 inserts.
        assert_eq2!(trace.stats.array_accesses, 11);
    }

    #[test]
    fn test_equal_keys_stop_the_shift() {
        let trace = run_sort(SortKind::Insertion, &[2, 2]);
        assert_eq2!(trace.stats.shifts, 0);
        assert_eq2!(trace.steps.count_tag(StepTag::Shift), 0);
    }

    #[test]
    fn test_single_element() {
        let trace = run_sort(SortKind::Insertion, &[7]);
        assert_eq2!(
            trace.steps.texts(),
            vec!["Start: First element arr[0] is already sorted", "Sorting complete!"]
        );
    }
}
