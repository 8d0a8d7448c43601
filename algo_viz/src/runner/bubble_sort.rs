// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{SortAlgorithm, SortTraceBuilder, StepEffect, StepTag};

/// Passes over a shrinking suffix, swapping adjacent pairs that are strictly out of
/// order. A pass with zero swaps proves the rest sorted, so it stops there without
/// comparing anything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl SortAlgorithm for BubbleSort {
    fn run(&self, builder: &mut SortTraceBuilder) {
        let n = builder.len();

        for i in 0..n.saturating_sub(1) {
            let pass = i + 1;
            builder.push(
                format!("Pass {pass}: Comparing adjacent elements"),
                StepTag::Phase,
                StepEffect::BeginPass { pass },
            );

            let mut swapped = false;
            let last = n - i - 1;

            for j in 0..last {
                let (left, right) = (builder.get(j), builder.get(j + 1));
                builder.push(
                    format!("Compare: arr[{j}] ({left}) vs arr[{}] ({right})", j + 1),
                    StepTag::Compare,
                    StepEffect::Compare { a: j, b: j + 1 },
                );

                if builder.compare(j, j + 1).is_gt() {
                    builder.push(
                        format!("Swap: {left} > {right} - Swapping!"),
                        StepTag::Swap,
                        StepEffect::Swap { a: j, b: j + 1 },
                    );
                    swapped = true;
                } else {
                    builder.note(
                        format!("No swap needed: {left} ≤ {right}"),
                        StepTag::Info,
                    );
                }
            }

            builder.push(
                format!("Element at position {last} is now in final position"),
                StepTag::Sorted,
                StepEffect::MarkSorted {
                    from: last,
                    to: last,
                },
            );

            if !swapped {
                builder.push(
                    "No swaps in this pass - Array is sorted!",
                    StepTag::Sorted,
                    StepEffect::MarkSorted {
                        from: 0,
                        to: last - 1,
                    },
                );
                break;
            }
        }
    }
}
