// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Headless render adapter used by the `algo-viz` binary. Everything here is a pure
//! function from plain data (snapshots, steps, stats) to text, so a host UI can reuse
//! the same layout or ignore this module entirely.

use std::fmt::Write as _;

use crate::{ArrayModel, ListSnapshot, PlaybackSnapshot, SortStats, SortTrace, Step,
            StepStatus};

pub mod render_glyphs {
    pub const CURRENT: &str = "▶";
    pub const DONE: &str = "✓";
    pub const PENDING: &str = "·";
    pub const LINK_NEXT: &str = " -> ";
    pub const LINK_BOTH: &str = " <-> ";
    pub const NULL: &str = "NULL";
    pub const SORTED: &str = "*";
}

#[must_use]
pub fn status_glyph(status: StepStatus) -> &'static str {
    match status {
        StepStatus::Pending => render_glyphs::PENDING,
        StepStatus::Current => render_glyphs::CURRENT,
        StepStatus::Done => render_glyphs::DONE,
    }
}

/// Eg: `▶   3. [compare] Compare 5 and 3`.
#[must_use]
pub fn render_step_line(step: &Step, status: StepStatus) -> String {
    format!("{} {step}", status_glyph(status))
}

/// The whole steps panel, header first.
#[must_use]
pub fn render_playback(playback: &PlaybackSnapshot) -> String {
    let mut acc = format!("== {} ({} steps) ==\n", playback.title, playback.entries.len());
    for entry in &playback.entries {
        // We don't care about the result of this operation.
        writeln!(acc, "{}", render_step_line(&entry.step, entry.status)).ok();
    }
    acc
}

/// One line with every node in traversal order, eg:
/// - singly: `HEAD -> [10] -> [20] -> NULL`
/// - doubly: `NULL <- [10] <-> [20] -> NULL`
/// - circular: `HEAD -> [10] -> [20] -> (back to 10)`
#[must_use]
pub fn render_list(snapshot: &ListSnapshot) -> String {
    use render_glyphs::{LINK_BOTH, LINK_NEXT, NULL};

    let Some(first) = snapshot.nodes.first() else {
        return format!("{}: (empty)", snapshot.kind.title());
    };

    let link = if snapshot.kind.is_doubly() { LINK_BOTH } else { LINK_NEXT };
    let boxes = snapshot
        .nodes
        .iter()
        .map(|it| format!("[{}]", it.value))
        .collect::<Vec<_>>()
        .join(link);

    let start = match (snapshot.kind.is_doubly(), snapshot.kind.is_circular()) {
        (true, false) => format!("{NULL} <- "),
        _ => "HEAD -> ".to_string(),
    };
    let end = if snapshot.kind.is_circular() {
        format!(" -> (back to {})", first.value)
    } else {
        format!(" -> {NULL}")
    };

    format!("{start}{boxes}{end}")
}

/// Array row for one revealed step. Highlighted positions are wrapped in `<>`, and
/// positions in their final place carry a trailing `*`.
#[must_use]
pub fn render_array(array: &ArrayModel, sorted_mask: &[bool], highlighted: &[usize]) -> String {
    let cells = array
        .as_slice()
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let sorted = if sorted_mask.get(index).copied().unwrap_or(false) {
                render_glyphs::SORTED
            } else {
                ""
            };
            if highlighted.contains(&index) {
                format!("<{value}>{sorted}")
            } else {
                format!("{value}{sorted}")
            }
        })
        .collect::<Vec<_>>();
    format!("[{}]", cells.join(", "))
}

#[must_use]
pub fn render_stats(stats: &SortStats) -> String {
    let mut acc = format!(
        "Comparisons: {} | Swaps: {} | Array accesses: {}",
        stats.comparisons, stats.swaps, stats.array_accesses
    );
    if stats.shifts > 0 {
        // We don't care about the result of this operation.
        write!(acc, " | Shifts: {}", stats.shifts).ok();
    }
    if stats.max_recursion_depth > 0 {
        // We don't care about the result of this operation.
        write!(acc, " | Max depth: {}", stats.max_recursion_depth).ok();
    }
    acc
}

/// Summary printed once a sort finished revealing.
#[must_use]
pub fn render_sort_summary(trace: &SortTrace) -> String {
    format!(
        "{}\nInput:  {:?}\nOutput: {:?}\n{}",
        trace.kind.title(),
        trace.input,
        trace.sorted,
        render_stats(&trace.stats)
    )
}

#[must_use]
pub fn render_code_listing(lines: &[String]) -> String {
    lines
        .iter()
        .map(|it| format!("    {it}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LinkedList, ListKind, SortKind, StepEffect, StepSequence, StepSequencer,
                StepTag, assert_eq2, run_sort};

    #[test]
    fn test_render_list_per_kind() {
        let values = [10, 20, 30];
        let render = |kind| render_list(&LinkedList::from_values(kind, &values).snapshot());

        assert_eq2!(render(ListKind::Singly), "HEAD -> [10] -> [20] -> [30] -> NULL");
        assert_eq2!(render(ListKind::Doubly), "NULL <- [10] <-> [20] <-> [30] -> NULL");
        assert_eq2!(
            render(ListKind::CircularSingly),
            "HEAD -> [10] -> [20] -> [30] -> (back to 10)"
        );
        assert_eq2!(
            render(ListKind::CircularDoubly),
            "HEAD -> [10] <-> [20] <-> [30] -> (back to 10)"
        );
    }

    #[test]
    fn test_render_empty_list() {
        let list = LinkedList::new(ListKind::Doubly);
        assert_eq2!(render_list(&list.snapshot()), "Doubly Linked List: (empty)");
    }

    #[test]
    fn test_render_array_marks() {
        let array = ArrayModel::from(&[3, 1, 2][..]);
        assert_eq2!(
            render_array(&array, &[false, false, true], &[0, 1]),
            "[<3>, <1>, 2*]"
        );
        assert_eq2!(render_array(&array, &[], &[]), "[3, 1, 2]");
    }

    #[test]
    fn test_render_step_line() {
        let step = Step {
            index: 2,
            text: "Compare 5 and 3".into(),
            tag: StepTag::Compare,
            effect: StepEffect::Compare { a: 0, b: 1 },
        };
        assert_eq2!(
            render_step_line(&step, StepStatus::Current),
            "▶   3. [compare] Compare 5 and 3"
        );
    }

    #[test]
    fn test_render_playback_marks_each_status() {
        let mut steps = StepSequence::new();
        steps.note("Create node N", StepTag::Insert);
        steps.note("Link S.next = N", StepTag::Relink);
        steps.note("Insertion complete", StepTag::Complete);

        let mut sequencer = StepSequencer::new();
        sequencer.start("Insert After", steps);
        sequencer.advance();

        assert_eq2!(
            render_playback(&sequencer.snapshot()),
            "== Insert After (3 steps) ==\n\
             ✓   1. [insert] Create node N\n\
             ▶   2. [relink] Link S.next = N\n\
             ·   3. [complete] Insertion complete\n"
        );
    }

    #[test]
    fn test_render_stats_skips_unused_counters() {
        let bubble = run_sort(SortKind::Bubble, &[5, 3, 4, 1]).stats;
        let rendered = render_stats(&bubble);
        assert!(rendered.starts_with("Comparisons: "));
        assert!(!rendered.contains("Shifts"));
        assert!(!rendered.contains("Max depth"));

        let quick = run_sort(SortKind::Quick, &[5, 3, 4, 1]).stats;
        assert!(render_stats(&quick).contains("Max depth"));
    }

    #[test]
    fn test_render_sort_summary() {
        let trace = run_sort(SortKind::Insertion, &[2, 1]);
        let summary = render_sort_summary(&trace);
        assert!(summary.starts_with("Insertion Sort\nInput:  [2, 1]\nOutput: [1, 2]\n"));
    }
}
