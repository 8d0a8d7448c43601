// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::Write, path::Path};

use miette::IntoDiagnostic;
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{AnimationSpeed, CLIArg, CLICommand, CommonResult, Generation, InputError,
            ListArgs, ListOperationArg, ListOperationReport, ListSnapshot,
            ListVisualizer, PlaybackMode, SequencerSignal, SequencerSignalReceiver,
            SortArgs, SortReplay, SortVisualizer, StepPlayer, StepStatus,
            StepStatusChange, VizConfig, ok, parse_array_input_with_max, render_array,
            render_code_listing, render_list, render_playback, render_sort_summary,
            render_step_line, unwrap_option_or_return};

/// Where the steps of a played sequence come from. Instant playback reads them straight
/// off the finished sequence. Timed playback waits on the signals of the timer task.
#[derive(Debug)]
pub enum StepFeed {
    Instant,
    Timed(SequencerSignalReceiver),
}

impl StepFeed {
    /// Build the player for `mode`, wired to a signal channel when it is timed.
    #[must_use]
    pub fn new_player(mode: PlaybackMode) -> (StepPlayer, Self) {
        match mode {
            PlaybackMode::Manual => (StepPlayer::new(mode), Self::Instant),
            PlaybackMode::Timed { .. } => {
                let (sender, receiver) = tokio::sync::mpsc::unbounded_channel();
                (
                    StepPlayer::new(mode).with_signal_sender(sender),
                    Self::Timed(receiver),
                )
            }
        }
    }

    #[must_use]
    pub fn is_instant(&self) -> bool { matches!(self, Self::Instant) }

    /// Call `on_reveal` for each step of the sequence `generation`, in order. Signals of
    /// older generations are skipped. Instant feeds expect the sequence to be complete
    /// already, and report every step as [`StepStatus::Done`].
    ///
    /// # Errors
    ///
    /// Returns the first error `on_reveal` returns.
    pub async fn follow(
        &mut self,
        generation: Generation,
        len: usize,
        mut on_reveal: impl FnMut(usize, StepStatus) -> CommonResult<()>,
    ) -> CommonResult<()> {
        match self {
            Self::Instant => {
                for index in 0..len {
                    on_reveal(index, StepStatus::Done)?;
                }
            }
            Self::Timed(receiver) => {
                while let Some(signal) = receiver.recv().await {
                    if signal.generation() != Some(generation) {
                        continue;
                    }
                    match signal {
                        SequencerSignal::StepStatusChanged(StepStatusChange {
                            index,
                            status: StepStatus::Current,
                            ..
                        }) => on_reveal(index, StepStatus::Current)?,
                        SequencerSignal::Completed { .. } => break,
                        _ => {}
                    }
                }
            }
        }
        ok!()
    }
}

/// # Errors
///
/// Returns an error if the file can't be read or is not a valid config.
pub fn load_config(maybe_path: Option<&Path>) -> CommonResult<VizConfig> {
    let path = unwrap_option_or_return!(maybe_path, ok!(VizConfig::default()), it => { it });
    let json = std::fs::read_to_string(path).into_diagnostic()?;
    let config = VizConfig::try_from_json_str(&json)?;
    // % is Display, ? is Debug.
    tracing::debug!(message = "config loaded", path = %path.display(), config = ?config);
    ok!(config)
}

/// # Errors
///
/// Returns an error if the config, the values or an operation are invalid, if the
/// invariant check fails, or if `out` can't be written to.
pub async fn try_run_command(cli_arg: &CLIArg, out: &mut impl Write) -> CommonResult<()> {
    let config = load_config(cli_arg.global_options.config.as_deref())?;
    match &cli_arg.command {
        CLICommand::Sort(args) => try_run_sort(args, config, out).await,
        CLICommand::List(args) => try_run_list(args, config, out).await,
    }
}

/// # Errors
///
/// Returns an error if the speed or the values are invalid, or if `out` can't be
/// written to.
pub async fn try_run_sort(
    args: &SortArgs,
    config: VizConfig,
    out: &mut impl Write,
) -> CommonResult<()> {
    let mode = if args.output.is_timed() {
        PlaybackMode::timed(config.sort_speed.delay(), &config)
    } else {
        PlaybackMode::Manual
    };
    let (player, mut feed) = StepFeed::new_player(mode);
    let max_len = config.max_array_len;
    let mut viz = SortVisualizer::with_config(args.kind, player, config);

    if let Some(level) = args.speed {
        viz.set_speed(AnimationSpeed::try_new(level)?);
    }

    if let Some(text) = &args.values {
        viz.set_array(parse_array_input_with_max(text, max_len)?)?;
    } else if args.random {
        match args.seed {
            Some(seed) => viz.randomize_with(&mut StdRng::seed_from_u64(seed)),
            None => viz.randomize(),
        };
    }

    viz.sort();
    let trace =
        unwrap_option_or_return!(viz.last_trace().cloned(), ok!(), it => { it });

    if !args.output.is_timed() {
        viz.skip_to_end();
    }

    if args.output.json {
        let json = serde_json::to_string_pretty(&trace).into_diagnostic()?;
        writeln!(out, "{json}").into_diagnostic()?;
        return ok!();
    }

    writeln!(
        out,
        "== {} ({} steps, speed {}) ==",
        trace.kind.title(),
        trace.steps.len(),
        viz.speed()
    )
    .into_diagnostic()?;

    let generation = viz.player().generation();
    let steps = trace.steps.as_slice();
    let mut replay = SortReplay::new(&trace.input);
    feed.follow(generation, steps.len(), |index, status| {
        let step = unwrap_option_or_return!(steps.get(index), ok!(), it => { it });
        replay.apply_through(steps, index);
        writeln!(out, "{}", render_step_line(step, status)).into_diagnostic()?;

        let highlighted = step.effect.highlighted_indices();
        if !highlighted.is_empty() {
            writeln!(
                out,
                "      {}",
                render_array(replay.array(), replay.sorted_mask(), &highlighted)
            )
            .into_diagnostic()?;
        }
        ok!()
    })
    .await?;

    writeln!(out, "\n{}", render_sort_summary(&trace)).into_diagnostic()?;
    ok!()
}

/// What `--json` prints for each played list operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOperationRecord {
    pub report: ListOperationReport,
    pub list: ListSnapshot,
}

/// # Errors
///
/// Returns an error if the values or an operation are invalid, if `--check` finds a
/// broken invariant, or if `out` can't be written to.
pub async fn try_run_list(
    args: &ListArgs,
    config: VizConfig,
    out: &mut impl Write,
) -> CommonResult<()> {
    let mode = if args.output.is_timed() {
        PlaybackMode::timed_for_lists(&config)
    } else {
        PlaybackMode::Manual
    };
    let (player, mut feed) = StepFeed::new_player(mode);

    let maybe_initial_values = match &args.values {
        Some(text) => Some(parse_node_values(text, &config)?),
        None => None,
    };

    let mut viz = ListVisualizer::with_config(args.kind, player, config);
    if let Some(values) = maybe_initial_values {
        viz.initialize(&values);
    }

    let mut records = vec![];
    reveal_last_report(&mut viz, &mut feed, args, out, &mut records).await?;

    for op in &args.operations {
        if !apply_list_operation(&mut viz, *op)? {
            tracing::warn!(message = "list operation skipped, target not found", op = ?op);
            if !args.output.json {
                writeln!(out, "No node holds the target of {op:?}, skipped")
                    .into_diagnostic()?;
            }
            continue;
        }
        reveal_last_report(&mut viz, &mut feed, args, out, &mut records).await?;
    }

    if args.output.json {
        let json = serde_json::to_string_pretty(&records).into_diagnostic()?;
        writeln!(out, "{json}").into_diagnostic()?;
    }
    ok!()
}

/// Resolve the target value of `op` to a node, select it, then run `op`. Returns
/// `Ok(false)` and plays nothing when no node holds the target value.
///
/// # Errors
///
/// Returns [`InputError::ValueOutOfRange`] if an inserted value is out of range.
pub fn apply_list_operation(viz: &mut ListVisualizer, op: ListOperationArg) -> CommonResult<bool> {
    if let Some(target_value) = op.target_value() {
        let target = unwrap_option_or_return!(
            viz.list().find_by_value(target_value),
            ok!(false),
            it => { it }
        );
        viz.select(target);
    }

    match op {
        ListOperationArg::Head { value } => {
            viz.insert_at_head(value)?;
        }
        ListOperationArg::Tail { value } => {
            viz.insert_at_tail(value)?;
        }
        ListOperationArg::After { value, .. } => {
            viz.insert_after(value)?;
        }
        ListOperationArg::Before { value, .. } => {
            viz.insert_before(value)?;
        }
        ListOperationArg::Delete { .. } => {
            viz.delete();
        }
        ListOperationArg::Select { .. } => {}
        ListOperationArg::Reverse => {
            viz.reverse();
        }
    }
    ok!(true)
}

async fn reveal_last_report(
    viz: &mut ListVisualizer,
    feed: &mut StepFeed,
    args: &ListArgs,
    out: &mut impl Write,
    records: &mut Vec<ListOperationRecord>,
) -> CommonResult<()> {
    if feed.is_instant() {
        viz.player_mut().run_to_end();
    }

    if args.check {
        viz.list().check_invariants()?;
    }

    let report = unwrap_option_or_return!(viz.last_report(), ok!(), it => { it });

    if args.output.json {
        records.push(ListOperationRecord {
            report: report.clone(),
            list: viz.snapshot(),
        });
        return ok!();
    }

    if feed.is_instant() {
        write!(out, "{}", render_playback(&viz.playback())).into_diagnostic()?;
    } else {
        writeln!(out, "== {} ({} steps) ==", report.title, report.steps.len())
            .into_diagnostic()?;

        let generation = viz.player().generation();
        let steps = report.steps.as_slice();
        feed.follow(generation, steps.len(), |index, status| {
            let step = unwrap_option_or_return!(steps.get(index), ok!(), it => { it });
            writeln!(out, "{}", render_step_line(step, status)).into_diagnostic()?;
            ok!()
        })
        .await?;
    }

    writeln!(out, "{}", render_list(&viz.snapshot())).into_diagnostic()?;
    if !report.code_listing.is_empty() {
        writeln!(out, "{}", render_code_listing(&report.code_listing)).into_diagnostic()?;
    }
    if args.check {
        writeln!(out, "Invariants hold ({} nodes)", viz.list().len()).into_diagnostic()?;
    }
    ok!()
}

fn parse_node_values(text: &str, config: &VizConfig) -> CommonResult<Vec<i64>> {
    let values = parse_array_input_with_max(text, config.max_array_len)?;
    let range = config.node_value_range();
    if let Some(value) = values.iter().find(|it| !range.contains(it)) {
        return Err(InputError::ValueOutOfRange {
            value: *value,
            min: *range.start(),
            max: *range.end(),
        }
        .into());
    }
    ok!(values)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::{SortTrace, assert_eq2};

    async fn run(args: &[&str]) -> CommonResult<String> {
        let cli_arg = CLIArg::try_parse_from(args).into_diagnostic()?;
        let mut out = Vec::new();
        try_run_command(&cli_arg, &mut out).await?;
        String::from_utf8(out).into_diagnostic()
    }

    #[tokio::test]
    async fn test_instant_sort() {
        let output = run(&["algo-viz", "sort", "bubble", "-v", "5,3,4,1", "-i"])
            .await
            .unwrap();
        assert!(output.starts_with("== Bubble Sort ("));
        assert!(output.contains("Output: [1, 3, 4, 5]"));
        assert!(output.contains("Swaps: 5"));
        assert!(output.lines().any(|it| it.starts_with("✓   1. ")));
    }

    #[tokio::test]
    async fn test_json_sort_is_a_trace() {
        let output = run(&["algo-viz", "sort", "quick", "-v", "3,1,2", "--json"])
            .await
            .unwrap();
        let trace: SortTrace = serde_json::from_str(&output).unwrap();
        assert_eq2!(trace.input, vec![3, 1, 2]);
        assert_eq2!(trace.sorted, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_seeded_random_sort_is_repeatable() {
        let args = ["algo-viz", "sort", "insertion", "--random", "--seed", "7", "-i"];
        let first = run(&args).await.unwrap();
        let second = run(&args).await.unwrap();
        assert_eq2!(first, second);
    }

    #[tokio::test]
    async fn test_bad_sort_input_is_an_error() {
        assert!(run(&["algo-viz", "sort", "bubble", "-v", "a,b", "-i"]).await.is_err());
        assert!(
            run(&["algo-viz", "sort", "bubble", "-s", "11", "-i"])
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_instant_list_operations() {
        let output = run(&[
            "algo-viz",
            "list",
            "circular-singly",
            "--op",
            "after:20:99",
            "--check",
            "-i",
        ])
        .await
        .unwrap();
        assert!(output.starts_with("== Initialize ("));
        assert!(output.contains("== Insert After ("));
        assert!(output.contains("HEAD -> [10] -> [20] -> [99] -> [30] -> [50] -> (back to 10)"));
        assert!(output.contains("Invariants hold (5 nodes)"));
        assert!(!output.lines().any(|it| it.starts_with('▶') || it.starts_with('·')));
        assert!(output.lines().any(|it| it.starts_with("✓   1. [")));
    }

    #[tokio::test]
    async fn test_missing_target_is_skipped() {
        let output = run(&["algo-viz", "list", "doubly", "--op", "delete:42", "-i"])
            .await
            .unwrap();
        assert!(output.contains("skipped"));
        assert!(!output.contains("== Delete Node"));
    }

    #[tokio::test]
    async fn test_json_list_records() {
        let output = run(&[
            "algo-viz", "list", "singly", "-v", "1,2,3", "--op", "reverse", "--json",
        ])
        .await
        .unwrap();
        let records: Vec<ListOperationRecord> = serde_json::from_str(&output).unwrap();
        assert_eq2!(records.len(), 2);
        assert_eq2!(records[0].list.values(), vec![1, 2, 3]);
        assert_eq2!(records[1].report.title, "Reverse List");
        assert_eq2!(records[1].list.values(), vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_list_values_out_of_range() {
        assert!(
            run(&["algo-viz", "list", "singly", "-v", "1,200", "-i"])
                .await
                .is_err()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_timed_sort_reveals_every_step() {
        let output = run(&["algo-viz", "sort", "bubble", "-v", "2,1", "-s", "10"])
            .await
            .unwrap();
        let trace = crate::run_sort(crate::SortKind::Bubble, &[2, 1]);
        let revealed = output.lines().filter(|it| it.starts_with("▶")).count();
        assert_eq2!(revealed, trace.steps.len());
        assert!(output.contains("Output: [1, 2]"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timed_list_reveals_only_the_last_operation() {
        let output = run(&["algo-viz", "list", "doubly", "--op", "before:30:1"])
            .await
            .unwrap();
        // The implicit selection of 30 is replaced before it is revealed.
        assert!(!output.contains("== Select Node"));
        assert!(output.contains("== Insert Before ("));
        assert!(output.contains("NULL <- [10] <-> [20] <-> [1] <-> [30] <-> [50] -> NULL"));
    }

    #[test]
    fn test_load_config_from_file() {
        let path = std::env::temp_dir().join("r3bl_algo_viz_config.json");
        std::fs::write(&path, r#"{ "list_seed": [1, 2] }"#).unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq2!(config.list_seed, vec![1, 2]);
        assert_eq2!(load_config(None).unwrap(), VizConfig::default());
        assert!(load_config(Some(Path::new("/does/not/exist.json"))).is_err());
    }
}
