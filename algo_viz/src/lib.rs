// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_algo_viz
//!
//! Headless engine behind classroom visualizations of linked lists and sorting
//! algorithms. Every operation runs to completion up front and produces a deterministic,
//! narrated sequence of steps. A player then reveals those steps one at a time, on a timer
//! (with pause, resume and cancellation) or by hand. Renderers only ever read plain data
//! snapshots, so the same engine drives a terminal, a web canvas, or a test.
//!
//! # Table of contents
//!
//! <!-- TOC -->
//!
//! - [Architecture](#architecture)
//! - [Linked lists](#linked-lists)
//! - [Sorts](#sorts)
//! - [Run the algo-viz binary](#run-the-algo-viz-binary)
//!
//! <!-- /TOC -->
//!
//! # Architecture
//!
//! ```text
//! user action ──▶ visualizer ──▶ runner ──▶ model (mutated once, synchronously)
//!                     │             │
//!                     │             └──▶ step sequence (+ code listing)
//!                     ▼
//!                step player ──▶ sequencer ──▶ SequencerSignal ──▶ render adapter
//!                (tokio timer)    (generation guarded)
//! ```
//!
//! 1. [`model`]: [`LinkedList`] is one arena of nodes keyed by [`NodeId`] that covers all
//!    four [`ListKind`]s. [`ArrayModel`] backs the sorts.
//! 2. [`runner`]: [`run_list_operation`] and [`run_sort`] apply an operation and narrate
//!    it as a [`StepSequence`]. Each [`Step`] carries a [`StepEffect`], so the array can
//!    be folded back to any intermediate state with [`SortReplay`].
//! 3. [`sequencer`]: [`StepSequencer`] is the playback state machine. [`StepPlayer`]
//!    drives it from a tokio task, and a [`Generation`] counter makes sure ticks from a
//!    replaced sequence are never revealed.
//! 4. [`visualizer`]: [`ListVisualizer`] and [`SortVisualizer`] tie one model, one runner
//!    and one player together behind the calls a UI makes.
//! 5. [`cli`]: the `algo-viz` binary, a render adapter that prints to stdout.
//!
//! # Linked lists
//!
//! ```
//! use r3bl_algo_viz::{ListKind, ListOperation, LinkedList, run_list_operation};
//!
//! let mut list = LinkedList::from_values(ListKind::CircularSingly, &[10, 20, 30, 50]);
//! let twenty = list.find_by_value(20).unwrap();
//! let report = run_list_operation(
//!     &mut list,
//!     ListOperation::InsertAfter { target: twenty, value: 99 },
//! );
//!
//! assert!(report.applied());
//! assert_eq!(list.values(), vec![10, 20, 99, 30, 50]);
//! assert_eq!(list.next_of(list.tail().unwrap()), list.head());
//! ```
//!
//! # Sorts
//!
//! ```
//! use r3bl_algo_viz::{SortKind, run_sort};
//!
//! let trace = run_sort(SortKind::Bubble, &[5, 3, 4, 1]);
//! assert_eq!(trace.sorted, vec![1, 3, 4, 5]);
//! assert_eq!(trace.stats.swaps, 5);
//! ```
//!
//! # Run the algo-viz binary
//!
//! ```sh
//! cargo run --bin algo-viz -- sort quick --values 5,3,4,1 --speed 8
//! cargo run --bin algo-viz -- list circular-doubly --op head:5 --op delete:20 --check -i
//! cargo run --bin algo-viz -- -l sort bubble --random --json
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() freely.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod cli;
pub mod core;
pub mod model;
pub mod runner;
pub mod sequencer;
pub mod visualizer;

// Re-export.
pub use cli::*;
pub use core::*;
pub use model::*;
pub use runner::*;
pub use sequencer::*;
pub use visualizer::*;
