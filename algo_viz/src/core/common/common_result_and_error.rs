// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)
//!
//! The core algorithms never fail. Unknown node ids and empty lists are no-ops. The only
//! errors in this crate come from the boundary (parsing user input, loading config) and
//! from the invariant checker that tests use to audit a [`crate::LinkedList`].

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`]
///    wrappers.
///
/// It is basically `miette::Result<T, miette::Report>`, and works hand in hand w/
/// [`InputError`], [`InvariantViolation`] and any other type of error.
pub type CommonResult<T> = miette::Result<T>;

/// Validation failures detected at the boundary, before the core is invoked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum InputError {
    #[error("No valid numbers found in '{input}'")]
    #[diagnostic(
        code(r3bl_algo_viz::input::no_valid_numbers),
        help("Enter integers separated by commas, eg: 5, 3, 4, 1")
    )]
    NoValidNumbers { input: String },

    #[error("Too many elements: {count} (max {max})")]
    #[diagnostic(
        code(r3bl_algo_viz::input::too_many_elements),
        help("Remove some elements so the visualization stays readable")
    )]
    TooManyElements { count: usize, max: usize },

    #[error("Value {value} is out of range ({min}..={max})")]
    #[diagnostic(code(r3bl_algo_viz::input::value_out_of_range))]
    ValueOutOfRange { value: i64, min: i64, max: i64 },

    #[error("'{input}' is not a number")]
    #[diagnostic(code(r3bl_algo_viz::input::not_a_number))]
    NotANumber { input: String },

    #[error("'{input}' is not a list operation")]
    #[diagnostic(
        code(r3bl_algo_viz::input::unknown_list_operation),
        help(
            "Use one of head:V, tail:V, after:T:V, before:T:V, delete:T, select:T, reverse"
        )
    )]
    UnknownListOperation { input: String },
}

/// A structural invariant of a [`crate::LinkedList`] that does not hold. These are only
/// ever produced by [`crate::LinkedList::check_invariants()`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum InvariantViolation {
    #[error("head is {head:?} but tail is {tail:?}, both must be set or both empty")]
    #[diagnostic(code(r3bl_algo_viz::invariant::head_tail_mismatch))]
    HeadTailMismatch { head: Option<u64>, tail: Option<u64> },

    #[error("size is {size} but forward traversal from head reached {reached} nodes")]
    #[diagnostic(code(r3bl_algo_viz::invariant::size_mismatch))]
    SizeMismatch { size: usize, reached: usize },

    #[error("traversal ended at node {last}, expected the tail {tail}")]
    #[diagnostic(code(r3bl_algo_viz::invariant::tail_not_last))]
    TailNotLast { last: u64, tail: u64 },

    #[error("circular closure broken: {detail}")]
    #[diagnostic(
        code(r3bl_algo_viz::invariant::circular_closure),
        help("tail.next must be head (and head.prev must be tail for doubly lists)")
    )]
    CircularClosure { detail: String },

    #[error("linear list must end in an empty link: {detail}")]
    #[diagnostic(code(r3bl_algo_viz::invariant::linear_end))]
    LinearEnd { detail: String },

    #[error("node {node}.next is {next} but {next}.prev is {prev:?}")]
    #[diagnostic(code(r3bl_algo_viz::invariant::back_link))]
    BackLink { node: u64, next: u64, prev: Option<u64> },

    #[error("node {node} of a singly linked list carries a prev link {prev}")]
    #[diagnostic(code(r3bl_algo_viz::invariant::stray_prev))]
    StrayPrevLink { node: u64, prev: u64 },

    #[error("link from node {from} points at missing node {to}")]
    #[diagnostic(code(r3bl_algo_viz::invariant::dangling))]
    DanglingLink { from: u64, to: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_converts_into_report() {
        let result: CommonResult<()> = Err(InputError::TooManyElements {
            count: 21,
            max: 20,
        }
        .into());
        let report = result.unwrap_err();
        assert_eq!(report.to_string(), "Too many elements: 21 (max 20)");
        assert_eq!(
            report.downcast_ref::<InputError>(),
            Some(&InputError::TooManyElements { count: 21, max: 20 })
        );
    }

    #[test]
    fn test_diagnostic_code() {
        use miette::Diagnostic;
        let err = InputError::NotANumber {
            input: "abc".into(),
        };
        assert_eq!(
            err.code().map(|it| it.to_string()),
            Some("r3bl_algo_viz::input::not_a_number".to_string())
        );
    }
}
