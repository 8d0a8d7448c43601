// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given block or stmt so that it returns a `Result<()>`. It is just syntactic
/// sugar that helps having to write `Ok(())` repeatedly.
///
/// ```
/// use r3bl_algo_viz::{CommonResult, parse_node_value, throws};
///
/// fn insert_from_text(text: &str) -> CommonResult<()> {
///     throws!({
///         let value = parse_node_value(text)?;
///         assert_eq!(value, 42);
///     });
/// }
/// # insert_from_text("42").unwrap();
/// ```
#[macro_export]
macro_rules! throws {
    ($it: block) => {{
        $it
        return Ok(())
    }};
    ($it: stmt) => {{
        $it
        return Ok(())
    }};
}

/// Unwrap the `$option`, and if `None` then return the given `$none_value`. Otherwise
/// bind the unwrapped value to `$it` and evaluate `$some_block`.
///
/// ```
/// use r3bl_algo_viz::unwrap_option_or_return;
///
/// fn first_or_zero(values: &[i64]) -> i64 {
///     unwrap_option_or_return!(values.first(), 0, it => { *it })
/// }
/// assert_eq!(first_or_zero(&[]), 0);
/// assert_eq!(first_or_zero(&[7]), 7);
/// ```
#[macro_export]
macro_rules! unwrap_option_or_return {
    ($option: expr, $none_value: expr, $it: ident => $some_block: block) => {
        match $option {
            Some($it) => $some_block,
            None => return $none_value,
        }
    };
}

/// Similar to [`assert_eq!`] but automatically prints the left and right hand side
/// diffs with `pretty_assertions`.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Syntactic sugar for `Ok(())` or `Ok($value)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}
