// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Validation at the boundary between a host UI (or the CLI) and the core. The core
//! assumes in-range values, so everything a user types goes through here first.

use crate::{CommonResult, InputError, viz_config_defaults::{MAX_ARRAY_LEN,
                                                             NODE_VALUE_MAX,
                                                             NODE_VALUE_MIN}};

/// Parse a comma separated list of integers for the sort visualizers. Entries that are
/// not numbers are dropped, the same way a lenient text field would treat them. The
/// result has between `1` and `max_len` elements.
///
/// # Errors
///
/// - [`InputError::NoValidNumbers`] if nothing numeric remains.
/// - [`InputError::TooManyElements`] if more than `max_len` numbers remain.
pub fn parse_array_input_with_max(input: &str, max_len: usize) -> CommonResult<Vec<i64>> {
    let values: Vec<i64> = input
        .split(',')
        .filter_map(|it| it.trim().parse::<i64>().ok())
        .collect();

    if values.is_empty() {
        return Err(InputError::NoValidNumbers {
            input: input.to_string(),
        }
        .into());
    }

    if values.len() > max_len {
        return Err(InputError::TooManyElements {
            count: values.len(),
            max: max_len,
        }
        .into());
    }

    Ok(values)
}

/// Same as [`parse_array_input_with_max`] with the default limit of `20` elements.
///
/// # Errors
///
/// See [`parse_array_input_with_max`].
pub fn parse_array_input(input: &str) -> CommonResult<Vec<i64>> {
    parse_array_input_with_max(input, MAX_ARRAY_LEN)
}

/// Parse a single node value for the list visualizers, in `0..=99`.
///
/// # Errors
///
/// - [`InputError::NotANumber`] if the text is not an integer.
/// - [`InputError::ValueOutOfRange`] if the value is outside `0..=99`.
pub fn parse_node_value(input: &str) -> CommonResult<i64> {
    let trimmed = input.trim();
    let value = trimmed
        .parse::<i64>()
        .map_err(|_| InputError::NotANumber {
            input: trimmed.to_string(),
        })?;
    validate_node_value(value)?;
    Ok(value)
}

/// # Errors
///
/// Returns [`InputError::ValueOutOfRange`] if the value is outside `0..=99`.
pub fn validate_node_value(value: i64) -> Result<(), InputError> {
    if (NODE_VALUE_MIN..=NODE_VALUE_MAX).contains(&value) {
        Ok(())
    } else {
        Err(InputError::ValueOutOfRange {
            value,
            min: NODE_VALUE_MIN,
            max: NODE_VALUE_MAX,
        })
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case("5,3,4,1", &[5, 3, 4, 1])]
    #[test_case(" 5 , 3 ,4,1 ", &[5, 3, 4, 1])]
    #[test_case("5, x, 4, , 1", &[5, 4, 1])]
    #[test_case("-3, 0, 7", &[-3, 0, 7])]
    fn test_parse_array_input(input: &str, expected: &[i64]) {
        assert_eq2!(parse_array_input(input).unwrap(), expected.to_vec());
    }

    #[test_case(""; "empty")]
    #[test_case("a, b"; "letters")]
    #[test_case(" , ,"; "separators only")]
    fn test_parse_array_input_no_numbers(input: &str) {
        let err = parse_array_input(input).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InputError>(),
            Some(InputError::NoValidNumbers { .. })
        ));
    }

    #[test]
    fn test_parse_array_input_too_many() {
        let input = (1..=21).map(|it| it.to_string()).collect::<Vec<_>>().join(",");
        let err = parse_array_input(&input).unwrap_err();
        assert_eq2!(
            err.downcast_ref::<InputError>(),
            Some(&InputError::TooManyElements { count: 21, max: 20 })
        );

        let input = (1..=20).map(|it| it.to_string()).collect::<Vec<_>>().join(",");
        assert_eq2!(parse_array_input(&input).unwrap().len(), 20);
    }

    #[test_case("0", Some(0))]
    #[test_case(" 99 ", Some(99))]
    #[test_case("100", None)]
    #[test_case("-1", None)]
    #[test_case("ten", None)]
    fn test_parse_node_value(input: &str, expected: Option<i64>) {
        assert_eq2!(parse_node_value(input).ok(), expected);
    }
}
