// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{path::PathBuf, str::FromStr};

use clap::{Args, Parser, Subcommand};

use crate::{InputError, ListKind, SortKind, validate_node_value};

#[derive(Debug, Parser)]
#[command(bin_name = "algo-viz")]
#[command(about = "Step through linked list and sorting algorithms, one narrated step at a time")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version}\n\nUSAGE:\n  algo-viz [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
/// - <https://developerlife.com/2023/09/17/tuify-clap/>
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        short = 'c',
        value_name = "file",
        help = "Load a JSON file that overrides the default intervals, ranges and seeds"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(about = "Run a sort and print its steps\nEg: `algo-viz sort quick --values 5,3,4,1`")]
    Sort(SortArgs),

    #[clap(
        about = "Apply operations to a linked list and print their steps\nEg: `algo-viz list circular-singly --op after:20:99`"
    )]
    List(ListArgs),
}

#[derive(Debug, Args)]
pub struct SortArgs {
    #[arg(value_name = "kind", help = "One of: bubble, insertion, quick")]
    pub kind: SortKind,

    #[arg(
        long,
        short = 'v',
        value_name = "numbers",
        conflicts_with = "random",
        help = "Comma separated integers to sort, at most 20"
    )]
    pub values: Option<String>,

    #[arg(long, short = 'r', help = "Sort 8 to 12 random values in 1..=100")]
    pub random: bool,

    #[arg(
        long,
        value_name = "seed",
        requires = "random",
        help = "Seed for --random, so the same array comes back every time"
    )]
    pub seed: Option<u64>,

    #[arg(
        long,
        short = 's',
        value_name = "level",
        help = "Animation speed from 1 (slowest) to 10 (fastest)"
    )]
    pub speed: Option<u8>,

    #[command(flatten)]
    pub output: OutputOption,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(
        value_name = "kind",
        help = "One of: singly, doubly, circular-singly, circular-doubly"
    )]
    pub kind: ListKind,

    #[arg(
        long,
        short = 'v',
        value_name = "numbers",
        help = "Comma separated node values in 0..=99 to start from, instead of 10,20,30,50"
    )]
    pub values: Option<String>,

    #[arg(
        long = "op",
        short = 'o',
        value_name = "operation",
        help = "Repeatable: head:V, tail:V, after:T:V, before:T:V, delete:T, select:T, reverse. T is the value of an existing node"
    )]
    pub operations: Vec<ListOperationArg>,

    #[arg(
        long,
        help = "Verify the structural invariants of the list after every operation"
    )]
    pub check: bool,

    #[command(flatten)]
    pub output: OutputOption,
}

#[derive(Debug, Clone, Copy, Args)]
pub struct OutputOption {
    #[arg(
        long,
        short = 'i',
        help = "Print every step at once instead of waiting on the timer"
    )]
    pub instant: bool,

    #[arg(
        long,
        short = 'j',
        conflicts_with = "instant",
        help = "Print the steps as JSON instead of text. Implies --instant"
    )]
    pub json: bool,
}

impl OutputOption {
    #[must_use]
    pub fn is_timed(&self) -> bool { !self.instant && !self.json }
}

/// One `--op` argument. Targets are node values, resolved to the first node that holds
/// them when the operation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOperationArg {
    Head { value: i64 },
    Tail { value: i64 },
    After { target_value: i64, value: i64 },
    Before { target_value: i64, value: i64 },
    Delete { target_value: i64 },
    Select { target_value: i64 },
    Reverse,
}

impl ListOperationArg {
    #[must_use]
    pub fn target_value(&self) -> Option<i64> {
        match self {
            Self::After { target_value, .. }
            | Self::Before { target_value, .. }
            | Self::Delete { target_value }
            | Self::Select { target_value } => Some(*target_value),
            Self::Head { .. } | Self::Tail { .. } | Self::Reverse => None,
        }
    }
}

impl FromStr for ListOperationArg {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = input.trim().split(':').map(str::trim).collect();
        let unknown = || InputError::UnknownListOperation {
            input: input.to_string(),
        };

        match parts.as_slice() {
            ["head", value] => Ok(Self::Head {
                value: parse_in_range(value)?,
            }),
            ["tail", value] => Ok(Self::Tail {
                value: parse_in_range(value)?,
            }),
            ["after", target, value] => Ok(Self::After {
                target_value: parse_in_range(target)?,
                value: parse_in_range(value)?,
            }),
            ["before", target, value] => Ok(Self::Before {
                target_value: parse_in_range(target)?,
                value: parse_in_range(value)?,
            }),
            ["delete", target] => Ok(Self::Delete {
                target_value: parse_in_range(target)?,
            }),
            ["select", target] => Ok(Self::Select {
                target_value: parse_in_range(target)?,
            }),
            ["reverse"] => Ok(Self::Reverse),
            _ => Err(unknown()),
        }
    }
}

fn parse_in_range(text: &str) -> Result<i64, InputError> {
    let value = text.parse::<i64>().map_err(|_| InputError::NotANumber {
        input: text.to_string(),
    })?;
    validate_node_value(value)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_clap_config_is_valid() { CLIArg::command().debug_assert(); }

    #[test_case("head:5", ListOperationArg::Head { value: 5 })]
    #[test_case(" tail : 7 ", ListOperationArg::Tail { value: 7 })]
    #[test_case("after:20:99", ListOperationArg::After { target_value: 20, value: 99 })]
    #[test_case("before:30:1", ListOperationArg::Before { target_value: 30, value: 1 })]
    #[test_case("delete:20", ListOperationArg::Delete { target_value: 20 })]
    #[test_case("select:50", ListOperationArg::Select { target_value: 50 })]
    #[test_case("reverse", ListOperationArg::Reverse)]
    fn test_parse_list_operation(input: &str, expected: ListOperationArg) {
        assert_eq2!(input.parse::<ListOperationArg>().unwrap(), expected);
    }

    #[test_case("push:5")]
    #[test_case("after:20")]
    #[test_case("reverse:1")]
    #[test_case("")]
    fn test_unknown_list_operation(input: &str) {
        assert!(matches!(
            input.parse::<ListOperationArg>(),
            Err(InputError::UnknownListOperation { .. })
        ));
    }

    #[test]
    fn test_list_operation_values_are_checked() {
        assert_eq2!(
            "head:100".parse::<ListOperationArg>(),
            Err(InputError::ValueOutOfRange {
                value: 100,
                min: 0,
                max: 99,
            })
        );
        assert_eq2!(
            "delete:x".parse::<ListOperationArg>(),
            Err(InputError::NotANumber { input: "x".into() })
        );
    }

    #[test]
    fn test_parse_sort_command() {
        let arg = CLIArg::try_parse_from([
            "algo-viz", "sort", "quick", "--values", "5,3,4,1", "--speed", "9", "-i",
        ])
        .unwrap();
        let CLICommand::Sort(SortArgs {
            kind,
            values,
            random,
            speed,
            output,
            ..
        }) = arg.command
        else {
            panic!("expected the sort command");
        };
        assert_eq2!(kind, SortKind::Quick);
        assert_eq2!(values.as_deref(), Some("5,3,4,1"));
        assert!(!random);
        assert_eq2!(speed, Some(9));
        assert!(!output.is_timed());
    }

    #[test]
    fn test_parse_list_command_with_repeated_ops() {
        let arg = CLIArg::try_parse_from([
            "algo-viz",
            "-l",
            "list",
            "circular-doubly",
            "--op",
            "head:5",
            "--op",
            "delete:20",
            "--check",
        ])
        .unwrap();
        assert!(arg.global_options.enable_logging);
        let CLICommand::List(ListArgs {
            kind,
            operations,
            check,
            output,
            ..
        }) = arg.command
        else {
            panic!("expected the list command");
        };
        assert_eq2!(kind, ListKind::CircularDoubly);
        assert_eq2!(
            operations,
            vec![
                ListOperationArg::Head { value: 5 },
                ListOperationArg::Delete { target_value: 20 },
            ]
        );
        assert!(check);
        assert!(output.is_timed());
    }

    #[test]
    fn test_values_and_random_conflict() {
        let result =
            CLIArg::try_parse_from(["algo-viz", "sort", "bubble", "-v", "1,2", "--random"]);
        assert!(result.is_err());
    }
}
