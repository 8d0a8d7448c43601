// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::Parser;
use r3bl_algo_viz::{CLIArg, CommonResult, TracingConfig, WriterConfig, throws,
                    try_initialize_logging_global, try_run_command};
use tracing_core::LevelFilter;

const LOG_FILE_PATH: &str = "log.txt";

#[tokio::main]
#[allow(clippy::needless_return)]
async fn main() -> CommonResult<()> {
    throws!({
        // If no args are passed, the following line will fail, and help will be printed
        // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
        let cli_arg = CLIArg::parse();

        let enable_logging = cli_arg.global_options.enable_logging;
        if enable_logging {
            try_initialize_logging_global(TracingConfig {
                writer_config: WriterConfig::File(LOG_FILE_PATH.to_string()),
                level_filter: LevelFilter::DEBUG,
            })?;
            // % is Display, ? is Debug.
            tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
        }

        let mut stdout = std::io::stdout().lock();
        if let Err(error) = try_run_command(&cli_arg, &mut stdout).await {
            // % is Display, ? is Debug.
            tracing::error!(
                message = "Could not run algo-viz due to the following problem",
                error = ?error
            );
            return Err(error);
        }

        if enable_logging {
            tracing::debug!(message = "Stop logging...");
        }
    })
}
