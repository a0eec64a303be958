//! validate-npm-package command-line entry point.

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use validate_npm_package::cli::{Cli, CliConfig};
use validate_npm_package::core::user_friendly_error;

#[tokio::main]
async fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();
    let config = cli.build_config();
    init_tracing(&config);

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute_with_config(config).await {
        Ok(code) => code,
        Err(e) => {
            // Convert to user-friendly error with context and suggestions
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(config: &CliConfig) {
    let env_filter = match config.log_level {
        Some(ref level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
