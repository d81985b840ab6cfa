mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    let Some(command) = cli.cmd.take() else {
        return match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err:#}");
                std::process::ExitCode::FAILURE
            },
        };
    };

    let result = command.run(cli).await;
    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}")
    }
    result.exit_code
}

fn setup_logger(cli: &Cli) {
    let (log_level, warning) = if cli.verbose {
        (tracing::Level::DEBUG, None)
    } else {
        match std::env::var("LOG_LEVEL") {
            Ok(value) => match parse_log_level(&value) {
                Some(level) => (level, None),
                None => (DEFAULT_LOG_LEVEL, Some(value)),
            },
            Err(_) => (DEFAULT_LOG_LEVEL, None),
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging to stderr at `{log_level}`.");

    if let Some(value) = warning {
        log::warn!(
            "Ignoring unrecognized `LOG_LEVEL` value `{}`; using \
            `{DEFAULT_LOG_LEVEL}`.",
            value.trim(),
        );
    }
}

/// `verbose` is accepted as an alias for `debug`.
fn parse_log_level(value: &str) -> Option<tracing::Level> {
    match value.trim().to_ascii_lowercase().as_str() {
        "debug" | "verbose" => Some(tracing::Level::DEBUG),
        "error" => Some(tracing::Level::ERROR),
        "info" => Some(tracing::Level::INFO),
        "trace" => Some(tracing::Level::TRACE),
        "warn" => Some(tracing::Level::WARN),
        _ => None,
    }
}
