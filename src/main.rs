use anyhow::Result;
use clap::Parser;
use exitcode::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use sunbird_translate::cli::commands::{configure, translate};
use sunbird_translate::cli::{Args, Command, exit};
use sunbird_translate::translation::print_languages;
use sunbird_translate::ui::Style;

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();
    let args = Args::parse();
    init_logging(args.verbose);

    match dotenv {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => debug!("no .env file found"),
        Err(e) => warn!("failed to load .env: {e}"),
    }

    let code = match run(args).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", Style::error("Error:"));
            exit::error_code(&err)
        }
    };

    std::process::exit(code);
}

async fn run(args: Args) -> Result<ExitCode> {
    match args.command {
        Some(Command::Languages) => {
            print_languages();
            Ok(exitcode::OK)
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
            Ok(exitcode::OK)
        }
        None => {
            let options = translate::TranslateOptions {
                text: args.text,
                file: args.file,
                from: args.from,
                to: args.to,
                endpoint: args.endpoint,
                timeout_secs: args.timeout,
            };
            let outcome = translate::run_translate(options).await?;
            Ok(exit::outcome_code(outcome))
        }
    }
}

/// Logs go to stderr so stdout carries only the translation.
///
/// `RUST_LOG` wins; otherwise `--verbose` enables debug output for this crate.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        concat!(env!("CARGO_CRATE_NAME"), "=debug")
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
