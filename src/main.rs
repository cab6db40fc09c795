mod commands;
mod config;
mod error;
mod gitea;
mod template;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::{Environment, PluginArgs};

#[derive(Parser)]
#[command(name = "gitea-comment")]
#[command(about = "Render a template and post it as a Gitea pull request comment")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    plugin: PluginArgs,

    /// Enable debug logging (true/1/yes)
    #[arg(long, env = "PLUGIN_DEBUG", num_args = 0..=1, default_missing_value = "true")]
    debug: Option<String>,
}

/// Logs go to stderr so stdout only carries the result line.
fn init_logging(debug: bool) -> Result<()> {
    let level = if debug { Level::DEBUG } else { Level::WARN };

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(format!("gitea_comment={}", level))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(debug)
        .init();

    Ok(())
}

fn is_truthy(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("true" | "1" | "yes" | "on")
    )
}

/// Help and version are successes; any other clap error exits 1 like every
/// other failure.
fn parse_failure(err: clap::Error) -> ExitCode {
    let _ = err.print();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

async fn run(cli: Cli) -> Result<String> {
    init_logging(is_truthy(cli.debug.as_deref()))?;

    let env = Environment::capture();
    let url = commands::post::run(cli.plugin, &env).await?;

    Ok(url)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    match run(cli).await {
        Ok(url) => {
            println!("Comment posted successfully: {}", url);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
