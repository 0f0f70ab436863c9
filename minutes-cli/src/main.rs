//! Minutes CLI - Command line interface for minutes
//!
//! Downloads a HackMD note and opens a pull request that files it as
//! `<path>/<date>.md` in the target repository.

mod publish;

use clap::Parser;
use minutes_core::{Config, HackMdClient, MinutesDate, SystemRunner};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use publish::{PublishRequest, Publisher};

/// Given a HackMD meeting notes URL, make a PR to the archive
#[derive(Parser, Debug)]
#[command(name = "minutes")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// HackMD document URL
    url: String,

    /// Target repository: org/reponame
    repo: String,

    /// Path in the repository to commit file to
    path: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        let code = publish::exit_code(&err);
        if code == minutes_core::error::EXIT_INVALID_INPUT {
            eprintln!("{err}");
        } else {
            eprintln!();
            eprintln!("FATAL: {err:#}");
        }
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let date = MinutesDate::today();
    let request = PublishRequest::parse(&cli.url, &cli.repo, &cli.path, date)?;

    let config = Config::load_with_overrides()?;
    tracing::debug!(
        git = %config.tools.git,
        gh = %config.tools.gh,
        cache_dir = %config.repository.cache_dir.display(),
        "Configuration loaded"
    );

    let source = HackMdClient::new()?;
    let published = Publisher::new(&config, &SystemRunner, &source)
        .publish(&request)
        .await?;

    tracing::info!(
        branch = %published.branch,
        file = %published.file.display(),
        "Meeting notes published"
    );

    Ok(())
}
