//! pr-changelog - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pr_changelog::collect::git_cli::check_git_installed;
use pr_changelog::collect::{CommitSource, GitLogCollector, LocalRepoCollector, PayloadCollector};
use pr_changelog::{Config, ConfigOverrides, GitHubCommentPublisher, RunOutcome, run};

/// Post a changelog of a pull request's commits as a PR comment.
///
/// Every option falls back to the GitHub Actions environment.
#[derive(Parser, Debug)]
#[command(name = "pr-changelog")]
#[command(about = "Post a changelog of a pull request's commits as a PR comment")]
#[command(version)]
struct Cli {
    /// Token for the comments API (defaults to INPUT_TOKEN, token, GITHUB_TOKEN)
    #[arg(long)]
    token: Option<String>,

    /// Path to the pull_request event payload (defaults to GITHUB_EVENT_PATH)
    #[arg(long)]
    event_path: Option<PathBuf>,

    /// Pull request number
    #[arg(long = "pr")]
    pr_number: Option<u64>,

    /// Base branch the pull request merges into
    #[arg(long = "base")]
    base_branch: Option<String>,

    /// URL the comment is posted to
    #[arg(long)]
    comments_url: Option<String>,

    /// Login greeted in the comment
    #[arg(long)]
    user: Option<String>,

    /// Remote to fetch refs from
    #[arg(long)]
    remote: Option<String>,

    /// Repository working copy (defaults to the current directory)
    #[arg(long)]
    repo: Option<PathBuf>,

    /// Use refs already present locally instead of fetching
    #[arg(long)]
    no_fetch: bool,

    /// Print the changelog without posting it
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for ConfigOverrides {
    fn from(cli: Cli) -> Self {
        Self {
            token: cli.token,
            event_path: cli.event_path,
            pr_number: cli.pr_number,
            base_branch: cli.base_branch,
            comments_url: cli.comments_url,
            user: cli.user,
            remote: cli.remote,
            repo_dir: cli.repo,
            no_fetch: cli.no_fetch,
            dry_run: cli.dry_run,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(cli.into()).context("Invalid configuration")?;

    let source = build_source(&config)?;
    let publisher = build_publisher(&config)?;

    let outcome = run(&config, source.as_ref(), &publisher)
        .await
        .context("Failed to post changelog")?;

    if let RunOutcome::DryRun { html } = outcome {
        println!("{}", html);
    }

    Ok(())
}

/// Pick the commit source: a pre-computed payload, `git log` (fetching first
/// unless `--no-fetch`), or a git2 walk of local refs when `--no-fetch` is set
/// and no `git` binary is available.
fn build_source(config: &Config) -> Result<Box<dyn CommitSource>> {
    if let Some(payload) = &config.changelog_payload {
        let collector =
            PayloadCollector::from_json(payload).context("Failed to parse CHANGELOG payload")?;
        return Ok(Box::new(collector));
    }

    let repo_dir = config.repo_dir.clone().unwrap_or_else(|| PathBuf::from("."));

    if !config.fetch && check_git_installed().is_err() {
        debug!("git not on PATH, walking local refs with libgit2");
        return Ok(Box::new(LocalRepoCollector::new(repo_dir)));
    }

    Ok(Box::new(
        GitLogCollector::new()
            .in_dir(repo_dir)
            .with_fetch(config.fetch),
    ))
}

fn build_publisher(config: &Config) -> Result<GitHubCommentPublisher> {
    // Dry runs never publish, so the URL and token may be absent.
    let url = config.comments_url.clone().unwrap_or_default();
    let token = config.token.clone().unwrap_or_default();
    GitHubCommentPublisher::new(url, token).context("Failed to set up comment publisher")
}
