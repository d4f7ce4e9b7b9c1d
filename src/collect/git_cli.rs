//! Commit collection by shelling out to the system `git` binary.
//!
//! Running `git` directly inherits the runner's credentials and checkout
//! configuration, which is what CI runners set up for `actions/checkout`.

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::CollectError;

use super::{CommitSource, PullRequestRange, parse_log_output};

/// Collects a pull request's commit subjects with `git fetch` + `git log`.
#[derive(Debug, Clone)]
pub struct GitLogCollector {
    repo_dir: Option<PathBuf>,
    fetch: bool,
}

impl Default for GitLogCollector {
    fn default() -> Self {
        Self {
            repo_dir: None,
            fetch: true,
        }
    }
}

impl GitLogCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git in `dir` instead of the current directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.repo_dir = Some(dir.into());
        self
    }

    /// Enable or disable fetching refs from the remote before logging.
    pub fn with_fetch(mut self, fetch: bool) -> Self {
        self.fetch = fetch;
        self
    }

    /// Run one git command and return its stdout.
    ///
    /// A non-zero exit is always an error. Output on stderr is an error only
    /// when `reject_stderr` is set: `git fetch` reports progress there.
    async fn run_git(&self, args: &[String], reject_stderr: bool) -> Result<String, CollectError> {
        let command = args.join(" ");
        debug!("running git {}", command);

        let mut cmd = Command::new("git");
        cmd.args(args).stdout(Stdio::piped()).stderr(Stdio::piped());
        if let Some(dir) = &self.repo_dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().await.map_err(CollectError::SpawnFailed)?;
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            return Err(CollectError::NonZeroExit {
                command,
                code: output.status.code().unwrap_or(-1),
                stderr,
            });
        }

        if reject_stderr && !stderr.is_empty() {
            return Err(CollectError::StderrOutput { command, stderr });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

/// Check that `git` is on `PATH`.
pub fn check_git_installed() -> Result<(), CollectError> {
    which::which("git")
        .map(|_| ())
        .map_err(|_| CollectError::GitNotInstalled)
}

/// `git fetch` invocations that bring pull request heads and branches into
/// remote-tracking refs.
pub fn fetch_commands(remote: &str) -> Vec<Vec<String>> {
    [
        format!("+refs/pull/*/head:refs/remotes/{remote}/pr/*"),
        format!("+refs/heads/*:refs/remotes/{remote}/*"),
    ]
    .into_iter()
    .map(|refspec| {
        vec![
            "fetch".to_string(),
            "--no-tags".to_string(),
            "--prune".to_string(),
            remote.to_string(),
            refspec,
        ]
    })
    .collect()
}

/// `git log` invocation listing non-merge subjects, one quoted subject per line.
pub fn log_command(range: &PullRequestRange) -> Vec<String> {
    vec![
        "log".to_string(),
        "--no-merges".to_string(),
        range.head_ref(),
        format!("^{}", range.base_ref()),
        "--pretty='%s'".to_string(),
    ]
}

#[async_trait]
impl CommitSource for GitLogCollector {
    async fn collect(&self, range: &PullRequestRange) -> Result<Vec<String>, CollectError> {
        check_git_installed()?;

        if self.fetch {
            info!("Fetching pull request and branch refs from {}", range.remote);
            for args in fetch_commands(&range.remote) {
                self.run_git(&args, false).await?;
            }
        }

        let stdout = self.run_git(&log_command(range), true).await?;
        Ok(parse_log_output(&stdout))
    }
}
