//! Commit collection from refs already present in a local clone, using git2.

use std::path::PathBuf;

use async_trait::async_trait;
use git2::{Oid, Repository, Sort};
use tracing::debug;

use crate::error::CollectError;

use super::{CommitSource, PullRequestRange};

/// Walks `head ^base` in a local repository without touching the network.
#[derive(Debug, Clone)]
pub struct LocalRepoCollector {
    path: PathBuf,
}

impl LocalRepoCollector {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn collect_sync(&self, range: &PullRequestRange) -> Result<Vec<String>, CollectError> {
        let repo = Repository::open(&self.path).map_err(CollectError::OpenRepository)?;
        let head = resolve_reference(&repo, &range.head_ref())?;
        let base = resolve_reference(&repo, &range.base_ref())?;
        fetch_subjects(&repo, base, head)
    }
}

#[async_trait]
impl CommitSource for LocalRepoCollector {
    async fn collect(&self, range: &PullRequestRange) -> Result<Vec<String>, CollectError> {
        self.collect_sync(range)
    }
}

/// Resolve a remote-tracking ref (or any revspec) to a commit OID.
///
/// On failure the error of the last candidate tried is reported.
fn resolve_reference(repo: &Repository, reference: &str) -> Result<Oid, CollectError> {
    let candidates = [format!("refs/remotes/{reference}"), reference.to_string()];
    let mut last_error = None;

    for candidate in &candidates {
        match repo
            .revparse_single(candidate)
            .and_then(|obj| obj.peel_to_commit())
        {
            Ok(commit) => return Ok(commit.id()),
            Err(e) => {
                debug!("could not resolve {}: {}", candidate, e);
                last_error = Some(e);
            }
        }
    }

    Err(CollectError::ReferenceNotFound(
        reference.to_string(),
        last_error.unwrap_or_else(|| git2::Error::from_str("Reference not found")),
    ))
}

/// Subjects of non-merge commits reachable from `to` but not from `from`, newest first.
pub fn fetch_subjects(repo: &Repository, from: Oid, to: Oid) -> Result<Vec<String>, CollectError> {
    let mut revwalk = repo.revwalk().map_err(CollectError::RevwalkError)?;
    revwalk
        .set_sorting(Sort::TOPOLOGICAL | Sort::TIME)
        .map_err(CollectError::RevwalkError)?;
    revwalk.push(to).map_err(CollectError::RevwalkError)?;
    revwalk.hide(from).map_err(CollectError::RevwalkError)?;

    let mut subjects = Vec::new();

    for oid_result in revwalk {
        let oid = oid_result.map_err(CollectError::RevwalkError)?;
        let commit = repo.find_commit(oid).map_err(CollectError::RevwalkError)?;

        if commit.parent_count() > 1 {
            debug!("skipping merge commit {}", oid);
            continue;
        }

        let subject = commit.summary().unwrap_or("").trim().to_string();
        if !subject.is_empty() {
            subjects.push(subject);
        }
    }

    Ok(subjects)
}
