//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::Path;

use git2::{Oid, Repository, Signature};

/// Remote name used for fake remote-tracking refs.
pub const REMOTE: &str = "origin";

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository in a temp directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");
        Self { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Get the test signature for commits.
    fn signature(&self) -> Signature<'_> {
        Signature::now("Test User", "test@example.com").expect("Failed to create signature")
    }

    /// Append the message to a test file so every commit has a distinct tree.
    fn write_tree(&self, message: &str) -> Oid {
        let file_name = "test.txt";
        let content = format!("{}\n{}", message, self.repo.path().display());
        let previous = std::fs::read_to_string(self.dir.path().join(file_name)).unwrap_or_default();
        std::fs::write(self.dir.path().join(file_name), format!("{previous}{content}\n"))
            .expect("Failed to write test file");

        let mut index = self.repo.index().expect("Failed to get index");
        index
            .add_path(Path::new(file_name))
            .expect("Failed to add file");
        index.write().expect("Failed to write index");
        index.write_tree().expect("Failed to write tree")
    }

    /// Create a commit on HEAD with the given message. Returns the commit OID.
    pub fn commit(&self, message: &str) -> Oid {
        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<Oid> = parent.iter().map(|c| c.id()).collect();
        self.commit_with_parents(Some("HEAD"), message, &parents)
    }

    /// Create a commit with explicit parents, optionally updating a ref.
    pub fn commit_with_parents(&self, update_ref: Option<&str>, message: &str, parents: &[Oid]) -> Oid {
        let sig = self.signature();
        let tree_id = self.write_tree(message);
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent_commits: Vec<git2::Commit> = parents
            .iter()
            .map(|oid| self.repo.find_commit(*oid).expect("Failed to find parent"))
            .collect();
        let parent_refs: Vec<&git2::Commit> = parent_commits.iter().collect();

        self.repo
            .commit(update_ref, &sig, &sig, message, &tree, &parent_refs)
            .expect("Failed to create commit")
    }

    /// Point `refs/remotes/origin/<name>` at the given OID.
    pub fn remote_ref(&self, name: &str, oid: Oid) {
        self.repo
            .reference(&format!("refs/remotes/{REMOTE}/{name}"), oid, true, "test ref")
            .expect("Failed to create remote ref");
    }

    /// Point the local branch `refs/heads/<name>` at the given OID.
    pub fn branch_ref(&self, name: &str, oid: Oid) {
        self.repo
            .reference(&format!("refs/heads/{name}"), oid, true, "test branch")
            .expect("Failed to create branch ref");
    }
}

/// Build a repository where `origin/master` has one commit and
/// `origin/pr/<number>` adds the given commits on top of it.
pub fn repo_with_pull_request(number: u64, messages: &[&str]) -> TestRepo {
    let test_repo = TestRepo::new();
    let base = test_repo.commit(":tada: Initial commit");
    test_repo.remote_ref("master", base);

    let mut head = base;
    for message in messages {
        head = test_repo.commit(message);
    }
    test_repo.remote_ref(&format!("pr/{number}"), head);

    test_repo
}
