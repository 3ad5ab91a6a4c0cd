use crate::error::{AutoTagError, Result};
use crate::git::{TagGateway, DEFAULT_BASE_TAG};
use std::sync::Mutex;

/// Mock gateway for testing without actual git operations
///
/// Reads come from preset fixtures; writes are recorded so tests can assert
/// on exactly which tags a run created and pushed. Either write can be made
/// to fail to exercise the fatal path.
pub struct MockGateway {
    tags: Vec<String>,
    latest_tag: Option<String>,
    head_summary: Option<String>,
    branch: Option<String>,
    fail_create: bool,
    fail_push: bool,
    created: Mutex<Vec<String>>,
    pushed: Mutex<Vec<(String, String)>>,
}

impl MockGateway {
    /// Create an empty mock gateway
    pub fn new() -> Self {
        MockGateway {
            tags: Vec::new(),
            latest_tag: None,
            head_summary: None,
            branch: None,
            fail_create: false,
            fail_push: false,
            created: Mutex::new(Vec::new()),
            pushed: Mutex::new(Vec::new()),
        }
    }

    /// Preset the repository's tag list
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Preset the ancestry-latest tag
    pub fn with_latest_tag(mut self, tag: &str) -> Self {
        self.latest_tag = Some(tag.to_string());
        self
    }

    /// Preset the latest commit subject line
    pub fn with_head_summary(mut self, summary: &str) -> Self {
        self.head_summary = Some(summary.to_string());
        self
    }

    /// Preset the checked-out branch
    pub fn with_branch(mut self, branch: &str) -> Self {
        self.branch = Some(branch.to_string());
        self
    }

    /// Make tag creation fail
    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    /// Make tag pushing fail
    pub fn failing_push(mut self) -> Self {
        self.fail_push = true;
        self
    }

    /// Tags created during the run
    pub fn created_tags(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }

    /// (remote, tag) pairs pushed during the run
    pub fn pushed_tags(&self) -> Vec<(String, String)> {
        self.pushed.lock().unwrap().clone()
    }

    /// Whether the run performed any write at all
    pub fn wrote_anything(&self) -> bool {
        !self.created_tags().is_empty() || !self.pushed_tags().is_empty()
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl TagGateway for MockGateway {
    fn latest_tag(&self) -> String {
        self.latest_tag
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_TAG.to_string())
    }

    fn all_tags(&self) -> Vec<String> {
        self.tags.clone()
    }

    fn head_commit_summary(&self) -> Option<String> {
        self.head_summary.clone()
    }

    fn current_branch(&self) -> Option<String> {
        self.branch.clone()
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        if self.fail_create {
            return Err(AutoTagError::tag(format!("Cannot create tag '{}'", name)));
        }
        self.created.lock().unwrap().push(name.to_string());
        Ok(())
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        if self.fail_push {
            return Err(AutoTagError::remote(format!(
                "Failed to push tag '{}'",
                name
            )));
        }
        self.pushed
            .lock()
            .unwrap()
            .push((remote.to_string(), name.to_string()));
        Ok(())
    }
}
