//! Git operations abstraction layer
//!
//! The [TagGateway] trait is the single seam between the decision logic and
//! the VCS. Read operations degrade to conventional defaults instead of
//! failing, which keeps the resolver pure and total over its inputs; the two
//! write operations are the only fatal failure path. Implementations:
//!
//! - [repository::Git2Gateway]: real repositories via the `git2` crate
//! - [mock::MockGateway]: in-memory implementation for tests

pub mod mock;
pub mod repository;

pub use mock::MockGateway;
pub use repository::Git2Gateway;

use crate::error::Result;

/// Fallback tag when no tag is reachable from HEAD or the query fails
pub const DEFAULT_BASE_TAG: &str = "v0.1.0";

/// Read and write surface against the repository's tags
///
/// Reads are snapshots: each is taken once per run and never refreshed, so a
/// run is deterministic over its inputs. Rerunning re-reads from scratch.
pub trait TagGateway: Send + Sync {
    /// Most recent tag in the ancestry of HEAD
    ///
    /// Ancestry order, not lexicographic: the commit history is walked from
    /// HEAD and the first tagged commit wins, so out-of-order tag creation
    /// and names like v1.9.0/v1.10.0 cannot misorder the result. Returns
    /// [DEFAULT_BASE_TAG] when no tag is reachable or the query fails.
    fn latest_tag(&self) -> String;

    /// Every tag name in the repository; empty on failure
    fn all_tags(&self) -> Vec<String>;

    /// Subject line of the latest commit, if available
    fn head_commit_summary(&self) -> Option<String>;

    /// Name of the checked-out branch, if it can be determined
    ///
    /// Last-resort branch signal for local runs without CI environment
    /// context.
    fn current_branch(&self) -> Option<String>;

    /// Create a lightweight tag on HEAD
    fn create_tag(&self, name: &str) -> Result<()>;

    /// Push a tag to the given remote
    fn push_tag(&self, remote: &str, name: &str) -> Result<()>;
}
