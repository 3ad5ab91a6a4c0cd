//! Domain logic - pure business rules independent of git operations

pub mod branch;
pub mod channel;
pub mod version;

pub use branch::BranchSources;
pub use channel::{BranchTaxonomy, Channel};
pub use version::SemanticVersion;
