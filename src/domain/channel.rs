use regex::Regex;
use std::fmt;

/// Role of the current branch, driving version-bump policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Feature,
    Fix,
    Integration,
    Release,
    Other,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Feature => "feature",
            Channel::Fix => "fix",
            Channel::Integration => "integration",
            Channel::Release => "release",
            Channel::Other => "other",
        };
        write!(f, "{}", name)
    }
}

/// Branch naming scheme used to classify refs into channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchTaxonomy {
    pub feature_prefix: String,
    pub fix_prefix: String,
    pub integration_branch: String,
    pub release_branch: String,
}

impl Default for BranchTaxonomy {
    fn default() -> Self {
        BranchTaxonomy {
            feature_prefix: "feature/".to_string(),
            fix_prefix: "fix/".to_string(),
            integration_branch: "main".to_string(),
            release_branch: "release".to_string(),
        }
    }
}

impl BranchTaxonomy {
    /// Classify a branch name into a channel
    ///
    /// Prefix rules take priority over the exact integration/release names;
    /// anything unrecognized falls through to [Channel::Other].
    pub fn classify(&self, branch_name: &str) -> Channel {
        if branch_name.starts_with(&self.feature_prefix) {
            Channel::Feature
        } else if branch_name.starts_with(&self.fix_prefix) {
            Channel::Fix
        } else if branch_name == self.integration_branch {
            Channel::Integration
        } else if branch_name == self.release_branch {
            Channel::Release
        } else {
            Channel::Other
        }
    }

    /// Recover the originating channel from the latest commit subject
    ///
    /// On the integration and release branches the true source branch is gone
    /// after the merge. Two patterns are tried in order: a GitHub merge
    /// message naming a feature/fix source branch, then a conventional
    /// feat/fix subject prefix. The hint is reported for operator visibility
    /// only; resolver dispatch stays on the surface channel.
    pub fn origin_hint(&self, commit_subject: &str) -> Option<Channel> {
        let feature_stem = self.feature_prefix.trim_end_matches('/');
        let fix_stem = self.fix_prefix.trim_end_matches('/');

        let merge_pattern = format!(
            r"Merge pull request #\d+ from .+/({}|{})/.+",
            regex::escape(feature_stem),
            regex::escape(fix_stem)
        );
        if let Some(captures) = Regex::new(&merge_pattern)
            .ok()
            .and_then(|re| re.captures(commit_subject))
        {
            if let Some(stem) = captures.get(1) {
                return if stem.as_str() == feature_stem {
                    Some(Channel::Feature)
                } else {
                    Some(Channel::Fix)
                };
            }
        }

        if commit_subject.starts_with("feat:") || commit_subject.starts_with("feat(") {
            return Some(Channel::Feature);
        }
        if commit_subject.starts_with("fix:") || commit_subject.starts_with("fix(") {
            return Some(Channel::Fix);
        }

        None
    }
}
