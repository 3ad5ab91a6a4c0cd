//! Version resolution - decides the next tag to publish, if any
//!
//! Pure and total over its inputs: the channel, the manifest base version,
//! the tag snapshot, and the ancestry-latest tag. VCS access happens in the
//! gateway layer; failures there degrade to defaults before reaching here.

use crate::domain::{Channel, SemanticVersion};

/// A resolved publication target
///
/// `as_beta` records how the version must be rendered. The resolver only sets
/// it for versions carrying a beta ordinal, which is what makes
/// [SemanticVersion::format] safe to call on the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub version: SemanticVersion,
    pub as_beta: bool,
}

impl Resolution {
    /// Render the resolved version as a tag name
    pub fn tag_name(&self) -> String {
        self.version.format(self.as_beta)
    }
}

/// Compute the next version to publish for the given channel
///
/// Returns `None` when no publication is needed. Feature and fix branches
/// pre-compute their prospective merged version and advance a beta train for
/// it; the integration branch advances the beta train of the base version
/// itself; the release branch only promotes the latest reachable beta to
/// stable and never bumps.
pub fn resolve(
    channel: Channel,
    base: &SemanticVersion,
    tags: &[String],
    latest_tag: &str,
) -> Option<Resolution> {
    match channel {
        Channel::Release => {
            let latest = SemanticVersion::parse(latest_tag)?;
            Some(Resolution {
                version: latest,
                as_beta: false,
            })
        }
        Channel::Integration => Some(next_beta(base, tags)),
        Channel::Feature => Some(next_beta(&base.bump_minor(), tags)),
        Channel::Fix => Some(next_beta(&base.bump_patch(), tags)),
        Channel::Other => None,
    }
}

/// Continue the beta train for a triple: highest existing beta plus one,
/// or beta.0 when the triple has no betas yet
fn next_beta(triple: &SemanticVersion, tags: &[String]) -> Resolution {
    let version = match latest_beta_for(triple, tags) {
        Some(latest) => SemanticVersion {
            beta: latest.beta.map(|b| b + 1),
            ..latest
        },
        None => SemanticVersion {
            beta: Some(0),
            ..*triple
        },
    };

    Resolution {
        version,
        as_beta: true,
    }
}

/// Highest-beta version among tags matching the triple exactly
///
/// Unparsable tags are skipped silently. Duplicate ordinals collapse under
/// `max`, so a stray re-created tag cannot skew the result.
fn latest_beta_for(triple: &SemanticVersion, tags: &[String]) -> Option<SemanticVersion> {
    tags.iter()
        .filter_map(|tag| SemanticVersion::parse(tag))
        .filter(|v| v.same_triple(triple) && v.beta.is_some())
        .max_by_key(|v| v.beta)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_integration_first_beta() {
        let base = SemanticVersion::new(1, 2, 0);
        let resolution = resolve(Channel::Integration, &base, &[], "v0.1.0").unwrap();
        assert_eq!(resolution.tag_name(), "v1.2.0-beta.0");
    }

    #[test]
    fn test_integration_advances_beta_train() {
        let base = SemanticVersion::new(1, 2, 0);
        let tags = tags(&["v1.2.0-beta.0", "v1.2.0-beta.1"]);
        let resolution = resolve(Channel::Integration, &base, &tags, "v1.2.0-beta.1").unwrap();
        assert_eq!(resolution.tag_name(), "v1.2.0-beta.2");
    }

    #[test]
    fn test_integration_ignores_other_triples() {
        let base = SemanticVersion::new(1, 2, 0);
        let tags = tags(&["v1.1.0-beta.7", "v1.2.1-beta.3", "v1.2.0"]);
        let resolution = resolve(Channel::Integration, &base, &tags, "v1.2.0").unwrap();
        assert_eq!(resolution.tag_name(), "v1.2.0-beta.0");
    }

    #[test]
    fn test_feature_bumps_minor() {
        let base = SemanticVersion::new(1, 2, 0);
        let resolution = resolve(Channel::Feature, &base, &[], "v1.2.0").unwrap();
        assert_eq!(resolution.tag_name(), "v1.3.0-beta.0");
    }

    #[test]
    fn test_feature_ignores_base_triple_betas() {
        let base = SemanticVersion::new(1, 2, 0);
        let tags = tags(&["v1.2.0-beta.0", "v1.2.0-beta.1"]);
        let resolution = resolve(Channel::Feature, &base, &tags, "v1.2.0-beta.1").unwrap();
        assert_eq!(resolution.tag_name(), "v1.3.0-beta.0");
    }

    #[test]
    fn test_feature_continues_its_own_train() {
        let base = SemanticVersion::new(1, 2, 0);
        let tags = tags(&["v1.3.0-beta.0", "v1.3.0-beta.1"]);
        let resolution = resolve(Channel::Feature, &base, &tags, "v1.3.0-beta.1").unwrap();
        assert_eq!(resolution.tag_name(), "v1.3.0-beta.2");
    }

    #[test]
    fn test_feature_resets_patch() {
        let base = SemanticVersion::new(1, 2, 5);
        let resolution = resolve(Channel::Feature, &base, &[], "v1.2.5").unwrap();
        assert_eq!(resolution.tag_name(), "v1.3.0-beta.0");
    }

    #[test]
    fn test_fix_bumps_patch_only() {
        let base = SemanticVersion::new(1, 2, 0);
        let resolution = resolve(Channel::Fix, &base, &[], "v1.2.0").unwrap();
        assert_eq!(resolution.tag_name(), "v1.2.1-beta.0");
    }

    #[test]
    fn test_fix_continues_its_own_train() {
        let base = SemanticVersion::new(1, 2, 0);
        let tags = tags(&["v1.2.1-beta.0"]);
        let resolution = resolve(Channel::Fix, &base, &tags, "v1.2.1-beta.0").unwrap();
        assert_eq!(resolution.tag_name(), "v1.2.1-beta.1");
    }

    #[test]
    fn test_release_promotes_beta_to_stable() {
        let base = SemanticVersion::new(1, 3, 0);
        let resolution = resolve(Channel::Release, &base, &[], "v1.3.0-beta.2").unwrap();
        assert_eq!(resolution.tag_name(), "v1.3.0");
        assert!(!resolution.as_beta);
    }

    #[test]
    fn test_release_stable_is_idempotent() {
        let base = SemanticVersion::new(1, 3, 0);
        let resolution = resolve(Channel::Release, &base, &[], "v1.3.0").unwrap();
        assert_eq!(resolution.tag_name(), "v1.3.0");
    }

    #[test]
    fn test_release_unparsable_latest_is_no_op() {
        let base = SemanticVersion::new(1, 3, 0);
        assert!(resolve(Channel::Release, &base, &[], "nightly-2024").is_none());
    }

    #[test]
    fn test_other_never_publishes() {
        let base = SemanticVersion::new(1, 2, 0);
        let tags = tags(&["v1.2.0-beta.0", "v1.3.0-beta.4"]);
        assert!(resolve(Channel::Other, &base, &tags, "v1.3.0-beta.4").is_none());
    }

    #[test]
    fn test_unparsable_tags_are_skipped() {
        let base = SemanticVersion::new(1, 2, 0);
        let tags = tags(&["nightly", "v1.2.0-beta.0", "v1.2.0-rc.9", "docs-v2"]);
        let resolution = resolve(Channel::Integration, &base, &tags, "v1.2.0-beta.0").unwrap();
        assert_eq!(resolution.tag_name(), "v1.2.0-beta.1");
    }

    #[test]
    fn test_duplicate_beta_ordinals_collapse() {
        // Two tag spellings of the same ordinal must count once
        let base = SemanticVersion::new(1, 2, 0);
        let tags = tags(&["v1.2.0-beta.1", "1.2.0-beta.1"]);
        let resolution = resolve(Channel::Integration, &base, &tags, "v1.2.0-beta.1").unwrap();
        assert_eq!(resolution.tag_name(), "v1.2.0-beta.2");
    }

    #[test]
    fn test_beta_selection_is_numeric_not_lexicographic() {
        let base = SemanticVersion::new(1, 2, 0);
        let tags = tags(&["v1.2.0-beta.2", "v1.2.0-beta.10"]);
        let resolution = resolve(Channel::Integration, &base, &tags, "v1.2.0-beta.10").unwrap();
        assert_eq!(resolution.tag_name(), "v1.2.0-beta.11");
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let base = SemanticVersion::new(1, 2, 0);
        let tags = tags(&["v1.2.0-beta.0", "v1.2.0-beta.1"]);
        let first = resolve(Channel::Integration, &base, &tags, "v1.2.0-beta.1");
        let second = resolve(Channel::Integration, &base, &tags, "v1.2.0-beta.1");
        assert_eq!(first, second);
    }
}
