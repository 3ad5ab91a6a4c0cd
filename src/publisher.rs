//! Publish orchestration
//!
//! Ties the pieces together for one run: detect the branch, classify it,
//! read the base version, snapshot the tags, resolve the next version, then
//! create and push the tag unless the decision is a no-op. The whole run is
//! a single pass over fresh state, so consecutive reruns are safe and
//! idempotent.

use crate::config::Config;
use crate::domain::{BranchSources, Channel};
use crate::error::{AutoTagError, Result};
use crate::git::TagGateway;
use crate::resolver;
use crate::{manifest, ui};

/// Final decision of a publish run
///
/// Every variant except a propagated error maps to a successful process
/// exit: skipping is an explicit outcome, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The channel does not publish (or the release train has nothing to promote)
    NoUpdateNeeded,
    /// The resolved tag already exists; zero writes performed
    AlreadyTagged(String),
    /// Dry run: the tag that would have been created
    WouldPublish(String),
    /// The tag was created and pushed
    Published(String),
}

/// One-shot publisher over a tag gateway
pub struct Publisher<'a, G: TagGateway> {
    config: &'a Config,
    gateway: &'a G,
}

impl<'a, G: TagGateway> Publisher<'a, G> {
    pub fn new(config: &'a Config, gateway: &'a G) -> Self {
        Publisher { config, gateway }
    }

    /// Run the publish sequence once
    ///
    /// `sources` carries the branch-name signals collected at startup; when
    /// none is present the gateway's checked-out branch is the last resort.
    pub fn run(&self, sources: &BranchSources, dry_run: bool) -> Result<Outcome> {
        let branch = self.detect_branch(sources)?;
        ui::display_status(&format!("Current branch: {}", branch));

        let taxonomy = self.config.taxonomy();
        let channel = taxonomy.classify(&branch);
        ui::display_status(&format!("Channel: {}", channel));

        // On the merge-target branches the originating branch is gone; the
        // recovered hint is reported but never changes resolver dispatch.
        if matches!(channel, Channel::Integration | Channel::Release) {
            if let Some(summary) = self.gateway.head_commit_summary() {
                if let Some(hint) = taxonomy.origin_hint(&summary) {
                    ui::display_status(&format!("Merged from a {} branch", hint));
                }
            }
        }

        let base = manifest::base_version(&self.config.manifest);
        ui::display_status(&format!("Base version: {}", base));

        let tags = self.gateway.all_tags();
        let latest = self.gateway.latest_tag();

        let resolution = match resolver::resolve(channel, &base, &tags, &latest) {
            Some(resolution) => resolution,
            None => {
                ui::display_skip("No version update needed for this branch");
                return Ok(Outcome::NoUpdateNeeded);
            }
        };

        let tag_name = resolution.tag_name();
        ui::display_status(&format!("Next version: {}", tag_name));

        if tags.contains(&tag_name) {
            ui::display_skip(&format!("Tag {} already exists, skipping", tag_name));
            return Ok(Outcome::AlreadyTagged(tag_name));
        }

        if dry_run {
            ui::display_success(&format!("Would create and push tag {}", tag_name));
            return Ok(Outcome::WouldPublish(tag_name));
        }

        self.gateway.create_tag(&tag_name)?;
        ui::display_success(&format!("Created tag: {}", tag_name));

        self.gateway.push_tag(&self.config.remote, &tag_name)?;
        ui::display_success(&format!(
            "Pushed tag: {} to {}",
            tag_name, self.config.remote
        ));

        Ok(Outcome::Published(tag_name))
    }

    fn detect_branch(&self, sources: &BranchSources) -> Result<String> {
        if let Some(name) = sources.resolve() {
            return Ok(name.to_string());
        }

        self.gateway
            .current_branch()
            .ok_or_else(|| AutoTagError::branch("Cannot determine the current branch"))
    }
}
