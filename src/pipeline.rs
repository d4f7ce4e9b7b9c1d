//! The changelog run: collect, classify, group, render, publish.

use tracing::{debug, info};

use crate::changelog::{Changelog, SeverityTier};
use crate::collect::CommitSource;
use crate::config::Config;
use crate::error::PipelineError;
use crate::github::{CommentPublisher, PublishedComment};

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The range had no commits; nothing was posted.
    NoCommits,
    /// The changelog was rendered but not posted.
    DryRun { html: String },
    /// The changelog was posted. `tier` is the suggested version bump.
    Published {
        comment: PublishedComment,
        tier: SeverityTier,
    },
}

/// Run the pipeline once.
///
/// Every failure aborts the run; nothing is posted unless rendering completed.
pub async fn run(
    config: &Config,
    source: &dyn CommitSource,
    publisher: &dyn CommentPublisher,
) -> Result<RunOutcome, PipelineError> {
    info!("Generating changelog....");

    let messages = source.collect(&config.range).await?;
    if messages.is_empty() {
        info!(
            "No commits between {} and {}. Nothing to post.",
            config.range.base_ref(),
            config.range.head_ref()
        );
        return Ok(RunOutcome::NoCommits);
    }

    info!("Found {} commits", messages.len());

    let changelog = Changelog::from_messages(&messages);
    for (tier, count) in changelog.count_by_tier() {
        debug!("{} {} change(s)", count, tier);
    }

    // Non-empty input always lands in some tier.
    let tier = changelog.highest_tier().unwrap_or(SeverityTier::Other);
    info!("Suggested version bump: {}", tier);

    let html = changelog.render(&config.user, config.render);

    if config.dry_run {
        return Ok(RunOutcome::DryRun { html });
    }

    let comment = publisher.publish(&html).await?;
    Ok(RunOutcome::Published { comment, tier })
}
