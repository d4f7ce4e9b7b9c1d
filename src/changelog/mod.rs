//! Commit classification, grouping and HTML rendering.

pub mod classify;
pub mod group;
pub mod render;

pub use classify::{SeverityTier, classify, first_token};
pub use group::{ChangeGroup, group, group_key};
pub use render::{RenderOptions, render_document, render_sections};

/// Commit subjects split into severity tiers, each grouped by leading token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changelog {
    pub major: ChangeGroup,
    pub minor: ChangeGroup,
    pub other: ChangeGroup,
}

impl Changelog {
    /// Classify each message, then group it within its tier.
    pub fn from_messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut changelog = Self::default();

        for message in messages {
            let message = message.as_ref();
            changelog.tier_mut(classify(message)).push(message);
        }

        changelog
    }

    pub fn tier(&self, tier: SeverityTier) -> &ChangeGroup {
        match tier {
            SeverityTier::Major => &self.major,
            SeverityTier::Minor => &self.minor,
            SeverityTier::Other => &self.other,
        }
    }

    fn tier_mut(&mut self, tier: SeverityTier) -> &mut ChangeGroup {
        match tier {
            SeverityTier::Major => &mut self.major,
            SeverityTier::Minor => &mut self.minor,
            SeverityTier::Other => &mut self.other,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.major.is_empty() && self.minor.is_empty() && self.other.is_empty()
    }

    /// Highest tier with at least one message, i.e. the suggested version bump.
    pub fn highest_tier(&self) -> Option<SeverityTier> {
        SeverityTier::RENDER_ORDER
            .into_iter()
            .find(|tier| !self.tier(*tier).is_empty())
    }

    /// Message counts per non-empty tier, in rendering order.
    pub fn count_by_tier(&self) -> Vec<(SeverityTier, usize)> {
        SeverityTier::RENDER_ORDER
            .into_iter()
            .map(|tier| (tier, self.tier(tier).message_count()))
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    /// Render the tier sections (without the surrounding document).
    pub fn render_sections(&self, options: RenderOptions) -> String {
        let tiers: Vec<(&str, &ChangeGroup)> = SeverityTier::RENDER_ORDER
            .iter()
            .map(|tier| (tier.title(), self.tier(*tier)))
            .collect();

        render_sections(&tiers, options)
    }

    /// Render the full comment body addressed to `user`.
    pub fn render(&self, user: &str, options: RenderOptions) -> String {
        render_document(user, &self.render_sections(options))
    }
}
