//! Severity classification of commit subjects.
//!
//! Follows [gitmoji](https://gitmoji.dev/) and
//! [Conventional Commits](https://www.conventionalcommits.org/en/v1.0.0/):
//! anything that is neither major nor minor is treated as a patch.

/// Markers anywhere in the message that denote a breaking change.
const MAJOR_MARKERS: &[&str] = &[":boom:", "BREAKING CHANGE", "BREAKING_CHANGE"];

/// Markers anywhere in the message that denote a new feature.
const MINOR_MARKERS: &[&str] = &[":sparkles:"];

/// Version bump implied by a single commit.
///
/// Ordered so that the highest tier compares greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeverityTier {
    Other,
    Minor,
    Major,
}

impl SeverityTier {
    /// All tiers in rendering order.
    pub const RENDER_ORDER: [SeverityTier; 3] =
        [SeverityTier::Major, SeverityTier::Minor, SeverityTier::Other];

    /// Heading shown in the rendered changelog.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Major => "Major",
            Self::Minor => "Minor",
            Self::Other => "Patch/Others",
        }
    }

    /// Short name used in log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Other => "patch",
        }
    }
}

impl std::fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First whitespace-delimited token of a message, matching [`group_key`].
///
/// A message without whitespace is its own first token.
///
/// [`group_key`]: super::group::group_key
pub fn first_token(message: &str) -> &str {
    message.split(char::is_whitespace).next().unwrap_or(message)
}

/// Classify a commit subject. Major is tested before minor.
pub fn classify(message: &str) -> SeverityTier {
    if is_major(message) {
        SeverityTier::Major
    } else if is_minor(message) {
        SeverityTier::Minor
    } else {
        SeverityTier::Other
    }
}

fn is_major(message: &str) -> bool {
    MAJOR_MARKERS.iter().any(|m| message.contains(m)) || first_token(message).contains('!')
}

fn is_minor(message: &str) -> bool {
    MINOR_MARKERS.iter().any(|m| message.contains(m)) || first_token(message).contains("feat")
}
