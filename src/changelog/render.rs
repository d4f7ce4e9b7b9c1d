//! HTML rendering of grouped changes for a pull request comment.

use super::group::ChangeGroup;

/// Line break emitted after every message and, optionally, after every group.
const LINE_BREAK: &str = "<br/>";

/// Rendering switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit an extra line break after each group.
    pub group_separators: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            group_separators: true,
        }
    }
}

/// Render one group set as a run of `message<br/>` entries.
pub fn render_group(group: &ChangeGroup, options: RenderOptions) -> String {
    let mut output = String::new();

    for (_, messages) in group.iter() {
        for message in messages {
            output.push_str(message);
            output.push_str(LINE_BREAK);
        }
        if options.group_separators {
            output.push_str(LINE_BREAK);
        }
    }

    output
}

/// Render tier sections in the given order. Empty tiers are skipped.
pub fn render_sections(tiers: &[(&str, &ChangeGroup)], options: RenderOptions) -> String {
    let mut output = String::new();

    for (title, group) in tiers {
        if group.is_empty() {
            continue;
        }
        output.push_str(&format!("<h2>{}</h2>", title));
        output.push_str(&render_group(group, options));
    }

    output
}

/// Wrap rendered sections in the comment document addressed to `user`.
pub fn render_document(user: &str, sections: &str) -> String {
    format!(
        "
<section>
    <p>
        Hey @{user}, you can find your changelog underneath.
    </p>
    <h1>Changelog</h1>
    {sections}
</section>
"
    )
}
