//! Integration tests for grouping and HTML rendering.

use pr_changelog::changelog::{Changelog, RenderOptions, group};

const SAMPLE: [&str; 4] = [":bug: Fix A", ":bug: Fix B", ":sparkles: Add C", "feat: Add D"];

#[test]
fn test_grouping_is_stable_across_interleaving() {
    let grouped = group([
        ":bug: Fix 1",
        ":memo: Doc 1",
        ":bug: Fix 2",
        ":memo: Doc 2",
        ":bug: Fix 3",
    ]);

    let groups: Vec<(&str, Vec<&str>)> = grouped
        .iter()
        .map(|(key, messages)| (key, messages.iter().map(String::as_str).collect()))
        .collect();

    assert_eq!(
        groups,
        vec![
            (":bug:", vec![":bug: Fix 1", ":bug: Fix 2", ":bug: Fix 3"]),
            (":memo:", vec![":memo: Doc 1", ":memo: Doc 2"]),
        ]
    );
}

#[test]
fn test_message_without_space_groups_under_itself() {
    let grouped = group(["WIP", "WIP", ":bug: Fix"]);

    assert_eq!(grouped.get("WIP").map(|m| m.len()), Some(2));
    assert_eq!(grouped.len(), 2);
}

#[test]
fn test_full_document_for_mixed_changes() {
    let html = Changelog::from_messages(SAMPLE).render("octocat", RenderOptions::default());

    let expected = "
<section>
    <p>
        Hey @octocat, you can find your changelog underneath.
    </p>
    <h1>Changelog</h1>
    <h2>Minor</h2>:sparkles: Add C<br/><br/>feat: Add D<br/><br/><h2>Patch/Others</h2>:bug: Fix A<br/>:bug: Fix B<br/><br/>
</section>
";
    assert_eq!(html, expected);
}

#[test]
fn test_all_tiers_render_in_order() {
    let html = Changelog::from_messages([":bug: Fix", ":sparkles: Add", ":boom: Break"])
        .render_sections(RenderOptions::default());

    let major = html.find("<h2>Major</h2>").expect("Major heading");
    let minor = html.find("<h2>Minor</h2>").expect("Minor heading");
    let patch = html.find("<h2>Patch/Others</h2>").expect("Patch heading");
    assert!(major < minor && minor < patch);
}

#[test]
fn test_only_non_empty_tiers_emit_headings() {
    let html = Changelog::from_messages([":bug: Fix"]).render_sections(RenderOptions::default());

    assert_eq!(html, "<h2>Patch/Others</h2>:bug: Fix<br/><br/>");
}

#[test]
fn test_empty_changelog_renders_no_sections() {
    let changelog = Changelog::from_messages(Vec::<String>::new());

    assert!(changelog.is_empty());
    assert_eq!(changelog.render_sections(RenderOptions::default()), "");
}

#[test]
fn test_rendering_twice_is_identical() {
    let changelog = Changelog::from_messages(SAMPLE);

    assert_eq!(
        changelog.render("octocat", RenderOptions::default()),
        changelog.render("octocat", RenderOptions::default())
    );
}

#[test]
fn test_without_group_separators() {
    let html = Changelog::from_messages(SAMPLE).render_sections(RenderOptions {
        group_separators: false,
    });

    assert_eq!(
        html,
        "<h2>Minor</h2>:sparkles: Add C<br/>feat: Add D<br/><h2>Patch/Others</h2>:bug: Fix A<br/>:bug: Fix B<br/>"
    );
}
