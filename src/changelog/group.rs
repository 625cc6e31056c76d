use std::collections::HashSet;

use crate::{config::GroupConfig, forge::types::PullRequestRecord};

/// Title of the group collecting pull requests no configured group claimed.
pub const OTHER_CHANGES_TITLE: &str = "Other Changes";

/// A titled list of rendered changelog lines. The title is empty when no
/// groups are configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogGroup {
    pub title: String,
    pub lines: Vec<String>,
}

impl ChangelogGroup {
    fn new<'a>(
        title: &str,
        pull_requests: impl IntoIterator<Item = &'a PullRequestRecord>,
    ) -> Self {
        Self {
            title: title.to_string(),
            lines: pull_requests.into_iter().map(changelog_line).collect(),
        }
    }
}

/// Render a single changelog entry.
pub fn changelog_line(pull_request: &PullRequestRecord) -> String {
    format!(
        "* [#{}]({}): {}\n",
        pull_request.number, pull_request.url, pull_request.title
    )
}

/// Partition pull requests into groups following the configured order.
///
/// A pull request belongs to the first group sharing one of its labels.
/// Unclaimed pull requests go to [`OTHER_CHANGES_TITLE`]. Without configured
/// groups everything lands in a single untitled group. Empty groups are
/// dropped and input order is kept within each group.
pub fn group_pull_requests(
    groups: &[GroupConfig],
    pull_requests: &[PullRequestRecord],
) -> Vec<ChangelogGroup> {
    if groups.is_empty() {
        return non_empty(vec![ChangelogGroup::new("", pull_requests)]);
    }

    let mut claimed: HashSet<u64> = HashSet::new();
    let mut result = Vec::with_capacity(groups.len() + 1);

    for group in groups {
        let matched: HashSet<u64> = pull_requests
            .iter()
            .filter(|pr| !claimed.contains(&pr.number))
            .filter(|pr| !pr.labels.is_disjoint(&group.labels))
            .map(|pr| pr.number)
            .collect();

        result.push(ChangelogGroup::new(
            &group.title,
            pull_requests
                .iter()
                .filter(|pr| matched.contains(&pr.number)),
        ));

        claimed.extend(matched);
    }

    result.push(ChangelogGroup::new(
        OTHER_CHANGES_TITLE,
        pull_requests.iter().filter(|pr| !claimed.contains(&pr.number)),
    ));

    non_empty(result)
}

fn non_empty(groups: Vec<ChangelogGroup>) -> Vec<ChangelogGroup> {
    groups.into_iter().filter(|g| !g.lines.is_empty()).collect()
}
