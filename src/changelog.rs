//! Changelog generation: grouping pull requests by label, rendering the
//! markdown section and prepending it to the changelog file.

/// Label based grouping of pull requests.
pub mod group;

/// Markdown rendering of a version section.
pub mod section;

/// Prepend-style writing to the changelog file.
pub mod writer;

pub use group::{ChangelogGroup, OTHER_CHANGES_TITLE, group_pull_requests};
pub use section::ChangelogSection;
pub use writer::FileWriter;
