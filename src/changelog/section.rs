use crate::changelog::group::ChangelogGroup;

/// The markdown section generated for one release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogSection {
    /// `<header_prefix> <version>`
    pub header: String,
    pub groups: Vec<ChangelogGroup>,
}

impl ChangelogSection {
    pub fn new(
        header_prefix: &str,
        version: &str,
        groups: Vec<ChangelogGroup>,
    ) -> Self {
        Self {
            header: format!("{header_prefix} {version}"),
            groups,
        }
    }

    /// Render the header, its `=` underline and every non-empty group.
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str(&self.header);
        out.push('\n');
        out.push_str(&"=".repeat(self.header.chars().count()));
        out.push('\n');

        for group in self.groups.iter().filter(|g| !g.lines.is_empty()) {
            out.push('\n');

            if !group.title.is_empty() {
                out.push_str("#### ");
                out.push_str(&group.title);
                out.push_str("\n\n");
            }

            for line in group.lines.iter() {
                out.push_str(line);
            }
        }

        out
    }
}
