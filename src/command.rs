//! Command execution for changelog-ci.
//!
//! The `generate` command runs the whole pipeline for the pull request that
//! triggered the workflow:
//!
//! 1. **Config**: load the optional JSON config, falling back to defaults
//! 2. **Version**: read the pull request title and extract the release version
//! 3. **Release lookup**: find when the latest release was published
//! 4. **Fetch**: search pull requests merged since that release
//! 5. **Group & render**: bucket pull requests by label into a markdown section
//! 6. **Write**: prepend the section to the changelog file
//!
//! Every step except the final write recovers from failure by logging and
//! skipping generation. Only changelog file I/O errors are returned.

/// Pipeline that generates and writes a changelog section.
pub mod generate;

/// Inputs and outcomes shared by commands.
pub mod types;
