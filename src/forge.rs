//! Interface to the code-hosting service queried for releases and merged
//! pull requests.

/// Connection settings and API constants.
pub mod config;

/// GitHub REST API client implementation.
pub mod github;

/// Common trait for forge access.
pub mod traits;

/// Normalized data returned from the forge.
pub mod types;
