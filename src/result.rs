//! Result type used at the binary boundary.
//!
//! The library reports failures through [`crate::error::ChangelogError`];
//! `main` converts them into `color-eyre` reports so fatal errors (such as an
//! unwritable changelog file) are printed with context before the process
//! exits.
//!
//! # Usage
//!
//! ```rust,ignore
//! use color_eyre::eyre::WrapErr;
//! use crate::result::Result;
//!
//! fn run() -> Result<()> {
//!     initialize_logger(false).wrap_err("failed to initialize logger")?;
//!     Ok(())
//! }
//! ```

use color_eyre::eyre::Result as EyreResult;

/// Standard result type for the `changelog-ci` binary.
///
/// This is a type alias for `color_eyre::eyre::Result<T>`; use `.wrap_err()`
/// to add context as errors propagate to `main`.
pub type Result<T> = EyreResult<T>;
