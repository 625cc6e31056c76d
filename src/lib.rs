pub mod changelog;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod forge;

pub use cli::Args;
pub use command::{
    generate,
    types::{Inputs, Outcome},
};
pub use error::{ChangelogError, Result};

#[cfg(test)]
pub mod test_helpers;
