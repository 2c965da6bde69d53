//! src/errors.rs

use std::path::PathBuf;
use thiserror::Error;

/// Domain errors raised while reading hook configuration or resolving hooks.
///
/// Filesystem and process failures are not listed here; those travel as
/// `anyhow::Error` with context attached at the call site.
#[derive(Debug, Error)]
pub enum HooksError {
    #[error("no hook configuration found at {}; run `githooks init` to create one", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("could not parse {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("'{0}' is not a git hook name")]
    UnknownHook(String),

    #[error("commands for hook '{0}' must be a string or an array of strings")]
    InvalidCommands(String),

    #[error("hook '{0}' is not defined")]
    HookNotDefined(String),
}
