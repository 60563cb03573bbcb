use std::path::PathBuf;

use thiserror::Error;

/// Errors encountered when resolving standard paths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Home directory of the current user is undefined, e.g. in a minimal container.
    #[error("unable to determine the home directory of the current user")]
    UnresolvableHome,

    /// Home directory exists, but `~` cannot be expanded into it.
    #[error("home directory `{0:?}` is not an UTF-8 path")]
    NonUtf8Home(PathBuf),

    /// Application name cannot be used as a single path component.
    #[error("invalid application name `{name}`: {reason}")]
    InvalidAppName { name: String, reason: &'static str },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
