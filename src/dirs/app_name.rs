use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Name of an application, used as a single path component under a base directory.
///
/// Construction rejects anything which could escape the base directory.
///
/// ```rust
/// use standardpaths::dirs::AppName;
///
/// assert!(AppName::new("myapp").is_ok());
/// assert!(AppName::new("../etc").is_err());
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct AppName(String);

impl AppName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        match Self::check(&name) {
            Ok(()) => Ok(Self(name)),
            Err(reason) => Err(Error::InvalidAppName { name, reason }),
        }
    }

    fn check(name: &str) -> Result<(), &'static str> {
        if name.is_empty() {
            return Err("name is empty");
        }
        if name == "." || name == ".." {
            return Err("name refers to a directory, not a component");
        }
        if name.contains(['/', '\\']) {
            return Err("name contains a path separator");
        }
        if name.contains('\0') {
            return Err("name contains a NUL byte");
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AppName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<Path> for AppName {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AppName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for AppName {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for AppName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}
