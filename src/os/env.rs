use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

use thiserror::Error;

/// Snapshot of environmental variables, taken once and never reloaded.
///
/// Lookup is case-insensitive on Windows, as its environment is.
#[derive(Debug, Clone)]
pub struct Env {
    keys: HashMap<OsString, OsString>,

    normalised_keys: HashMap<OsString, OsString>,
}

/// Errors encountered when getting environmental variable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvStrError {
    /// This variant indicates, that variable `$Missing.0` is missing.
    #[error("there is no environmental variable `${0:?}`")]
    Missing(OsString),

    /// This variant indicates, that variable `$Empty.0` is set to an empty string.
    #[error("environmental variable `${0:?}` is empty")]
    Empty(OsString),

    /// This variant indicates, that variable `$NonUTF8.0` is not an UTF-8 string.
    #[error("environmental variable `${0:?}` is not an UTF-8 string")]
    NonUTF8(OsString),
}

impl Env {
    /// Snapshot [`std::env::vars_os`].
    pub fn new() -> Self {
        Self::new_from(std::env::vars_os().collect())
    }

    /// Create new [`Env`] using `env` as existing environmental variables.
    pub fn new_from(env: HashMap<OsString, OsString>) -> Self {
        Self {
            normalised_keys: Env::normalize_map(&env),
            keys: env,
        }
    }

    /// Create [`Env`] without any variables.
    pub fn empty() -> Self {
        Self::new_from(HashMap::new())
    }

    fn normalize_key(key: impl AsRef<OsStr>) -> OsString {
        key.as_ref().to_ascii_uppercase()
    }

    fn normalize_map(keys: &HashMap<OsString, OsString>) -> HashMap<OsString, OsString> {
        keys.iter()
            .map(|(key, value)| (Env::normalize_key(key), value.clone()))
            .collect()
    }

    /// Get environmental variable pointed by `key`.
    ///
    /// # Returns
    /// `Option<&OsStr>`. `None` variant indicates missing key, `Some`: existing key.
    ///
    /// # Examples
    /// ```rust
    /// use standardpaths::os::env::Env;
    ///
    /// let env: Env = [("FOO", "bar")].into_iter().collect();
    /// assert_eq!(env.get_os("FOO").and_then(|v| v.to_str()), Some("bar"));
    /// ```
    pub fn get_os(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        let key = key.as_ref();
        match self.keys.get(key) {
            Some(x) => Some(x),
            None => {
                if cfg!(target_os = "windows") {
                    self.normalised_keys
                        .get(&Env::normalize_key(key))
                        .map(|x| x.as_ref())
                } else {
                    None
                }
            }
        }
    }

    /// Get non-empty environmental variable pointed by `key` and convert it to UTF-8.
    ///
    /// # Returns
    /// `Result<&str, EnvStrError>`. `Ok` variant indicates existing, non-empty UTF-8 variable,
    /// `Err` indicates some kind of error. See [`EnvStrError`] for details.
    ///
    /// # Examples
    /// ```rust
    /// use standardpaths::os::env::{Env, EnvStrError};
    ///
    /// let env: Env = [("EMPTY", "")].into_iter().collect();
    /// assert!(matches!(env.get("EMPTY"), Err(EnvStrError::Empty(_))));
    /// assert!(matches!(env.get("UNSET"), Err(EnvStrError::Missing(_))));
    /// ```
    pub fn get(&self, key: impl AsRef<OsStr>) -> Result<&str, EnvStrError> {
        let key = key.as_ref();
        let value = self
            .get_os(key)
            .ok_or_else(|| EnvStrError::Missing(key.to_os_string()))?;
        if value.is_empty() {
            return Err(EnvStrError::Empty(key.to_os_string()));
        }
        value
            .to_str()
            .ok_or_else(|| EnvStrError::NonUTF8(key.to_os_string()))
    }

    /// Like [`Env::get`], but every error means "unset".
    ///
    /// A variable which is present but not UTF-8 is reported with [`tracing::warn!`], since
    /// silently ignoring it would be surprising for whoever exported it.
    pub fn var(&self, key: impl AsRef<OsStr>) -> Option<&str> {
        match self.get(key) {
            Ok(value) => Some(value),
            Err(err @ EnvStrError::NonUTF8(_)) => {
                tracing::warn!("ignoring {err}");
                None
            }
            Err(EnvStrError::Missing(_) | EnvStrError::Empty(_)) => None,
        }
    }

    /// Split variable pointed by `key` on `separator`, keeping the order of entries.
    ///
    /// Empty segments (e.g. `a::b`) are skipped, duplicates are kept.
    /// Returns `None` if the variable is unset, see [`Env::var`].
    pub fn split(&self, key: impl AsRef<OsStr>, separator: char) -> Option<Vec<&str>> {
        self.var(key).map(|value| {
            value
                .split(separator)
                .filter(|entry| !entry.is_empty())
                .collect()
        })
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for Env
where
    K: Into<OsString>,
    V: Into<OsString>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::new_from(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
