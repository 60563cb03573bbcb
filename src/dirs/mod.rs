//! Standard per-application directories.
//!
//! `XDG_*` variables take precedence on every platform, then platform-native variables, then
//! the platform defaults from [`PlatformProfile`].
//!
//! Free functions of this module query a process-wide [`StandardPaths`], computed on first use
//! from the process environment. Use [`StandardPaths::builder`] to resolve against another
//! environment or platform.
//!
//! ```rust,no_run
//! # use standardpaths::dirs::{self, IncludeHome};
//! # fn main() -> standardpaths::Result<()> {
//! let config = dirs::config(Some("myapp"))?;
//! let search = dirs::config_dirs(Some("myapp"), IncludeHome::Yes)?;
//! assert_eq!(search[0], config);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

use crate::error::Result;

mod app_name;
pub mod profile;
mod purpose;
mod resolver;

pub use app_name::AppName;
pub use profile::PlatformProfile;
pub use purpose::Purpose;
pub use resolver::{AppPaths, DataLocality, IncludeHome, StandardPaths, StandardPathsBuilder};

static GLOBAL: OnceLock<Result<StandardPaths>> = OnceLock::new();

/// Process-wide [`StandardPaths`], computed once.
///
/// A failure is memoised as well: the environment is never re-read.
pub fn global() -> Result<&'static StandardPaths> {
    GLOBAL
        .get_or_init(StandardPaths::new)
        .as_ref()
        .map_err(Clone::clone)
}

fn app_name(name: Option<&str>) -> Result<Option<AppName>> {
    name.map(AppName::new).transpose()
}

/// Home directory of the current user.
pub fn home() -> Result<PathBuf> {
    Ok(global()?.home().to_path_buf())
}

/// See [`StandardPaths::data`].
pub fn data(app: Option<&str>, locality: DataLocality) -> Result<PathBuf> {
    let app = app_name(app)?;
    Ok(global()?.data(app.as_ref(), locality))
}

/// See [`StandardPaths::config`].
pub fn config(app: Option<&str>) -> Result<PathBuf> {
    let app = app_name(app)?;
    Ok(global()?.config(app.as_ref()))
}

/// See [`StandardPaths::state`].
pub fn state(app: Option<&str>) -> Result<PathBuf> {
    let app = app_name(app)?;
    Ok(global()?.state(app.as_ref()))
}

/// See [`StandardPaths::app`].
pub fn app() -> Result<PathBuf> {
    Ok(global()?.app().to_path_buf())
}

/// See [`StandardPaths::cache`].
pub fn cache(app: Option<&str>) -> Result<PathBuf> {
    let app = app_name(app)?;
    Ok(global()?.cache(app.as_ref()))
}

/// See [`StandardPaths::runtime`].
pub fn runtime() -> Result<PathBuf> {
    Ok(global()?.runtime().to_path_buf())
}

/// See [`StandardPaths::data_dirs`].
pub fn data_dirs(
    app: Option<&str>,
    include_home: IncludeHome,
    locality: DataLocality,
) -> Result<Vec<PathBuf>> {
    let app = app_name(app)?;
    Ok(global()?.data_dirs(app.as_ref(), include_home, locality))
}

/// See [`StandardPaths::config_dirs`].
pub fn config_dirs(app: Option<&str>, include_home: IncludeHome) -> Result<Vec<PathBuf>> {
    let app = app_name(app)?;
    Ok(global()?.config_dirs(app.as_ref(), include_home))
}

/// See [`StandardPaths::for_app`].
pub fn for_app(app: &str) -> Result<AppPaths> {
    let app = AppName::new(app)?;
    Ok(global()?.for_app(&app))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use claim::{assert_err, assert_ok};

    #[test]
    fn global_is_computed_once() {
        let first = assert_ok!(global());
        let second = assert_ok!(global());
        assert!(std::ptr::eq(first, second));
        assert_eq!(assert_ok!(home()), first.home());
    }

    #[test]
    fn free_functions_namespace() {
        assert_eq!(
            assert_ok!(data(Some("foo"), DataLocality::Roaming)),
            assert_ok!(data(None, DataLocality::Roaming)).join("foo")
        );
        assert_eq!(
            assert_ok!(cache(Some("foo"))),
            assert_ok!(cache(None)).join("foo")
        );
        assert_eq!(
            assert_ok!(config_dirs(Some("foo"), IncludeHome::Yes))[0],
            assert_ok!(config(Some("foo")))
        );
    }

    #[test]
    fn invalid_app_names_are_rejected() {
        assert!(matches!(
            assert_err!(config(Some("../escape"))),
            Error::InvalidAppName { .. }
        ));
        assert_err!(for_app(""));
    }

    #[test]
    fn for_app_uses_global() {
        let paths = assert_ok!(for_app("foo"));
        assert_eq!(paths.runtime, assert_ok!(runtime()));
        assert_eq!(paths.app, assert_ok!(app()));
        assert_eq!(paths.state, assert_ok!(state(Some("foo"))));
        assert_eq!(
            paths.data_dirs,
            assert_ok!(data_dirs(Some("foo"), IncludeHome::No, DataLocality::Roaming))
        );
    }
}
