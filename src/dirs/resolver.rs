use std::path::{Path, PathBuf};

use crate::dirs::{AppName, PlatformProfile, Purpose};
use crate::error::{Error, Result};
use crate::os::env::Env;
use crate::os::platform::{Platform, current_uid};

/// Which data directory [`StandardPaths::data`] should return.
///
/// Only Windows distinguishes them: elsewhere both resolve to the same directory.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub enum DataLocality {
    /// `%APPDATA%`, synchronised between machines in a domain.
    #[default]
    Roaming,
    /// `%LOCALAPPDATA%`, specific to this machine.
    Local,
}

/// Whether search paths should start with the corresponding user directory.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub enum IncludeHome {
    /// Only system directories, as `XDG_*_DIRS` are defined.
    #[default]
    No,
    /// User directory first, then system directories.
    Yes,
}

/// Resolved standard directories of the current user.
///
/// Every base directory is home-expanded once, at construction; accessors only join
/// application names, so `StandardPaths` is immutable and can be freely shared between
/// threads.
///
/// ```rust,no_run
/// use standardpaths::dirs::{AppName, StandardPaths};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let paths = StandardPaths::new()?;
/// let app = AppName::new("myapp")?;
/// let settings = paths.config(Some(&app)).join("settings.toml");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardPaths {
    platform: Platform,
    home: PathBuf,
    data: PathBuf,
    local_data: PathBuf,
    config: PathBuf,
    state: PathBuf,
    state_suffix: Option<&'static str>,
    cache: PathBuf,
    runtime: PathBuf,
    app: PathBuf,
    data_dirs: Vec<PathBuf>,
    config_dirs: Vec<PathBuf>,
}

/// Builder of [`StandardPaths`]. Anything not set is taken from the running process.
#[derive(Debug, Clone, Default)]
pub struct StandardPathsBuilder {
    env: Option<Env>,
    platform: Option<Platform>,
    home: Option<PathBuf>,
    uid: Option<u32>,
}

impl StandardPathsBuilder {
    /// Use `env` instead of a snapshot of the process environment.
    pub fn env(mut self, env: Env) -> Self {
        self.env = Some(env);
        self
    }

    /// Use defaults of `platform` instead of [`Platform::current`].
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Expand `~` into `home` instead of [`std::env::home_dir`].
    pub fn home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// User id for `/run/user/<uid>`, instead of the real one.
    pub fn uid(mut self, uid: u32) -> Self {
        self.uid = Some(uid);
        self
    }

    /// Compute [`StandardPaths`].
    ///
    /// # Errors
    ///
    /// [`Error::UnresolvableHome`] if no home was given and none can be determined, or it is
    /// empty. [`Error::NonUtf8Home`] if the home directory is not valid UTF-8.
    pub fn build(self) -> Result<StandardPaths> {
        let home = match self.home {
            Some(home) => home,
            None => std::env::home_dir().ok_or(Error::UnresolvableHome)?,
        };
        let env = self.env.unwrap_or_else(Env::new);
        let platform = self.platform.unwrap_or_else(Platform::current);
        let uid = self.uid.or_else(current_uid);
        let profile = PlatformProfile::new(platform, &env, uid);
        StandardPaths::from_profile(&profile, home)
    }
}

/// Replace a leading `~` of `template` with `home`.
fn expand_home(template: &str, home: &str) -> PathBuf {
    let expanded =
        PathBuf::from(shellexpand::tilde_with_context(template, || Some(home)).into_owned());
    tracing::trace!(template, ?expanded, "expanded base directory");
    expanded
}

fn namespaced(base: &Path, app: Option<&AppName>) -> PathBuf {
    match app {
        Some(app) => base.join(app),
        None => base.to_path_buf(),
    }
}

impl StandardPaths {
    /// Resolve paths for the running process: its environment, platform and home directory.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn builder() -> StandardPathsBuilder {
        StandardPathsBuilder::default()
    }

    /// Expand every template of `profile`, replacing a leading `~` with `home`.
    pub fn from_profile(profile: &PlatformProfile, home: PathBuf) -> Result<Self> {
        if home.as_os_str().is_empty() {
            return Err(Error::UnresolvableHome);
        }
        let Some(home_str) = home.to_str() else {
            return Err(Error::NonUtf8Home(home));
        };
        let expand = |template: &String| expand_home(template, home_str);
        let expand_all = |templates: &[String]| -> Vec<PathBuf> {
            templates.iter().map(expand).collect()
        };

        Ok(Self {
            platform: profile.platform,
            data: expand(&profile.data),
            local_data: expand(&profile.local_data),
            config: expand(&profile.config),
            state: expand(&profile.state),
            state_suffix: profile.state_suffix,
            cache: expand(&profile.cache),
            runtime: expand(&profile.runtime),
            app: expand(&profile.app),
            data_dirs: expand_all(&profile.data_dirs),
            config_dirs: expand_all(&profile.config_dirs),
            home,
        })
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Home directory of the current user.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// User data directory, optionally namespaced by `app`.
    ///
    /// `locality` selects between roaming and local data on Windows and is ignored elsewhere.
    pub fn data(&self, app: Option<&AppName>, locality: DataLocality) -> PathBuf {
        let base = match locality {
            DataLocality::Local if self.platform.has_local_data() => &self.local_data,
            _ => &self.data,
        };
        namespaced(base, app)
    }

    pub fn config(&self, app: Option<&AppName>) -> PathBuf {
        namespaced(&self.config, app)
    }

    /// User state directory.
    ///
    /// On Windows, macOS and iOS, unless `XDG_STATE_HOME` is set, state lives inside of the
    /// configuration directory: `<config>/<app>/State`.
    pub fn state(&self, app: Option<&AppName>) -> PathBuf {
        let mut state = namespaced(&self.state, app);
        if let Some(suffix) = self.state_suffix {
            state.push(suffix);
        }
        state
    }

    /// Directory of user-launchable executables (Start Menu programs on Windows).
    pub fn app(&self) -> &Path {
        &self.app
    }

    pub fn cache(&self, app: Option<&AppName>) -> PathBuf {
        namespaced(&self.cache, app)
    }

    pub fn runtime(&self) -> &Path {
        &self.runtime
    }

    /// Ordered search path for data files, highest priority first.
    ///
    /// With [`IncludeHome::Yes`], [`StandardPaths::data`] is prepended.
    pub fn data_dirs(
        &self,
        app: Option<&AppName>,
        include_home: IncludeHome,
        locality: DataLocality,
    ) -> Vec<PathBuf> {
        let home = matches!(include_home, IncludeHome::Yes).then(|| self.data(app, locality));
        home.into_iter()
            .chain(self.data_dirs.iter().map(|dir| namespaced(dir, app)))
            .collect()
    }

    /// Ordered search path for configuration files, highest priority first.
    ///
    /// With [`IncludeHome::Yes`], [`StandardPaths::config`] is prepended.
    pub fn config_dirs(&self, app: Option<&AppName>, include_home: IncludeHome) -> Vec<PathBuf> {
        let home = matches!(include_home, IncludeHome::Yes).then(|| self.config(app));
        home.into_iter()
            .chain(self.config_dirs.iter().map(|dir| namespaced(dir, app)))
            .collect()
    }

    /// Directories of `purpose`, highest priority first.
    ///
    /// Single-directory purposes yield exactly one path, search paths never include home.
    /// `app` is ignored by purposes which don't accept it, see [`Purpose::accepts_app_name`].
    pub fn resolve(&self, purpose: Purpose, app: Option<&AppName>) -> Vec<PathBuf> {
        match purpose {
            Purpose::Home => vec![self.home.clone()],
            Purpose::Data => vec![self.data(app, DataLocality::Roaming)],
            Purpose::Config => vec![self.config(app)],
            Purpose::State => vec![self.state(app)],
            Purpose::Cache => vec![self.cache(app)],
            Purpose::Runtime => vec![self.runtime.clone()],
            Purpose::Executable => vec![self.app.clone()],
            Purpose::DataDirs => self.data_dirs(app, IncludeHome::No, DataLocality::Roaming),
            Purpose::ConfigDirs => self.config_dirs(app, IncludeHome::No),
        }
    }

    /// Every directory of `app` at once.
    pub fn for_app(&self, app: &AppName) -> AppPaths {
        AppPaths {
            data: self.data(Some(app), DataLocality::Roaming),
            config: self.config(Some(app)),
            state: self.state(Some(app)),
            app: self.app.clone(),
            cache: self.cache(Some(app)),
            runtime: self.runtime.clone(),
            data_dirs: self.data_dirs(Some(app), IncludeHome::No, DataLocality::Roaming),
            config_dirs: self.config_dirs(Some(app), IncludeHome::No),
        }
    }
}

/// Directories of a single application, see [`StandardPaths::for_app`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub data: PathBuf,
    pub config: PathBuf,
    pub state: PathBuf,
    pub app: PathBuf,
    pub cache: PathBuf,
    pub runtime: PathBuf,
    pub data_dirs: Vec<PathBuf>,
    pub config_dirs: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::{assert_err, assert_ok};

    const HOME: &str = "/home/user";

    fn paths(platform: Platform, vars: &[(&str, &str)]) -> StandardPaths {
        assert_ok!(
            StandardPaths::builder()
                .env(vars.iter().copied().collect())
                .platform(platform)
                .home(HOME)
                .uid(1000)
                .build()
        )
    }

    fn app(name: &str) -> AppName {
        assert_ok!(AppName::new(name))
    }

    #[test]
    fn linux_without_variables() {
        let paths = paths(Platform::Linux, &[]);
        assert_eq!(paths.home(), Path::new(HOME));
        assert_eq!(paths.config(None), Path::new("/home/user/.config"));
        assert_eq!(
            paths.data(None, DataLocality::Roaming),
            Path::new("/home/user/.local/share")
        );
        assert_eq!(paths.state(None), Path::new("/home/user/.local/state"));
        assert_eq!(paths.cache(None), Path::new("/home/user/.cache"));
        assert_eq!(paths.runtime(), Path::new("/run/user/1000"));
        assert_eq!(paths.app(), Path::new("/home/user/.local/bin"));
        assert_eq!(
            paths.config_dirs(None, IncludeHome::No),
            [PathBuf::from("/etc/xdg")]
        );
        assert_eq!(
            paths.config_dirs(None, IncludeHome::Yes),
            [
                PathBuf::from("/home/user/.config"),
                PathBuf::from("/etc/xdg")
            ]
        );
        assert_eq!(
            paths.data_dirs(None, IncludeHome::No, DataLocality::Roaming),
            [
                PathBuf::from("/usr/local/share/"),
                PathBuf::from("/usr/share/")
            ]
        );
    }

    #[test]
    fn xdg_data_home_wins_everywhere() {
        let app1 = app("app1");
        for platform in [
            Platform::Windows,
            Platform::MacOS,
            Platform::Ios,
            Platform::Android,
            Platform::Linux,
            Platform::Other,
        ] {
            let paths = paths(platform, &[("XDG_DATA_HOME", "/srv/data")]);
            assert_eq!(
                paths.data(Some(&app1), DataLocality::Roaming),
                Path::new("/srv/data/app1"),
                "{platform:?}"
            );
            assert_eq!(
                paths.data(Some(&app1), DataLocality::Local),
                Path::new("/srv/data/app1"),
                "{platform:?}"
            );
        }
    }

    #[test]
    fn every_override_is_a_prefix() {
        let vars = [
            ("XDG_DATA_HOME", "/x/data"),
            ("XDG_CONFIG_HOME", "/x/config"),
            ("XDG_STATE_HOME", "/x/state"),
            ("XDG_CACHE_HOME", "/x/cache"),
            ("XDG_RUNTIME_HOME", "/x/runtime"),
            ("XDG_DATA_DIRS", "/x/data_dirs"),
            ("XDG_CONFIG_DIRS", "/x/config_dirs"),
        ];
        let app = app("foo");
        for platform in [Platform::MacOS, Platform::Android, Platform::Linux] {
            let paths = paths(platform, &vars);
            for purpose in Purpose::ALL {
                let Some(var) = purpose.xdg_var() else {
                    continue;
                };
                let prefix = vars
                    .iter()
                    .find_map(|&(key, value)| (key == var).then_some(value))
                    .unwrap();
                let resolved = paths.resolve(purpose, Some(&app));
                assert_eq!(resolved.len(), 1);
                assert!(resolved[0].starts_with(prefix), "{platform:?} {purpose:?}");
            }
        }
    }

    #[test]
    fn tilde_in_override_is_expanded() {
        let paths = paths(Platform::Linux, &[("XDG_CACHE_HOME", "~/tmp/cache")]);
        assert_eq!(paths.cache(None), Path::new("/home/user/tmp/cache"));
    }

    #[test]
    fn app_name_namespacing() {
        let foo = app("foo");
        for platform in [Platform::Android, Platform::Linux] {
            let paths = paths(platform, &[]);
            for purpose in Purpose::ALL {
                let plain = paths.resolve(purpose, None);
                let namespaced = paths.resolve(purpose, Some(&foo));
                let expected: Vec<_> = if purpose.accepts_app_name() {
                    plain.iter().map(|path| path.join("foo")).collect()
                } else {
                    plain
                };
                assert_eq!(namespaced, expected, "{platform:?} {purpose:?}");
            }
        }
    }

    #[test]
    fn state_is_nested_under_config() {
        let foo = app("foo");
        let macos = paths(Platform::MacOS, &[]);
        assert_eq!(
            macos.state(Some(&foo)),
            Path::new("/home/user/Library/Preferences/foo/State")
        );
        assert_eq!(
            macos.state(None),
            Path::new("/home/user/Library/Preferences/State")
        );

        let windows = paths(Platform::Windows, &[("XDG_CONFIG_HOME", "C:/cfg")]);
        assert_eq!(windows.state(Some(&foo)), Path::new("C:/cfg/foo/State"));

        let overridden = paths(Platform::Ios, &[("XDG_STATE_HOME", "/srv/state")]);
        assert_eq!(overridden.state(Some(&foo)), Path::new("/srv/state/foo"));
    }

    #[test]
    fn windows_without_variables() {
        let paths = paths(Platform::Windows, &[]);
        assert_eq!(
            paths.data(None, DataLocality::Roaming),
            Path::new("/home/user/AppData/Roaming")
        );
        assert_eq!(
            paths.data(None, DataLocality::Local),
            Path::new("/home/user/AppData/Local")
        );
        assert_eq!(
            paths.cache(None),
            paths.data(None, DataLocality::Local).join("cache")
        );
        assert_eq!(
            paths.runtime(),
            paths.data(None, DataLocality::Local).join("Temp")
        );
        assert_eq!(
            paths.config_dirs(None, IncludeHome::No),
            [PathBuf::from("C:/ProgramData")]
        );
    }

    #[test]
    fn windows_local_data_dirs() {
        let foo = app("foo");
        let paths = paths(Platform::Windows, &[("XDG_DATA_DIRS", "D:/one;D:/two")]);
        assert_eq!(
            paths.data_dirs(Some(&foo), IncludeHome::Yes, DataLocality::Local),
            [
                PathBuf::from("/home/user/AppData/Local/foo"),
                PathBuf::from("D:/one/foo"),
                PathBuf::from("D:/two/foo"),
            ]
        );
    }

    #[test]
    fn locality_is_ignored_outside_of_windows() {
        let paths = paths(Platform::MacOS, &[]);
        assert_eq!(
            paths.data(None, DataLocality::Local),
            paths.data(None, DataLocality::Roaming)
        );
    }

    #[test]
    fn search_path_order_is_preserved() {
        let paths = paths(
            Platform::Linux,
            &[("XDG_DATA_DIRS", "/b:/a:/b"), ("XDG_CONFIG_DIRS", "~/etc:/etc")],
        );
        assert_eq!(
            paths.data_dirs(None, IncludeHome::No, DataLocality::Roaming),
            [PathBuf::from("/b"), PathBuf::from("/a"), PathBuf::from("/b")]
        );

        let without = paths.config_dirs(None, IncludeHome::No);
        let with = paths.config_dirs(None, IncludeHome::Yes);
        assert_eq!(
            without,
            [PathBuf::from("/home/user/etc"), PathBuf::from("/etc")]
        );
        assert_eq!(with.len(), without.len() + 1);
        assert_eq!(with[0], paths.config(None));
        assert_eq!(with[1..], without[..]);
    }

    #[test]
    fn repeated_calls_are_equal() {
        let foo = app("foo");
        let paths = paths(Platform::Linux, &[]);
        for purpose in Purpose::ALL {
            assert_eq!(
                paths.resolve(purpose, Some(&foo)),
                paths.resolve(purpose, Some(&foo))
            );
        }
    }

    #[test]
    fn for_app_matches_accessors() {
        let foo = app("foo");
        let paths = paths(Platform::MacOS, &[]);
        let app_paths = paths.for_app(&foo);
        assert_eq!(app_paths.data, paths.data(Some(&foo), DataLocality::Roaming));
        assert_eq!(app_paths.config, paths.config(Some(&foo)));
        assert_eq!(app_paths.state, paths.state(Some(&foo)));
        assert_eq!(app_paths.app, Path::new("/Applications"));
        assert_eq!(app_paths.cache, paths.cache(Some(&foo)));
        assert_eq!(app_paths.runtime, paths.runtime());
        assert_eq!(
            app_paths.data_dirs,
            [PathBuf::from("/Library/Application Support/foo")]
        );
        assert!(app_paths.config_dirs.is_empty());
    }

    #[test]
    fn empty_home_is_unresolvable() {
        let result = StandardPaths::builder()
            .env(Env::empty())
            .platform(Platform::Linux)
            .home("")
            .build();
        assert_eq!(assert_err!(result), Error::UnresolvableHome);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_home_is_rejected() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;
        let home = PathBuf::from(OsString::from_vec(vec![b'/', 0xff]));
        let result = StandardPaths::builder()
            .env(Env::empty())
            .platform(Platform::Linux)
            .home(home.clone())
            .build();
        assert_eq!(assert_err!(result), Error::NonUtf8Home(home));
    }

    #[test]
    fn real_home_directory() {
        let home = tempfile::tempdir().expect("needed for tests");
        let paths = assert_ok!(
            StandardPaths::builder()
                .env(Env::empty())
                .platform(Platform::Android)
                .home(home.path())
                .build()
        );
        assert!(paths.data(None, DataLocality::Roaming).is_absolute());
        assert_eq!(
            paths.config(None),
            home.path().join("files").join("settings")
        );
    }

    #[test]
    fn is_send_and_sync() {
        fn check<T: Send + Sync>() {}
        check::<StandardPaths>();
    }
}
