//! Per-platform table of default directories.
//!
//! Precedence for every purpose is: `XDG_*` variable, then a platform-native variable (Windows
//! only), then a hardcoded default. `XDG_*` variables are honoured on every platform: whoever
//! exported them on Windows or macOS presumably wants them respected.
//!
//! Values are templates: they may start with `~`, which is expanded by
//! [`StandardPaths`](super::StandardPaths).

use crate::os::env::Env;
use crate::os::platform::Platform;

/// Appended after the application name to state directories placed under the config base.
pub const STATE_SUFFIX: &str = "State";

/// Default directory for user executables, following
/// <https://specifications.freedesktop.org/basedir-spec/latest/>.
const XDG_DEFAULT_APP: &str = "~/.local/bin";

const WIN_DEFAULT_ROAMING: &str = "~/AppData/Roaming";
const WIN_DEFAULT_LOCAL: &str = "~/AppData/Local";
const WIN_DEFAULT_PROGRAMS: &str = "~/AppData/Roaming/Microsoft/Windows/Start Menu/Programs";
const WIN_PROGRAM_DATA: &str = "C:/ProgramData";

/// Unexpanded base directories for one platform, computed once from an [`Env`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformProfile {
    pub platform: Platform,
    /// Roaming data on Windows, plain data elsewhere.
    pub data: String,
    /// Local (non-roaming) data. Same as [`PlatformProfile::data`] outside of Windows.
    pub local_data: String,
    pub config: String,
    pub state: String,
    /// Set when [`PlatformProfile::state`] falls back to the config base and must be suffixed
    /// with [`STATE_SUFFIX`].
    pub state_suffix: Option<&'static str>,
    pub cache: String,
    pub runtime: String,
    pub app: String,
    pub data_dirs: Vec<String>,
    pub config_dirs: Vec<String>,
}

/// `XDG_*` variables, read once.
#[derive(Debug)]
struct Overrides<'a> {
    data: Option<&'a str>,
    config: Option<&'a str>,
    state: Option<&'a str>,
    cache: Option<&'a str>,
    runtime: Option<&'a str>,
    data_dirs: Option<Vec<&'a str>>,
    config_dirs: Option<Vec<&'a str>>,
}

impl<'a> Overrides<'a> {
    fn read(env: &'a Env, separator: char) -> Self {
        Self {
            data: env.var("XDG_DATA_HOME"),
            config: env.var("XDG_CONFIG_HOME"),
            state: env.var("XDG_STATE_HOME"),
            cache: env.var("XDG_CACHE_HOME"),
            // Non-standard name, XDG itself defines `XDG_RUNTIME_DIR`.
            runtime: env.var("XDG_RUNTIME_HOME"),
            data_dirs: env.split("XDG_DATA_DIRS", separator),
            config_dirs: env.split("XDG_CONFIG_DIRS", separator),
        }
    }
}

fn owned(paths: &[&str]) -> Vec<String> {
    paths.iter().map(|&path| path.to_owned()).collect()
}

/// State falls back to `<config>/<app>/State` on platforms without a dedicated state location.
fn state_under_config(xdg: &Overrides<'_>, config: &str) -> (String, Option<&'static str>) {
    match xdg.state {
        Some(state) => (state.to_owned(), None),
        None => (config.to_owned(), Some(STATE_SUFFIX)),
    }
}

impl PlatformProfile {
    /// Compute profile of `platform`.
    ///
    /// `uid` is only used by the Linux table, for `/run/user/<uid>`. Without it `/tmp` is used.
    pub fn new(platform: Platform, env: &Env, uid: Option<u32>) -> Self {
        let xdg = Overrides::read(env, platform.search_path_separator());
        let profile = match platform {
            Platform::Windows => Self::windows(&xdg, env),
            Platform::MacOS => Self::macos(&xdg),
            Platform::Ios => Self::ios(&xdg),
            Platform::Android => Self::android(&xdg),
            Platform::Linux | Platform::Other => Self::linux(platform, &xdg, uid),
        };
        tracing::debug!(
            ?platform,
            xdg_data = xdg.data.is_some(),
            xdg_config = xdg.config.is_some(),
            xdg_state = xdg.state.is_some(),
            xdg_cache = xdg.cache.is_some(),
            xdg_runtime = xdg.runtime.is_some(),
            xdg_data_dirs = xdg.data_dirs.is_some(),
            xdg_config_dirs = xdg.config_dirs.is_some(),
            "computed platform profile"
        );
        profile
    }

    fn windows(xdg: &Overrides<'_>, env: &Env) -> Self {
        // See https://learn.microsoft.com/en-us/windows/deployment/usmt/usmt-recognized-environment-variables
        let roaming = env
            .var("APPDATA")
            .or_else(|| env.var("CSIDL_APPDATA"))
            .unwrap_or(WIN_DEFAULT_ROAMING);
        let local = env
            .var("LOCALAPPDATA")
            .or_else(|| env.var("CSIDL_LOCAL_APPDATA"))
            .unwrap_or(WIN_DEFAULT_LOCAL);
        let config = xdg.config.unwrap_or(local);
        let (state, state_suffix) = state_under_config(xdg, config);
        let runtime = match xdg.runtime.or_else(|| env.var("TEMP")) {
            Some(runtime) => runtime.to_owned(),
            None => format!("{local}/Temp"),
        };
        Self {
            platform: Platform::Windows,
            data: xdg.data.unwrap_or(roaming).to_owned(),
            local_data: xdg.data.unwrap_or(local).to_owned(),
            config: config.to_owned(),
            state,
            state_suffix,
            cache: match xdg.cache {
                Some(cache) => cache.to_owned(),
                None => format!("{local}/cache"),
            },
            runtime,
            app: env
                .var("CSIDL_PROGRAMS")
                .unwrap_or(WIN_DEFAULT_PROGRAMS)
                .to_owned(),
            data_dirs: owned(xdg.data_dirs.as_deref().unwrap_or(&[WIN_PROGRAM_DATA])),
            config_dirs: owned(xdg.config_dirs.as_deref().unwrap_or(&[WIN_PROGRAM_DATA])),
        }
    }

    fn macos(xdg: &Overrides<'_>) -> Self {
        let data = xdg.data.unwrap_or("~/Library/Application Support");
        let config = xdg.config.unwrap_or("~/Library/Preferences");
        let (state, state_suffix) = state_under_config(xdg, config);
        Self {
            platform: Platform::MacOS,
            data: data.to_owned(),
            local_data: data.to_owned(),
            config: config.to_owned(),
            state,
            state_suffix,
            cache: xdg.cache.unwrap_or("~/Library/Caches").to_owned(),
            runtime: xdg.runtime.unwrap_or(data).to_owned(),
            app: "/Applications".to_owned(),
            data_dirs: owned(
                xdg.data_dirs
                    .as_deref()
                    .unwrap_or(&["/Library/Application Support"]),
            ),
            config_dirs: owned(xdg.config_dirs.as_deref().unwrap_or_default()),
        }
    }

    // `~` is inside of the application sandbox on mobile platforms.
    fn ios(xdg: &Overrides<'_>) -> Self {
        let data = xdg.data.unwrap_or("~/Library/Application Support");
        let config = xdg.config.unwrap_or("~/Library/Preferences");
        let (state, state_suffix) = state_under_config(xdg, config);
        Self {
            platform: Platform::Ios,
            data: data.to_owned(),
            local_data: data.to_owned(),
            config: config.to_owned(),
            state,
            state_suffix,
            cache: xdg.cache.unwrap_or("~/Library/Caches").to_owned(),
            runtime: xdg.runtime.unwrap_or("~/Library/Caches").to_owned(),
            app: XDG_DEFAULT_APP.to_owned(),
            data_dirs: owned(xdg.data_dirs.as_deref().unwrap_or_default()),
            config_dirs: owned(xdg.config_dirs.as_deref().unwrap_or_default()),
        }
    }

    fn android(xdg: &Overrides<'_>) -> Self {
        let data = xdg.data.unwrap_or("~/files");
        Self {
            platform: Platform::Android,
            data: data.to_owned(),
            local_data: data.to_owned(),
            config: xdg.config.unwrap_or("~/files/settings").to_owned(),
            state: xdg.state.unwrap_or("~/files/state").to_owned(),
            state_suffix: None,
            cache: xdg.cache.unwrap_or("~/cache").to_owned(),
            runtime: xdg.runtime.unwrap_or("~/cache").to_owned(),
            app: XDG_DEFAULT_APP.to_owned(),
            data_dirs: owned(xdg.data_dirs.as_deref().unwrap_or_default()),
            config_dirs: owned(xdg.config_dirs.as_deref().unwrap_or_default()),
        }
    }

    fn linux(platform: Platform, xdg: &Overrides<'_>, uid: Option<u32>) -> Self {
        let data = xdg.data.unwrap_or("~/.local/share");
        let runtime = match (xdg.runtime, uid) {
            (Some(runtime), _) => runtime.to_owned(),
            (None, Some(uid)) => format!("/run/user/{uid}"),
            (None, None) => "/tmp".to_owned(),
        };
        Self {
            platform,
            data: data.to_owned(),
            local_data: data.to_owned(),
            config: xdg.config.unwrap_or("~/.config").to_owned(),
            state: xdg.state.unwrap_or("~/.local/state").to_owned(),
            state_suffix: None,
            cache: xdg.cache.unwrap_or("~/.cache").to_owned(),
            runtime,
            app: XDG_DEFAULT_APP.to_owned(),
            data_dirs: owned(
                xdg.data_dirs
                    .as_deref()
                    .unwrap_or(&["/usr/local/share/", "/usr/share/"]),
            ),
            config_dirs: owned(xdg.config_dirs.as_deref().unwrap_or(&["/etc/xdg"])),
        }
    }
}
