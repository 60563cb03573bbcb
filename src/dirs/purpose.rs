/// Category of a standard directory.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Purpose {
    /// Home directory of the current user.
    Home,
    /// User-specific data files.
    Data,
    /// User-specific configuration files.
    Config,
    /// User-specific state: logs, history, anything not portable enough for [`Purpose::Data`].
    State,
    /// Non-essential cached data.
    Cache,
    /// Sockets, pipes and other runtime files.
    Runtime,
    /// Where user-launchable executables (or their shortcuts) live.
    Executable,
    /// Ordered search path of system data directories.
    DataDirs,
    /// Ordered search path of system configuration directories.
    ConfigDirs,
}

impl Purpose {
    pub const ALL: [Purpose; 9] = [
        Purpose::Home,
        Purpose::Data,
        Purpose::Config,
        Purpose::State,
        Purpose::Cache,
        Purpose::Runtime,
        Purpose::Executable,
        Purpose::DataDirs,
        Purpose::ConfigDirs,
    ];

    /// Environmental variable overriding platform defaults for `self`, on every platform.
    pub const fn xdg_var(&self) -> Option<&'static str> {
        match self {
            Purpose::Home | Purpose::Executable => None,
            Purpose::Data => Some("XDG_DATA_HOME"),
            Purpose::Config => Some("XDG_CONFIG_HOME"),
            Purpose::State => Some("XDG_STATE_HOME"),
            Purpose::Cache => Some("XDG_CACHE_HOME"),
            Purpose::Runtime => Some("XDG_RUNTIME_HOME"),
            Purpose::DataDirs => Some("XDG_DATA_DIRS"),
            Purpose::ConfigDirs => Some("XDG_CONFIG_DIRS"),
        }
    }

    /// `true` for purposes resolving to a list of directories.
    pub const fn is_search_path(&self) -> bool {
        matches!(self, Purpose::DataDirs | Purpose::ConfigDirs)
    }

    /// `true` for purposes which can be namespaced by an [`AppName`](super::AppName).
    pub const fn accepts_app_name(&self) -> bool {
        !matches!(
            self,
            Purpose::Home | Purpose::Runtime | Purpose::Executable
        )
    }
}
