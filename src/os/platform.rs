//! Operating system family detection.

/// Operating system family, which selects the table of default directories.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOS,
    Ios,
    Android,
    Linux,
    /// Anything else. Uses the same defaults as [`Platform::Linux`].
    Other,
}

impl Platform {
    /// Platform the crate was compiled for.
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOS
        } else if cfg!(target_os = "ios") {
            Self::Ios
        } else if cfg!(target_os = "android") {
            Self::Android
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Other
        }
    }

    /// Map value of `cfg(target_os)` onto [`Platform`]. Unknown names map to [`Platform::Other`].
    ///
    /// ```rust
    /// use standardpaths::os::platform::Platform;
    ///
    /// assert_eq!(Platform::from_target_os("macos"), Platform::MacOS);
    /// assert_eq!(Platform::from_target_os("freebsd"), Platform::Other);
    /// ```
    pub fn from_target_os(name: &str) -> Self {
        match name {
            "windows" => Self::Windows,
            "macos" => Self::MacOS,
            "ios" => Self::Ios,
            "android" => Self::Android,
            "linux" => Self::Linux,
            _ => Self::Other,
        }
    }

    /// Separator of `XDG_*_DIRS` search paths.
    pub const fn search_path_separator(&self) -> char {
        match self {
            Self::Windows => ';',
            _ => ':',
        }
    }

    /// Whether [`DataLocality`](crate::dirs::DataLocality) makes any difference.
    pub const fn has_local_data(&self) -> bool {
        matches!(self, Self::Windows)
    }
}

/// Real user id of the current process, `None` outside of `unix`.
#[cfg(unix)]
#[allow(clippy::unnecessary_cast)] // `uid_t` is `u32` on most, but not all, targets.
pub fn current_uid() -> Option<u32> {
    // SAFETY: `getuid` has no preconditions and always succeeds.
    let uid = unsafe { libc::getuid() };
    Some(uid as u32)
}

/// Real user id of the current process, `None` outside of `unix`.
#[cfg(not(unix))]
pub fn current_uid() -> Option<u32> {
    None
}
