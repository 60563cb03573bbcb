//! Standardpaths - standard per-application directories on every platform.
//!
//! This crate resolves data, config, state, cache, runtime and executable directories (and
//! search paths of data and config), honouring XDG Base Directory variables wherever they are
//! set and falling back to platform-idiomatic defaults otherwise. Nothing is created on disk.
//!
//! ```rust,no_run
//! # fn main() -> standardpaths::Result<()> {
//! use standardpaths::dirs::{self, DataLocality};
//!
//! let data = dirs::data(Some("myapp"), DataLocality::Roaming)?;
//! # Ok(())
//! # }
//! ```

pub mod dirs;
mod error;
pub mod os;

pub use error::{Error, Result};
