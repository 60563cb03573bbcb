//! OS-level inputs of path resolution: the environment snapshot and the platform family.

pub mod env;
pub mod platform;
