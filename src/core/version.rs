//! Build metadata accessors
//!
//! Includes the generated version.rs from the build script, providing a
//! single source of truth for the tool's own build stamp.

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Build time string from the build script (UTC)
pub fn build_time() -> &'static str {
    BUILD_TIME
}

/// Short git hash of this tool's own checkout, captured by the build script
pub fn git_hash() -> &'static str {
    GIT_HASH
}
