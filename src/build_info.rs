//! Build metadata generated by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version string for `--version`.
pub fn version_line() -> String {
    format!("flappy {} ({}, {})", env!("CARGO_PKG_VERSION"), BUILD_DATE, BUILD_COMMIT)
}
