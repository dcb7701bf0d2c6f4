//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version banner, e.g. `gym-flappy 0.1.0 (2026-01-31 abc1234)`.
pub fn version_line() -> String {
    format!(
        "gym-flappy {} ({} {})",
        BUILD_VERSION, BUILD_DATE, BUILD_COMMIT
    )
}
