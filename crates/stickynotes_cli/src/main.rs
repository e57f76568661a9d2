//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `stickynotes_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("stickynotes_core version={}", stickynotes_core::core_version());
    println!(
        "stickynotes_core default_log_level={}",
        stickynotes_core::default_log_level()
    );
}
