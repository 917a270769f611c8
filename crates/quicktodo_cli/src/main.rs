//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `quicktodo_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("quicktodo_core version={}", quicktodo_core::core_version());
    println!(
        "quicktodo_core schema_version={}",
        quicktodo_core::db::migrations::latest_version()
    );
}
