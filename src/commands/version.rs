//! Version command implementation

use console::Style;

use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    let bold = Style::new().bold();
    let dim = Style::new().dim();

    println!("{} {}", bold.apply_to("shellcheck-tasks"), env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  {} {}", dim.apply_to("Rust version:"), rustc_version());
    println!("  {} {}", dim.apply_to("Profile:"), build_profile());

    Ok(())
}

fn rustc_version() -> &'static str {
    // Minimum supported rustc, from the manifest
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
