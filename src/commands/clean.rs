//! Clean command implementation
//!
//! Kept for muscle-memory compatibility: installs never leave temporary
//! state behind, so there is nothing to remove.

use console::Style;

use crate::error::Result;

/// Acknowledge the request without touching the filesystem
pub fn run() -> Result<()> {
    println!("Nothing to clean.");
    println!(
        "{}",
        Style::new()
            .dim()
            .apply_to("Installs leave no temporary files behind.")
    );

    Ok(())
}
