//! Spinner display for install steps

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a step runs, suppressed under dry run
pub fn create_progress_spinner(dry_run: bool, message: &str) -> Option<ProgressBar> {
    if dry_run {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template(&format!("{{spinner}} {message}"))
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.enable_steady_tick(Duration::from_millis(80));
    Some(pb)
}

/// Clear the spinner once the step is done
pub fn finish_progress_bar(pb: Option<ProgressBar>) {
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
}
