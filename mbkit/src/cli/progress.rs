//! CLI progress display utilities
//!
//! Step lines with emoji and a single progress bar per batch run.

use std::time::Duration;

use console::{Emoji, style};
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};

use crate::types::ToolProgress;

// =============================================================================
// Emoji Constants (with ASCII fallbacks for terminals without emoji support)
// =============================================================================

/// Magnifying glass - for scanning operations
pub static LOOKING_GLASS: Emoji<'_, '_> = Emoji("🔍 ", "");
/// Gear - for transforming file contents
pub static GEAR: Emoji<'_, '_> = Emoji("⚙️  ", "");
/// Truck - for renaming files
pub static TRUCK: Emoji<'_, '_> = Emoji("🚚 ", "");
/// Document - for config and ignore files
pub static DOCUMENT: Emoji<'_, '_> = Emoji("📄 ", "");
/// Sparkles - for completion
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");

/// Print a step indicator: `[1/2] 🔍 Message...`
pub fn print_step(current: usize, total: usize, emoji: Emoji, msg: &str) {
    println!(
        "{} {}{}",
        style(format!("[{current}/{total}]")).bold().dim(),
        emoji,
        msg
    );
}

/// Print an unnumbered line: `📄 Message`
pub fn print_note(emoji: Emoji, msg: &str) {
    println!("{emoji}{msg}");
}

/// Print completion message: `✨ Done in 2s`
pub fn print_done(elapsed: Duration) {
    println!("{} Done in {}", SPARKLE, HumanDuration(elapsed));
}

/// Progress bar style for batch runs
///
/// Format: `knight.mbch [########--------] 5/10 (50%)`
#[must_use]
pub fn bar_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-")
}

/// Create a progress bar for `total` files; hidden when `quiet`
#[must_use]
pub fn batch_bar(total: usize, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(total as u64);
    pb.set_style(bar_style());
    pb
}

/// Move a batch bar to match a progress update
pub fn update_bar(pb: &ProgressBar, progress: &ToolProgress) {
    if pb.length() != Some(progress.total as u64) {
        pb.set_length(progress.total as u64);
        pb.set_message(progress.phase.as_str());
    }
    pb.set_position(progress.current as u64);
    if let Some(ref name) = progress.current_file {
        pb.set_message(name.clone());
    }
}
