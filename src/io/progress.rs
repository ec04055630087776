//! Terminal progress display for tiling runs

use crate::algorithm::GenerationStats;
use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_REFRESH_INTERVAL};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} tiles {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Shows tiles placed out of tiles needed, plus step and backtrack counters
///
/// The bar tracks the cursor's tile count, so it moves backwards when the
/// search backtracks.
pub struct ProgressManager {
    bar: ProgressBar,
    updates: usize,
}

impl ProgressManager {
    /// Create a progress bar for a grid needing `target_tiles` dominoes
    pub fn new(target_tiles: usize) -> Self {
        let bar = ProgressBar::new(target_tiles as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        Self { bar, updates: 0 }
    }

    /// Create a bar that never draws, for quiet runs and tests
    pub fn hidden(target_tiles: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(target_tiles as u64);
        Self { bar, updates: 0 }
    }

    /// Label the bar for a new attempt and reset its position
    pub fn start_attempt(&mut self, attempt: usize, seed: u64) {
        self.bar.set_prefix(format!("attempt {attempt} (seed {seed})"));
        self.bar.set_position(0);
        self.bar.set_message(String::new());
        self.updates = 0;
    }

    /// Report the tile count after a step
    ///
    /// Redraws are throttled to every few steps.
    pub fn update(&mut self, tile_count: usize, stats: &GenerationStats) {
        let due = self.updates % PROGRESS_REFRESH_INTERVAL == 0;
        self.updates += 1;
        if !due {
            return;
        }
        self.bar.set_position(tile_count as u64);
        self.bar.set_message(format!(
            "step {} backtracks {}",
            stats.steps, stats.backtracks
        ));
    }

    /// Current bar position
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Mark the run as finished with a final message
    pub fn finish(&self, tile_count: usize, message: &str) {
        self.bar.set_position(tile_count as u64);
        self.bar.finish_with_message(message.to_string());
    }
}
