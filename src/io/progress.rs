//! Progress display for batch pattern output

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Patterns: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many patterns of a batch have been written or skipped
pub struct ProgressManager {
    bar: ProgressBar,
    written: usize,
    skipped: usize,
}

impl ProgressManager {
    /// Progress bar drawn to stderr
    pub fn new(total: usize) -> Self {
        Self::with_target(total, ProgressDrawTarget::stderr())
    }

    /// Progress bar that draws nothing; counters still update
    pub fn hidden(total: usize) -> Self {
        Self::with_target(total, ProgressDrawTarget::hidden())
    }

    fn with_target(total: usize, target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(total as u64), target);
        bar.set_style(BATCH_STYLE.clone());
        Self {
            bar,
            written: 0,
            skipped: 0,
        }
    }

    /// Record a written file
    pub fn wrote(&mut self, path: &Path) {
        self.written += 1;
        self.bar.set_message(
            path.file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
        );
        self.bar.inc(1);
    }

    /// Record a file left in place because it already existed
    pub fn skipped(&mut self, path: &Path) {
        self.skipped += 1;
        self.bar.set_message(format!("skipped {}", path.display()));
        self.bar.inc(1);
    }

    /// Files written so far
    pub const fn written_count(&self) -> usize {
        self.written
    }

    /// Files skipped so far
    pub const fn skipped_count(&self) -> usize {
        self.skipped
    }

    /// Close the bar with a summary line
    pub fn finish(&self) {
        self.bar.finish_with_message(format!(
            "{} written, {} skipped",
            self.written, self.skipped
        ));
    }
}
