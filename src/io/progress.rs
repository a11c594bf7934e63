//! Status display for dictionary loading and board scans

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static STATUS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static SCAN_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Cells: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates the word list status line and the board scan bar
pub struct ProgressManager {
    multi_progress: MultiProgress,
    status_bar: Option<ProgressBar>,
    dictionary_label: String,
    scan_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            status_bar: None,
            dictionary_label: String::new(),
            scan_bar: None,
        }
    }

    /// Show the word list status line
    pub fn start_dictionary(&mut self, path: &Path) {
        let bar = self.multi_progress.add(ProgressBar::new_spinner());
        bar.set_style(STATUS_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(100));
        self.dictionary_label = format!("Reading word list {}...", path.display());
        bar.set_message(self.dictionary_label.clone());
        self.status_bar = Some(bar);
    }

    /// Report lines read so far
    pub fn update_dictionary(&self, lines_read: usize) {
        if let Some(ref bar) = self.status_bar {
            bar.set_message(format!("{}{lines_read}", self.dictionary_label));
        }
    }

    /// Text of the word list status line, if one is showing
    pub fn status_message(&self) -> Option<String> {
        self.status_bar.as_ref().map(ProgressBar::message)
    }

    /// Close the status line with the final word count
    pub fn finish_dictionary(&mut self, words: usize) {
        if let Some(bar) = self.status_bar.take() {
            bar.finish_with_message(format!("Loaded {words} words"));
        }
    }

    /// Show a bar over the start cells of a board scan
    pub fn start_scan(&mut self, cell_count: usize) {
        let length = u64::try_from(cell_count).unwrap_or(u64::MAX);
        let bar = self.multi_progress.add(ProgressBar::new(length));
        bar.set_style(SCAN_STYLE.clone());
        self.scan_bar = Some(bar);
    }

    /// Mark start cells as searched
    pub fn complete_cells(&self, count: usize) {
        if let Some(ref bar) = self.scan_bar {
            bar.inc(u64::try_from(count).unwrap_or(u64::MAX));
        }
    }

    /// Clean up all progress displays
    pub fn finish(&mut self) {
        if let Some(bar) = self.status_bar.take() {
            bar.finish_and_clear();
        }
        if let Some(bar) = self.scan_bar.take() {
            bar.finish_and_clear();
        }
        let _ = self.multi_progress.clear();
    }
}
