//! Spinner reporting path search progress between resume calls

use crate::io::configuration::SPINNER_TICK_MS;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {prefix} {msg} [{elapsed_precise}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Displays expansion counts while a search is resumed in batches
pub struct SearchProgress {
    bar: ProgressBar,
}

impl SearchProgress {
    /// Visible spinner labelled with the search being run
    pub fn new(label: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_prefix(label.to_string());
        bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        Self { bar }
    }

    /// Spinner that tracks state without drawing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Report the current search size
    pub fn update(&self, nodes_expanded: usize, open: usize) {
        self.bar.set_position(nodes_expanded as u64);
        self.bar
            .set_message(format!("{nodes_expanded} expanded, {open} open"));
    }

    /// Expansions reported so far
    pub fn expanded(&self) -> u64 {
        self.bar.position()
    }

    /// Current status line
    pub fn message(&self) -> String {
        self.bar.message()
    }

    /// Stop the spinner and leave a final message
    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }

    /// Stop the spinner and erase it
    pub fn clear(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/io/progress.rs"]
mod unit;
