//! UI/Progress presentation layer
//!
//! This module handles:
//! - Progress reporting while files are installed
//! - Rendering the end-of-run outcome for the user
//!
//! The core never prints. It reports progress through [`ProgressReporter`] and
//! returns a [`RunResult`](crate::domain::RunResult) that the shell hands to an
//! [`OutcomeReporter`] implementation chosen from command-line flags.

mod formatter;
mod reporter;

pub use formatter::{format_error, format_outcome, format_plan};
pub use reporter::{ConsoleReporter, JsonReporter};

use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::RunResult;
use crate::error::InstallerError;

/// Progress reporter trait for the file loop
pub trait ProgressReporter {
    /// Initialize file progress with total file count
    fn init_file_progress(&mut self, total_files: u64);

    /// Update file progress
    fn update_file(&mut self, file_path: &str);

    /// Finish file progress
    fn finish_files(&mut self);

    /// Abandon on error
    fn abandon(&mut self);
}

/// End-of-run rendering, implemented by the presentation shell
pub trait OutcomeReporter {
    /// Render a completed run, plan or "nothing to install"
    fn report(&mut self, result: &RunResult);

    /// Render a failure that stopped the run before any file was touched
    fn report_error(&mut self, err: &InstallerError);
}

/// Interactive progress reporter with a visual progress bar
pub struct InteractiveProgressReporter {
    file_pb: Option<ProgressBar>,
}

impl InteractiveProgressReporter {
    pub fn new() -> Self {
        Self { file_pb: None }
    }
}

impl Default for InteractiveProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn init_file_progress(&mut self, total_files: u64) {
        let file_pb = ProgressBar::new(total_files);
        if let Ok(style) =
            ProgressStyle::default_bar().template("[{bar:40.green/yellow}] {pos}/{len} files {msg}")
        {
            file_pb.set_style(style.progress_chars("█▉▊▋▌▍▎▏  "));
        }
        self.file_pb = Some(file_pb);
    }

    fn update_file(&mut self, file_path: &str) {
        if let Some(ref file_pb) = self.file_pb {
            // Truncate long paths for display
            let chars: Vec<char> = file_path.chars().collect();
            let display_path = if chars.len() > 50 {
                let tail: String = chars[chars.len() - 47..].iter().collect();
                format!("...{tail}")
            } else {
                file_path.to_string()
            };
            file_pb.set_message(display_path);
            file_pb.inc(1);
        }
    }

    fn finish_files(&mut self) {
        if let Some(ref file_pb) = self.file_pb {
            file_pb.finish_and_clear();
        }
    }

    fn abandon(&mut self) {
        if let Some(ref file_pb) = self.file_pb {
            file_pb.abandon();
        }
    }
}

/// Silent progress reporter for quiet, JSON and dry-run modes
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn init_file_progress(&mut self, _total_files: u64) {}

    fn update_file(&mut self, _file_path: &str) {}

    fn finish_files(&mut self) {}

    fn abandon(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_progress_reporter_no_ops() {
        let mut reporter = SilentProgressReporter;

        reporter.init_file_progress(10);
        reporter.update_file("scripts/a.sxp");
        reporter.finish_files();
        reporter.abandon();
    }

    #[test]
    fn test_interactive_progress_reporter_creation() {
        let reporter = InteractiveProgressReporter::new();
        assert!(reporter.file_pb.is_none());
    }

    #[test]
    fn test_interactive_progress_reporter_counts_files() {
        let mut reporter = InteractiveProgressReporter::new();
        reporter.init_file_progress(3);
        reporter.update_file("a.sxp");
        reporter.update_file(&"x".repeat(80));
        assert_eq!(reporter.file_pb.as_ref().map(ProgressBar::position), Some(2));
    }
}
