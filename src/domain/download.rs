use std::fmt;
use std::path::PathBuf;

use super::error::AppError;

/// What happened to a single menu item
#[derive(Debug)]
pub enum DownloadOutcome {
    /// A new image was fetched and written
    Downloaded,
    /// The destination already existed; nothing was fetched
    Skipped,
    /// Resolution or download failed; the batch moved on
    Failed(AppError),
}

impl DownloadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DownloadOutcome::Downloaded)
    }
}

/// Counts reported once the batch has finished
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub attempted: usize,
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
    pub output_dir: PathBuf,
}

impl BatchSummary {
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            ..Default::default()
        }
    }

    pub fn record(&mut self, outcome: &DownloadOutcome) {
        self.attempted += 1;
        match outcome {
            DownloadOutcome::Downloaded => self.downloaded += 1,
            DownloadOutcome::Skipped => self.skipped += 1,
            DownloadOutcome::Failed(_) => self.failed += 1,
        }
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Downloaded {} out of {} images ({} skipped, {} failed).",
            self.downloaded, self.attempted, self.skipped, self.failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let mut summary = BatchSummary::new(PathBuf::from("images"));
        summary.record(&DownloadOutcome::Downloaded);
        summary.record(&DownloadOutcome::Skipped);
        summary.record(&DownloadOutcome::Failed(AppError::NotFound("Iced Tea".into())));
        summary.record(&DownloadOutcome::Downloaded);

        assert_eq!(summary.attempted, 4);
        assert_eq!(summary.downloaded, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(
            summary.to_string(),
            "Downloaded 2 out of 4 images (1 skipped, 1 failed)."
        );
    }
}
