//! Progress reporting for directory extraction.
//!
//! Extraction reads export files one by one; a [`ProgressCallback`] receives a
//! [`Progress`] snapshot after each file. The library never prints; printing
//! is left to the callback the caller supplies.
//!
//! # Example
//!
//! ```rust
//! use tgstats::progress::{Progress, ProgressCallback};
//! use std::sync::Arc;
//!
//! let callback: ProgressCallback = Arc::new(|progress| {
//!     if let Some(pct) = progress.percentage() {
//!         println!("Progress: {:.1}%", pct);
//!     }
//! });
//!
//! for i in 0..4usize {
//!     callback(Progress::new(i + 1, Some(4), (i + 1) * 100));
//! }
//! ```

use std::sync::Arc;

/// Progress information for an extraction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    /// Number of export files fully parsed so far.
    pub files_processed: usize,

    /// Total number of export files, if known.
    pub total_files: Option<usize>,

    /// Number of messages retained so far.
    pub messages: usize,
}

impl Progress {
    /// Creates a new progress instance.
    pub fn new(files_processed: usize, total_files: Option<usize>, messages: usize) -> Self {
        Self {
            files_processed,
            total_files,
            messages,
        }
    }

    /// Returns the progress as a percentage (0.0 - 100.0).
    ///
    /// Returns `None` if the total is not known.
    ///
    /// ```rust
    /// use tgstats::progress::Progress;
    ///
    /// assert_eq!(Progress::new(5, Some(10), 0).percentage(), Some(50.0));
    /// assert_eq!(Progress::new(5, None, 0).percentage(), None);
    /// ```
    pub fn percentage(&self) -> Option<f64> {
        self.total_files.map(|total| {
            if total == 0 {
                100.0
            } else {
                (self.files_processed as f64 / total as f64) * 100.0
            }
        })
    }

    /// Returns whether every file has been processed.
    pub fn is_complete(&self) -> bool {
        self.total_files
            .map(|total| self.files_processed >= total)
            .unwrap_or(false)
    }

    /// Returns `true` when this snapshot falls on a reporting boundary:
    /// every `every` files, plus the final file.
    pub fn is_milestone(&self, every: usize) -> bool {
        every != 0 && (self.files_processed % every == 0 || self.is_complete())
    }
}

/// Callback type for receiving progress updates.
pub type ProgressCallback = Arc<dyn Fn(Progress) + Send + Sync>;

/// Creates a no-op progress callback.
pub fn no_progress() -> ProgressCallback {
    Arc::new(|_| {})
}

/// Creates a callback that prints a line to stderr every `every` files.
pub fn stderr_progress(every: usize) -> ProgressCallback {
    Arc::new(move |progress| {
        if progress.is_milestone(every) {
            match progress.total_files {
                Some(total) => eprintln!(
                    "Processed {}/{} files ({} messages)...",
                    progress.files_processed, total, progress.messages
                ),
                None => eprintln!(
                    "Processed {} files ({} messages)...",
                    progress.files_processed, progress.messages
                ),
            }
        }
    })
}
