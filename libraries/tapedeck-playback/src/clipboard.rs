//! Clipboard seam and copy feedback
//!
//! The host provides the clipboard. Copying tries the primary write first
//! and falls back to the selection-based copy only when that fails.

use crate::error::{PlaybackError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Host clipboard
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardWriter {
    /// Primary clipboard write
    fn write_text(&mut self, text: &str) -> Result<()>;

    /// Fallback: copy through a hidden, selected text surface
    fn copy_via_selection(&mut self, text: &str) -> Result<()>;
}

/// Copy `text`, falling back to the selection path on failure
pub fn copy_with_fallback(clipboard: &mut dyn ClipboardWriter, text: &str) -> Result<()> {
    match clipboard.write_text(text) {
        Ok(()) => Ok(()),
        Err(primary) => {
            tracing::debug!(error = %primary, "Clipboard write failed, trying selection copy");
            clipboard.copy_via_selection(text).map_err(|fallback| {
                PlaybackError::Clipboard(format!("{}; fallback: {}", primary, fallback))
            })
        }
    }
}

/// Outcome shown on the copy button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyStatus {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl CopyStatus {
    /// Button label for this status
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Copy JSON",
            Self::Copied => "Copied!",
            Self::Failed => "Unable to copy",
        }
    }
}

/// Timer the host must run before calling
/// [`CopyFeedback::expire`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackTimer {
    pub generation: u64,
    pub after: Duration,
}

/// Copy status that reverts to idle once its timer fires
///
/// Every new status starts a new generation; a timer from an older
/// generation does nothing when it fires.
#[derive(Debug, Default)]
pub struct CopyFeedback {
    status: CopyStatus,
    generation: u64,
}

impl CopyFeedback {
    pub fn status(&self) -> CopyStatus {
        self.status
    }

    /// Show `status` for `hold`
    pub fn show(&mut self, status: CopyStatus, hold: Duration) -> FeedbackTimer {
        self.status = status;
        self.generation += 1;
        FeedbackTimer {
            generation: self.generation,
            after: hold,
        }
    }

    /// Revert to idle if `timer` is the latest one
    pub fn expire(&mut self, timer: FeedbackTimer) {
        if timer.generation == self.generation {
            self.status = CopyStatus::Idle;
        }
    }
}
