// SPDX-License-Identifier: MIT OR Apache-2.0
//! Sequencer errors.
//!
//! Playback, recording and editing never fail: out-of-range input is clamped
//! and commands that do not apply are ignored. Errors only come from building
//! a sequencer out of settings.

use thiserror::Error;

/// Sequencer configuration errors
#[derive(Debug, Error)]
pub enum SequencerError {
    /// Frame rate must be positive
    #[error("Invalid frame rate: {0} fps")]
    InvalidFrameRate(u32),

    /// Range start after range end
    #[error("Invalid frame range: {start}..={end}")]
    InvalidRange {
        /// First frame
        start: i32,
        /// Last frame
        end: i32,
    },

    /// Settings text could not be parsed
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Settings file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sequencer configuration
pub type Result<T> = std::result::Result<T, SequencerError>;
