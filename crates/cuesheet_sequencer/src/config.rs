// SPDX-License-Identifier: MIT OR Apache-2.0
//! Sequencer settings.
//!
//! Settings are plain data that can be written by hand in RON:
//!
//! ```ron
//! (
//!     fps: 60,
//!     range: (start: 0, end: 240),
//!     zoom: 4.0,
//! )
//! ```
//!
//! Missing fields take their defaults.

use crate::error::{Result, SequencerError};
use crate::sequence::FrameRange;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default playback rate
pub const DEFAULT_FPS: u32 = 30;

/// Settings a sequencer is created from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequencerConfig {
    /// Frames per wall-clock second
    pub fps: u32,
    /// Playback range, both ends included
    pub range: FrameRange,
    /// Initial frame, clamped into `range`
    pub frame: Option<i32>,
    /// Horizontal zoom in pixels per frame
    pub zoom: f32,
    /// Initial pan offset in pixels
    pub pan: [f32; 2],
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            range: FrameRange::new(1, 50),
            frame: None,
            zoom: 10.0,
            pan: [0.0, 0.0],
        }
    }
}

impl SequencerConfig {
    /// Default settings at a given frame rate
    pub fn with_fps(fps: u32) -> Self {
        Self {
            fps,
            ..Self::default()
        }
    }

    /// Parse settings from RON text
    pub fn from_ron(text: &str) -> Result<Self> {
        let config: SequencerConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load settings from a RON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_ron(&content)
    }

    /// Check the settings can drive a sequencer
    pub fn validate(&self) -> Result<()> {
        if self.fps == 0 {
            return Err(SequencerError::InvalidFrameRate(self.fps));
        }
        if self.range.start > self.range.end {
            return Err(SequencerError::InvalidRange {
                start: self.range.start,
                end: self.range.end,
            });
        }
        Ok(())
    }

    /// Starting frame, inside the range
    pub fn initial_frame(&self) -> i32 {
        self.range.clamp(self.frame.unwrap_or(self.range.start))
    }
}
