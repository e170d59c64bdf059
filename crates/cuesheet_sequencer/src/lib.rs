// SPDX-License-Identifier: MIT OR Apache-2.0
//! Frame-indexed keyframe sequencer.
//!
//! This crate drives host-owned values over a range of frames:
//! - Step-interpolated events, one per value channel
//! - A wall-clock playback loop
//! - Live recording of values and baking into events
//! - Zero-phase smoothing of recorded keyframes
//!
//! ## Architecture
//!
//! The sequencer is built on:
//! - Shared [`Target`] handles to the driven values
//! - Tracks grouping one event per channel of a declared parameter
//! - A clock mapping wall-clock time to frames
//! - Range-bounded edit handles for timeline views
//!
//! Drawing the timeline is left to the host; [`Viewport`] only holds the
//! zoom and pan a view needs.
//!
//! ```
//! use cuesheet_sequencer::{Sequencer, Target};
//!
//! let value = Target::new(0.0);
//! let mut sequencer = Sequencer::new(30);
//! let track = sequencer.add_track("Value", value.clone());
//!
//! // Record whatever the host writes to `value` while playing
//! sequencer.record(&value);
//! sequencer.toggle();
//! for tick in 1..=10 {
//!     value.set(tick as f32);
//!     sequencer.update(f64::from(tick) / 30.0);
//! }
//! sequencer.toggle();
//!
//! let event = sequencer.track(track).unwrap().event(0).unwrap();
//! assert!(event.duration() > 0);
//! ```

pub mod binding;
pub mod config;
pub mod edit;
pub mod error;
pub mod keyframe;
pub mod sequence;
pub mod track;
pub mod view;

pub use binding::{Arity, Channels, Target};
pub use config::SequencerConfig;
pub use edit::EventEdit;
pub use error::{Result, SequencerError};
pub use keyframe::{Keyframe, LowPass, Sample};
pub use sequence::{FrameRange, Frames, PlaybackState, Sequencer};
pub use track::{Event, Recording, Take, Track, TrackId};
pub use view::Viewport;
