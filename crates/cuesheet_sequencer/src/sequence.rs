// SPDX-License-Identifier: MIT OR Apache-2.0
//! The sequencer: track storage, playback clock and recording lifecycle.
//!
//! The host calls [`Sequencer::update`] once per tick with its wall clock.
//! While playing, the clock is mapped to a frame inside the playback range,
//! events covering the frame write their targets and active recordings
//! capture their targets. Reaching the end of the range loops back to its
//! start and bakes whatever was recorded during the pass.

use crate::binding::{Channels, Target};
use crate::config::{SequencerConfig, DEFAULT_FPS};
use crate::edit::EventEdit;
use crate::error::Result;
use crate::track::{Track, TrackId};
use crate::view::Viewport;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Inclusive range of frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameRange {
    /// First frame
    pub start: i32,
    /// Last frame
    pub end: i32,
}

impl FrameRange {
    /// Create a range, swapping the ends if given in reverse
    pub fn new(start: i32, end: i32) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    /// Whether `frame` lies within the range
    pub fn contains(&self, frame: i32) -> bool {
        self.start <= frame && frame <= self.end
    }

    /// Clamp `frame` into the range
    pub fn clamp(&self, frame: i32) -> i32 {
        frame.max(self.start).min(self.end)
    }

    /// Number of frames in the range
    pub fn frame_count(&self) -> usize {
        let count = i64::from(self.end) - i64::from(self.start) + 1;
        if count <= 0 {
            return 0;
        }
        usize::try_from(count).unwrap_or(usize::MAX)
    }
}

impl From<std::ops::RangeInclusive<i32>> for FrameRange {
    fn from(range: std::ops::RangeInclusive<i32>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Stopped
    #[default]
    Stopped,
    /// Playing forward, looping over the range
    Playing,
}

/// Tracks plus the clock that drives them
#[derive(Debug)]
pub struct Sequencer {
    tracks: IndexMap<TrackId, Track>,
    state: PlaybackState,
    /// Wall-clock time at which the range start is played
    start_time: f64,
    /// Last wall-clock time passed to `update`
    curr_time: f64,
    frame: i32,
    range: FrameRange,
    fps: u32,
    /// Zoom and pan of the timeline view
    pub viewport: Viewport,
}

impl Sequencer {
    /// Create a sequencer with default settings at `fps` frames per second.
    ///
    /// A frame rate of zero is raised to one.
    pub fn new(fps: u32) -> Self {
        Self::from_valid_config(&SequencerConfig::with_fps(fps.max(1)))
    }

    /// Create a sequencer from settings
    pub fn with_config(config: &SequencerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: &SequencerConfig) -> Self {
        Self {
            tracks: IndexMap::new(),
            state: PlaybackState::Stopped,
            start_time: 0.0,
            curr_time: 0.0,
            frame: config.initial_frame(),
            range: config.range,
            fps: config.fps,
            viewport: Viewport::new(config.zoom, config.pan),
        }
    }

    // --- Tracks ---

    /// Declare a parameter; one event is created per channel
    pub fn add_track(&mut self, label: impl Into<String>, channels: impl Into<Channels>) -> TrackId {
        let track = Track::new(label, channels);
        let id = track.id;
        tracing::debug!("Added {:?} track '{}'", track.arity(), track.label);
        self.tracks.insert(id, track);
        id
    }

    /// Get a track
    pub fn track(&self, track_id: TrackId) -> Option<&Track> {
        self.tracks.get(&track_id)
    }

    /// Get a mutable track
    pub fn track_mut(&mut self, track_id: TrackId) -> Option<&mut Track> {
        self.tracks.get_mut(&track_id)
    }

    /// Find the first track with `label`
    pub fn find_track(&self, label: &str) -> Option<&Track> {
        self.tracks.values().find(|t| t.label == label)
    }

    /// All tracks in declaration order
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.tracks.values()
    }

    /// Get track count
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Editing handle for one event of a track
    pub fn edit_event(&mut self, track_id: TrackId, index: usize) -> Option<EventEdit<'_>> {
        let range = self.range;
        let event = self.tracks.get_mut(&track_id)?.event_mut(index)?;
        Some(EventEdit::new(event, range))
    }

    /// Smooth every event of a track
    pub fn filter_track(&mut self, track_id: TrackId) -> bool {
        let Some(track) = self.tracks.get_mut(&track_id) else {
            return false;
        };
        track.filter();
        true
    }

    /// Clear every event of a track and drop its recordings
    pub fn clear_track(&mut self, track_id: TrackId) -> bool {
        let Some(track) = self.tracks.get_mut(&track_id) else {
            return false;
        };
        track.clear();
        true
    }

    // --- State ---

    /// Current frame
    pub fn frame(&self) -> i32 {
        self.frame
    }

    /// Move the playhead without applying the frame, clamped into the range
    pub fn set_frame(&mut self, frame: i32) {
        self.frame = self.range.clamp(frame);
    }

    /// Playback state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Is currently playing
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Playback range
    pub fn range(&self) -> FrameRange {
        self.range
    }

    /// Replace the playback range
    pub fn set_range(&mut self, range: impl Into<FrameRange>) {
        let range = range.into();
        self.range = FrameRange::new(range.start, range.end);
    }

    /// Move the range start, never past the range end
    pub fn set_range_start(&mut self, start: i32) {
        self.range.start = start.min(self.range.end);
    }

    /// Move the range end, never before the range start
    pub fn set_range_end(&mut self, end: i32) {
        self.range.end = end.max(self.range.start);
    }

    /// Frames per wall-clock second
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Last wall-clock time seen by `update`
    pub fn current_time(&self) -> f64 {
        self.curr_time
    }

    /// Wall-clock time mapped to the range start
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    // --- Clock ---

    /// Flip between playing and stopped.
    ///
    /// Starting keeps the current frame under the wall clock; stopping bakes
    /// active recordings.
    pub fn toggle(&mut self) {
        match self.state {
            PlaybackState::Playing => self.halt(),
            PlaybackState::Stopped => {
                self.state = PlaybackState::Playing;
                self.start_time = self.curr_time
                    - f64::from(self.frame - self.range.start) / f64::from(self.fps);
                tracing::debug!("Playing from frame {}", self.frame);
            }
        }
    }

    /// Advance the clock to wall-clock `time`.
    ///
    /// Events are applied for the frame the sequencer was on before this
    /// call, so targets trail the playhead by one tick.
    pub fn update(&mut self, time: f64) {
        self.curr_time = time;
        if !self.is_playing() {
            return;
        }

        let previous = self.frame;
        if self.frame > self.range.end {
            self.wrap();
        }
        self.frame = self.clock_frame();
        if self.frame > self.range.end {
            self.wrap();
            self.frame = self.clock_frame();
        }
        self.frame = self.frame.max(self.range.start);

        if self.frame != previous {
            self.apply_frame(previous);
        }
    }

    /// Frame the wall clock currently maps to
    fn clock_frame(&self) -> i32 {
        ((self.curr_time - self.start_time) * f64::from(self.fps) + f64::from(self.range.start))
            as i32
    }

    /// Restart the pass at the range start
    fn wrap(&mut self) {
        tracing::debug!("Looping at frame {}", self.range.end);
        self.start_time = self.curr_time;
        self.finalize_recordings();
    }

    /// Stop playback, baking recordings if it was running
    fn halt(&mut self) {
        if self.is_playing() {
            self.state = PlaybackState::Stopped;
            self.finalize_recordings();
            tracing::debug!("Stopped at frame {}", self.frame);
        }
    }

    /// Evaluate every event covering `frame` and capture active recordings
    pub fn apply_frame(&mut self, frame: i32) {
        let evaluated: usize = self
            .tracks
            .values_mut()
            .map(|track| track.apply_frame(frame))
            .sum();
        tracing::trace!("Applied frame {} ({} events)", frame, evaluated);
    }

    /// Apply the current frame
    pub fn refresh(&mut self) {
        self.apply_frame(self.frame);
    }

    // --- Transport ---

    /// Stop and rewind to the range start
    pub fn stop(&mut self) {
        self.halt();
        self.frame = self.range.start;
        self.refresh();
    }

    /// Jump to the range start
    pub fn go_to_start(&mut self) {
        self.frame = self.range.start;
        self.refresh();
    }

    /// Jump to the range end
    pub fn go_to_end(&mut self) {
        self.frame = self.range.end;
        self.refresh();
    }

    /// Step one frame back, not past the range start
    pub fn step_back(&mut self) {
        self.frame = (self.frame - 1).max(self.range.start);
        self.refresh();
    }

    /// Step one frame forward, not past the range end
    pub fn step_forward(&mut self) {
        self.frame = (self.frame + 1).min(self.range.end);
        self.refresh();
    }

    /// Stop playback and show `frame`
    pub fn scrub(&mut self, frame: i32) {
        self.halt();
        self.frame = self.range.clamp(frame);
        self.refresh();
    }

    // --- Recording ---

    /// Whether `target` has an active recording on any track
    pub fn is_recording(&self, target: &Target) -> bool {
        self.tracks.values().any(|t| t.is_recording_target(target))
    }

    /// Start recording `target`.
    ///
    /// The recording is attached to the first track with an event bound to
    /// `target`. Returns `false` when the target is already being recorded
    /// or no event is bound to it.
    pub fn record(&mut self, target: &Target) -> bool {
        if self.is_recording(target) {
            return false;
        }
        let Some(track) = self.tracks.values_mut().find(|t| t.binds(target)) else {
            return false;
        };
        track.start_recording(target.clone());
        tracing::debug!("Recording {:?} on track '{}'", target, track.label);
        true
    }

    /// Record every target of a track; returns how many recordings started
    pub fn record_track(&mut self, track_id: TrackId) -> usize {
        let targets: Vec<Target> = match self.tracks.get(&track_id) {
            Some(track) => track.targets().cloned().collect(),
            None => return 0,
        };
        let mut started = 0;
        for target in &targets {
            if self.record(target) {
                started += 1;
            }
        }
        started
    }

    /// Bake all active recordings into their events and drop them.
    ///
    /// Every event bound to a recorded target has its keyframes replaced by
    /// the take. Returns the number of takes baked.
    pub fn finalize_recordings(&mut self) -> usize {
        self.tracks.values_mut().map(Track::finalize_recordings).sum()
    }

    // --- Frame iteration ---

    /// Step through every frame of the range, applying each one.
    ///
    /// Playback is stopped and the range start is applied before the
    /// iterator is returned. Once exhausted, the playhead rests one past the
    /// range end, or on `i32::MAX` when the range ends there.
    pub fn frames(&mut self) -> Frames<'_> {
        self.halt();
        self.frame = self.range.start;
        self.refresh();
        Frames {
            frame: i64::from(self.frame),
            end: i64::from(self.range.end) + 1,
            started: false,
            sequencer: self,
        }
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new(DEFAULT_FPS)
    }
}

/// Iterator over the playback range, see [`Sequencer::frames`]
#[derive(Debug)]
pub struct Frames<'a> {
    sequencer: &'a mut Sequencer,
    frame: i64,
    end: i64,
    started: bool,
}

impl Frames<'_> {
    /// The sequencer being stepped
    pub fn sequencer(&self) -> &Sequencer {
        self.sequencer
    }
}

impl Iterator for Frames<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if !self.started {
            self.started = true;
        } else if self.frame < self.end {
            self.frame += 1;
            self.sequencer.frame = i32::try_from(self.frame).unwrap_or(i32::MAX);
            self.sequencer.refresh();
        }
        if self.frame < self.end {
            i32::try_from(self.frame).ok()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.frame).unwrap_or(0);
        let remaining = if self.started {
            remaining.saturating_sub(1)
        } else {
            remaining
        };
        (remaining, Some(remaining))
    }
}

impl std::iter::FusedIterator for Frames<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyframe::Keyframe;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    /// Sequencer over `start..=end`, stopped at the range start
    fn sequencer(fps: u32, start: i32, end: i32) -> Sequencer {
        let mut seq = Sequencer::new(fps);
        seq.set_range(start..=end);
        seq.set_frame(start);
        seq
    }

    fn stepped(seq: &mut Sequencer, id: TrackId) {
        let mut edit = seq.edit_event(id, 0).unwrap();
        edit.move_to(0);
        edit.set_duration(10);
        *edit.keyframes_mut() = vec![
            Keyframe::new(0.0, 0.0),
            Keyframe::new(0.5, 5.0),
            Keyframe::new(1.0, 10.0),
        ];
    }

    #[test]
    fn test_play_stop_continuity() {
        let mut seq = sequencer(30, 0, 100);
        seq.set_frame(5);
        seq.update(1.0);
        assert_eq!(seq.frame(), 5);

        seq.toggle();
        assert!(seq.is_playing());
        assert!((seq.start_time() - (1.0 - 5.0 / 30.0)).abs() < 1e-9);

        seq.update(1.1667);
        assert_eq!(seq.frame(), 10);
    }

    #[test]
    fn test_loop_wraparound() {
        let mut seq = sequencer(10, 0, 20);
        seq.toggle();
        assert_eq!(seq.start_time(), 0.0);

        seq.update(2.1);
        assert_eq!(seq.frame(), 0);
        assert_eq!(seq.start_time(), 2.1);

        seq.update(2.25);
        assert_eq!(seq.frame(), 1);
    }

    #[test]
    fn test_stopped_update_only_tracks_time() {
        let mut seq = sequencer(10, 0, 20);
        seq.update(3.0);
        assert_eq!(seq.frame(), 0);
        assert_eq!(seq.current_time(), 3.0);
    }

    #[test]
    fn test_frame_lag() {
        let x = Target::new(-1.0);
        let mut seq = sequencer(10, 0, 20);
        let id = seq.add_track("x", x.clone());
        stepped(&mut seq, id);

        seq.toggle();
        seq.update(0.55);
        assert_eq!(seq.frame(), 5);
        // Applied the frame before the update
        assert_eq!(x.get(), 0.0);

        seq.update(0.75);
        assert_eq!(seq.frame(), 7);
        assert_eq!(x.get(), 5.0);
    }

    #[test]
    fn test_same_frame_does_not_apply() {
        let x = Target::new(-1.0);
        let mut seq = sequencer(10, 0, 20);
        let id = seq.add_track("x", x.clone());
        stepped(&mut seq, id);

        seq.toggle();
        seq.update(0.05);
        assert_eq!(seq.frame(), 0);
        assert_eq!(x.get(), -1.0);
    }

    #[test]
    fn test_record_idempotent() {
        let x = Target::default();
        let mut seq = Sequencer::default();
        let id = seq.add_track("x", x.clone());

        assert!(seq.record(&x));
        assert!(!seq.record(&x));
        assert_eq!(seq.track(id).unwrap().recordings().len(), 1);
    }

    #[test]
    fn test_record_unbound_is_noop() {
        let mut seq = Sequencer::default();
        seq.add_track("x", Target::default());
        assert!(!seq.record(&Target::default()));
        assert!(seq.tracks().all(|t| !t.is_recording()));
    }

    #[test]
    fn test_record_uses_first_bound_track() {
        let x = Target::default();
        let mut seq = Sequencer::default();
        let first = seq.add_track("a", x.clone());
        let second = seq.add_track("b", x.clone());

        assert!(seq.record(&x));
        assert!(seq.track(first).unwrap().is_recording());
        assert!(!seq.track(second).unwrap().is_recording());
    }

    #[test]
    fn test_record_track_vector() {
        let xyz = [Target::default(), Target::default(), Target::default()];
        let mut seq = Sequencer::default();
        let id = seq.add_track("pos", xyz.clone());

        assert_eq!(seq.record_track(id), 3);
        assert_eq!(seq.record_track(id), 0);
        assert!(xyz.iter().all(|t| seq.is_recording(t)));
    }

    #[test]
    fn test_record_then_bake_on_stop() {
        let x = Target::new(0.0);
        let mut seq = sequencer(10, 0, 20);
        let id = seq.add_track("x", x.clone());
        seq.record(&x);

        seq.toggle();
        for (t, value) in [(0.15, 1.0), (0.25, 2.0), (0.35, 4.0)] {
            x.set(value);
            seq.update(t);
        }
        assert_eq!(seq.frame(), 3);
        seq.toggle();
        assert!(!seq.is_recording(&x));

        // Frames 0, 1, 2 were captured, each with the value set before its update
        let event = seq.track(id).unwrap().event(0).unwrap();
        assert_eq!((event.time(), event.duration()), (0, 2));
        let expected = [(0.0, 1.0), (0.5, 2.0), (1.0, 4.0)];
        assert_eq!(event.keyframes().len(), expected.len());
        for (k, (phase, value)) in event.keyframes().iter().zip(expected) {
            assert!(approx(k.phase, phase));
            assert!(approx(k.value, value));
        }
    }

    #[test]
    fn test_wrap_bakes_recordings() {
        let x = Target::new(3.0);
        let mut seq = sequencer(10, 0, 5);
        let id = seq.add_track("x", x.clone());
        seq.record(&x);

        seq.toggle();
        seq.update(0.15);
        seq.update(0.25);
        seq.update(0.75);
        assert_eq!(seq.frame(), 0);
        assert!(!seq.is_recording(&x));

        let event = seq.track(id).unwrap().event(0).unwrap();
        assert_eq!((event.time(), event.duration()), (0, 1));
        assert!(seq.is_playing());
    }

    #[test]
    fn test_looped_take_stops_before_range_end() {
        let x = Target::new(1.0);
        let mut seq = sequencer(10, 0, 5);
        let id = seq.add_track("x", x.clone());
        seq.record(&x);

        seq.toggle();
        for tick in [0.05, 0.15, 0.25, 0.35, 0.45, 0.55, 0.65] {
            seq.update(tick);
        }
        assert_eq!(seq.frame(), 0);

        // Baked at the wrap, before the lagged range end is applied
        let event = seq.track(id).unwrap().event(0).unwrap();
        assert_eq!((event.time(), event.duration()), (0, 4));
        assert_eq!(event.keyframes().len(), 5);
    }

    #[test]
    fn test_finalize_without_samples_keeps_event() {
        let x = Target::default();
        let mut seq = Sequencer::default();
        let id = seq.add_track("x", x.clone());
        stepped(&mut seq, id);

        seq.record(&x);
        assert_eq!(seq.finalize_recordings(), 0);
        assert_eq!(seq.track(id).unwrap().event(0).unwrap().duration(), 10);
        assert!(!seq.is_recording(&x));
    }

    #[test]
    fn test_frames_iteration() {
        let x = Target::new(-1.0);
        let mut seq = sequencer(30, 0, 10);
        let id = seq.add_track("x", x.clone());
        stepped(&mut seq, id);
        seq.toggle();

        let mut seen = Vec::new();
        let frames = seq.frames();
        assert!(!frames.sequencer().is_playing());
        for frame in frames {
            seen.push((frame, x.get()));
        }
        assert_eq!(seen.len(), 11);
        assert_eq!(seen[0], (0, 0.0));
        assert_eq!(seen[5], (5, 5.0));
        assert_eq!(seen[10], (10, 10.0));
        assert_eq!(seq.frame(), 11);
    }

    #[test]
    fn test_frames_is_restartable() {
        let mut seq = sequencer(30, 3, 6);
        assert_eq!(seq.frames().collect::<Vec<_>>(), vec![3, 4, 5, 6]);
        assert_eq!(seq.frames().count(), 4);
        let frames = seq.frames();
        assert_eq!(frames.size_hint(), (4, Some(4)));
    }

    #[test]
    fn test_frames_at_range_limit() {
        let mut seq = sequencer(30, i32::MAX - 2, i32::MAX);
        assert_eq!(seq.range().frame_count(), 3);
        assert_eq!(
            seq.frames().collect::<Vec<_>>(),
            vec![i32::MAX - 2, i32::MAX - 1, i32::MAX]
        );
        assert_eq!(seq.frame(), i32::MAX);

        let full = FrameRange::new(i32::MIN, i32::MAX);
        assert_eq!(full.frame_count(), usize::try_from(1_u64 << 32).unwrap_or(usize::MAX));
    }

    #[test]
    fn test_clock_behind_range_start_clamps() {
        let x = Target::new(0.0);
        let mut seq = sequencer(10, 10, 100);
        let id = seq.add_track("x", x.clone());
        seq.record(&x);

        seq.update(2.0);
        seq.toggle();
        seq.update(2.5);
        assert_eq!(seq.frame(), 15);

        // Host clock stepping backwards maps before the range start
        seq.update(1.9);
        assert_eq!(seq.frame(), seq.range().start);

        seq.update(2.35);
        assert_eq!(seq.frame(), 13);

        let frames: Vec<i32> = seq.track(id).unwrap().recordings()[0]
            .samples()
            .iter()
            .map(|s| s.frame)
            .collect();
        assert_eq!(frames, vec![10, 15, 10]);
    }

    #[test]
    fn test_play_after_frames_wraps() {
        let mut seq = sequencer(10, 0, 4);
        assert_eq!(seq.frames().count(), 5);
        assert_eq!(seq.frame(), 5);

        seq.toggle();
        seq.update(seq.current_time());
        assert_eq!(seq.frame(), 0);
    }

    #[test]
    fn test_transport_clamps() {
        let mut seq = sequencer(30, 2, 4);
        seq.step_back();
        assert_eq!(seq.frame(), 2);
        seq.step_forward();
        seq.step_forward();
        seq.step_forward();
        assert_eq!(seq.frame(), 4);
        seq.go_to_start();
        assert_eq!(seq.frame(), 2);
        seq.go_to_end();
        assert_eq!(seq.frame(), 4);
        seq.scrub(100);
        assert_eq!(seq.frame(), 4);
        seq.scrub(-100);
        assert_eq!(seq.frame(), 2);
    }

    #[test]
    fn test_stop_bakes_and_rewinds() {
        let x = Target::new(1.0);
        let mut seq = sequencer(10, 0, 20);
        let id = seq.add_track("x", x.clone());
        seq.record(&x);
        seq.toggle();
        seq.update(0.15);
        seq.update(0.25);

        seq.stop();
        assert!(!seq.is_playing());
        assert_eq!(seq.frame(), 0);
        assert!(!seq.is_recording(&x));
        assert_eq!(seq.track(id).unwrap().event(0).unwrap().duration(), 1);
    }

    #[test]
    fn test_range_edits_keep_order() {
        let mut seq = sequencer(30, 0, 10);
        seq.set_range_start(20);
        assert_eq!(seq.range(), FrameRange::new(10, 10));
        seq.set_range_end(-5);
        assert_eq!(seq.range(), FrameRange::new(10, 10));
        seq.set_range(FrameRange { start: 9, end: 1 });
        assert_eq!(seq.range(), FrameRange::new(1, 9));
        assert_eq!(seq.range().frame_count(), 9);
        assert!(seq.range().contains(9));
        assert!(!seq.range().contains(0));
    }

    #[test]
    fn test_clear_track() {
        let x = Target::default();
        let mut seq = Sequencer::default();
        let id = seq.add_track("x", x.clone());
        stepped(&mut seq, id);
        seq.record(&x);

        assert!(seq.clear_track(id));
        let track = seq.find_track("x").unwrap();
        assert!(track.event(0).unwrap().is_empty());
        assert!(!track.is_recording());
        assert!(!seq.clear_track(TrackId::new()));
    }

    #[test]
    fn test_with_config() {
        let config = SequencerConfig::from_ron("(fps: 24, range: (start: 0, end: 48))").unwrap();
        let seq = Sequencer::with_config(&config).unwrap();
        assert_eq!(seq.fps(), 24);
        assert_eq!(seq.frame(), 0);
        assert_eq!(seq.range().frame_count(), 49);

        let bad = SequencerConfig {
            fps: 0,
            ..SequencerConfig::default()
        };
        assert!(Sequencer::with_config(&bad).is_err());
        assert_eq!(Sequencer::new(0).fps(), 1);
    }
}
