// SPDX-License-Identifier: MIT OR Apache-2.0
//! Tracks, events and recordings.

use crate::binding::{Arity, Channels, Target};
use crate::keyframe::{self, Keyframe, Sample};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackId(pub Uuid);

impl TrackId {
    /// Create a new random track ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TrackId {
    fn default() -> Self {
        Self::new()
    }
}

/// A bounded clip driving one target over a frame range
///
/// Keyframes are stored on the phase axis, so `time` and `duration` can be
/// changed without touching them. An event with zero duration is inert.
#[derive(Debug, Clone)]
pub struct Event {
    pub(crate) time: i32,
    pub(crate) duration: i32,
    pub(crate) keyframes: Vec<Keyframe>,
    target: Target,
}

impl Event {
    /// Create an empty event bound to `target`
    pub fn new(target: Target) -> Self {
        Self {
            time: 0,
            duration: 0,
            keyframes: Vec::new(),
            target,
        }
    }

    /// Create an event with the given placement and keyframes
    pub fn with_keyframes(
        target: Target,
        time: i32,
        duration: i32,
        keyframes: impl IntoIterator<Item = Keyframe>,
    ) -> Self {
        Self {
            time,
            duration: duration.max(0),
            keyframes: keyframes.into_iter().collect(),
            target,
        }
    }

    /// Start frame
    pub fn time(&self) -> i32 {
        self.time
    }

    /// Length in frames
    pub fn duration(&self) -> i32 {
        self.duration
    }

    /// Last frame covered by the event
    pub fn end(&self) -> i32 {
        self.time + self.duration
    }

    /// Keyframes in storage order
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Target this event writes to
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Whether the event is empty
    pub fn is_empty(&self) -> bool {
        self.duration == 0
    }

    /// Whether `frame` falls inside the event, both ends included
    pub fn contains(&self, frame: i32) -> bool {
        self.duration > 0 && self.time <= frame && frame <= self.end()
    }

    /// Phase of `frame` within the event
    pub fn phase_of(&self, frame: i32) -> f32 {
        (frame - self.time) as f32 / self.duration as f32
    }

    /// Write the value at `frame` to the target
    pub fn evaluate(&self, frame: i32) {
        if self.duration <= 0 {
            return;
        }
        let value = keyframe::evaluate(&self.keyframes, self.phase_of(frame));
        self.target.set(value);
    }

    /// Smooth the keyframe values with the zero-phase filter
    pub fn filter(&mut self) {
        if self.keyframes.is_empty() {
            return;
        }
        keyframe::filter(&mut self.keyframes);
    }

    /// Drop all keyframes and collapse the event to frame 0
    pub fn clear(&mut self) {
        self.keyframes.clear();
        self.time = 0;
        self.duration = 0;
    }

    /// Replace placement and keyframes with a baked take
    fn overwrite(&mut self, take: &Take) {
        self.time = take.time;
        self.duration = take.duration;
        self.keyframes.clone_from(&take.keyframes);
    }
}

/// A live capture buffer for one target
#[derive(Debug, Clone)]
pub struct Recording {
    target: Target,
    samples: Vec<Sample>,
}

impl Recording {
    /// Start an empty recording of `target`
    pub fn new(target: Target) -> Self {
        Self {
            target,
            samples: Vec::new(),
        }
    }

    /// Target being captured
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Captured samples in capture order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Append the target's current value at `frame`
    pub fn capture(&mut self, frame: i32) {
        self.samples.push(Sample::new(frame, self.target.get()));
    }

    /// First and last captured frame
    pub fn span(&self) -> Option<(i32, i32)> {
        let first = self.samples.first()?;
        let last = self.samples.last()?;
        Some((first.frame, last.frame))
    }

    /// Convert the samples to phase-normalized keyframes.
    ///
    /// Returns `None` for an empty recording. A take spanning a single frame
    /// gets a duration of 1 so phases stay finite.
    pub fn bake(&self) -> Option<Take> {
        let (t0, t1) = self.span()?;
        let duration = (t1 - t0).max(1);
        let keyframes = self
            .samples
            .iter()
            .map(|s| Keyframe::new((s.frame - t0) as f32 / duration as f32, s.value))
            .collect();
        Some(Take {
            time: t0,
            duration,
            keyframes,
        })
    }
}

/// A recording converted to event placement and keyframes
#[derive(Debug, Clone, PartialEq)]
pub struct Take {
    /// Frame of the first sample
    pub time: i32,
    /// Frames between first and last sample, at least 1
    pub duration: i32,
    /// Samples on the phase axis, in capture order
    pub keyframes: Vec<Keyframe>,
}

/// A named group of events driving one declared parameter
#[derive(Debug, Clone)]
pub struct Track {
    /// Unique track ID
    pub id: TrackId,
    /// Track label
    pub label: String,
    /// Whether the event rows are shown
    pub expanded: bool,
    arity: Arity,
    events: Vec<Event>,
    recordings: Vec<Recording>,
}

impl Track {
    /// Create a track with one empty event per channel
    pub fn new(label: impl Into<String>, channels: impl Into<Channels>) -> Self {
        let channels = channels.into();
        Self {
            id: TrackId::new(),
            label: label.into(),
            expanded: true,
            arity: channels.arity(),
            events: channels.targets().iter().cloned().map(Event::new).collect(),
            recordings: Vec::new(),
        }
    }

    /// Channel arity the track was declared with
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Events, one per channel
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Event by channel index
    pub fn event(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }

    pub(crate) fn event_mut(&mut self, index: usize) -> Option<&mut Event> {
        self.events.get_mut(index)
    }

    /// Active recordings
    pub fn recordings(&self) -> &[Recording] {
        &self.recordings
    }

    /// Targets of the events, in channel order
    pub fn targets(&self) -> impl Iterator<Item = &Target> {
        self.events.iter().map(Event::target)
    }

    /// Whether any event is bound to `target`
    pub fn binds(&self, target: &Target) -> bool {
        self.targets().any(|t| t.same_as(target))
    }

    /// Whether anything on this track is being recorded
    pub fn is_recording(&self) -> bool {
        !self.recordings.is_empty()
    }

    /// Whether `target` has an active recording on this track
    pub fn is_recording_target(&self, target: &Target) -> bool {
        self.recordings.iter().any(|r| r.target.same_as(target))
    }

    pub(crate) fn start_recording(&mut self, target: Target) {
        self.recordings.push(Recording::new(target));
    }

    /// Evaluate events covering `frame` and capture into recordings.
    ///
    /// Returns the number of events evaluated.
    pub(crate) fn apply_frame(&mut self, frame: i32) -> usize {
        let mut evaluated = 0;
        for event in self.events.iter().filter(|e| e.contains(frame)) {
            event.evaluate(frame);
            evaluated += 1;
        }
        for recording in &mut self.recordings {
            recording.capture(frame);
        }
        evaluated
    }

    /// Bake every recording into the events bound to its target.
    ///
    /// Matching events lose their previous keyframes entirely. Recordings are
    /// dropped afterwards, including empty ones. Returns the takes applied.
    pub(crate) fn finalize_recordings(&mut self) -> usize {
        let mut baked = 0;
        for recording in std::mem::take(&mut self.recordings) {
            let Some(take) = recording.bake() else {
                tracing::warn!("Discarding empty recording on track '{}'", self.label);
                continue;
            };
            if take.keyframes.len() == 1 {
                tracing::warn!(
                    "Single-sample recording on track '{}' at frame {}, baking with duration 1",
                    self.label,
                    take.time
                );
            }
            for event in self
                .events
                .iter_mut()
                .filter(|e| e.target.same_as(&recording.target))
            {
                event.overwrite(&take);
            }
            tracing::debug!(
                "Baked {} samples on track '{}' into frames {}..={}",
                take.keyframes.len(),
                self.label,
                take.time,
                take.time + take.duration
            );
            baked += 1;
        }
        baked
    }

    /// Smooth every event
    pub fn filter(&mut self) {
        for event in &mut self.events {
            event.filter();
        }
        tracing::debug!("Filtered track '{}'", self.label);
    }

    /// Clear every event and drop active recordings
    pub fn clear(&mut self) {
        for event in &mut self.events {
            event.clear();
        }
        self.recordings.clear();
        tracing::debug!("Cleared track '{}'", self.label);
    }
}
