// SPDX-License-Identifier: MIT OR Apache-2.0
//! Interactive event editing.
//!
//! A timeline view moves and resizes events while the user drags them. All
//! such edits go through [`EventEdit`], which keeps the event inside the
//! playback range and at least one frame long. Changes are seen by the next
//! applied frame.

use crate::keyframe::Keyframe;
use crate::sequence::FrameRange;
use crate::track::Event;

/// Mutable handle to one event, bounded by the playback range
#[derive(Debug)]
pub struct EventEdit<'a> {
    event: &'a mut Event,
    range: FrameRange,
}

impl<'a> EventEdit<'a> {
    pub(crate) fn new(event: &'a mut Event, range: FrameRange) -> Self {
        Self { event, range }
    }

    /// The event being edited
    pub fn event(&self) -> &Event {
        self.event
    }

    /// Move the whole event so it starts at `time` (body drag)
    pub fn move_to(&mut self, time: i32) {
        let event = &mut *self.event;
        event.time = time.max(self.range.start);
        if event.time + event.duration > self.range.end {
            event.time = self.range.end - event.duration;
        }
    }

    /// Move the start to `time` keeping the end in place (head drag)
    pub fn set_start(&mut self, time: i32) {
        let event = &mut *self.event;
        let end = event.end();
        event.time = time;
        event.duration = end - time;
        if event.duration < 1 {
            event.duration = 1;
            event.time = end - 1;
        }
        if event.time < self.range.start {
            event.time = self.range.start;
            event.duration = (end - self.range.start).max(1);
        }
    }

    /// Change the length keeping the start in place (tail drag)
    pub fn set_duration(&mut self, duration: i32) {
        let event = &mut *self.event;
        event.duration = duration;
        if event.time + event.duration > self.range.end {
            event.duration = self.range.end - event.time;
        }
        if event.duration < 1 {
            event.duration = 1;
        }
    }

    /// Keyframes for direct authoring
    pub fn keyframes_mut(&mut self) -> &mut Vec<Keyframe> {
        &mut self.event.keyframes
    }

    /// Append a keyframe at `phase`
    pub fn push_keyframe(&mut self, phase: f32, value: f32) {
        self.event.keyframes.push(Keyframe::new(phase, value));
    }

    /// Smooth the keyframe values
    pub fn filter(&mut self) {
        self.event.filter();
    }

    /// Reset the event to empty
    pub fn clear(&mut self) {
        self.event.clear();
    }
}
