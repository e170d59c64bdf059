// SPDX-License-Identifier: MIT OR Apache-2.0
//! Keyframe signal storage, step evaluation and smoothing.
//!
//! Events keep their keyframes on a normalized phase axis (`0.0..=1.0`) so
//! that moving or resizing an event never touches the keyframes themselves.
//! Recordings keep absolute frame numbers until they are baked.

use serde::{Deserialize, Serialize};

/// A phase-normalized keyframe inside an event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Position within the owning event, `0.0` at its start and `1.0` at its end
    pub phase: f32,
    /// Value written to the target from this phase on
    pub value: f32,
}

impl Keyframe {
    /// Create a new keyframe
    pub fn new(phase: f32, value: f32) -> Self {
        Self { phase, value }
    }
}

impl From<(f32, f32)> for Keyframe {
    fn from((phase, value): (f32, f32)) -> Self {
        Self::new(phase, value)
    }
}

/// A captured value at an absolute frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Frame the value was captured on
    pub frame: i32,
    /// Captured value
    pub value: f32,
}

impl Sample {
    /// Create a new sample
    pub fn new(frame: i32, value: f32) -> Self {
        Self { frame, value }
    }
}

/// Evaluate a keyframe sequence at `phase` with zero-order hold.
///
/// Returns the value of the last keyframe in storage order whose phase is
/// not past `phase`, or `0.0` when none qualifies. The sequence is scanned
/// as stored; out-of-order keyframes are not sorted first.
pub fn evaluate(keyframes: &[Keyframe], phase: f32) -> f32 {
    keyframes
        .iter()
        .rev()
        .find(|k| k.phase <= phase)
        .map_or(0.0, |k| k.value)
}

/// Coefficients of a single-pole IIR low-pass filter.
///
/// Implements `y[i] = b0*x[i] + b1*x[i-1] - a1*y[i-1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowPass {
    /// Feed-forward coefficient for the current input
    pub b0: f32,
    /// Feed-forward coefficient for the previous input
    pub b1: f32,
    /// Feedback coefficient for the previous output
    pub a1: f32,
}

impl LowPass {
    /// First-order Butterworth low-pass at 0.4 of Nyquist
    pub const BUTTERWORTH_1ST_ORDER: Self = Self {
        b0: 0.420_807_78,
        b1: 0.420_807_78,
        a1: -0.158_384_44,
    };

    /// Gain of the filter for a constant input
    pub fn dc_gain(&self) -> f32 {
        (self.b0 + self.b1) / (1.0 + self.a1)
    }

    /// Run one causal pass over `values`, in iteration order.
    ///
    /// Both delay lines start at the first value so a constant signal
    /// passes through unchanged.
    pub fn run<'a>(&self, values: impl IntoIterator<Item = &'a mut f32>) {
        let mut values = values.into_iter().peekable();
        let Some(first) = values.peek() else {
            return;
        };
        let mut last_x = **first;
        let mut last_y = last_x;
        for x in values {
            let y = self.b0 * *x + self.b1 * last_x - self.a1 * last_y;
            last_x = *x;
            last_y = y;
            *x = y;
        }
    }
}

impl Default for LowPass {
    fn default() -> Self {
        Self::BUTTERWORTH_1ST_ORDER
    }
}

/// Run a single filter pass over the value channel of `keyframes`.
///
/// Successive keyframes are treated as evenly spaced regardless of their
/// phases. With `backwards` the pass runs from the last keyframe to the
/// first.
pub fn filter_pass(keyframes: &mut [Keyframe], coefficients: &LowPass, backwards: bool) {
    if backwards {
        coefficients.run(keyframes.iter_mut().rev().map(|k| &mut k.value));
    } else {
        coefficients.run(keyframes.iter_mut().map(|k| &mut k.value));
    }
}

/// Zero-phase smoothing of the value channel in place.
///
/// Applies the Butterworth low-pass forwards and then backwards so the
/// phase shifts of the two passes cancel. Empty input is left untouched.
pub fn filter(keyframes: &mut [Keyframe]) {
    if keyframes.is_empty() {
        return;
    }
    let coefficients = LowPass::BUTTERWORTH_1ST_ORDER;
    filter_pass(keyframes, &coefficients, false);
    filter_pass(keyframes, &coefficients, true);
}
