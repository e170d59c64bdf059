// SPDX-License-Identifier: MIT OR Apache-2.0
//! Timeline view state.
//!
//! Zoom and pan are owned by the sequencer so every view of it agrees on
//! them, but nothing in playback reads them. Coordinates are in pixels
//! relative to the left edge of the event area.

const MIN_ZOOM: f32 = 0.1;
/// Subdivisions between two labelled grid lines
pub const GRID_SUBSTEPS: i32 = 5;
/// Minimum spacing between labelled grid lines, in pixels
const MIN_GRID_SPACING: f32 = 50.0;

/// Horizontal zoom and 2D pan of a timeline view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Pixels per frame
    pub zoom: f32,
    /// Pan offset in pixels; `pan[1]` is never positive
    pub pan: [f32; 2],
}

impl Viewport {
    /// Create a viewport
    pub fn new(zoom: f32, pan: [f32; 2]) -> Self {
        Self {
            zoom: zoom.max(MIN_ZOOM),
            pan,
        }
    }

    /// Convert frame to x position
    pub fn frame_to_x(&self, frame: i32) -> f32 {
        frame as f32 * self.zoom + self.pan[0]
    }

    /// Convert x position to the nearest frame
    pub fn x_to_frame(&self, x: f32) -> i32 {
        ((x - self.pan[0]) / self.zoom).round() as i32
    }

    /// Width in pixels of a span of frames
    pub fn frames_to_width(&self, frames: i32) -> f32 {
        frames as f32 * self.zoom
    }

    /// Zoom by `delta` pixels per frame, keeping the frame under `cursor_x` fixed
    pub fn zoom_at(&mut self, cursor_x: f32, delta: f32) {
        let zoom = (self.zoom + delta).max(MIN_ZOOM);
        let before = cursor_x - self.pan[0];
        let after = before / self.zoom * zoom;
        self.zoom = zoom;
        self.pan[0] -= after - before;
    }

    /// Pan by a mouse delta; vertical pan stays within `-max_scroll_y..=0`
    pub fn pan_by(&mut self, dx: f32, dy: f32, max_scroll_y: f32) {
        self.pan[0] += dx;
        self.pan[1] = (self.pan[1] + dy).clamp(-max_scroll_y.max(0.0), 0.0);
    }

    /// Frames between labelled grid lines, a multiple of [`GRID_SUBSTEPS`]
    pub fn grid_step(&self) -> i32 {
        let multiplier = (MIN_GRID_SPACING / self.zoom / GRID_SUBSTEPS as f32).ceil() as i32;
        GRID_SUBSTEPS * multiplier.max(1)
    }

    /// First and last grid frame covering a view `width` pixels wide
    pub fn grid_span(&self, width: f32) -> (i32, i32) {
        let step = self.grid_step();
        let step_px = self.zoom * step as f32;
        let first = ((-self.pan[0] / step_px) as i32 - 1) * step;
        let last = (((width - self.pan[0]) / step_px) as i32 + 1) * step;
        (first, last)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(10.0, [0.0, 0.0])
    }
}
