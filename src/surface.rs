//! The canvas-surface seam and the raster snapshot type.
//!
//! The session mutates the canvas only through [`DrawSurface`], so the real
//! raster backend and test surfaces are interchangeable. Snapshots are full
//! pixel captures; restoring the same snapshot twice yields identical pixels.

use crate::color::Rgb;

/// A point in canvas space (pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A full raster capture of the canvas at one point in history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub width: u32,
    pub height: u32,
    /// RGBA8, row-major, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

/// Everything the session needs from a canvas backend.
pub trait DrawSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Paint a rounded-cap, rounded-join segment in the brush color.
    fn draw_segment(&mut self, from: Point, to: Point, color: Rgb, width: f64);

    /// Remove pixel content along a segment, preserving transparency
    /// underneath (alpha punch, not background paint).
    fn erase_segment(&mut self, from: Point, to: Point, width: f64);

    /// Reset every pixel to fully transparent.
    fn clear(&mut self);

    /// Capture the full pixel buffer.
    fn capture(&self) -> Snapshot;

    /// Repaint from a captured snapshot. Idempotent.
    fn restore(&mut self, snapshot: &Snapshot);
}
