//! Per-frame gesture-to-mode dispatcher.
//!
//! A [`Session`] holds everything that persists between frames: the committed
//! interaction mode, brush settings, the stroke's last committed point, the
//! undo/redo history, and the two deadlines (clear-hold, idle reminder). Each
//! detection frame is processed to completion before the next — there is no
//! internal concurrency, and time is passed in so tests drive the clock.
//!
//! Canvas mutation goes through the [`DrawSurface`] seam; everything aimed at
//! the host UI (status text, cursor overlay, color swatch, the clear
//! confirmation gate, the reminder affordance) comes back as [`Action`]s for
//! the host to apply.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::time::Instant;

use crate::color::{self, Rgb};
use crate::consts::{CLEAR_HOLD, DEFAULT_BRUSH_COLOR, DEFAULT_BRUSH_WIDTH, ERASE_WIDTH_FACTOR, IDLE_REMINDER};
use crate::gesture::Gesture;
use crate::hand::HandFrame;
use crate::history::History;
use crate::surface::{DrawSurface, Point};
use crate::timer::Deadline;

/// Fallback RGB channels when the brush color string fails to parse.
const FALLBACK_BRUSH_RGB: Rgb = (0x00, 0xff, 0x88);

/// The active interaction behavior applied to the canvas.
///
/// Color select and the clear hold return early without committing a mode
/// change, so `Moving`/`Drawing`/`Erasing` can remain the committed mode
/// while those statuses display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    Drawing,
    Erasing,
    Moving,
    ColorSelect,
}

/// Styling category for the status display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Idle,
    Drawing,
    Erasing,
}

/// Host-facing effects produced by a frame or tick.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Update the status bar.
    Status { text: String, kind: StatusKind },
    /// Move the cursor overlay to a canvas position.
    CursorShown { x: f64, y: f64 },
    /// Hide the cursor overlay.
    CursorHidden,
    /// The brush color changed (palette sweep or UI).
    ColorChanged(String),
    /// The clear hold elapsed; the host must confirm before calling
    /// [`Session::confirm_clear`].
    ClearRequested,
    /// Show the idle gesture reminder.
    ReminderShown,
    /// Hide the idle gesture reminder.
    ReminderHidden,
}

/// Current brush color and stroke width.
#[derive(Debug, Clone)]
pub struct Brush {
    /// Lowercase `#rrggbb`.
    pub color: String,
    /// Stroke width in canvas pixels.
    pub width: f64,
}

impl Default for Brush {
    fn default() -> Self {
        Self { color: DEFAULT_BRUSH_COLOR.to_string(), width: DEFAULT_BRUSH_WIDTH }
    }
}

/// All per-session state: mode, brush, stroke, history, and timers.
#[derive(Debug, Default)]
pub struct Session {
    mode: Mode,
    brush: Brush,
    last_point: Option<Point>,
    history: History,
    clear_hold: Deadline,
    idle_reminder: Deadline,
    reminder_visible: bool,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Queries ---

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    // --- UI setters ---

    /// Set the brush color from the UI picker, normalizing to `#rrggbb`.
    pub fn set_brush_color(&mut self, value: &str) {
        self.brush.color = color::normalize_hex_color(value, FALLBACK_BRUSH_RGB);
    }

    /// Set the brush width from the UI slider. Non-positive values are ignored.
    pub fn set_brush_width(&mut self, width: f64) {
        if width > 0.0 {
            self.brush.width = width;
        }
    }

    // --- Frame processing ---

    /// Process one detection frame: classify the gesture, transition the
    /// mode, mutate the canvas, and return the UI effects.
    pub fn on_frame(
        &mut self,
        frame: Option<&HandFrame>,
        now: Instant,
        surface: &mut dyn DrawSurface,
    ) -> Vec<Action> {
        let mut actions = Vec::new();

        // Every processed frame defers the idle reminder, hand or not.
        self.rearm_idle_reminder(now, &mut actions);

        let Some(frame) = frame else {
            self.clear_hold.disarm();
            push_status(&mut actions, "Waiting for Hand Gesture...", StatusKind::Idle);
            actions.push(Action::CursorHidden);
            return actions;
        };

        let tip = frame.index_tip();
        let cursor = Point::new(tip.x * f64::from(surface.width()), tip.y * f64::from(surface.height()));
        actions.push(Action::CursorShown { x: cursor.x, y: cursor.y });

        match Gesture::classify(&frame.landmarks) {
            Some(Gesture::ThreeFingers) => {
                self.clear_hold.disarm();
                let hue = color::hue_from_position(cursor.x, f64::from(surface.width()));
                let hex = color::hsl_to_hex(hue, 1.0, 0.5);
                self.brush.color.clone_from(&hex);
                actions.push(Action::ColorChanged(hex));
                push_status(&mut actions, "ACTIVE: COLOR SELECT MODE", StatusKind::Idle);
                actions.push(Action::CursorHidden);
            }
            Some(Gesture::OpenPalm) => {
                self.clear_hold.arm_if_unarmed(now, CLEAR_HOLD);
                push_status(&mut actions, "HOLD: CLEAR CANVAS (1s)", StatusKind::Idle);
                if self.clear_hold.fire_if_due(now) {
                    actions.push(Action::ClearRequested);
                }
            }
            Some(Gesture::Fist) => {
                self.clear_hold.disarm();
                if self.mode != Mode::Erasing {
                    self.mode = Mode::Erasing;
                    self.history.push(surface.capture());
                    self.last_point = None;
                    push_status(&mut actions, "ACTIVE: ERASE MODE (FIST)", StatusKind::Erasing);
                }
                self.erase_to(cursor, surface);
            }
            Some(Gesture::Pinch) => {
                self.clear_hold.disarm();
                if self.mode != Mode::Drawing {
                    self.mode = Mode::Drawing;
                    self.history.push(surface.capture());
                    self.last_point = None;
                    push_status(&mut actions, "ACTIVE: DRAW MODE (PINCH)", StatusKind::Drawing);
                }
                self.draw_to(cursor, surface);
            }
            None => {
                self.clear_hold.disarm();
                if self.mode != Mode::Moving {
                    self.mode = Mode::Moving;
                    self.last_point = None;
                    push_status(&mut actions, "ACTIVE: MOVE CURSOR MODE", StatusKind::Idle);
                }
            }
        }

        actions
    }

    /// Check pending deadlines between frames. Drives the idle reminder,
    /// which only ever fires when frame delivery itself has stopped.
    pub fn tick(&mut self, now: Instant) -> Vec<Action> {
        if self.idle_reminder.fire_if_due(now) {
            self.reminder_visible = true;
            return vec![Action::ReminderShown];
        }
        Vec::new()
    }

    // --- Host-confirmed operations ---

    /// Clear the canvas after the host confirmed a [`Action::ClearRequested`].
    /// The pre-clear state is pushed to history first.
    pub fn confirm_clear(&mut self, surface: &mut dyn DrawSurface) -> Vec<Action> {
        self.history.push(surface.capture());
        surface.clear();
        vec![Action::Status { text: "Canvas Cleared".to_string(), kind: StatusKind::Idle }]
    }

    /// Capture the current canvas as a new history entry (e.g. the initial
    /// blank state when a drawing session starts).
    pub fn capture_snapshot(&mut self, surface: &dyn DrawSurface) {
        self.history.push(surface.capture());
    }

    /// Repaint the canvas from the previous history entry. Returns false at
    /// the oldest entry.
    pub fn undo(&mut self, surface: &mut dyn DrawSurface) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                surface.restore(snapshot);
                true
            }
            None => false,
        }
    }

    /// Repaint the canvas from the next history entry. Returns false at the
    /// newest entry.
    pub fn redo(&mut self, surface: &mut dyn DrawSurface) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                surface.restore(snapshot);
                true
            }
            None => false,
        }
    }

    // --- Stroke rendering ---

    /// Commit a draw step. The first point of a stroke is recorded without
    /// rendering, so a fresh pinch never leaves a zero-length dot.
    fn draw_to(&mut self, point: Point, surface: &mut dyn DrawSurface) {
        let Some(last) = self.last_point else {
            self.last_point = Some(point);
            return;
        };
        let rgb = color::parse_hex_rgb(&self.brush.color).unwrap_or(FALLBACK_BRUSH_RGB);
        surface.draw_segment(last, point, rgb, self.brush.width);
        self.last_point = Some(point);
    }

    /// Commit an erase step at double the brush width.
    fn erase_to(&mut self, point: Point, surface: &mut dyn DrawSurface) {
        let Some(last) = self.last_point else {
            self.last_point = Some(point);
            return;
        };
        surface.erase_segment(last, point, self.brush.width * ERASE_WIDTH_FACTOR);
        self.last_point = Some(point);
    }

    fn rearm_idle_reminder(&mut self, now: Instant, actions: &mut Vec<Action>) {
        if self.reminder_visible {
            self.reminder_visible = false;
            actions.push(Action::ReminderHidden);
        }
        self.idle_reminder.arm(now, IDLE_REMINDER);
    }
}

fn push_status(actions: &mut Vec<Action>, text: &str, kind: StatusKind) {
    actions.push(Action::Status { text: text.to_string(), kind });
}
