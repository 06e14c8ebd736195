//! Hand landmark model: a 21-point set in normalized image coordinates.
//!
//! Landmark indices follow the MediaPipe hand landmark convention: wrist at
//! index 0, then four joints per finger (MCP, PIP, DIP, tip) walking from the
//! thumb to the pinky. Coordinates are normalized to [0, 1] relative to the
//! frame, with y growing downward — so an extended fingertip has a *smaller*
//! y than the joint below it.

#[cfg(test)]
#[path = "hand_test.rs"]
mod hand_test;

/// Number of tracked landmarks per hand.
pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_PIP: usize = 6;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_TIP: usize = 12;
pub const RING_PIP: usize = 14;
pub const RING_TIP: usize = 16;
pub const PINKY_PIP: usize = 18;
pub const PINKY_TIP: usize = 20;

/// A single tracked anatomical point, normalized to the frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
}

impl Landmark {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another landmark in normalized units.
    #[must_use]
    pub fn dist(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// One frame's full landmark set. Replaced wholesale each detection cycle.
pub type LandmarkSet = [Landmark; LANDMARK_COUNT];

/// Which hand the tracking model believes it is seeing.
///
/// Carried through from the sidecar but not consulted by classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Handedness {
    Left,
    #[default]
    Right,
}

impl Handedness {
    /// Parse the sidecar's handedness label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Left" => Some(Self::Left),
            "Right" => Some(Self::Right),
            _ => None,
        }
    }
}

/// A detected hand for one frame: the landmark set plus handedness.
#[derive(Debug, Clone)]
pub struct HandFrame {
    pub landmarks: LandmarkSet,
    pub handedness: Handedness,
}

impl HandFrame {
    /// The index fingertip — the cursor anchor for every interaction mode.
    #[must_use]
    pub fn index_tip(&self) -> Landmark {
        self.landmarks[INDEX_TIP]
    }
}
