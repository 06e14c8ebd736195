//! Detection wire format from the hand-tracking sidecar.
//!
//! Landmark detection is delegated entirely to an external tracking model (a
//! MediaPipe sidecar or compatible). The sidecar emits one JSON object per
//! line:
//!
//! ```json
//! {"hands":[{"handedness":"Right","score":0.93,"landmarks":[{"x":0.1,"y":0.2,"z":0.0}, ...]}]}
//! ```
//!
//! This module parses those lines into [`HandFrame`]s. The first hand whose
//! score clears the confidence threshold and carries exactly 21 landmarks
//! wins; malformed hands are skipped with a warning. Multi-hand frames
//! degrade to the first acceptable hand — there is no multi-hand support.

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tracker_test;

use std::io::BufRead;

use serde::Deserialize;

use crate::consts::MIN_HAND_SCORE;
use crate::hand::{HandFrame, LANDMARK_COUNT, Landmark, LandmarkSet};

/// Errors produced while reading detection records.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// A detection line was not valid JSON in the expected shape.
    #[error("malformed detection record: {0}")]
    Parse(String),

    /// The underlying reader failed.
    #[error("detection read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// One frame's detection outcome.
#[derive(Debug, Clone)]
pub enum Detection {
    /// A hand cleared the confidence threshold.
    Hand(HandFrame),
    /// Nothing acceptable in this frame — a valid input, not an error.
    NoHand,
}

// The sidecar also reports a z (depth) channel; classification is purely
// planar, so it is not deserialized.
#[derive(Debug, Deserialize)]
struct LandmarkWire {
    x: f64,
    y: f64,
}

#[derive(Debug, Deserialize)]
struct HandWire {
    handedness: String,
    score: f32,
    landmarks: Vec<LandmarkWire>,
}

#[derive(Debug, Deserialize)]
struct DetectionWire {
    #[serde(default)]
    hands: Vec<HandWire>,
    #[serde(default)]
    error: Option<String>,
}

/// Parse one sidecar line into a detection outcome.
///
/// A record-level `error` field from the sidecar is logged and treated as
/// no-hand so a flaky detector never stalls the frame loop.
///
/// # Errors
///
/// Returns [`TrackerError::Parse`] when the line is not a valid detection
/// record at all.
pub fn parse_detection(line: &str, min_score: f32) -> Result<Detection, TrackerError> {
    let record: DetectionWire = serde_json::from_str(line).map_err(|e| TrackerError::Parse(e.to_string()))?;

    if let Some(message) = record.error {
        tracing::warn!(%message, "sidecar reported a detection error");
        return Ok(Detection::NoHand);
    }

    for hand in record.hands {
        if hand.score < min_score {
            continue;
        }
        if hand.landmarks.len() != LANDMARK_COUNT {
            tracing::warn!(count = hand.landmarks.len(), "expected {LANDMARK_COUNT} landmarks; skipping hand");
            continue;
        }
        let mut landmarks: LandmarkSet = [Landmark::default(); LANDMARK_COUNT];
        for (slot, wire) in landmarks.iter_mut().zip(hand.landmarks.iter()) {
            *slot = Landmark::new(wire.x, wire.y);
        }
        let handedness = crate::hand::Handedness::from_label(&hand.handedness).unwrap_or_default();
        return Ok(Detection::Hand(HandFrame { landmarks, handedness }));
    }

    Ok(Detection::NoHand)
}

/// Line-oriented detection reader over any buffered source.
pub struct FrameReader<R: BufRead> {
    inner: R,
    min_score: f32,
    line: String,
}

impl<R: BufRead> FrameReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, min_score: MIN_HAND_SCORE, line: String::new() }
    }

    /// Override the confidence threshold.
    pub fn with_min_score(mut self, min_score: f32) -> Self {
        self.min_score = min_score.clamp(0.0, 1.0);
        self
    }

    /// Read the next detection. `None` means the source is exhausted.
    ///
    /// # Errors
    ///
    /// Propagates I/O failures and malformed records.
    pub fn next_detection(&mut self) -> Result<Option<Detection>, TrackerError> {
        loop {
            self.line.clear();
            if self.inner.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            let trimmed = self.line.trim();
            if trimmed.is_empty() {
                continue;
            }
            return parse_detection(trimmed, self.min_score).map(Some);
        }
    }
}
