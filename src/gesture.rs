//! Per-frame gesture predicates and the priority classifier.
//!
//! Each predicate is a pure function of a single frame's landmark set; there
//! is no temporal smoothing or debouncing, so a noisy frame classifies
//! noisily. Overlapping readings are resolved by [`Gesture::classify`], which
//! walks a fixed priority list and returns the first match — e.g. a hand that
//! reads as both open palm and pinch is an open palm.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::consts::PINCH_MAX_DIST;
use crate::hand::{
    INDEX_PIP, INDEX_TIP, LandmarkSet, MIDDLE_PIP, MIDDLE_TIP, PINKY_PIP, PINKY_TIP, RING_PIP, RING_TIP, THUMB_IP,
    THUMB_TIP,
};

/// Fingertip indices of the four non-thumb fingers.
const FINGER_TIPS: [usize; 4] = [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// PIP joints matching [`FINGER_TIPS`] position for position.
const FINGER_PIPS: [usize; 4] = [INDEX_PIP, MIDDLE_PIP, RING_PIP, PINKY_PIP];

/// Thumb tip and index tip close together, both pointing up.
#[must_use]
pub fn is_pinching(lm: &LandmarkSet) -> bool {
    let thumb_tip = lm[THUMB_TIP];
    let index_tip = lm[INDEX_TIP];
    thumb_tip.dist(index_tip) < PINCH_MAX_DIST && thumb_tip.y < lm[THUMB_IP].y && index_tip.y < lm[INDEX_PIP].y
}

/// All four non-thumb fingers curled (no tip above its PIP joint).
#[must_use]
pub fn is_fist_closed(lm: &LandmarkSet) -> bool {
    FINGER_TIPS
        .iter()
        .zip(FINGER_PIPS.iter())
        .all(|(&tip, &pip)| lm[tip].y >= lm[pip].y)
}

/// Index, middle, and ring extended; thumb and pinky curled.
#[must_use]
pub fn is_three_fingers_extended(lm: &LandmarkSet) -> bool {
    lm[INDEX_TIP].y < lm[INDEX_PIP].y
        && lm[MIDDLE_TIP].y < lm[MIDDLE_PIP].y
        && lm[RING_TIP].y < lm[RING_PIP].y
        && lm[THUMB_TIP].y > lm[THUMB_IP].y
        && lm[PINKY_TIP].y > lm[PINKY_PIP].y
}

/// All four non-thumb fingers extended.
#[must_use]
pub fn is_hand_open(lm: &LandmarkSet) -> bool {
    FINGER_TIPS
        .iter()
        .zip(FINGER_PIPS.iter())
        .all(|(&tip, &pip)| lm[tip].y <= lm[pip].y)
}

/// A discrete gesture reading for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Index/middle/ring extended — sweeps the color palette.
    ThreeFingers,
    /// All fingers extended — held to clear the canvas.
    OpenPalm,
    /// All fingers curled — erases.
    Fist,
    /// Thumb and index pinched — draws.
    Pinch,
}

impl Gesture {
    /// Ordered predicate table; the first matching row wins.
    const PRIORITY: [(fn(&LandmarkSet) -> bool, Gesture); 4] = [
        (is_three_fingers_extended, Gesture::ThreeFingers),
        (is_hand_open, Gesture::OpenPalm),
        (is_fist_closed, Gesture::Fist),
        (is_pinching, Gesture::Pinch),
    ];

    /// Classify a frame's landmark set, or `None` when no gesture reads.
    #[must_use]
    pub fn classify(lm: &LandmarkSet) -> Option<Self> {
        Self::PRIORITY
            .iter()
            .find(|(predicate, _)| predicate(lm))
            .map(|&(_, gesture)| gesture)
    }
}
