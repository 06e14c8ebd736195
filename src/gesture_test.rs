use super::*;

use crate::hand::{LANDMARK_COUNT, Landmark};

/// Every joint at the same spot — degenerate but well-defined.
fn neutral() -> LandmarkSet {
    [Landmark::new(0.5, 0.5); LANDMARK_COUNT]
}

/// Tip above its PIP joint (y grows downward).
fn extend(lm: &mut LandmarkSet, tip: usize, pip: usize) {
    lm[pip] = Landmark::new(lm[pip].x, 0.5);
    lm[tip] = Landmark::new(lm[tip].x, 0.35);
}

/// Tip below its PIP joint.
fn curl(lm: &mut LandmarkSet, tip: usize, pip: usize) {
    lm[pip] = Landmark::new(lm[pip].x, 0.5);
    lm[tip] = Landmark::new(lm[tip].x, 0.65);
}

fn pinch_hand() -> LandmarkSet {
    let mut lm = neutral();
    curl(&mut lm, MIDDLE_TIP, MIDDLE_PIP);
    curl(&mut lm, RING_TIP, RING_PIP);
    curl(&mut lm, PINKY_TIP, PINKY_PIP);
    lm[INDEX_PIP] = Landmark::new(0.5, 0.5);
    lm[INDEX_TIP] = Landmark::new(0.5, 0.35);
    lm[THUMB_IP] = Landmark::new(0.5, 0.5);
    lm[THUMB_TIP] = Landmark::new(0.51, 0.36);
    lm
}

fn fist_hand() -> LandmarkSet {
    let mut lm = neutral();
    curl(&mut lm, INDEX_TIP, INDEX_PIP);
    curl(&mut lm, MIDDLE_TIP, MIDDLE_PIP);
    curl(&mut lm, RING_TIP, RING_PIP);
    curl(&mut lm, PINKY_TIP, PINKY_PIP);
    lm
}

fn open_hand() -> LandmarkSet {
    let mut lm = neutral();
    extend(&mut lm, INDEX_TIP, INDEX_PIP);
    extend(&mut lm, MIDDLE_TIP, MIDDLE_PIP);
    extend(&mut lm, RING_TIP, RING_PIP);
    extend(&mut lm, PINKY_TIP, PINKY_PIP);
    lm
}

fn three_finger_hand() -> LandmarkSet {
    let mut lm = neutral();
    extend(&mut lm, INDEX_TIP, INDEX_PIP);
    extend(&mut lm, MIDDLE_TIP, MIDDLE_PIP);
    extend(&mut lm, RING_TIP, RING_PIP);
    curl(&mut lm, PINKY_TIP, PINKY_PIP);
    // thumb curled: tip below the IP joint
    lm[THUMB_IP] = Landmark::new(0.5, 0.5);
    lm[THUMB_TIP] = Landmark::new(0.5, 0.65);
    lm
}

/// Index extended, everything else curled — no gesture reads.
fn pointer_hand() -> LandmarkSet {
    let mut lm = neutral();
    extend(&mut lm, INDEX_TIP, INDEX_PIP);
    curl(&mut lm, MIDDLE_TIP, MIDDLE_PIP);
    curl(&mut lm, RING_TIP, RING_PIP);
    curl(&mut lm, PINKY_TIP, PINKY_PIP);
    lm[THUMB_IP] = Landmark::new(0.5, 0.5);
    lm[THUMB_TIP] = Landmark::new(0.5, 0.65);
    lm
}

// =============================================================
// is_pinching
// =============================================================

#[test]
fn pinch_requires_close_tips() {
    assert!(is_pinching(&pinch_hand()));
}

#[test]
fn pinch_flips_false_at_distance_threshold() {
    let mut lm = pinch_hand();
    // push the thumb tip exactly PINCH_MAX_DIST away horizontally
    lm[THUMB_TIP] = Landmark::new(lm[INDEX_TIP].x + PINCH_MAX_DIST, lm[INDEX_TIP].y);
    assert!(!is_pinching(&lm));
}

#[test]
fn pinch_requires_thumb_extended() {
    let mut lm = pinch_hand();
    lm[THUMB_TIP] = Landmark::new(lm[INDEX_TIP].x, 0.55);
    lm[THUMB_IP] = Landmark::new(lm[INDEX_TIP].x, 0.5);
    assert!(!is_pinching(&lm));
}

#[test]
fn pinch_requires_index_extended() {
    let mut lm = pinch_hand();
    lm[INDEX_PIP] = Landmark::new(0.5, 0.5);
    lm[INDEX_TIP] = Landmark::new(0.5, 0.55);
    lm[THUMB_IP] = Landmark::new(0.5, 0.7);
    lm[THUMB_TIP] = Landmark::new(0.51, 0.56);
    assert!(is_pinching(&pinch_hand()));
    assert!(!is_pinching(&lm));
}

// =============================================================
// is_fist_closed / is_hand_open
// =============================================================

#[test]
fn fist_true_when_all_fingers_curled() {
    let lm = fist_hand();
    assert!(is_fist_closed(&lm));
    assert!(!is_hand_open(&lm));
}

#[test]
fn open_true_when_all_fingers_extended() {
    let lm = open_hand();
    assert!(is_hand_open(&lm));
    assert!(!is_fist_closed(&lm));
}

#[test]
fn one_extended_finger_breaks_fist() {
    let mut lm = fist_hand();
    extend(&mut lm, RING_TIP, RING_PIP);
    assert!(!is_fist_closed(&lm));
}

#[test]
fn one_curled_finger_breaks_open() {
    let mut lm = open_hand();
    curl(&mut lm, PINKY_TIP, PINKY_PIP);
    assert!(!is_hand_open(&lm));
}

// =============================================================
// is_three_fingers_extended
// =============================================================

#[test]
fn three_fingers_reads_with_thumb_and_pinky_curled() {
    assert!(is_three_fingers_extended(&three_finger_hand()));
}

#[test]
fn three_fingers_requires_pinky_curled() {
    let mut lm = three_finger_hand();
    extend(&mut lm, PINKY_TIP, PINKY_PIP);
    assert!(!is_three_fingers_extended(&lm));
}

#[test]
fn three_fingers_requires_thumb_curled() {
    let mut lm = three_finger_hand();
    lm[THUMB_TIP] = Landmark::new(0.5, 0.35);
    assert!(!is_three_fingers_extended(&lm));
}

// =============================================================
// Gesture::classify
// =============================================================

#[test]
fn classify_each_canonical_hand() {
    assert_eq!(Gesture::classify(&three_finger_hand()), Some(Gesture::ThreeFingers));
    assert_eq!(Gesture::classify(&open_hand()), Some(Gesture::OpenPalm));
    assert_eq!(Gesture::classify(&fist_hand()), Some(Gesture::Fist));
    assert_eq!(Gesture::classify(&pinch_hand()), Some(Gesture::Pinch));
}

#[test]
fn classify_returns_none_for_pointer_hand() {
    assert_eq!(Gesture::classify(&pointer_hand()), None);
}

#[test]
fn open_palm_outranks_pinch_when_both_read() {
    // All fingers extended with the thumb resting against the index tip
    // satisfies both predicates; priority picks the palm.
    let mut lm = open_hand();
    lm[THUMB_IP] = Landmark::new(0.5, 0.5);
    lm[THUMB_TIP] = Landmark::new(lm[INDEX_TIP].x + 0.01, lm[INDEX_TIP].y);
    assert!(is_pinching(&lm));
    assert!(is_hand_open(&lm));
    assert_eq!(Gesture::classify(&lm), Some(Gesture::OpenPalm));
}
