//! Gesture-driven air drawing engine.
//!
//! A hand-tracking sidecar (MediaPipe or compatible) reports 21 normalized
//! landmark points per frame. This crate classifies each frame's fingertip
//! geometry into a drawing gesture, dispatches it to an interaction mode
//! (draw / erase / move / color-select / clear-hold), mutates a software
//! raster canvas, and maintains a bounded undo/redo history of full raster
//! snapshots. The host layer is responsible only for delivering frames,
//! applying the returned [`session::Action`]s to its UI, and confirming
//! destructive operations.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`hand`] | Landmark set types and anatomical index constants |
//! | [`gesture`] | Pure per-frame gesture predicates and the priority classifier |
//! | [`session`] | Per-frame dispatcher: modes, stroke state, timers, actions |
//! | [`timer`] | Cancellable deadlines checked against an injected clock |
//! | [`history`] | Bounded snapshot stack with an undo/redo cursor |
//! | [`surface`] | Canvas-surface trait and the snapshot type |
//! | [`raster`] | Software RGBA canvas: stroke rendering and PNG export |
//! | [`color`] | Hue-sweep color selection and hex/HSL conversions |
//! | [`tracker`] | Detection wire format from the hand-tracking sidecar |
//! | [`chat`] | AI side-panel completion client |
//! | [`consts`] | Shared tuned constants (thresholds, caps, delays) |

pub mod chat;
pub mod color;
pub mod consts;
pub mod gesture;
pub mod hand;
pub mod history;
pub mod raster;
pub mod session;
pub mod surface;
pub mod timer;
pub mod tracker;
