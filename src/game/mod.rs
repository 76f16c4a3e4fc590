//! Gameplay core
//!
//! The rectangle primitive, the overlap predicate and the player movement
//! state machine. Everything here is plain single-threaded math: the frame
//! loop feeds in input intent, the nearby tiles and dt, and reads back the
//! settled position after the update.

pub mod player;
pub mod rect;

pub use player::{Phase, Player};
pub use rect::{overlaps, Rect};
