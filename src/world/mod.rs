//! Static level data
//!
//! The tile grid loaded from a CSV map file. Read-only during play: the
//! neighborhood query and the renderer share it, nothing mutates it.

pub mod map;

pub use map::{MapError, Tile, TileMap};
