//! Tile map loading and queries
//!
//! A map is a text grid of comma/whitespace separated integers, one text
//! row per line, top row first. `0` is an empty cell and any positive
//! value places a solid tile with palette color `value - 1`. In memory the
//! grid is flipped so that row 0 is the bottom of the map, matching the
//! bottom-left world origin. Tiles are owned values inside the grid and
//! the grid is immutable once loaded.

use std::fs;
use std::path::Path;

use macroquad::math::Vec2;

use crate::game::rect::Rect;

/// Error type for map loading
#[derive(Debug)]
pub enum MapError {
    Io(std::io::Error),
    /// A token that is not a non-negative integer, with its 1-based text line
    BadToken { line: usize, token: String },
}

impl From<std::io::Error> for MapError {
    fn from(e: std::io::Error) -> Self {
        MapError::Io(e)
    }
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::Io(e) => write!(f, "IO error: {}", e),
            MapError::BadToken { line, token } => {
                write!(f, "unexpected token {:?} on line {}", token, line)
            }
        }
    }
}

/// One solid cell of the map
#[derive(Debug, Clone, Copy)]
pub struct Tile {
    pub rect: Rect,
    /// Palette index (file value minus one)
    pub color: usize,
}

/// The static tile grid, row 0 at the bottom
pub struct TileMap {
    /// `grid[row][col]`, rectangular; `None` is an empty (non-solid) cell
    grid: Vec<Vec<Option<Tile>>>,
    tile_size: f32,
    /// Parse problems found while loading. The map is still usable; the
    /// caller decides whether a partial map is acceptable.
    pub issues: Vec<MapError>,
}

impl TileMap {
    /// Load a map from a file. An unreadable file is fatal; bad tokens
    /// inside a readable file are collected into `issues` instead.
    pub fn load<P: AsRef<Path>>(path: P, tile_size: f32) -> Result<TileMap, MapError> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::from_str(&contents, tile_size))
    }

    /// Parse a map from text. Never fails outright: rows with bad tokens
    /// keep their parseable cells and the problems are recorded.
    pub fn from_str(text: &str, tile_size: f32) -> TileMap {
        let mut issues = Vec::new();

        // Cell values in text order, top row first
        let mut values: Vec<Vec<u32>> = Vec::new();
        for (line_idx, line) in text.lines().enumerate() {
            let mut row = Vec::new();
            for token in line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|t| !t.is_empty())
            {
                match token.parse::<u32>() {
                    Ok(v) => row.push(v),
                    Err(_) => issues.push(MapError::BadToken {
                        line: line_idx + 1,
                        token: token.to_string(),
                    }),
                }
            }
            values.push(row);
        }
        // Trailing blank lines would otherwise become empty bottom rows
        while values.last().is_some_and(|row| row.is_empty()) {
            values.pop();
        }

        let cols = values.iter().map(|row| row.len()).max().unwrap_or(0);
        let rows = values.len();

        // Flip so that grid row 0 is the last text row (map bottom), and
        // turn values into positioned tiles. Short rows pad with empties.
        let mut grid = Vec::with_capacity(rows);
        for (flipped, row) in values.iter().rev().enumerate() {
            let mut out = Vec::with_capacity(cols);
            for col in 0..cols {
                let value = row.get(col).copied().unwrap_or(0);
                out.push((value > 0).then(|| Tile {
                    rect: Rect::new(
                        col as f32 * tile_size,
                        flipped as f32 * tile_size,
                        tile_size,
                        tile_size,
                    ),
                    color: (value - 1) as usize,
                }));
            }
            grid.push(out);
        }

        TileMap {
            grid,
            tile_size,
            issues,
        }
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn cols(&self) -> usize {
        self.grid.first().map_or(0, |row| row.len())
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// The tile at (row, col), if the cell is in range and solid
    pub fn tile(&self, row: usize, col: usize) -> Option<&Tile> {
        self.grid.get(row)?.get(col)?.as_ref()
    }

    /// The (row, col) cell containing a world point. Truncating division,
    /// matching cells anchored at their lower-left corner.
    pub fn cell_at(&self, point: Vec2) -> (isize, isize) {
        (
            (point.y / self.tile_size) as isize,
            (point.x / self.tile_size) as isize,
        )
    }

    /// The solid tiles in the 3x3 block of cells around `cell` (inclusive).
    /// Offsets falling outside the grid are skipped, so any cell — even one
    /// outside the map — is a valid query.
    pub fn candidates_around(&self, cell: (isize, isize)) -> Vec<&Tile> {
        let (row, col) = cell;
        let mut found = Vec::new();
        for dr in -1..=1 {
            for dc in -1..=1 {
                let r = row + dr;
                let c = col + dc;
                if r < 0 || r >= self.rows() as isize || c < 0 || c >= self.cols() as isize {
                    continue;
                }
                if let Some(tile) = self.tile(r as usize, c as usize) {
                    found.push(tile);
                }
            }
        }
        found
    }

    /// Iterate all solid tiles (for drawing)
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.grid
            .iter()
            .flat_map(|row| row.iter().filter_map(|cell| cell.as_ref()))
    }
}
