use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u16;

/// Board cell coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> usize {
    (a as usize) * (b as usize)
}

/// Position in surface pixels, relative to the board's top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PixelPos {
    pub x: f64,
    pub y: f64,
}

impl PixelPos {
    /// Where the pointer is assumed to be before any event arrived.
    pub const OFF_BOARD: Self = Self::new(-1., -1.);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for PixelPos {
    fn default() -> Self {
        Self::OFF_BOARD
    }
}

impl From<(f64, f64)> for PixelPos {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Destination rectangle of one cell's sprite.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}
