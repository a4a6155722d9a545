use crate::*;

const CLEARED_SPRITES: [&str; MineCount::MAX as usize + 1] = [
    "0.png", "1.png", "2.png", "3.png", "4.png", "5.png", "6.png", "7.png", "8.png",
];

/// Sprite file for every cell symbol, relative to the sprite root.
pub const fn sprite_file(symbol: CellSymbol) -> &'static str {
    use CellSymbol::*;
    match symbol {
        Unknown => "blank.png",
        Pressed => "clicked.png",
        Mine => "mine.png",
        Flag => "flag.png",
        Cleared(count) => CLEARED_SPRITES[count.get() as usize],
    }
}

/// Image handle bound to one board cell. Assigning a sprite replaces the
/// previous one; the handle redraws itself into its own rectangle once the
/// sprite is available.
pub trait Drawable {
    fn set_sprite(&mut self, symbol: CellSymbol);
}

/// Drawing target the board is laid out on.
pub trait Surface {
    type Drawable: Drawable;
    type Error: From<ViewError>;

    /// `(width, height)` in pixels.
    fn size(&self) -> (f64, f64);

    /// Creates the drawable for `coords`, already showing `symbol`.
    fn create_drawable(
        &mut self,
        coords: Coord2,
        rect: CellRect,
        symbol: CellSymbol,
    ) -> core::result::Result<Self::Drawable, Self::Error>;
}
