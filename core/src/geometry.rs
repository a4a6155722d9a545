use ndarray::Array2;

use crate::*;

/// Pixel layout of the board: one uniform square cell size and the
/// precomputed rectangle of every cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    size: Coord2,
    cell_size: f64,
    rects: Array2<CellRect>,
}

impl Geometry {
    /// Fits `size` cells into a `surface_width` x `surface_height` surface,
    /// keeping cells square.
    pub fn new(size: Coord2, (surface_width, surface_height): (f64, f64)) -> Result<Self> {
        let (rows, cols) = size;
        if rows == 0 || cols == 0 {
            return Err(ViewError::InvalidDimensions);
        }

        let cell_size = (surface_width / f64::from(cols)).min(surface_height / f64::from(rows));
        if !(cell_size.is_finite() && cell_size > 0.) {
            return Err(ViewError::InvalidSurface {
                width: surface_width,
                height: surface_height,
            });
        }

        let rects = Array2::from_shape_fn(size.to_nd_index(), |(row, col)| CellRect {
            x: col as f64 * cell_size,
            y: row as f64 * cell_size,
            width: cell_size,
            height: cell_size,
        });

        Ok(Self {
            size,
            cell_size,
            rects,
        })
    }

    /// `(rows, cols)`
    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Total pixel extent `(width, height)` covered by cells.
    pub fn extent(&self) -> (f64, f64) {
        let (rows, cols) = self.size;
        (
            f64::from(cols) * self.cell_size,
            f64::from(rows) * self.cell_size,
        )
    }

    pub fn rect(&self, coords: Coord2) -> CellRect {
        self.rects[coords.to_nd_index()]
    }

    /// The cell under `pos`, or `None` when `pos` is off the board.
    pub fn cell_at(&self, pos: PixelPos) -> Option<Coord2> {
        let (width, height) = self.extent();
        // also rejects NaN
        if !(pos.x >= 0. && pos.y >= 0. && pos.x < width && pos.y < height) {
            return None;
        }

        let (rows, cols) = self.size;
        // non-negative, so truncation is floor; clamp guards float rounding at the far edge
        let row = ((pos.y / self.cell_size) as Coord).min(rows - 1);
        let col = ((pos.x / self.cell_size) as Coord).min(cols - 1);
        Some((row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(size: Coord2, surface: (f64, f64)) -> Geometry {
        Geometry::new(size, surface).unwrap()
    }

    #[test]
    fn cell_size_fits_the_tighter_axis() {
        let geo = geometry((2, 4), (400., 400.));

        assert_eq!(geo.cell_size(), 100.);
        assert_eq!(geo.extent(), (400., 200.));
        assert_eq!(
            geo.rect((1, 3)),
            CellRect {
                x: 300.,
                y: 100.,
                width: 100.,
                height: 100.
            }
        );
    }

    #[test]
    fn positions_inside_map_to_floor_of_cell_size() {
        let geo = geometry((3, 5), (150., 90.));
        let size = geo.cell_size();
        assert_eq!(size, 30.);

        let mut y = 0.;
        while y < 90. {
            let mut x = 0.;
            while x < 150. {
                let expected = ((y / size) as Coord, (x / size) as Coord);
                assert_eq!(geo.cell_at(PixelPos::new(x, y)), Some(expected), "at ({x}, {y})");
                x += 7.5;
            }
            y += 7.5;
        }

        assert_eq!(geo.cell_at(PixelPos::new(29.999, 0.)), Some((0, 0)));
        assert_eq!(geo.cell_at(PixelPos::new(30., 59.9)), Some((1, 1)));
    }

    #[test]
    fn positions_outside_have_no_cell() {
        let geo = geometry((3, 5), (150., 90.));

        for (x, y) in [
            (-1., 0.),
            (0., -1.),
            (-0.5, -0.5),
            (150., 0.),
            (0., 90.),
            (150., 90.),
            (1000., 10.),
            (f64::NAN, 10.),
        ] {
            assert_eq!(geo.cell_at(PixelPos::new(x, y)), None, "at ({x}, {y})");
        }
        assert_eq!(geo.cell_at(PixelPos::OFF_BOARD), None);
    }

    #[test]
    fn spare_surface_outside_the_board_is_off_board() {
        // 2 rows in a tall surface leaves the bottom uncovered
        let geo = geometry((2, 2), (100., 300.));

        assert_eq!(geo.cell_at(PixelPos::new(10., 99.)), Some((1, 0)));
        assert_eq!(geo.cell_at(PixelPos::new(10., 100.)), None);
        assert_eq!(geo.cell_at(PixelPos::new(10., 250.)), None);
    }

    #[test]
    fn rejects_empty_boards_and_surfaces() {
        assert!(matches!(
            Geometry::new((0, 3), (10., 10.)),
            Err(ViewError::InvalidDimensions)
        ));
        assert!(matches!(
            Geometry::new((3, 0), (10., 10.)),
            Err(ViewError::InvalidDimensions)
        ));
        assert!(matches!(
            Geometry::new((3, 3), (0., 10.)),
            Err(ViewError::InvalidSurface { .. })
        ));
        assert!(matches!(
            Geometry::new((3, 3), (f64::NAN, f64::NAN)),
            Err(ViewError::InvalidSurface { .. })
        ));
    }
}
