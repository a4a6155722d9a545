use ndarray::Array2;
use sweepview_protocol::{GameStatus, MoveRequest, Snapshot};

use crate::*;

/// Visual mirror of the engine's board plus the pointer state machine that
/// drives the provisional "pressed" cells.
///
/// A cell only ever goes `Unknown <-> Pressed` through pointer events; any
/// other symbol comes from an applied [`Snapshot`].
#[derive(Debug)]
pub struct BoardView<D> {
    geometry: Geometry,
    board: Array2<CellSymbol>,
    drawables: Array2<D>,
    pointer: PointerState,
    status: GameStatus,
    mines_left: Option<i32>,
}

impl<D: Drawable> BoardView<D> {
    /// Lays out a `rows` x `cols` board of unknown cells on `surface`.
    pub fn new<S>(size: Coord2, surface: &mut S) -> core::result::Result<Self, S::Error>
    where
        S: Surface<Drawable = D>,
    {
        let geometry = Geometry::new(size, surface.size())?;
        let board = Array2::from_elem(size.to_nd_index(), CellSymbol::Unknown);

        let (rows, cols) = size;
        let mut drawables = alloc::vec::Vec::with_capacity(mult(rows, cols));
        for row in 0..rows {
            for col in 0..cols {
                let coords = (row, col);
                drawables.push(surface.create_drawable(
                    coords,
                    geometry.rect(coords),
                    CellSymbol::Unknown,
                )?);
            }
        }
        let drawables = Array2::from_shape_vec(size.to_nd_index(), drawables)
            .map_err(|_| ViewError::InvalidDimensions)?;

        log::debug!(
            "board {}x{} laid out with cell size {}",
            rows,
            cols,
            geometry.cell_size()
        );

        Ok(Self {
            geometry,
            board,
            drawables,
            pointer: Default::default(),
            status: Default::default(),
            mines_left: None,
        })
    }

    /// `(rows, cols)`
    pub fn size(&self) -> Coord2 {
        self.geometry.size()
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn symbol_at(&self, coords: Coord2) -> CellSymbol {
        self.board[coords.to_nd_index()]
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Status from the last applied snapshot.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Remaining mines from the last running snapshot, if any arrived yet.
    pub fn mines_left(&self) -> Option<i32> {
        self.mines_left
    }

    pub fn cell_at(&self, pos: PixelPos) -> Option<Coord2> {
        self.geometry.cell_at(pos)
    }

    pub fn on_pointer_down(&mut self, input: PointerInput) {
        if let Some(button) = Button::from_buttons(input.buttons) {
            self.pointer.button = Some(button);
        }
        self.pointer.pressed = true;

        let prev = self.cell_at(self.pointer.pos);
        self.release_cell(prev);

        self.pointer.pos = input.pos;
        let next = self.cell_at(input.pos);
        self.press_cell(next);

        log::trace!("pointer down at {:?} ({:?})", next, input.buttons);
    }

    /// Ends the press and reports the click to hand to the engine.
    ///
    /// The pressed cell goes back to unknown right away even when released
    /// over itself; its real symbol arrives with the engine's next snapshot.
    pub fn on_pointer_up(&mut self, input: PointerInput) -> MoveRequest {
        self.pointer.pressed = false;

        let prev = self.cell_at(self.pointer.pos);
        self.release_cell(prev);

        self.pointer.pos = input.pos;
        let button = self.pointer.move_button();
        self.pointer.button = None;

        let request = match self.cell_at(input.pos) {
            Some(coords) => MoveRequest::at(coords, button),
            None => MoveRequest::off_board(button),
        };
        log::debug!("move request: {:?}", request);
        request
    }

    pub fn on_pointer_move(&mut self, input: PointerInput) {
        let prev_pos = core::mem::replace(&mut self.pointer.pos, input.pos);
        if !self.pointer.pressed {
            return;
        }

        let prev = self.cell_at(prev_pos);
        let next = self.cell_at(input.pos);
        if prev == next {
            return;
        }

        log::trace!("pressed cell moved {:?} -> {:?}", prev, next);
        self.release_cell(prev);
        self.press_cell(next);
    }

    /// Parses a raw engine snapshot and redraws the cells that differ from
    /// what is shown. Returns how many cells changed.
    ///
    /// Nothing is touched when the snapshot is rejected.
    pub fn apply_authoritative_state(&mut self, raw: &str) -> Result<usize> {
        let snapshot = Snapshot::parse(raw)?;
        self.apply_snapshot(&snapshot)
    }

    pub fn apply_snapshot(&mut self, snapshot: &Snapshot) -> Result<usize> {
        let expected = self.board.len();
        if snapshot.board.len() != expected {
            return Err(ViewError::BoardShape {
                expected,
                actual: snapshot.board.len(),
            });
        }

        self.status = snapshot.state;
        if let Some(mines_left) = snapshot.mines_left() {
            self.mines_left = Some(mines_left);
            log::debug!("mines left: {}", mines_left);
        }

        let mut changed = 0;
        for ((index, shown), &incoming) in self.board.indexed_iter_mut().zip(&snapshot.board) {
            if *shown != incoming {
                *shown = incoming;
                self.drawables[index].set_sprite(incoming);
                changed += 1;
            }
        }

        log::debug!("applied {:?} snapshot, {} cells changed", self.status, changed);
        Ok(changed)
    }

    fn set_symbol(&mut self, coords: Coord2, symbol: CellSymbol) {
        let index = coords.to_nd_index();
        self.board[index] = symbol;
        self.drawables[index].set_sprite(symbol);
    }

    fn press_cell(&mut self, coords: Option<Coord2>) {
        if let Some(coords) = coords {
            if self.symbol_at(coords).is_unknown() {
                self.set_symbol(coords, CellSymbol::Pressed);
            }
        }
    }

    fn release_cell(&mut self, coords: Option<Coord2>) {
        if let Some(coords) = coords {
            if self.symbol_at(coords).is_pressed() {
                self.set_symbol(coords, CellSymbol::Unknown);
            }
        }
    }
}
