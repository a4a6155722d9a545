use sweepview_core::{BoardView, MouseButtons, PixelPos, PointerInput};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent};

use crate::error::WebError;
use crate::settings::Settings;
use crate::surface::{find_canvas, CanvasSurface, SpriteImage};

/// Event position relative to the canvas' top-left corner.
fn pointer_input(canvas: &HtmlCanvasElement, event: &MouseEvent) -> PointerInput {
    let rect = canvas.get_bounding_client_rect();
    PointerInput::new(
        PixelPos::new(
            f64::from(event.client_x()) - rect.left(),
            f64::from(event.client_y()) - rect.top(),
        ),
        MouseButtons::from_bits_truncate(event.buttons()),
    )
}

/// Minesweeper board drawn on the configured canvas.
///
/// The page forwards its canvas mouse events here and relays the result of
/// `handleUp` to the game engine, then feeds the engine's answer back through
/// `setBoardState`.
#[wasm_bindgen]
pub struct Board {
    canvas: HtmlCanvasElement,
    view: BoardView<SpriteImage>,
}

impl Board {
    fn on_canvas(
        rows: u16,
        cols: u16,
        canvas: HtmlCanvasElement,
        sprite_root: &str,
    ) -> Result<Self, WebError> {
        let mut surface = CanvasSurface::new(&canvas, sprite_root)?;
        let view = BoardView::new((rows, cols), &mut surface)?;
        Ok(Self { canvas, view })
    }
}

#[wasm_bindgen]
impl Board {
    #[wasm_bindgen(constructor)]
    pub fn new(rows: u16, cols: u16) -> Result<Board, JsError> {
        let settings = Settings::current();
        let canvas = find_canvas(&settings.canvas_id)?;
        let board = Self::on_canvas(rows, cols, canvas, &settings.sprite_root)?;
        log::info!("board {}x{} on #{}", rows, cols, settings.canvas_id);
        Ok(board)
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u16 {
        self.view.size().0
    }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u16 {
        self.view.size().1
    }

    /// Game status of the last applied state, one of `Initial`, `Running`,
    /// `Won` or `Lost`.
    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        self.view.status().as_str().to_string()
    }

    #[wasm_bindgen(getter, js_name = bombsLeft)]
    pub fn bombs_left(&self) -> Option<i32> {
        self.view.mines_left()
    }

    #[wasm_bindgen(js_name = handleDown)]
    pub fn handle_down(&mut self, event: &MouseEvent) {
        self.view.on_pointer_down(pointer_input(&self.canvas, event));
    }

    /// Returns `{coordinatesY, coordinatesX, button}` for the engine.
    #[wasm_bindgen(js_name = handleUp)]
    pub fn handle_up(&mut self, event: &MouseEvent) -> Result<JsValue, JsError> {
        let request = self.view.on_pointer_up(pointer_input(&self.canvas, event));
        let json = serde_json::to_string(&request)?;
        Ok(js_sys::JSON::parse(&json).map_err(WebError::from)?)
    }

    #[wasm_bindgen(js_name = handleMove)]
    pub fn handle_move(&mut self, event: &MouseEvent) {
        self.view.on_pointer_move(pointer_input(&self.canvas, event));
    }

    /// Applies the engine's JSON state; returns how many cells were redrawn.
    #[wasm_bindgen(js_name = setBoardState)]
    pub fn set_board_state(&mut self, state: &str) -> Result<u32, JsError> {
        match self.view.apply_authoritative_state(state) {
            Ok(changed) => Ok(changed as u32),
            Err(err) => {
                log::error!("rejected board state: {}", err);
                Err(err.into())
            }
        }
    }
}
