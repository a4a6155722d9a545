use gloo::events::EventListener;
use std::rc::Rc;
use sweepview_core::{sprite_file, CellRect, CellSymbol, Coord2, Drawable, Surface};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::error::*;

fn sprite_url(sprite_root: &str, symbol: CellSymbol) -> String {
    let root = sprite_root.trim_end_matches('/');
    if root.is_empty() {
        sprite_file(symbol).to_string()
    } else {
        format!("{}/{}", root, sprite_file(symbol))
    }
}

fn draw_sprite(context: &CanvasRenderingContext2d, image: &HtmlImageElement, rect: CellRect) {
    let CellRect {
        x,
        y,
        width,
        height,
    } = rect;
    if let Err(err) =
        context.draw_image_with_html_image_element_and_dw_and_dh(image, x, y, width, height)
    {
        log::error!("failed to draw sprite {:?}: {:?}", image.src(), err);
    }
}

pub(crate) fn find_canvas(id: &str) -> Result<HtmlCanvasElement> {
    gloo::utils::document()
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
        .ok_or_else(|| WebError::MissingCanvas(id.to_string()))
}

/// 2d context of the board's canvas.
pub(crate) struct CanvasSurface {
    context: CanvasRenderingContext2d,
    size: (f64, f64),
    sprite_root: Rc<str>,
}

impl CanvasSurface {
    pub(crate) fn new(canvas: &HtmlCanvasElement, sprite_root: &str) -> Result<Self> {
        let context = canvas
            .get_context("2d")?
            .ok_or(WebError::MissingContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| WebError::MissingContext)?;

        Ok(Self {
            context,
            size: (canvas.width().into(), canvas.height().into()),
            sprite_root: sprite_root.into(),
        })
    }
}

impl Surface for CanvasSurface {
    type Drawable = SpriteImage;
    type Error = WebError;

    fn size(&self) -> (f64, f64) {
        self.size
    }

    fn create_drawable(
        &mut self,
        coords: Coord2,
        rect: CellRect,
        symbol: CellSymbol,
    ) -> Result<SpriteImage> {
        let image = HtmlImageElement::new()?;

        // every completed load paints whatever source is current at that time
        let on_load = {
            let context = self.context.clone();
            let target = image.clone();
            EventListener::new(&image, "load", move |_| {
                draw_sprite(&context, &target, rect);
            })
        };

        let mut drawable = SpriteImage {
            image,
            sprite_root: self.sprite_root.clone(),
            _on_load: on_load,
        };
        drawable.set_sprite(symbol);
        log::trace!("{:?} drawable at {:?}", coords, rect);
        Ok(drawable)
    }
}

/// Image element painting one cell; owns its `load` listener.
pub struct SpriteImage {
    image: HtmlImageElement,
    sprite_root: Rc<str>,
    _on_load: EventListener,
}

impl Drawable for SpriteImage {
    fn set_sprite(&mut self, symbol: CellSymbol) {
        self.image.set_src(&sprite_url(&self.sprite_root, symbol));
    }
}

impl std::fmt::Debug for SpriteImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpriteImage")
            .field("src", &self.image.src())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sprite_urls_join_root_and_file() {
        assert_eq!(sprite_url("sprites", CellSymbol::Unknown), "sprites/blank.png");
        assert_eq!(sprite_url("sprites/", CellSymbol::Flag), "sprites/flag.png");
        assert_eq!(sprite_url("", CellSymbol::cleared(4).unwrap()), "4.png");
    }
}
