use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::prelude::*;

pub use board::Board;

mod board;
mod error;
mod settings;
mod surface;

use settings::{Args, Settings};

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Right clicks are board input, never a context menu.
fn suppress_context_menu() {
    EventListener::new_with_options(
        &gloo::utils::document(),
        "contextmenu",
        EventListenerOptions::enable_prevent_default(),
        |event| event.prevent_default(),
    )
    .forget();
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::window;

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let settings = match Args::from_hash(&location_hash) {
        Ok(args) => {
            if let Some(log_level) = args.verbose.log_level() {
                if let Err(err) = console_log::init_with_level(log_level) {
                    gloo::console::error!(format!("Error initializing logger: {}", err));
                }
            }
            Settings::from(args)
        }
        Err(err) => {
            gloo::console::warn!(format!("Ignoring location hash {:?}: {}", location_hash, err));
            Settings::default()
        }
    };
    log::debug!("settings: {:?}", settings);
    settings.install();

    suppress_context_menu();
    log::debug!("App started");
}
