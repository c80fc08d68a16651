/// Widget controller: open/close state, submission, rendering.
pub mod controller;
/// Shadow-DOM surface construction and element helpers.
pub mod dom;
pub mod net;
pub mod storage;
pub mod style;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::controller::ChatWidget;

thread_local! {
    // The controller lives for the page lifetime; event closures reach it
    // through this slot instead of capturing it.
    static WIDGET: RefCell<Option<ChatWidget>> = const { RefCell::new(None) };
}

/// Module entry point: mounts the widget into the hosting page.
///
/// Initialization has no user-visible error path. A page where mounting
/// fails (no body, detached document) just never shows the launcher.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    match ChatWidget::mount() {
        Ok(widget) => {
            WIDGET.with(|slot| *slot.borrow_mut() = Some(widget));
            log::info!("starship chat widget mounted");
        }
        Err(message) => log::error!("failed to mount chat widget: {message}"),
    }
}

/// Number of messages rendered so far, exported for host-page diagnostics.
#[wasm_bindgen]
pub fn message_count() -> u32 {
    let mut count = 0;
    with_widget(|widget| count = widget.message_count() as u32);
    count
}

/// Runs `f` against the mounted controller, if any.
pub(crate) fn with_widget(f: impl FnOnce(&ChatWidget)) {
    WIDGET.with(|slot| {
        if let Some(widget) = slot.borrow().as_ref() {
            f(widget);
        }
    });
}
