#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use tactics_core::Board;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod input;
mod markup;
mod overlay;
mod render;
mod storage;

use constants::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(LOG_LEVEL).ok();
    log::info!("tactics-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn element(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let pitch: web::HtmlElement = element(&document, PITCH_ID)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let pitch_items = element(&document, PITCH_ITEMS_ID)?;
    let zone_preview = element(&document, ZONE_PREVIEW_ID)?;
    let saved_list = element(&document, SAVED_LIST_ID)?;

    let board = Board::with_store(storage::LocalStorage::open(&window));
    log::info!(
        "[board] {} markers, {} saved layout(s)",
        board.scene().markers.len(),
        board.saved().len()
    );

    let wiring = events::Wiring {
        view: Rc::new(RefCell::new(render::View::new(
            document.clone(),
            pitch_items,
            zone_preview,
            saved_list,
        ))),
        board: Rc::new(RefCell::new(board)),
        document,
        pitch,
    };

    events::pointer::wire_input_handlers(&wiring);
    events::keyboard::wire_global_keydown(&wiring);
    events::controls::wire_controls(&wiring);

    wiring.refresh();
    Ok(())
}
