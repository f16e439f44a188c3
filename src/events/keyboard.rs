use super::Wiring;
use crate::dom;
use crate::input::{command_for_key, KeyCommand};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &Wiring) {
    if dom::event_in_text_entry(ev) && ev.key() != "Escape" {
        return;
    }
    let Some(cmd) = command_for_key(&ev.key(), ev.ctrl_key() || ev.meta_key()) else {
        return;
    };
    log::info!("[keys] {:?}", cmd);
    w.update(|b| match cmd {
        KeyCommand::Undo => b.undo(),
        KeyCommand::ToggleHighlight => b.toggle_highlight(),
        KeyCommand::ToggleDrawZone => b.toggle_draw_zone(),
        KeyCommand::Cancel if b.dialog().is_open() => b.close_dialog(),
        KeyCommand::Cancel => b.cancel(),
    });
    ev.prevent_default();
}

pub fn wire_global_keydown(w: &Wiring) {
    let w2 = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &w2);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
