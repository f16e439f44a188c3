use super::Wiring;
use crate::constants::*;
use crate::dom;
use crate::input::{list_action, ListAction};
use crate::storage::LocalStorage;
use tactics_core::Board;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn wire_button<F>(w: &Wiring, element_id: &str, action: F)
where
    F: Fn(&mut Board<LocalStorage>) + 'static,
{
    let w2 = w.clone();
    dom::add_click_listener(&w.document, element_id, move || w2.update(&action));
}

pub fn wire_controls(w: &Wiring) {
    wire_button(w, BTN_HIGHLIGHT, |b| b.toggle_highlight());
    wire_button(w, BTN_DRAW_ZONE, |b| b.toggle_draw_zone());
    wire_button(w, BTN_UNDO, |b| b.undo());
    wire_button(w, BTN_RESET, |b| b.reset());
    wire_button(w, BTN_SAVE, |b| b.open_save_dialog());
    wire_button(w, BTN_LOAD, |b| b.open_load_dialog());
    wire_button(w, SAVE_CLOSE_ID, |b| b.close_dialog());
    wire_button(w, LOAD_CLOSE_ID, |b| b.close_dialog());
    wire_button(w, SAVE_SUBMIT_ID, submit_save);

    wire_save_name(w);
    wire_saved_list(w);
}

fn submit_save(b: &mut Board<LocalStorage>) {
    if !b.submit_save() {
        log::debug!("[store] save needs a name");
    }
}

fn wire_save_name(w: &Wiring) {
    let Some(input) = dom::input_by_id(&w.document, SAVE_NAME_ID) else {
        log::warn!("[dom] missing #{}", SAVE_NAME_ID);
        return;
    };

    let w2 = w.clone();
    let typed = input.clone();
    let on_input = Closure::wrap(Box::new(move |_ev: web::Event| {
        let text = typed.value();
        w2.update(|b| b.set_save_draft(&text));
    }) as Box<dyn FnMut(_)>);
    _ = input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref());
    on_input.forget();

    let w3 = w.clone();
    let on_enter = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.key() == "Enter" {
            w3.update(submit_save);
        }
    }) as Box<dyn FnMut(_)>);
    _ = input.add_event_listener_with_callback("keydown", on_enter.as_ref().unchecked_ref());
    on_enter.forget();
}

// Load/delete buttons are regenerated with the list, so listen on the list.
fn wire_saved_list(w: &Wiring) {
    let Some(list) = w.document.get_element_by_id(SAVED_LIST_ID) else {
        log::warn!("[dom] missing #{}", SAVED_LIST_ID);
        return;
    };
    let w2 = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(button) = dom::closest_to_target(&ev, "[data-action]") else {
            return;
        };
        let action = button.get_attribute("data-action");
        let index = button.get_attribute("data-index");
        match list_action(action.as_deref(), index.as_deref()) {
            Some(ListAction::Load(i)) => w2.update(|b| {
                b.load_saved(i);
            }),
            Some(ListAction::Delete(i)) => w2.update(|b| {
                b.delete_saved(i);
            }),
            None => {}
        }
    }) as Box<dyn FnMut(_)>);
    _ = list.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
