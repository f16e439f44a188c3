use super::Wiring;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_input_handlers(w: &Wiring) {
    wire_pointerdown(w);
    wire_pointermove(w);
    wire_pointerup(w, "pointerup");
    wire_pointerup(w, "pointerleave");
    wire_click(w);
}

fn wire_pointerdown(w: &Wiring) {
    let w2 = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let target = dom::pointer_target(&ev);
        log::debug!("[mouse] down on {:?}", target);
        w2.update(|b| b.pointer_down(&target));
        // keeps text from being selected while dragging
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .pitch
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &Wiring) {
    let w2 = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let rect = dom::pitch_rect(&w2.pitch);
        let point = dom::client_point(&ev);
        w2.update(|b| b.pointer_move(point, rect));
    }) as Box<dyn FnMut(_)>);
    _ = w
        .pitch
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Leaving the pitch ends a drag the same way releasing does.
fn wire_pointerup(w: &Wiring, event: &str) {
    let w2 = w.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w2.update(|b| b.pointer_up());
    }) as Box<dyn FnMut(_)>);
    _ = w
        .pitch
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_click(w: &Wiring) {
    let w2 = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let target = dom::pointer_target(&ev);
        let rect = dom::pitch_rect(&w2.pitch);
        let point = dom::client_point(&ev);
        w2.update(|b| b.click(&target, point, rect));
    }) as Box<dyn FnMut(_)>);
    _ = w
        .pitch
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
