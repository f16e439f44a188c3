use crate::input;
use tactics_core::{ClientPoint, PitchRect, PointerTarget};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{}", element_id);
    }
}

/// Re-read on every event; the pitch resizes with the window.
#[inline]
pub fn pitch_rect(pitch: &web::Element) -> Option<PitchRect> {
    let r = pitch.get_bounding_client_rect();
    PitchRect::new(r.left(), r.top(), r.width(), r.height())
}

#[inline]
pub fn client_point(ev: &web::MouseEvent) -> ClientPoint {
    ClientPoint::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// Nearest ancestor of the event target (inclusive) matching `selector`.
pub fn closest_to_target(ev: &web::Event, selector: &str) -> Option<web::Element> {
    let el = ev.target()?.dyn_into::<web::Element>().ok()?;
    el.closest(selector).ok().flatten()
}

pub fn pointer_target(ev: &web::Event) -> PointerTarget {
    let tagged = closest_to_target(ev, "[data-kind]");
    let kind = tagged.as_ref().and_then(|e| e.get_attribute("data-kind"));
    let id = tagged.as_ref().and_then(|e| e.get_attribute("data-id"));
    input::pointer_target(kind.as_deref(), id.as_deref())
}

pub fn event_in_text_entry(ev: &web::Event) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| input::is_text_entry(&el.tag_name()))
        .unwrap_or(false)
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        if el.text_content().as_deref() != Some(text) {
            el.set_text_content(Some(text));
        }
    }
}

#[inline]
pub fn set_class(document: &web::Document, element_id: &str, class: &str, on: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.class_list().toggle_with_force(class, on);
    }
}

#[inline]
pub fn set_disabled(document: &web::Document, element_id: &str, disabled: bool) {
    if let Some(btn) = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    {
        btn.set_disabled(disabled);
    }
}

pub fn input_by_id(document: &web::Document, element_id: &str) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}
