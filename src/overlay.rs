use web_sys as web;

#[inline]
pub fn show(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn set_visible(document: &web::Document, element_id: &str, visible: bool) {
    if visible {
        show(document, element_id);
    } else {
        hide(document, element_id);
    }
}
