use crate::constants::{
    HIDDEN_CLASS, HIDDEN_DISPLAY, POPUP_DESCRIPTION_ID, POPUP_ID, POPUP_TITLE_ID,
};
use globe_core::Popup;
use wasm_bindgen::JsCast;
use web_sys as web;

fn popup_element(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(POPUP_ID)?
        .dyn_into::<web::HtmlElement>()
        .ok()
}

#[inline]
pub fn show(document: &web::Document, title: &str, description: &str) {
    if let Some(el) = document.get_element_by_id(POPUP_TITLE_ID) {
        el.set_text_content(Some(title));
    }
    if let Some(el) = document.get_element_by_id(POPUP_DESCRIPTION_ID) {
        el.set_text_content(Some(description));
    }
    if let Some(el) = popup_element(document) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        // only `display` is ours; other inline styles belong to the page
        _ = el.style().remove_property("display");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = popup_element(document) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        _ = el.style().set_property("display", HIDDEN_DISPLAY);
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    match popup_element(document) {
        Some(el) => {
            el.class_list().contains(HIDDEN_CLASS)
                || el
                    .style()
                    .get_property_value("display")
                    .map(|d| d == HIDDEN_DISPLAY)
                    .unwrap_or(false)
        }
        None => false,
    }
}

/// Bring the pop-up DOM in line with `popup`.
pub fn apply(document: &web::Document, popup: &Popup) {
    match popup {
        Popup::Shown { name, description } => show(document, name, description),
        Popup::Hidden if !is_hidden(document) => hide(document),
        Popup::Hidden => {}
    }
}
