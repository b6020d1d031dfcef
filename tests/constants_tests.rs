// Host-side tests for the DOM contract constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_distinct() {
    let ids = [
        CUBE_CONTAINER_ID,
        GLOBE_CONTAINER_ID,
        POPUP_ID,
        POPUP_TITLE_ID,
        POPUP_DESCRIPTION_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(!a.starts_with('#'), "ids are passed to getElementById");
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn popup_hidden_state_uses_class_and_display_only() {
    assert_eq!(HIDDEN_CLASS, "hidden");
    // a bare property value, never a whole `style` attribute
    assert_eq!(HIDDEN_DISPLAY, "none");
    assert!(!HIDDEN_DISPLAY.contains(':'));
    assert!(!HIDDEN_DISPLAY.contains(';'));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn cube_view_height_is_fixed() {
    assert_eq!(CUBE_VIEW_HEIGHT, 500);
}

#[test]
fn webgpu_missing_message_is_user_facing() {
    assert!(WEBGPU_MISSING.contains("WebGPU"));
    assert!(WEBGPU_MISSING.ends_with('.'));
}
