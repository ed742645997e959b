// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser tests for mounting, hovering, and unmounting the cursor.

#![cfg(target_arch = "wasm32")]

use js_sys::{Promise, Reflect};
use understory_cursor_web::CustomCursor;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, HtmlElement, MouseEvent};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn body() -> HtmlElement {
    document().body().unwrap()
}

fn append(tag: &str) -> HtmlElement {
    let element = document()
        .create_element(tag)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    body().append_child(&element).unwrap();
    element
}

fn inline(element: &HtmlElement, property: &str) -> String {
    element.style().get_property_value(property).unwrap()
}

fn dispatch(target: &web_sys::EventTarget, event_type: &str) {
    let event = MouseEvent::new(event_type).unwrap();
    target.dispatch_event(&event).unwrap();
}

/// Resolves on the next animation frame, after callbacks queued before it.
async fn next_frame() {
    let promise = Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .request_animation_frame(&resolve)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn mount_hides_cursors_and_unmount_restores_them() {
    let button = append("button");
    let link = append("a");
    link.style().set_property("cursor", "pointer").unwrap();

    let mut cursor = CustomCursor::new();
    assert_eq!(cursor.mount("cursor-created-proxy"), Ok(true));
    assert!(cursor.is_active());
    assert_eq!(inline(&body(), "cursor"), "none");
    assert_eq!(inline(&button, "cursor"), "none");
    assert_eq!(inline(&link, "cursor"), "none");
    assert!(document().get_element_by_id("cursor-created-proxy").is_some());

    cursor.unmount();
    assert!(!cursor.is_active());
    assert_eq!(inline(&body(), "cursor"), "auto");
    assert_eq!(inline(&button, "cursor"), "");
    assert_eq!(inline(&link, "cursor"), "pointer");
    assert!(document().get_element_by_id("cursor-created-proxy").is_none());

    button.remove();
    link.remove();
}

#[wasm_bindgen_test]
async fn inserted_and_removed_elements_follow_the_document() {
    let mut cursor = CustomCursor::new();
    assert_eq!(cursor.mount("cursor-mutation-proxy"), Ok(true));

    let button = append("button");
    next_frame().await;
    assert_eq!(inline(&button, "cursor"), "none");

    button.remove();
    next_frame().await;
    assert_eq!(inline(&button, "cursor"), "");

    cursor.unmount();
}

#[wasm_bindgen_test]
async fn detach_disables_transition_for_one_frame() {
    let proxy = append("div");
    proxy.set_id("cursor-transition-proxy");
    let button = append("button");

    let mut cursor = CustomCursor::new();
    assert_eq!(cursor.mount("cursor-transition-proxy"), Ok(true));

    dispatch(&web_sys::window().unwrap(), "mousemove");
    assert!(proxy.class_name().contains("custom-cursor-visible"));
    assert_ne!(inline(&proxy, "transform"), "");

    dispatch(&button, "mouseenter");
    assert!(proxy.class_name().contains("custom-cursor-hovering"));

    dispatch(&button, "mouseleave");
    assert!(proxy.class_name().contains("custom-cursor-default"));
    assert_eq!(inline(&proxy, "transition"), "none");

    next_frame().await;
    assert_eq!(inline(&proxy, "transition"), "");

    cursor.unmount();
    proxy.remove();
    button.remove();
}

#[wasm_bindgen_test]
fn unmount_clears_a_page_supplied_proxy() {
    let proxy = append("div");
    proxy.set_id("cursor-supplied-proxy");
    let button = append("button");

    let mut cursor = CustomCursor::new();
    assert_eq!(cursor.mount("cursor-supplied-proxy"), Ok(true));
    dispatch(&web_sys::window().unwrap(), "mousemove");
    dispatch(&button, "mouseenter");
    dispatch(&button, "mouseleave");
    assert_eq!(inline(&proxy, "transition"), "none");

    cursor.unmount();
    assert!(proxy.is_connected());
    assert_eq!(proxy.class_name(), "");
    for property in ["transform", "width", "height", "border-radius", "transition"] {
        assert_eq!(inline(&proxy, property), "", "{property} left on the proxy");
    }

    // Listeners are gone: input no longer reaches the proxy.
    dispatch(&web_sys::window().unwrap(), "mousemove");
    dispatch(&button, "mouseenter");
    assert_eq!(proxy.class_name(), "");
    assert_eq!(inline(&proxy, "transform"), "");

    proxy.remove();
    button.remove();
}

#[wasm_bindgen_test]
fn touch_devices_get_no_cursor() {
    let window = web_sys::window().unwrap();
    let key = JsValue::from_str("ontouchstart");
    Reflect::set(&window, &key, &JsValue::NULL).unwrap();

    let mut cursor = CustomCursor::new();
    let mounted = cursor.mount("cursor-touch-proxy");
    Reflect::delete_property(&window, &key).unwrap();

    assert_eq!(mounted, Ok(false));
    assert!(!cursor.is_active());
    assert!(document().get_element_by_id("cursor-touch-proxy").is_none());
    assert_ne!(inline(&body(), "cursor"), "none");
}
