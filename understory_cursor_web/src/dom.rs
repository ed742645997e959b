// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM access: element identity, layout queries, and style writes.

use std::cell::Cell;
use std::hash::{Hash, Hasher};

use gloo::render::{AnimationFrame, request_animation_frame};
use gloo::timers::callback::Timeout;
use js_sys::{Object, WeakMap};
use kurbo::Rect;
use understory_cursor::{CursorHost, ProxyGeometry, ShakeAnimation};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

/// An element with a stable identity for hashing.
///
/// `HtmlElement` compares by JS identity but cannot be hashed, so each element is
/// tagged with a number the first time it is seen.
#[derive(Clone, Debug)]
pub(crate) struct ElementRef {
    id: u32,
    element: HtmlElement,
}

impl ElementRef {
    pub(crate) fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl PartialEq for ElementRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ElementRef {}

impl Hash for ElementRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Identity table keyed weakly by element, so removed elements can be collected.
#[derive(Debug)]
pub(crate) struct ElementIds {
    table: WeakMap,
    next: Cell<u32>,
}

impl ElementIds {
    pub(crate) fn new() -> Self {
        Self {
            table: WeakMap::new(),
            next: Cell::new(0),
        }
    }

    pub(crate) fn identify(&self, element: HtmlElement) -> ElementRef {
        let key: &Object = element.as_ref();
        let id = match self.table.get(key).as_f64() {
            Some(id) => stored_id(id),
            None => {
                let id = self.next.get();
                self.next.set(id.wrapping_add(1));
                self.table.set(key, &JsValue::from(id));
                id
            }
        };
        ElementRef { id, element }
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Ids are written by ElementIds as u32 values."
)]
fn stored_id(value: f64) -> u32 {
    value as u32
}

/// Layout queries against the live document.
#[derive(Debug)]
pub(crate) struct DomHost {
    window: Window,
}

impl DomHost {
    pub(crate) fn new(window: Window) -> Self {
        Self { window }
    }
}

impl CursorHost<ElementRef> for DomHost {
    fn bounding_rect(&self, element: &ElementRef) -> Option<Rect> {
        if !element.element.is_connected() {
            return None;
        }
        let rect = element.element.get_bounding_client_rect();
        Some(Rect::new(rect.left(), rect.top(), rect.right(), rect.bottom()))
    }

    fn border_radius(&self, element: &ElementRef) -> Option<String> {
        self.window
            .get_computed_style(&element.element)
            .ok()
            .flatten()?
            .get_property_value("border-radius")
            .ok()
    }
}

/// All elements under `document` matching `selector`.
pub(crate) fn select_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        log::debug!("invalid selector {selector:?}");
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Nearest ancestor-or-self of `element` matching `selector`.
pub(crate) fn closest(element: &Element, selector: &str) -> Option<HtmlElement> {
    element
        .closest(selector)
        .ok()
        .flatten()
        .and_then(|found| found.dyn_into::<HtmlElement>().ok())
}

/// Write proxy geometry as inline style.
pub(crate) fn apply_geometry(proxy: &HtmlElement, geometry: &ProxyGeometry) {
    let style = proxy.style();
    let _ = style.set_property("transform", &geometry.transform_css());
    let _ = style.set_property("width", &geometry.width_css());
    let _ = style.set_property("height", &geometry.height_css());
    let _ = style.set_property("border-radius", geometry.radius.as_css());
}

/// Write geometry with the proxy's transition disabled, restoring it on the next frame.
///
/// The returned frame must be kept alive until it fires.
pub(crate) fn apply_geometry_instantly(
    proxy: &HtmlElement,
    geometry: &ProxyGeometry,
) -> AnimationFrame {
    let _ = proxy.style().set_property("transition", "none");
    apply_geometry(proxy, geometry);
    let proxy = proxy.clone();
    request_animation_frame(move |_| {
        let _ = proxy.style().remove_property("transition");
    })
}

/// Play `animation` on the text-bearing descendants of `element`.
///
/// With `clear`, the inline animation is removed once it has finished.
pub(crate) fn shake(
    element: &HtmlElement,
    text_selector: &str,
    animation: &ShakeAnimation,
    clear: bool,
) {
    let Ok(nodes) = element.query_selector_all(text_selector) else {
        return;
    };
    let texts: Vec<HtmlElement> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect();
    for text in &texts {
        let _ = text.style().set_property("animation", &animation.css);
    }
    if clear && !texts.is_empty() {
        Timeout::new(animation.duration_ms, move || {
            for text in &texts {
                let _ = text.style().remove_property("animation");
            }
        })
        .forget();
    }
}

/// Hide the native cursor over `element`, returning its previous inline `cursor`.
pub(crate) fn hide_native_cursor(element: &HtmlElement) -> String {
    let style = element.style();
    let previous = style.get_property_value("cursor").unwrap_or_default();
    let _ = style.set_property("cursor", "none");
    previous
}

/// Put back an inline `cursor` saved by [`hide_native_cursor`].
pub(crate) fn restore_native_cursor(element: &HtmlElement, previous: &str) {
    let style = element.style();
    let _ = if previous.is_empty() {
        style.remove_property("cursor").map(drop)
    } else {
        style.set_property("cursor", previous)
    };
}

/// Inline properties the cursor writes on its proxy.
const PROXY_PROPERTIES: [&str; 5] = [
    "transform",
    "width",
    "height",
    "border-radius",
    "transition",
];

/// Strip everything the cursor wrote on a page-supplied proxy.
pub(crate) fn clear_proxy(proxy: &HtmlElement) {
    proxy.set_class_name("");
    let style = proxy.style();
    for property in PROXY_PROPERTIES {
        let _ = style.remove_property(property);
    }
}
