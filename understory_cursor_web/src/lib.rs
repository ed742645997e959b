// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_cursor_web --heading-base-level=0

//! Understory Cursor Web: mounts an [`understory_cursor`] tracker onto a browser page.
//!
//! The binding hides the native cursor, keeps one proxy element in sync with a
//! [`CursorTracker`](understory_cursor::CursorTracker), and forwards the page's pointer,
//! scroll, and mutation signals to it:
//!
//! - `mousemove` on the window, `mousedown`/`mouseup`/`mouseenter`/`mouseleave` on the
//!   document, and a passive `scroll` listener on the window.
//! - `mouseenter`/`mouseleave` on every element matching
//!   [`CursorConfig::interactive_selector`], re-scanned whenever the body's subtree changes.
//! - One render pass per animation frame while hovering.
//!
//! From JavaScript:
//!
//! ```js
//! import init, { CustomCursor } from "./understory_cursor_web.js";
//! await init();
//! const cursor = new CustomCursor();
//! cursor.mount("custom-cursor");
//! // later
//! cursor.unmount();
//! ```
//!
//! On touch-capable devices `mount` does nothing and reports `false`.
//!
//! All DOM code is compiled only for `wasm32` targets.

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod mount;

pub use understory_cursor::CursorConfig;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Entry point, called when the WASM module loads.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A host page may have installed a logger already.
    let _ = console_log::init_with_level(log::Level::Info);
}

/// A synthetic cursor that can be mounted on and removed from the current page.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
#[derive(Debug)]
pub struct CustomCursor {
    config: CursorConfig,
    mounted: Option<mount::Mounted>,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl CustomCursor {
    /// Create an unmounted cursor with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_config(CursorConfig::default())
    }

    /// Mount on the current page using the element with id `proxy_id` as the proxy,
    /// creating it if it does not exist.
    ///
    /// Returns `false` without touching the page on touch-capable devices.
    /// Mounting an already mounted cursor remounts it.
    pub fn mount(&mut self, proxy_id: &str) -> Result<bool, JsValue> {
        self.mounted = None;
        let window = web_sys::window().ok_or("No window")?;
        if !input_capabilities(&window).supports_custom_cursor() {
            log::info!("touch input detected, custom cursor disabled");
            return Ok(false);
        }
        self.mounted = Some(mount::Mounted::install(
            window,
            proxy_id,
            self.config.clone(),
        )?);
        Ok(true)
    }

    /// Remove every listener and restore the native cursor.
    pub fn unmount(&mut self) {
        self.mounted = None;
    }

    /// Whether the cursor is currently mounted.
    #[wasm_bindgen(js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.mounted.is_some()
    }
}

#[cfg(target_arch = "wasm32")]
impl CustomCursor {
    /// Create an unmounted cursor with a custom configuration.
    pub fn with_config(config: CursorConfig) -> Self {
        Self {
            config,
            mounted: None,
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for CustomCursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
fn input_capabilities(window: &web_sys::Window) -> understory_cursor::InputCapabilities {
    let touch = js_sys::Reflect::has(window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
    understory_cursor::InputCapabilities { touch }
}
