// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunables for the cursor tracker and its host binding.

use alloc::borrow::Cow;

use crate::classes::ClassNames;
use crate::radius::CornerRadius;

/// A one-shot CSS animation applied to the text inside a hovered element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShakeAnimation {
    /// Value for the inline `animation` property.
    pub css: Cow<'static, str>,
    /// Length of the animation in milliseconds.
    pub duration_ms: u32,
}

/// Configuration shared by the tracker and host bindings.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorConfig {
    /// Gap between a hovered element's box and the proxy, on every side.
    pub padding: f64,
    /// Idle dot diameter.
    pub dot_size: f64,
    /// Idle dot diameter while a button is held.
    pub pressed_dot_size: f64,
    /// Radius used for elements with no visible rounding.
    pub fallback_radius: CornerRadius,
    /// Played on an element's text when the pointer enters it.
    pub enter_shake: ShakeAnimation,
    /// Played on an element's text when the pointer detaches from it, then cleared.
    pub leave_shake: ShakeAnimation,
    /// Selector matching interactive elements.
    pub interactive_selector: Cow<'static, str>,
    /// Selector matching the text-bearing descendants that shake.
    pub text_selector: Cow<'static, str>,
    /// Class names for the proxy's style tags.
    pub class_names: ClassNames,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            padding: 3.0,
            dot_size: 12.0,
            pressed_dot_size: 8.0,
            fallback_radius: CornerRadius::from_static("12px"),
            enter_shake: ShakeAnimation {
                css: Cow::Borrowed("cursorShake 0.3s ease-out"),
                duration_ms: 300,
            },
            leave_shake: ShakeAnimation {
                css: Cow::Borrowed("cursorShake 0.2s ease-out"),
                duration_ms: 200,
            },
            interactive_selector: Cow::Borrowed(
                r#"a, button, [role="button"], input[type="submit"], .cursor-hover"#,
            ),
            text_selector: Cow::Borrowed("span, p, h1, h2, h3, h4, h5, h6"),
            class_names: ClassNames::default(),
        }
    }
}

impl CursorConfig {
    /// Set the hover padding.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set the idle and pressed dot diameters.
    pub fn with_dot_sizes(mut self, dot_size: f64, pressed_dot_size: f64) -> Self {
        self.dot_size = dot_size;
        self.pressed_dot_size = pressed_dot_size;
        self
    }

    /// Set the fallback corner radius.
    pub fn with_fallback_radius(mut self, radius: CornerRadius) -> Self {
        self.fallback_radius = radius;
        self
    }

    /// Set the interactive-element selector.
    pub fn with_interactive_selector(mut self, selector: impl Into<Cow<'static, str>>) -> Self {
        self.interactive_selector = selector.into();
        self
    }

    /// Dot diameter for the given click state.
    pub fn dot_diameter(&self, pressed: bool) -> f64 {
        if pressed {
            self.pressed_dot_size
        } else {
            self.dot_size
        }
    }
}
