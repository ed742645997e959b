// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style tags for the proxy element.

use alloc::borrow::Cow;
use alloc::string::String;

bitflags::bitflags! {
    /// Style tags applied to the proxy element.
    ///
    /// [`BASE`](Self::BASE) is always present. Exactly one of
    /// [`HOVERING`](Self::HOVERING) and [`DEFAULT`](Self::DEFAULT) is present, and
    /// [`CLICKING`](Self::CLICKING) only accompanies `DEFAULT`. Exactly one of
    /// [`VISIBLE`](Self::VISIBLE) and [`HIDDEN`](Self::HIDDEN) is present.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CursorClasses: u8 {
        /// Always present.
        const BASE     = 0b0000_0001;
        /// The proxy hugs an interactive element.
        const HOVERING = 0b0000_0010;
        /// The proxy is the idle dot.
        const DEFAULT  = 0b0000_0100;
        /// A button is held while idle.
        const CLICKING = 0b0000_1000;
        /// The pointer is inside the viewport.
        const VISIBLE  = 0b0001_0000;
        /// The pointer left the viewport.
        const HIDDEN   = 0b0010_0000;
    }
}

impl CursorClasses {
    /// Derive the tags for a given interaction, click, and visibility state.
    pub fn derive(hovering: bool, pressed: bool, visible: bool) -> Self {
        let mut classes = Self::BASE;
        if hovering {
            classes |= Self::HOVERING;
        } else {
            classes |= Self::DEFAULT;
            if pressed {
                classes |= Self::CLICKING;
            }
        }
        classes |= if visible { Self::VISIBLE } else { Self::HIDDEN };
        classes
    }

    /// Render the tags as a space-separated class attribute.
    pub fn to_class_string(self, names: &ClassNames) -> String {
        let ordered = [
            (Self::BASE, &names.base),
            (Self::HOVERING, &names.hovering),
            (Self::DEFAULT, &names.default),
            (Self::CLICKING, &names.clicking),
            (Self::VISIBLE, &names.visible),
            (Self::HIDDEN, &names.hidden),
        ];
        let mut out = String::new();
        for (flag, name) in ordered {
            if self.contains(flag) {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(name);
            }
        }
        out
    }
}

/// Class names emitted for each [`CursorClasses`] tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassNames {
    /// Name for [`CursorClasses::BASE`].
    pub base: Cow<'static, str>,
    /// Name for [`CursorClasses::HOVERING`].
    pub hovering: Cow<'static, str>,
    /// Name for [`CursorClasses::DEFAULT`].
    pub default: Cow<'static, str>,
    /// Name for [`CursorClasses::CLICKING`].
    pub clicking: Cow<'static, str>,
    /// Name for [`CursorClasses::VISIBLE`].
    pub visible: Cow<'static, str>,
    /// Name for [`CursorClasses::HIDDEN`].
    pub hidden: Cow<'static, str>,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            base: Cow::Borrowed("custom-cursor"),
            hovering: Cow::Borrowed("custom-cursor-hovering"),
            default: Cow::Borrowed("custom-cursor-default"),
            clicking: Cow::Borrowed("custom-cursor-clicking"),
            visible: Cow::Borrowed("custom-cursor-visible"),
            hidden: Cow::Borrowed("custom-cursor-hidden"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_of_each_exclusive_pair() {
        for bits in 0..8_u8 {
            let (hovering, pressed, visible) = (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
            let classes = CursorClasses::derive(hovering, pressed, visible);
            assert!(classes.contains(CursorClasses::BASE), "base missing");
            assert_ne!(
                classes.contains(CursorClasses::HOVERING),
                classes.contains(CursorClasses::DEFAULT),
                "hovering and default must be exclusive"
            );
            assert_ne!(
                classes.contains(CursorClasses::VISIBLE),
                classes.contains(CursorClasses::HIDDEN),
                "visible and hidden must be exclusive"
            );
            assert_eq!(
                classes.contains(CursorClasses::CLICKING),
                pressed && !hovering,
                "clicking only accompanies the idle dot"
            );
        }
    }

    #[test]
    fn class_string_order() {
        let names = ClassNames::default();
        assert_eq!(
            CursorClasses::derive(false, true, true).to_class_string(&names),
            "custom-cursor custom-cursor-default custom-cursor-clicking custom-cursor-visible"
        );
        assert_eq!(
            CursorClasses::derive(true, true, false).to_class_string(&names),
            "custom-cursor custom-cursor-hovering custom-cursor-hidden"
        );
    }
}
