// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The cursor state machine.
//!
//! ## States
//!
//! - `Idle`: the proxy is a dot on the pointer.
//! - `Hovering(e, r)`: the proxy hugs element `e` with corner radius `r`.
//!
//! ## Transitions
//!
//! | From           | Event                            | To             | Write                  |
//! |----------------|----------------------------------|----------------|------------------------|
//! | any            | enter `e`                        | `Hovering(e)`  | next frame             |
//! | `Hovering(a)`  | leave, related interactive `b`   | `Hovering(b)`  | next frame             |
//! | any            | leave, no related interactive    | `Idle`         | dot, suppressed        |
//! | `Hovering`     | scroll                           | `Idle`         | dot, suppressed        |
//! | `Hovering(e)`  | `e` released from the document   | `Idle`         | dot, suppressed        |
//! | `Idle`         | move / down / up                 | `Idle`         | dot, animated          |

use alloc::string::String;

use kurbo::{Point, Rect};

use crate::classes::CursorClasses;
use crate::config::CursorConfig;
use crate::geometry::{GeometryWrite, ProxyGeometry};
use crate::radius::CornerRadius;

/// Layout queries the tracker needs from its host.
pub trait CursorHost<K> {
    /// Current viewport-space bounding box of `element`, or `None` if it has no layout.
    fn bounding_rect(&self, element: &K) -> Option<Rect>;

    /// Computed CSS `border-radius` of `element`.
    fn border_radius(&self, element: &K) -> Option<String>;
}

/// What the proxy is currently doing.
#[derive(Clone, Debug, PartialEq)]
pub enum Interaction<K> {
    /// Following the pointer as a dot.
    Idle,
    /// Hugging an interactive element.
    Hovering {
        /// The tracked element.
        target: K,
        /// Corner radius resolved when tracking began.
        radius: CornerRadius,
    },
}

/// Result of an enter or leave event.
#[derive(Clone, Debug, PartialEq)]
pub enum HoverOutcome<K> {
    /// Tracking began on `target`; its text should play the enter shake.
    Entered {
        /// Newly tracked element.
        target: K,
    },
    /// Tracking moved directly from one element to the next without going idle.
    HandedOff {
        /// Element the pointer left.
        from: K,
        /// Element now tracked.
        to: K,
    },
    /// Tracking ended; `from` should play the leave shake and `write` must be applied.
    Detached {
        /// Element the pointer left.
        from: K,
        /// Transition-suppressed idle dot at the last pointer position.
        write: GeometryWrite,
    },
}

/// Synthetic cursor state for one proxy element.
#[derive(Clone, Debug)]
pub struct CursorTracker<K> {
    config: CursorConfig,
    pointer: Point,
    interaction: Interaction<K>,
    pressed: bool,
    visible: bool,
}

impl<K: Clone + PartialEq> CursorTracker<K> {
    /// Create a tracker with the default configuration.
    pub fn new() -> Self {
        Self::with_config(CursorConfig::default())
    }

    /// Create a tracker with a custom configuration.
    ///
    /// The proxy starts idle, unpressed, and hidden at the viewport origin.
    pub fn with_config(config: CursorConfig) -> Self {
        Self {
            config,
            pointer: Point::ZERO,
            interaction: Interaction::Idle,
            pressed: false,
            visible: false,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &CursorConfig {
        &self.config
    }

    /// Last recorded pointer position.
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Current interaction state.
    pub fn interaction(&self) -> &Interaction<K> {
        &self.interaction
    }

    /// The tracked element, if hovering.
    pub fn hovered(&self) -> Option<&K> {
        match &self.interaction {
            Interaction::Idle => None,
            Interaction::Hovering { target, .. } => Some(target),
        }
    }

    /// True while hugging an element.
    pub fn is_hovering(&self) -> bool {
        matches!(self.interaction, Interaction::Hovering { .. })
    }

    /// True between a pointer down and the next pointer up.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// True while the pointer is inside the viewport.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Style tags for the current state.
    pub fn classes(&self) -> CursorClasses {
        CursorClasses::derive(self.is_hovering(), self.pressed, self.visible)
    }

    /// The idle dot at the last pointer position.
    pub fn idle_geometry(&self) -> ProxyGeometry {
        ProxyGeometry::dot(self.pointer, self.config.dot_diameter(self.pressed))
    }

    /// Per-frame geometry.
    ///
    /// Returns the padded box of the tracked element, re-read from the host so the proxy
    /// follows elements that move or resize. Returns `None` while idle (idle geometry is
    /// written by the input handlers) or when the tracked element has no layout.
    pub fn frame(&self, host: &impl CursorHost<K>) -> Option<ProxyGeometry> {
        let Interaction::Hovering { target, radius } = &self.interaction else {
            return None;
        };
        let bounds = host.bounding_rect(target)?;
        Some(ProxyGeometry::hugging(
            bounds,
            self.config.padding,
            radius.clone(),
        ))
    }

    /// Record a pointer move.
    pub fn on_pointer_move(&mut self, position: Point) -> Option<GeometryWrite> {
        self.pointer = position;
        self.visible = true;
        self.idle_write()
    }

    /// Record a button press.
    pub fn on_pointer_down(&mut self) -> Option<GeometryWrite> {
        self.pressed = true;
        self.idle_write()
    }

    /// Record a button release.
    pub fn on_pointer_up(&mut self) -> Option<GeometryWrite> {
        self.pressed = false;
        self.idle_write()
    }

    /// The pointer left the document.
    pub fn on_document_leave(&mut self) {
        self.visible = false;
    }

    /// The pointer re-entered the document.
    pub fn on_document_enter(&mut self) {
        self.visible = true;
    }

    /// The page scrolled.
    ///
    /// The hovered element slides away under a scroll, so hovering ends immediately.
    pub fn on_scroll(&mut self) -> Option<GeometryWrite> {
        self.detach().map(|_| self.snap_write())
    }

    /// The pointer entered an interactive element.
    pub fn on_enter(&mut self, host: &impl CursorHost<K>, target: K) -> HoverOutcome<K> {
        self.track(host, target.clone());
        HoverOutcome::Entered { target }
    }

    /// The pointer left an interactive element.
    ///
    /// `related` is the nearest interactive ancestor-or-self of the element the pointer
    /// moved onto, if any. When present, tracking hands off to it without an idle step.
    pub fn on_leave(
        &mut self,
        host: &impl CursorHost<K>,
        left: K,
        related: Option<K>,
    ) -> HoverOutcome<K> {
        if let Some(next) = related {
            self.track(host, next.clone());
            return HoverOutcome::HandedOff {
                from: left,
                to: next,
            };
        }
        self.detach();
        HoverOutcome::Detached {
            from: left,
            write: self.snap_write(),
        }
    }

    /// An element stopped being interactive (for example it left the document).
    ///
    /// Returns the snap write if it was the tracked element.
    pub fn release(&mut self, element: &K) -> Option<GeometryWrite> {
        if self.hovered() != Some(element) {
            return None;
        }
        self.detach();
        Some(self.snap_write())
    }

    /// Return to the initial state, keeping the configuration.
    pub fn reset(&mut self) {
        self.pointer = Point::ZERO;
        self.interaction = Interaction::Idle;
        self.pressed = false;
        self.visible = false;
    }

    fn track(&mut self, host: &impl CursorHost<K>, target: K) {
        let computed = host.border_radius(&target);
        let radius = CornerRadius::resolve(computed.as_deref(), &self.config.fallback_radius);
        self.interaction = Interaction::Hovering { target, radius };
    }

    /// Go idle, returning the element that was tracked.
    fn detach(&mut self) -> Option<K> {
        match core::mem::replace(&mut self.interaction, Interaction::Idle) {
            Interaction::Idle => None,
            Interaction::Hovering { target, .. } => Some(target),
        }
    }

    fn idle_write(&self) -> Option<GeometryWrite> {
        (!self.is_hovering()).then(|| GeometryWrite::animated(self.idle_geometry()))
    }

    fn snap_write(&self) -> GeometryWrite {
        GeometryWrite::suppressed(self.idle_geometry())
    }
}

impl<K: Clone + PartialEq> Default for CursorTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}
