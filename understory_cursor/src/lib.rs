// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_cursor --heading-base-level=0

//! Understory Cursor: headless state for a synthetic mouse cursor.
//!
//! ## Overview
//!
//! A custom cursor is a single proxy element drawn in place of the system pointer.
//! It has two shapes:
//!
//! - **Idle**: a small round dot centered on the pointer. Its diameter shrinks while a
//!   button is held.
//! - **Hovering**: the proxy snap-fits the padded bounding box of the interactive
//!   element under the pointer and adopts that element's corner radius.
//!
//! This crate owns the state machine behind those shapes and derives every geometry
//! write from it. It does not touch any DOM or windowing API.
//! A host binding (for example `understory_cursor_web`) forwards input events to a
//! [`CursorTracker`], applies the returned [`GeometryWrite`]s to its proxy element, and
//! calls [`CursorTracker::frame`] once per display refresh.
//!
//! ## Writes
//!
//! Idle geometry is event driven: [`CursorTracker::on_pointer_move`],
//! [`CursorTracker::on_pointer_down`] and [`CursorTracker::on_pointer_up`] return the dot
//! directly so it stays glued to the pointer without waiting for a frame.
//! Hover geometry is polled: [`CursorTracker::frame`] re-reads the tracked element's box
//! through [`CursorHost`] every frame, so the proxy follows elements that move or
//! resize while hovered.
//!
//! Leaving an element onto empty space, or scrolling while hovering, snaps the proxy
//! back to the dot with [`Transition::Suppressed`]: the host should disable its
//! geometry transition for that one write and restore it on the next frame.
//!
//! ## Handoff
//!
//! When the pointer leaves one interactive element directly onto another, the host
//! passes the nearest interactive ancestor of the leave event's related target to
//! [`CursorTracker::on_leave`]. The tracker then moves straight from
//! `Hovering(a)` to `Hovering(b)` with no idle write in between.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_cursor::{CursorHost, CursorTracker, HoverOutcome};
//!
//! struct Boxes;
//! impl CursorHost<u32> for Boxes {
//!     fn bounding_rect(&self, element: &u32) -> Option<Rect> {
//!         let x = f64::from(*element) * 100.0;
//!         Some(Rect::new(x, 0.0, x + 80.0, 30.0))
//!     }
//!     fn border_radius(&self, _: &u32) -> Option<String> {
//!         Some("0px".into())
//!     }
//! }
//!
//! let mut cursor: CursorTracker<u32> = CursorTracker::new();
//! cursor.on_pointer_move(Point::new(10.0, 10.0));
//! cursor.on_enter(&Boxes, 1);
//!
//! // Pointer slides straight onto element 2.
//! let outcome = cursor.on_leave(&Boxes, 1, Some(2));
//! assert_eq!(outcome, HoverOutcome::HandedOff { from: 1, to: 2 });
//!
//! let hugging = cursor.frame(&Boxes).unwrap();
//! assert_eq!(hugging.rect, Rect::new(197.0, -3.0, 283.0, 33.0));
//! assert_eq!(hugging.radius.as_css(), "12px");
//! ```
//!
//! ## Listener bookkeeping
//!
//! [`HoverRegistry`] maps element identity to whatever handle releases that element's
//! enter/leave listeners. Re-syncing it after each document mutation attaches new
//! elements exactly once and drops the handles of elements that are gone.
//!
//! ## Classes
//!
//! [`CursorClasses`] is the pure derivation of the proxy's style tags from
//! (hovering, pressed, visible). Stylesheet rules keyed by those tags are owned by the
//! host page.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod classes;
mod config;
mod geometry;
mod platform;
mod radius;
mod registry;
mod tracker;

pub use classes::{ClassNames, CursorClasses};
pub use config::{CursorConfig, ShakeAnimation};
pub use geometry::{GeometryWrite, ProxyGeometry, Transition};
pub use platform::InputCapabilities;
pub use radius::CornerRadius;
pub use registry::{HoverRegistry, SyncReport};
pub use tracker::{CursorHost, CursorTracker, HoverOutcome, Interaction};
