// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Proxy geometry and the writes that carry it to the host.

use alloc::format;
use alloc::string::String;

use kurbo::{Point, Rect, Size};

use crate::radius::CornerRadius;

/// Position, size, and corner shape of the proxy element in viewport coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct ProxyGeometry {
    /// Box covered by the proxy.
    pub rect: Rect,
    /// Corner radius applied to the proxy.
    pub radius: CornerRadius,
}

impl ProxyGeometry {
    /// A round dot of `diameter` centered on `center`.
    pub fn dot(center: Point, diameter: f64) -> Self {
        Self {
            rect: Rect::from_center_size(center, Size::new(diameter, diameter)),
            radius: CornerRadius::ROUND,
        }
    }

    /// A box hugging `bounds`, grown by `padding` on every side.
    pub fn hugging(bounds: Rect, padding: f64, radius: CornerRadius) -> Self {
        Self {
            rect: bounds.inflate(padding, padding),
            radius,
        }
    }

    /// Center of the proxy.
    pub fn center(&self) -> Point {
        self.rect.center()
    }

    /// CSS `transform` placing the proxy's top-left corner.
    pub fn transform_css(&self) -> String {
        format!("translate3d({}px, {}px, 0)", self.rect.x0, self.rect.y0)
    }

    /// CSS `width`.
    pub fn width_css(&self) -> String {
        format!("{}px", self.rect.width())
    }

    /// CSS `height`.
    pub fn height_css(&self) -> String {
        format!("{}px", self.rect.height())
    }
}

/// How the host should animate a geometry write.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Let the proxy's stylesheet transition animate the change.
    Animated,
    /// Disable the transition for this write and restore it on the next frame,
    /// so the proxy jumps instead of sliding from its previous box.
    Suppressed,
}

/// A geometry write produced by an input event.
#[derive(Clone, Debug, PartialEq)]
pub struct GeometryWrite {
    /// Geometry to apply.
    pub geometry: ProxyGeometry,
    /// Transition policy for this write.
    pub transition: Transition,
}

impl GeometryWrite {
    pub(crate) fn animated(geometry: ProxyGeometry) -> Self {
        Self {
            geometry,
            transition: Transition::Animated,
        }
    }

    pub(crate) fn suppressed(geometry: ProxyGeometry) -> Self {
        Self {
            geometry,
            transition: Transition::Suppressed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_is_centered_on_pointer() {
        let dot = ProxyGeometry::dot(Point::new(40.0, 25.0), 12.0);
        assert_eq!(dot.rect, Rect::new(34.0, 19.0, 46.0, 31.0));
        assert_eq!(dot.center(), Point::new(40.0, 25.0));
        assert_eq!(dot.radius, CornerRadius::ROUND);
    }

    #[test]
    fn hugging_pads_symmetrically() {
        let bounds = Rect::new(10.0, 20.0, 110.0, 60.0);
        let hug = ProxyGeometry::hugging(bounds, 3.0, CornerRadius::from_static("6px"));
        assert_eq!(hug.rect.origin(), Point::new(7.0, 17.0));
        assert_eq!(hug.rect.size(), Size::new(106.0, 46.0));
    }

    #[test]
    fn css_strings() {
        let hug = ProxyGeometry::hugging(
            Rect::new(10.0, 20.0, 110.0, 60.0),
            3.0,
            CornerRadius::from_static("6px"),
        );
        assert_eq!(hug.transform_css(), "translate3d(7px, 17px, 0)");
        assert_eq!(hug.width_css(), "106px");
        assert_eq!(hug.height_css(), "46px");

        let dot = ProxyGeometry::dot(Point::new(0.5, 0.5), 8.0);
        assert_eq!(dot.transform_css(), "translate3d(-3.5px, -3.5px, 0)");
    }
}
