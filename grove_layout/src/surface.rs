// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing surface abstraction and a recording implementation.
//!
//! The layout never rasterizes anything. It clears a [`Surface`] and then feeds it
//! circles, lines, and labels in paint order. Hosts implement [`Surface`] over
//! whatever canvas they own; [`DisplayList`] simply records the calls.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Circle, Line, Point, Rect, Shape};

use crate::types::{Rgba8, Stroke};

/// Sink for drawing primitives.
///
/// Calls arrive in paint order: later primitives are drawn over earlier ones.
pub trait Surface {
    /// Drop every primitive drawn so far.
    fn clear(&mut self);

    /// Draw a filled and outlined circle.
    fn draw_circle(&mut self, circle: Circle, fill: Rgba8, stroke: Stroke);

    /// Draw a straight line segment.
    fn draw_line(&mut self, line: Line, stroke: Stroke);

    /// Draw `text` centered on `center`.
    fn draw_label(&mut self, center: Point, text: &str, color: Rgba8);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn draw_circle(&mut self, circle: Circle, fill: Rgba8, stroke: Stroke) {
        (**self).draw_circle(circle, fill, stroke);
    }

    fn draw_line(&mut self, line: Line, stroke: Stroke) {
        (**self).draw_line(line, stroke);
    }

    fn draw_label(&mut self, center: Point, text: &str, color: Rgba8) {
        (**self).draw_label(center, text, color);
    }
}

/// A single recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Primitive {
    /// Node marker.
    Circle {
        /// Geometry.
        circle: Circle,
        /// Interior color.
        fill: Rgba8,
        /// Outline.
        stroke: Stroke,
    },
    /// Parent to child connector.
    Line {
        /// Geometry.
        line: Line,
        /// Line style.
        stroke: Stroke,
    },
    /// Centered text.
    Label {
        /// Center of the text.
        center: Point,
        /// Text content.
        text: String,
        /// Text color.
        color: Rgba8,
    },
}

impl Primitive {
    /// Axis-aligned extent of the primitive, including half the stroke width.
    ///
    /// Labels have no measured extent and report a zero-area rect at their center.
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Circle { circle, stroke, .. } => {
                circle.bounding_box().inflate(stroke.width / 2.0, stroke.width / 2.0)
            }
            Self::Line { line, stroke } => {
                line.bounding_box().inflate(stroke.width / 2.0, stroke.width / 2.0)
            }
            Self::Label { center, .. } => Rect::from_points(*center, *center),
        }
    }
}

/// A [`Surface`] that records every call.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayList {
    primitives: Vec<Primitive>,
}

impl DisplayList {
    /// Create an empty display list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded since the last clear, in paint order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Number of recorded primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// True if nothing is recorded.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Recorded circles.
    pub fn circles(&self) -> impl Iterator<Item = &Circle> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Circle { circle, .. } => Some(circle),
            _ => None,
        })
    }

    /// Recorded lines.
    pub fn lines(&self) -> impl Iterator<Item = &Line> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Line { line, .. } => Some(line),
            _ => None,
        })
    }

    /// Recorded labels as `(center, text)`.
    pub fn labels(&self) -> impl Iterator<Item = (Point, &str)> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Label { center, text, .. } => Some((*center, text.as_str())),
            _ => None,
        })
    }

    /// Union of all primitive extents, or `None` when empty.
    pub fn bounds(&self) -> Option<Rect> {
        let mut it = self.primitives.iter().map(Primitive::bounding_box);
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }
}

impl Surface for DisplayList {
    fn clear(&mut self) {
        self.primitives.clear();
    }

    fn draw_circle(&mut self, circle: Circle, fill: Rgba8, stroke: Stroke) {
        self.primitives.push(Primitive::Circle {
            circle,
            fill,
            stroke,
        });
    }

    fn draw_line(&mut self, line: Line, stroke: Stroke) {
        self.primitives.push(Primitive::Line { line, stroke });
    }

    fn draw_label(&mut self, center: Point, text: &str, color: Rgba8) {
        self.primitives.push(Primitive::Label {
            center,
            text: text.into(),
            color,
        });
    }
}
