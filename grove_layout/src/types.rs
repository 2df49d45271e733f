// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the layout: parameters, colors, theme, and dirty state.

use kurbo::Point;

use crate::error::{Param, ParamError};

/// Geometry parameters shared by the bounds pass and the placement pass.
///
/// All values are in surface units. The root marker is centered on
/// [`center`](Self::center); every other position is derived from it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutParams {
    /// Center of the root node marker.
    pub center: Point,
    /// Diameter of every node marker.
    pub diameter: f64,
    /// Vertical distance between a parent's center and its children's centers.
    pub level_height: f64,
    /// Minimum horizontal gap reserved between two sibling subtree boxes.
    pub child_separation: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            center: Point::new(300.0, 30.0),
            diameter: 30.0,
            level_height: 50.0,
            child_separation: 10.0,
        }
    }
}

impl LayoutParams {
    /// Check that every field is usable for layout.
    ///
    /// Coordinates must be finite, the diameter strictly positive, and the
    /// spacings non-negative.
    pub fn validate(&self) -> Result<(), ParamError> {
        check_finite(Param::CenterX, self.center.x)?;
        check_finite(Param::CenterY, self.center.y)?;
        check_positive(Param::Diameter, self.diameter)?;
        check_non_negative(Param::LevelHeight, self.level_height)?;
        check_non_negative(Param::ChildSeparation, self.child_separation)?;
        Ok(())
    }

    /// Horizontal offset of a lone child from its parent.
    ///
    /// Also the slack a single-child node adds to its child's width.
    #[inline]
    pub fn single_child_offset(&self) -> f64 {
        (self.child_separation + self.diameter) / 2.0
    }

    /// Half the node diameter.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }
}

pub(crate) fn check_finite(param: Param, value: f64) -> Result<f64, ParamError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParamError::NonFinite { param, value })
    }
}

pub(crate) fn check_non_negative(param: Param, value: f64) -> Result<f64, ParamError> {
    check_finite(param, value)?;
    if value < 0.0 {
        return Err(ParamError::Negative { param, value });
    }
    Ok(value)
}

pub(crate) fn check_positive(param: Param, value: f64) -> Result<f64, ParamError> {
    check_finite(param, value)?;
    if value <= 0.0 {
        return Err(ParamError::NotPositive { param, value });
    }
    Ok(value)
}

/// An 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha; `255` is opaque.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Create a color from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

/// Outline color and width.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stroke {
    /// Stroke color.
    pub color: Rgba8,
    /// Stroke width in surface units.
    pub width: f64,
}

impl Stroke {
    /// Create a stroke.
    pub const fn new(color: Rgba8, width: f64) -> Self {
        Self { color, width }
    }
}

/// Colors and stroke widths applied to every emitted primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Theme {
    /// Fill of the node marker.
    pub node_fill: Rgba8,
    /// Outline of the node marker.
    pub node_stroke: Stroke,
    /// Color of the value label.
    pub label: Rgba8,
    /// Parent to child connector.
    pub edge: Stroke,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            node_fill: Rgba8::rgb(0xad, 0xd8, 0xe6),
            node_stroke: Stroke::new(Rgba8::BLACK, 1.0),
            label: Rgba8::BLACK,
            edge: Stroke::new(Rgba8::BLACK, 1.0),
        }
    }
}

bitflags::bitflags! {
    /// What changed since the last render.
    ///
    /// Setters only record a bit here; [`Tree::render_if_dirty`](crate::Tree::render_if_dirty)
    /// consults it so a batch of changes costs one redraw.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Dirty: u8 {
        /// Nodes were added or removed.
        const STRUCTURE = 0b0000_0001;
        /// Layout parameters changed.
        const PARAMS    = 0b0000_0010;
        /// Theme changed.
        const THEME     = 0b0000_0100;
        /// A new surface was attached.
        const SURFACE   = 0b0000_1000;
    }
}

/// Which children a node currently has.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Branches {
    /// No children.
    Leaf,
    /// Only a left child.
    LeftOnly,
    /// Only a right child.
    RightOnly,
    /// Both children.
    Both,
}
