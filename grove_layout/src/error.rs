// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parameter validation errors.
//!
//! Layout and insertion are total; only the numeric inputs a host feeds in can be rejected.

use core::fmt;

/// Names a layout parameter in a [`ParamError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Param {
    /// Horizontal coordinate of the root center.
    CenterX,
    /// Vertical coordinate of the root center.
    CenterY,
    /// Node marker diameter.
    Diameter,
    /// Vertical spacing between levels.
    LevelHeight,
    /// Horizontal gap between sibling subtrees.
    ChildSeparation,
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CenterX => "center x",
            Self::CenterY => "center y",
            Self::Diameter => "diameter",
            Self::LevelHeight => "level height",
            Self::ChildSeparation => "child separation",
        })
    }
}

/// A layout parameter was rejected. The tree is left unchanged.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ParamError {
    /// NaN or infinite.
    #[error("{param} must be finite, got {value}")]
    NonFinite {
        /// Offending parameter.
        param: Param,
        /// Rejected value.
        value: f64,
    },
    /// Spacing below zero.
    #[error("{param} must not be negative, got {value}")]
    Negative {
        /// Offending parameter.
        param: Param,
        /// Rejected value.
        value: f64,
    },
    /// Zero or negative where a strictly positive size is required.
    #[error("{param} must be greater than zero, got {value}")]
    NotPositive {
        /// Offending parameter.
        param: Param,
        /// Rejected value.
        value: f64,
    },
}

impl ParamError {
    /// The parameter that was rejected.
    pub fn param(&self) -> Param {
        match *self {
            Self::NonFinite { param, .. }
            | Self::Negative { param, .. }
            | Self::NotPositive { param, .. } => param,
        }
    }
}
