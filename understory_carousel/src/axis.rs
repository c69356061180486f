// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

/// The single axis a carousel scrolls along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Slots are laid out along X.
    #[default]
    Horizontal,
    /// Slots are laid out along Y.
    Vertical,
}

impl Axis {
    /// Places a 1D `offset` on this axis, leaving the cross axis at zero.
    #[must_use]
    pub const fn along(self, offset: f64) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::new(offset, 0.0),
            Self::Vertical => Vec2::new(0.0, offset),
        }
    }

    /// Returns the component of `v` on this axis.
    #[must_use]
    pub const fn coordinate(self, v: Vec2) -> f64 {
        match self {
            Self::Horizontal => v.x,
            Self::Vertical => v.y,
        }
    }

    /// Returns the extent of `size` along this axis (width or height).
    #[must_use]
    pub const fn extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }
}
