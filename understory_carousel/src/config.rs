// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration for a [`SlotCarousel`](crate::SlotCarousel).

use crate::Axis;

/// Layout and behavior options for a carousel.
///
/// The defaults describe a clamped, horizontal carousel showing three items
/// with no spacing, scrolled to the start.
///
/// ```rust
/// use understory_carousel::{Axis, CarouselConfig};
///
/// let config = CarouselConfig::default()
///     .with_axis(Axis::Vertical)
///     .with_looping(true)
///     .with_visible_slots(5);
/// assert_eq!(config.visible_slots, 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Scroll axis.
    pub axis: Axis,
    /// When `true`, the data sequence wraps around infinitely. When `false`,
    /// the scroll range is rescaled so that a value of `1.0` puts the last
    /// item at the trailing edge of the window.
    pub looping: bool,
    /// Number of data items meant to be visible at once.
    ///
    /// The pool holds one more slot than this as an overscan buffer. A resize
    /// may lower this when the data sequence is shorter than requested.
    pub visible_slots: usize,
    /// Gap between neighboring items, added to the item extent.
    pub spacing: f64,
    /// Initial scroll value, replayed once the pool is first built.
    pub scroll_value: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Horizontal,
            looping: false,
            visible_slots: 3,
            spacing: 0.0,
            scroll_value: 0.0,
        }
    }
}

impl CarouselConfig {
    /// Sets the scroll axis.
    #[must_use]
    pub const fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Enables or disables wrap-around.
    #[must_use]
    pub const fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Sets the number of items visible at once.
    #[must_use]
    pub const fn with_visible_slots(mut self, visible_slots: usize) -> Self {
        self.visible_slots = visible_slots;
        self
    }

    /// Sets the gap between items.
    #[must_use]
    pub const fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the initial scroll value.
    #[must_use]
    pub const fn with_scroll_value(mut self, scroll_value: f64) -> Self {
        self.scroll_value = scroll_value;
        self
    }
}
