// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure index/position mapping for a recycled slot pool.
//!
//! Everything here is a stateless function of a continuous *step* coordinate
//! (normalized scroll value × data length) and a handful of layout constants.
//! For an integral step `s`, the slot whose phase `(s + i) mod pool` is `φ`
//! sits at `start - φ / pool * diff` and shows data index
//! `(s + pool - 1 - φ) mod len`, so the slot at the leading edge (largest
//! phase) shows `s` and the window reads as a contiguous, ascending run.

use kurbo::Vec2;

use crate::Axis;

/// Steps closer than this to an integer are snapped to it, so scroll values
/// computed from an index land on exact bindings despite float noise.
const STEP_SNAP_EPSILON: f64 = 1e-9;

/// Derived constants for laying out a pool along one axis.
///
/// Offsets are relative to the viewport center; the leading edge of the
/// window is at `-(visible_slots * stride) / 2`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutConstants {
    /// Extent of one item: viewport extent divided by the visible slot count.
    pub item_extent: f64,
    /// Distance between neighboring slots, `item_extent + spacing`.
    pub stride: f64,
    /// Offset of a slot at phase zero, `stride * pool_size / 2`.
    pub start: f64,
    /// Distance covered by one full lap of the pool, `stride * pool_size`.
    pub diff: f64,
}

impl LayoutConstants {
    /// Computes layout constants for a pool of `pool_size` slots showing
    /// `visible_slots` items inside `viewport_extent`.
    #[must_use]
    pub fn new(viewport_extent: f64, visible_slots: usize, pool_size: usize, spacing: f64) -> Self {
        debug_assert!(
            viewport_extent.is_finite() && spacing.is_finite(),
            "carousel extents must be finite; got viewport {viewport_extent:?}, spacing {spacing:?}"
        );
        let item_extent = if visible_slots == 0 {
            0.0
        } else {
            viewport_extent.max(0.0) / visible_slots as f64
        };
        let stride = item_extent + spacing;
        let pool = pool_size as f64;
        Self {
            item_extent,
            stride,
            start: stride * (pool / 2.0),
            diff: stride * pool,
        }
    }

    /// Returns the offset of a slot at `step` in a pool of `pool_size` slots.
    ///
    /// Periodic in `step` with period `pool_size`, continuous everywhere
    /// except the wrap, and defined for negative steps.
    #[must_use]
    pub fn position_for_step(&self, step: f64, pool_size: usize, axis: Axis) -> Vec2 {
        debug_assert!(pool_size > 0, "pool must hold at least one slot");
        let pool = pool_size as f64;
        let normalized_distance = rem_euclid(step, pool) / pool;
        axis.along(self.start - normalized_distance * self.diff)
    }

    /// Computes both position and data index for `slot` at `step`.
    #[must_use]
    pub fn place_slot(
        &self,
        axis: Axis,
        step: f64,
        slot: usize,
        pool_size: usize,
        data_len: usize,
    ) -> SlotPlacement {
        SlotPlacement {
            position: self.position_for_step(step + slot as f64, pool_size, axis),
            data_index: data_index_for_step(step, slot, pool_size, data_len),
        }
    }
}

/// Where a slot goes and what it shows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotPlacement {
    /// Offset from the viewport center along the scroll axis.
    pub position: Vec2,
    /// Index into the data sequence.
    pub data_index: usize,
}

/// Returns which data index the slot at `slot_offset` shows at `step`.
///
/// The slot keeps its binding until `step + slot_offset` crosses a multiple of
/// `pool_size`, then jumps ahead by `pool_size` items (modulo `data_len`).
/// At `step = 0` the pool shows `pool_size` consecutive indices in reverse slot
/// order.
///
/// # Panics
///
/// Panics if `data_len` is zero; callers must guard against empty data.
#[must_use]
pub fn data_index_for_step(step: f64, slot_offset: usize, pool_size: usize, data_len: usize) -> usize {
    assert!(
        data_len > 0,
        "data_index_for_step requires a non-empty data sequence"
    );
    debug_assert!(
        slot_offset < pool_size,
        "slot offset {slot_offset} out of range for pool of {pool_size}"
    );
    let len = data_len as i64;
    let pool = pool_size as i64;
    let offset = slot_offset as i64;
    let lap = floor_to_i64((step + slot_offset as f64) / pool_size as f64).rem_euclid(len);
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Euclidean remainder is in 0..data_len, which came from a usize"
    )]
    {
        (lap * pool + (pool - 1 - offset)).rem_euclid(len) as usize
    }
}

/// Returns how many slots a pool needs to show `visible_slots` items of a
/// sequence of `data_len`, including one overscan slot.
///
/// Never exceeds `data_len + 1`.
#[must_use]
pub fn pool_size_for(visible_slots: usize, data_len: usize) -> usize {
    visible_slots
        .saturating_add(1)
        .clamp(1, data_len.saturating_add(1))
}

/// Maps a raw scroll value into `[0, 1)`.
///
/// Without looping, the value is first rescaled by `(len - visible) / len` so
/// that `1.0` aligns the last item with the trailing edge of the window.
/// Negative values wrap around instead of leaving a negative remainder.
#[must_use]
pub fn normalize_scroll(value: f64, looping: bool, data_len: usize, visible_slots: usize) -> f64 {
    let effective = if looping || data_len == 0 {
        value
    } else {
        let len = data_len as f64;
        value * (len - visible_slots as f64) / len
    };
    libm::fmod(1.0 + libm::fmod(effective, 1.0), 1.0)
}

/// Converts a raw scroll value into a step in `[0, data_len]`.
#[must_use]
pub fn step_for_scroll(value: f64, looping: bool, data_len: usize, visible_slots: usize) -> f64 {
    let step = normalize_scroll(value, looping, data_len, visible_slots) * data_len as f64;
    let nearest = libm::round(step);
    if libm::fabs(step - nearest) < STEP_SNAP_EPSILON {
        nearest
    } else {
        step
    }
}

/// Returns the scroll value that puts `index` at `pivot` within the window.
///
/// `pivot = 0.0` aligns the item with the leading edge, `1.0` with the
/// trailing edge. `index` is reduced modulo `data_len`.
#[must_use]
pub fn scroll_value_for_index(
    index: usize,
    pivot: f64,
    data_len: usize,
    visible_slots: usize,
) -> f64 {
    debug_assert!(data_len > 0, "cannot scroll to an index of empty data");
    let index = (index % data_len) as f64;
    1.0 / data_len as f64 * (index - pivot * visible_slots.saturating_sub(1) as f64)
}

fn rem_euclid(lhs: f64, rhs: f64) -> f64 {
    let r = libm::fmod(lhs, rhs);
    if r < 0.0 { r + rhs } else { r }
}

fn floor_to_i64(value: f64) -> i64 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Lap counters are small; out-of-range values saturate"
    )]
    {
        libm::floor(value) as i64
    }
}
