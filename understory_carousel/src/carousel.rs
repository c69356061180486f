// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pool controller: owns the recycled slots and drives them from a scroll value.

use alloc::vec::Vec;

use kurbo::Vec2;

use crate::layout::{
    LayoutConstants, data_index_for_step, pool_size_for, scroll_value_for_index, step_for_scroll,
};
use crate::{ApplyData, Axis, CarouselConfig, CarouselError, SlotHost};

/// One recycled visual slot.
///
/// Identity is the slot's index in the pool; its position and bound data
/// index are rewritten on every scroll update.
#[derive(Clone, Debug)]
pub struct Slot<S> {
    /// The host's handle for the visual element.
    pub handle: S,
    position: Vec2,
    data_index: usize,
}

impl<S> Slot<S> {
    fn new(handle: S) -> Self {
        Self {
            handle,
            position: Vec2::ZERO,
            data_index: 0,
        }
    }

    /// Offset from the viewport center along the scroll axis.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Index of the data item this slot currently shows.
    #[must_use]
    pub const fn data_index(&self) -> usize {
        self.data_index
    }
}

/// Lifecycle of a [`SlotCarousel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CarouselState {
    /// No pool has been built yet.
    #[default]
    Uninitialized,
    /// The pool is built and bound to data.
    Ready,
}

/// Whether a resize that keeps the pool size should still rebuild layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Relayout {
    /// Rebuild only when the pool size changes; otherwise just replay the
    /// current scroll value.
    #[default]
    IfResized,
    /// Always recompute layout constants from the host viewport and rebind.
    Force,
}

/// A looping (or clamped) 1D carousel over a fixed pool of recycled slots.
///
/// The carousel owns the data sequence, a [`SlotHost`] that creates and
/// destroys the visual slots, and an [`ApplyData`] adapter that paints data
/// onto them. It does not know about input: hosts translate drags, wheels or
/// animations into [`SlotCarousel::set_scroll_value`] calls.
#[derive(Debug)]
pub struct SlotCarousel<T, H: SlotHost, A> {
    config: CarouselConfig,
    host: H,
    adapter: A,
    data: Vec<T>,
    slots: Vec<Slot<H::Slot>>,
    layout: LayoutConstants,
    state: CarouselState,
}

impl<T, H, A> SlotCarousel<T, H, A>
where
    H: SlotHost,
    A: ApplyData<H::Slot, T>,
{
    /// Creates an uninitialized carousel.
    ///
    /// No slots exist until the first successful [`resize_pool`](Self::resize_pool).
    #[must_use]
    pub fn new(config: CarouselConfig, host: H, adapter: A, data: Vec<T>) -> Self {
        Self {
            config,
            host,
            adapter,
            data,
            slots: Vec::new(),
            layout: LayoutConstants::default(),
            state: CarouselState::Uninitialized,
        }
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> CarouselState {
        self.state
    }

    /// Returns `true` once a pool has been built.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state == CarouselState::Ready
    }

    /// Returns the current configuration.
    #[must_use]
    pub const fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Returns the last scroll value passed in, before any rescaling.
    #[must_use]
    pub const fn scroll_value(&self) -> f64 {
        self.config.scroll_value
    }

    /// Returns the effective number of visible items.
    #[must_use]
    pub const fn visible_slots(&self) -> usize {
        self.config.visible_slots
    }

    /// Returns the number of slots in the pool.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.slots.len()
    }

    /// Returns the layout constants from the last rebuild.
    #[must_use]
    pub const fn layout(&self) -> &LayoutConstants {
        &self.layout
    }

    /// Returns the data sequence.
    #[must_use]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Returns the host.
    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host mutably, for example to resize its viewport before a
    /// forced relayout.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns the data adapter.
    #[must_use]
    pub const fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Returns the data adapter mutably.
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// Returns the live slots in pool order.
    #[must_use]
    pub fn slots(&self) -> &[Slot<H::Slot>] {
        &self.slots
    }

    /// Returns the slot at pool position `index`.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&Slot<H::Slot>> {
        self.slots.get(index)
    }

    /// Returns the data item shown by the slot at pool position `index`.
    #[must_use]
    pub fn bound_item(&self, index: usize) -> Option<&T> {
        let slot = self.slots.get(index)?;
        self.data.get(slot.data_index)
    }

    /// Returns pool indices sorted along the axis, leading edge first.
    #[must_use]
    pub fn display_order(&self) -> Vec<usize> {
        let axis = self.config.axis;
        let mut order: Vec<usize> = (0..self.slots.len()).collect();
        order.sort_by(|&a, &b| {
            axis.coordinate(self.slots[a].position)
                .total_cmp(&axis.coordinate(self.slots[b].position))
        });
        order
    }

    /// Returns the pool index of the slot closest to the leading edge.
    #[must_use]
    pub fn leading_slot(&self) -> Option<usize> {
        let axis = self.config.axis;
        (0..self.slots.len()).min_by(|&a, &b| {
            axis.coordinate(self.slots[a].position)
                .total_cmp(&axis.coordinate(self.slots[b].position))
        })
    }

    /// Returns the data indices of the visible window, leading edge first.
    ///
    /// The overscan slot is excluded. Between integral scroll positions the
    /// partially visible trailing item is therefore not listed.
    #[must_use]
    pub fn visible_items(&self) -> Vec<usize> {
        self.display_order()
            .into_iter()
            .take(self.config.visible_slots)
            .map(|i| self.slots[i].data_index)
            .collect()
    }

    /// Moves the window to `value` and rebinds every slot.
    ///
    /// With looping, the fractional part of `value` selects the position in
    /// the sequence. Without it, `0.0` shows the first item at the leading edge
    /// and `1.0` shows the last item at the trailing edge.
    ///
    /// The value is always stored. Before the pool is built, or while the data
    /// is empty, nothing else happens and the value is replayed on the next
    /// resize.
    pub fn set_scroll_value(&mut self, value: f64) {
        debug_assert!(value.is_finite(), "scroll value must be finite; got {value:?}");
        self.config.scroll_value = value;
        if self.state != CarouselState::Ready || self.data.is_empty() {
            return;
        }

        let len = self.data.len();
        let pool = self.slots.len();
        let step = step_for_scroll(value, self.config.looping, len, self.config.visible_slots);
        for (i, slot) in self.slots.iter_mut().enumerate() {
            let placement = self
                .layout
                .place_slot(self.config.axis, step, i, pool, len);
            slot.position = placement.position;
            slot.data_index = placement.data_index;
            self.adapter
                .apply_data(i, slot, &self.data[placement.data_index]);
        }
    }

    /// Replays the current scroll value, repainting every slot.
    pub fn refresh(&mut self) {
        self.set_scroll_value(self.config.scroll_value);
    }

    /// Adjusts the scroll value by `delta`.
    pub fn scroll_by(&mut self, delta: f64) {
        self.set_scroll_value(self.config.scroll_value + delta);
    }

    /// Adjusts the scroll value by `items` whole or fractional items.
    pub fn scroll_by_items(&mut self, items: f64) {
        if self.data.is_empty() {
            return;
        }
        self.scroll_by(items / self.data.len() as f64);
    }

    /// Scrolls so that data item `index` sits at `pivot` within the window.
    ///
    /// `pivot = 0.0` aligns the item with the leading edge, `1.0` with the
    /// trailing edge. Out-of-range indices wrap around.
    pub fn scroll_to_data_index(&mut self, index: usize, pivot: f64) {
        if self.data.is_empty() {
            tracing::warn!(index, "cannot scroll to an index of empty data");
            return;
        }
        let value = scroll_value_for_index(index, pivot, self.data.len(), self.config.visible_slots);
        self.set_scroll_value(value);
    }

    /// Replaces the data sequence.
    ///
    /// When the length changes the pool is resized for the configured visible
    /// count. Otherwise the pool is kept and its bindings stay stale until the
    /// next scroll update or [`refresh`](Self::refresh).
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::EmptyData`] for an empty sequence, which is
    /// stored anyway; the pool is left as it was and scrolling is ignored
    /// until non-empty data arrives. If the resize for a new length is
    /// refused for any other reason, the previous data is kept.
    pub fn set_data(&mut self, data: Vec<T>) -> Result<(), CarouselError> {
        if self.data.len() == data.len() {
            self.data = data;
            return Ok(());
        }
        let guard = if data.is_empty() {
            Ok(())
        } else {
            self.check_resize(self.config.visible_slots, data.len())
        };
        if let Err(err) = guard {
            tracing::warn!(len = data.len(), error = %err, "refused data swap");
            return Err(err);
        }
        self.data = data;
        self.resize_pool(self.config.visible_slots)
    }

    /// Sets the scroll axis, rebuilding the layout if the pool exists.
    ///
    /// The item extent is re-measured along the new axis.
    ///
    /// # Errors
    ///
    /// Fails if the rebuild is refused; the previous axis is restored.
    pub fn set_axis(&mut self, axis: Axis) -> Result<(), CarouselError> {
        let previous = core::mem::replace(&mut self.config.axis, axis);
        self.relayout().inspect_err(|_| self.config.axis = previous)
    }

    /// Enables or disables wrap-around and rebinds the slots.
    pub fn set_looping(&mut self, looping: bool) {
        self.config.looping = looping;
        self.refresh();
    }

    /// Sets the gap between items, rebuilding the layout if the pool exists.
    ///
    /// # Errors
    ///
    /// Fails if the rebuild is refused; the previous spacing is restored.
    pub fn set_spacing(&mut self, spacing: f64) -> Result<(), CarouselError> {
        let previous = core::mem::replace(&mut self.config.spacing, spacing);
        self.relayout().inspect_err(|_| self.config.spacing = previous)
    }

    fn relayout(&mut self) -> Result<(), CarouselError> {
        if self.is_ready() {
            self.resize_pool_with(self.config.visible_slots, Relayout::Force)
        } else {
            Ok(())
        }
    }

    /// Resizes the pool to show `requested` items at once.
    ///
    /// Equivalent to [`resize_pool_with`](Self::resize_pool_with) with
    /// [`Relayout::IfResized`].
    pub fn resize_pool(&mut self, requested: usize) -> Result<(), CarouselError> {
        self.resize_pool_with(requested, Relayout::IfResized)
    }

    /// Resizes the pool to show `requested` items at once.
    ///
    /// The pool holds `requested + 1` slots, capped at one more than the data
    /// length; the stored visible count is derived from that, so asking for
    /// more items than exist quietly shows all of them. Excess slots are
    /// destroyed from the end of the pool and missing ones created through
    /// the host. Layout constants are recomputed from the host viewport, every
    /// slot is bound for the unscrolled layout, and the stored scroll value is
    /// replayed.
    ///
    /// If the pool already has the right size and `relayout` is
    /// [`Relayout::IfResized`], layout is kept and only the scroll value is
    /// replayed.
    ///
    /// # Errors
    ///
    /// Refuses zero visible slots, a host without a slot template, and empty
    /// data. A refused resize changes nothing.
    pub fn resize_pool_with(
        &mut self,
        requested: usize,
        relayout: Relayout,
    ) -> Result<(), CarouselError> {
        if let Err(err) = self.check_resize(requested, self.data.len()) {
            tracing::warn!(requested, error = %err, "refused carousel resize");
            return Err(err);
        }

        let len = self.data.len();
        let pool = pool_size_for(requested, len);
        if relayout == Relayout::IfResized && self.is_ready() && self.slots.len() == pool {
            self.refresh();
            return Ok(());
        }

        for slot in self.slots.drain(pool.min(self.slots.len())..) {
            self.host.destroy_slot(slot.handle);
        }
        while self.slots.len() < pool {
            let handle = self.host.create_slot();
            self.slots.push(Slot::new(handle));
        }

        self.config.visible_slots = pool.saturating_sub(1);
        let extent = self.config.axis.extent(self.host.viewport_size());
        self.layout = LayoutConstants::new(
            extent,
            self.config.visible_slots,
            pool,
            self.config.spacing,
        );

        for (i, slot) in self.slots.iter_mut().enumerate() {
            slot.position = self
                .layout
                .position_for_step(i as f64, pool, self.config.axis);
            let data_index = data_index_for_step(0.0, i, pool, len);
            slot.data_index = data_index;
            self.adapter.apply_data(i, slot, &self.data[data_index]);
        }

        self.state = CarouselState::Ready;
        self.refresh();
        tracing::debug!(
            pool,
            visible = self.config.visible_slots,
            item_extent = self.layout.item_extent,
            "rebuilt carousel pool"
        );
        Ok(())
    }

    /// Destroys every slot and returns to [`CarouselState::Uninitialized`].
    ///
    /// The scroll value and data are kept.
    pub fn clear(&mut self) {
        for slot in self.slots.drain(..) {
            self.host.destroy_slot(slot.handle);
        }
        self.layout = LayoutConstants::default();
        self.state = CarouselState::Uninitialized;
    }

    /// Consumes the carousel, returning the host, adapter and data.
    ///
    /// Live slots are not destroyed; call [`clear`](Self::clear) first if the
    /// host should tear them down.
    pub fn into_parts(self) -> (H, A, Vec<T>) {
        (self.host, self.adapter, self.data)
    }

    fn check_resize(&self, requested: usize, data_len: usize) -> Result<(), CarouselError> {
        if requested == 0 {
            return Err(CarouselError::ZeroVisibleSlots);
        }
        if !self.host.has_template() {
            return Err(CarouselError::MissingTemplate);
        }
        if data_len == 0 {
            return Err(CarouselError::EmptyData);
        }
        Ok(())
    }
}
