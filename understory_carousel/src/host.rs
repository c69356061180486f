// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capabilities the carousel borrows from its host framework.
//!
//! The carousel never talks to a concrete UI toolkit. Instead the host
//! supplies a [`SlotHost`] that owns the lifecycle of visual elements and an
//! [`ApplyData`] adapter that paints a data item onto one of them.

use kurbo::Size;

use crate::Slot;

/// Creates and destroys visual slots under the viewport container.
pub trait SlotHost {
    /// Host-side handle for one visual element (a widget id, a node, ...).
    type Slot;

    /// Returns `false` when no slot can be constructed, for example because
    /// the template/prefab the host clones from is missing.
    ///
    /// Resizes are refused while this returns `false`.
    fn has_template(&self) -> bool {
        true
    }

    /// Instantiates a new slot parented under the viewport.
    fn create_slot(&mut self) -> Self::Slot;

    /// Tears down a slot the carousel no longer needs.
    fn destroy_slot(&mut self, slot: Self::Slot);

    /// Current size of the clipping viewport.
    ///
    /// Queried whenever layout constants are recomputed; the axis picks width
    /// or height.
    fn viewport_size(&self) -> Size;
}

/// Paints a data item onto a slot.
///
/// Called synchronously once per slot on every scroll update and resize,
/// after the slot's position and data index have been written.
///
/// Closures of the shape `FnMut(usize, &mut Slot<S>, &T)` implement this trait.
pub trait ApplyData<S, T> {
    /// Applies `item` to the slot at pool position `index`.
    fn apply_data(&mut self, index: usize, slot: &mut Slot<S>, item: &T);
}

impl<S, T, F> ApplyData<S, T> for F
where
    F: FnMut(usize, &mut Slot<S>, &T),
{
    fn apply_data(&mut self, index: usize, slot: &mut Slot<S>, item: &T) {
        self(index, slot, item);
    }
}
