// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Carousel: a looping 1D carousel over a small pool of recycled slots.
//!
//! This crate shows an arbitrarily long (optionally circular) data sequence
//! inside a fixed viewport using only `visible + 1` visual slots. A single
//! continuous scroll value is mapped to the position of every slot and the
//! data index it shows, so that slots wrap around seamlessly and the visible
//! window is always a contiguous, non-repeating run of the data.
//!
//! The core concepts are:
//!
//! - [`layout`]: pure functions mapping a step coordinate to slot offsets
//!   ([`LayoutConstants::position_for_step`]) and data indices
//!   ([`data_index_for_step`]).
//! - [`SlotCarousel`]: the pool controller. It owns the data, resizes the
//!   pool through a [`SlotHost`], and on every [`SlotCarousel::set_scroll_value`]
//!   writes positions onto its [`Slot`]s and calls an [`ApplyData`] adapter.
//! - [`CarouselConfig`]: axis, loop mode, visible item count, spacing, and the
//!   restorable scroll value.
//!
//! This crate deliberately does **not** know about widgets, clipping, or input.
//! Host frameworks are responsible for:
//!
//! - Creating and destroying the visual elements behind each [`Slot`].
//! - Clipping them to the viewport.
//! - Translating drags, wheels, buttons or animations into scroll values.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_carousel::{CarouselConfig, Slot, SlotCarousel, SlotHost};
//!
//! struct Labels {
//!     texts: Vec<String>,
//! }
//!
//! impl SlotHost for Labels {
//!     type Slot = usize;
//!
//!     fn create_slot(&mut self) -> usize {
//!         self.texts.push(String::new());
//!         self.texts.len() - 1
//!     }
//!
//!     fn destroy_slot(&mut self, _slot: usize) {
//!         self.texts.pop();
//!     }
//!
//!     fn viewport_size(&self) -> Size {
//!         Size::new(300.0, 40.0)
//!     }
//! }
//!
//! let data: Vec<u32> = (0..10).collect();
//! let config = CarouselConfig::default().with_looping(true);
//! let painter = |_index: usize, _slot: &mut Slot<usize>, _item: &u32| {};
//! let mut carousel = SlotCarousel::new(config, Labels { texts: Vec::new() }, painter, data);
//!
//! // Three items visible, four slots in the pool.
//! carousel.resize_pool(3).unwrap();
//! assert_eq!(carousel.pool_size(), 4);
//! assert_eq!(carousel.visible_items(), [0, 1, 2]);
//!
//! // Jump so item 8 sits at the leading edge; the window wraps around.
//! carousel.scroll_to_data_index(8, 0.0);
//! assert_eq!(carousel.visible_items(), [8, 9, 0]);
//! ```
//!
//! Offsets are relative to the viewport center and live in the host's
//! coordinate space (typically logical pixels). This crate is `no_std` and
//! uses `alloc`.

#![no_std]

extern crate alloc;

mod axis;
mod carousel;
mod config;
mod error;
mod host;
pub mod layout;

pub use axis::Axis;
pub use carousel::{CarouselState, Relayout, Slot, SlotCarousel};
pub use config::CarouselConfig;
pub use error::CarouselError;
pub use host::{ApplyData, SlotHost};
pub use layout::{LayoutConstants, SlotPlacement, data_index_for_step};
