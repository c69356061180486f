// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clamped, vertical carousel of image buttons with click handling.
//!
//! Each slot is a button showing a sprite. Clicking hit-tests the live slots
//! and reports the data item bound to the button under the pointer.
//!
//! Run:
//! - `cargo run -p understory_demos --example image_carousel`

use core::fmt;

use kurbo::{Point, Size};
use understory_carousel::{ApplyData, Axis, CarouselConfig, Slot, SlotCarousel};
use understory_demos::{ConsoleHost, Widget, init_logging, render_strip};

#[derive(Clone, Debug)]
struct ImageData {
    sprite: &'static str,
    name: &'static str,
}

impl fmt::Display for ImageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "This is example data for name {}", self.name)
    }
}

/// Paints the sprite onto the button and counts repaints.
#[derive(Debug, Default)]
struct ImageButtons {
    repaints: usize,
}

impl ApplyData<Widget, ImageData> for ImageButtons {
    fn apply_data(&mut self, _index: usize, slot: &mut Slot<Widget>, item: &ImageData) {
        slot.handle.text.clear();
        slot.handle.text.push_str(item.sprite);
        self.repaints += 1;
    }
}

type Gallery = SlotCarousel<ImageData, ConsoleHost, ImageButtons>;

/// Returns the data bound to the button under `point`, if any.
fn click(gallery: &Gallery, viewport: Size, point: Point) -> Option<&ImageData> {
    // Buttons are positioned relative to the viewport center.
    let along = point.y - viewport.height / 2.0;
    let half = gallery.layout().item_extent / 2.0;
    let index = gallery
        .slots()
        .iter()
        .position(|s| (s.position().y - along).abs() < half)?;
    gallery.bound_item(index)
}

fn main() {
    init_logging();

    let images = vec![
        ImageData { sprite: "cat.png", name: "cat" },
        ImageData { sprite: "dog.png", name: "dog" },
        ImageData { sprite: "owl.png", name: "owl" },
        ImageData { sprite: "fox.png", name: "fox" },
        ImageData { sprite: "elk.png", name: "elk" },
        ImageData { sprite: "yak.png", name: "yak" },
    ];

    let viewport = Size::new(120.0, 240.0);
    let config = CarouselConfig::default()
        .with_axis(Axis::Vertical)
        .with_visible_slots(3)
        .with_spacing(4.0);
    let mut gallery = SlotCarousel::new(
        config,
        ConsoleHost::new(viewport),
        ImageButtons::default(),
        images,
    );
    if let Err(err) = gallery.resize_pool(config.visible_slots) {
        tracing::error!(%err, "could not build gallery");
        return;
    }

    let half = viewport.height / 2.0;
    for value in [0.0, 0.25, 0.5, 1.0] {
        gallery.set_scroll_value(value);
        println!("value {value:<4} {}", render_strip(gallery.slots(), half));
    }

    // The bottom edge of a clamped carousel shows the last image.
    if let Some(data) = click(&gallery, viewport, Point::new(60.0, 200.0)) {
        tracing::info!("{data}");
    }

    // Swapping to a shorter list shrinks the pool to what the data can fill.
    let fewer = vec![
        ImageData { sprite: "bee.png", name: "bee" },
        ImageData { sprite: "ant.png", name: "ant" },
    ];
    if let Err(err) = gallery.set_data(fewer) {
        tracing::warn!(%err, "gallery kept its previous pool");
    }
    gallery.scroll_to_data_index(0, 0.0);
    println!("fewer      {}", render_strip(gallery.slots(), half));
    if let Some(data) = click(&gallery, viewport, Point::new(60.0, 40.0)) {
        tracing::info!("{data}");
    }

    tracing::info!(
        repaints = gallery.adapter().repaints,
        widgets = gallery.host().live(),
        "done"
    );
}
