// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Looping text carousel driven by a simulated drag.
//!
//! Run:
//! - `cargo run -p understory_demos --example text_carousel`
//! - `RUST_LOG=debug cargo run -p understory_demos --example text_carousel`

use kurbo::{Point, Size};
use understory_carousel::{CarouselConfig, Slot, SlotCarousel};
use understory_demos::{ConsoleHost, Widget, init_logging, render_strip};

fn main() {
    init_logging();

    let words: Vec<String> = [
        "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    let viewport = Size::new(360.0, 40.0);
    let config = CarouselConfig::default().with_looping(true);
    let paint = |_: usize, slot: &mut Slot<Widget>, word: &String| {
        slot.handle.text.clone_from(word);
    };
    let mut carousel = SlotCarousel::new(config, ConsoleHost::new(viewport), paint, words);

    if let Err(err) = carousel.resize_pool(3) {
        tracing::error!(%err, "could not build carousel");
        return;
    }
    let half = viewport.width / 2.0;
    tracing::info!(
        pool = carousel.pool_size(),
        widgets = carousel.host().live(),
        "carousel ready"
    );
    println!("start   {}", render_strip(carousel.slots(), half));

    // Drag left by two and a half items, in small steps.
    let stride = carousel.layout().stride;
    let mut last = Point::new(300.0, 20.0);
    for i in 1..=10 {
        let pos = Point::new(300.0 - f64::from(i) * stride / 4.0, 20.0);
        let delta = pos - last;
        last = pos;
        carousel.scroll_by_items(-delta.x / stride);
        println!("drag {i:>2} {}", render_strip(carousel.slots(), half));
    }

    // Jump to the last word, centered.
    carousel.scroll_to_data_index(7, 0.5);
    println!("center  {}", render_strip(carousel.slots(), half));

    // Show five at once, then go back to three.
    for (label, visible) in [("five ", 5), ("three", 3)] {
        if let Err(err) = carousel.resize_pool(visible) {
            tracing::warn!(%err, visible, "carousel kept its previous pool");
        }
        println!("{label}   {}", render_strip(carousel.slots(), half));
    }

    // Zero visible slots is refused and logged; nothing changes.
    if carousel.resize_pool(0).is_err() {
        println!("kept    {}", render_strip(carousel.slots(), half));
    }
}
