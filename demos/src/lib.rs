// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scaffolding for the carousel demos.
//!
//! [`ConsoleHost`] stands in for a UI toolkit: it hands out [`Widget`]s as
//! slot handles and [`render_strip`] draws the clipped window as a line of
//! text.

use kurbo::Size;
use understory_carousel::{Slot, SlotHost};

/// A widget in the console "scene": an id plus whatever was painted on it.
#[derive(Clone, Debug, Default)]
pub struct Widget {
    /// Stable id handed out by the host.
    pub id: u32,
    /// Last painted content.
    pub text: String,
}

/// A toy host that creates widgets in memory.
#[derive(Debug)]
pub struct ConsoleHost {
    next_id: u32,
    live: usize,
    viewport: Size,
}

impl ConsoleHost {
    /// Creates a host with the given viewport size.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            next_id: 0,
            live: 0,
            viewport,
        }
    }

    /// Number of live widgets.
    #[must_use]
    pub fn live(&self) -> usize {
        self.live
    }

    /// Resizes the viewport. Takes effect on the next forced relayout.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }
}

impl SlotHost for ConsoleHost {
    type Slot = Widget;

    fn create_slot(&mut self) -> Widget {
        let id = self.next_id;
        self.next_id += 1;
        self.live += 1;
        tracing::trace!(id, "created widget");
        Widget {
            id,
            text: String::new(),
        }
    }

    fn destroy_slot(&mut self, slot: Widget) {
        self.live -= 1;
        tracing::trace!(id = slot.id, "destroyed widget");
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }
}

/// Renders the widgets whose centers lie within `half_extent` of the
/// viewport center, leading edge first.
#[must_use]
pub fn render_strip(slots: &[Slot<Widget>], half_extent: f64) -> String {
    // One of the components is always zero, so the sum is the axis offset.
    let mut shown: Vec<(f64, &str)> = slots
        .iter()
        .map(|s| (s.position().x + s.position().y, s.handle.text.as_str()))
        .filter(|(along, _)| along.abs() < half_extent)
        .collect();
    shown.sort_by(|a, b| a.0.total_cmp(&b.0));
    shown
        .into_iter()
        .map(|(_, text)| format!("[{text:^10}]"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Installs a `tracing` subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
