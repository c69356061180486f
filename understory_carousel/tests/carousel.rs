// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_carousel` crate.
//!
//! These drive `SlotCarousel` through a recording host and adapter, checking
//! bindings, positions, resize behavior and the refused-resize paths.

use kurbo::Size;
use understory_carousel::{
    Axis, CarouselConfig, CarouselError, CarouselState, Relayout, Slot, SlotCarousel, SlotHost,
};

#[derive(Debug)]
struct RecordingHost {
    next_id: u32,
    live: Vec<u32>,
    destroyed: Vec<u32>,
    size: Size,
    has_template: bool,
}

impl RecordingHost {
    fn new() -> Self {
        Self {
            next_id: 0,
            live: Vec::new(),
            destroyed: Vec::new(),
            size: Size::new(300.0, 90.0),
            has_template: true,
        }
    }
}

impl SlotHost for RecordingHost {
    type Slot = u32;

    fn has_template(&self) -> bool {
        self.has_template
    }

    fn create_slot(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.live.push(id);
        id
    }

    fn destroy_slot(&mut self, slot: u32) {
        self.live.retain(|&id| id != slot);
        self.destroyed.push(slot);
    }

    fn viewport_size(&self) -> Size {
        self.size
    }
}

/// Remembers what each pool slot was last painted with.
#[derive(Debug, Default)]
struct Painted {
    labels: Vec<String>,
    calls: usize,
}

impl understory_carousel::ApplyData<u32, String> for Painted {
    fn apply_data(&mut self, index: usize, _slot: &mut Slot<u32>, item: &String) {
        if self.labels.len() <= index {
            self.labels.resize(index + 1, String::new());
        }
        self.labels[index] = item.clone();
        self.calls += 1;
    }
}

type Carousel = SlotCarousel<String, RecordingHost, Painted>;

fn labels(len: usize) -> Vec<String> {
    (0..len).map(|i| format!("item {i}")).collect()
}

fn carousel(config: CarouselConfig, len: usize) -> Carousel {
    SlotCarousel::new(config, RecordingHost::new(), Painted::default(), labels(len))
}

fn bindings(c: &Carousel) -> Vec<usize> {
    c.slots().iter().map(Slot::data_index).collect()
}

fn positions(c: &Carousel) -> Vec<f64> {
    c.slots().iter().map(|s| s.position().x).collect()
}

#[test]
fn first_resize_builds_pool_and_becomes_ready() {
    let mut c = carousel(CarouselConfig::default().with_looping(true), 10);
    assert_eq!(c.state(), CarouselState::Uninitialized);

    c.resize_pool(3).unwrap();
    assert_eq!(c.state(), CarouselState::Ready);
    assert_eq!(c.pool_size(), 4);
    assert_eq!(c.host().live, [0, 1, 2, 3]);
    assert_eq!(bindings(&c), [3, 2, 1, 0]);
    assert_eq!(positions(&c), [200.0, 100.0, 0.0, -100.0]);
    assert_eq!(c.visible_items(), [0, 1, 2]);
    // Canonical layout plus the replayed scroll value.
    assert_eq!(c.adapter().calls, 8);
    assert_eq!(c.adapter().labels[3], "item 0");
}

#[test]
fn setting_the_same_scroll_value_twice_is_idempotent() {
    let mut c = carousel(CarouselConfig::default().with_looping(true), 10);
    c.resize_pool(3).unwrap();

    for value in [0.0, 0.13, 0.5, -0.37, 2.75] {
        c.set_scroll_value(value);
        let (b1, p1) = (bindings(&c), positions(&c));
        c.set_scroll_value(value);
        assert_eq!(bindings(&c), b1, "value {value}");
        assert_eq!(positions(&c), p1, "value {value}");
        assert_eq!(c.scroll_value(), value);
    }
}

#[test]
fn scroll_to_data_index_puts_item_on_leading_slot() {
    let mut c = carousel(CarouselConfig::default().with_looping(true), 10);
    c.resize_pool(3).unwrap();

    for index in [0, 1, 5, 7, 9, 10, 23] {
        c.scroll_to_data_index(index, 0.0);
        let leading = c.leading_slot().unwrap();
        assert_eq!(c.slot(leading).unwrap().data_index(), index % 10, "index {index}");
        assert_eq!(c.visible_items()[0], index % 10);
    }
}

#[test]
fn scroll_to_data_index_with_trailing_pivot() {
    let mut c = carousel(CarouselConfig::default().with_looping(true), 10);
    c.resize_pool(3).unwrap();

    c.scroll_to_data_index(5, 1.0);
    assert_eq!(c.visible_items(), [3, 4, 5]);

    c.scroll_to_data_index(0, 1.0);
    assert_eq!(c.visible_items(), [8, 9, 0]);
}

#[test]
fn resize_up_and_back_restores_bindings() {
    let mut c = carousel(CarouselConfig::default().with_looping(true), 10);
    c.resize_pool(3).unwrap();
    c.set_scroll_value(0.3);
    let before = bindings(&c);
    let before_positions = positions(&c);

    c.resize_pool(5).unwrap();
    assert_eq!(c.pool_size(), 6);
    assert_eq!(c.visible_slots(), 5);
    assert_eq!(c.visible_items(), [3, 4, 5, 6, 7]);

    c.resize_pool(3).unwrap();
    assert_eq!(bindings(&c), before);
    assert_eq!(positions(&c), before_positions);
    // The grown slots were torn down from the tail of the pool.
    assert_eq!(c.host().destroyed, [4, 5]);
}

#[test]
fn clamped_scroll_ends_with_last_item() {
    let mut c = carousel(CarouselConfig::default(), 10);
    c.resize_pool(3).unwrap();

    c.set_scroll_value(0.0);
    assert_eq!(c.visible_items(), [0, 1, 2]);

    c.set_scroll_value(1.0);
    assert_eq!(c.visible_items(), [7, 8, 9]);
    let order = c.display_order();
    let last_visible = order[c.visible_slots() - 1];
    assert_eq!(c.slot(last_visible).unwrap().data_index(), 9);
    assert_eq!(c.bound_item(last_visible).unwrap(), "item 9");
}

#[test]
fn negative_scroll_values_wrap() {
    let mut c = carousel(CarouselConfig::default().with_looping(true), 10);
    c.resize_pool(3).unwrap();

    c.set_scroll_value(-0.2);
    assert_eq!(c.visible_items(), [8, 9, 0]);
    c.scroll_by_items(1.0);
    assert_eq!(c.visible_items(), [9, 0, 1]);
}

#[test]
fn vertical_axis_places_slots_on_y() {
    let config = CarouselConfig::default()
        .with_looping(true)
        .with_axis(Axis::Vertical);
    let mut c = carousel(config, 10);
    c.resize_pool(3).unwrap();

    // 90 tall viewport, three rows of 30.
    assert_eq!(c.layout().item_extent, 30.0);
    let ys: Vec<f64> = c.slots().iter().map(|s| s.position().y).collect();
    assert_eq!(ys, [60.0, 30.0, 0.0, -30.0]);
    assert!(c.slots().iter().all(|s| s.position().x == 0.0));

    // Switching axis re-measures along the width.
    c.set_axis(Axis::Horizontal).unwrap();
    assert_eq!(c.layout().item_extent, 100.0);
    assert_eq!(c.slot(0).unwrap().position().x, 200.0);
    assert_eq!(c.slot(0).unwrap().position().y, 0.0);
}

#[test]
fn refused_resizes_leave_state_intact() {
    let mut c = carousel(CarouselConfig::default().with_looping(true), 10);
    assert_eq!(c.resize_pool(0), Err(CarouselError::ZeroVisibleSlots));
    assert_eq!(c.state(), CarouselState::Uninitialized);

    c.host_mut().has_template = false;
    assert_eq!(c.resize_pool(3), Err(CarouselError::MissingTemplate));
    assert_eq!(c.state(), CarouselState::Uninitialized);
    assert!(c.host().live.is_empty());

    c.host_mut().has_template = true;
    c.resize_pool(3).unwrap();
    let before = bindings(&c);
    assert_eq!(c.resize_pool(0), Err(CarouselError::ZeroVisibleSlots));
    assert_eq!(c.pool_size(), 4);
    assert_eq!(bindings(&c), before);
    assert_eq!(c.state(), CarouselState::Ready);
}

#[test]
fn refused_axis_and_spacing_changes_keep_previous_layout() {
    let mut c = carousel(CarouselConfig::default().with_looping(true), 10);
    c.resize_pool(3).unwrap();
    c.host_mut().has_template = false;

    assert_eq!(c.set_axis(Axis::Vertical), Err(CarouselError::MissingTemplate));
    assert_eq!(c.config().axis, Axis::Horizontal);
    assert_eq!(c.set_spacing(5.0), Err(CarouselError::MissingTemplate));
    assert_eq!(c.config().spacing, 0.0);

    c.refresh();
    assert_eq!(c.layout().item_extent, 100.0);
    assert_eq!(c.layout().stride, 100.0);
    assert_eq!(positions(&c), [200.0, 100.0, 0.0, -100.0]);
    assert!(c.slots().iter().all(|s| s.position().y == 0.0));
}

#[test]
fn refused_data_swap_keeps_previous_data() {
    let mut c = carousel(CarouselConfig::default().with_looping(true), 10);
    c.resize_pool(3).unwrap();
    c.host_mut().has_template = false;

    assert_eq!(c.set_data(labels(2)), Err(CarouselError::MissingTemplate));
    assert_eq!(c.data().len(), 10);
    assert_eq!(c.state(), CarouselState::Ready);
    assert!(c.pool_size() <= c.data().len() + 1);

    c.set_scroll_value(0.0);
    assert_eq!(c.visible_items(), [0, 1, 2]);
}

#[test]
fn toggling_looping_rescales_the_window() {
    let mut c = carousel(CarouselConfig::default().with_looping(true), 10);
    c.resize_pool(3).unwrap();
    c.set_scroll_value(1.0);
    // A full lap wraps back to the start.
    assert_eq!(c.visible_items(), [0, 1, 2]);

    c.set_looping(false);
    assert_eq!(c.visible_items(), [7, 8, 9]);
    assert_eq!(c.scroll_value(), 1.0);

    c.set_looping(true);
    assert_eq!(c.visible_items(), [0, 1, 2]);
}

#[test]
fn empty_data_refuses_resize_and_ignores_scrolling() {
    let mut c = carousel(CarouselConfig::default(), 0);
    assert_eq!(c.resize_pool(3), Err(CarouselError::EmptyData));
    c.set_scroll_value(0.4);
    c.scroll_to_data_index(3, 0.0);
    assert_eq!(c.scroll_value(), 0.4);
    assert_eq!(c.adapter().calls, 0);
}

#[test]
fn unchanged_pool_size_still_replays_scroll() {
    let mut c = carousel(CarouselConfig::default().with_looping(true), 10);
    c.resize_pool(3).unwrap();
    let calls = c.adapter().calls;

    c.resize_pool(3).unwrap();
    // No slots created or destroyed, one replay pass.
    assert_eq!(c.host().next_id, 4);
    assert_eq!(c.adapter().calls, calls + 4);

    c.resize_pool_with(3, Relayout::Force).unwrap();
    assert_eq!(c.host().next_id, 4);
    assert_eq!(c.adapter().calls, calls + 4 + 8);
}

#[test]
fn scroll_before_first_resize_is_replayed() {
    let config = CarouselConfig::default()
        .with_looping(true)
        .with_scroll_value(0.5);
    let mut c = carousel(config, 10);
    c.resize_pool(3).unwrap();
    assert_eq!(c.visible_items(), [5, 6, 7]);
}

#[test]
fn data_swap_with_new_length_resizes() {
    let mut c = carousel(CarouselConfig::default().with_looping(true), 10);
    c.resize_pool(3).unwrap();

    c.set_data(labels(2)).unwrap();
    assert_eq!(c.pool_size(), 3);
    assert_eq!(c.visible_slots(), 2);

    // Same length: pool kept, bindings stale until refreshed.
    let swapped: Vec<String> = (0..2).map(|i| format!("other {i}")).collect();
    let calls = c.adapter().calls;
    c.set_data(swapped).unwrap();
    assert_eq!(c.adapter().calls, calls);
    c.refresh();
    assert!(c.adapter().labels.iter().take(3).all(|l| l.starts_with("other")));

    assert_eq!(c.set_data(Vec::new()), Err(CarouselError::EmptyData));
    assert_eq!(c.pool_size(), 3);
}

#[test]
fn fractional_scroll_keeps_window_contiguous() {
    let mut c = carousel(CarouselConfig::default().with_looping(true), 7);
    c.resize_pool(3).unwrap();

    for tick in 0..100 {
        c.set_scroll_value(f64::from(tick) * 0.013);
        let order = c.display_order();
        let shown: Vec<usize> = order.iter().map(|&i| c.slot(i).unwrap().data_index()).collect();
        for pair in shown.windows(2) {
            assert_eq!((pair[0] + 1) % 7, pair[1], "tick {tick}: {shown:?}");
        }
    }
}

#[test]
fn clear_tears_down_every_slot() {
    let mut c = carousel(CarouselConfig::default(), 10);
    c.resize_pool(4).unwrap();
    c.clear();
    assert_eq!(c.state(), CarouselState::Uninitialized);
    assert!(c.host().live.is_empty());
    assert_eq!(c.host().destroyed.len(), 5);

    let (host, painted, data) = c.into_parts();
    assert_eq!(host.next_id, 5);
    assert!(painted.calls > 0);
    assert_eq!(data.len(), 10);
}
