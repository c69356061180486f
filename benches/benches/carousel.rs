// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_carousel::{CarouselConfig, Slot, SlotCarousel, SlotHost};

struct NullHost;

impl SlotHost for NullHost {
    type Slot = u32;

    fn create_slot(&mut self) -> u32 {
        0
    }

    fn destroy_slot(&mut self, _slot: u32) {}

    fn viewport_size(&self) -> Size {
        Size::new(1920.0, 1080.0)
    }
}

fn touch(_: usize, slot: &mut Slot<u32>, item: &u64) {
    slot.handle = slot.handle.wrapping_add(*item as u32);
}

fn bench_set_scroll_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/set_scroll_value");

    // Cost should scale with the pool, not with the data length.
    for (visible, len) in [(3usize, 10usize), (3, 1_000_000), (32, 1_000_000)] {
        let data: Vec<u64> = (0..len as u64).collect();
        let config = CarouselConfig::default().with_looping(true);
        let mut carousel = SlotCarousel::new(
            config,
            NullHost,
            touch as fn(usize, &mut Slot<u32>, &u64),
            data,
        );
        carousel.resize_pool(visible).unwrap();
        group.throughput(Throughput::Elements(carousel.pool_size() as u64));

        let id = BenchmarkId::new(format!("visible_{visible}"), len);
        group.bench_function(id, |b| {
            let mut value = 0.0_f64;
            b.iter(|| {
                value += 0.0007;
                carousel.set_scroll_value(black_box(value));
                black_box(carousel.slots().len());
            });
        });
    }

    group.finish();
}

fn bench_scroll_to_data_index(c: &mut Criterion) {
    let data: Vec<u64> = (0..10_000).collect();
    let config = CarouselConfig::default().with_looping(true);
    let mut carousel = SlotCarousel::new(
        config,
        NullHost,
        touch as fn(usize, &mut Slot<u32>, &u64),
        data,
    );
    carousel.resize_pool(5).unwrap();

    c.bench_function("carousel/scroll_to_data_index", |b| {
        let mut index = 0_usize;
        b.iter(|| {
            index = (index + 7_919) % 10_000;
            carousel.scroll_to_data_index(black_box(index), 0.5);
        });
    });
}

criterion_group!(benches, bench_set_scroll_value, bench_scroll_to_data_index);
criterion_main!(benches);
