// Copyright 2025 the Callout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, RoundedRectRadii, Size};

use callout_layout::{
    ArrowPlacement, ArrowSpec, Direction, PlacementFlags, SizeConstraints, place_panel,
    resolve_placement,
};
use callout_shape::{CutoutShape, CutoutSpec, arrow_insets, bubble_outline, dim_region};

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_anchors(count: usize, screen: Size) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            Point::new(
                rng.next_f64() * screen.width,
                rng.next_f64() * screen.height,
            )
        })
        .collect()
}

fn bench_place(c: &mut Criterion) {
    let screen = Size::new(400.0, 800.0);
    let anchors = gen_anchors(1024, screen);
    let constraints = SizeConstraints {
        max_width: Some(280.0),
        outside_padding: 20.0,
        ..Default::default()
    };
    let arrow = ArrowSpec::default();
    let radii = RoundedRectRadii::from_single_radius(10.0);

    let mut group = c.benchmark_group("place_panel");
    group.throughput(Throughput::Elements(anchors.len() as u64));
    group.bench_function("free_placement", |b| {
        b.iter(|| {
            for (i, &anchor) in anchors.iter().enumerate() {
                let rect = place_panel(
                    DIRECTIONS[i % 4],
                    anchor,
                    screen,
                    &constraints,
                    &arrow,
                    radii,
                );
                black_box(rect);
            }
        });
    });
    group.bench_function("policy_then_place", |b| {
        b.iter(|| {
            for &anchor in &anchors {
                let p = resolve_placement(
                    Direction::Down,
                    PlacementFlags::AUTO_DIRECTION | PlacementFlags::SNAP_VERTICAL,
                    anchor,
                    screen,
                    &constraints,
                );
                black_box(place_panel(
                    p.direction,
                    anchor,
                    screen,
                    &p.constraints,
                    &arrow,
                    radii,
                ));
            }
        });
    });
    group.finish();
}

fn bench_outline(c: &mut Criterion) {
    let screen = Size::new(400.0, 800.0);
    let anchors = gen_anchors(256, screen);
    let constraints = SizeConstraints {
        outside_padding: 20.0,
        ..Default::default()
    };
    let radii = RoundedRectRadii::from_single_radius(10.0);

    let mut group = c.benchmark_group("bubble_outline");
    group.throughput(Throughput::Elements(anchors.len() as u64));
    for (name, placement) in [
        ("centered", ArrowPlacement::Centered),
        ("from_corner", ArrowPlacement::FromCorner(16.0)),
    ] {
        let arrow = ArrowSpec {
            placement,
            ..Default::default()
        };
        group.bench_function(name, |b| {
            b.iter_batched(
                || {
                    anchors
                        .iter()
                        .enumerate()
                        .map(|(i, &anchor)| {
                            let dir = DIRECTIONS[i % 4];
                            let rect =
                                place_panel(dir, anchor, screen, &constraints, &arrow, radii)
                                    - arrow_insets(dir, &arrow);
                            (dir, anchor, rect)
                        })
                        .collect::<Vec<_>>()
                },
                |inputs| {
                    for (dir, anchor, rect) in inputs {
                        black_box(bubble_outline(rect, dir, anchor, radii, &arrow));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_dim_region(c: &mut Criterion) {
    let screen = kurbo::Rect::new(0.0, 0.0, 400.0, 800.0);
    let cutout = CutoutSpec {
        rect: kurbo::Rect::new(150.0, 80.0, 250.0, 140.0),
        shape: CutoutShape::Oval,
    };
    c.bench_function("dim_region_with_cutout", |b| {
        b.iter(|| black_box(dim_region(screen, Some(cutout))));
    });
}

criterion_group!(benches, bench_place, bench_outline, bench_dim_region);
criterion_main!(benches);
