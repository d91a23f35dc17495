// Copyright 2025 the Callout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snap and auto-direction policies.
//!
//! Resolves placement for anchors in both screen halves with the vertical
//! snap enabled, and shows the auto-direction pick on its own. The snapped
//! panel fills the full screen width and the entire free band on the chosen
//! side of the anchor.
//!
//! Run:
//! - `cargo run -p callout_demos --example snap_band`

use kurbo::{Point, RoundedRectRadii, Size};

use callout_layout::{
    ArrowSpec, Direction, PlacementFlags, SizeConstraints, auto_direction, place_panel,
    resolve_placement,
};

fn main() {
    let screen = Size::new(400.0, 800.0);
    let constraints = SizeConstraints {
        max_height: Some(120.0),
        outside_padding: 20.0,
        ..Default::default()
    };

    println!("== auto direction ==");
    for y in [100.0, 700.0] {
        let anchor = Point::new(200.0, y);
        println!(
            "anchor y={y}: panel goes {:?}",
            auto_direction(anchor, screen)
        );
    }

    println!("== vertical snap ==");
    for y in [100.0, 700.0] {
        let anchor = Point::new(200.0, y);
        let p = resolve_placement(
            Direction::Down,
            PlacementFlags::SNAP_VERTICAL,
            anchor,
            screen,
            &constraints,
        );
        let rect = place_panel(
            p.direction,
            anchor,
            screen,
            &p.constraints,
            &ArrowSpec::default(),
            RoundedRectRadii::from_single_radius(10.0),
        );
        println!(
            "anchor y={y}: {:?}, offsets {:?}, rect {rect:?}",
            p.direction, p.constraints.offsets
        );
    }
}
