// Copyright 2025 the Callout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pointer-dismissal matrix.
//!
//! Walks all four dismiss/block combinations, feeds a tap or pointer-down
//! inside and outside the cutout the way the background's hit-test mode
//! would route it, and prints whether the tooltip closed.
//!
//! Run:
//! - `cargo run -p callout_demos --example dismiss_policy`

use core::time::Duration;

use kurbo::{Point, Rect, Size};
use peniko::color::palette;

use callout_overlay::{
    BackgroundLayer, HitTestMode, LayerKind, OverlayHost, PanelLayer, Tooltip, TooltipConfig,
};
use callout_shape::{CutoutShape, CutoutSpec};

/// A host that only remembers the background's hit-test mode.
#[derive(Default)]
struct QuietHost {
    hit_mode: Option<HitTestMode>,
}

impl OverlayHost for QuietHost {
    fn insert_background(&mut self, layer: BackgroundLayer) {
        self.hit_mode = Some(layer.hit_mode);
    }
    fn insert_panel(&mut self, _layer: PanelLayer) {}
    fn remove_layer(&mut self, _kind: LayerKind) {}
    fn set_opacity(&mut self, _kind: LayerKind, _opacity: f64) {}
    fn begin_fade_in(&mut self, _kind: LayerKind, _duration: Duration) {}
    fn request_frame_notice(&mut self) {}
}

fn main() {
    let cutout = CutoutSpec {
        rect: Rect::new(150.0, 50.0, 250.0, 150.0),
        shape: CutoutShape::Oval,
    };
    let inside = Point::new(200.0, 100.0);
    let outside = Point::new(20.0, 700.0);

    println!("dismiss block | mode        | tap inside | tap outside");
    println!("--------------+-------------+------------+------------");
    for dismiss in [true, false] {
        for block in [true, false] {
            let mut results = Vec::new();
            let mut mode = None;
            for point in [inside, outside] {
                let config = TooltipConfig {
                    dim_color: Some(palette::css::BLACK.with_alpha(0.4)),
                    cutout: Some(cutout),
                    dismiss_on_tap_outside: dismiss,
                    block_outside_pointer_events: block,
                    ..Default::default()
                };
                let mut tooltip = Tooltip::new(config).expect("configuration is valid");
                let mut host = QuietHost::default();
                tooltip.show(&mut host, Point::new(200.0, 100.0), Size::new(400.0, 800.0));
                mode = host.hit_mode;
                match host.hit_mode {
                    Some(HitTestMode::Opaque) => tooltip.on_background_tap(&mut host, point),
                    Some(HitTestMode::Translucent) => tooltip.on_pointer_down(&mut host, point),
                    Some(HitTestMode::Ignore) | None => {}
                }
                results.push(if tooltip.is_open() { "stays open" } else { "closes" });
            }
            println!(
                "{dismiss:<7} {block:<5} | {:<11} | {:<10} | {}",
                format!("{:?}", mode.expect("background was inserted")),
                results[0],
                results[1],
            );
        }
    }
}
