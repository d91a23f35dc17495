// Copyright 2025 the Callout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip basics.
//!
//! This minimal example shows a dimmed tooltip against a logging host,
//! delivers the post-frame notice so the fade starts, and closes it again.
//!
//! Run:
//! - `cargo run -p callout_demos --example balloon_basics`

use core::time::Duration;

use kurbo::{Point, Rect, Shape, Size};
use peniko::color::palette;

use callout_overlay::{
    BackgroundLayer, LayerKind, OverlayHost, PanelLayer, Tooltip, TooltipConfig,
};
use callout_shape::{CutoutShape, CutoutSpec};

/// A host that prints every capability call instead of rendering.
struct PrintHost;

impl OverlayHost for PrintHost {
    fn insert_background(&mut self, layer: BackgroundLayer) {
        println!(
            "  insert background: hit mode {:?}, cutout {:?}",
            layer.hit_mode,
            layer.region.cutout().map(|c| c.rect)
        );
    }
    fn insert_panel(&mut self, layer: PanelLayer) {
        println!(
            "  insert panel: frame {:?}, outline bbox {:?}, {} paint ops",
            layer.frame,
            layer.outline.bounding_box(),
            layer.paint.len()
        );
    }
    fn remove_layer(&mut self, kind: LayerKind) {
        println!("  remove {kind:?}");
    }
    fn set_opacity(&mut self, kind: LayerKind, opacity: f64) {
        println!("  opacity {kind:?} = {opacity}");
    }
    fn begin_fade_in(&mut self, kind: LayerKind, duration: Duration) {
        println!("  fade in {kind:?} over {duration:?}");
    }
    fn request_frame_notice(&mut self) {
        println!("  frame notice requested");
    }
}

fn main() {
    tracing_subscriber::fmt().init();

    let config = TooltipConfig {
        dim_color: Some(palette::css::BLACK.with_alpha(0.4)),
        cutout: Some(CutoutSpec {
            rect: Rect::new(170.0, 70.0, 230.0, 130.0),
            shape: CutoutShape::Oval,
        }),
        ..Default::default()
    };
    let mut tooltip = Tooltip::new(config).expect("configuration is valid");
    tooltip.set_on_close(|| println!("  close notification"));

    let mut host = PrintHost;
    println!("== show ==");
    tooltip.show(&mut host, Point::new(200.0, 100.0), Size::new(400.0, 800.0));
    println!("resolved: {:?} {:?}", tooltip.direction(), tooltip.geometry());

    println!("== first frame rendered ==");
    tooltip.frame_rendered(&mut host);

    println!("== close ==");
    tooltip.close(&mut host);
}
