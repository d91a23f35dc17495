// Copyright 2025 the Callout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability boundary between the controller and the embedding host.

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{BezPath, Rect};
use peniko::Color;

use callout_shape::{DimRegion, PaintOp};

/// Which of the two overlay layers an operation addresses.
///
/// The controller owns at most one of each; the host maps them to whatever
/// its compositor uses for identity.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LayerKind {
    /// The dimmed backdrop, inserted below the panel.
    Background,
    /// The bubble itself.
    Panel,
}

/// How the host's gesture layer routes pointer events for a layer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum HitTestMode {
    /// The layer receives and consumes events.
    Opaque,
    /// The layer observes events but lets them pass through.
    Translucent,
    /// The layer never receives events.
    Ignore,
}

/// The dimmed background layer.
#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundLayer {
    /// Fill region; see [`DimRegion::path`] for the even-odd contract.
    pub region: DimRegion,
    /// Dim color.
    pub color: Color,
    /// Pointer routing for this layer.
    pub hit_mode: HitTestMode,
}

/// The panel layer.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelLayer {
    /// The solver's rectangle, including the arrow margin.
    pub frame: Rect,
    /// The bubble outline in screen coordinates.
    pub outline: BezPath,
    /// Paint instructions, in order.
    pub paint: Vec<PaintOp>,
}

/// What the controller needs from the embedding toolkit.
///
/// All calls are synchronous; the only deferred interaction is
/// [`request_frame_notice`](Self::request_frame_notice), after which the
/// host must invoke [`Tooltip::frame_rendered`](crate::Tooltip::frame_rendered)
/// once the next frame has been presented. The fade primitive interpolates a
/// layer's opacity toward 1 on the host's animation clock; removal during an
/// in-flight fade must take effect immediately.
pub trait OverlayHost {
    /// Inserts the background layer. Always precedes
    /// [`insert_panel`](Self::insert_panel) and stacks below it.
    fn insert_background(&mut self, layer: BackgroundLayer);

    /// Inserts the panel layer above any background layer.
    fn insert_panel(&mut self, layer: PanelLayer);

    /// Removes a previously inserted layer.
    fn remove_layer(&mut self, kind: LayerKind);

    /// Sets a layer's opacity immediately.
    fn set_opacity(&mut self, kind: LayerKind, opacity: f64);

    /// Starts a linear opacity interpolation from the current value to 1.
    fn begin_fade_in(&mut self, kind: LayerKind, duration: Duration);

    /// Schedules a one-shot notification for after the next rendered frame.
    fn request_frame_notice(&mut self);
}
