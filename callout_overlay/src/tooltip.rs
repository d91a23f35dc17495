// Copyright 2025 the Callout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tooltip controller: lifecycle, policy resolution, pointer dismissal.

use alloc::boxed::Box;
use core::time::Duration;

use kurbo::{Point, Rect, RoundedRectRadii, Size};
use peniko::Color;

use callout_layout::{
    ArrowSpec, ConfigError, Direction, PlacementFlags, SizeConstraints, flush_radii, place_panel,
    resolve_placement,
};
use callout_shape::{
    CutoutSpec, PanelStyle, arrow_insets, bubble_outline, bubble_paint_ops, dim_region,
};

use crate::host::{BackgroundLayer, HitTestMode, LayerKind, OverlayHost, PanelLayer};

/// Everything the controller needs to build one popup.
///
/// Validated by [`Tooltip::new`] before anything is shown.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipConfig {
    /// Which side of the anchor the panel occupies, unless a policy flag
    /// overrides it.
    pub direction: Direction,
    /// Automatic direction and snap policies.
    pub placement: PlacementFlags,
    /// Size and offset constraints for the solver.
    pub constraints: SizeConstraints,
    /// Arrow geometry.
    pub arrow: ArrowSpec,
    /// Corner radii before the flush-edge rule is applied.
    pub corner_radii: RoundedRectRadii,
    /// Bubble colors and border width.
    pub style: PanelStyle,
    /// Dim color of the background layer; `None` disables the layer.
    pub dim_color: Option<Color>,
    /// Region exposed through the dim layer, and the pointer classifier.
    pub cutout: Option<CutoutSpec>,
    /// Close when the user taps outside the cutout.
    pub dismiss_on_tap_outside: bool,
    /// Swallow pointer events that would otherwise reach what is behind the
    /// background layer.
    pub block_outside_pointer_events: bool,
    /// Duration of the linear fade-in.
    pub fade: Duration,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Down,
            placement: PlacementFlags::empty(),
            constraints: SizeConstraints::default(),
            arrow: ArrowSpec::default(),
            corner_radii: RoundedRectRadii::from_single_radius(10.0),
            style: PanelStyle::default(),
            dim_color: None,
            cutout: None,
            dismiss_on_tap_outside: false,
            block_outside_pointer_events: false,
            fade: Duration::from_millis(150),
        }
    }
}

#[derive(Clone, Debug)]
struct OpenSession {
    geometry: Rect,
    direction: Direction,
    has_background: bool,
    fade_pending: bool,
}

#[derive(Clone, Debug)]
enum State {
    Closed,
    Open(OpenSession),
}

/// The popup controller.
///
/// Owns at most one background/panel layer pair at a time. `show()` and
/// `close()` run synchronously against an [`OverlayHost`]; the host feeds
/// pointer events and the post-frame notice back in. See the crate docs for
/// the dismissal matrix.
pub struct Tooltip {
    config: TooltipConfig,
    state: State,
    on_close: Option<Box<dyn FnMut()>>,
}

impl core::fmt::Debug for Tooltip {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tooltip")
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Tooltip {
    /// Creates a controller, rejecting invalid configuration up front.
    ///
    /// A max below a min on either axis never reaches the screen: it fails
    /// here, before any layer exists.
    pub fn new(config: TooltipConfig) -> Result<Self, ConfigError> {
        config.constraints.validate()?;
        Ok(Self {
            config,
            state: State::Closed,
            on_close: None,
        })
    }

    /// Registers the close notification, fired exactly once per `close()`.
    pub fn set_on_close(&mut self, callback: impl FnMut() + 'static) {
        self.on_close = Some(Box::new(callback));
    }

    /// The configuration this controller was built with.
    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    /// Whether a layer pair is currently on screen.
    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Open(_))
    }

    /// The resolved panel rectangle of the open session.
    pub fn geometry(&self) -> Option<Rect> {
        match &self.state {
            State::Open(session) => Some(session.geometry),
            State::Closed => None,
        }
    }

    /// The policy-resolved direction of the open session.
    pub fn direction(&self) -> Option<Direction> {
        match &self.state {
            State::Open(session) => Some(session.direction),
            State::Closed => None,
        }
    }

    /// Whether a point lies inside the configured cutout.
    ///
    /// Valid whether or not a background layer is rendered; with no cutout
    /// configured, every point is outside.
    pub fn is_in_cutout(&self, point: Point) -> bool {
        self.config.cutout.is_some_and(|c| c.contains(point))
    }

    /// Opens the popup for `anchor` on a surface of size `screen`.
    ///
    /// Both values are captured once; a later surface resize does not
    /// re-solve until the next `show()`. If the popup is already open, the
    /// existing session is closed first (its close notification fires) and
    /// replaced, keeping the single-layer-pair ownership invariant.
    pub fn show<H: OverlayHost>(&mut self, host: &mut H, anchor: Point, screen: Size) {
        if self.is_open() {
            tracing::debug!("show() while open, replacing the current session");
            self.close(host);
        }

        let placement = resolve_placement(
            self.config.direction,
            self.config.placement,
            anchor,
            screen,
            &self.config.constraints,
        );
        let radii = flush_radii(self.config.corner_radii, &placement.constraints.offsets);
        let geometry = place_panel(
            placement.direction,
            anchor,
            screen,
            &placement.constraints,
            &self.config.arrow,
            radii,
        );
        tracing::debug!(direction = ?placement.direction, ?geometry, "showing tooltip");

        let bubble = geometry - arrow_insets(placement.direction, &self.config.arrow);
        let outline = bubble_outline(
            bubble,
            placement.direction,
            anchor,
            radii,
            &self.config.arrow,
        );
        let paint = bubble_paint_ops(
            &outline,
            bubble,
            &placement.constraints.offsets,
            &self.config.style,
        );

        let has_background = self.config.dim_color.is_some();
        if let Some(color) = self.config.dim_color {
            let screen_rect = Rect::from_origin_size(Point::ORIGIN, screen);
            host.insert_background(BackgroundLayer {
                region: dim_region(screen_rect, self.config.cutout),
                color,
                hit_mode: self.hit_mode(),
            });
            host.set_opacity(LayerKind::Background, 0.0);
        }
        host.insert_panel(PanelLayer {
            frame: geometry,
            outline,
            paint,
        });
        host.set_opacity(LayerKind::Panel, 0.0);
        host.request_frame_notice();

        self.state = State::Open(OpenSession {
            geometry,
            direction: placement.direction,
            has_background,
            fade_pending: true,
        });
    }

    /// Closes the popup: notification, panel removal, background removal.
    ///
    /// Runs regardless of fade progress. Calling this on a controller that
    /// is not open is a programming error and panics.
    pub fn close<H: OverlayHost>(&mut self, host: &mut H) {
        let State::Open(session) = core::mem::replace(&mut self.state, State::Closed) else {
            panic!("close() called on a tooltip that is not open");
        };
        tracing::debug!("closing tooltip");
        if let Some(callback) = &mut self.on_close {
            callback();
        }
        host.remove_layer(LayerKind::Panel);
        if session.has_background {
            host.remove_layer(LayerKind::Background);
        }
    }

    /// Host callback: the first frame after insertion has been presented.
    ///
    /// Starts the linear fade on both layers independently. Ignored when the
    /// popup closed in the meantime or the fade already started.
    pub fn frame_rendered<H: OverlayHost>(&mut self, host: &mut H) {
        let State::Open(session) = &mut self.state else {
            return;
        };
        if !session.fade_pending {
            return;
        }
        session.fade_pending = false;
        if session.has_background {
            host.begin_fade_in(LayerKind::Background, self.config.fade);
        }
        host.begin_fade_in(LayerKind::Panel, self.config.fade);
    }

    /// Host callback: a tap consumed by an opaque background layer.
    ///
    /// With dismissal enabled every tap closes, wherever it lands; without
    /// it the tap is swallowed and nothing happens. Ignored while closed.
    pub fn on_background_tap<H: OverlayHost>(&mut self, host: &mut H, _point: Point) {
        if !self.is_open() {
            return;
        }
        if self.config.dismiss_on_tap_outside {
            self.close(host);
        }
    }

    /// Host callback: a pointer-down observed by a translucent background.
    ///
    /// Closes when the point is outside the cutout; the event itself passes
    /// through to whatever is underneath either way. Ignored while closed.
    pub fn on_pointer_down<H: OverlayHost>(&mut self, host: &mut H, point: Point) {
        if !self.is_open() {
            return;
        }
        if self.config.dismiss_on_tap_outside && !self.is_in_cutout(point) {
            self.close(host);
        }
    }

    fn hit_mode(&self) -> HitTestMode {
        match (
            self.config.dismiss_on_tap_outside,
            self.config.block_outside_pointer_events,
        ) {
            (_, true) => HitTestMode::Opaque,
            (true, false) => HitTestMode::Translucent,
            (false, false) => HitTestMode::Ignore,
        }
    }
}
