// Copyright 2025 the Callout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The position solver: anchor + screen + constraints → panel rectangle.

use kurbo::{Point, Rect, RoundedRectRadii, Size};

use crate::types::{ArrowPlacement, ArrowSpec, Direction, SizeConstraints};

/// Resolves the panel rectangle for one `show()`.
///
/// The panel's near edge sits exactly on the anchor coordinate of the
/// primary axis (the axis named by `direction`). Fixed offsets from
/// [`SizeConstraints::offsets`] are satisfied exactly; unconstrained sides
/// are placed anchor-centered and clamped to keep
/// [`SizeConstraints::outside_padding`] from the screen edges.
///
/// Primary extent: a fixed offset on the far side (bottom for
/// [`Direction::Down`], top for [`Direction::Up`], and so on) forces the
/// extent to the exact remaining distance; otherwise the extent is the
/// configured maximum capped at the anchor-to-edge distance, minus the
/// outside padding, floored at the configured minimum and at zero.
///
/// When the arrow is placed [`ArrowPlacement::FromCorner`], the free cross
/// placement is shifted so the arrow, which is fixed relative to the panel's
/// leading corner, still reaches the anchor. Fixed cross offsets are never
/// shifted.
///
/// Never returns a rectangle of negative width or height.
pub fn place_panel(
    direction: Direction,
    anchor: Point,
    screen: Size,
    constraints: &SizeConstraints,
    arrow: &ArrowSpec,
    radii: RoundedRectRadii,
) -> Rect {
    let c = constraints;
    let offsets = &c.offsets;
    match direction {
        Direction::Down => {
            let height = primary_extent(
                offsets.bottom,
                screen.height - anchor.y,
                c.max_height,
                c.min_height,
                c.outside_padding,
            );
            let width = cross_size(
                offsets.left,
                offsets.right,
                screen.width,
                c.max_width,
                c.min_width,
                c.outside_padding,
            );
            let shift = corner_shift(arrow, radii.top_left, width);
            let x = cross_origin(
                offsets.left,
                offsets.right,
                screen.width,
                anchor.x,
                width,
                c.outside_padding,
                shift,
            );
            Rect::new(x, anchor.y, x + width, anchor.y + height)
        }
        Direction::Up => {
            let height = primary_extent(
                offsets.top,
                anchor.y,
                c.max_height,
                c.min_height,
                c.outside_padding,
            );
            let width = cross_size(
                offsets.left,
                offsets.right,
                screen.width,
                c.max_width,
                c.min_width,
                c.outside_padding,
            );
            let shift = corner_shift(arrow, radii.bottom_left, width);
            let x = cross_origin(
                offsets.left,
                offsets.right,
                screen.width,
                anchor.x,
                width,
                c.outside_padding,
                shift,
            );
            Rect::new(x, anchor.y - height, x + width, anchor.y)
        }
        Direction::Right => {
            let width = primary_extent(
                offsets.right,
                screen.width - anchor.x,
                c.max_width,
                c.min_width,
                c.outside_padding,
            );
            let height = cross_size(
                offsets.top,
                offsets.bottom,
                screen.height,
                c.max_height,
                c.min_height,
                c.outside_padding,
            );
            let shift = corner_shift(arrow, radii.top_left, height);
            let y = cross_origin(
                offsets.top,
                offsets.bottom,
                screen.height,
                anchor.y,
                height,
                c.outside_padding,
                shift,
            );
            Rect::new(anchor.x, y, anchor.x + width, y + height)
        }
        Direction::Left => {
            let width = primary_extent(
                offsets.left,
                anchor.x,
                c.max_width,
                c.min_width,
                c.outside_padding,
            );
            let height = cross_size(
                offsets.top,
                offsets.bottom,
                screen.height,
                c.max_height,
                c.min_height,
                c.outside_padding,
            );
            let shift = corner_shift(arrow, radii.top_right, height);
            let y = cross_origin(
                offsets.top,
                offsets.bottom,
                screen.height,
                anchor.y,
                height,
                c.outside_padding,
                shift,
            );
            Rect::new(anchor.x - width, y, anchor.x, y + height)
        }
    }
}

/// Extent along the primary axis.
///
/// `anchor_to_edge` is the free distance from the anchor to the screen edge
/// the panel grows toward. A fixed far-side offset leaves no freedom.
fn primary_extent(
    far_offset: Option<f64>,
    anchor_to_edge: f64,
    max: Option<f64>,
    min: Option<f64>,
    padding: f64,
) -> f64 {
    match far_offset {
        Some(offset) => (anchor_to_edge - offset).max(0.0),
        None => (max.unwrap_or(anchor_to_edge).min(anchor_to_edge) - padding)
            .max(min.unwrap_or(0.0))
            .max(0.0),
    }
}

/// Extent along the cross axis.
///
/// Two fixed offsets force the extent; otherwise the configured maximum
/// applies below the available span (screen extent minus the fixed offset
/// and minus padding per unconstrained side), floored at the minimum and at
/// zero.
fn cross_size(
    lo: Option<f64>,
    hi: Option<f64>,
    extent: f64,
    max: Option<f64>,
    min: Option<f64>,
    padding: f64,
) -> f64 {
    let capped = |cap: f64| max.unwrap_or(cap).min(cap).max(min.unwrap_or(0.0)).max(0.0);
    match (lo, hi) {
        (Some(lo), Some(hi)) => (extent - lo - hi).max(0.0),
        (Some(lo), None) => capped(extent - lo - padding),
        (None, Some(hi)) => capped(extent - hi - padding),
        (None, None) => capped(extent - 2.0 * padding),
    }
}

/// Origin along the cross axis.
///
/// A fixed low-side offset wins; a fixed high-side offset places the far
/// edge exactly; otherwise the panel is centered on the anchor and clamped
/// into `[padding, extent - padding - size]` (lower bound wins when the
/// panel is too large), then shifted for a corner-placed arrow.
fn cross_origin(
    lo: Option<f64>,
    hi: Option<f64>,
    extent: f64,
    anchor: f64,
    size: f64,
    padding: f64,
    shift: f64,
) -> f64 {
    match (lo, hi) {
        (Some(lo), _) => lo,
        (None, Some(hi)) => extent - hi - size,
        (None, None) => (anchor - size / 2.0).min(extent - padding - size).max(padding) + shift,
    }
}

/// Cross-axis shift that brings a corner-placed arrow back over the anchor.
///
/// The arrow center sits at `offset + leading_radius + base_width / 2` from
/// the leading corner, so the anchor-centered placement is moved by the
/// difference to the panel midpoint. Centered arrows need no shift.
fn corner_shift(arrow: &ArrowSpec, leading_radius: f64, cross_extent: f64) -> f64 {
    match arrow.placement {
        ArrowPlacement::Centered => 0.0,
        ArrowPlacement::FromCorner(offset) => {
            cross_extent / 2.0 - offset - leading_radius - arrow.base_width / 2.0
        }
    }
}
