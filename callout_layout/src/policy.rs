// Copyright 2025 the Callout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement policy: automatic direction and edge snapping.
//!
//! These run before the solver and only rewrite its inputs; the solver
//! itself knows nothing about policy. See [`resolve_placement`].

use bitflags::bitflags;
use kurbo::{Point, Size};

use crate::types::{Direction, SizeConstraints};

bitflags! {
    /// Optional placement policies applied before the solver.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PlacementFlags: u8 {
        /// Pick up or down from the anchor's side of the screen center,
        /// ignoring the configured direction.
        const AUTO_DIRECTION  = 0b0000_0001;
        /// Expand the panel to the full screen width and the entire free
        /// band above or below the anchor. Takes precedence over
        /// [`Self::SNAP_HORIZONTAL`].
        const SNAP_VERTICAL   = 0b0000_0010;
        /// Expand the panel to the full screen height and the entire free
        /// band beside the anchor. Evaluated only when
        /// [`Self::SNAP_VERTICAL`] is absent.
        const SNAP_HORIZONTAL = 0b0000_0100;
    }
}

/// A policy-resolved direction plus the constraints the solver should use.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// The direction after policy overrides.
    pub direction: Direction,
    /// The constraints after policy overrides.
    pub constraints: SizeConstraints,
}

/// Picks up or down from the anchor's side of the vertical screen center.
///
/// An anchor below the center leaves more room above, so the panel goes up;
/// anything else (including exactly on the center) goes down. The comparison
/// is `anchor.y > height / 2` and is relied on by the snap policy; keep it
/// as is.
pub fn auto_direction(anchor: Point, screen: Size) -> Direction {
    if anchor.y > screen.height / 2.0 {
        Direction::Up
    } else {
        Direction::Down
    }
}

/// Applies the policy flags to the configured direction and constraints.
///
/// Snap modes clear the primary maximum, pin both cross sides to the screen
/// edges, and pin the far side to 0 so the solver resolves the entire free
/// band on the chosen side of the anchor. The snapped side follows the same
/// anchor-vs-center comparison as [`auto_direction`].
pub fn resolve_placement(
    direction: Direction,
    flags: PlacementFlags,
    anchor: Point,
    screen: Size,
    constraints: &SizeConstraints,
) -> Placement {
    let mut c = *constraints;
    let mut direction = if flags.contains(PlacementFlags::AUTO_DIRECTION) {
        auto_direction(anchor, screen)
    } else {
        direction
    };

    if flags.contains(PlacementFlags::SNAP_VERTICAL) {
        c.max_height = None;
        c.offsets.left = Some(0.0);
        c.offsets.right = Some(0.0);
        if anchor.y > screen.height / 2.0 {
            direction = Direction::Up;
            c.offsets.top = Some(0.0);
        } else {
            direction = Direction::Down;
            c.offsets.bottom = Some(0.0);
        }
    } else if flags.contains(PlacementFlags::SNAP_HORIZONTAL) {
        c.max_width = None;
        c.offsets.top = Some(0.0);
        c.offsets.bottom = Some(0.0);
        if anchor.x > screen.width / 2.0 {
            direction = Direction::Left;
            c.offsets.left = Some(0.0);
        } else {
            direction = Direction::Right;
            c.offsets.right = Some(0.0);
        }
    }

    Placement {
        direction,
        constraints: c,
    }
}
