// Copyright 2025 the Callout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=callout_layout --heading-base-level=0

//! Callout Layout: placement of an anchored panel on a screen.
//!
//! This crate solves where a popup panel goes. Given an anchor point, the
//! screen size, and a set of per-side constraints, it produces the panel's
//! resolved rectangle. It performs no drawing; the sibling `callout_shape`
//! crate turns the rectangle into an outline, and `callout_overlay` drives
//! both against a host.
//!
//! ## Placement model
//!
//! A panel occupies one of the four sides of its anchor, named by
//! [`Direction`]. Along the *primary* axis (the axis pointing away from the
//! anchor) the panel's near edge sits exactly on the anchor; its extent is
//! either forced by a fixed offset on the far side or derived from the free
//! distance to the screen edge. Along the *cross* axis the panel is either
//! pinned by fixed offsets or centered on the anchor and clamped to keep an
//! outside padding from the screen edges. See [`place_panel`].
//!
//! Fixed offsets are satisfied exactly; they are screen-edge gaps, so an
//! offset of `0` makes that panel edge flush with the screen.
//!
//! ## Policy layer
//!
//! [`resolve_placement`] applies the optional automatic policies before the
//! solver runs: [`PlacementFlags::AUTO_DIRECTION`] picks up or down from the
//! anchor's side of the screen center, and the two snap flags expand the
//! panel to fill the entire free band on one side of the anchor.
//!
//! ## Minimal usage
//!
//! ```
//! use callout_layout::{place_panel, ArrowSpec, Direction, SizeConstraints};
//! use kurbo::{Point, RoundedRectRadii, Size};
//!
//! let constraints = SizeConstraints {
//!     outside_padding: 20.0,
//!     ..Default::default()
//! };
//! let rect = place_panel(
//!     Direction::Down,
//!     Point::new(200.0, 100.0),
//!     Size::new(400.0, 800.0),
//!     &constraints,
//!     &ArrowSpec::default(),
//!     RoundedRectRadii::from_single_radius(10.0),
//! );
//! assert_eq!(rect.y0, 100.0);
//! assert_eq!(rect.height(), 680.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate std;

mod place;
mod policy;
mod types;

pub use place::place_panel;
pub use policy::{Placement, PlacementFlags, auto_direction, resolve_placement};
pub use types::{
    ArrowPlacement, ArrowSpec, ConfigError, Direction, EdgeOffsets, SizeConstraints, flush_radii,
};
