// Copyright 2025 the Callout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=callout_shape --heading-base-level=0

//! Callout Shape: the drawable geometry of an anchored panel.
//!
//! Two pure builders live here.
//!
//! - [`bubble_outline`] turns a panel rectangle (from `callout_layout`) into
//!   a single closed contour: a rounded rectangle whose anchor-facing edge
//!   is interrupted by a triangular notch pointing at the anchor.
//!   [`bubble_paint_ops`] pairs the contour with fill, border, and
//!   flush-edge strokes; [`arrow_insets`] gives the per-direction margin the
//!   notch needs between the solver's rectangle and the bubble.
//! - [`dim_region`] builds the dimmed-overlay region: the screen rectangle
//!   minus an optional [`CutoutSpec`], expressed as a two-subpath path to be
//!   filled with the even-odd rule. The cutout's own containment test is
//!   exposed independently for pointer classification.
//!
//! Everything is plain data over [`kurbo`] paths and [`peniko`] colors; no
//! drawing happens here.
//!
//! ## Minimal usage
//!
//! ```
//! use callout_layout::{ArrowSpec, Direction, EdgeOffsets};
//! use callout_shape::{arrow_insets, bubble_outline, bubble_paint_ops, PanelStyle};
//! use kurbo::{Point, Rect, RoundedRectRadii, Shape};
//!
//! let arrow = ArrowSpec::default();
//! let panel = Rect::new(20.0, 100.0, 380.0, 300.0);
//! let bubble = panel - arrow_insets(Direction::Down, &arrow);
//! let outline = bubble_outline(
//!     bubble,
//!     Direction::Down,
//!     Point::new(200.0, 100.0),
//!     RoundedRectRadii::from_single_radius(10.0),
//!     &arrow,
//! );
//! let ops = bubble_paint_ops(&outline, bubble, &EdgeOffsets::NONE, &PanelStyle::default());
//! assert!(outline.bounding_box().area() > 0.0);
//! assert_eq!(ops.len(), 2); // fill + border, no flush edges
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod bubble;
mod cutout;

pub use bubble::{
    PaintOp, PanelStyle, Shadow, arrow_insets, bubble_outline, bubble_paint_ops,
};
pub use cutout::{CutoutShape, CutoutSpec, DimRegion, dim_region};
