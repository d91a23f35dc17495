// Copyright 2025 the Callout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=callout_overlay --heading-base-level=0

//! Callout Overlay: driving an anchored popup against a host.
//!
//! ## Overview
//!
//! The [`Tooltip`] controller owns the popup's lifecycle: Closed → `show()`
//! → Open → `close()` → Closed. On `show()` it captures the anchor and
//! screen size once, resolves the placement policy, runs the solver and the
//! shape builders from the sibling crates, and hands the host an ordered
//! pair of layers (dimmed background first, panel on top). Pointer events
//! flow back in through two handlers and may dismiss the popup according to
//! the configured policy.
//!
//! ## Host boundary
//!
//! The controller never draws, schedules, or hit-tests by itself. Everything
//! it needs from the embedding toolkit is the [`OverlayHost`] trait: layer
//! insertion/removal, opacity control, a linear fade primitive, and a
//! one-shot "after the next rendered frame" notice. Layers carry plain path
//! and color data; the host executes them however it renders.
//!
//! ## Pointer dismissal
//!
//! Two flags span four behaviors, realized as the background layer's
//! [`HitTestMode`] plus the controller's handlers:
//!
//! | dismiss | block | mode | behavior |
//! |---|---|---|---|
//! | true | true | opaque | every tap closes |
//! | true | false | translucent | pointer-down outside the cutout closes, event passes through |
//! | false | true | opaque | events swallowed, never closes |
//! | false | false | ignore | events pass through, never closes |
//!
//! Hosts route taps on an opaque background to
//! [`Tooltip::on_background_tap`] and observed pointer-downs under a
//! translucent one to [`Tooltip::on_pointer_down`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod decor;
mod host;
mod tooltip;

pub use host::{BackgroundLayer, HitTestMode, LayerKind, OverlayHost, PanelLayer};
pub use tooltip::{Tooltip, TooltipConfig};
