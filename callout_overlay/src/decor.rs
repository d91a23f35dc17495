// Copyright 2025 the Callout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement constants for the optional close-button decoration.
//!
//! Icon presentation belongs to the host; the controller only answers where
//! the button goes relative to the bubble. The numbers are presentation
//! tuning, kept as named constants rather than derived.

use kurbo::{Point, Rect};

/// Side length of the square close-button hit area.
pub const CLOSE_BUTTON_SIZE: f64 = 30.0;

/// Gap between an inside button and the bubble's top-right corner.
pub const CLOSE_BUTTON_INSET: f64 = 2.0;

/// Gap between an outside button and the bubble's top edge.
pub const CLOSE_BUTTON_GAP: f64 = 3.0;

/// Whether the close button sits within the bubble or above it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum CloseButtonPosition {
    /// Inside the bubble, hugging the top-right corner.
    Inside,
    /// Outside the bubble, above its top-right corner.
    Outside,
}

/// Top-left origin of the close button for a bubble rectangle.
///
/// `bubble` is the inset rectangle the outline is built on (the arrow
/// margin is already excluded), so the button never collides with the
/// notch.
pub fn close_button_origin(bubble: Rect, position: CloseButtonPosition) -> Point {
    match position {
        CloseButtonPosition::Inside => Point::new(
            bubble.x1 - CLOSE_BUTTON_SIZE - CLOSE_BUTTON_INSET,
            bubble.y0 + CLOSE_BUTTON_INSET,
        ),
        CloseButtonPosition::Outside => Point::new(
            bubble.x1 - CLOSE_BUTTON_SIZE,
            bubble.y0 - CLOSE_BUTTON_SIZE - CLOSE_BUTTON_GAP,
        ),
    }
}
