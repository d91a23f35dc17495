// Copyright 2025 the Callout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for placement: direction, constraints, arrow geometry, and
//! the flush-radius rule.

use kurbo::RoundedRectRadii;
use thiserror::Error;

/// The side of the anchor the panel occupies.
///
/// The panel's near edge touches the anchor; the arrow notch is cut into
/// that edge and points back at it. [`Direction::Down`] means the panel
/// hangs below the anchor, in screen coordinates (y grows downward).
///
/// Every consumer matches on this exhaustively; there is no fallback
/// direction anywhere in the workspace.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Panel above the anchor.
    Up,
    /// Panel below the anchor.
    Down,
    /// Panel to the left of the anchor.
    Left,
    /// Panel to the right of the anchor.
    Right,
}

impl Direction {
    /// True for [`Self::Up`] and [`Self::Down`], whose primary axis is vertical.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

/// Optional fixed gaps between the panel and each screen edge.
///
/// A side left at `None` is unconstrained and is placed by the solver; a
/// side set to `Some(gap)` is satisfied exactly. `Some(0.0)` pins the panel
/// edge flush to the screen edge, which also suppresses corner rounding
/// there (see [`flush_radii`]).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct EdgeOffsets {
    /// Gap from the top screen edge.
    pub top: Option<f64>,
    /// Gap from the right screen edge.
    pub right: Option<f64>,
    /// Gap from the bottom screen edge.
    pub bottom: Option<f64>,
    /// Gap from the left screen edge.
    pub left: Option<f64>,
}

impl EdgeOffsets {
    /// No side constrained.
    pub const NONE: Self = Self {
        top: None,
        right: None,
        bottom: None,
        left: None,
    };
}

/// Size and offset constraints for the solver.
///
/// Invariant: `max >= min` on each axis whenever both are given. Checked by
/// [`SizeConstraints::validate`], which configuration constructors call
/// before anything is shown.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SizeConstraints {
    /// Minimum panel width.
    pub min_width: Option<f64>,
    /// Maximum panel width.
    pub max_width: Option<f64>,
    /// Minimum panel height.
    pub min_height: Option<f64>,
    /// Maximum panel height.
    pub max_height: Option<f64>,
    /// Fixed per-side screen-edge gaps.
    pub offsets: EdgeOffsets,
    /// Minimum screen-edge gap on sides with no fixed offset.
    pub outside_padding: f64,
}

impl Default for SizeConstraints {
    fn default() -> Self {
        Self {
            min_width: None,
            max_width: None,
            min_height: None,
            max_height: None,
            offsets: EdgeOffsets::NONE,
            outside_padding: 0.0,
        }
    }
}

impl SizeConstraints {
    /// Checks the per-axis `max >= min` invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let (Some(min), Some(max)) = (self.min_width, self.max_width)
            && max < min
        {
            return Err(ConfigError::WidthRange { min, max });
        }
        if let (Some(min), Some(max)) = (self.min_height, self.max_height)
            && max < min
        {
            return Err(ConfigError::HeightRange { min, max });
        }
        Ok(())
    }
}

/// Invalid configuration, reported before any layer is created.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// `max_width` is below `min_width`.
    #[error("max width {max} is below min width {min}")]
    WidthRange {
        /// The configured minimum.
        min: f64,
        /// The configured maximum.
        max: f64,
    },
    /// `max_height` is below `min_height`.
    #[error("max height {max} is below min height {min}")]
    HeightRange {
        /// The configured minimum.
        min: f64,
        /// The configured maximum.
        max: f64,
    },
}

/// Where the arrow sits along the panel's anchor-facing side.
///
/// Exactly one placement applies; the two-variant enum makes the
/// "both or neither" misconfiguration unrepresentable.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ArrowPlacement {
    /// Arrow base centered on the anchor's along-side coordinate.
    Centered,
    /// Arrow base starts at this distance from the side's leading corner
    /// (left corner for horizontal sides, top corner for vertical sides).
    FromCorner(f64),
}

/// Arrow geometry: the triangular notch cut into the anchor-facing side.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArrowSpec {
    /// Distance from the notch base to the apex.
    pub length: f64,
    /// Width of the notch base along the side.
    pub base_width: f64,
    /// Gap between the anchor and the apex.
    pub tip_distance: f64,
    /// Centered on the anchor or offset from the leading corner.
    pub placement: ArrowPlacement,
}

impl Default for ArrowSpec {
    fn default() -> Self {
        Self {
            length: 20.0,
            base_width: 20.0,
            tip_distance: 2.0,
            placement: ArrowPlacement::Centered,
        }
    }
}

fn is_flush(offset: Option<f64>) -> bool {
    offset == Some(0.0)
}

/// Zeroes the radius of every corner touching a flush edge.
///
/// A fixed offset of `0` pins the panel edge to the screen edge; rounding a
/// corner there would open a gap, so both corners adjacent to such an edge
/// lose their radius. Non-flush corners keep theirs.
pub fn flush_radii(radii: RoundedRectRadii, offsets: &EdgeOffsets) -> RoundedRectRadii {
    let flush = |corner: f64, a: Option<f64>, b: Option<f64>| {
        if is_flush(a) || is_flush(b) {
            0.0
        } else {
            corner
        }
    };
    RoundedRectRadii {
        top_left: flush(radii.top_left, offsets.top, offsets.left),
        top_right: flush(radii.top_right, offsets.top, offsets.right),
        bottom_right: flush(radii.bottom_right, offsets.bottom, offsets.right),
        bottom_left: flush(radii.bottom_left, offsets.bottom, offsets.left),
    }
}
