// Copyright 2025 the Callout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bubble outline: a rounded rectangle with a notch, plus its paint ops.

use alloc::vec::Vec;
use core::f64::consts::{FRAC_PI_2, PI};

use kurbo::{Arc, BezPath, Insets, Point, Rect, RoundedRectRadii, Vec2};
use peniko::Color;
use peniko::color::palette;

use callout_layout::{ArrowPlacement, ArrowSpec, Direction, EdgeOffsets};

/// Flattening tolerance for corner arcs.
const ARC_TOLERANCE: f64 = 0.1;

/// Drop shadow drawn beneath the bubble fill.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Shadow {
    /// Shadow color.
    pub color: Color,
    /// Gaussian blur radius.
    pub blur_radius: f64,
    /// Outset applied to the path before blurring.
    pub spread_radius: f64,
    /// Offset of the shadow from the path.
    pub offset: Vec2,
}

/// Colors and stroke width for the bubble.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanelStyle {
    /// Interior fill color; also used for flush-edge compensation strokes.
    pub background: Color,
    /// Outline stroke color.
    pub border_color: Color,
    /// Outline stroke width.
    pub border_width: f64,
    /// Optional drop shadow.
    pub shadow: Option<Shadow>,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            background: palette::css::WHITE,
            border_color: palette::css::BLACK,
            border_width: 2.0,
            shadow: None,
        }
    }
}

/// One instruction for the host's drawing surface.
///
/// Ops are emitted in paint order; the host executes them as-is.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintOp {
    /// Fill `path` with `color`, drawing `shadow` beneath it when present.
    Fill {
        /// The path to fill.
        path: BezPath,
        /// Fill color.
        color: Color,
        /// Shadow drawn before the fill.
        shadow: Option<Shadow>,
    },
    /// Stroke `path` with `color` at `width`.
    Stroke {
        /// The path to stroke.
        path: BezPath,
        /// Stroke color.
        color: Color,
        /// Stroke width.
        width: f64,
    },
}

/// Margin the arrow needs between the solver's rectangle and the bubble.
///
/// The solver places the panel's near edge on the anchor; the notch and its
/// tip gap live in this margin, so the bubble rectangle is the panel
/// rectangle shrunk by these insets (`rect - arrow_insets(..)`).
pub fn arrow_insets(direction: Direction, arrow: &ArrowSpec) -> Insets {
    let margin = arrow.length + arrow.tip_distance;
    match direction {
        Direction::Down => Insets {
            x0: 0.0,
            y0: margin,
            x1: 0.0,
            y1: 0.0,
        },
        Direction::Up => Insets {
            x0: 0.0,
            y0: 0.0,
            x1: 0.0,
            y1: margin,
        },
        Direction::Right => Insets {
            x0: margin,
            y0: 0.0,
            x1: 0.0,
            y1: 0.0,
        },
        Direction::Left => Insets {
            x0: 0.0,
            y0: 0.0,
            x1: margin,
            y1: 0.0,
        },
    }
}

/// Builds the bubble's outline: one closed contour.
///
/// The contour walks the rounded rectangle clockwise from the top-left
/// corner, replacing the straight run of the anchor-facing side with
/// base-start → apex → base-end. Corner arcs are quarter circles, omitted
/// at radius zero; pass radii through [`callout_layout::flush_radii`] first
/// so flush edges stay square.
///
/// The apex sits [`ArrowSpec::tip_distance`] short of the anchor on the
/// perpendicular axis. Along the side, a centered arrow keeps the apex on
/// the anchor's coordinate (clamped into the rectangle so it cannot escape
/// the panel); a corner-placed arrow centers the apex on its clamped base.
pub fn bubble_outline(
    rect: Rect,
    direction: Direction,
    anchor: Point,
    radii: RoundedRectRadii,
    arrow: &ArrowSpec,
) -> BezPath {
    let RoundedRectRadii {
        top_left: rtl,
        top_right: rtr,
        bottom_right: rbr,
        bottom_left: rbl,
    } = radii;

    // Notch geometry for the one side that carries it.
    let (mut top, mut right, mut bottom, mut left) = (None, None, None, None);
    match direction {
        Direction::Down => {
            let (lo, hi, along) = notch_span(rect.x0, rect.x1, rtl, rtr, anchor.x, arrow);
            top = Some((lo, hi, Point::new(along, anchor.y + arrow.tip_distance)));
        }
        Direction::Up => {
            let (lo, hi, along) = notch_span(rect.x0, rect.x1, rbl, rbr, anchor.x, arrow);
            bottom = Some((lo, hi, Point::new(along, anchor.y - arrow.tip_distance)));
        }
        Direction::Left => {
            let (lo, hi, along) = notch_span(rect.y0, rect.y1, rtr, rbr, anchor.y, arrow);
            right = Some((lo, hi, Point::new(anchor.x - arrow.tip_distance, along)));
        }
        Direction::Right => {
            let (lo, hi, along) = notch_span(rect.y0, rect.y1, rtl, rbl, anchor.y, arrow);
            left = Some((lo, hi, Point::new(anchor.x + arrow.tip_distance, along)));
        }
    }

    let mut path = BezPath::new();
    path.move_to((rect.x0 + rtl, rect.y0));
    // Top side, left to right.
    if let Some((lo, hi, apex)) = top {
        path.line_to((lo, rect.y0));
        path.line_to(apex);
        path.line_to((hi, rect.y0));
    }
    path.line_to((rect.x1 - rtr, rect.y0));
    corner_arc(
        &mut path,
        Point::new(rect.x1 - rtr, rect.y0 + rtr),
        rtr,
        -FRAC_PI_2,
    );
    // Right side, top to bottom.
    if let Some((lo, hi, apex)) = right {
        path.line_to((rect.x1, lo));
        path.line_to(apex);
        path.line_to((rect.x1, hi));
    }
    path.line_to((rect.x1, rect.y1 - rbr));
    corner_arc(
        &mut path,
        Point::new(rect.x1 - rbr, rect.y1 - rbr),
        rbr,
        0.0,
    );
    // Bottom side, right to left.
    if let Some((lo, hi, apex)) = bottom {
        path.line_to((hi, rect.y1));
        path.line_to(apex);
        path.line_to((lo, rect.y1));
    }
    path.line_to((rect.x0 + rbl, rect.y1));
    corner_arc(
        &mut path,
        Point::new(rect.x0 + rbl, rect.y1 - rbl),
        rbl,
        FRAC_PI_2,
    );
    // Left side, bottom to top.
    if let Some((lo, hi, apex)) = left {
        path.line_to((rect.x0, hi));
        path.line_to(apex);
        path.line_to((rect.x0, lo));
    }
    path.line_to((rect.x0, rect.y0 + rtl));
    corner_arc(
        &mut path,
        Point::new(rect.x0 + rtl, rect.y0 + rtl),
        rtl,
        PI,
    );
    path.close_path();
    path
}

/// Notch base interval and apex coordinate along one side.
///
/// `side_lo`/`side_hi` span the full side; `r_lo`/`r_hi` are the adjacent
/// corner radii. Centered mode clamps a base symmetric around the anchor
/// into the rounding-free span; corner mode starts the base at the offset
/// from the leading (low) corner and never lets it pass the side's end.
/// Degenerate spans collapse instead of inverting.
fn notch_span(
    side_lo: f64,
    side_hi: f64,
    r_lo: f64,
    r_hi: f64,
    anchor: f64,
    arrow: &ArrowSpec,
) -> (f64, f64, f64) {
    let bw = arrow.base_width;
    match arrow.placement {
        ArrowPlacement::Centered => {
            let lo = (anchor - bw / 2.0)
                .min(side_hi - r_hi - bw)
                .max(side_lo + r_lo);
            let hi = (anchor + bw / 2.0)
                .max(side_lo + r_lo + bw)
                .min(side_hi - r_hi)
                .max(lo);
            let along = anchor.max(side_lo).min(side_hi);
            (lo, hi, along)
        }
        ArrowPlacement::FromCorner(offset) => {
            let lo = (side_lo + offset).min(side_hi);
            let hi = (lo + bw).min(side_hi);
            (lo, hi, (lo + hi) / 2.0)
        }
    }
}

/// Appends a clockwise quarter-circle corner, or nothing at radius zero.
fn corner_arc(path: &mut BezPath, center: Point, radius: f64, start_angle: f64) {
    if radius > 0.0 {
        let arc = Arc::new(center, Vec2::new(radius, radius), start_angle, FRAC_PI_2, 0.0);
        path.extend(arc.append_iter(ARC_TOLERANCE));
    }
}

/// Paint ops for the bubble: fill (with shadow), border, flush-edge strokes.
///
/// Every side whose fixed offset is exactly zero gets a stroke in the
/// background color drawn directly over the border there, merging the bubble
/// into the screen edge. The compensation stroke is part of the contract,
/// not an optimization; hosts must execute ops in order.
pub fn bubble_paint_ops(
    outline: &BezPath,
    rect: Rect,
    offsets: &EdgeOffsets,
    style: &PanelStyle,
) -> Vec<PaintOp> {
    let mut ops = Vec::with_capacity(6);
    ops.push(PaintOp::Fill {
        path: outline.clone(),
        color: style.background,
        shadow: style.shadow,
    });
    ops.push(PaintOp::Stroke {
        path: outline.clone(),
        color: style.border_color,
        width: style.border_width,
    });

    let mut flush_edge = |a: Point, b: Point| {
        let mut path = BezPath::new();
        path.move_to(a);
        path.line_to(b);
        ops.push(PaintOp::Stroke {
            path,
            color: style.background,
            width: style.border_width,
        });
    };
    if offsets.top == Some(0.0) {
        flush_edge(Point::new(rect.x0, rect.y0), Point::new(rect.x1, rect.y0));
    }
    if offsets.right == Some(0.0) {
        flush_edge(Point::new(rect.x1, rect.y0), Point::new(rect.x1, rect.y1));
    }
    if offsets.bottom == Some(0.0) {
        flush_edge(Point::new(rect.x0, rect.y1), Point::new(rect.x1, rect.y1));
    }
    if offsets.left == Some(0.0) {
        flush_edge(Point::new(rect.x0, rect.y0), Point::new(rect.x0, rect.y1));
    }
    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{PathEl, Shape};
    use proptest::prelude::*;

    const RECT: Rect = Rect::new(50.0, 100.0, 350.0, 300.0);

    const DIRECTIONS: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    fn outline_for(direction: Direction, placement: ArrowPlacement) -> BezPath {
        let arrow = ArrowSpec {
            placement,
            ..Default::default()
        };
        // Anchor beyond the notch side, one tip distance + length away.
        let anchor = match direction {
            Direction::Down => Point::new(200.0, RECT.y0 - 22.0),
            Direction::Up => Point::new(200.0, RECT.y1 + 22.0),
            Direction::Left => Point::new(RECT.x1 + 22.0, 200.0),
            Direction::Right => Point::new(RECT.x0 - 22.0, 200.0),
        };
        bubble_outline(
            RECT,
            direction,
            anchor,
            RoundedRectRadii::from_single_radius(10.0),
            &arrow,
        )
    }

    fn first_point(path: &BezPath) -> Point {
        match path.elements().first() {
            Some(PathEl::MoveTo(p)) => *p,
            other => panic!("path must start with MoveTo, got {other:?}"),
        }
    }

    fn last_point(path: &BezPath) -> Point {
        // Point reached just before ClosePath.
        let els = path.elements();
        assert!(
            matches!(els.last(), Some(PathEl::ClosePath)),
            "path must end closed"
        );
        match els[els.len() - 2] {
            PathEl::LineTo(p) => p,
            PathEl::CurveTo(_, _, p) => p,
            PathEl::QuadTo(_, p) => p,
            other => panic!("unexpected element before close: {other:?}"),
        }
    }

    #[test]
    fn one_closed_contour_for_every_direction_and_mode() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            for placement in [ArrowPlacement::Centered, ArrowPlacement::FromCorner(15.0)] {
                let path = outline_for(direction, placement);
                let moves = path
                    .elements()
                    .iter()
                    .filter(|el| matches!(el, PathEl::MoveTo(_)))
                    .count();
                assert_eq!(moves, 1, "{direction:?}/{placement:?}: single subpath");
                let start = first_point(&path);
                let end = last_point(&path);
                assert!(
                    (start - end).hypot() < 1e-6,
                    "{direction:?}/{placement:?}: start {start:?} != end {end:?}"
                );
            }
        }
    }

    #[test]
    fn centered_apex_tracks_the_anchor() {
        let arrow = ArrowSpec::default();
        let anchor = Point::new(180.0, RECT.y0 - 22.0);
        let path = bubble_outline(
            RECT,
            Direction::Down,
            anchor,
            RoundedRectRadii::from_single_radius(10.0),
            &arrow,
        );
        // The apex is the only point above the rectangle's top edge.
        let apex = apex_of(&path, RECT);
        assert_eq!(apex.x, anchor.x);
        assert_eq!(apex.y, anchor.y + arrow.tip_distance);
    }

    #[test]
    fn centered_apex_clamps_to_panel_bounds() {
        let arrow = ArrowSpec::default();
        // Anchor far beyond the right end of the side.
        let anchor = Point::new(RECT.x1 + 100.0, RECT.y0 - 22.0);
        let path = bubble_outline(
            RECT,
            Direction::Down,
            anchor,
            RoundedRectRadii::from_single_radius(10.0),
            &arrow,
        );
        let apex = apex_of(&path, RECT);
        assert_eq!(apex.x, RECT.x1);
        // The base stays inside the rounding-free span.
        let (lo, hi, _) = notch_span(
            RECT.x0,
            RECT.x1,
            10.0,
            10.0,
            anchor.x,
            &arrow,
        );
        assert!(lo >= RECT.x0 + 10.0);
        assert!(hi <= RECT.x1 - 10.0);
        assert!(lo <= hi);
    }

    #[test]
    fn corner_base_starts_at_the_offset() {
        let arrow = ArrowSpec {
            placement: ArrowPlacement::FromCorner(30.0),
            base_width: 20.0,
            ..Default::default()
        };
        let (lo, hi, along) = notch_span(RECT.x0, RECT.x1, 10.0, 10.0, 0.0, &arrow);
        assert_eq!(lo, RECT.x0 + 30.0);
        assert_eq!(hi, lo + 20.0);
        assert_eq!(along, (lo + hi) / 2.0);
    }

    #[test]
    fn corner_base_never_passes_the_side_end() {
        let arrow = ArrowSpec {
            placement: ArrowPlacement::FromCorner(1000.0),
            base_width: 20.0,
            ..Default::default()
        };
        let (lo, hi, _) = notch_span(RECT.x0, RECT.x1, 10.0, 10.0, 0.0, &arrow);
        assert_eq!(lo, RECT.x1);
        assert_eq!(hi, RECT.x1);
    }

    #[test]
    fn degenerate_centered_span_collapses() {
        // Side shorter than radii + base width.
        let arrow = ArrowSpec {
            base_width: 50.0,
            ..Default::default()
        };
        let (lo, hi, _) = notch_span(0.0, 60.0, 20.0, 20.0, 30.0, &arrow);
        assert!(lo <= hi);
        assert!(lo >= 20.0);
    }

    #[test]
    fn insets_cover_the_anchor_side_only() {
        let arrow = ArrowSpec {
            length: 20.0,
            tip_distance: 2.0,
            ..Default::default()
        };
        assert_eq!(arrow_insets(Direction::Down, &arrow).y0, 22.0);
        assert_eq!(arrow_insets(Direction::Down, &arrow).y1, 0.0);
        assert_eq!(arrow_insets(Direction::Up, &arrow).y1, 22.0);
        assert_eq!(arrow_insets(Direction::Left, &arrow).x1, 22.0);
        assert_eq!(arrow_insets(Direction::Right, &arrow).x0, 22.0);
    }

    #[test]
    fn apex_pokes_out_of_the_inset_rect() {
        // Solver rect touching the anchor, then inset for the arrow: the
        // apex must land tip_distance short of the anchor.
        let arrow = ArrowSpec::default();
        let anchor = Point::new(200.0, 100.0);
        let panel = Rect::new(20.0, 100.0, 380.0, 300.0);
        let bubble = panel - arrow_insets(Direction::Down, &arrow);
        assert_eq!(bubble.y0, 100.0 + arrow.length + arrow.tip_distance);
        let path = bubble_outline(
            bubble,
            Direction::Down,
            anchor,
            RoundedRectRadii::from_single_radius(10.0),
            &arrow,
        );
        let apex = apex_of(&path, bubble);
        assert_eq!(apex.y, anchor.y + arrow.tip_distance);
        assert_eq!(bubble.y0 - apex.y, arrow.length);
    }

    #[test]
    fn paint_ops_fill_then_border() {
        let style = PanelStyle::default();
        let path = outline_for(Direction::Down, ArrowPlacement::Centered);
        let ops = bubble_paint_ops(&path, RECT, &EdgeOffsets::NONE, &style);
        assert_eq!(ops.len(), 2);
        assert!(matches!(&ops[0], PaintOp::Fill { color, .. } if *color == style.background));
        assert!(
            matches!(&ops[1], PaintOp::Stroke { color, width, .. }
                if *color == style.border_color && *width == style.border_width)
        );
    }

    #[test]
    fn flush_edges_get_compensation_strokes() {
        let style = PanelStyle::default();
        let offsets = EdgeOffsets {
            left: Some(0.0),
            bottom: Some(0.0),
            top: Some(15.0),
            ..EdgeOffsets::NONE
        };
        let path = outline_for(Direction::Down, ArrowPlacement::Centered);
        let ops = bubble_paint_ops(&path, RECT, &offsets, &style);
        // fill + border + two flush strokes; the 15px top offset is not flush.
        assert_eq!(ops.len(), 4);
        for op in &ops[2..] {
            assert!(
                matches!(op, PaintOp::Stroke { color, .. } if *color == style.background),
                "flush strokes use the background color"
            );
        }
    }

    #[test]
    fn outline_bbox_is_rect_plus_notch() {
        let path = outline_for(Direction::Left, ArrowPlacement::Centered);
        let bbox = path.bounding_box();
        assert_eq!(bbox.y0, RECT.y0);
        assert_eq!(bbox.y1, RECT.y1);
        assert_eq!(bbox.x0, RECT.x0);
        // Notch reaches out to the apex on the right.
        assert!(bbox.x1 > RECT.x1);
    }

    proptest! {
        /// One closed contour wherever the anchor lands, for every
        /// direction, centering mode, and rounding.
        #[test]
        fn outline_always_closes(
            dir_idx in 0_usize..4,
            ax in -100.0_f64..500.0,
            ay in -100.0_f64..900.0,
            radius in 0.0_f64..24.0,
            from_corner in proptest::option::of(0.0_f64..400.0),
        ) {
            let arrow = ArrowSpec {
                placement: from_corner
                    .map_or(ArrowPlacement::Centered, ArrowPlacement::FromCorner),
                ..Default::default()
            };
            let path = bubble_outline(
                RECT,
                DIRECTIONS[dir_idx],
                Point::new(ax, ay),
                RoundedRectRadii::from_single_radius(radius),
                &arrow,
            );
            let moves = path
                .elements()
                .iter()
                .filter(|el| matches!(el, PathEl::MoveTo(_)))
                .count();
            prop_assert_eq!(moves, 1);
            prop_assert!(matches!(path.elements().last(), Some(PathEl::ClosePath)));
            let start = first_point(&path);
            let end = last_point(&path);
            prop_assert!((start - end).hypot() < 1e-6);
        }
    }

    /// Extracts the one outline vertex lying outside the rectangle.
    fn apex_of(path: &BezPath, rect: Rect) -> Point {
        let mut points: Vec<Point> = Vec::new();
        for el in path.elements() {
            match el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => points.push(*p),
                PathEl::CurveTo(_, _, p) => points.push(*p),
                PathEl::QuadTo(_, p) => points.push(*p),
                PathEl::ClosePath => {}
            }
        }
        let grown = rect.inset(1e-9);
        points
            .into_iter()
            .find(|p| !grown.contains(*p))
            .expect("outline must have an apex outside the rectangle")
    }
}
