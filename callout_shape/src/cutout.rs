// Copyright 2025 the Callout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dim-overlay region: the screen rectangle minus an optional cutout.

use kurbo::{BezPath, Ellipse, Point, Rect, RoundedRect, Shape};

/// Flattening tolerance for cutout contours.
const CUTOUT_TOLERANCE: f64 = 0.1;

/// Shape of the cutout punched out of the dim overlay.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CutoutShape {
    /// The oval inscribed in the cutout rectangle.
    Oval,
    /// A rounded rectangle with one radius for all corners.
    RoundedRect {
        /// Corner radius.
        radius: f64,
    },
}

/// A region excluded from the dimmed background, exposing the anchor area.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CutoutSpec {
    /// The cutout's bounding rectangle.
    pub rect: Rect,
    /// How the cutout fills that rectangle.
    pub shape: CutoutShape,
}

impl CutoutSpec {
    /// Whether a point lies inside the cutout.
    ///
    /// This is the pointer-classification test; it stands on its own and is
    /// meaningful even when no background layer is rendered at all.
    pub fn contains(&self, point: Point) -> bool {
        match self.shape {
            CutoutShape::Oval => Ellipse::from_rect(self.rect).contains(point),
            CutoutShape::RoundedRect { radius } => {
                RoundedRect::from_rect(self.rect, radius).contains(point)
            }
        }
    }
}

/// The dim overlay's fill region.
///
/// [`DimRegion::path`] holds the screen rectangle and, when a cutout is
/// present, the cutout contour as a second subpath. Filling it with the
/// even-odd rule leaves the cutout transparent; this is the path form of
/// subtracting the cutout from the screen.
#[derive(Clone, Debug, PartialEq)]
pub struct DimRegion {
    /// Fill path; apply the even-odd rule.
    pub path: BezPath,
    cutout: Option<CutoutSpec>,
}

impl DimRegion {
    /// The cutout this region was built with, if any.
    pub fn cutout(&self) -> Option<&CutoutSpec> {
        self.cutout.as_ref()
    }

    /// Whether a point lies inside the cutout.
    ///
    /// Tests the cutout alone, not the subtracted region; with no cutout,
    /// nothing is inside.
    pub fn cutout_contains(&self, point: Point) -> bool {
        self.cutout.is_some_and(|c| c.contains(point))
    }
}

/// Builds the dim region for a screen rectangle and an optional cutout.
///
/// With no cutout the region is the unmodified screen rectangle.
pub fn dim_region(screen: Rect, cutout: Option<CutoutSpec>) -> DimRegion {
    let mut path = screen.to_path(CUTOUT_TOLERANCE);
    if let Some(spec) = cutout {
        match spec.shape {
            CutoutShape::Oval => {
                path.extend(Ellipse::from_rect(spec.rect).path_elements(CUTOUT_TOLERANCE));
            }
            CutoutShape::RoundedRect { radius } => {
                path.extend(
                    RoundedRect::from_rect(spec.rect, radius).path_elements(CUTOUT_TOLERANCE),
                );
            }
        }
    }
    DimRegion { path, cutout }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    const SCREEN: Rect = Rect::new(0.0, 0.0, 400.0, 800.0);

    fn subpaths(path: &BezPath) -> usize {
        path.elements()
            .iter()
            .filter(|el| matches!(el, PathEl::MoveTo(_)))
            .count()
    }

    #[test]
    fn no_cutout_is_the_plain_screen_rect() {
        let region = dim_region(SCREEN, None);
        assert_eq!(region.path, SCREEN.to_path(0.1));
        assert_eq!(subpaths(&region.path), 1);
        assert!(region.cutout().is_none());
        assert!(!region.cutout_contains(Point::new(200.0, 400.0)));
    }

    #[test]
    fn cutout_adds_a_second_subpath() {
        let spec = CutoutSpec {
            rect: Rect::new(150.0, 350.0, 250.0, 450.0),
            shape: CutoutShape::Oval,
        };
        let region = dim_region(SCREEN, Some(spec));
        assert_eq!(subpaths(&region.path), 2);
        assert_eq!(region.path.bounding_box(), SCREEN);
    }

    #[test]
    fn oval_cutout_excludes_the_inscribed_oval_only() {
        let spec = CutoutSpec {
            rect: Rect::new(100.0, 100.0, 300.0, 200.0),
            shape: CutoutShape::Oval,
        };
        let region = dim_region(SCREEN, Some(spec));
        // Center of the oval.
        assert!(region.cutout_contains(Point::new(200.0, 150.0)));
        // Corner of the rectangle is outside the inscribed oval.
        assert!(!region.cutout_contains(Point::new(101.0, 101.0)));
        // On-axis extremes are inside.
        assert!(region.cutout_contains(Point::new(101.0, 150.0)));
        assert!(region.cutout_contains(Point::new(200.0, 199.0)));
        // Outside the rectangle entirely.
        assert!(!region.cutout_contains(Point::new(350.0, 150.0)));
    }

    #[test]
    fn rounded_rect_cutout_respects_corner_radius() {
        let spec = CutoutSpec {
            rect: Rect::new(100.0, 100.0, 200.0, 200.0),
            shape: CutoutShape::RoundedRect { radius: 30.0 },
        };
        let region = dim_region(SCREEN, Some(spec));
        assert!(region.cutout_contains(Point::new(150.0, 150.0)));
        // The very corner is shaved off by the radius.
        assert!(!region.cutout_contains(Point::new(102.0, 102.0)));
        // Edge midpoints survive.
        assert!(region.cutout_contains(Point::new(150.0, 101.0)));
    }

    #[test]
    fn containment_works_without_building_a_region() {
        // The classification test must not depend on the overlay existing.
        let spec = CutoutSpec {
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
            shape: CutoutShape::Oval,
        };
        assert!(spec.contains(Point::new(5.0, 5.0)));
        assert!(!spec.contains(Point::new(9.9, 9.9)));
    }
}
