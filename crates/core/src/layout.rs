//! Conversions between cube coordinates and plane (screen) coordinates. See
//! the [hex](crate::hex) module docs for a description of both systems.
//!
//! The math here follows the layout section of
//! https://www.redblobgames.com/grids/hexagons/implementation.html#layout

use crate::{
    config::LayoutConfig,
    hex::{CubePoint, FractionalCubePoint},
    util::unit::{Point2, Vector2},
};
use nalgebra::Matrix2;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use strum::{Display, EnumString};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Which way the hexagons are turned. This determines the matrices used to
/// convert between cube and plane coordinates, and where the first corner of
/// each hexagon sits.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Orientation {
    /// A vertex at the top and bottom of each hexagon; rows are horizontal
    Pointy,
    /// A flat side at the top and bottom of each hexagon; columns are
    /// vertical
    Flat,
}

impl Orientation {
    /// The matrix that maps `(q, r)` onto the plane, for a hexagon size of 1
    pub fn forward(self) -> Matrix2<f64> {
        match self {
            Self::Pointy => Matrix2::new(SQRT_3, SQRT_3 / 2.0, 0.0, 3.0 / 2.0),
            Self::Flat => Matrix2::new(3.0 / 2.0, 0.0, SQRT_3 / 2.0, SQRT_3),
        }
    }

    /// The inverse of [Self::forward]. Written out rather than computed so
    /// that the two stay exactly in sync with the reference values.
    pub fn inverse(self) -> Matrix2<f64> {
        match self {
            Self::Pointy => {
                Matrix2::new(SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0)
            }
            Self::Flat => {
                Matrix2::new(2.0 / 3.0, 0.0, -1.0 / 3.0, SQRT_3 / 3.0)
            }
        }
    }

    /// Angle of the first corner, in sixths of a full turn
    pub fn start_angle(self) -> f64 {
        match self {
            Self::Pointy => 0.5,
            Self::Flat => 0.0,
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::Pointy
    }
}

/// A layout maps the hex grid onto a 2D plane. It holds no grid data, so the
/// size and origin can be changed at any time (e.g. on window resize) without
/// affecting the cells themselves, only where they get drawn.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    orientation: Orientation,
    /// Distance from a hexagon's center to any of its corners, per axis. Use
    /// the same value on both axes for regular hexagons.
    size: Vector2,
    /// Where the center of cell `(0, 0, 0)` lands on the plane
    origin: Point2,
}

impl Layout {
    pub fn new(
        orientation: Orientation,
        size: Vector2,
        origin: Point2,
    ) -> Self {
        Self {
            orientation,
            size,
            origin,
        }
    }

    /// Create a layout for the given config, centered on the plane origin
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self::new(
            config.orientation,
            Vector2::uniform(config.cell_size),
            Point2::ORIGIN,
        )
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn size(&self) -> Vector2 {
        self.size
    }

    pub fn set_size(&mut self, size: Vector2) {
        self.size = size;
    }

    pub fn origin(&self) -> Point2 {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Point2) {
        self.origin = origin;
    }

    /// Get the center of a cell on the plane
    pub fn to_plane(&self, hex: CubePoint) -> Point2 {
        let axial =
            nalgebra::Vector2::new(f64::from(hex.q()), f64::from(hex.r()));
        let offset: Vector2 = (self.orientation.forward() * axial).into();
        self.origin + offset.scale(self.size)
    }

    /// Map a plane point into cube space without snapping it to a cell
    pub fn to_fractional_hex(&self, point: Point2) -> FractionalCubePoint {
        let unscaled: nalgebra::Vector2<f64> =
            (point - self.origin).unscale(self.size).into();
        let axial = self.orientation.inverse() * unscaled;
        FractionalCubePoint::new_qr(axial.x, axial.y)
    }

    /// Get the cell that contains the given plane point. The returned cell
    /// isn't necessarily part of any grid; use
    /// [Grid::get_cell](crate::Grid::get_cell) to check.
    pub fn to_hex(&self, point: Point2) -> CubePoint {
        self.to_fractional_hex(point).round()
    }

    /// Convert a point in screen (device) space to plane space. `canvas_origin`
    /// is where the plane origin sits on the screen, e.g. the center of the
    /// canvas element.
    pub fn screen_to_plane(screen: Point2, canvas_origin: Point2) -> Point2 {
        Point2::ORIGIN + (screen - canvas_origin)
    }

    /// Shorthand for [Self::screen_to_plane] followed by [Self::to_hex]
    pub fn screen_to_hex(
        &self,
        screen: Point2,
        canvas_origin: Point2,
    ) -> CubePoint {
        self.to_hex(Self::screen_to_plane(screen, canvas_origin))
    }

    /// Get the offset from a hexagon's center to one of its corners. Corner
    /// indexes wrap around, so any index is valid; `0..6` covers each corner
    /// once.
    pub fn corner_offset(&self, corner: usize) -> Vector2 {
        let angle =
            2.0 * PI * (self.orientation.start_angle() - corner as f64) / 6.0;
        Vector2::new(self.size.x * angle.cos(), self.size.y * angle.sin())
    }

    /// Get all 6 corners of a cell's hexagon on the plane. To draw a closed
    /// outline, start the path at corner 5 then line to corners 0 through 5.
    pub fn polygon_corners(&self, hex: CubePoint) -> [Point2; 6] {
        let center = self.to_plane(hex);
        [0, 1, 2, 3, 4, 5].map(|corner| center + self.corner_offset(corner))
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::HexError,
        grid::region::{shape_region, RegionSize},
    };
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_inverse_matches_forward() {
        for orientation in [Orientation::Pointy, Orientation::Flat] {
            let identity = orientation.forward() * orientation.inverse();
            assert_approx_eq!(identity[(0, 0)], 1.0);
            assert_approx_eq!(identity[(0, 1)], 0.0);
            assert_approx_eq!(identity[(1, 0)], 0.0);
            assert_approx_eq!(identity[(1, 1)], 1.0);
        }
    }

    #[test]
    fn test_to_plane_pointy() {
        let layout = Layout::new(
            Orientation::Pointy,
            Vector2::uniform(10.0),
            Point2::ORIGIN,
        );
        let east = layout.to_plane(CubePoint::new_qr(1, 0));
        assert_approx_eq!(east.x, 10.0 * SQRT_3);
        assert_approx_eq!(east.y, 0.0);

        let south_east = layout.to_plane(CubePoint::new_qr(0, 1));
        assert_approx_eq!(south_east.x, 5.0 * SQRT_3);
        assert_approx_eq!(south_east.y, 15.0);
    }

    #[test]
    fn test_to_plane_flat_with_origin() {
        let layout = Layout::new(
            Orientation::Flat,
            Vector2::new(2.0, 4.0),
            Point2::new(100.0, 50.0),
        );
        let point = layout.to_plane(CubePoint::new_qr(2, -1));
        // x = 1.5 * 2 * 2 + 100, y = (√3/2 * 2 - √3) * 4 + 50
        assert_approx_eq!(point.x, 106.0);
        assert_approx_eq!(point.y, 50.0);
        assert_eq!(
            layout.to_plane(CubePoint::ORIGIN),
            Point2::new(100.0, 50.0)
        );
    }

    #[test]
    fn test_round_trip() {
        let layouts = [
            Layout::new(
                Orientation::Pointy,
                Vector2::uniform(15.0),
                Point2::ORIGIN,
            ),
            Layout::new(
                Orientation::Flat,
                Vector2::uniform(7.5),
                Point2::new(-40.0, 12.5),
            ),
            Layout::new(
                Orientation::Pointy,
                Vector2::new(3.0, 11.0),
                Point2::new(320.0, 240.0),
            ),
        ];
        let region = shape_region(RegionSize::new(17, 12), |_| false);
        for layout in layouts {
            for pos in region.keys() {
                assert_eq!(
                    layout.to_hex(layout.to_plane(*pos)),
                    *pos,
                    "round trip failed for {} with {:?}",
                    pos,
                    layout
                );
            }
        }
    }

    #[test]
    fn test_to_hex_near_center() {
        let layout = Layout::default();
        let center = layout.to_plane(CubePoint::new_qr(3, -2));
        // Anything well inside the hexagon maps back to the same cell
        for corner in 0..6 {
            let nudge = layout.corner_offset(corner) * 0.8;
            assert_eq!(layout.to_hex(center + nudge), CubePoint::new_qr(3, -2));
        }
    }

    #[test]
    fn test_to_hex_far_outside() {
        let layout = Layout::default();
        let limit = CubePoint::MAX_COMPONENT;
        let hex = layout.to_hex(Point2::new(1e12, 1e12));
        assert_eq!(hex, CubePoint::new_qr(limit, limit));
        assert_eq!(
            HexError::CellNotFound(hex).to_string(),
            format!("no cell at {} in the current region", hex)
        );
        assert!(layout.to_hex(Point2::new(-1e12, 1e12)).length() > 0);
    }

    #[test]
    fn test_screen_to_hex() {
        let layout = Layout::new(
            Orientation::Pointy,
            Vector2::uniform(10.0),
            Point2::ORIGIN,
        );
        let canvas_origin = Point2::new(400.0, 300.0);
        assert_eq!(
            Layout::screen_to_plane(Point2::new(410.0, 290.0), canvas_origin),
            Point2::new(10.0, -10.0)
        );
        assert_eq!(
            layout.screen_to_hex(canvas_origin, canvas_origin),
            CubePoint::ORIGIN
        );
        assert_eq!(
            layout.screen_to_hex(
                Point2::new(400.0 + 10.0 * SQRT_3, 300.0),
                canvas_origin
            ),
            CubePoint::new_qr(1, 0)
        );
    }

    #[test]
    fn test_corner_offsets() {
        let pointy = Layout::new(
            Orientation::Pointy,
            Vector2::uniform(10.0),
            Point2::ORIGIN,
        );
        // Pointy corner 0 is 30° off the x axis, toward +y
        let corner = pointy.corner_offset(0);
        assert_approx_eq!(corner.x, 5.0 * SQRT_3);
        assert_approx_eq!(corner.y, 5.0);
        // Wrapping indexes land on the same corner
        assert_approx_eq!(pointy.corner_offset(6).x, corner.x);
        assert_approx_eq!(pointy.corner_offset(6).y, corner.y);

        let flat = Layout::new(
            Orientation::Flat,
            Vector2::new(4.0, 2.0),
            Point2::ORIGIN,
        );
        let corner = flat.corner_offset(0);
        assert_approx_eq!(corner.x, 4.0);
        assert_approx_eq!(corner.y, 0.0);
        let corner = flat.corner_offset(3);
        assert_approx_eq!(corner.x, -4.0);
        assert_approx_eq!(corner.y, 0.0);
    }

    #[test]
    fn test_polygon_corners() {
        let layout = Layout::new(
            Orientation::Pointy,
            Vector2::uniform(10.0),
            Point2::new(5.0, 5.0),
        );
        let hex = CubePoint::new_qr(-2, 1);
        let center = layout.to_plane(hex);
        let corners = layout.polygon_corners(hex);
        for corner in corners.iter() {
            let offset = *corner - center;
            assert_approx_eq!(offset.x.hypot(offset.y), 10.0);
        }
        // Consecutive corners (including the 5 -> 0 wraparound) are one side
        // length apart, so the outline closes without gaps
        for i in 0..6 {
            let side = corners[(i + 1) % 6] - corners[i];
            assert_approx_eq!(side.x.hypot(side.y), 10.0);
        }
    }
}
