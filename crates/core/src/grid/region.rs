use crate::{
    grid::{Cell, Generation},
    hex::CubePoint,
    timed,
    util::unit::Vector2,
};
use derive_more::Display;
use fnv::FnvBuildHasher;
use serde::{Deserialize, Serialize};

/// Space left around the grid when sizing it to a viewport, in plane units
pub const DEFAULT_PADDING: Vector2 = Vector2::new(50.0, 50.0);

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Dimensions of the region that a grid covers, in cells. The region is an
/// "offset rectangle": `height` rows of `width` cells each, with every other
/// row shifted by half a cell so that the whole thing lines up into a
/// rectangle on a pointy layout. The region is centered on the origin cell.
#[derive(
    Copy, Clone, Debug, Default, Display, PartialEq, Eq, Serialize, Deserialize,
)]
#[display(fmt = "{}x{}", width, height)]
pub struct RegionSize {
    pub width: u16,
    pub height: u16,
}

impl RegionSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Calculate the largest region that fits within a viewport of the given
    /// size, leaving `padding` of empty space. Sizes are in plane units.
    /// `cell_size` is the layout size, i.e. center-to-corner distance per
    /// axis.
    ///
    /// This assumes a pointy layout. A flat layout gets the same region,
    /// which may not line up as neatly. A viewport too small for even one
    /// cell gives an empty region.
    pub fn fit_viewport(
        viewport: Vector2,
        padding: Vector2,
        cell_size: Vector2,
    ) -> Self {
        let available = viewport - padding;
        // Each cell is √3·size wide, and odd rows stick out by half a cell
        let width = (available.x / (SQRT_3 * cell_size.x) - 0.5).floor();
        // Each row adds 3/4 of a cell height (2·size), plus the 1/4 overhang
        // of the last row
        let height =
            ((4.0 * available.y / (2.0 * cell_size.y) - 1.0) / 3.0).floor();

        // Float -> int casts saturate, so huge viewports can't overflow
        Self::new(width.max(0.0) as u16, height.max(0.0) as u16)
    }

    /// Total number of cells in the region
    pub fn len(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over every point in the region, row by row (top to bottom),
    /// and left to right within each row
    pub fn points(self) -> impl Iterator<Item = CubePoint> {
        let width = i32::from(self.width);
        let height = i32::from(self.height);
        let q_min = -(width / 2);
        let r_min = -(height / 2);

        (r_min..r_min + height).flat_map(move |r| {
            // Floor division, so negative rows shift the same way as positive
            // ones
            let row_offset = -r.div_euclid(2);
            let start = q_min + row_offset;
            (start..start + width).map(move |q| CubePoint::new_qr(q, r))
        })
    }

    /// Check if a point falls inside this region
    pub fn contains(&self, point: CubePoint) -> bool {
        let width = i32::from(self.width);
        let height = i32::from(self.height);
        let r_min = -(height / 2);
        let r = point.r();
        if r < r_min || r >= r_min + height {
            return false;
        }
        let start = -(width / 2) - r.div_euclid(2);
        start <= point.q() && point.q() < start + width
    }
}

/// Build a generation that covers exactly the given region. `initializer`
/// is called once per point, in [RegionSize::points] order, to decide
/// whether that cell starts alive.
pub fn shape_region(
    region: RegionSize,
    mut initializer: impl FnMut(CubePoint) -> bool,
) -> Generation {
    timed!("Region shaping", {
        let mut generation = Generation::with_capacity_and_hasher(
            region.len(),
            FnvBuildHasher::default(),
        );
        for position in region.points() {
            let alive = initializer(position);
            generation.insert(position, Cell::new(position, alive));
        }

        debug_assert_eq!(generation.len(), region.len(), "expected w·h cells");
        generation
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::CubePointMap;

    #[test]
    fn test_points_3x3() {
        let points: Vec<(i32, i32)> = RegionSize::new(3, 3)
            .points()
            .map(|p| (p.q(), p.r()))
            .collect();
        assert_eq!(
            points,
            vec![
                (0, -1),
                (1, -1),
                (2, -1),
                (-1, 0),
                (0, 0),
                (1, 0),
                (-1, 1),
                (0, 1),
                (1, 1),
            ]
        );
    }

    #[test]
    fn test_negative_row_offsets() {
        // r = -3 => offset 2, r = -2 => offset 1
        let region = RegionSize::new(2, 6);
        let rows: Vec<Vec<i32>> = (-3..3)
            .map(|r| {
                region
                    .points()
                    .filter(|p| p.r() == r)
                    .map(|p| p.q())
                    .collect()
            })
            .collect();
        assert_eq!(
            rows,
            vec![
                vec![1, 2],
                vec![0, 1],
                vec![0, 1],
                vec![-1, 0],
                vec![-1, 0],
                vec![-2, -1],
            ]
        );
    }

    #[test]
    fn test_shape_region() {
        for (width, height) in [(1, 1), (5, 5), (40, 30), (7, 12), (0, 4)] {
            let region = RegionSize::new(width, height);
            let generation = shape_region(region, |_| false);
            assert_eq!(generation.len(), region.len());
            for (pos, cell) in &generation {
                assert_eq!(pos.q() + pos.r() + pos.s(), 0);
                assert_eq!(cell.position(), *pos);
                assert!(!cell.alive);
                assert!(region.contains(*pos));
            }
        }
    }

    #[test]
    fn test_neighbor_counts() {
        let region = RegionSize::new(6, 5);
        let generation = shape_region(region, |_| true);
        let counts: CubePointMap<usize> = generation
            .keys()
            .map(|pos| {
                let count = pos
                    .adjacents()
                    .filter(|adj| generation.contains_key(adj))
                    .count();
                (*pos, count)
            })
            .collect();
        assert!(counts.values().all(|count| *count <= 6));

        // The four corners of the rectangle are always on the edge
        let points: Vec<CubePoint> = region.points().collect();
        let width = region.width as usize;
        for corner in [0, width - 1, points.len() - width, points.len() - 1] {
            assert!(counts[&points[corner]] < 6);
        }
        // An interior cell sees all 6 neighbors
        assert_eq!(counts[&CubePoint::ORIGIN], 6);
    }

    #[test]
    fn test_contains() {
        let region = RegionSize::new(5, 5);
        assert!(region.contains(CubePoint::ORIGIN));
        assert!(region.contains(CubePoint::new_qr(2, -2)));
        assert!(!region.contains(CubePoint::new_qr(3, 0)));
        assert!(!region.contains(CubePoint::new_qr(0, 3)));
        assert!(!region.contains(CubePoint::new_qr(-5, 2)));
    }

    #[test]
    fn test_initializer_order() {
        let region = RegionSize::new(4, 3);
        let mut seen = Vec::new();
        shape_region(region, |pos| {
            seen.push(pos);
            false
        });
        assert_eq!(seen, region.points().collect::<Vec<_>>());
    }

    #[test]
    fn test_fit_viewport() {
        let cell_size = Vector2::uniform(15.0);
        assert_eq!(
            RegionSize::fit_viewport(
                Vector2::new(1000.0, 800.0),
                DEFAULT_PADDING,
                cell_size
            ),
            RegionSize::new(36, 33)
        );
        // Too small for anything
        assert_eq!(
            RegionSize::fit_viewport(
                Vector2::new(40.0, 40.0),
                DEFAULT_PADDING,
                cell_size
            ),
            RegionSize::new(0, 0)
        );
        assert!(RegionSize::new(0, 0).is_empty());
    }
}
