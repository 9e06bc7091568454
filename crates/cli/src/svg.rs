use hexlife::{Grid, Layout, LifeConfig, Point2};
use svg::{
    node::{element::Polygon, Comment},
    Document,
};

const ALIVE_COLOR: &str = "#1b1b1b";
const DEAD_COLOR: &str = "#ffffff";
const OUTLINE_COLOR: &str = "#c8c8c8";
/// Empty space around the grid, in plane units
const MARGIN: f64 = 10.0;

/// Corner order for drawing each hexagon: start at corner 5, then go around
/// from 0
const CORNER_ORDER: [usize; 6] = [5, 0, 1, 2, 3, 4];

/// Generate an SVG document for the current generation of a grid
pub fn draw_grid(
    grid: &Grid,
    layout: &Layout,
    config: &LifeConfig,
) -> Document {
    let mut min = Point2::new(f64::INFINITY, f64::INFINITY);
    let mut max = Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    let mut polygons = Vec::with_capacity(grid.len());

    for cell in grid.cells() {
        let corners = layout.polygon_corners(cell.position());
        for corner in corners.iter() {
            min = Point2::new(min.x.min(corner.x), min.y.min(corner.y));
            max = Point2::new(max.x.max(corner.x), max.y.max(corner.y));
        }

        let points: Vec<(f64, f64)> = CORNER_ORDER
            .iter()
            .map(|i| (corners[*i].x, corners[*i].y))
            .collect();
        polygons.push(
            Polygon::new()
                .set("points", points)
                .set("fill", if cell.alive { ALIVE_COLOR } else { DEAD_COLOR })
                .set("stroke", OUTLINE_COLOR)
                .set("stroke-width", 1),
        );
    }

    // An empty grid still gets a valid (if tiny) view box
    if polygons.is_empty() {
        min = Point2::ORIGIN;
        max = Point2::ORIGIN;
    }

    let size = max - min;
    let mut document = Document::new()
        .set(
            "viewBox",
            (
                min.x - MARGIN,
                min.y - MARGIN,
                size.x + MARGIN * 2.0,
                size.y + MARGIN * 2.0,
            ),
        )
        .add(Comment::new(format!(
            "\nGeneration {}\n{:#?}\n",
            grid.generation(),
            config
        )));
    for polygon in polygons {
        document = document.add(polygon);
    }
    document
}
