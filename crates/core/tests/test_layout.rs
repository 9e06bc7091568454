use assert_approx_eq::assert_approx_eq;
use hexlife::{
    shape_region, CubePoint, Layout, Orientation, Point2, RegionSize, Vector2,
    DEFAULT_PADDING,
};

/// Every cell in a region has to map to a point and back to itself, for
/// both orientations and any size/origin
#[test]
fn test_round_trip_every_cell() {
    let region = shape_region(RegionSize::new(60, 45), |_| false);
    for orientation in [Orientation::Pointy, Orientation::Flat] {
        for (size, origin) in [
            (Vector2::uniform(1.0), Point2::ORIGIN),
            (Vector2::new(13.0, 9.0), Point2::new(512.0, 384.0)),
            (Vector2::new(0.5, 40.0), Point2::new(-77.7, 3.1)),
        ] {
            let layout = Layout::new(orientation, size, origin);
            for pos in region.keys() {
                assert_eq!(layout.to_hex(layout.to_plane(*pos)), *pos);
            }
        }
    }
}

/// Neighboring cell centers are the same distance apart in every direction
#[test]
fn test_neighbor_spacing() {
    let layout =
        Layout::new(Orientation::Flat, Vector2::uniform(10.0), Point2::ORIGIN);
    let center = layout.to_plane(CubePoint::ORIGIN);
    for adjacent in CubePoint::ORIGIN.adjacents() {
        let offset = layout.to_plane(adjacent) - center;
        assert_approx_eq!(offset.x.hypot(offset.y), 10.0 * 3f64.sqrt());
    }
}

/// Resizing the layout moves cells on screen without changing which cell a
/// given plane point belongs to, relative to the cell size
#[test]
fn test_set_size_and_origin() {
    let mut layout = Layout::default();
    let hex = CubePoint::new_qr(4, -7);
    layout.set_size(Vector2::uniform(30.0));
    layout.set_origin(Point2::new(100.0, 100.0));
    let canvas_origin = Point2::new(200.0, 150.0);

    let plane = layout.to_plane(hex);
    let screen = plane + (canvas_origin - Point2::ORIGIN);
    assert_eq!(layout.screen_to_hex(screen, canvas_origin), hex);
}

/// A region fitted to a viewport has to fit inside it once the padding is
/// taken off, on a pointy layout
#[test]
fn test_fitted_region_fits() {
    let viewport = Vector2::new(1000.0, 800.0);
    let layout = Layout::default();
    let region =
        RegionSize::fit_viewport(viewport, DEFAULT_PADDING, layout.size());
    assert!(!region.is_empty());

    let mut min = Point2::new(f64::INFINITY, f64::INFINITY);
    let mut max = Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for pos in region.points() {
        for corner in layout.polygon_corners(pos) {
            min = Point2::new(min.x.min(corner.x), min.y.min(corner.y));
            max = Point2::new(max.x.max(corner.x), max.y.max(corner.y));
        }
    }
    let extent = max - min;
    let available = viewport - DEFAULT_PADDING;
    assert!(extent.x <= available.x + 1e-6, "{:?}", extent);
    assert!(extent.y <= available.y + 1e-6, "{:?}", extent);
}
