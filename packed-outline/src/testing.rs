//! Shared fixtures for tests.

use crate::{ContourInfo, PackedPath, PointType};

/// A four point square with sides of 100 units.
pub fn simple_test_path(is_closed: bool) -> PackedPath {
    PackedPath::from_parts(
        vec![0.0, 0.0, 0.0, 100.0, 100.0, 100.0, 100.0, 0.0],
        vec![PointType::on_curve(); 4],
        vec![ContourInfo::new(3, is_closed)],
    )
}

/// Three closed contours with three, three and four points.
///
/// The coordinates count up from zero so every value is unique.
pub fn complex_test_path() -> PackedPath {
    let on = PointType::on_curve();
    let off = PointType::off_curve_quad();
    PackedPath::from_parts(
        (0..20).map(f64::from).collect::<Vec<_>>(),
        vec![on, off, on, on, on, on, on, off, off, on],
        vec![
            ContourInfo::new(2, true),
            ContourInfo::new(5, true),
            ContourInfo::new(9, true),
        ],
    )
}
