use geo_types::Point;

/// Read access to a WGS84 position in degrees.
///
/// Axis order follows `geo_types::Point`: `x` is longitude, `y` is latitude.
pub trait Coordinate {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    /// Longitude in degrees.
    fn long(&self) -> f64 {
        self.x()
    }

    /// Latitude in degrees.
    fn lat(&self) -> f64 {
        self.y()
    }
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}
