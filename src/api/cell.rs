use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::core::codec::{GridBounds, MeshCode, meshcode_to_bounds_at, point_to_meshcode};
use crate::core::geodesy::{CellMetrics, cell_metrics};
use crate::core::level::MeshLevel;
use crate::util::coord::Coordinate;
use crate::util::error::MeshError;

/// A single world grid square, tying a code to its decoded rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSquare {
    pub code: MeshCode,
    pub bounds: GridBounds,
}

impl GridSquare {
    /// Builds the square containing a WGS84 position at the given level.
    ///
    /// # Example
    /// ```
    /// use worldgrid_rs::{GridSquare, MeshLevel};
    ///
    /// # fn main() -> Result<(), worldgrid_rs::MeshError> {
    /// let square = GridSquare::from_wgs84(&(139.767125, 35.681236), MeshLevel::Km1)?;
    /// assert_eq!(square.code.digits(), "2053394611");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_wgs84<C: Coordinate>(coord: &C, level: MeshLevel) -> Result<Self, MeshError> {
        let code = point_to_meshcode(coord, level)?;
        let bounds = meshcode_to_bounds_at(code.digits(), level)?;
        Ok(Self { code, bounds })
    }

    /// Rebuilds a square from an existing code string.
    ///
    /// # Example
    /// ```
    /// use worldgrid_rs::GridSquare;
    ///
    /// # fn main() -> Result<(), worldgrid_rs::MeshError> {
    /// let square = GridSquare::from_code("2053394611", false)?;
    /// assert!(square.bounds.contains(&(139.767125, 35.681236)));
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_code(digits: &str, extension: bool) -> Result<Self, MeshError> {
        let code = MeshCode::parse(digits, extension)?;
        let bounds = meshcode_to_bounds_at(code.digits(), code.level())?;
        Ok(Self { code, bounds })
    }

    /// The resolution level of this square.
    pub fn level(&self) -> MeshLevel {
        self.code.level()
    }

    /// Corner `(lat0, long0)` of the decoded rectangle.
    pub fn corner_nw(&self) -> Point<f64> {
        self.bounds.nw()
    }

    /// Corner `(lat1, long0)`.
    pub fn corner_sw(&self) -> Point<f64> {
        self.bounds.sw()
    }

    /// Corner `(lat0, long1)`.
    pub fn corner_ne(&self) -> Point<f64> {
        self.bounds.ne()
    }

    /// Corner `(lat1, long1)`.
    pub fn corner_se(&self) -> Point<f64> {
        self.bounds.se()
    }

    /// Edge lengths and trapezoidal area of this square.
    pub fn metrics(&self) -> Result<CellMetrics, MeshError> {
        cell_metrics(&self.bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKYO: (f64, f64) = (139.767125, 35.681236);

    #[test]
    fn test_from_wgs84() -> Result<(), MeshError> {
        let square = GridSquare::from_wgs84(&TOKYO, MeshLevel::Km1)?;
        assert_eq!(square.level(), MeshLevel::Km1);
        assert_eq!(square.code.digits(), "2053394611");
        assert!(square.bounds.contains(&TOKYO));
        Ok(())
    }

    #[test]
    fn test_from_code_matches_from_wgs84() -> Result<(), MeshError> {
        let direct = GridSquare::from_wgs84(&TOKYO, MeshLevel::Km1)?;
        let restored = GridSquare::from_code(direct.code.digits(), false)?;
        assert_eq!(direct, restored);
        Ok(())
    }

    #[test]
    fn test_same_point_same_square() -> Result<(), MeshError> {
        let first = GridSquare::from_wgs84(&TOKYO, MeshLevel::M500)?;
        let second = GridSquare::from_wgs84(&Point::new(TOKYO.0, TOKYO.1), MeshLevel::M500)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_corner_accessors_select_fields() -> Result<(), MeshError> {
        let square = GridSquare::from_code("2053394611", false)?;
        let b = square.bounds;
        assert_eq!(square.corner_nw(), Point::new(b.long0, b.lat0));
        assert_eq!(square.corner_sw(), Point::new(b.long0, b.lat1));
        assert_eq!(square.corner_ne(), Point::new(b.long1, b.lat0));
        assert_eq!(square.corner_se(), Point::new(b.long1, b.lat1));
        Ok(())
    }

    #[test]
    fn test_metrics_are_positive() -> Result<(), MeshError> {
        let square = GridSquare::from_wgs84(&TOKYO, MeshLevel::Km1)?;
        let metrics = square.metrics()?;
        assert!(metrics.w1 > 0.0);
        assert!(metrics.w2 > 0.0);
        assert!(metrics.h > 0.0);
        assert!(metrics.area > 0.0);
        Ok(())
    }

    #[test]
    fn test_extended_square_from_code() -> Result<(), MeshError> {
        let square = GridSquare::from_wgs84(&TOKYO, MeshLevel::Ex100m12)?;
        assert_eq!(square.code.digits().len(), 12);
        let restored = GridSquare::from_code(square.code.digits(), true)?;
        assert_eq!(square, restored);
        Ok(())
    }
}
