//! # worldgrid-rs
//!
//! World grid square codes compatible with JIS X0410: a bidirectional codec
//! between fixed-digit codes and WGS84 bounding rectangles across ten nested
//! resolution levels (80 km down to 1 m), plus a Vincenty inverse geodesic
//! solver and a trapezoidal cell-area estimator.
//!
//! There are three main entry points.
//!
//! ### 1. `GridSquare` - Single Square Operations
//!
//! ```
//! use worldgrid_rs::{GridSquare, MeshLevel};
//!
//! # fn main() -> Result<(), worldgrid_rs::MeshError> {
//! let square = GridSquare::from_wgs84(&(139.767125, 35.681236), MeshLevel::Km1)?;
//! println!("{}", square.code);
//! let nw = square.corner_nw();
//! # let _ = nw;
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. Codec functions - Codes and Rectangles
//!
//! ```
//! use worldgrid_rs::{MeshLevel, meshcode_to_bounds, point_to_meshcode};
//!
//! # fn main() -> Result<(), worldgrid_rs::MeshError> {
//! let code = point_to_meshcode(&(139.767125, 35.681236), MeshLevel::Km1)?;
//! let bounds = meshcode_to_bounds(code.digits(), false)?;
//! assert!(bounds.contains(&(139.767125, 35.681236)));
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. Geodesy - Distances and Cell Sizes
//!
//! ```
//! use worldgrid_rs::{cell_metrics_from_code, vincenty_distance};
//!
//! # fn main() -> Result<(), worldgrid_rs::MeshError> {
//! let d = vincenty_distance(&(139.767125, 35.681236), &(135.502165, 34.693738))?;
//! assert!(d > 0.0);
//! let metrics = cell_metrics_from_code("2053394611", false)?;
//! assert!(metrics.area > 0.0);
//! # Ok(())
//! # }
//! ```
//!
//! Coordinates follow the axis order of `geo_types::Point`: `x` is longitude
//! and `y` is latitude, both in degrees on WGS84. All operations are pure
//! functions over value types and safe to call from concurrent threads.

pub mod api;
pub mod core;
pub mod util;

pub use crate::api::GridSquare;
pub use crate::core::{
    CellMetrics, GridBounds, MeshCode, MeshLevel, Octant, VINCENTY_MAX_ITERATIONS,
    VINCENTY_TOLERANCE, WGS84_A, WGS84_B, WGS84_F, cell_metrics, cell_metrics_from_code,
    meshcode_to_bounds, meshcode_to_bounds_at, point_to_meshcode, vincenty_distance,
};
pub use crate::util::{Coordinate, MeshError};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), MeshError> {
        let pt = point! { x: 139.767125, y: 35.681236 };
        let square = GridSquare::from_wgs84(&pt, MeshLevel::Km1)?;

        assert_eq!(square.code.digits(), "2053394611");
        assert_eq!(square.level(), MeshLevel::Km1);
        assert!(square.bounds.contains(&pt));

        let metrics = square.metrics()?;
        assert!(metrics.area > 0.0);

        let restored = GridSquare::from_code(square.code.digits(), false)?;
        assert_eq!(square, restored);
        Ok(())
    }

    #[test]
    fn test_free_function_surface() -> Result<(), MeshError> {
        let code = point_to_meshcode(&(139.767125, 35.681236), MeshLevel::M500)?;
        let bounds = meshcode_to_bounds(code.digits(), false)?;
        let metrics = cell_metrics(&bounds)?;
        let via_code = cell_metrics_from_code(code.digits(), false)?;
        assert_eq!(metrics, via_code);
        Ok(())
    }

    #[test]
    fn test_numeric_view_round_trips_without_leading_zero() -> Result<(), MeshError> {
        let code = point_to_meshcode(&(139.767125, 35.681236), MeshLevel::Km1)?;
        assert_eq!(code.to_u64().to_string(), code.digits());
        Ok(())
    }

    #[test]
    fn test_serde_round_trip() -> Result<(), MeshError> {
        let square = GridSquare::from_wgs84(&(139.767125, 35.681236), MeshLevel::Ex100m12)?;

        let json = serde_json::to_string(&square).map_err(|e| {
            MeshError::MalformedDigits(e.to_string())
        })?;
        let back: GridSquare = serde_json::from_str(&json).map_err(|e| {
            MeshError::MalformedDigits(e.to_string())
        })?;
        assert_eq!(square, back);
        Ok(())
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            MeshError::UnsupportedLength(7).to_string(),
            "Unsupported code length: 7"
        );
        assert_eq!(
            MeshError::DidNotConverge.to_string(),
            "Geodesic solver did not converge"
        );
    }
}
