use serde::{Deserialize, Serialize};

use crate::core::codec::{GridBounds, meshcode_to_bounds};
use crate::core::constants::{
    VINCENTY_MAX_ITERATIONS, VINCENTY_TOLERANCE, WGS84_A, WGS84_B, WGS84_F,
};
use crate::util::coord::Coordinate;
use crate::util::error::MeshError;

/// Geodesic distance in metres between two WGS84 positions, by Vincenty's
/// inverse formulae (1975).
///
/// Identical points return 0 without iterating. The sigma term uses a plain
/// `atan`, so nearly antipodal pairs do not oscillate; they converge to a
/// meaningless, possibly negative, distance instead. The iteration count is
/// still bounded, and exhausting the cap is reported as
/// [`MeshError::DidNotConverge`].
pub fn vincenty_distance<P: Coordinate, Q: Coordinate>(p1: &P, p2: &Q) -> Result<f64, MeshError> {
    let (lat1, long1) = (p1.lat(), p1.long());
    let (lat2, long2) = (p2.lat(), p2.long());
    if lat1 == lat2 && long1 == long2 {
        return Ok(0.0);
    }

    let l = (long1 - long2).to_radians();
    let u1 = ((1.0 - WGS84_F) * lat1.to_radians().tan()).atan();
    let u2 = ((1.0 - WGS84_F) * lat2.to_radians().tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    let mut sin_sigma = 0.0;
    let mut cos_sigma = 0.0;
    let mut sigma = 0.0;
    let mut cos2_alpha = 0.0;
    let mut cos_2sigma_m = 0.0;
    let mut c = 0.0;
    let mut converged = false;

    for _ in 0..VINCENTY_MAX_ITERATIONS {
        let cross = cos_u2 * lambda.sin();
        let along = cos_u1 * sin_u2 - sin_u1 * cos_u2 * lambda.cos();
        sin_sigma = (cross * cross + along * along).sqrt();
        cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * lambda.cos();
        sigma = (sin_sigma / cos_sigma).atan();
        let sin_alpha = cos_u1 * cos_u2 * lambda.sin() / sin_sigma;
        cos2_alpha = 1.0 - sin_alpha * sin_alpha;

        let next = if cos2_alpha == 0.0 {
            // Equatorial geodesic: the azimuth correction vanishes.
            c = 0.0;
            l + WGS84_F * sin_alpha * sigma
        } else {
            cos_2sigma_m = cos_sigma - 2.0 * sin_u1 * sin_u2 / cos2_alpha;
            c = WGS84_F / 16.0 * cos2_alpha * (4.0 + WGS84_F * (4.0 - 3.0 * cos2_alpha));
            l + (1.0 - c)
                * WGS84_F
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m
                            + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)))
        };

        let delta = next - lambda;
        lambda = next;
        if delta.abs() < VINCENTY_TOLERANCE {
            converged = true;
            break;
        }
    }
    if !converged {
        return Err(MeshError::DidNotConverge);
    }

    if c == 0.0 {
        return Ok(WGS84_B * sigma);
    }
    let u2_sq = cos2_alpha * (WGS84_A * WGS84_A - WGS84_B * WGS84_B) / (WGS84_B * WGS84_B);
    let a = 1.0 + u2_sq / 16384.0 * (4096.0 + u2_sq * (-768.0 + u2_sq * (320.0 - 175.0 * u2_sq)));
    let b = u2_sq / 1024.0 * (256.0 + u2_sq * (-128.0 + u2_sq * (74.0 - 47.0 * u2_sq)));
    let delta_sigma = b
        * sin_sigma
        * (cos_2sigma_m
            + 0.25
                * b
                * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                    - b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));
    Ok(WGS84_B * a * (sigma - delta_sigma))
}

/// Edge lengths and trapezoidal area of a grid square.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellMetrics {
    /// Geodesic length of the `lat0` edge in metres.
    pub w1: f64,
    /// Geodesic length of the `lat1` edge in metres.
    pub w2: f64,
    /// Geodesic length of the `long0` edge in metres.
    pub h: f64,
    /// Trapezoidal area estimate in square metres.
    pub area: f64,
}

/// Measures the edges of a bounding rectangle and estimates its area as a
/// trapezoid, `(w1 + w2) * h / 2`.
///
/// The two west-to-east edges follow parallels and the north-to-south edge a
/// meridian; the trapezoidal product is an intentional approximation, not an
/// ellipsoidal surface integral.
pub fn cell_metrics(bounds: &GridBounds) -> Result<CellMetrics, MeshError> {
    let w1 = vincenty_distance(
        &(bounds.long0, bounds.lat0),
        &(bounds.long1, bounds.lat0),
    )?;
    let w2 = vincenty_distance(
        &(bounds.long0, bounds.lat1),
        &(bounds.long1, bounds.lat1),
    )?;
    let h = vincenty_distance(
        &(bounds.long0, bounds.lat0),
        &(bounds.long0, bounds.lat1),
    )?;
    Ok(CellMetrics {
        w1,
        w2,
        h,
        area: (w1 + w2) * h * 0.5,
    })
}

/// Decodes a grid square code and measures its cell.
pub fn cell_metrics_from_code(digits: &str, extension: bool) -> Result<CellMetrics, MeshError> {
    cell_metrics(&meshcode_to_bounds(digits, extension)?)
}
