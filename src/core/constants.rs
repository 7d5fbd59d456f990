/// WGS84 semi-major axis in metres.
pub const WGS84_A: f64 = 6378137.0;

/// WGS84 semi-minor axis in metres.
pub const WGS84_B: f64 = 6356752.314245;

/// WGS84 flattening.
pub const WGS84_F: f64 = 1.0 / 298.257223563;

/// Convergence threshold for the Vincenty lambda iteration, in radians.
pub const VINCENTY_TOLERANCE: f64 = 1e-12;

/// Iteration cap for the Vincenty solver; nearly antipodal pairs oscillate
/// instead of converging, so the loop must be bounded.
pub const VINCENTY_MAX_ITERATIONS: u32 = 1000;
