use crate::util::error::MeshError;

/// Reflection descriptor for one of the eight coordinate octants.
///
/// Every code starts with a digit in 1..=8 naming the octant of the encoded
/// position. `x` flips the latitude sign (southern hemisphere), `y` flips the
/// longitude sign (west of the reference meridian) and `z` selects the
/// 100-degree longitude offset band, so digit decomposition always runs over
/// non-negative coordinates with longitude inside a 0-100 degree window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Octant {
    x: u8,
    y: u8,
    z: u8,
}

impl Octant {
    /// Classifies a raw WGS84 position into its octant.
    pub fn from_position(lat: f64, long: f64) -> Self {
        let mut o = 0;
        if lat < 0.0 {
            o += 4;
        }
        if long < 0.0 {
            o += 2;
        }
        if long.abs() >= 100.0 {
            o += 1;
        }
        Self::from_index(o)
    }

    /// Rebuilds the octant from the leading code digit.
    pub fn from_digit(digit: u32) -> Result<Self, MeshError> {
        if !(1..=8).contains(&digit) {
            return Err(MeshError::MalformedDigits(format!(
                "octant digit {} out of range",
                digit
            )));
        }
        Ok(Self::from_index(digit as u8 - 1))
    }

    fn from_index(o: u8) -> Self {
        let z = o % 2;
        let y = (o - z) / 2 % 2;
        let x = (o - 2 * y - z) / 4;
        Self { x, y, z }
    }

    /// The leading digit this octant contributes to a code (1..=8).
    pub fn digit(&self) -> u8 {
        4 * self.x + 2 * self.y + self.z + 1
    }

    /// Latitude reflection bit.
    pub fn x(&self) -> f64 {
        f64::from(self.x)
    }

    /// Longitude reflection bit.
    pub fn y(&self) -> f64 {
        f64::from(self.y)
    }

    /// Latitude sign factor `1 - 2x`.
    pub fn lat_sign(&self) -> f64 {
        1.0 - 2.0 * f64::from(self.x)
    }

    /// Longitude sign factor `1 - 2y`.
    pub fn long_sign(&self) -> f64 {
        1.0 - 2.0 * f64::from(self.y)
    }

    /// Longitude offset subtracted before the integer/fraction split.
    pub fn long_offset(&self) -> f64 {
        100.0 * f64::from(self.z)
    }

    /// Maps a raw position into the canonical non-negative frame.
    pub fn canonicalize(&self, lat: f64, long: f64) -> (f64, f64) {
        (self.lat_sign() * lat, self.long_sign() * long)
    }

    /// Maps a canonical-frame coordinate back to the true hemisphere.
    ///
    /// The reflection is its own inverse, so this is the same multiplication
    /// as [`Octant::canonicalize`].
    pub fn restore(&self, lat: f64, long: f64) -> (f64, f64) {
        (self.lat_sign() * lat, self.long_sign() * long)
    }
}
