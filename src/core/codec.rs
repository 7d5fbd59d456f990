use geo_types::{Point, Rect, coord};
use serde::{Deserialize, Serialize};

use crate::core::level::{MeshLevel, RungKind};
use crate::core::octant::Octant;
use crate::util::coord::Coordinate;
use crate::util::error::MeshError;

/// A world grid square code: a fixed-width digit string plus the level that
/// produced it.
///
/// The string is the canonical representation; every level keeps its declared
/// width with zero padding, so codes are comparable as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeshCode {
    digits: String,
    level: MeshLevel,
}

impl MeshCode {
    /// Validates an existing digit string against a length/extension pair.
    pub fn parse(digits: &str, extension: bool) -> Result<Self, MeshError> {
        let level = MeshLevel::from_code_len(digits.len(), extension)?;
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(MeshError::MalformedDigits(digits.to_string()));
        }
        let first = digits
            .chars()
            .next()
            .and_then(|c| c.to_digit(10))
            .unwrap_or(0);
        Octant::from_digit(first)?;
        Ok(Self {
            digits: digits.to_string(),
            level,
        })
    }

    /// The canonical fixed-width digit string.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// The resolution level this code was produced at.
    pub fn level(&self) -> MeshLevel {
        self.level
    }

    /// Whether the code belongs to the extended decimal family.
    pub fn is_extension(&self) -> bool {
        self.level.is_extension()
    }

    /// Numeric view of the digit string, as a derived convenience.
    ///
    /// Leading zeros are not representable this way; the string form stays
    /// canonical.
    pub fn to_u64(&self) -> u64 {
        self.digits
            .bytes()
            .fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'))
    }

    /// The bounding rectangle of this code's grid square.
    pub fn bounds(&self) -> Result<GridBounds, MeshError> {
        meshcode_to_bounds_at(&self.digits, self.level)
    }
}

impl std::fmt::Display for MeshCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.digits)
    }
}

/// Bounding rectangle of a decoded grid square, in degrees.
///
/// `(lat0, long0)` is the corner the decomposition produces first and
/// `(lat1, long1)` the opposite one; the fields are never re-sorted after
/// hemisphere reflection, preserving the original labeling convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridBounds {
    pub lat0: f64,
    pub long0: f64,
    pub lat1: f64,
    pub long1: f64,
}

impl GridBounds {
    /// Corner `(lat0, long0)`.
    pub fn nw(&self) -> Point<f64> {
        Point::new(self.long0, self.lat0)
    }

    /// Corner `(lat1, long0)`.
    pub fn sw(&self) -> Point<f64> {
        Point::new(self.long0, self.lat1)
    }

    /// Corner `(lat0, long1)`.
    pub fn ne(&self) -> Point<f64> {
        Point::new(self.long1, self.lat0)
    }

    /// Corner `(lat1, long1)`.
    pub fn se(&self) -> Point<f64> {
        Point::new(self.long1, self.lat1)
    }

    /// Whether a position lies inside the rectangle, edges included.
    pub fn contains<C: Coordinate>(&self, coord: &C) -> bool {
        let (lat_min, lat_max) = ordered(self.lat0, self.lat1);
        let (long_min, long_max) = ordered(self.long0, self.long1);
        (lat_min..=lat_max).contains(&coord.lat())
            && (long_min..=long_max).contains(&coord.long())
    }

    /// Sorted min/max view for geometry interop.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.long0, y: self.lat0 },
            coord! { x: self.long1, y: self.lat1 },
        )
    }

    /// Whether `other` lies entirely inside this rectangle, edges included.
    pub fn covers(&self, other: &GridBounds) -> bool {
        self.contains(&other.nw())
            && self.contains(&other.sw())
            && self.contains(&other.ne())
            && self.contains(&other.se())
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Computes the grid square code containing a WGS84 position.
///
/// # Example
/// ```
/// use worldgrid_rs::{MeshLevel, point_to_meshcode};
///
/// # fn main() -> Result<(), worldgrid_rs::MeshError> {
/// let code = point_to_meshcode(&(139.767125, 35.681236), MeshLevel::Km1)?;
/// assert_eq!(code.digits(), "2053394611");
/// # Ok(())
/// # }
/// ```
pub fn point_to_meshcode<C: Coordinate>(
    coord: &C,
    level: MeshLevel,
) -> Result<MeshCode, MeshError> {
    let (lat, long) = (coord.lat(), coord.long());
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&long) {
        return Err(MeshError::OutOfRange(lat, long));
    }

    let octant = Octant::from_position(lat, long);
    let (lat_c, long_c) = octant.canonicalize(lat, long);

    let spec = level.spec();
    let mut digits = String::with_capacity(spec.code_len);
    digits.push(char::from(b'0' + octant.digit()));

    let mut rem_lat = lat_c;
    let mut rem_long = long_c - octant.long_offset();
    for (i, rung) in spec.rungs.iter().enumerate() {
        rem_lat *= rung.lat.pre_scale;
        rem_long *= rung.long.pre_scale;
        let d_lat = (rem_lat / rung.lat.divisor).floor();
        let d_long = (rem_long / rung.long.divisor).floor();
        rem_lat -= d_lat * rung.lat.divisor;
        rem_long -= d_long * rung.long.divisor;
        match rung.kind {
            RungKind::Digits if i == 0 => {
                // Head widths are fixed at 3 and 2 for every level.
                digits.push_str(&format!("{:03}", d_lat as u32));
                digits.push_str(&format!("{:02}", d_long as u32));
            }
            RungKind::Digits => {
                digits.push(char::from(b'0' + d_lat as u8));
                digits.push(char::from(b'0' + d_long as u8));
            }
            RungKind::Quadrant => {
                let s = d_lat as u8 * 2 + d_long as u8 + 1;
                digits.push(char::from(b'0' + s));
            }
        }
    }

    Ok(MeshCode { digits, level })
}

/// Reconstructs the bounding rectangle of a grid square code.
///
/// The level is resolved from the code length and the `extension` flag; an
/// unsupported combination fails with [`MeshError::UnsupportedLength`].
pub fn meshcode_to_bounds(digits: &str, extension: bool) -> Result<GridBounds, MeshError> {
    let level = MeshLevel::from_code_len(digits.len(), extension)?;
    meshcode_to_bounds_at(digits, level)
}

/// Like [`meshcode_to_bounds`], with the level already resolved.
pub fn meshcode_to_bounds_at(digits: &str, level: MeshLevel) -> Result<GridBounds, MeshError> {
    let spec = level.spec();
    if digits.len() != spec.code_len {
        return Err(MeshError::UnsupportedLength(digits.len()));
    }
    let values = digits
        .chars()
        .map(|c| {
            c.to_digit(10)
                .ok_or_else(|| MeshError::MalformedDigits(digits.to_string()))
        })
        .collect::<Result<Vec<u32>, MeshError>>()?;

    let octant = Octant::from_digit(values[0])?;

    let mut lat0 = 0.0;
    let mut long0 = octant.long_offset();
    let mut scale_lat = 1.0;
    let mut scale_long = 1.0;
    let mut unit_lat = 0.0;
    let mut unit_long = 0.0;
    let mut idx = 1;
    let last = spec.rungs.len() - 1;

    for (i, rung) in spec.rungs.iter().enumerate() {
        let (d_lat, d_long) = match rung.kind {
            RungKind::Digits if i == 0 => {
                let p = values[1] * 100 + values[2] * 10 + values[3];
                let u = values[4] * 10 + values[5];
                idx = 6;
                (f64::from(p), f64::from(u))
            }
            RungKind::Digits => {
                let pair = (f64::from(values[idx]), f64::from(values[idx + 1]));
                idx += 2;
                pair
            }
            RungKind::Quadrant => {
                let s = values[idx];
                if !(1..=4).contains(&s) {
                    return Err(MeshError::MalformedDigits(format!(
                        "quadrant index {} in {}",
                        s, digits
                    )));
                }
                idx += 1;
                (f64::from((s - 1) / 2), f64::from((s - 1) % 2))
            }
        };

        scale_lat *= rung.lat.pre_scale;
        scale_long *= rung.long.pre_scale;
        unit_lat = rung.lat.divisor / scale_lat;
        unit_long = rung.long.divisor / scale_long;

        if i == last {
            // The finest rung reports the northwest corner of the canonical
            // cell: one unit up in latitude unless the hemisphere reflection
            // will flip it, one unit east only when the longitude reflection
            // will.
            lat0 += (d_lat + 1.0 - octant.x()) * unit_lat;
            long0 += (d_long + octant.y()) * unit_long;
        } else {
            lat0 += d_lat * unit_lat;
            long0 += d_long * unit_long;
        }
    }

    let (lat0, long0) = octant.restore(lat0, long0);
    Ok(GridBounds {
        lat0: round_to(lat0, spec.precision),
        long0: round_to(long0, spec.precision),
        lat1: round_to(lat0 - unit_lat, spec.precision),
        long1: round_to(long0 + unit_long, spec.precision),
    })
}

/// Rounds to a fixed number of decimal places through the decimal formatter,
/// suppressing the representable-value noise the chained divisions leave
/// behind.
fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}
