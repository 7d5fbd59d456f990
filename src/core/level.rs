use serde::{Deserialize, Serialize};

use crate::util::error::MeshError;

/// One division of the digit-decomposition ladder.
///
/// A step produces `digit = floor(rem * pre_scale / divisor)` and leaves
/// `rem * pre_scale - digit * divisor` for the next step, so divisors stay in
/// the mixed arc-minute/arc-second measures the JIS tables are written in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub pre_scale: f64,
    pub divisor: f64,
}

/// How a latitude/longitude digit pair is written into the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RungKind {
    /// Latitude digit then longitude digit, as plain decimals.
    Digits,
    /// One packed 2x2 quadrant index `sub_lat * 2 + sub_long + 1` (1..=4).
    Quadrant,
}

/// One rung of the ladder: a latitude step, a longitude step and the way
/// their digits appear in the code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rung {
    pub lat: Step,
    pub long: Step,
    pub kind: RungKind,
}

const fn rung(
    lat_pre: f64,
    lat_div: f64,
    long_pre: f64,
    long_div: f64,
    kind: RungKind,
) -> Rung {
    Rung {
        lat: Step {
            pre_scale: lat_pre,
            divisor: lat_div,
        },
        long: Step {
            pre_scale: long_pre,
            divisor: long_div,
        },
        kind,
    }
}

/// Leading rung shared by every level: 40 arc-minute latitude band (3 digits)
/// and whole-degree longitude inside the octant's 100-degree window (2 digits).
const HEAD: Rung = rung(60.0, 40.0, 1.0, 1.0, RungKind::Digits);
/// 10 km rung: 5 arc-minutes by 7.5 arc-minutes.
const TEN_KM: Rung = rung(1.0, 5.0, 60.0, 7.5, RungKind::Digits);
/// 1 km rung: 30 arc-seconds by 45 arc-seconds.
const ONE_KM: Rung = rung(60.0, 30.0, 60.0, 45.0, RungKind::Digits);
/// 500 m quadrant rung.
const HALF_KM: Rung = rung(1.0, 15.0, 1.0, 22.5, RungKind::Quadrant);
/// 250 m quadrant rung.
const QUARTER_KM: Rung = rung(1.0, 7.5, 1.0, 11.25, RungKind::Quadrant);
/// 125 m quadrant rung.
const EIGHTH_KM: Rung = rung(1.0, 3.75, 1.0, 5.625, RungKind::Quadrant);
/// Extended 100 m rung: 3 arc-seconds by 4.5 arc-seconds, decimal digits.
const EX_100M: Rung = rung(1.0, 3.0, 1.0, 4.5, RungKind::Digits);
/// Extended 10 m rung: 0.3 by 0.45 arc-seconds.
const EX_10M: Rung = rung(1.0, 0.3, 1.0, 0.45, RungKind::Digits);
/// Extended 1 m rung: 0.03 by 0.045 arc-seconds.
const EX_1M: Rung = rung(1.0, 0.03, 1.0, 0.045, RungKind::Digits);

/// Static decomposition table for one supported (length, extension) pair.
#[derive(Debug, PartialEq)]
pub struct LevelSpec {
    /// Total code length including the octant digit.
    pub code_len: usize,
    /// Whether this level belongs to the extended decimal family.
    pub extension: bool,
    /// Decimal places kept when quantizing decoded coordinates.
    pub precision: usize,
    /// Ladder rungs, coarsest first.
    pub rungs: &'static [Rung],
}

const KM80_SPEC: LevelSpec = LevelSpec {
    code_len: 6,
    extension: false,
    precision: 8,
    rungs: &[HEAD],
};

const KM10_SPEC: LevelSpec = LevelSpec {
    code_len: 8,
    extension: false,
    precision: 8,
    rungs: &[HEAD, TEN_KM],
};

const KM1_SPEC: LevelSpec = LevelSpec {
    code_len: 10,
    extension: false,
    precision: 8,
    rungs: &[HEAD, TEN_KM, ONE_KM],
};

const M500_SPEC: LevelSpec = LevelSpec {
    code_len: 11,
    extension: false,
    precision: 8,
    rungs: &[HEAD, TEN_KM, ONE_KM, HALF_KM],
};

const M250_SPEC: LevelSpec = LevelSpec {
    code_len: 12,
    extension: false,
    precision: 10,
    rungs: &[HEAD, TEN_KM, ONE_KM, HALF_KM, QUARTER_KM],
};

const M125_SPEC: LevelSpec = LevelSpec {
    code_len: 13,
    extension: false,
    precision: 10,
    rungs: &[HEAD, TEN_KM, ONE_KM, HALF_KM, QUARTER_KM, EIGHTH_KM],
};

const EX100M12_SPEC: LevelSpec = LevelSpec {
    code_len: 12,
    extension: true,
    precision: 10,
    rungs: &[HEAD, TEN_KM, ONE_KM, EX_100M],
};

const EX100M13_SPEC: LevelSpec = LevelSpec {
    code_len: 13,
    extension: true,
    precision: 10,
    rungs: &[HEAD, TEN_KM, ONE_KM, HALF_KM, EX_100M],
};

const EX10M_SPEC: LevelSpec = LevelSpec {
    code_len: 14,
    extension: true,
    precision: 12,
    rungs: &[HEAD, TEN_KM, ONE_KM, EX_100M, EX_10M],
};

const EX1M_SPEC: LevelSpec = LevelSpec {
    code_len: 16,
    extension: true,
    precision: 14,
    rungs: &[HEAD, TEN_KM, ONE_KM, EX_100M, EX_10M, EX_1M],
};

/// Resolution levels of the world grid square code.
///
/// The standard levels subdivide by binary quadrants below 1 km; the extended
/// levels subdivide decimally and are flagged separately because their 12- and
/// 13-digit codes collide in length with the 250 m and 125 m standard codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeshLevel {
    /// 80 km square, 6 digits.
    Km80,
    /// 10 km square, 8 digits.
    Km10,
    /// 1 km square, 10 digits.
    Km1,
    /// 500 m square, 11 digits.
    M500,
    /// 250 m square, 12 digits.
    M250,
    /// 125 m square, 13 digits.
    M125,
    /// Extended 100 m square, 12 digits (1 km / 10).
    Ex100m12,
    /// Extended 100 m square, 13 digits (500 m / 5).
    Ex100m13,
    /// Extended 10 m square, 14 digits.
    Ex10m,
    /// Extended 1 m square, 16 digits.
    Ex1m,
}

impl MeshLevel {
    /// Every supported level, coarsest standard level first.
    pub const ALL: [MeshLevel; 10] = [
        MeshLevel::Km80,
        MeshLevel::Km10,
        MeshLevel::Km1,
        MeshLevel::M500,
        MeshLevel::M250,
        MeshLevel::M125,
        MeshLevel::Ex100m12,
        MeshLevel::Ex100m13,
        MeshLevel::Ex10m,
        MeshLevel::Ex1m,
    ];

    /// The static decomposition table for this level.
    pub fn spec(&self) -> &'static LevelSpec {
        match self {
            MeshLevel::Km80 => &KM80_SPEC,
            MeshLevel::Km10 => &KM10_SPEC,
            MeshLevel::Km1 => &KM1_SPEC,
            MeshLevel::M500 => &M500_SPEC,
            MeshLevel::M250 => &M250_SPEC,
            MeshLevel::M125 => &M125_SPEC,
            MeshLevel::Ex100m12 => &EX100M12_SPEC,
            MeshLevel::Ex100m13 => &EX100M13_SPEC,
            MeshLevel::Ex10m => &EX10M_SPEC,
            MeshLevel::Ex1m => &EX1M_SPEC,
        }
    }

    /// Total code length including the octant digit.
    pub fn code_len(&self) -> usize {
        self.spec().code_len
    }

    /// Whether this level belongs to the extended decimal family.
    pub fn is_extension(&self) -> bool {
        self.spec().extension
    }

    /// Resolves a code length and extension flag to a level.
    ///
    /// Lengths up to 11 are unambiguous, so the flag is ignored for them.
    /// 14- and 16-digit codes only exist in the extended family.
    pub fn from_code_len(len: usize, extension: bool) -> Result<Self, MeshError> {
        match (len, extension) {
            (6, _) => Ok(MeshLevel::Km80),
            (8, _) => Ok(MeshLevel::Km10),
            (10, _) => Ok(MeshLevel::Km1),
            (11, _) => Ok(MeshLevel::M500),
            (12, false) => Ok(MeshLevel::M250),
            (12, true) => Ok(MeshLevel::Ex100m12),
            (13, false) => Ok(MeshLevel::M125),
            (13, true) => Ok(MeshLevel::Ex100m13),
            (14, true) => Ok(MeshLevel::Ex10m),
            (16, true) => Ok(MeshLevel::Ex1m),
            _ => Err(MeshError::UnsupportedLength(len)),
        }
    }
}
