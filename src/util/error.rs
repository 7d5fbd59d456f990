/// Error type for worldgrid-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshError {
    /// Latitude or longitude is outside the valid WGS84 domain.
    OutOfRange(f64, f64),
    /// The code length / extension combination matches no supported level.
    UnsupportedLength(usize),
    /// The code contains a non-numeric character or an invalid digit group.
    MalformedDigits(String),
    /// The Vincenty iteration exceeded its cap without converging.
    DidNotConverge,
}

impl std::fmt::Display for MeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeshError::OutOfRange(lat, long) => {
                write!(f, "Position out of range: ({}, {})", lat, long)
            }
            MeshError::UnsupportedLength(len) => {
                write!(f, "Unsupported code length: {}", len)
            }
            MeshError::MalformedDigits(msg) => write!(f, "Malformed digits: {}", msg),
            MeshError::DidNotConverge => write!(f, "Geodesic solver did not converge"),
        }
    }
}

impl std::error::Error for MeshError {}
