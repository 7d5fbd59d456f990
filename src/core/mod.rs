pub mod codec;
pub mod constants;
pub mod geodesy;
pub mod level;
pub mod octant;

pub use codec::{
    GridBounds, MeshCode, meshcode_to_bounds, meshcode_to_bounds_at, point_to_meshcode,
};
pub use constants::{
    VINCENTY_MAX_ITERATIONS, VINCENTY_TOLERANCE, WGS84_A, WGS84_B, WGS84_F,
};
pub use geodesy::{CellMetrics, cell_metrics, cell_metrics_from_code, vincenty_distance};
pub use level::{LevelSpec, MeshLevel, Rung, RungKind, Step};
pub use octant::Octant;
