pub mod analysis;
pub mod config;
pub mod error;
pub mod io;
pub mod network;
pub mod rings;
pub mod stats;

pub use error::{Error, Result};

/// Number of ring-size buckets; detected rings have at most `MAX_RING_SIZE - 1` members.
pub const MAX_RING_SIZE: usize = 12;
/// Smallest ring the composite filter will consider removing.
pub const COMPOSITE_MIN_SIZE: usize = 7;
/// A candidate ring sharing more than this many vertices with a smaller ring is composite.
pub const COMPOSITE_THRESHOLD: usize = 3;

pub mod prelude {
    pub use super::analysis::{analyze, Report};
    pub use super::config::{Config, RingSettings};
    pub use super::network::{Graph, Lattice, PointF, Vertex};
    pub use super::rings::{Ring, RingId, RingSet};
}
