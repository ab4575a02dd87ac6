pub mod aboav;
pub mod area;
pub mod bonds;
pub mod histogram;

pub use aboav::{AboavFit, AboavRow, AboavTable};
pub use area::{polygon_area, ring_area, AreaBuckets};
pub use bonds::BondStats;
pub use histogram::RingHistogram;
