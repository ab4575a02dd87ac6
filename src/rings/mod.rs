pub mod filter;
pub mod finder;
pub mod orderer;
pub mod ring;
pub mod ring_set;

pub use crate::config::RingSettings;
pub use filter::remove_composites;
pub use finder::find_rings;
pub use orderer::{order_ring, order_rings};
pub use ring::{Ring, RingId};
pub use ring_set::RingSet;
