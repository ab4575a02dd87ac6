//! The ring analysis pipeline.
//!
//! Detect -> filter -> reattach memberships -> order -> measure -> aggregate,
//! each stage consuming the complete output of the previous one. All
//! accumulators are created here and returned in the [`Report`].

use crate::network::{Graph, Lattice};
use crate::rings::{self, RingSet, RingSettings};
use crate::stats::area::bond_area;
use crate::stats::{ring_area, AboavTable, AreaBuckets, BondStats, RingHistogram};
use crate::Result;

/// One surviving ring, in bonded cyclic order.
#[derive(Debug, Clone, PartialEq)]
pub struct RingRecord {
    pub members: Vec<usize>,
    pub area: f64,
}
impl RingRecord {
    pub fn size(&self) -> usize {
        self.members.len()
    }
}

#[derive(Debug, Clone)]
pub struct Report {
    pub max_size: usize,
    pub rings: Vec<RingRecord>,
    /// Rings dropped by the composite filter.
    pub removed: usize,
    pub histogram: RingHistogram,
    pub areas: AreaBuckets,
    pub bonds: BondStats,
    pub aboav: AboavTable,
}
impl Report {
    pub fn total_area(&self) -> f64 {
        self.areas.total()
    }
    /// Total ring area over the squared mean bond length. An error if the
    /// mean bond length is zero.
    pub fn normalized_area(&self) -> Result<f64> {
        Ok(self.total_area() / bond_area(self.bonds.mean)?)
    }
    /// μ2 of the ring size distribution; an error if no rings survived.
    pub fn second_moment(&self) -> Result<f64> {
        self.histogram.second_moment()
    }
}

/// Run the full analysis on `graph`.
///
/// Any ring memberships left on the graph by an earlier run are discarded;
/// afterwards each vertex lists the filtered rings it belongs to.
pub fn analyze(graph: &mut Graph, settings: &RingSettings, lattice: &Lattice) -> Result<Report> {
    let bonds = BondStats::measure(graph, lattice)?;

    let mut set = rings::find_rings(graph, settings);
    set.reattach(graph);
    let found = set.len();
    let removed = rings::remove_composites(graph, &mut set, settings);
    set.reattach(graph);
    rings::order_rings(graph, &mut set);

    let (records, areas) = measure(graph, &set, settings.max_size, lattice);
    let histogram = RingHistogram::from_rings(&set, settings.max_size);
    let aboav = AboavTable::measure(graph, &set, settings.max_size);
    tracing::info!(
        found,
        removed,
        rings = records.len(),
        area = areas.total(),
        mean_bond = bonds.mean,
        "ring analysis finished"
    );
    Ok(Report {
        max_size: settings.max_size,
        rings: records,
        removed,
        histogram,
        areas,
        bonds,
        aboav,
    })
}

fn measure(
    graph: &Graph,
    set: &RingSet,
    max_size: usize,
    lattice: &Lattice,
) -> (Vec<RingRecord>, AreaBuckets) {
    let mut buckets = AreaBuckets::new(max_size);
    let records = set
        .iter()
        .map(|(_, ring)| {
            let area = ring_area(graph, ring.members(), lattice);
            buckets.add(ring.len(), area);
            RingRecord {
                members: ring.members().to_vec(),
                area,
            }
        })
        .collect();
    (records, buckets)
}
