use crate::network::{Graph, Lattice, PointF};
use crate::{Error, Result};

/// Shoelace area of a closed polygon.
pub fn polygon_area(points: &[PointF]) -> f64 {
    let Some(&origin) = points.first() else {
        return 0.0;
    };
    let twice: f64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(&a, &b)| (a - origin).cross(b - origin))
        .sum();
    twice.abs() * 0.5
}

/// Positions of an ordered ring, each unwrapped next to its predecessor.
pub fn unwrapped_positions(graph: &Graph, order: &[usize], lattice: &Lattice) -> Vec<PointF> {
    let mut out = Vec::with_capacity(order.len());
    let Some(&first) = order.first() else {
        return out;
    };
    let mut cursor = graph[first].position();
    out.push(cursor);
    for pair in order.windows(2) {
        cursor += lattice.displacement(graph[pair[0]].position(), graph[pair[1]].position());
        out.push(cursor);
    }
    out
}

/// Enclosed area of an ordered ring in the xy projection.
pub fn ring_area(graph: &Graph, order: &[usize], lattice: &Lattice) -> f64 {
    polygon_area(&unwrapped_positions(graph, order, lattice))
}

/// Accumulated ring area per ring size.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaBuckets {
    sums: Vec<f64>,
}
impl AreaBuckets {
    pub fn new(max_size: usize) -> Self {
        Self {
            sums: vec![0.0; max_size],
        }
    }
    /// Add `area` to the bucket for `size`, growing the table if needed.
    pub fn add(&mut self, size: usize, area: f64) {
        if size >= self.sums.len() {
            self.sums.resize(size + 1, 0.0);
        }
        self.sums[size] += area;
    }
    pub fn get(&self, size: usize) -> f64 {
        self.sums.get(size).copied().unwrap_or(0.0)
    }
    pub fn sums(&self) -> &[f64] {
        &self.sums
    }
    pub fn total(&self) -> f64 {
        self.sums.iter().sum()
    }
    /// Areas divided by the squared mean bond length.
    pub fn normalized(&self, mean_bond: f64) -> Result<Vec<f64>> {
        let b2 = bond_area(mean_bond)?;
        Ok(self.sums.iter().map(|a| a / b2).collect())
    }
}

/// Square of the mean bond length, the unit for normalized areas.
pub(crate) fn bond_area(mean_bond: f64) -> Result<f64> {
    if mean_bond <= f64::EPSILON {
        return Err(Error::Statistics(
            "area normalization over zero mean bond length",
        ));
    }
    Ok(mean_bond * mean_bond)
}
