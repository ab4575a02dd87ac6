//! Aboav-Weaire neighbor ring size correlation.
//!
//! For a central ring of size `n`, its neighbors are the other rings that
//! share at least one vertex with it. `m(n)` is the mean neighbor ring size
//! averaged over all rings of size `n`; the Aboav-Weaire law predicts
//! `n * m(n)` to be linear in `n`.

use crate::network::Graph;
use crate::rings::RingSet;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AboavRow {
    pub size: usize,
    /// Central rings of this size that have at least one neighbor.
    pub rings: usize,
    /// m(n)
    pub mean_neighbor_size: f64,
}
impl AboavRow {
    pub fn product(&self) -> f64 {
        self.size as f64 * self.mean_neighbor_size
    }
}

/// Least-squares line `n * m(n) = intercept + slope * n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AboavFit {
    pub slope: f64,
    pub intercept: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AboavTable {
    sums: Vec<f64>,
    counts: Vec<usize>,
}
impl AboavTable {
    /// Aggregate over the live rings of `set`. Memberships on `graph` must
    /// describe exactly those rings.
    pub fn measure(graph: &Graph, set: &RingSet, max_size: usize) -> Self {
        let mut sums = vec![0.0; max_size];
        let mut counts = vec![0; max_size];
        let mut around = Vec::new();
        for (id, ring) in set.iter() {
            around.clear();
            for &v in ring.members() {
                around.extend(graph[v].rings().iter().copied().filter(|&r| r != id));
            }
            around.sort_unstable();
            around.dedup();
            if around.is_empty() || ring.len() >= max_size {
                continue;
            }
            let total: usize = around.iter().map(|&r| set.get(r).len()).sum();
            sums[ring.len()] += total as f64 / around.len() as f64;
            counts[ring.len()] += 1;
        }
        Self { sums, counts }
    }
    /// m(n), or `None` if no ring of size `n` had neighbors.
    pub fn mean_neighbor_size(&self, size: usize) -> Option<f64> {
        match self.counts.get(size) {
            Some(&c) if c > 0 => Some(self.sums[size] / c as f64),
            _ => None,
        }
    }
    pub fn rows(&self) -> impl Iterator<Item = AboavRow> + '_ {
        (0..self.counts.len()).filter_map(|size| {
            self.mean_neighbor_size(size).map(|m| AboavRow {
                size,
                rings: self.counts[size],
                mean_neighbor_size: m,
            })
        })
    }
    /// Fit over populated sizes; needs at least two of them.
    pub fn fit(&self) -> Option<AboavFit> {
        let rows: Vec<_> = self.rows().collect();
        if rows.len() < 2 {
            return None;
        }
        let n = rows.len() as f64;
        let mx = rows.iter().map(|r| r.size as f64).sum::<f64>() / n;
        let my = rows.iter().map(AboavRow::product).sum::<f64>() / n;
        let (sxy, sxx) = rows.iter().fold((0.0, 0.0), |(sxy, sxx), r| {
            let dx = r.size as f64 - mx;
            (sxy + dx * (r.product() - my), sxx + dx * dx)
        });
        let slope = sxy / sxx;
        Some(AboavFit {
            slope,
            intercept: my - slope * mx,
        })
    }
}
