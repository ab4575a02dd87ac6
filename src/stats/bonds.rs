use crate::network::{Graph, Lattice};
use crate::{Error, Result};

/// Bond length moments over every bond, measured in the xy projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondStats {
    pub count: usize,
    pub mean: f64,
    pub mean_square: f64,
}
impl BondStats {
    pub fn measure(graph: &Graph, lattice: &Lattice) -> Result<Self> {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for (a, b) in graph.edges() {
            let d = lattice.displacement(graph[a].position(), graph[b].position());
            let sq = d.sq_length();
            sum += sq.sqrt();
            sum_sq += sq;
            count += 1;
        }
        if count == 0 {
            return Err(Error::Statistics("bond length over a graph without bonds"));
        }
        let n = count as f64;
        Ok(Self {
            count,
            mean: sum / n,
            mean_square: sum_sq / n,
        })
    }
    pub fn variance(&self) -> f64 {
        (self.mean_square - self.mean * self.mean).max(0.0)
    }
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_bond_once() {
        let mut g = Graph::new();
        g.add_vertex("Si", 0.0, 0.0, 0.0);
        g.add_vertex("Si", 1.0, 0.0, 0.0);
        g.add_vertex("Si", 1.0, 3.0, 0.0);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        let s = BondStats::measure(&g, &Lattice::OPEN).unwrap();
        assert_eq!(s.count, 2);
        assert!((s.mean - 2.0).abs() < 1e-12);
        assert!((s.mean_square - 5.0).abs() < 1e-12);
        assert!((s.std_dev() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn uniform_bonds_have_zero_spread() {
        let mut g = Graph::new();
        for i in 0..4 {
            g.add_vertex("Si", 0.1 * i as f64, 0.0, 0.0);
        }
        for i in 0..3 {
            g.add_edge(i, i + 1).unwrap();
        }
        let s = BondStats::measure(&g, &Lattice::OPEN).unwrap();
        assert!(s.variance() >= 0.0);
        assert!(s.std_dev() < 1e-6);
    }

    #[test]
    fn periodic_bond_uses_nearest_image() {
        let mut g = Graph::new();
        g.add_vertex("Si", 0.5, 5.0, 0.0);
        g.add_vertex("Si", 9.5, 5.0, 0.0);
        g.add_edge(0, 1).unwrap();
        let s = BondStats::measure(&g, &Lattice::new(10.0, 10.0)).unwrap();
        assert!((s.mean - 1.0).abs() < 1e-12);
    }

    #[test]
    fn no_bonds_is_an_error() {
        let mut g = Graph::new();
        g.add_vertex("Si", 0.0, 0.0, 0.0);
        assert!(matches!(
            BondStats::measure(&g, &Lattice::OPEN),
            Err(Error::Statistics(_))
        ));
    }
}
