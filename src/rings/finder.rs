//! Shortest-path ring search.
//!
//! For every vertex `v` and every pair of its neighbors `(a, b)`, the
//! shortest path from `a` to `b` that avoids `v` closes the smallest ring
//! containing the bonds `a-v` and `v-b`. The search is breadth-first, so the
//! first time `b` is reached the path is minimal; ties are broken by lowest
//! neighbor index because adjacency lists are kept sorted.

use super::*;
use crate::network::Graph;
use std::collections::VecDeque;

const UNSEEN: usize = usize::MAX;

/// Scratch buffers reused across searches.
struct Search {
    parent: Vec<usize>,
    depth: Vec<usize>,
    touched: Vec<usize>,
    queue: VecDeque<usize>,
}
impl Search {
    fn new(n: usize) -> Self {
        Self {
            parent: vec![UNSEEN; n],
            depth: vec![0; n],
            touched: Vec::new(),
            queue: VecDeque::new(),
        }
    }
    fn reset(&mut self) {
        for &t in &self.touched {
            self.parent[t] = UNSEEN;
        }
        self.touched.clear();
        self.queue.clear();
    }
    fn visit(&mut self, node: usize, parent: usize, depth: usize) {
        self.parent[node] = parent;
        self.depth[node] = depth;
        self.touched.push(node);
        self.queue.push_back(node);
    }
    /// Shortest path `from -> to` avoiding `skip`, at most `max_edges` long.
    fn shortest_path(
        &mut self,
        graph: &Graph,
        from: usize,
        to: usize,
        skip: usize,
        max_edges: usize,
    ) -> Option<Vec<usize>> {
        self.reset();
        self.visit(from, from, 0);
        self.parent[skip] = skip;
        self.touched.push(skip);
        while let Some(cur) = self.queue.pop_front() {
            let d = self.depth[cur];
            if d >= max_edges {
                continue;
            }
            for &n in graph.neighbors(cur) {
                if self.parent[n] != UNSEEN {
                    continue;
                }
                self.visit(n, cur, d + 1);
                if n == to {
                    let mut path = vec![to];
                    let mut at = to;
                    while at != from {
                        at = self.parent[at];
                        path.push(at);
                    }
                    path.reverse();
                    return Some(path);
                }
            }
        }
        None
    }
}

/// Smallest rings through `v`, one per pair of neighbors, with at most `max_len` members.
/// An unknown vertex has no rings.
pub fn rings_through(graph: &Graph, v: usize, max_len: usize) -> Vec<Ring> {
    let mut search = Search::new(graph.len());
    rings_through_with(graph, v, max_len, &mut search)
}

fn rings_through_with(graph: &Graph, v: usize, max_len: usize, search: &mut Search) -> Vec<Ring> {
    let nbrs = graph.neighbors(v);
    let mut out = Vec::new();
    if nbrs.len() < 2 || max_len < 3 {
        return out;
    }
    // the ring is v plus the path, so the path may use max_len - 2 bonds
    let max_edges = max_len - 2;
    for (i, &a) in nbrs.iter().enumerate() {
        for &b in &nbrs[(i + 1)..] {
            let Some(path) = search.shortest_path(graph, a, b, v, max_edges) else {
                continue;
            };
            let mut members = Vec::with_capacity(path.len() + 1);
            members.push(v);
            members.extend(path);
            out.push(Ring::new(members));
        }
    }
    out
}

/// Find rings through every vertex, deduplicated into a single set.
///
/// Rings have between 3 and `settings.max_size - 1` members. Memberships are
/// not attached here; call [`RingSet::attach`] afterwards.
pub fn find_rings(graph: &Graph, settings: &RingSettings) -> RingSet {
    let max_len = settings.max_size.saturating_sub(1);
    let mut set = RingSet::new();
    let mut search = Search::new(graph.len());
    for v in graph.vertices() {
        let found = rings_through_with(graph, v.index, max_len, &mut search);
        if !found.is_empty() {
            tracing::debug!(vertex = v.index, rings = found.len(), "rings through vertex");
        }
        for ring in found {
            set.insert(ring);
        }
    }
    tracing::info!(rings = set.len(), max_len, "ring detection finished");
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(n: usize) -> Graph {
        let mut g = Graph::new();
        for i in 0..n {
            let t = i as f64 / n as f64 * std::f64::consts::TAU;
            g.add_vertex("Si", t.cos(), t.sin(), 0.0);
        }
        for i in 0..n {
            g.add_edge(i, (i + 1) % n).unwrap();
        }
        g
    }

    #[test]
    fn single_cycle_is_found_once() {
        let g = cycle(6);
        let set = find_rings(&g, &RingSettings::default());
        assert_eq!(set.len(), 1);
        let (_, ring) = set.iter().next().unwrap();
        assert_eq!(ring.key(), &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn ring_members_are_bonded_in_walk_order() {
        let g = cycle(7);
        for ring in rings_through(&g, 3, 11) {
            let m = ring.members();
            for i in 0..m.len() {
                assert!(g.has_edge(m[i], m[(i + 1) % m.len()]));
            }
        }
    }

    #[test]
    fn respects_the_size_bound() {
        let g = cycle(11);
        let bounded = RingSettings {
            max_size: 11,
            ..RingSettings::default()
        };
        assert!(find_rings(&g, &bounded).is_empty());
        assert_eq!(find_rings(&g, &RingSettings::default()).len(), 1);
    }

    #[test]
    fn low_degree_vertices_contribute_nothing() {
        let mut g = Graph::new();
        g.add_vertex("Si", 0.0, 0.0, 0.0);
        g.add_vertex("Si", 1.0, 0.0, 0.0);
        g.add_vertex("Si", 2.0, 0.0, 0.0);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        assert!(rings_through(&g, 0, 11).is_empty());
        assert!(rings_through(&g, 1, 11).is_empty());
        assert!(rings_through(&g, 7, 11).is_empty());
        assert!(find_rings(&g, &RingSettings::default()).is_empty());
    }

    #[test]
    fn shared_bond_gives_two_small_rings() {
        // two squares sharing the bond 1-4
        let mut g = Graph::new();
        for (x, y) in [(0., 0.), (1., 0.), (2., 0.), (0., 1.), (1., 1.), (2., 1.)] {
            g.add_vertex("C", x, y, 0.0);
        }
        for (a, b) in [(0, 1), (1, 2), (0, 3), (1, 4), (2, 5), (3, 4), (4, 5)] {
            g.add_edge(a, b).unwrap();
        }
        let set = find_rings(&g, &RingSettings::default());
        let mut keys: Vec<_> = set.iter().map(|(_, r)| r.key().to_vec()).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![vec![0, 1, 2, 3, 4, 5], vec![0, 1, 3, 4], vec![1, 2, 4, 5]]
        );
    }
}
