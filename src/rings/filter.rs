use super::*;
use crate::network::Graph;

/// Remove rings that look like the union of smaller rings.
///
/// For each vertex in index order, a live ring of at least
/// `composite_min_size` members is dropped from `set` when it shares more
/// than `composite_threshold` vertices with a smaller ring on the same
/// vertex. Memberships are read from `graph` and left untouched, so callers
/// should [`RingSet::reattach`] afterwards. Returns the number of rings removed.
pub fn remove_composites(graph: &Graph, set: &mut RingSet, settings: &RingSettings) -> usize {
    let mut removed = 0;
    for v in graph.vertices() {
        for &k in v.rings() {
            if !set.is_live(k) || set.get(k).len() < settings.composite_min_size {
                continue;
            }
            let big = set.get(k);
            let composite = v.rings().iter().any(|&l| {
                let small = set.get(l);
                small.len() < big.len() && big.shared_with(small) > settings.composite_threshold
            });
            if composite {
                let big = big.clone();
                tracing::debug!(vertex = v.index, members = ?big.key(), "removing composite ring");
                set.remove(&big);
                removed += 1;
            }
        }
    }
    tracing::info!(removed, remaining = set.len(), "composite ring filter finished");
    removed
}
