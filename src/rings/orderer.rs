use super::*;
use crate::network::Graph;

/// Put a ring's members into a bonded cyclic order.
///
/// The walk starts at the lowest-index member and always tries the
/// lower-index bonded member first, backtracking if a choice cannot close
/// the cycle, so the result is deterministic for a given ring and graph.
pub fn order_ring(graph: &Graph, ring: &Ring) -> Vec<usize> {
    let key = ring.key();
    let Some(&start) = key.first() else {
        return Vec::new();
    };
    let mut path = Vec::with_capacity(key.len());
    let mut used = vec![false; key.len()];
    path.push(start);
    used[0] = true;
    if extend(graph, key, &mut path, &mut used) {
        path
    } else {
        tracing::warn!(members = ?key, "ring has no bonded cyclic order, keeping walk order");
        ring.members().to_vec()
    }
}

fn extend(graph: &Graph, key: &[usize], path: &mut Vec<usize>, used: &mut [bool]) -> bool {
    let last = path[path.len() - 1];
    if path.len() == key.len() {
        return graph.has_edge(last, path[0]);
    }
    for &n in graph.neighbors(last) {
        let Ok(slot) = key.binary_search(&n) else {
            continue;
        };
        if used[slot] {
            continue;
        }
        used[slot] = true;
        path.push(n);
        if extend(graph, key, path, used) {
            return true;
        }
        path.pop();
        used[slot] = false;
    }
    false
}

/// Order every live ring of `set` in place.
pub fn order_rings(graph: &Graph, set: &mut RingSet) {
    let ids: Vec<_> = set.iter().map(|(id, _)| id).collect();
    for id in ids {
        let order = order_ring(graph, set.get(id));
        set.get_mut(id).set_order(order);
    }
}
