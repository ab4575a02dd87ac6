use super::*;
use crate::network::Graph;
use ahash::AHashMap;
use std::collections::hash_map::Entry;

/// Every ring found in one analysis run.
///
/// Removal leaves a tombstone so [`RingId`]s stay valid for the whole run;
/// iteration only yields live rings, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct RingSet {
    rings: Vec<Ring>,
    live: Vec<bool>,
    lookup: AHashMap<Box<[usize]>, RingId>,
}
impl RingSet {
    pub fn new() -> Self {
        Self::default()
    }
    /// Register a ring, returning its id and whether it was new.
    pub fn insert(&mut self, ring: Ring) -> (RingId, bool) {
        match self.lookup.entry(ring.key().into()) {
            Entry::Occupied(e) => (*e.get(), false),
            Entry::Vacant(e) => {
                let id = RingId(self.rings.len());
                self.rings.push(ring);
                self.live.push(true);
                e.insert(id);
                (id, true)
            }
        }
    }
    /// Remove a ring by value. Returns `false` if no live ring has the same members.
    pub fn remove(&mut self, ring: &Ring) -> bool {
        match self.lookup.remove(ring.key()) {
            Some(id) => {
                self.live[id.0] = false;
                true
            }
            None => false,
        }
    }
    pub fn contains(&self, ring: &Ring) -> bool {
        self.lookup.contains_key(ring.key())
    }
    /// Look up a ring by id. Removed rings are still reachable here.
    pub fn get(&self, id: RingId) -> &Ring {
        &self.rings[id.0]
    }
    pub fn is_live(&self, id: RingId) -> bool {
        self.live[id.0]
    }
    pub fn len(&self) -> usize {
        self.lookup.len()
    }
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (RingId, &Ring)> + '_ {
        self.rings
            .iter()
            .enumerate()
            .filter(|(n, _)| self.live[*n])
            .map(|(n, r)| (RingId(n), r))
    }
    /// Record every live ring on each of its member vertices.
    pub fn attach(&self, graph: &mut Graph) {
        for (id, ring) in self.iter() {
            for &v in ring.members() {
                graph.vertex_mut(v).rings.push(id);
            }
        }
    }
    /// Clear all memberships and attach the live rings again.
    pub fn reattach(&self, graph: &mut Graph) {
        graph.clear_rings();
        self.attach(graph);
    }
    pub(crate) fn get_mut(&mut self, id: RingId) -> &mut Ring {
        &mut self.rings[id.0]
    }
}
