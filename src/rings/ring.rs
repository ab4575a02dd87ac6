use std::hash::{Hash, Hasher};

/// Handle to a ring stored in a [`RingSet`](super::RingSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RingId(pub usize);

/// A closed path of bonded vertices.
///
/// `members` keeps walk order (detection order until the ring is ordered),
/// while `key` is the sorted member list used for equality and hashing:
/// two rings are the same ring iff they contain the same vertices.
#[derive(Debug, Clone)]
pub struct Ring {
    members: Vec<usize>,
    key: Box<[usize]>,
}
impl Ring {
    pub fn new(members: Vec<usize>) -> Self {
        let mut key = members.clone().into_boxed_slice();
        key.sort_unstable();
        debug_assert!(key.windows(2).all(|w| w[0] != w[1]), "repeated ring member");
        Self { members, key }
    }
    pub fn len(&self) -> usize {
        self.members.len()
    }
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
    pub fn members(&self) -> &[usize] {
        &self.members
    }
    /// Members sorted by index.
    pub fn key(&self) -> &[usize] {
        &self.key
    }
    pub fn contains(&self, vertex: usize) -> bool {
        self.key.binary_search(&vertex).is_ok()
    }
    /// Number of vertices this ring has in common with `other`.
    pub fn shared_with(&self, other: &Ring) -> usize {
        let (mut i, mut j, mut n) = (0, 0, 0);
        while i < self.key.len() && j < other.key.len() {
            match self.key[i].cmp(&other.key[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    n += 1;
                    i += 1;
                    j += 1;
                }
            }
        }
        n
    }
    pub(crate) fn set_order(&mut self, order: Vec<usize>) {
        debug_assert_eq!(Ring::new(order.clone()), *self);
        self.members = order;
    }
}
impl PartialEq for Ring {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}
impl Eq for Ring {}
impl Hash for Ring {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_walk_order() {
        assert_eq!(Ring::new(vec![4, 1, 9, 2]), Ring::new(vec![2, 9, 1, 4]));
        assert_ne!(Ring::new(vec![4, 1, 9]), Ring::new(vec![4, 1, 8]));
    }

    #[test]
    fn counts_shared_vertices() {
        let a = Ring::new(vec![0, 1, 2, 3, 4, 5]);
        let b = Ring::new(vec![4, 5, 6, 7, 8, 9, 10, 0]);
        assert_eq!(a.shared_with(&b), 3);
        assert_eq!(b.shared_with(&a), 3);
        assert!(b.contains(10));
        assert!(!a.contains(10));
    }
}
