use super::PointF;
use crate::rings::RingId;

#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub index: usize,
    /// Element symbol as read from input; only used for filtering.
    pub species: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub(crate) neighbors: Vec<usize>,
    pub(crate) rings: Vec<RingId>,
}
impl Vertex {
    pub fn new(index: usize, species: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            index,
            species: species.into(),
            x,
            y,
            z,
            neighbors: Vec::new(),
            rings: Vec::new(),
        }
    }
    /// Position projected onto the xy plane.
    pub fn position(&self) -> PointF {
        PointF(self.x, self.y)
    }
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
    pub fn is_bonded_to(&self, other: usize) -> bool {
        self.neighbors.binary_search(&other).is_ok()
    }
    /// Rings this vertex currently belongs to.
    pub fn rings(&self) -> &[RingId] {
        &self.rings
    }
    pub(crate) fn link(&mut self, other: usize) -> bool {
        match self.neighbors.binary_search(&other) {
            Ok(_) => false,
            Err(pos) => {
                self.neighbors.insert(pos, other);
                true
            }
        }
    }
    pub(crate) fn unlink(&mut self, other: usize) -> bool {
        match self.neighbors.binary_search(&other) {
            Ok(pos) => {
                self.neighbors.remove(pos);
                true
            }
            Err(_) => false,
        }
    }
}
