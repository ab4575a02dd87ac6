use super::*;
use crate::{Error, Result};
use std::ops::Index;

/// Bonded-atom network. Owns every vertex; edges are stored as sorted
/// neighbor indices on both endpoints.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Graph {
    vertices: Vec<Vertex>,
}
impl Graph {
    pub fn new() -> Self {
        Self::default()
    }
    /// Append a vertex and return its index.
    pub fn add_vertex(&mut self, species: impl Into<String>, x: f64, y: f64, z: f64) -> usize {
        let index = self.vertices.len();
        self.vertices.push(Vertex::new(index, species, x, y, z));
        index
    }
    /// Bond `a` and `b`. Returns `false` if the bond already existed.
    pub fn add_edge(&mut self, a: usize, b: usize) -> Result<bool> {
        self.check(a)?;
        self.check(b)?;
        if a == b {
            tracing::warn!(vertex = a, "ignoring bond from a vertex to itself");
            return Ok(false);
        }
        let added = self.vertices[a].link(b);
        self.vertices[b].link(a);
        Ok(added)
    }
    /// Break the bond between `a` and `b`. Unknown vertices and missing bonds are a no-op.
    pub fn remove_edge(&mut self, a: usize, b: usize) -> bool {
        if a >= self.len() || b >= self.len() {
            return false;
        }
        let removed = self.vertices[a].unlink(b);
        self.vertices[b].unlink(a);
        removed
    }
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.vertices.get(a).is_some_and(|v| v.is_bonded_to(b))
    }
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    pub fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
    /// Bonded neighbors of `index`, sorted. Empty for an unknown vertex.
    pub fn neighbors(&self, index: usize) -> &[usize] {
        self.vertices.get(index).map_or(&[][..], |v| v.neighbors.as_slice())
    }
    /// Every bond once, lower index first.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.vertices.iter().flat_map(|v| {
            v.neighbors
                .iter()
                .filter(move |&&n| n > v.index)
                .map(move |&n| (v.index, n))
        })
    }
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }
    /// Drop all ring memberships, e.g. before reattaching a filtered ring set.
    pub fn clear_rings(&mut self) {
        for v in &mut self.vertices {
            v.rings.clear();
        }
    }
    pub(crate) fn vertex_mut(&mut self, index: usize) -> &mut Vertex {
        &mut self.vertices[index]
    }
    fn check(&self, index: usize) -> Result<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(Error::UnknownVertex {
                index,
                count: self.len(),
            })
        }
    }
}
impl Index<usize> for Graph {
    type Output = Vertex;

    fn index(&self, index: usize) -> &Vertex {
        &self.vertices[index]
    }
}
