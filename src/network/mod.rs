pub mod graph;
pub mod lattice;
pub mod point;
pub mod vertex;

pub use graph::Graph;
pub use lattice::Lattice;
pub use point::PointF;
pub use vertex::Vertex;
