pub mod connect;
pub mod report;
pub mod xyz;

pub use connect::{connect_within, parse_connectivity, read_connectivity};
pub use report::write_report;
pub use xyz::{parse_xyz, read_xyz};

use crate::config::Config;
use crate::network::Graph;
use crate::Result;
use std::path::Path;

/// Build the bonded network: coordinates, distance bonds, manual
/// connections, then the configured bond edits.
pub fn load_network(xyz: &Path, connections: Option<&Path>, config: &Config) -> Result<Graph> {
    let mut graph = read_xyz(xyz, &config.species)?;
    if let Some(cutoff) = config.bonding.cutoff() {
        connect_within(&mut graph, cutoff)?;
    }
    if let Some(path) = connections {
        read_connectivity(path, &mut graph)?;
    }
    for &[a, b] in &config.edits.add {
        graph.add_edge(a, b)?;
    }
    for &[a, b] in &config.edits.remove {
        if !graph.remove_edge(a, b) {
            tracing::warn!(a, b, "bond listed for removal does not exist");
        }
    }
    let isolated = graph.vertices().iter().filter(|v| v.degree() == 0).count();
    if isolated > 0 {
        tracing::warn!(isolated, "vertices without any bond");
    }
    Ok(graph)
}
