use crate::network::Graph;
use crate::{Error, Result};
use std::path::Path;

/// Bond every pair of vertices closer than `cutoff` in 3D. Returns the number of new bonds.
pub fn connect_within(graph: &mut Graph, cutoff: f64) -> Result<usize> {
    let mut added = 0;
    for i in 0..graph.len() {
        for j in (i + 1)..graph.len() {
            let (a, b) = (&graph[i], &graph[j]);
            let (dx, dy, dz) = (a.x - b.x, a.y - b.y, a.z - b.z);
            let r = (dx * dx + dy * dy + dz * dz).sqrt();
            if r > 0.0 && r < cutoff && graph.add_edge(i, j)? {
                added += 1;
            }
        }
    }
    tracing::info!(cutoff, bonds = added, "distance bonding finished");
    Ok(added)
}

/// Apply a manual connectivity file to `graph`.
pub fn read_connectivity(path: impl AsRef<Path>, graph: &mut Graph) -> Result<usize> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_connectivity(&text, path, graph)
}

/// Parse a declared pair count followed by one `i j` pair per line.
///
/// The whole file is validated before any bond is added, so on error the
/// graph is unchanged. Returns the number of pairs applied.
pub fn parse_connectivity(text: &str, path: &Path, graph: &mut Graph) -> Result<usize> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(n, l)| (n + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());
    let declared = match lines.next() {
        Some((line, l)) => l.parse::<usize>().map_err(|_| {
            Error::format(path, line, format!("expected a connection count, found {l:?}"))
        })?,
        None => return Err(Error::format(path, 1, "empty file")),
    };

    let mut pairs = Vec::with_capacity(declared);
    for (line, l) in lines {
        let idx: Vec<usize> = l
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()
            .map_err(|_| Error::format(path, line, format!("expected `i j`, found {l:?}")))?;
        let &[i, j] = idx.as_slice() else {
            return Err(Error::format(path, line, format!("expected `i j`, found {l:?}")));
        };
        pairs.push((i, j));
    }
    if pairs.len() != declared {
        return Err(Error::Consistency {
            path: path.to_owned(),
            declared,
            read: pairs.len(),
        });
    }
    let count = graph.len();
    if let Some(&index) = pairs.iter().flat_map(|(i, j)| [i, j]).find(|&&v| v >= count) {
        return Err(Error::UnknownVertex { index, count });
    }
    for &(i, j) in &pairs {
        graph.add_edge(i, j)?;
    }
    tracing::info!(connections = pairs.len(), "applied manual connections");
    Ok(pairs.len())
}
