use crate::config::SpeciesFilter;
use crate::network::Graph;
use crate::{Error, Result};
use std::path::Path;

/// Read an xyz coordinate file into a graph with no bonds.
///
/// Records rejected by `filter` are skipped; the rest are indexed in file order.
pub fn read_xyz(path: impl AsRef<Path>, filter: &SpeciesFilter) -> Result<Graph> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_xyz(&text, path, filter)
}

/// Parse xyz text. `path` is only used in error messages.
pub fn parse_xyz(text: &str, path: &Path, filter: &SpeciesFilter) -> Result<Graph> {
    let mut lines = text.lines().enumerate().map(|(n, l)| (n + 1, l));
    let declared = match lines.next() {
        Some((_, l)) => l
            .trim()
            .parse::<usize>()
            .map_err(|_| Error::format(path, 1, format!("expected an atom count, found {l:?}")))?,
        None => return Err(Error::format(path, 1, "empty file")),
    };
    // title line
    lines.next();

    let mut graph = Graph::new();
    let mut records = 0;
    let mut dropped = 0;
    for (line, l) in lines {
        let mut tok = l.split_whitespace();
        let Some(species) = tok.next() else {
            continue;
        };
        let mut coord = || -> Result<f64> {
            let t = tok
                .next()
                .ok_or_else(|| Error::format(path, line, "expected `symbol x y z`"))?;
            t.parse()
                .map_err(|_| Error::format(path, line, format!("invalid coordinate {t:?}")))
        };
        let (x, y, z) = (coord()?, coord()?, coord()?);
        records += 1;
        if filter.accepts(species) {
            graph.add_vertex(species, x, y, z);
        } else {
            dropped += 1;
        }
    }
    if records != declared {
        return Err(Error::format(
            path,
            1,
            format!("declares {declared} atoms but {records} records were read"),
        ));
    }
    tracing::info!(atoms = records, vertices = graph.len(), dropped, "read coordinates");
    Ok(graph)
}
