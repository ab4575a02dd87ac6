//! Plain-text statistic tables, one `<basename>_<suffix>.dat` file each.

use crate::analysis::Report;
use crate::stats::{AboavTable, BondStats, RingHistogram};
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Sizes below this are left out of the histogram tables.
const FIRST_LISTED_SIZE: usize = 4;

pub fn write_ring_count(w: &mut impl Write, hist: &RingHistogram) -> std::io::Result<()> {
    writeln!(w, "Ring Statistics")?;
    for (size, count) in hist.counts().iter().enumerate() {
        writeln!(w, "{size} RINGS: {count}")?;
    }
    writeln!(w, "RING SUM: {}", hist.weighted_sum())?;
    writeln!(w, "SUM: {}", hist.total())?;
    match hist.mean() {
        Ok(mean) => writeln!(w, "AVERAGE: {mean:.6}")?,
        Err(_) => writeln!(w, "AVERAGE: undefined")?,
    }
    Ok(())
}

/// μ2 on the first line, then `size count`.
pub fn write_ring_hist(w: &mut impl Write, hist: &RingHistogram, mu2: f64) -> std::io::Result<()> {
    writeln!(w, "{mu2:.6}")?;
    for size in FIRST_LISTED_SIZE..hist.counts().len() {
        writeln!(w, "{size} {}", hist.count(size))?;
    }
    Ok(())
}

/// Normalized total area on the first line, then `size area/<b>^2`.
pub fn write_area_hist(w: &mut impl Write, total: f64, norm: &[f64]) -> std::io::Result<()> {
    writeln!(w, "{total:.6}")?;
    for (size, area) in norm.iter().enumerate().skip(FIRST_LISTED_SIZE) {
        writeln!(w, "{size} {area:.6}")?;
    }
    Ok(())
}

/// `size area` for each ring.
pub fn write_ring_dist(w: &mut impl Write, report: &Report) -> std::io::Result<()> {
    for ring in &report.rings {
        writeln!(w, "{} {:.6}", ring.size(), ring.area)?;
    }
    Ok(())
}

/// Ordered member indices, one ring per line.
pub fn write_ring_list(w: &mut impl Write, report: &Report) -> std::io::Result<()> {
    for ring in &report.rings {
        let line: Vec<_> = ring.members.iter().map(usize::to_string).collect();
        writeln!(w, "{}", line.join(" "))?;
    }
    Ok(())
}

pub fn write_bonds(w: &mut impl Write, bonds: &BondStats) -> std::io::Result<()> {
    writeln!(w, "bonds {}", bonds.count)?;
    writeln!(w, "mean {:.6}", bonds.mean)?;
    writeln!(w, "mean_square {:.6}", bonds.mean_square)?;
    writeln!(w, "std_dev {:.6}", bonds.std_dev())
}

pub fn write_aboav(w: &mut impl Write, table: &AboavTable) -> std::io::Result<()> {
    writeln!(w, "# n m(n) n*m(n) rings")?;
    for row in table.rows() {
        writeln!(
            w,
            "{} {:.6} {:.6} {}",
            row.size,
            row.mean_neighbor_size,
            row.product(),
            row.rings
        )?;
    }
    if let Some(fit) = table.fit() {
        writeln!(
            w,
            "# fit: n*m(n) = {:.6} + {:.6} n",
            fit.intercept, fit.slope
        )?;
    }
    Ok(())
}

/// Write every table into `dir`. Fails before writing anything if no rings
/// survived or the mean bond length is zero.
pub fn write_report(dir: &Path, basename: &str, report: &Report) -> Result<Vec<PathBuf>> {
    let mu2 = report.second_moment()?;
    let total_area = report.normalized_area()?;
    let norm = report.areas.normalized(report.bonds.mean)?;
    let path = |suffix: &str| dir.join(format!("{basename}_{suffix}.dat"));
    let written = vec![
        emit(path("ringCount"), |w| write_ring_count(w, &report.histogram))?,
        emit(path("ringhist"), |w| write_ring_hist(w, &report.histogram, mu2))?,
        emit(path("areahist"), |w| write_area_hist(w, total_area, &norm))?,
        emit(path("ringdist"), |w| write_ring_dist(w, report))?,
        emit(path("ringlist"), |w| write_ring_list(w, report))?,
        emit(path("bonds"), |w| write_bonds(w, &report.bonds))?,
        emit(path("aboav"), |w| write_aboav(w, &report.aboav))?,
    ];
    Ok(written)
}

fn emit(
    path: PathBuf,
    table: impl FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
) -> Result<PathBuf> {
    let file = File::create(&path).map_err(|e| Error::io(&path, e))?;
    let mut w = BufWriter::new(file);
    table(&mut w)
        .and_then(|_| w.flush())
        .map_err(|e| Error::io(&path, e))?;
    tracing::debug!(path = %path.display(), "wrote table");
    Ok(path)
}
