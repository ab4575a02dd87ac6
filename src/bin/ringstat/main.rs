use anyhow::{Context, Result};
use clap::Parser;
use ringstat::prelude::*;
use ringstat::io;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let level = if cli.quiet {
        tracing::Level::WARN
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    let mut config = match &cli.config {
        Some(path) => Config::from_path(path)
            .with_context(|| format!("reading parameters from {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(name) = cli.basename {
        config.basename = name;
    }
    if config.bonding.cutoff().is_none() && cli.connections.is_none() {
        tracing::warn!("no bond cutoff and no connectivity file: the network has no bonds");
    }

    let mut graph = io::load_network(&cli.xyz, cli.connections.as_deref(), &config)
        .context("building the bonded network")?;
    let report = analyze(&mut graph, &config.rings, &config.lattice())
        .context("analysing rings")?;
    let written = io::write_report(&cli.output, &config.basename, &report)
        .context("writing ring statistics")?;

    println!("vertices     {}", graph.len());
    println!("bonds        {}", report.bonds.count);
    println!(
        "rings        {} ({} composite removed)",
        report.rings.len(),
        report.removed
    );
    for (size, count) in report.histogram.counts().iter().enumerate() {
        if *count > 0 {
            println!("  {size:>2}-rings  {count}");
        }
    }
    println!("mu2          {:.6}", report.second_moment()?);
    println!(
        "bond length  {:.6} +/- {:.6}",
        report.bonds.mean,
        report.bonds.std_dev()
    );
    println!("area/<b>^2   {:.6}", report.normalized_area()?);
    if let Some(fit) = report.aboav.fit() {
        println!(
            "aboav-weaire n*m(n) = {:.4} + {:.4} n",
            fit.intercept, fit.slope
        );
    }
    tracing::info!(tables = written.len(), dir = %cli.output.display(), "done");
    Ok(())
}
