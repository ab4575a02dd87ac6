use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ringstat",
    about = "Ring statistics of 2D bonded networks",
    version
)]
pub struct Cli {
    /// Atom coordinates in xyz format
    #[arg(value_name = "XYZ")]
    pub xyz: PathBuf,

    /// Parameter document (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Manual connectivity: a pair count followed by `i j` pairs
    #[arg(short = 'n', long, value_name = "FILE")]
    pub connections: Option<PathBuf>,

    /// Directory for the output tables
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,

    /// Override the basename from the parameter document
    #[arg(short, long)]
    pub basename: Option<String>,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}
