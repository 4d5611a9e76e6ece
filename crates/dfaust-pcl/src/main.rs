//! Parse DFAUST meshes and sample points on their surface.
//!
//! Run: `cargo run --release -p dfaust-pcl -- --dfaust_path <DIR> --target_path <DIR>`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dfaust_pcl::{Cohort, ExportConfig, Exporter};
use surface_sample::DEFAULT_NUM_POINTS;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dfaust-pcl")]
#[command(version, about = "Parse DFAUST meshes and sample points on mesh", long_about = None)]
struct Cli {
    /// DFAUST base path containing folders of the sequence meshes
    #[arg(long = "dfaust_path")]
    dfaust_path: PathBuf,

    /// The target path in which to save the sampled point cloud sequences
    #[arg(long = "target_path")]
    target_path: PathBuf,

    /// The number of points to be sampled
    #[arg(long = "num_points", default_value_t = DEFAULT_NUM_POINTS)]
    num_points: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = ExportConfig::new(cli.dfaust_path, cli.target_path).with_num_points(cli.num_points);

    let mut exporter = Exporter::new(config, rand::rng())?;
    exporter
        .run(&Cohort::dfaust())
        .context("point cloud export aborted")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_underscored_flags() {
        let cli = Cli::try_parse_from([
            "dfaust-pcl",
            "--dfaust_path",
            "/data/dfaust",
            "--target_path",
            "/data/pcl",
            "--num_points",
            "100",
        ])
        .unwrap();
        assert_eq!(cli.dfaust_path, PathBuf::from("/data/dfaust"));
        assert_eq!(cli.target_path, PathBuf::from("/data/pcl"));
        assert_eq!(cli.num_points, 100);
    }

    #[test]
    fn num_points_defaults_to_twenty_thousand() {
        let cli = Cli::try_parse_from(["dfaust-pcl", "--dfaust_path", "a", "--target_path", "b"])
            .unwrap();
        assert_eq!(cli.num_points, 20_000);
    }

    #[test]
    fn paths_are_required() {
        assert!(Cli::try_parse_from(["dfaust-pcl", "--dfaust_path", "a"]).is_err());
        assert!(Cli::try_parse_from(["dfaust-pcl", "--dfaust-path", "a", "--target_path", "b"]).is_err());
    }
}
