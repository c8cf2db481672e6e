//! CLI for the campus map-quiz engine.
//!
//! Provides:
//! - Region catalog inspection (resolved extents, bounds, corners)
//! - One-off point judgments
//! - Full scripted or seeded-random game replays against a file-backed
//!   high-score store

mod play;
mod store;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use mapquiz_core::{catalog, Contains, Extent, LatLng, Region};

use crate::play::Replay;
use crate::store::FileStore;

#[derive(Parser)]
#[command(name = "mapquiz")]
#[command(about = "Campus landmark-guessing quiz engine", long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("MAPQUIZ_BUILD_SHA"), ")"))]
struct Cli {
    /// Region config (JSON array); defaults to the built-in campus catalog
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the region catalog with resolved extents
    Regions,

    /// Judge a single point against one region
    Judge {
        /// Region name
        #[arg(short, long)]
        region: String,

        /// Query latitude (degrees)
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Query longitude (degrees)
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
    },

    /// Replay a full game and persist the best time
    Play {
        /// Click script (JSON array of {lat, lng}); seeded-random clicks if
        /// omitted
        #[arg(long)]
        clicks: Option<PathBuf>,

        /// Seed for random clicks
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Seconds each answer takes
        #[arg(long, default_value = "5")]
        answer_secs: u64,

        /// High-score file
        #[arg(long, default_value = "high_score.json")]
        store: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let regions = load_regions(cli.config.as_deref())?;

    match cli.command {
        Commands::Regions => print_regions(&regions),
        Commands::Judge { region, lat, lng } => judge(&regions, &region, lat, lng),
        Commands::Play {
            clicks,
            seed,
            answer_secs,
            store,
        } => {
            let replay = match clicks {
                Some(path) => {
                    let json = fs::read_to_string(&path)
                        .with_context(|| format!("reading {}", path.display()))?;
                    let clicks: Vec<LatLng> = serde_json::from_str(&json)
                        .with_context(|| format!("parsing {}", path.display()))?;
                    Replay::scripted(clicks, answer_secs)
                }
                None => Replay::random(&regions, seed, answer_secs),
            };
            let mut store = FileStore::load(store)?;
            replay.run(regions, &mut store)
        }
    }
}

fn load_regions(path: Option<&Path>) -> Result<Vec<Region>> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Ok(catalog::parse(&json)?)
        }
        None => Ok(catalog::builtin()),
    }
}

fn print_regions(regions: &[Region]) -> Result<()> {
    let rows: Vec<serde_json::Value> = regions
        .iter()
        .map(|r| {
            serde_json::json!({
                "name": r.name,
                "center": r.center(),
                "extent": match r.extent() {
                    Extent::Radius(radius) => serde_json::json!({
                        "kind": "radius",
                        "radius": radius,
                    }),
                    Extent::Quad { width, north, south, rotation } => serde_json::json!({
                        "kind": "quad",
                        "width": width,
                        "north": north,
                        "south": south,
                        "rotation": rotation,
                    }),
                },
                "bounds": r.bounds(),
                "corners": r.corners(),
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn judge(regions: &[Region], name: &str, lat: f64, lng: f64) -> Result<()> {
    let region = regions.iter().find(|r| r.name == name).with_context(|| {
        format!(
            "unknown region {:?}; known: {}",
            name,
            regions.iter().map(|r| &r.name).join(", ")
        )
    })?;
    let point = LatLng::new(lat, lng);
    let verdict = region.contains(&point);
    println!(
        "{} {} {}",
        region.name,
        if verdict { "contains" } else { "does not contain" },
        point
    );
    Ok(())
}
