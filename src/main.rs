use std::{path::PathBuf, process::exit};

use anyhow::Result;
use clap::Parser;
use generator::{Generator, TableKind};
use log::{LevelFilter, error, info};

mod breakdown;
mod coarse;
mod combinatorics;
mod generator;
mod kings;
mod logging;
mod pawn_table;
mod signature;
mod table;

build_info::build_info!(fn build_info);

/// Writes the material weight tables a position sampler draws from.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory the table files are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Table to build, may be repeated. Builds every table when omitted
    #[arg(long = "table", value_enum)]
    tables: Vec<TableKind>,

    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() {
    let args = Args::parse();

    if let Err(err) = logging::setup_logger(args.log_level) {
        eprintln!("Failed to set up logging: {err:#}");
        exit(1);
    }

    let info = build_info();
    info!(
        "{} {} ({} build)",
        info.crate_info.name, info.crate_info.version, info.profile
    );

    if let Err(err) = run(&args) {
        error!("{err:#}");
        exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut tables = if args.tables.is_empty() {
        TableKind::ALL.to_vec()
    } else {
        args.tables.clone()
    };
    tables.sort();
    tables.dedup();

    let generator = Generator::new();
    generator.kings().log_summary();

    for kind in tables {
        generator.generate(kind, &args.out_dir)?;
    }

    Ok(())
}
