use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wxstate_cli::parse_record;
use wxstate_core::{FlightCategory, MinimaTable};

#[derive(Parser, Debug)]
#[command(author, version, about = "Classify a stream of observation records", long_about = None)]
struct Args {
    /// Input file with one AIRPORT,CEILING,VISIBILITY[,...] record per line.
    /// Reads stdin when omitted.
    input: Option<PathBuf>,
}

#[derive(Debug, Default)]
struct Tally {
    imc: usize,
    mmc: usize,
    vmc: usize,
    unclassified: usize,
    skipped: usize,
}

impl Tally {
    fn record(&mut self, category: Option<FlightCategory>) {
        match category {
            Some(FlightCategory::Imc) => self.imc += 1,
            Some(FlightCategory::Mmc) => self.mmc += 1,
            Some(FlightCategory::Vmc) => self.vmc += 1,
            None => self.unclassified += 1,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let table = MinimaTable::standard();
    let mut tally = Tally::default();

    for (number, line) in reader.lines().enumerate() {
        let line = line.context("reading input")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let observation = match parse_record(line) {
            Ok(observation) => observation,
            Err(err) => {
                tracing::warn!(line = number + 1, %err, "skipping malformed record");
                tally.skipped += 1;
                continue;
            }
        };

        let category = table.classify(&observation);
        tally.record(category);
        match category {
            Some(category) => println!(
                "{} {}/{} -> {}",
                observation.airport, observation.ceiling_ft, observation.visibility_sm, category
            ),
            None => println!(
                "{} {}/{} -> unclassified",
                observation.airport, observation.ceiling_ft, observation.visibility_sm
            ),
        }
    }

    println!(
        "# {} | IMC {} | MMC {} | VMC {} | unclassified {} | skipped {}",
        Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
        tally.imc,
        tally.mmc,
        tally.vmc,
        tally.unclassified,
        tally.skipped
    );

    Ok(())
}
