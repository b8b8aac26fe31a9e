//! The `simulate` subcommand: run the full pipeline and export the CSV.

use anyhow::Context;
use chrono::NaiveDate;
use log::info;
use rand::Rng;
use vinsim_core::csv_io;
use vinsim_core::record::DATE_FORMAT;
use vinsim_model::config::SimConfig;

fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .with_context(|| format!("invalid date '{s}', expected YYYY-MM-DD"))
}

/// Run a simulation and write the resulting daily table to `output`.
pub fn run_simulate(
    start_date: &str,
    end_date: &str,
    hectares: f64,
    seed: Option<u64>,
    output: &str,
) -> anyhow::Result<()> {
    let start_date = parse_date(start_date)?;
    let end_date = parse_date(end_date)?;
    let seed = seed.unwrap_or_else(|| {
        let fresh: u64 = rand::rng().random();
        info!("No seed given, drew {fresh}; pass --seed {fresh} to reproduce this run");
        fresh
    });

    let config = SimConfig {
        start_date,
        end_date,
        hectares,
        seed,
    };

    info!(
        "Simulating {} hectares from {} to {}",
        hectares, start_date, end_date
    );
    let records = vinsim_model::run_simulation(&config)
        .context("simulation failed")?;

    csv_io::write_records_to_path(output, &records)
        .with_context(|| format!("failed to write {output}"))?;

    info!("Simulation complete. {} rows written to {}", records.len(), output);
    Ok(())
}
