//! Command implementations for the vinsim CLI.
//!
//! Provides subcommands for running the vineyard simulation and for
//! producing annual-overview and vintage-detail reports from a previously
//! generated CSV.

use clap::Subcommand;

pub mod report;
pub mod simulate;

#[derive(Subcommand)]
pub enum Command {
    /// Run the simulation and write the daily table to a CSV file
    Simulate {
        /// First simulated day (YYYY-MM-DD)
        #[arg(long, default_value = "2015-08-01")]
        start_date: String,

        /// Last simulated day, inclusive (YYYY-MM-DD)
        #[arg(long, default_value = "2025-09-30")]
        end_date: String,

        /// Vineyard size in hectares
        #[arg(long, default_value_t = 600.0)]
        hectares: f64,

        /// Random seed; a fresh one is drawn and logged when omitted
        #[arg(long)]
        seed: Option<u64>,

        /// Output path for the daily records CSV
        #[arg(short = 'o', long, default_value = "simulated_vineyard_data.csv")]
        output: String,
    },

    /// Print per-year overview metrics from a simulated CSV
    Summary {
        /// Path to the daily records CSV
        #[arg(short = 'i', long)]
        input: String,

        /// Emit JSON instead of a plain-text table
        #[arg(long)]
        json: bool,
    },

    /// Print detail KPIs for one vintage (August of the given year through
    /// September of the next)
    Vintage {
        /// Path to the daily records CSV
        #[arg(short = 'i', long)]
        input: String,

        /// Starting year of the vintage, e.g. 2015 for the 2015/2016 annata
        #[arg(short = 'y', long)]
        year: i32,

        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Simulate {
            start_date,
            end_date,
            hectares,
            seed,
            output,
        } => simulate::run_simulate(&start_date, &end_date, hectares, seed, &output),
        Command::Summary { input, json } => report::run_summary(&input, json),
        Command::Vintage { input, year, json } => report::run_vintage(&input, year, json),
    }
}
