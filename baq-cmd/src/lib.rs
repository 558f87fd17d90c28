//! Command implementations for the BAQ CLI.
//!
//! Each subcommand loads the two read-only datasets, runs the filtering and
//! aggregation pipeline, and prints its output; rendering beyond plain text
//! and JSON is left to external collaborators.

use clap::Subcommand;

pub mod report;

#[derive(Subcommand)]
pub enum Command {
    /// List the distinct monitoring stations in the dataset
    Stations {
        /// Path to the pollution/weather CSV
        #[arg(short = 'p', long)]
        pollution_csv: String,

        /// Path to the wind-direction CSV
        #[arg(short = 'w', long)]
        wind_csv: String,
    },

    /// Print the datetime span covered by the dataset
    Span {
        /// Path to the pollution/weather CSV
        #[arg(short = 'p', long)]
        pollution_csv: String,

        /// Path to the wind-direction CSV
        #[arg(short = 'w', long)]
        wind_csv: String,
    },

    /// Build the dashboard report for a station and date range
    Report {
        /// Path to the pollution/weather CSV
        #[arg(short = 'p', long)]
        pollution_csv: String,

        /// Path to the wind-direction CSV
        #[arg(short = 'w', long)]
        wind_csv: String,

        /// Station name (defaults to the first station in the dataset)
        #[arg(short, long)]
        station: Option<String>,

        /// Range start date, YYYY-MM-DD (defaults to the dataset start)
        #[arg(long)]
        start: Option<String>,

        /// Range end date, YYYY-MM-DD (defaults to the dataset end)
        #[arg(long)]
        end: Option<String>,

        /// Emit the report as JSON for a rendering collaborator
        #[arg(long)]
        json: bool,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Stations {
            pollution_csv,
            wind_csv,
        } => report::run_stations(&pollution_csv, &wind_csv),
        Command::Span {
            pollution_csv,
            wind_csv,
        } => report::run_span(&pollution_csv, &wind_csv),
        Command::Report {
            pollution_csv,
            wind_csv,
            station,
            start,
            end,
            json,
        } => report::run_report(
            &pollution_csv,
            &wind_csv,
            station.as_deref(),
            start.as_deref(),
            end.as_deref(),
            json,
        ),
    }
}
