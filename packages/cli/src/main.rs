#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command line front end for orphan well region totals.
//!
//! Loads the well, county reference and boundary datasets once, then
//! prints region totals, view parameters or chart data, or writes a
//! choropleth `GeoJSON` file for a county or district view.

mod config;

use std::io::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use orphan_wells_aggregate::{StandingFilter, StandingTotals, charts, compute_region_totals};
use orphan_wells_loader::Dataset;
use orphan_wells_models::{DistrictCount, Granularity, HistogramBin};
use orphan_wells_view::ViewSpec;
use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "orphan_wells", about = "Abandoned well region totals")]
struct Cli {
    /// Path to a TOML config file (overrides `ORPHAN_WELLS_CONFIG`)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print per-county totals with their district totals
    Summary {
        /// Only count wells inactive for at least this many months
        #[arg(long, conflicts_with = "long_inactive")]
        min_months_inactive: Option<u32>,
        /// Use the configured long-inactive threshold
        #[arg(long)]
        long_inactive: bool,
        /// Output format
        #[arg(long, default_value = "csv")]
        format: OutputFormat,
    },
    /// Print totals for both standing filters as JSON
    Standing {
        /// Print only one table: `all` or `long-inactive`
        #[arg(long)]
        only: Option<StandingChoice>,
    },
    /// Print the count/label/hover parameters of a map view
    View {
        /// `county` or `district`
        granularity: Granularity,
    },
    /// Print months-inactive histogram and per-district bar data as JSON
    Charts {
        /// Histogram bin width in months (defaults to the configured width)
        #[arg(long)]
        bin_width: Option<u32>,
        /// Only count wells inactive for at least this many months
        #[arg(long)]
        min_months_inactive: Option<u32>,
    },
    /// Write choropleth `GeoJSON` for a map view
    Export {
        /// `county` or `district`
        #[arg(long)]
        granularity: Granularity,
        /// Only count wells inactive for at least this many months
        #[arg(long)]
        min_months_inactive: Option<u32>,
        /// Output file
        #[arg(long)]
        out: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
enum StandingChoice {
    All,
    LongInactive,
}

impl StandingChoice {
    const fn filter(self, long_inactive_months: u32) -> StandingFilter {
        match self {
            Self::All => StandingFilter::All,
            Self::LongInactive => StandingFilter::LongInactive {
                months: long_inactive_months,
            },
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChartData {
    title: String,
    min_months_inactive: Option<u32>,
    histogram: Vec<HistogramBin>,
    districts: Vec<DistrictCount>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Summary {
            min_months_inactive,
            long_inactive,
            format,
        } => {
            let (wells, geography) = Dataset::load_tables(&config.data, &config.columns)?;
            let filter = if long_inactive {
                StandingFilter::LongInactive {
                    months: config.long_inactive_months,
                }
                .min_months_inactive()
            } else {
                min_months_inactive
            };

            let totals = compute_region_totals(&wells, &geography, filter);
            match format {
                OutputFormat::Csv => {
                    orphan_wells_export::write_region_totals_csv(&mut out, &totals)?;
                }
                OutputFormat::Json => orphan_wells_export::write_json(&mut out, &totals)?,
            }
        }
        Commands::Standing { only } => {
            let (wells, geography) = Dataset::load_tables(&config.data, &config.columns)?;
            let standing =
                StandingTotals::compute(&wells, &geography, config.long_inactive_months);

            if let Some(choice) = only {
                let filter = choice.filter(config.long_inactive_months);
                let table = standing
                    .get(filter)
                    .ok_or_else(|| format!("No standing table for {}", filter.describe()))?;
                orphan_wells_export::write_json(&mut out, table)?;
            } else {
                orphan_wells_export::write_json(&mut out, &standing)?;
            }
        }
        Commands::View { granularity } => {
            orphan_wells_export::write_json(&mut out, &ViewSpec::from(granularity))?;
        }
        Commands::Charts {
            bin_width,
            min_months_inactive,
        } => {
            let (wells, _) = Dataset::load_tables(&config.data, &config.columns)?;
            let bin_width = bin_width.unwrap_or(config.histogram_bin_width);

            let filter = min_months_inactive
                .map_or(StandingFilter::All, |months| StandingFilter::LongInactive { months });

            let data = ChartData {
                title: filter.describe(),
                min_months_inactive,
                histogram: charts::months_inactive_histogram(
                    &wells,
                    bin_width,
                    min_months_inactive,
                )?,
                districts: charts::district_bar_counts(&wells, min_months_inactive),
            };
            orphan_wells_export::write_json(&mut out, &data)?;
        }
        Commands::Export {
            granularity,
            min_months_inactive,
            out: path,
        } => {
            let dataset = Dataset::load(&config.data, &config.columns)?;
            let totals =
                compute_region_totals(&dataset.wells, &dataset.geography, min_months_inactive);
            let view = ViewSpec::from(granularity);

            let collection = orphan_wells_export::choropleth_feature_collection(
                &totals,
                &dataset.boundaries,
                &view,
            );
            orphan_wells_export::write_choropleth(&path, &collection)?;
            writeln!(
                out,
                "Wrote {} features to {}",
                collection.features.len(),
                path.display()
            )?;
        }
    }

    out.flush()?;
    Ok(())
}
