use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

use crate::data::filter::FacilityFilter;

/// Find the public restrooms nearest to a point in Seoul.
#[derive(Parser)]
#[command(author, version, about, long_about)]
pub struct Cli {
    /// Facility table (.csv, .json or .parquet). The built-in City Hall sample
    /// is used when omitted.
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub location: Location,

    /// Maximum number of facilities to list.
    #[clap(short = 'n', long, default_value = "5")]
    pub count: NonZeroUsize,

    /// Only facilities open 24 hours.
    #[clap(long)]
    pub open_24h: bool,

    /// Only facilities in these districts (repeat or comma-separate).
    #[clap(long, value_delimiter = ',')]
    pub in_district: Vec<String>,

    /// Only facilities whose name contains this text.
    #[clap(long)]
    pub name: Option<String>,

    #[clap(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

/// Where to search from. Exactly one is required.
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct Location {
    /// Reference point as `latitude,longitude`.
    #[clap(long, allow_hyphen_values = true)]
    pub at: Option<String>,

    /// Seoul district whose office is the reference point, e.g. `중구`.
    #[clap(long)]
    pub district: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
}

impl Cli {
    pub fn filter(&self) -> FacilityFilter {
        FacilityFilter {
            open_24_hours: self.open_24h,
            districts: self
                .in_district
                .iter()
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty())
                .collect(),
            name_contains: self.name.clone(),
        }
    }
}
