use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use thiserror::Error;

use crate::domain::transport::TransportMode;
use crate::services::city_profiles_yaml::load_city_profiles_from_yaml_file;
use crate::services::registry::CityProfileRegistry;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Simulate one representative's working day in a city
    SimulateDay {
        /// City name; see `cities` for the registry
        #[arg(short, long)]
        city: String,
        /// Specialization label, e.g. "cardiologists" or "pharmacies"
        #[arg(short, long)]
        specialization: String,
        /// Number of visits planned for the day
        #[arg(short, long)]
        visits: u32,
        /// Transport mode
        #[arg(short, long, value_enum, default_value = "car")]
        transport: TransportMode,
        /// Seed for a reproducible day
        #[arg(long)]
        seed: Option<u64>,
        /// Optional output file for the full result
        #[arg(short, long)]
        output: Option<String>,
        /// Output file format
        #[arg(short, long, value_enum, default_value = "yaml")]
        format: OutputFormat,
        /// City profiles YAML file replacing the built-in registry
        #[arg(long)]
        cities: Option<String>,
    },
    /// Run a Monte Carlo batch of simulated days
    MonteCarlo {
        /// City name; see `cities` for the registry
        #[arg(short, long)]
        city: String,
        /// Specialization label, e.g. "cardiologists" or "pharmacies"
        #[arg(short, long)]
        specialization: String,
        /// Number of visits planned per day
        #[arg(short, long)]
        visits: u32,
        /// Transport mode
        #[arg(short, long, value_enum, default_value = "car")]
        transport: TransportMode,
        /// Number of simulated days
        #[arg(short = 'n', long, default_value_t = 1000)]
        iterations: usize,
        /// Master seed for a reproducible batch
        #[arg(long)]
        seed: Option<u64>,
        /// Output file; the histogram lands next to it as `<output>.png`
        #[arg(short, long)]
        output: String,
        /// Output file format
        #[arg(short, long, value_enum, default_value = "yaml")]
        format: OutputFormat,
        /// City profiles YAML file replacing the built-in registry
        #[arg(long)]
        cities: Option<String>,
    },
    /// Size the field team for a multi-week visit project
    SizeWorkforce {
        /// City name; see `cities` for the registry
        #[arg(short, long)]
        city: String,
        /// Specialization label, e.g. "cardiologists" or "pharmacies"
        #[arg(short, long)]
        specialization: String,
        /// Transport mode
        #[arg(short, long, value_enum, default_value = "car")]
        transport: TransportMode,
        /// Total visits the project must complete
        #[arg(long)]
        total_visits: u32,
        /// Visits one representative plans per day
        #[arg(long)]
        visits_per_day: u32,
        /// Project window in calendar days
        #[arg(long)]
        calendar_days: u32,
        /// Working days per week
        #[arg(long, default_value_t = 5)]
        work_days_per_week: u32,
        /// Maximum working hours per day
        #[arg(long, default_value_t = 8.0)]
        max_hours_per_day: f64,
        /// Seed for a reproducible plan
        #[arg(long)]
        seed: Option<u64>,
        /// Optional output file for the full plan
        #[arg(short, long)]
        output: Option<String>,
        /// Output file format
        #[arg(short, long, value_enum, default_value = "yaml")]
        format: OutputFormat,
        /// City profiles YAML file replacing the built-in registry
        #[arg(long)]
        cities: Option<String>,
    },
    /// List the cities of the profile registry
    Cities {
        /// City profiles YAML file replacing the built-in registry
        #[arg(long)]
        cities: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// File format for serialized results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

#[derive(Error, Debug)]
pub enum SerializeError {
    #[error("yaml serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl OutputFormat {
    pub fn serialize<T: serde::Serialize>(&self, value: &T) -> Result<String, SerializeError> {
        match self {
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        }
    }
}

/// Registry for a command run: the custom YAML file when given, the builtin
/// dataset otherwise. Reports the failure and returns `None` when the file
/// does not load.
pub(crate) fn load_registry(cities_file: Option<&str>) -> Option<CityProfileRegistry> {
    match cities_file {
        Some(path) => match load_city_profiles_from_yaml_file(path) {
            Ok(registry) => Some(registry),
            Err(e) => {
                eprintln!("Failed to load city profiles: {e:?}");
                None
            }
        },
        None => Some(CityProfileRegistry::builtin()),
    }
}
