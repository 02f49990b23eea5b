//! `roster`: query a seeded, in-memory person roster.
//!
//! Reads `roster.toml` (or the path given with `--config`), loads its
//! countries and persons into fresh in-memory services, applies an optional
//! filter and sort, and prints the resulting views as JSON.
//!
//! ```
//! roster --config demo.toml --search-by country --search india --sort-by age --order desc
//! ```

mod seed;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use roster_core::{query::SortOrder, service::PersonService};
use roster_store_memory::{MemoryCountries, MemoryPersons};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Query a seeded in-memory person roster")]
struct Cli {
  /// Path to the TOML seed/configuration file.
  #[arg(short, long, default_value = "roster.toml")]
  config: PathBuf,

  /// Field to search in: name, email, date_of_birth, gender, country, address.
  #[arg(long, default_value = "")]
  search_by: String,

  /// Case-insensitive substring to look for.
  #[arg(long)]
  search: Option<String>,

  /// Field to sort by: name, email, date_of_birth, age, gender, country,
  /// address, receive_newsletters.
  #[arg(long, default_value = "")]
  sort_by: String,

  /// `asc` or `desc`.
  #[arg(long, default_value = "asc")]
  order: SortOrder,

  /// Print the country list instead of persons.
  #[arg(long)]
  countries: bool,
}

fn main() -> anyhow::Result<()> {
  // Initialise tracing. Logs go to stderr so stdout stays valid JSON.
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings: seed::Settings = config::Config::builder()
    .add_source(config::File::from(cli.config.clone()).required(false))
    .add_source(config::Environment::with_prefix("ROSTER"))
    .build()
    .context("failed to read config file")?
    .try_deserialize()
    .context("failed to deserialise seed settings")?;

  let countries = Arc::new(MemoryCountries::new());
  let persons = MemoryPersons::new(countries.clone());
  seed::apply(settings, &countries, &persons)
    .with_context(|| format!("failed to seed from {:?}", cli.config))?;

  let json = if cli.countries {
    serde_json::to_string_pretty(&countries.get_all_countries())?
  } else {
    let found = persons.get_filtered_persons(&cli.search_by, cli.search.as_deref());
    let sorted = persons.get_sorted_persons(found, &cli.sort_by, cli.order);
    tracing::info!(matched = sorted.len(), "query complete");
    serde_json::to_string_pretty(&sorted)?
  };

  println!("{json}");
  Ok(())
}
