//! Seed data for the in-memory services, deserialised from `roster.toml`.
//!
//! ```toml
//! [[countries]]
//! name = "India"
//!
//! [[persons]]
//! name = "Mary"
//! email = "mary@example.com"
//! date_of_birth = "2000-02-02"
//! gender = "Female"
//! country = "India"
//! receive_newsletters = true
//! ```

use anyhow::{Context as _, bail};
use chrono::NaiveDate;
use roster_core::{
  country::CountryAddRequest,
  person::{Gender, PersonAddRequest},
  service::PersonService,
};
use roster_store_memory::MemoryCountries;
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize, Default)]
pub struct Settings {
  #[serde(default)]
  pub countries: Vec<CountrySeed>,
  #[serde(default)]
  pub persons:   Vec<PersonSeed>,
}

#[derive(Debug, Deserialize)]
pub struct CountrySeed {
  pub name: String,
}

/// A person entry; `country` is a country name from the same file.
#[derive(Debug, Deserialize)]
pub struct PersonSeed {
  pub name:                Option<String>,
  pub email:               Option<String>,
  /// `YYYY-MM-DD`.
  pub date_of_birth:       Option<String>,
  pub gender:              Option<String>,
  pub country:             Option<String>,
  pub address:             Option<String>,
  #[serde(default)]
  pub receive_newsletters: bool,
}

impl PersonSeed {
  fn into_request(
    self,
    countries: &MemoryCountries,
  ) -> anyhow::Result<PersonAddRequest> {
    let date_of_birth = self
      .date_of_birth
      .as_deref()
      .map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d"))
      .transpose()
      .context("date_of_birth must be YYYY-MM-DD")?;

    let gender = self
      .gender
      .as_deref()
      .map(str::parse::<Gender>)
      .transpose()
      .context("gender must be Male, Female or Other")?;

    let country_id = match self.country.as_deref() {
      None => None,
      Some(name) => match countries.get_country_by_name(name) {
        Some(c) => Some(c.country_id),
        None => bail!("unknown country {name:?}"),
      },
    };

    Ok(PersonAddRequest {
      name: self.name,
      email: self.email,
      date_of_birth,
      gender,
      country_id,
      address: self.address,
      receive_newsletters: self.receive_newsletters,
    })
  }
}

/// Add every seeded country, then every seeded person.
pub fn apply<P: PersonService>(
  settings: Settings,
  countries: &MemoryCountries,
  persons: &P,
) -> anyhow::Result<()> {
  for seed in settings.countries {
    countries
      .add_country(Some(CountryAddRequest::new(seed.name.clone())))
      .with_context(|| format!("failed to seed country {:?}", seed.name))?;
  }

  for (index, seed) in settings.persons.into_iter().enumerate() {
    let label = seed.name.clone().unwrap_or_else(|| format!("#{index}"));
    let request = seed
      .into_request(countries)
      .with_context(|| format!("invalid seed for person {label:?}"))?;
    persons
      .add_person(Some(request))
      .with_context(|| format!("failed to seed person {label:?}"))?;
  }

  info!(
    countries = countries.get_all_countries().len(),
    persons = persons.get_all_persons().len(),
    "seed loaded"
  );
  Ok(())
}
