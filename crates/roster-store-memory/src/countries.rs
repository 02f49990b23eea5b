//! [`MemoryCountries`]: a list-backed [`CountryDirectory`].

use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use roster_core::{
  Error, Result,
  country::{Country, CountryAddRequest, CountryDirectory},
  validate::validate_request,
};
use tracing::debug;
use uuid::Uuid;

/// Countries in insertion order.
#[derive(Debug, Default)]
pub struct MemoryCountries {
  countries: RwLock<Vec<Country>>,
}

impl MemoryCountries {
  pub fn new() -> Self { Self::default() }

  fn read(&self) -> RwLockReadGuard<'_, Vec<Country>> {
    self.countries.read().unwrap_or_else(PoisonError::into_inner)
  }

  /// Add a country under a freshly generated id.
  ///
  /// Fails with `NullRequest` for a `None` request, `Validation` for a blank
  /// name and `DuplicateCountry` when the name is already taken.
  pub fn add_country(&self, request: Option<CountryAddRequest>) -> Result<Country> {
    let request = request.ok_or(Error::NullRequest("country add request"))?;
    validate_request(&request)?;
    let name = request.name.unwrap_or_default();

    let mut countries = self
      .countries
      .write()
      .unwrap_or_else(PoisonError::into_inner);

    if countries.iter().any(|c| c.name == name) {
      return Err(Error::DuplicateCountry(name));
    }

    let country = Country { country_id: Uuid::new_v4(), name };
    countries.push(country.clone());
    debug!(country_id = %country.country_id, "country added");
    Ok(country)
  }

  pub fn get_all_countries(&self) -> Vec<Country> { self.read().clone() }

  /// `None` when `id` is `None` or unknown.
  pub fn get_country(&self, id: Option<Uuid>) -> Option<Country> {
    let id = id?;
    self.read().iter().find(|c| c.country_id == id).cloned()
  }

  /// Exact-name lookup, used when seeding persons by country name.
  pub fn get_country_by_name(&self, name: &str) -> Option<Country> {
    self.read().iter().find(|c| c.name == name).cloned()
  }
}

impl CountryDirectory for MemoryCountries {
  fn lookup(&self, id: Uuid) -> Option<Country> { self.get_country(Some(id)) }
}
