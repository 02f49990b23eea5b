//! Country records and the lookup contract the person service depends on.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
  pub country_id: Uuid,
  pub name:       String,
}

/// Input to a country directory's add operation.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CountryAddRequest {
  #[validate(
    required(message = "country name can't be blank"),
    length(min = 1, message = "country name can't be blank")
  )]
  pub name: Option<String>,
}

impl CountryAddRequest {
  pub fn new(name: impl Into<String>) -> Self { Self { name: Some(name.into()) } }
}

/// Resolves a country id to its record. Used only to enrich person views
/// with a display name; a miss is not an error.
pub trait CountryDirectory: Send + Sync {
  fn lookup(&self, id: Uuid) -> Option<Country>;
}

impl<T: CountryDirectory + ?Sized> CountryDirectory for Arc<T> {
  fn lookup(&self, id: Uuid) -> Option<Country> { (**self).lookup(id) }
}

impl<T: CountryDirectory + ?Sized> CountryDirectory for &T {
  fn lookup(&self, id: Uuid) -> Option<Country> { (**self).lookup(id) }
}
