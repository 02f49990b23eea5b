//! [`MemoryPersons`]: the in-memory implementation of [`PersonService`].

use std::{
  fmt,
  sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use chrono::NaiveDate;
use roster_core::{
  Error, Result,
  clock::{Clock, SystemClock},
  country::CountryDirectory,
  person::{Person, PersonAddRequest, PersonUpdateRequest, PersonView},
  service::PersonService,
  validate::validate_request,
};
use tracing::{debug, info};
use uuid::Uuid;

// ─── Store ───────────────────────────────────────────────────────────────────

/// Persons in insertion order, enriched through a [`CountryDirectory`].
///
/// The directory is only consulted on reads; a `country_id` it does not know
/// simply leaves `PersonView::country` unset.
pub struct MemoryPersons<C> {
  pub(crate) persons: RwLock<Vec<Person>>,
  countries:          C,
  clock:              Arc<dyn Clock>,
}

impl<C: CountryDirectory> MemoryPersons<C> {
  /// An empty store whose views compute `age` against the wall clock.
  pub fn new(countries: C) -> Self { Self::with_clock(countries, SystemClock) }

  /// An empty store with an explicit reference clock.
  pub fn with_clock(countries: C, clock: impl Clock + 'static) -> Self {
    Self {
      persons: RwLock::new(Vec::new()),
      countries,
      clock: Arc::new(clock),
    }
  }

  fn read(&self) -> RwLockReadGuard<'_, Vec<Person>> {
    self.persons.read().unwrap_or_else(PoisonError::into_inner)
  }

  fn write(&self) -> RwLockWriteGuard<'_, Vec<Person>> {
    self.persons.write().unwrap_or_else(PoisonError::into_inner)
  }

  fn materialize(&self, person: &Person, today: NaiveDate) -> PersonView {
    let country = person.country_id.and_then(|id| self.countries.lookup(id));
    PersonView::materialize(person, country, today)
  }
}

impl<C: CountryDirectory> fmt::Debug for MemoryPersons<C> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let len = self.read().len();
    f.debug_struct("MemoryPersons").field("persons", &len).finish()
  }
}

// ─── PersonService impl ──────────────────────────────────────────────────────

impl<C: CountryDirectory> PersonService for MemoryPersons<C> {
  fn add_person(&self, request: Option<PersonAddRequest>) -> Result<PersonView> {
    let request = request.ok_or(Error::NullRequest("person add request"))?;
    validate_request(&request)?;

    // Ids are random v4 UUIDs and are never taken from deleted records, so an
    // id is not handed out twice for the life of the store. v4 is never nil.
    let person_id = Uuid::new_v4();
    let mut persons = self.write();
    let person = request.into_person(person_id);
    let view = self.materialize(&person, self.clock.today());
    persons.push(person);

    info!(%person_id, "person added");
    Ok(view)
  }

  fn update_person(
    &self,
    request: Option<PersonUpdateRequest>,
  ) -> Result<PersonView> {
    let request = request.ok_or(Error::NullRequest("person update request"))?;
    validate_request(&request)?;

    let person_id = request.person_id;
    let mut persons = self.write();
    let person = persons
      .iter_mut()
      .find(|p| p.person_id == person_id)
      .ok_or(Error::PersonNotFound(person_id))?;

    person.apply(request);
    info!(%person_id, "person updated");
    Ok(self.materialize(person, self.clock.today()))
  }

  fn delete_person(&self, id: Option<Uuid>) -> Result<bool> {
    let person_id = id.ok_or(Error::NullRequest("person id"))?;

    let mut persons = self.write();
    let before = persons.len();
    persons.retain(|p| p.person_id != person_id);
    let deleted = persons.len() != before;

    if deleted {
      info!(%person_id, "person deleted");
    } else {
      debug!(%person_id, "delete of unknown person ignored");
    }
    Ok(deleted)
  }

  fn get_all_persons(&self) -> Vec<PersonView> {
    let today = self.clock.today();
    self
      .read()
      .iter()
      .map(|p| self.materialize(p, today))
      .collect()
  }

  fn get_person(&self, id: Option<Uuid>) -> Option<PersonView> {
    let id = id?;
    let today = self.clock.today();
    self
      .read()
      .iter()
      .find(|p| p.person_id == id)
      .map(|p| self.materialize(p, today))
  }
}
