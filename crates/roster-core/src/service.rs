//! The `PersonService` trait.
//!
//! Implemented by storage backends (e.g. `roster-store-memory`). Hosting
//! layers depend on this abstraction, not on a concrete backend.
//!
//! Every view a method returns is materialised at call time: the country name
//! is looked up fresh and `age` is computed against the backend's clock.

use uuid::Uuid;

use crate::{
  Result,
  person::{PersonAddRequest, PersonUpdateRequest, PersonView},
  query::{self, SearchField, SortField, SortOrder},
};

pub trait PersonService: Send + Sync {
  // ── Writes ────────────────────────────────────────────────────────────

  /// Validate `request`, store it under a freshly generated id and return
  /// its view.
  ///
  /// Fails with [`Error::NullRequest`](crate::Error::NullRequest) when
  /// `request` is `None` and [`Error::Validation`](crate::Error::Validation)
  /// when a field constraint is violated.
  fn add_person(&self, request: Option<PersonAddRequest>) -> Result<PersonView>;

  /// Replace every mutable field of the person named by `request.person_id`.
  ///
  /// Fails with `NullRequest`, `Validation`, or
  /// [`Error::PersonNotFound`](crate::Error::PersonNotFound) when no person
  /// has that id.
  fn update_person(
    &self,
    request: Option<PersonUpdateRequest>,
  ) -> Result<PersonView>;

  /// Remove the person with `id`. `Ok(false)` if there was none; fails only
  /// when `id` is `None`.
  fn delete_person(&self, id: Option<Uuid>) -> Result<bool>;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Every stored person, in insertion order.
  fn get_all_persons(&self) -> Vec<PersonView>;

  /// `None` when `id` is `None` or unknown.
  fn get_person(&self, id: Option<Uuid>) -> Option<PersonView>;

  /// All persons, narrowed by [`query::filter`] on the field named
  /// `search_by`. An unrecognised field name filters nothing.
  fn get_filtered_persons(
    &self,
    search_by: &str,
    search: Option<&str>,
  ) -> Vec<PersonView> {
    query::filter(
      self.get_all_persons(),
      SearchField::parse_lenient(search_by),
      search,
    )
  }

  /// `persons` reordered by [`query::sort`] on the field named `sort_by`.
  /// An unrecognised field name leaves the order as given.
  fn get_sorted_persons(
    &self,
    persons: Vec<PersonView>,
    sort_by: &str,
    order: SortOrder,
  ) -> Vec<PersonView> {
    query::sort(persons, SortField::parse_lenient(sort_by), order)
  }
}
