//! Person records, the requests that create and replace them, and the
//! enriched read model handed to callers.
//!
//! A [`Person`] is owned by a store. Callers only ever see a [`PersonView`],
//! which is assembled on every read and never stored.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use uuid::Uuid;
use validator::Validate;

use crate::{clock::age_on, country::Country};

// ─── Gender ──────────────────────────────────────────────────────────────────

/// Text form is the variant name (`"Male"`); parsing ignores ASCII case.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Gender {
  Male,
  Female,
  Other,
}

// ─── Stored record ───────────────────────────────────────────────────────────

/// The authoritative record. `person_id` is assigned by the store on add and
/// never changes; gender is kept in its text form.
#[derive(Debug, Clone)]
pub struct Person {
  pub person_id:           Uuid,
  pub name:                String,
  pub email:               Option<String>,
  pub date_of_birth:       Option<NaiveDate>,
  pub gender:              Option<String>,
  pub country_id:          Option<Uuid>,
  pub address:             Option<String>,
  pub receive_newsletters: bool,
}

impl Person {
  /// Overwrite every mutable field from `request`. The id is left alone.
  pub fn apply(&mut self, request: PersonUpdateRequest) {
    self.name = request.name.unwrap_or_default();
    self.email = request.email;
    self.date_of_birth = request.date_of_birth;
    self.gender = request.gender.map(|g| g.to_string());
    self.country_id = request.country_id;
    self.address = request.address;
    self.receive_newsletters = request.receive_newsletters;
  }
}

// ─── Requests ────────────────────────────────────────────────────────────────

/// Input to [`crate::service::PersonService::add_person`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PersonAddRequest {
  #[validate(
    required(message = "person name can't be blank"),
    length(min = 1, message = "person name can't be blank")
  )]
  pub name:                Option<String>,
  #[validate(email(message = "email should be a valid email address"))]
  pub email:               Option<String>,
  pub date_of_birth:       Option<NaiveDate>,
  pub gender:              Option<Gender>,
  pub country_id:          Option<Uuid>,
  pub address:             Option<String>,
  #[serde(default)]
  pub receive_newsletters: bool,
}

impl PersonAddRequest {
  /// Build the stored record under a store-assigned id.
  pub fn into_person(self, person_id: Uuid) -> Person {
    Person {
      person_id,
      name: self.name.unwrap_or_default(),
      email: self.email,
      date_of_birth: self.date_of_birth,
      gender: self.gender.map(|g| g.to_string()),
      country_id: self.country_id,
      address: self.address,
      receive_newsletters: self.receive_newsletters,
    }
  }
}

/// Input to [`crate::service::PersonService::update_person`]. Replaces every
/// mutable field of the person named by `person_id`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PersonUpdateRequest {
  pub person_id:           Uuid,
  #[validate(
    required(message = "person name can't be blank"),
    length(min = 1, message = "person name can't be blank")
  )]
  pub name:                Option<String>,
  #[validate(email(message = "email should be a valid email address"))]
  pub email:               Option<String>,
  pub date_of_birth:       Option<NaiveDate>,
  pub gender:              Option<Gender>,
  pub country_id:          Option<Uuid>,
  pub address:             Option<String>,
  #[serde(default)]
  pub receive_newsletters: bool,
}

// ─── View ────────────────────────────────────────────────────────────────────

/// The read model for a person, enriched with the country name and age.
///
/// `country` and `age` are derived when the view is materialised and are not
/// part of equality: two views are equal when their stored fields (including
/// `country_id`) are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonView {
  pub person_id:           Uuid,
  pub name:                String,
  pub email:               Option<String>,
  pub date_of_birth:       Option<NaiveDate>,
  pub gender:              Option<String>,
  pub country_id:          Option<Uuid>,
  pub country:             Option<String>,
  pub address:             Option<String>,
  pub receive_newsletters: bool,
  /// Depends on the date passed to [`PersonView::materialize`].
  pub age:                 Option<i64>,
}

impl PersonView {
  /// Assemble a view from a stored record, the country it references (if it
  /// resolved) and the current date.
  pub fn materialize(
    person: &Person,
    country: Option<Country>,
    today: NaiveDate,
  ) -> Self {
    Self {
      person_id:           person.person_id,
      name:                person.name.clone(),
      email:               person.email.clone(),
      date_of_birth:       person.date_of_birth,
      gender:              person.gender.clone(),
      country_id:          person.country_id,
      country:             country.map(|c| c.name),
      address:             person.address.clone(),
      receive_newsletters: person.receive_newsletters,
      age:                 person.date_of_birth.map(|dob| age_on(dob, today)),
    }
  }

  /// An update request carrying this view's current values. Gender text
  /// that is not a known [`Gender`] becomes `None`.
  pub fn to_update_request(&self) -> PersonUpdateRequest {
    PersonUpdateRequest {
      person_id:           self.person_id,
      name:                Some(self.name.clone()),
      email:               self.email.clone(),
      date_of_birth:       self.date_of_birth,
      gender:              self.gender.as_deref().and_then(|g| g.parse().ok()),
      country_id:          self.country_id,
      address:             self.address.clone(),
      receive_newsletters: self.receive_newsletters,
    }
  }
}

impl PartialEq for PersonView {
  fn eq(&self, other: &Self) -> bool {
    self.person_id == other.person_id
      && self.name == other.name
      && self.email == other.email
      && self.date_of_birth == other.date_of_birth
      && self.gender == other.gender
      && self.country_id == other.country_id
      && self.address == other.address
      && self.receive_newsletters == other.receive_newsletters
  }
}

impl Eq for PersonView {}

impl fmt::Display for PersonView {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let opt = |v: &Option<String>| v.clone().unwrap_or_default();
    write!(
      f,
      "Person ID: {}, Name: {}, Email: {}, Date Of Birth: {}, Gender: {}, \
       Country ID: {}, Country: {}, Address: {}, Receive Newsletters: {}",
      self.person_id,
      self.name,
      opt(&self.email),
      self
        .date_of_birth
        .map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_default(),
      opt(&self.gender),
      self.country_id.map(|id| id.to_string()).unwrap_or_default(),
      opt(&self.country),
      opt(&self.address),
      self.receive_newsletters,
    )
  }
}
