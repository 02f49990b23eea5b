//! Field-driven filtering and sorting over materialised person views.
//!
//! Callers usually name the field with a string (a query parameter, a CLI
//! flag). The string is parsed into a closed enum once; every enum variant
//! maps to one extractor or comparator. A name that does not parse is not an
//! error: the operation becomes a no-op.
//!
//! Two policies here are lenient on purpose and are relied on by callers:
//! - a view whose searched field is empty or unset is kept by [`filter`];
//! - an unrecognised field name leaves the input untouched.
//!
//! Both are candidates for tightening if the hosting layer ever needs strict
//! queries.

use std::{borrow::Cow, cmp::Ordering};

use serde::{Deserialize, Serialize};
use strum::EnumString;

use crate::person::PersonView;

/// How dates are rendered before substring matching, e.g. `06 May 2002`.
pub const SEARCH_DATE_FORMAT: &str = "%d %B %Y";

// ─── Fields ──────────────────────────────────────────────────────────────────

/// A field [`filter`] can match against.
///
/// Accepts snake_case names and the legacy names (`PersonName`,
/// `CountryID`, ...), ignoring ASCII case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum SearchField {
  #[strum(serialize = "name", serialize = "person_name", serialize = "PersonName")]
  Name,
  #[strum(serialize = "email")]
  Email,
  #[strum(serialize = "date_of_birth", serialize = "DateOfBirth")]
  DateOfBirth,
  #[strum(serialize = "gender")]
  Gender,
  /// Matches the resolved country name, not the id.
  #[strum(serialize = "country", serialize = "country_id", serialize = "CountryID")]
  Country,
  #[strum(serialize = "address")]
  Address,
}

impl SearchField {
  /// `None` for an empty or unrecognised name.
  pub fn parse_lenient(name: &str) -> Option<Self> { name.trim().parse().ok() }

  /// The field's text as it is matched.
  fn extract(self, view: &PersonView) -> Option<Cow<'_, str>> {
    match self {
      Self::Name => Some(Cow::Borrowed(view.name.as_str())),
      Self::Email => view.email.as_deref().map(Cow::Borrowed),
      Self::DateOfBirth => view
        .date_of_birth
        .map(|d| Cow::Owned(d.format(SEARCH_DATE_FORMAT).to_string())),
      Self::Gender => view.gender.as_deref().map(Cow::Borrowed),
      Self::Country => view.country.as_deref().map(Cow::Borrowed),
      Self::Address => view.address.as_deref().map(Cow::Borrowed),
    }
  }
}

/// A field [`sort`] can order by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum SortField {
  #[strum(serialize = "name", serialize = "person_name", serialize = "PersonName")]
  Name,
  #[strum(serialize = "email")]
  Email,
  #[strum(serialize = "date_of_birth", serialize = "DateOfBirth")]
  DateOfBirth,
  #[strum(serialize = "age")]
  Age,
  #[strum(serialize = "gender")]
  Gender,
  /// Orders by the resolved country name.
  #[strum(serialize = "country", serialize = "country_name")]
  Country,
  #[strum(serialize = "address")]
  Address,
  #[strum(serialize = "receive_newsletters", serialize = "ReceiveNewsLetters")]
  ReceiveNewsletters,
}

type Comparator = fn(&PersonView, &PersonView) -> Ordering;

impl SortField {
  /// `None` for an empty or unrecognised name.
  pub fn parse_lenient(name: &str) -> Option<Self> { name.trim().parse().ok() }

  fn comparator(self) -> Comparator {
    match self {
      Self::Name => by_name,
      Self::Email => by_email,
      Self::DateOfBirth => by_date_of_birth,
      Self::Age => by_age,
      Self::Gender => by_gender,
      Self::Country => by_country,
      Self::Address => by_address,
      Self::ReceiveNewsletters => by_receive_newsletters,
    }
  }
}

#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumString,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
  #[default]
  #[strum(serialize = "asc", serialize = "ascending")]
  Ascending,
  #[strum(serialize = "desc", serialize = "descending")]
  Descending,
}

// ─── Comparators ─────────────────────────────────────────────────────────────
//
// Unset values order before set ones (`None < Some`). Text compares after
// lowercasing.

fn text_cmp(a: Option<&str>, b: Option<&str>) -> Ordering {
  a.map(str::to_lowercase).cmp(&b.map(str::to_lowercase))
}

fn by_name(a: &PersonView, b: &PersonView) -> Ordering {
  text_cmp(Some(&a.name), Some(&b.name))
}

fn by_email(a: &PersonView, b: &PersonView) -> Ordering {
  text_cmp(a.email.as_deref(), b.email.as_deref())
}

fn by_date_of_birth(a: &PersonView, b: &PersonView) -> Ordering {
  a.date_of_birth.cmp(&b.date_of_birth)
}

fn by_age(a: &PersonView, b: &PersonView) -> Ordering { a.age.cmp(&b.age) }

fn by_gender(a: &PersonView, b: &PersonView) -> Ordering {
  text_cmp(a.gender.as_deref(), b.gender.as_deref())
}

fn by_country(a: &PersonView, b: &PersonView) -> Ordering {
  text_cmp(a.country.as_deref(), b.country.as_deref())
}

fn by_address(a: &PersonView, b: &PersonView) -> Ordering {
  text_cmp(a.address.as_deref(), b.address.as_deref())
}

fn by_receive_newsletters(a: &PersonView, b: &PersonView) -> Ordering {
  a.receive_newsletters.cmp(&b.receive_newsletters)
}

// ─── Operations ──────────────────────────────────────────────────────────────

/// Keep the views whose `field` contains `search`, ignoring case.
///
/// Returns `views` unchanged when `field` is `None` or `search` is empty.
/// Views whose field is unset or empty always match.
pub fn filter(
  views: Vec<PersonView>,
  field: Option<SearchField>,
  search: Option<&str>,
) -> Vec<PersonView> {
  let (field, needle) = match (field, search) {
    (Some(f), Some(s)) if !s.is_empty() => (f, s.to_lowercase()),
    _ => return views,
  };

  views
    .into_iter()
    .filter(|view| match field.extract(view) {
      Some(value) if !value.is_empty() => value.to_lowercase().contains(&needle),
      _ => true,
    })
    .collect()
}

/// Stable sort of `views` by `field`. `None` returns the input as is.
pub fn sort(
  mut views: Vec<PersonView>,
  field: Option<SortField>,
  order: SortOrder,
) -> Vec<PersonView> {
  let Some(field) = field else {
    return views;
  };

  let cmp = field.comparator();
  match order {
    SortOrder::Ascending => views.sort_by(cmp),
    // Reversing the comparator (not the output) keeps ties in input order.
    SortOrder::Descending => views.sort_by(|a, b| cmp(b, a)),
  }
  views
}
