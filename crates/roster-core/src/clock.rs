//! Reference clock for derived, time-dependent fields.
//!
//! A person's `age` depends on the current date, so views materialised on
//! different days can differ. Services take a [`Clock`] so that tests can pin
//! "today".

use chrono::{NaiveDate, Utc};

const DAYS_PER_YEAR: f64 = 365.25;

pub trait Clock: Send + Sync {
  fn today(&self) -> NaiveDate;
}

/// The wall clock, as a UTC calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn today(&self) -> NaiveDate { Utc::now().date_naive() }
}

/// A clock frozen at one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
  fn today(&self) -> NaiveDate { self.0 }
}

/// Age in whole years, rounded to nearest: `round(days / 365.25)`.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i64 {
  let days = (today - date_of_birth).num_days() as f64;
  (days / DAYS_PER_YEAR).round() as i64
}
