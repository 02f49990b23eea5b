//! Error types for `roster-core`.

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// A single failed field constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
  pub field:   String,
  pub message: String,
}

impl fmt::Display for FieldViolation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.field, self.message)
  }
}

fn join_violations(violations: &[FieldViolation]) -> String {
  violations
    .iter()
    .map(ToString::to_string)
    .collect::<Vec<_>>()
    .join("; ")
}

#[derive(Debug, Error)]
pub enum Error {
  /// A required request or identifier was not supplied. This is a caller
  /// bug, not bad data.
  #[error("{0} must not be null")]
  NullRequest(&'static str),

  #[error("validation failed: {}", join_violations(.0))]
  Validation(Vec<FieldViolation>),

  #[error("given person id doesn't exist")]
  PersonNotFound(Uuid),

  #[error("country name {0:?} already exists")]
  DuplicateCountry(String),
}

impl Error {
  /// True for every error reported through the validation channel: field
  /// constraint failures, updates of unknown persons and duplicate
  /// countries.
  pub fn is_validation(&self) -> bool {
    matches!(
      self,
      Self::Validation(_) | Self::PersonNotFound(_) | Self::DuplicateCountry(_)
    )
  }

  /// The violated fields, empty for non-field errors.
  pub fn violations(&self) -> &[FieldViolation] {
    match self {
      Self::Validation(v) => v,
      _ => &[],
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
