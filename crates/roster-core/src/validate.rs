//! Request validation.
//!
//! Constraints are declared as `#[validate(...)]` attributes on the request
//! types; this module only runs them and folds the result into
//! [`Error::Validation`]. Validation is a pure check with no side effects.

use validator::{Validate, ValidationErrors};

use crate::error::{Error, FieldViolation, Result};

/// Run every declared field constraint on `request`.
pub fn validate_request<T: Validate>(request: &T) -> Result<()> {
  request.validate().map_err(into_error)
}

fn into_error(errors: ValidationErrors) -> Error {
  let mut violations: Vec<FieldViolation> = errors
    .field_errors()
    .into_iter()
    .flat_map(|(field, errs)| {
      let field = field.to_string();
      errs.iter().map(move |e| FieldViolation {
        field:   field.clone(),
        message: e
          .message
          .as_ref()
          .map(|m| m.to_string())
          .unwrap_or_else(|| e.code.to_string()),
      })
    })
    .collect();

  // HashMap order is arbitrary.
  violations.sort_by(|a, b| a.field.cmp(&b.field).then(a.message.cmp(&b.message)));
  violations.dedup();
  Error::Validation(violations)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::person::PersonAddRequest;

  fn named(name: &str) -> PersonAddRequest {
    PersonAddRequest { name: Some(name.into()), ..Default::default() }
  }

  #[test]
  fn name_only_request_is_valid() {
    assert!(validate_request(&named("Smith")).is_ok());
  }

  #[test]
  fn missing_name_is_reported_on_the_name_field() {
    let err = validate_request(&PersonAddRequest::default()).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.violations().len(), 1);
    assert_eq!(err.violations()[0].field, "name");
  }

  #[test]
  fn empty_name_is_rejected() {
    let err = validate_request(&named("")).unwrap_err();
    assert_eq!(err.violations()[0].field, "name");
  }

  #[test]
  fn malformed_email_is_rejected() {
    let mut req = named("Smith");
    req.email = Some("not-an-email".into());
    let err = validate_request(&req).unwrap_err();
    assert_eq!(err.violations()[0].field, "email");
    assert!(err.to_string().contains("email"));
  }

  #[test]
  fn well_formed_email_passes() {
    let mut req = named("Smith");
    req.email = Some("smith@example.com".into());
    assert!(validate_request(&req).is_ok());
  }

  #[test]
  fn violations_are_sorted_by_field() {
    let req = PersonAddRequest {
      name: None,
      email: Some("nope".into()),
      ..Default::default()
    };
    let err = validate_request(&req).unwrap_err();
    let fields: Vec<_> =
      err.violations().iter().map(|v| v.field.as_str()).collect();
    assert_eq!(fields, ["email", "name"]);
  }
}
