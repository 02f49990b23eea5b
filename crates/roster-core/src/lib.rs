//! Core types and trait definitions for the roster person directory.
//!
//! This crate is deliberately free of storage and I/O. Backends implement
//! [`service::PersonService`] and [`country::CountryDirectory`]; hosting
//! layers depend only on those traits.

pub mod clock;
pub mod country;
pub mod error;
pub mod person;
pub mod query;
pub mod service;
pub mod validate;

pub use error::{Error, FieldViolation, Result};
