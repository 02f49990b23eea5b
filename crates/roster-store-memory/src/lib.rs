//! In-memory backend for the roster person directory.
//!
//! Data lives for as long as the owning value does; nothing is persisted.
//! Each collection sits behind its own [`std::sync::RwLock`], so both
//! services are `Send + Sync` and every operation is atomic with respect to
//! the others.

mod countries;
mod persons;

pub use countries::MemoryCountries;
pub use persons::MemoryPersons;
