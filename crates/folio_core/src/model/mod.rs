//! Portfolio domain model.
//!
//! # Responsibility
//! - Define the project record and catalog shapes read from the page payload.
//! - Default every optional field so downstream code never sees `null`.
//!
//! # Invariants
//! - A loaded catalog is read-only for the rest of the session.
//! - Projects carry no identifier; titles are display text only.

pub mod project;
