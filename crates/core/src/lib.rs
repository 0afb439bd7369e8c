//! Domain types and rules for the Encore booking directory.
//!
//! This crate has no internal dependencies so it can be shared by the
//! repository layer, the API server and any future tooling.

pub mod choices;
pub mod error;
pub mod forms;
pub mod location;
pub mod schedule;
pub mod search;
pub mod types;
