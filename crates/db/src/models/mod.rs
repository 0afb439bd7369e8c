//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO built from the matching validated form
//! - The joined/summary projections the pages need

pub mod artist;
pub mod listing;
pub mod show;
pub mod venue;
