//! Request handlers.
//!
//! Each submodule provides async handler functions for a single entity type.
//! Handlers delegate to the corresponding repository in `encore_db`, map
//! lookup errors via [`AppError`](crate::error::AppError), and report form
//! submissions through [`crate::mutation`].

pub mod artist;
pub mod home;
pub mod show;
pub mod venue;
