//! Wire contracts shared by the coffee-shop admin client.
//!
//! Everything here is browser-agnostic: record shapes exchanged with the REST
//! backend, form field schemas with their validators, and image path helpers.

pub mod domain;
pub mod shared;
