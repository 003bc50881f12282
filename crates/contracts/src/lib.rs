//! Wire contracts shared between the admin UI and the incentive backend.
//!
//! The backend speaks numeric enum codes, the UI works with symbolic names.
//! Everything that crosses that boundary goes through [`enums`] (the
//! catalogue of enumerations) and [`shared::normalize`] (scalar and
//! payload-level conversions).

pub mod domain;
pub mod enums;
pub mod shared;
