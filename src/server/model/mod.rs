//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Each `into_dto` lists its fields
//! explicitly, so a new column never leaks into a response by accident.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
