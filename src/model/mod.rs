//! Wire types returned by the HTTP API.
//!
//! Every entity has a DTO with a fixed field list. Domain models in `server::model`
//! convert into these at the controller boundary.

pub mod api;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
