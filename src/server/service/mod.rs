//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Turning missing rows into `NotFound` errors with client-facing messages
//! - **Orchestration**: Resolving a favorite's target before inserting or deleting it
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
