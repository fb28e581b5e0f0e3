//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Factories insert rows
//! directly through SeaORM active models, bypassing the application's service layer.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .username("luke")
//!     .password("force123")
//!     .build()
//!     .await?;
//! let planet = factory::planet::PlanetFactory::new(&db).name("Tatooine").build().await?;
//! factory::create_planet_favorite(&db, user.id, planet.id).await?;
//! ```

pub mod character;
pub mod favorite;
pub mod helpers;
pub mod planet;
pub mod user;

pub use character::create_character;
pub use favorite::{
    count_user_favorites, create_character_favorite, create_planet_favorite,
    create_planet_favorites,
};
pub use planet::{create_planet, create_planets};
pub use user::create_user;
