use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::{
    config::Config,
    data::{character::CharacterRepository, planet::PlanetRepository, user::UserRepository},
    error::AppError,
    model::{character::CreateCharacterParam, planet::CreatePlanetParam},
    util::password::hash_password,
};

/// Installs the global tracing subscriber.
///
/// Honors `RUST_LOG` and falls back to `info` for the application and `tower_http`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "holonet=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date before the server
/// starts accepting requests. Both SQLite and Postgres URLs are accepted.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Inserts demo users, characters and planets in a single transaction.
///
/// Skipped when any user already exists, so restarting with seeding enabled does not
/// duplicate data. A failed insert rolls back everything, leaving the user table empty
/// for the next attempt.
///
/// # Returns
/// - `Ok(true)` - Demo data was inserted
/// - `Ok(false)` - The database already held users
/// - `Err(AppError)` - Hashing or database error, nothing was committed
pub async fn seed_database(db: &DatabaseConnection) -> Result<bool, AppError> {
    let txn = db.begin().await?;

    let user_repo = UserRepository::new(&txn);

    if user_repo.count().await? > 0 {
        tracing::info!("Users already present, skipping seed");
        return Ok(false);
    }

    for (username, email, password) in SEED_USERS {
        let password_hash = hash_password(password)?;

        user_repo
            .create(username.to_string(), email.to_string(), password_hash)
            .await?;
    }

    let character_repo = CharacterRepository::new(&txn);
    for character in seed_characters() {
        character_repo.create(character).await?;
    }

    let planet_repo = PlanetRepository::new(&txn);
    for planet in seed_planets() {
        planet_repo.create(planet).await?;
    }

    txn.commit().await?;

    tracing::info!("Seeded demo users, characters and planets");

    Ok(true)
}

/// Demo accounts as `(username, email, password)`.
const SEED_USERS: [(&str, &str, &str); 2] = [
    ("luke", "luke@holonet.dev", "force123"),
    ("leia", "leia@holonet.dev", "alderaan"),
];

fn seed_characters() -> Vec<CreateCharacterParam> {
    vec![
        CreateCharacterParam {
            name: "Luke Skywalker".to_string(),
            height: Some(172),
            mass: Some(77),
            hair_color: Some("blond".to_string()),
            skin_color: Some("fair".to_string()),
            eye_color: Some("blue".to_string()),
            birth_year: Some("19BBY".to_string()),
            gender: Some("male".to_string()),
            homeworld: Some("Tatooine".to_string()),
            ..Default::default()
        },
        CreateCharacterParam {
            name: "Leia Organa".to_string(),
            height: Some(150),
            mass: Some(49),
            hair_color: Some("brown".to_string()),
            skin_color: Some("light".to_string()),
            eye_color: Some("brown".to_string()),
            birth_year: Some("19BBY".to_string()),
            gender: Some("female".to_string()),
            homeworld: Some("Alderaan".to_string()),
            ..Default::default()
        },
        CreateCharacterParam {
            name: "Darth Vader".to_string(),
            height: Some(202),
            mass: Some(136),
            hair_color: None,
            skin_color: Some("white".to_string()),
            eye_color: Some("yellow".to_string()),
            birth_year: Some("41.9BBY".to_string()),
            gender: Some("male".to_string()),
            homeworld: Some("Tatooine".to_string()),
            ..Default::default()
        },
    ]
}

fn seed_planets() -> Vec<CreatePlanetParam> {
    vec![
        CreatePlanetParam {
            name: "Tatooine".to_string(),
            diameter: Some(10465),
            rotation_period: Some(23),
            orbital_period: Some(304),
            gravity: Some("1 standard".to_string()),
            population: Some(200_000),
            climate: Some("arid".to_string()),
            terrain: Some("desert".to_string()),
            surface_water: Some("1".to_string()),
            ..Default::default()
        },
        CreatePlanetParam {
            name: "Alderaan".to_string(),
            diameter: Some(12500),
            rotation_period: Some(24),
            orbital_period: Some(364),
            gravity: Some("1 standard".to_string()),
            population: Some(2_000_000_000),
            climate: Some("temperate".to_string()),
            terrain: Some("grasslands, mountains".to_string()),
            surface_water: Some("40".to_string()),
            ..Default::default()
        },
        CreatePlanetParam {
            name: "Hoth".to_string(),
            diameter: Some(7200),
            rotation_period: Some(23),
            orbital_period: Some(549),
            gravity: Some("1.1 standard".to_string()),
            population: None,
            climate: Some("frozen".to_string()),
            terrain: Some("tundra, ice caves, mountain ranges".to_string()),
            surface_water: Some("100".to_string()),
            ..Default::default()
        },
    ]
}
