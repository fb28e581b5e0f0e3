//! Shared helper utilities for factory methods.

use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};
use argon2::Argon2;
use sea_orm::DbErr;

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to keep unique columns such as usernames and emails distinct between
/// factory calls in the same test.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Hashes a plaintext password into the Argon2id PHC format stored in `user.password_hash`.
///
/// Duplicates `server::util::password::hash_password` in the `holonet` crate, which this
/// crate cannot depend on since `holonet` depends on it. Both use `Argon2::default()` with
/// an `OsRng` salt and must keep doing so, or factory users stop passing `AuthGuard`.
/// `middleware/test/auth/require.rs` in `holonet` verifies factory hashes with the server
/// code.
///
/// # Returns
/// - `Ok(String)` - PHC-formatted hash
/// - `Err(DbErr::Custom)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, DbErr> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DbErr::Custom(format!("Failed to hash test password: {}", e)))
}
