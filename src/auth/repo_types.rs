use sqlx::FromRow;
use time::OffsetDateTime;

use crate::store::UserId;

/// User record in the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: UserId,                   // unique user ID
    pub email: String,                // stored as given, unique
    pub name: String,                 // display name
    pub password_hash: String,        // Argon2 PHC string
    pub created_at: OffsetDateTime,   // creation timestamp
}

/// Insert payload; the hash is computed before it reaches the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password_hash: String,
}
