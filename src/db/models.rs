use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: Uuid,
    /// References a user by name only; no foreign key is enforced, so
    /// readers must tolerate comments whose author no longer exists.
    pub username: String,
    pub body: String,
    pub created_on: DateTime<Utc>,
}

impl Comment {
    pub fn new(username: String, body: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            body,
            created_on: Utc::now(),
        }
    }
}
