use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Patient profile as returned by the API.
///
/// Deliberately has no password field, so credentials can never serialize
/// back out of the gateway.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

/// Patient row including the stored plain-text password.
///
/// Fetched only for the login comparison and converted to [`Patient`]
/// before a response is built.
#[derive(Debug, sqlx::FromRow)]
pub struct PatientAuth {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl From<PatientAuth> for Patient {
    fn from(row: PatientAuth) -> Self {
        Patient {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            created_at: row.created_at,
        }
    }
}
