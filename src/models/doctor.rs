use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Practitioner profile as returned by the API. No password field.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialisation: String,
    pub created_at: DateTime<Utc>,
}

/// Practitioner row including the stored plain-text password, used only
/// for the login comparison.
#[derive(Debug, sqlx::FromRow)]
pub struct DoctorAuth {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialisation: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl From<DoctorAuth> for Doctor {
    fn from(row: DoctorAuth) -> Self {
        Doctor {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            specialisation: row.specialisation,
            created_at: row.created_at,
        }
    }
}
