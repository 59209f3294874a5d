use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Booking row shown on the practitioner dashboard.
///
/// Bookings are created outside this gateway; this code only reads them.
/// No application-layer check ties `user_id`/`doctor_id` to existing rows.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Booking {
    pub id: i64,
    pub appointment_time: DateTime<Utc>,
    pub address: String,
    pub service: String,
    pub user_id: i64,
    pub doctor_id: i64,
}

impl Booking {
    /// Appointment timestamp formatted for dashboard display
    pub fn display_time(&self) -> String {
        self.appointment_time.format("%d %b %Y, %H:%M").to_string()
    }
}
