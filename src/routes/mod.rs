pub mod bookings;
pub mod check_email;
pub mod doctors;
pub mod health;
pub mod users;

use serde::{Deserialize, Serialize};

pub use bookings::doctor_bookings;
pub use check_email::check_email;
pub use doctors::{doctor_login, doctor_signup, get_doctor, list_doctors};
pub use health::health_check;
pub use users::{get_patient, patient_login, patient_signup};

/// Login body shared by both account kinds
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
