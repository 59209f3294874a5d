//! MediBook Telehealth Booking Server
//!
//! A thin HTTP gateway mapping JSON requests onto single Postgres queries
//! for patient/practitioner signup, login, and the booking dashboard, plus
//! the ported client-side session logic the frontend drives.

pub mod client;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

pub use config::Config;
pub use db::create_pool;
pub use error::{AppError, Result};

use axum::{
    routing::{get, post},
    Router,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: sqlx::PgPool,
    pub config: Config,
}

/// Build the API router over the given state
pub fn router(state: AppState) -> Router {
    use routes::*;

    Router::new()
        .route("/health", get(health_check))
        .route("/api/users/signup", post(patient_signup))
        .route("/api/users/login", post(patient_login))
        .route("/api/users/:id", get(get_patient))
        .route("/api/doctors/signup", post(doctor_signup))
        .route("/api/doctors/login", post(doctor_login))
        .route("/api/doctors", get(list_doctors))
        .route("/api/doctors/:id", get(get_doctor))
        .route("/api/check-email", post(check_email))
        .route("/api/bookings/doctor/:id", get(doctor_bookings))
        .with_state(state)
}
