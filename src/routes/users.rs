use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{Patient, PatientAuth};
use crate::routes::LoginRequest;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct PatientSignupRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Create a patient account
///
/// A single insert. Email uniqueness is only probed by the client before
/// this call (check-email), so two concurrent signups with the same email
/// can both land here and both succeed. The table carries no unique
/// constraint; this preserves the original behavior rather than fixing it.
///
/// The created row is returned without its password column.
pub async fn patient_signup(
    State(state): State<AppState>,
    Json(payload): Json<PatientSignupRequest>,
) -> Result<Json<Patient>> {
    let patient = sqlx::query_as::<_, Patient>(
        "INSERT INTO users (name, email, phone, password) \
         VALUES ($1, $2, $3, $4) \
         RETURNING id, name, email, phone, created_at",
    )
    .bind(&payload.name)
    .bind(&payload.email)
    .bind(&payload.phone)
    .bind(&payload.password)
    .fetch_one(&state.pool)
    .await?;

    tracing::info!("New patient account created: id={}", patient.id);
    Ok(Json(patient))
}

/// Authenticate a patient by email and password
///
/// Passwords are stored and compared in plain text. That is a defect of
/// the existing data, kept for compatibility with rows already in the
/// table; see DESIGN.md.
pub async fn patient_login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Patient>> {
    let row = sqlx::query_as::<_, PatientAuth>(
        "SELECT id, name, email, phone, password, created_at \
         FROM users WHERE email = $1",
    )
    .bind(&payload.email)
    .fetch_optional(&state.pool)
    .await?;

    let Some(auth) = row else {
        tracing::warn!("Login attempt for unknown patient email");
        return Err(AppError::InvalidCredentials);
    };

    if auth.password != payload.password {
        tracing::warn!("Password mismatch for patient id={}", auth.id);
        return Err(AppError::InvalidCredentials);
    }

    Ok(Json(auth.into()))
}

/// Fetch a patient profile by id
pub async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Patient>> {
    let patient = sqlx::query_as::<_, Patient>(
        "SELECT id, name, email, phone, created_at FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::RecordNotFound)?;

    Ok(Json(patient))
}
