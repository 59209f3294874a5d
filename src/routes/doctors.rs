use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{Doctor, DoctorAuth};
use crate::routes::LoginRequest;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct DoctorSignupRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialisation: String,
    pub password: String,
}

/// Create a practitioner account
///
/// Symmetric to patient signup: one insert, no uniqueness guarantee beyond
/// the client-side probe, password column never returned.
pub async fn doctor_signup(
    State(state): State<AppState>,
    Json(payload): Json<DoctorSignupRequest>,
) -> Result<Json<Doctor>> {
    let doctor = sqlx::query_as::<_, Doctor>(
        "INSERT INTO doctors (name, email, phone, specialisation, password) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING id, name, email, phone, specialisation, created_at",
    )
    .bind(&payload.name)
    .bind(&payload.email)
    .bind(&payload.phone)
    .bind(&payload.specialisation)
    .bind(&payload.password)
    .fetch_one(&state.pool)
    .await?;

    tracing::info!("New practitioner account created: id={}", doctor.id);
    Ok(Json(doctor))
}

/// Authenticate a practitioner by email and password (plain-text comparison)
pub async fn doctor_login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Doctor>> {
    let row = sqlx::query_as::<_, DoctorAuth>(
        "SELECT id, name, email, phone, specialisation, password, created_at \
         FROM doctors WHERE email = $1",
    )
    .bind(&payload.email)
    .fetch_optional(&state.pool)
    .await?;

    let Some(auth) = row else {
        tracing::warn!("Login attempt for unknown practitioner email");
        return Err(AppError::InvalidCredentials);
    };

    if auth.password != payload.password {
        tracing::warn!("Password mismatch for practitioner id={}", auth.id);
        return Err(AppError::InvalidCredentials);
    }

    Ok(Json(auth.into()))
}

/// List every practitioner
///
/// Full unfiltered scan, no pagination; the booking form shows the whole
/// directory at once.
pub async fn list_doctors(State(state): State<AppState>) -> Result<Json<Vec<Doctor>>> {
    let doctors = sqlx::query_as::<_, Doctor>(
        "SELECT id, name, email, phone, specialisation, created_at \
         FROM doctors ORDER BY id",
    )
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(doctors))
}

/// Fetch a practitioner profile by id
pub async fn get_doctor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Doctor>> {
    let doctor = sqlx::query_as::<_, Doctor>(
        "SELECT id, name, email, phone, specialisation, created_at \
         FROM doctors WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::RecordNotFound)?;

    Ok(Json(doctor))
}
