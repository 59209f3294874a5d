use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Role;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckEmailRequest {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckEmailResponse {
    pub exists: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Probe both account tables for an email
///
/// Patients are checked first, then practitioners, in sequence. The probe
/// and any later insert are separate requests, so the answer can be stale
/// by the time a signup lands; that window is inherent to the flow.
pub async fn check_email(
    State(state): State<AppState>,
    Json(payload): Json<CheckEmailRequest>,
) -> Result<Json<CheckEmailResponse>> {
    let patient: Option<(i64,)> =
        sqlx::query_as("SELECT id FROM users WHERE email = $1 LIMIT 1")
            .bind(&payload.email)
            .fetch_optional(&state.pool)
            .await?;

    if patient.is_some() {
        return Ok(Json(CheckEmailResponse {
            exists: true,
            role: Some(Role::Patient),
        }));
    }

    let doctor: Option<(i64,)> =
        sqlx::query_as("SELECT id FROM doctors WHERE email = $1 LIMIT 1")
            .bind(&payload.email)
            .fetch_optional(&state.pool)
            .await?;

    Ok(Json(CheckEmailResponse {
        exists: doctor.is_some(),
        role: doctor.map(|_| Role::Doctor),
    }))
}
