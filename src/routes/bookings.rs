use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::Result;
use crate::models::Booking;
use crate::AppState;

/// List bookings for one practitioner, earliest appointment first
///
/// Backs the practitioner dashboard table. An unknown id simply yields an
/// empty list; the dashboard renders that as its empty state.
pub async fn doctor_bookings(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Booking>>> {
    let bookings = sqlx::query_as::<_, Booking>(
        "SELECT id, appointment_time, address, service, user_id, doctor_id \
         FROM bookings WHERE doctor_id = $1 ORDER BY appointment_time",
    )
    .bind(id)
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(bookings))
}
