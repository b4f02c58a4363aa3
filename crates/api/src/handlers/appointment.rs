//! # Appointment Handlers
//!
//! One handler per route under `/api/appointments`. Each delegates to the
//! [`AppointmentService`](crate::services::AppointmentService) held in
//! [`ApiState`] and lets [`AppError`] translate failures.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use dental_core::{errors::AppointmentError, models::appointment::Appointment};
use std::sync::Arc;

use crate::{ApiState, middleware::error_handling::AppError};

fn not_found(id: i64) -> AppError {
    AppError(AppointmentError::NotFound(format!(
        "Appointment with ID {} not found",
        id
    )))
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let appointments = state.service.get_all().await?;
    Ok(Json(appointments))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> Result<Json<Appointment>, AppError> {
    let appointment = state
        .service
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(appointment))
}

#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<Appointment>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    let saved = state.service.save(payload).await?;
    tracing::info!(
        "Created appointment id={:?} for {} on {} at {}",
        saved.id, saved.dni, saved.appointment_date, saved.appointment_time
    );

    Ok((StatusCode::CREATED, Json(saved)))
}

/// The path id always wins over any `id` in the body.
#[axum::debug_handler]
pub async fn update_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
    Json(payload): Json<Appointment>,
) -> Result<Json<Appointment>, AppError> {
    if payload.id.is_some_and(|body_id| body_id != id) {
        tracing::warn!(
            "Ignoring body id {:?} on update of appointment {}",
            payload.id, id
        );
    }

    let updated = state
        .service
        .update(id, payload)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!("Updated appointment id={}", id);

    Ok(Json(updated))
}

#[axum::debug_handler]
pub async fn delete_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.service.delete_by_id(id).await?;
    tracing::info!("Deleted appointment id={}", id);

    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn appointments_by_date(
    State(state): State<Arc<ApiState>>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let appointments = state.service.get_by_date(date).await?;
    Ok(Json(appointments))
}

#[axum::debug_handler]
pub async fn appointments_by_dni(
    State(state): State<Arc<ApiState>>,
    Path(dni): Path<String>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let appointments = state.service.get_by_dni(&dni).await?;
    Ok(Json(appointments))
}
