//! # Error Handling Middleware
//!
//! Maps domain errors onto HTTP responses so that every handler reports
//! failures the same way.
//!
//! - `NotFound` becomes a bare 404 with no body.
//! - `Database` becomes a 500 with a JSON `{"error": ...}` body and is logged.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dental_core::errors::AppointmentError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use dental_api::middleware::error_handling::AppError;
/// use dental_core::errors::AppointmentError;
/// use dental_core::models::appointment::Appointment;
///
/// fn found_or_404(found: Option<Appointment>, id: i64) -> Result<Json<Appointment>, AppError> {
///     let appointment = found.ok_or_else(|| {
///         AppointmentError::NotFound(format!("Appointment with ID {} not found", id))
///     })?;
///     Ok(Json(appointment))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub AppointmentError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self.0 {
            AppointmentError::NotFound(message) => {
                tracing::debug!("{}", message);
                StatusCode::NOT_FOUND.into_response()
            }
            AppointmentError::Database(report) => {
                tracing::error!("Request failed: {:?}", report);
                let body = Json(json!({ "error": self.0.to_string() }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

/// Allows `?` on `AppointmentResult` inside handlers returning `Result<T, AppError>`
impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        AppError(err)
    }
}

/// Wraps a bare `eyre::Report` as a database failure
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(AppointmentError::Database(err))
    }
}
