use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
use dental_api::middleware::error_handling::AppError;
use dental_core::errors::AppointmentError;
use serde_json::Value;

#[tokio::test]
async fn test_error_handling_not_found_has_empty_body() {
    let error = AppError(AppointmentError::NotFound("Appointment with ID 1 not found".to_string()));

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_error_handling_database() {
    let error = AppError(AppointmentError::Database(eyre::eyre!("connection reset")));

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].as_str().unwrap().contains("connection reset"));
}

#[tokio::test]
async fn test_from_eyre_report_maps_to_internal_error() {
    let error: AppError = eyre::eyre!("pool exhausted").into();

    assert!(matches!(error.0, AppointmentError::Database(_)));
    assert_eq!(error.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_from_appointment_error() {
    let error: AppError = AppointmentError::NotFound("missing".to_string()).into();

    assert_eq!(error.into_response().status(), StatusCode::NOT_FOUND);
}
