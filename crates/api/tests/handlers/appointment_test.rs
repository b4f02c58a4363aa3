use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use chrono::NaiveTime;
use dental_core::{models::appointment::Appointment, repository::AppointmentRepository};
use dental_db::mock::repositories::MockAppointmentRepo;
use mockall::predicate;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::test_utils::{TestContext, appointment_body, date, test_server, time};

#[tokio::test]
async fn test_create_appointment_returns_201_with_id() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/appointments")
        .json(&appointment_body("12345678", "2024-05-01", "09:00"))
        .await;

    response.assert_status(StatusCode::CREATED);
    let created: Appointment = response.json();
    assert!(created.id.is_some());
    assert_eq!(created.dni, "12345678");
    assert_eq!(created.appointment_date, date(2024, 5, 1));
    assert_eq!(created.appointment_time, time(9, 0));
}

#[tokio::test]
async fn test_create_appointment_passes_descriptive_fields_through() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/appointments")
        .json(&json!({
            "name": "Rosa",
            "lastName": "Quispe",
            "dni": "12345678",
            "appointmentDate": "2024-05-01",
            "appointmentTime": "09:00"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["name"], "Rosa");
    assert_eq!(body["lastName"], "Quispe");
    assert_eq!(body["appointmentTime"], "09:00");
}

#[tokio::test]
async fn test_create_appointment_missing_dni_is_rejected() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/appointments")
        .json(&json!({ "appointmentDate": "2024-05-01", "appointmentTime": "09:00" }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(ctx.repository.is_empty().await);
}

#[tokio::test]
async fn test_list_appointments_returns_everything() {
    let ctx = TestContext::new();
    ctx.seed("1", date(2024, 5, 1), time(9, 0)).await;
    ctx.seed("2", date(2024, 5, 2), time(10, 0)).await;

    let response = ctx.server.get("/api/appointments").await;

    response.assert_status_ok();
    let appointments: Vec<Appointment> = response.json();
    assert_eq!(appointments.len(), 2);
}

#[tokio::test]
async fn test_list_appointments_empty() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/appointments").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_get_appointment_found() {
    let ctx = TestContext::new();
    let seeded = ctx.seed("12345678", date(2024, 5, 1), time(9, 0)).await;

    let response = ctx
        .server
        .get(&format!("/api/appointments/{}", seeded.id.unwrap()))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Appointment>(), seeded);
}

#[tokio::test]
async fn test_get_appointment_never_created_is_404_with_empty_body() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .get("/api/appointments/999999")
        .expect_failure()
        .await;

    response.assert_status_not_found();
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_get_appointment_non_numeric_id_is_bad_request() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .get("/api/appointments/abc")
        .expect_failure()
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_update_forces_path_id_over_body_id() {
    let ctx = TestContext::new();
    let target = ctx.seed("11111111", date(2024, 5, 1), time(9, 0)).await;
    let other = ctx.seed("22222222", date(2024, 5, 1), time(10, 0)).await;
    let target_id = target.id.unwrap();

    let mut body = appointment_body("11111111", "2024-05-03", "11:30");
    body["id"] = json!(other.id.unwrap());

    let response = ctx
        .server
        .put(&format!("/api/appointments/{}", target_id))
        .json(&body)
        .await;

    response.assert_status_ok();
    let updated: Appointment = response.json();
    assert_eq!(updated.id, Some(target_id));
    assert_eq!(updated.appointment_date, date(2024, 5, 3));
    assert_eq!(updated.appointment_time, time(11, 30));

    // The record named in the body is untouched
    let untouched: Appointment = ctx
        .server
        .get(&format!("/api/appointments/{}", other.id.unwrap()))
        .await
        .json();
    assert_eq!(untouched, other);
    assert_eq!(ctx.repository.len().await, 2);
}

#[tokio::test]
async fn test_update_replaces_all_fields() {
    let ctx = TestContext::new();
    let response = ctx
        .server
        .post("/api/appointments")
        .json(&json!({
            "name": "Rosa",
            "lastName": "Quispe",
            "dni": "12345678",
            "appointmentDate": "2024-05-01",
            "appointmentTime": "09:00"
        }))
        .await;
    let id = response.json::<Appointment>().id.unwrap();

    let response = ctx
        .server
        .put(&format!("/api/appointments/{}", id))
        .json(&appointment_body("12345678", "2024-05-01", "09:30"))
        .await;

    response.assert_status_ok();
    let updated: Appointment = response.json();
    assert_eq!(updated.name, None);
    assert_eq!(updated.last_name, None);
    assert_eq!(updated.appointment_time, time(9, 30));
}

#[tokio::test]
async fn test_update_missing_id_is_404_and_creates_nothing() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .put("/api/appointments/42")
        .json(&appointment_body("12345678", "2024-05-01", "09:00"))
        .expect_failure()
        .await;

    response.assert_status_not_found();
    assert!(response.text().is_empty());
    assert!(ctx.repository.is_empty().await);
}

#[tokio::test]
async fn test_delete_then_get_is_404() {
    let ctx = TestContext::new();
    let seeded = ctx.seed("12345678", date(2024, 5, 1), time(9, 0)).await;
    let path = format!("/api/appointments/{}", seeded.id.unwrap());

    let response = ctx.server.delete(&path).await;
    response.assert_status(StatusCode::NO_CONTENT);

    let response = ctx.server.get(&path).expect_failure().await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_nonexistent_id_is_204() {
    let ctx = TestContext::new();

    let response = ctx.server.delete("/api/appointments/123456").await;

    response.assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_storage_failure_is_500() {
    let mut repo = MockAppointmentRepo::new();
    repo.expect_delete_by_id()
        .with(predicate::eq(7))
        .times(1)
        .returning(|_| Err(eyre::eyre!("connection refused")));
    let server = test_server(Arc::new(repo));

    let response = server
        .delete("/api/appointments/7")
        .expect_failure()
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_list_storage_failure_is_500() {
    let mut repo = MockAppointmentRepo::new();
    repo.expect_find_all()
        .returning(|| Err(eyre::eyre!("relation \"appointments\" does not exist")));
    let server = test_server(Arc::new(repo));

    let response = server.get("/api/appointments").expect_failure().await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("does not exist"));
}

#[tokio::test]
async fn test_by_date_sorted_by_time() {
    let ctx = TestContext::new();
    let nine = ctx.seed("1", date(2024, 5, 1), time(9, 0)).await;
    let eight = ctx.seed("2", date(2024, 5, 1), time(8, 0)).await;
    ctx.seed("3", date(2024, 5, 2), time(7, 0)).await;

    let response = ctx.server.get("/api/appointments/date/2024-05-01").await;

    response.assert_status_ok();
    let appointments: Vec<Appointment> = response.json();
    assert_eq!(appointments, vec![eight, nine]);
}

#[tokio::test]
async fn test_by_date_without_matches_is_empty_list() {
    let ctx = TestContext::new();
    ctx.seed("1", date(2024, 5, 1), time(9, 0)).await;

    let response = ctx.server.get("/api/appointments/date/2024-06-01").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_by_date_malformed_date_is_bad_request() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .get("/api/appointments/date/01-05-2024")
        .expect_failure()
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_by_dni_most_recent_first() {
    let ctx = TestContext::new();
    let older = ctx.seed("12345678", date(2024, 1, 15), time(9, 0)).await;
    let newest_late = ctx.seed("12345678", date(2024, 4, 2), time(16, 0)).await;
    let newest_early = ctx.seed("12345678", date(2024, 4, 2), time(8, 0)).await;
    ctx.seed("87654321", date(2024, 12, 1), time(9, 0)).await;

    let response = ctx.server.get("/api/appointments/dni/12345678").await;

    response.assert_status_ok();
    let appointments: Vec<Appointment> = response.json();
    assert_eq!(appointments, vec![newest_late, newest_early, older]);
}

#[tokio::test]
async fn test_by_dni_unknown_is_empty_list() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/appointments/dni/00000000").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_cross_origin_requests_allowed() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .get("/api/appointments")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("http://reception.example"),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("access-control-allow-origin"), "*");
}

#[tokio::test]
async fn test_health_reports_clinic_timezone() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok", "timezone": "America/Lima" }));
}

#[tokio::test]
async fn test_fractional_time_is_returned_as_stored() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/appointments")
        .json(&appointment_body("12345678", "2024-05-01", "10:15:30.5"))
        .await;
    response.assert_status(StatusCode::CREATED);
    let created: serde_json::Value = response.json();
    assert_eq!(created["appointmentTime"], "10:15:30.500");

    // Sending the GET body back unchanged leaves the stored time alone
    let path = format!("/api/appointments/{}", created["id"]);
    let fetched: serde_json::Value = ctx.server.get(&path).await.json();
    ctx.server.put(&path).json(&fetched).await.assert_status_ok();

    let stored = ctx
        .repository
        .find_all()
        .await
        .unwrap()
        .pop()
        .expect("one stored appointment");
    assert_eq!(
        stored.appointment_time,
        NaiveTime::from_hms_milli_opt(10, 15, 30, 500).unwrap()
    );
}
