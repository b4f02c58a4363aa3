use axum::{
    Router,
    routing::get,
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/appointments",
            get(handlers::appointment::list_appointments)
                .post(handlers::appointment::create_appointment),
        )
        .route(
            "/api/appointments/:id",
            get(handlers::appointment::get_appointment)
                .put(handlers::appointment::update_appointment)
                .delete(handlers::appointment::delete_appointment),
        )
        .route(
            "/api/appointments/date/:date",
            get(handlers::appointment::appointments_by_date),
        )
        .route(
            "/api/appointments/dni/:dni",
            get(handlers::appointment::appointments_by_dni),
        )
}
