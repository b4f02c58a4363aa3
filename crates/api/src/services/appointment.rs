//! # Appointment Service
//!
//! Business rules on top of an [`AppointmentRepository`]. The service holds no
//! state of its own beyond the shared gateway handle, so it is cheap to clone.

use std::sync::Arc;

use chrono::NaiveDate;
use dental_core::{
    errors::AppointmentResult, models::appointment::Appointment,
    repository::AppointmentRepository,
};

#[derive(Clone)]
pub struct AppointmentService {
    repository: Arc<dyn AppointmentRepository>,
}

impl AppointmentService {
    pub fn new(repository: Arc<dyn AppointmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all(&self) -> AppointmentResult<Vec<Appointment>> {
        Ok(self.repository.find_all().await?)
    }

    /// `None` when no record has this id.
    pub async fn get_by_id(&self, id: i64) -> AppointmentResult<Option<Appointment>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Creates the record when it carries no id, otherwise replaces it in full.
    pub async fn save(&self, appointment: Appointment) -> AppointmentResult<Appointment> {
        Ok(self.repository.save(appointment).await?)
    }

    /// Replaces the record stored under `id`.
    ///
    /// Whatever id the caller put in `appointment` is overwritten with `id`, so
    /// an update can never be redirected at another record. Returns `None` and
    /// writes nothing when `id` does not exist.
    pub async fn update(
        &self,
        id: i64,
        mut appointment: Appointment,
    ) -> AppointmentResult<Option<Appointment>> {
        if self.get_by_id(id).await?.is_none() {
            return Ok(None);
        }

        appointment.id = Some(id);
        self.save(appointment).await.map(Some)
    }

    /// Deleting an id that is not stored succeeds.
    pub async fn delete_by_id(&self, id: i64) -> AppointmentResult<()> {
        Ok(self.repository.delete_by_id(id).await?)
    }

    pub async fn get_by_date(&self, date: NaiveDate) -> AppointmentResult<Vec<Appointment>> {
        Ok(self.repository.find_by_date_order_by_time_asc(date).await?)
    }

    pub async fn get_by_dni(&self, dni: &str) -> AppointmentResult<Vec<Appointment>> {
        Ok(self
            .repository
            .find_by_dni_order_by_date_desc_time_desc(dni)
            .await?)
    }
}
