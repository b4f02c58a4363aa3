//! # Persistence Gateway
//!
//! Storage-agnostic operations over [`Appointment`] records. The PostgreSQL,
//! in-memory and mock implementations live in `dental-db`.

use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::Result;

use crate::models::appointment::Appointment;

/// Abstract store of appointments.
///
/// Implementations must never hand out an id twice, even after the record
/// holding it has been deleted.
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Inserts or fully replaces a record and returns what was stored.
    ///
    /// * `id == None` inserts with a fresh id.
    /// * `id == Some(existing)` overwrites every field of that record.
    /// * `id == Some(unknown)` inserts with a fresh id; the supplied one is discarded.
    async fn save(&self, appointment: Appointment) -> Result<Appointment>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Appointment>>;

    /// Every stored record, by id ascending.
    async fn find_all(&self) -> Result<Vec<Appointment>>;

    /// Removes the record if present. Absent ids are not an error.
    async fn delete_by_id(&self, id: i64) -> Result<()>;

    /// Records on `date`, earliest time first.
    async fn find_by_date_order_by_time_asc(&self, date: NaiveDate) -> Result<Vec<Appointment>>;

    /// Records for `dni`, most recent date and time first.
    async fn find_by_dni_order_by_date_desc_time_desc(&self, dni: &str) -> Result<Vec<Appointment>>;
}
