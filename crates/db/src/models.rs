use chrono::{NaiveDate, NaiveTime};
use dental_core::models::appointment::Appointment;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: i64,
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub dni: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
}

impl From<DbAppointment> for Appointment {
    fn from(row: DbAppointment) -> Self {
        Appointment {
            id: Some(row.id),
            name: row.name,
            last_name: row.last_name,
            dni: row.dni,
            appointment_date: row.appointment_date,
            appointment_time: row.appointment_time,
        }
    }
}
