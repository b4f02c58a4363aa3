use async_trait::async_trait;
use chrono::NaiveDate;
use dental_core::{models::appointment::Appointment, repository::AppointmentRepository};
use eyre::Result;
use sqlx::{Pool, Postgres};

use crate::models::DbAppointment;

pub async fn insert_appointment(
    pool: &Pool<Postgres>,
    appointment: &Appointment,
) -> Result<DbAppointment> {
    tracing::debug!(
        "Inserting appointment: dni={}, date={}, time={}",
        appointment.dni, appointment.appointment_date, appointment.appointment_time
    );

    let row = sqlx::query_as::<_, DbAppointment>(
        r#"
        INSERT INTO appointments (name, last_name, dni, appointment_date, appointment_time)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, last_name, dni, appointment_date, appointment_time
        "#,
    )
    .bind(appointment.name.as_deref())
    .bind(appointment.last_name.as_deref())
    .bind(&appointment.dni)
    .bind(appointment.appointment_date)
    .bind(appointment.appointment_time)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Appointment inserted: id={}", row.id);
    Ok(row)
}

/// Overwrites every column of the row with `id`. `None` when no such row exists.
pub async fn replace_appointment(
    pool: &Pool<Postgres>,
    id: i64,
    appointment: &Appointment,
) -> Result<Option<DbAppointment>> {
    tracing::debug!("Replacing appointment: id={}", id);

    let row = sqlx::query_as::<_, DbAppointment>(
        r#"
        UPDATE appointments
        SET name = $2, last_name = $3, dni = $4, appointment_date = $5, appointment_time = $6
        WHERE id = $1
        RETURNING id, name, last_name, dni, appointment_date, appointment_time
        "#,
    )
    .bind(id)
    .bind(appointment.name.as_deref())
    .bind(appointment.last_name.as_deref())
    .bind(&appointment.dni)
    .bind(appointment.appointment_date)
    .bind(appointment.appointment_time)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn get_appointment_by_id(
    pool: &Pool<Postgres>,
    id: i64,
) -> Result<Option<DbAppointment>> {
    tracing::debug!("Getting appointment by id: {}", id);

    let row = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, name, last_name, dni, appointment_date, appointment_time
        FROM appointments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if row.is_none() {
        tracing::debug!("Appointment not found: id={}", id);
    }

    Ok(row)
}

pub async fn get_all_appointments(pool: &Pool<Postgres>) -> Result<Vec<DbAppointment>> {
    let rows = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, name, last_name, dni, appointment_date, appointment_time
        FROM appointments
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn delete_appointment_by_id(pool: &Pool<Postgres>, id: i64) -> Result<()> {
    let result = sqlx::query(
        r#"
        DELETE FROM appointments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    tracing::debug!("Deleted appointment id={}: rows_affected={}", id, result.rows_affected());
    Ok(())
}

pub async fn get_appointments_by_date(
    pool: &Pool<Postgres>,
    date: NaiveDate,
) -> Result<Vec<DbAppointment>> {
    let rows = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, name, last_name, dni, appointment_date, appointment_time
        FROM appointments
        WHERE appointment_date = $1
        ORDER BY appointment_time ASC, id ASC
        "#,
    )
    .bind(date)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn get_appointments_by_dni(
    pool: &Pool<Postgres>,
    dni: &str,
) -> Result<Vec<DbAppointment>> {
    let rows = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, name, last_name, dni, appointment_date, appointment_time
        FROM appointments
        WHERE dni = $1
        ORDER BY appointment_date DESC, appointment_time DESC, id ASC
        "#,
    )
    .bind(dni)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// PostgreSQL-backed gateway delegating to the query functions above.
#[derive(Debug, Clone)]
pub struct PgAppointmentRepository {
    pool: Pool<Postgres>,
}

impl PgAppointmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentRepository for PgAppointmentRepository {
    async fn save(&self, appointment: Appointment) -> Result<Appointment> {
        if let Some(id) = appointment.id {
            if let Some(row) = replace_appointment(&self.pool, id, &appointment).await? {
                return Ok(row.into());
            }
            tracing::debug!("No appointment with id={}, inserting as new", id);
        }

        Ok(insert_appointment(&self.pool, &appointment).await?.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Appointment>> {
        Ok(get_appointment_by_id(&self.pool, id).await?.map(Appointment::from))
    }

    async fn find_all(&self) -> Result<Vec<Appointment>> {
        let rows = get_all_appointments(&self.pool).await?;
        Ok(rows.into_iter().map(Appointment::from).collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        delete_appointment_by_id(&self.pool, id).await
    }

    async fn find_by_date_order_by_time_asc(&self, date: NaiveDate) -> Result<Vec<Appointment>> {
        let rows = get_appointments_by_date(&self.pool, date).await?;
        Ok(rows.into_iter().map(Appointment::from).collect())
    }

    async fn find_by_dni_order_by_date_desc_time_desc(
        &self,
        dni: &str,
    ) -> Result<Vec<Appointment>> {
        let rows = get_appointments_by_dni(&self.pool, dni).await?;
        Ok(rows.into_iter().map(Appointment::from).collect())
    }
}
