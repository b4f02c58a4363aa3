use async_trait::async_trait;
use chrono::NaiveDate;
use dental_core::{models::appointment::Appointment, repository::AppointmentRepository};
use mockall::mock;

// Mock gateway for injecting storage failures in tests
mock! {
    pub AppointmentRepo {}

    #[async_trait]
    impl AppointmentRepository for AppointmentRepo {
        async fn save(&self, appointment: Appointment) -> eyre::Result<Appointment>;

        async fn find_by_id(&self, id: i64) -> eyre::Result<Option<Appointment>>;

        async fn find_all(&self) -> eyre::Result<Vec<Appointment>>;

        async fn delete_by_id(&self, id: i64) -> eyre::Result<()>;

        async fn find_by_date_order_by_time_asc(
            &self,
            date: NaiveDate,
        ) -> eyre::Result<Vec<Appointment>>;

        async fn find_by_dni_order_by_date_desc_time_desc(
            &self,
            dni: &str,
        ) -> eyre::Result<Vec<Appointment>>;
    }
}
