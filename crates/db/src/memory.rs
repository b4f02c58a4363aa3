//! In-process gateway used by tests and by the server when started with
//! `APPOINTMENT_STORE=memory`. Contents are lost when the process exits.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use dental_core::{models::appointment::Appointment, repository::AppointmentRepository};
use eyre::Result;
use tokio::sync::RwLock;

#[derive(Debug)]
struct Store {
    // Only ever incremented, so ids survive deletion unused.
    next_id: i64,
    rows: BTreeMap<i64, Appointment>,
}

#[derive(Debug)]
pub struct InMemoryAppointmentRepository {
    store: RwLock<Store>,
}

impl InMemoryAppointmentRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryAppointmentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentRepository {
    async fn save(&self, mut appointment: Appointment) -> Result<Appointment> {
        let mut store = self.store.write().await;

        let id = match appointment.id {
            Some(id) if store.rows.contains_key(&id) => id,
            _ => {
                let id = store.next_id;
                store.next_id += 1;
                id
            }
        };

        appointment.id = Some(id);
        store.rows.insert(id, appointment.clone());
        tracing::debug!("Stored appointment in memory: id={}", id);

        Ok(appointment)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Appointment>> {
        Ok(self.store.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Appointment>> {
        Ok(self.store.read().await.rows.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.store.write().await.rows.remove(&id);
        Ok(())
    }

    async fn find_by_date_order_by_time_asc(&self, date: NaiveDate) -> Result<Vec<Appointment>> {
        let store = self.store.read().await;
        let mut matches: Vec<Appointment> = store
            .rows
            .values()
            .filter(|a| a.appointment_date == date)
            .cloned()
            .collect();

        // Stable sort keeps the id order for equal times.
        matches.sort_by_key(|a| a.appointment_time);
        Ok(matches)
    }

    async fn find_by_dni_order_by_date_desc_time_desc(
        &self,
        dni: &str,
    ) -> Result<Vec<Appointment>> {
        let store = self.store.read().await;
        let mut matches: Vec<Appointment> = store
            .rows
            .values()
            .filter(|a| a.dni == dni)
            .cloned()
            .collect();

        matches.sort_by(|a, b| {
            b.appointment_date
                .cmp(&a.appointment_date)
                .then_with(|| b.appointment_time.cmp(&a.appointment_time))
        });
        Ok(matches)
    }
}
