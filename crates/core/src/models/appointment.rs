use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A single scheduled dental visit.
///
/// `id` is `None` until the record has been saved; the gateway assigns it.
/// `name` and `last_name` are carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub dni: String,
    pub appointment_date: NaiveDate,
    #[serde(with = "time_of_day")]
    pub appointment_time: NaiveTime,
}

impl Appointment {
    /// Builds an unsaved appointment with no descriptive fields.
    pub fn new(
        dni: impl Into<String>,
        appointment_date: NaiveDate,
        appointment_time: NaiveTime,
    ) -> Self {
        Self {
            id: None,
            name: None,
            last_name: None,
            dni: dni.into(),
            appointment_date,
            appointment_time,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// Serde adapter for `appointmentTime`.
///
/// Accepts `HH:MM` as well as `HH:MM:SS[.fff]`. Output drops only the parts
/// that are zero: whole minutes are written as `HH:MM`, whole seconds as
/// `HH:MM:SS`, and any fraction is kept (`HH:MM:SS.fff`).
pub mod time_of_day {
    use chrono::{NaiveTime, Timelike};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = if time.nanosecond() != 0 {
            time.format("%H:%M:%S%.f").to_string()
        } else if time.second() != 0 {
            time.format("%H:%M:%S").to_string()
        } else {
            time.format("%H:%M").to_string()
        };
        serializer.serialize_str(&formatted)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<NaiveTime>()
            .map_err(|e| de::Error::custom(format!("invalid appointmentTime {raw:?}: {e}")))
    }
}
