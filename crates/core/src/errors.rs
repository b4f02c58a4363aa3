use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppointmentError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),
}

pub type AppointmentResult<T> = Result<T, AppointmentError>;
