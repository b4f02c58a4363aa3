pub mod appointment;

pub use appointment::PgAppointmentRepository;
