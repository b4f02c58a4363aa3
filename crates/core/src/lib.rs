//! # Dental Core
//!
//! Domain types shared by the storage and HTTP crates: the appointment record,
//! the error taxonomy and the persistence gateway trait.

pub mod errors;
pub mod models;
pub mod repository;
