//! # Appointments Module
//!
//! Visits that join a pet with the vet attending it. An appointment is
//! removed when either its pet or its vet is deleted.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;


pub use routes::appointments_routes;
