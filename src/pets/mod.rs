//! # Pets Module
//!
//! Patients of the clinic. Every pet belongs to a client; deleting a pet
//! cancels its appointments.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;


pub use routes::pets_routes;
