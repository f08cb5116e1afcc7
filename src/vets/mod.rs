//! # Vets Module
//!
//! Veterinarians who attend appointments.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::vets_routes;
