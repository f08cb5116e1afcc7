//! # Clients Module
//!
//! Pet owners registered at the clinic:
//! - Client CRUD operations
//! - Phone, email and name validation
//! - Listing the pets a client owns

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::clients_routes;
