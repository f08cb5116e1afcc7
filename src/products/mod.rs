//! # Products Module
//!
//! Retail products sold at the clinic (food, toys, accessories).

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;


pub use routes::products_routes;
