use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub email: String,
}

/// Validated client fields ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewClient {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub email: String,
}

/// Fields an update may replace
pub const CLIENT_MUTABLE_FIELDS: [&str; 4] = ["name", "phone", "address", "email"];
