use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Provider {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProvider {
    pub name: String,
    pub email: String,
    pub address: String,
}

pub const PROVIDER_MUTABLE_FIELDS: [&str; 3] = ["name", "email", "address"];
