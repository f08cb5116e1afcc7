use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Medicine {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Between 1 and 10 inclusive
    pub dose: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMedicine {
    pub name: String,
    pub description: String,
    pub dose: i64,
}

pub const MEDICINE_MUTABLE_FIELDS: [&str; 3] = ["name", "description", "dose"];
