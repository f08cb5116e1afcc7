use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub breed: String,
    pub birthday: NaiveDate,
    #[serde(rename = "client")]
    pub client_id: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPet {
    pub name: String,
    pub breed: String,
    pub birthday: NaiveDate,
    pub client_id: i64,
}

/// The owner is fixed once the pet is registered
pub const PET_MUTABLE_FIELDS: [&str; 3] = ["name", "breed", "birthday"];
