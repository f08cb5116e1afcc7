use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Vet {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewVet {
    pub name: String,
    pub email: String,
    pub phone: String,
}

pub const VET_MUTABLE_FIELDS: [&str; 3] = ["name", "email", "phone"];
