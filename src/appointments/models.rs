use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Appointment {
    pub id: i64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(rename = "pet")]
    pub pet_id: i64,
    #[serde(rename = "vet")]
    pub vet_id: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAppointment {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub pet_id: i64,
    pub vet_id: i64,
}

/// An appointment can be moved or reassigned, never handed to another pet
pub const APPOINTMENT_MUTABLE_FIELDS: [&str; 3] = ["date", "time", "vet"];
