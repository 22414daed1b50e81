use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::specialty::Specialty;

/// A booked slot binding one doctor, one patient, a date, and a time.
///
/// The specialty is a denormalized copy of the doctor's specialty at
/// booking time. Status is a free-text label ("pending", "confirmed",
/// "cancelled"); no state machine constrains it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub doctor_id: i64,
    pub patient_id: i64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: String,
    pub specialty: Specialty,
}

/// Input to the booking algorithm: references by id, the slot, and the
/// specialty display name still to be validated against the catalog.
///
/// Used for both creation and full-overwrite updates.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub doctor_id: i64,
    pub patient_id: i64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: String,
    pub specialty: String,
}
