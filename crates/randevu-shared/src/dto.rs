//! Data Transfer Objects - request/response types for the API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request to login with username and password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request for the doctor login, keyed by national id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorLoginRequest {
    pub national_id: String,
    pub password: String,
}

/// Response to a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub id: i64,
    pub role: String,
    pub token: String,
    pub message: String,
}

/// Shared registration fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub blood_type: Option<String>,
    pub national_id: String,
}

/// Doctor registration: shared fields plus the doctor profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDoctorRequest {
    #[serde(flatten)]
    pub account: RegisterRequest,
    pub diploma_no: String,
    pub title: String,
    pub specialty: String,
}

/// Doctor profile update payload (full overwrite).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDoctorRequest {
    pub username: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
    pub birth_date: NaiveDate,
    pub national_id: String,
    #[serde(default)]
    pub blood_type: Option<String>,
    pub diploma_no: String,
    pub title: String,
    pub specialty: String,
}

/// Request to book or overwrite a reservation. Dates and times travel as
/// ISO strings (`YYYY-MM-DD`, `HH:MM[:SS]`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub doctor_id: i64,
    pub patient_id: i64,
    pub date: String,
    pub time: String,
    pub status: String,
    pub specialty: String,
}

/// One catalog row of the specialty listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialtyResponse {
    pub id: i64,
    pub name: String,
}

/// Profile summary returned by `GET /auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDetailsResponse {
    pub id: i64,
    pub username: String,
    pub role: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
}

/// Plain-message acknowledgment for operations without a richer payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
