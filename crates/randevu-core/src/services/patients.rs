//! Patient profile lookups.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::Role;
use crate::error::DomainError;
use crate::ports::{AccountRepository, ReservationRepository};

/// A patient's own view of one of their reservations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationSummary {
    pub id: i64,
    pub date: String,
    pub time: String,
    pub status: String,
    pub specialty: String,
}

/// Patient profile view: shared account fields plus the patient payload and
/// owned reservations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientView {
    pub id: i64,
    pub username: String,
    pub role: Role,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub birth_date: NaiveDate,
    pub national_id: String,
    pub blood_type: Option<String>,
    pub medical_history: Option<String>,
    pub doctor_ids: Vec<i64>,
    pub reservations: Vec<ReservationSummary>,
}

pub struct PatientService {
    accounts: Arc<dyn AccountRepository>,
    reservations: Arc<dyn ReservationRepository>,
}

impl PatientService {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        reservations: Arc<dyn ReservationRepository>,
    ) -> Self {
        Self {
            accounts,
            reservations,
        }
    }

    pub async fn get(&self, id: i64) -> Result<PatientView, DomainError> {
        let account = self
            .accounts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("patient {id}")))?;
        let profile = account
            .patient_profile()
            .ok_or_else(|| DomainError::NotFound(format!("patient {id}")))?;

        let reservations = self
            .reservations
            .find_by_patient(account.id)
            .await?
            .iter()
            .map(|r| ReservationSummary {
                id: r.id,
                date: r.date.to_string(),
                time: r.time.format("%H:%M").to_string(),
                status: r.status.clone(),
                specialty: r.specialty.display_name().to_string(),
            })
            .collect();

        Ok(PatientView {
            id: account.id,
            username: account.username.clone(),
            role: account.role(),
            name: account.name.clone(),
            surname: account.surname.clone(),
            email: account.email.clone(),
            phone: account.phone.clone(),
            address: account.address.clone(),
            birth_date: account.birth_date,
            national_id: account.national_id.clone(),
            blood_type: account.blood_type.clone(),
            medical_history: profile.medical_history.clone(),
            doctor_ids: profile.doctor_ids.clone(),
            reservations,
        })
    }
}
