//! Doctor administration: the directory operations behind the admin panel.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Account, AccountKind, Specialty};
use crate::error::DomainError;
use crate::ports::AccountRepository;

/// Full doctor profile view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorDetails {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub surname: String,
    pub specialty: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub birth_date: NaiveDate,
    pub national_id: String,
    pub blood_type: Option<String>,
    pub diploma_no: String,
    pub title: String,
}

/// Overwrite payload for a doctor profile update.
#[derive(Debug, Clone)]
pub struct DoctorUpdate {
    pub username: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub birth_date: NaiveDate,
    pub national_id: String,
    pub blood_type: Option<String>,
    pub diploma_no: String,
    pub title: String,
    pub specialty: String,
}

pub struct DoctorService {
    accounts: Arc<dyn AccountRepository>,
}

impl DoctorService {
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self { accounts }
    }

    pub async fn all(&self) -> Result<Vec<DoctorDetails>, DomainError> {
        let doctors = self.accounts.find_doctors().await?;
        Ok(doctors.iter().filter_map(Self::details).collect())
    }

    pub async fn get(&self, id: i64) -> Result<DoctorDetails, DomainError> {
        let account = self.doctor(id).await?;
        Self::details(&account).ok_or_else(|| DomainError::NotFound(format!("doctor {id}")))
    }

    /// Overwrite the mutable profile fields of a doctor.
    pub async fn update(&self, id: i64, update: DoctorUpdate) -> Result<DoctorDetails, DomainError> {
        let specialty = Specialty::from_name(update.specialty.trim())
            .or_else(|| Specialty::from_display_name(&update.specialty))
            .ok_or_else(|| DomainError::InvalidSpecialty(update.specialty.trim().to_string()))?;

        let mut account = self.doctor(id).await?;
        account.username = update.username;
        account.name = update.name;
        account.surname = update.surname;
        account.email = update.email;
        account.phone = update.phone;
        account.address = update.address;
        account.birth_date = update.birth_date;
        account.national_id = update.national_id;
        account.blood_type = update.blood_type;
        if let AccountKind::Doctor(profile) = &mut account.kind {
            profile.diploma_no = update.diploma_no;
            profile.title = update.title;
            profile.specialty = specialty;
        }

        let stored = self.accounts.update(account).await?;
        Self::details(&stored).ok_or_else(|| DomainError::NotFound(format!("doctor {id}")))
    }

    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.doctor(id).await?;
        Ok(self.accounts.delete(id).await?)
    }

    async fn doctor(&self, id: i64) -> Result<Account, DomainError> {
        self.accounts
            .find_by_id(id)
            .await?
            .filter(|a| a.doctor_profile().is_some())
            .ok_or_else(|| DomainError::NotFound(format!("doctor {id}")))
    }

    fn details(account: &Account) -> Option<DoctorDetails> {
        let profile = account.doctor_profile()?;
        Some(DoctorDetails {
            id: account.id,
            username: account.username.clone(),
            name: account.name.clone(),
            surname: account.surname.clone(),
            specialty: profile.specialty.display_name().to_string(),
            email: account.email.clone(),
            phone: account.phone.clone(),
            address: account.address.clone(),
            birth_date: account.birth_date,
            national_id: account.national_id.clone(),
            blood_type: account.blood_type.clone(),
            diploma_no: profile.diploma_no.clone(),
            title: profile.title.clone(),
        })
    }
}
