//! The reservation manager: specialty validation, reference resolution,
//! the no-double-booking rule, and reservation views.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{Account, BookingRequest, Reservation, Specialty, SpecialtyRecord};
use crate::error::{DomainError, RepoError};
use crate::ports::{AccountRepository, ReservationRepository, SpecialtyRepository};

/// Flattened reservation view: doctor/patient names inlined, reference ids
/// stringified, specialty resolved to its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationView {
    pub id: i64,
    pub doctor_id: String,
    pub doctor_name: String,
    pub doctor_surname: String,
    pub patient_id: String,
    pub patient_name: String,
    pub patient_surname: String,
    pub date: String,
    pub time: String,
    pub status: String,
    pub specialty: String,
}

/// List entry for the doctors-by-specialty lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorSummary {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub specialty: String,
}

pub struct ReservationService {
    reservations: Arc<dyn ReservationRepository>,
    accounts: Arc<dyn AccountRepository>,
    specialties: Arc<dyn SpecialtyRepository>,
}

impl ReservationService {
    pub fn new(
        reservations: Arc<dyn ReservationRepository>,
        accounts: Arc<dyn AccountRepository>,
        specialties: Arc<dyn SpecialtyRepository>,
    ) -> Self {
        Self {
            reservations,
            accounts,
            specialties,
        }
    }

    /// Book a slot.
    ///
    /// The conflict rule is global: one reservation per exact (date, time)
    /// pair across all doctors. The store enforces the same invariant
    /// atomically with the insert, so a concurrent booking that slips past
    /// the pre-check still surfaces as `SlotConflict`.
    pub async fn create(&self, request: BookingRequest) -> Result<ReservationView, DomainError> {
        let specialty = Specialty::from_display_name(&request.specialty)
            .ok_or_else(|| DomainError::InvalidSpecialty(request.specialty.trim().to_string()))?;

        let doctor = self.doctor_ref(request.doctor_id).await?;
        let patient = self.patient_ref(request.patient_id).await?;

        if self
            .reservations
            .find_by_slot(request.date, request.time)
            .await?
            .is_some()
        {
            return Err(DomainError::SlotConflict);
        }

        let reservation = Reservation {
            id: 0,
            doctor_id: doctor.id,
            patient_id: patient.id,
            date: request.date,
            time: request.time,
            status: request.status,
            specialty,
        };
        let stored = self
            .reservations
            .insert(reservation)
            .await
            .map_err(|e| match e {
                RepoError::Constraint(_) => DomainError::SlotConflict,
                other => other.into(),
            })?;

        tracing::info!(
            reservation_id = stored.id,
            doctor_id = doctor.id,
            patient_id = patient.id,
            date = %stored.date,
            time = %stored.time,
            "reservation created"
        );

        Ok(Self::view(&stored, &doctor, &patient))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ReservationView, DomainError> {
        let reservation = self
            .reservations
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("reservation {id}")))?;
        self.resolve_view(&reservation).await
    }

    pub async fn get_all(&self) -> Result<Vec<ReservationView>, DomainError> {
        let mut views = Vec::new();
        for reservation in self.reservations.find_all().await? {
            views.push(self.resolve_view(&reservation).await?);
        }
        Ok(views)
    }

    /// Full overwrite of every mutable field. The slot conflict rule is
    /// deliberately not re-checked here, matching creation-only enforcement.
    pub async fn update(
        &self,
        id: i64,
        request: BookingRequest,
    ) -> Result<ReservationView, DomainError> {
        let mut reservation = self
            .reservations
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("reservation {id}")))?;

        let specialty = Specialty::from_display_name(&request.specialty)
            .ok_or_else(|| DomainError::InvalidSpecialty(request.specialty.trim().to_string()))?;
        let doctor = self.doctor_ref(request.doctor_id).await?;
        let patient = self.patient_ref(request.patient_id).await?;

        reservation.doctor_id = doctor.id;
        reservation.patient_id = patient.id;
        reservation.date = request.date;
        reservation.time = request.time;
        reservation.status = request.status;
        reservation.specialty = specialty;

        let stored = self.reservations.update(reservation).await?;
        Ok(Self::view(&stored, &doctor, &patient))
    }

    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.reservations.delete(id).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::NotFound(format!("reservation {id}")),
            other => other.into(),
        })
    }

    /// Doctors practicing the specialty identified by a catalog id.
    pub async fn doctors_by_specialty(
        &self,
        catalog_id: i64,
    ) -> Result<Vec<DoctorSummary>, DomainError> {
        let record = self
            .specialties
            .find_by_id(catalog_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("specialty {catalog_id}")))?;

        let doctors = self
            .accounts
            .find_doctors_by_specialty(record.specialty)
            .await?;
        Ok(doctors
            .iter()
            .map(|d| DoctorSummary {
                id: d.id,
                name: d.name.clone(),
                surname: d.surname.clone(),
                specialty: record.specialty.display_name().to_string(),
            })
            .collect())
    }

    /// The full catalog as (id, display name) rows.
    pub async fn specialties(&self) -> Result<Vec<SpecialtyRecord>, DomainError> {
        Ok(self.specialties.find_all().await?)
    }

    async fn doctor_ref(&self, id: i64) -> Result<Account, DomainError> {
        let account = self
            .accounts
            .find_by_id(id)
            .await?
            .filter(|a| a.doctor_profile().is_some())
            .ok_or_else(|| DomainError::NotFound(format!("doctor {id}")))?;
        Ok(account)
    }

    async fn patient_ref(&self, id: i64) -> Result<Account, DomainError> {
        let account = self
            .accounts
            .find_by_id(id)
            .await?
            .filter(|a| a.patient_profile().is_some())
            .ok_or_else(|| DomainError::NotFound(format!("patient {id}")))?;
        Ok(account)
    }

    async fn resolve_view(&self, reservation: &Reservation) -> Result<ReservationView, DomainError> {
        let doctor = self.doctor_ref(reservation.doctor_id).await?;
        let patient = self.patient_ref(reservation.patient_id).await?;
        Ok(Self::view(reservation, &doctor, &patient))
    }

    fn view(reservation: &Reservation, doctor: &Account, patient: &Account) -> ReservationView {
        ReservationView {
            id: reservation.id,
            doctor_id: doctor.id.to_string(),
            doctor_name: doctor.name.clone(),
            doctor_surname: doctor.surname.clone(),
            patient_id: patient.id.to_string(),
            patient_name: patient.name.clone(),
            patient_surname: patient.surname.clone(),
            date: reservation.date.to_string(),
            time: reservation.time.format("%H:%M").to_string(),
            status: reservation.status.clone(),
            specialty: reservation.specialty.display_name().to_string(),
        }
    }
}
