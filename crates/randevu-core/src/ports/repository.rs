use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

use crate::domain::{Account, Reservation, Specialty, SpecialtyRecord};
use crate::error::RepoError;

/// Credential store: durable record of accounts across all variants.
///
/// `insert` assigns the id and enforces the username / email / national-id
/// uniqueness invariants, returning `RepoError::Constraint` on violation.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, RepoError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, RepoError>;

    async fn find_by_national_id(&self, national_id: &str) -> Result<Option<Account>, RepoError>;

    async fn exists_by_username(&self, username: &str) -> Result<bool, RepoError>;

    async fn exists_by_national_id(&self, national_id: &str) -> Result<bool, RepoError>;

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepoError>;

    async fn insert(&self, account: Account) -> Result<Account, RepoError>;

    async fn update(&self, account: Account) -> Result<Account, RepoError>;

    async fn delete(&self, id: i64) -> Result<(), RepoError>;

    /// All accounts with the Doctor variant.
    async fn find_doctors(&self) -> Result<Vec<Account>, RepoError>;

    /// All doctors practicing the given specialty.
    async fn find_doctors_by_specialty(
        &self,
        specialty: Specialty,
    ) -> Result<Vec<Account>, RepoError>;
}

/// Reservation store.
///
/// `insert` assigns the id and enforces the global (date, time) uniqueness
/// invariant atomically with the write, returning `RepoError::Constraint`
/// when the slot is already taken. `update` performs a full overwrite and
/// deliberately re-checks nothing.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Reservation>, RepoError>;

    async fn find_all(&self) -> Result<Vec<Reservation>, RepoError>;

    /// Conflict-detection lookup: any reservation at the exact slot,
    /// regardless of doctor.
    async fn find_by_slot(
        &self,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<Option<Reservation>, RepoError>;

    async fn find_by_patient(&self, patient_id: i64) -> Result<Vec<Reservation>, RepoError>;

    async fn insert(&self, reservation: Reservation) -> Result<Reservation, RepoError>;

    async fn update(&self, reservation: Reservation) -> Result<Reservation, RepoError>;

    async fn delete(&self, id: i64) -> Result<(), RepoError>;
}

/// Specialty catalog: read-only at request time, seeded once at startup.
#[async_trait]
pub trait SpecialtyRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<SpecialtyRecord>, RepoError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<SpecialtyRecord>, RepoError>;

    /// Idempotent seeding: inserts the row if absent, otherwise returns the
    /// existing one unchanged.
    async fn upsert(&self, specialty: Specialty) -> Result<SpecialtyRecord, RepoError>;
}
