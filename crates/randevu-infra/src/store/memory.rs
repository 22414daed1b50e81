//! In-memory store implementations - used when no database is configured.
//!
//! Each store keeps its rows and id counter behind a single async `RwLock`,
//! so every uniqueness check happens in the same critical section as the
//! write it guards. Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use tokio::sync::RwLock;

use randevu_core::domain::{Account, Reservation, Specialty, SpecialtyRecord};
use randevu_core::error::RepoError;
use randevu_core::ports::{AccountRepository, ReservationRepository, SpecialtyRepository};

struct Table<T> {
    rows: HashMap<i64, T>,
    next_id: i64,
}

impl<T> Table<T> {
    fn new() -> Self {
        Self {
            rows: HashMap::new(),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// In-memory credential store.
pub struct InMemoryAccountRepository {
    table: RwLock<Table<Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }
}

impl Default for InMemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, RepoError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|a| a.username == username).cloned())
    }

    async fn find_by_national_id(&self, national_id: &str) -> Result<Option<Account>, RepoError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .find(|a| a.national_id == national_id)
            .cloned())
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.values().any(|a| a.username == username))
    }

    async fn exists_by_national_id(&self, national_id: &str) -> Result<bool, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.values().any(|a| a.national_id == national_id))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.values().any(|a| a.email == email))
    }

    async fn insert(&self, mut account: Account) -> Result<Account, RepoError> {
        let mut table = self.table.write().await;

        // Uniqueness checks and the insert share one write lock.
        if table.rows.values().any(|a| a.username == account.username) {
            return Err(RepoError::Constraint(format!(
                "username already exists: {}",
                account.username
            )));
        }
        if table
            .rows
            .values()
            .any(|a| a.national_id == account.national_id)
        {
            return Err(RepoError::Constraint(format!(
                "national id already exists: {}",
                account.national_id
            )));
        }
        if table.rows.values().any(|a| a.email == account.email) {
            return Err(RepoError::Constraint(format!(
                "email already exists: {}",
                account.email
            )));
        }

        account.id = table.allocate_id();
        table.rows.insert(account.id, account.clone());
        Ok(account)
    }

    async fn update(&self, account: Account) -> Result<Account, RepoError> {
        let mut table = self.table.write().await;
        if !table.rows.contains_key(&account.id) {
            return Err(RepoError::NotFound);
        }
        table.rows.insert(account.id, account.clone());
        Ok(account)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        table.rows.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }

    async fn find_doctors(&self) -> Result<Vec<Account>, RepoError> {
        let table = self.table.read().await;
        let mut doctors: Vec<_> = table
            .rows
            .values()
            .filter(|a| a.doctor_profile().is_some())
            .cloned()
            .collect();
        doctors.sort_by_key(|a| a.id);
        Ok(doctors)
    }

    async fn find_doctors_by_specialty(
        &self,
        specialty: Specialty,
    ) -> Result<Vec<Account>, RepoError> {
        let table = self.table.read().await;
        let mut doctors: Vec<_> = table
            .rows
            .values()
            .filter(|a| {
                a.doctor_profile()
                    .is_some_and(|p| p.specialty == specialty)
            })
            .cloned()
            .collect();
        doctors.sort_by_key(|a| a.id);
        Ok(doctors)
    }
}

/// In-memory reservation store.
///
/// The global (date, time) uniqueness invariant is enforced inside `insert`
/// while holding the write lock, so two concurrent bookings of the same
/// slot can never both commit.
pub struct InMemoryReservationRepository {
    table: RwLock<Table<Reservation>>,
}

impl InMemoryReservationRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }
}

impl Default for InMemoryReservationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Reservation>, RepoError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Reservation>, RepoError> {
        let table = self.table.read().await;
        let mut all: Vec<_> = table.rows.values().cloned().collect();
        all.sort_by_key(|r| r.id);
        Ok(all)
    }

    async fn find_by_slot(
        &self,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<Option<Reservation>, RepoError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .find(|r| r.date == date && r.time == time)
            .cloned())
    }

    async fn find_by_patient(&self, patient_id: i64) -> Result<Vec<Reservation>, RepoError> {
        let table = self.table.read().await;
        let mut owned: Vec<_> = table
            .rows
            .values()
            .filter(|r| r.patient_id == patient_id)
            .cloned()
            .collect();
        owned.sort_by_key(|r| r.id);
        Ok(owned)
    }

    async fn insert(&self, mut reservation: Reservation) -> Result<Reservation, RepoError> {
        let mut table = self.table.write().await;

        if table
            .rows
            .values()
            .any(|r| r.date == reservation.date && r.time == reservation.time)
        {
            return Err(RepoError::Constraint(format!(
                "slot already taken: {} {}",
                reservation.date, reservation.time
            )));
        }

        reservation.id = table.allocate_id();
        table.rows.insert(reservation.id, reservation.clone());
        Ok(reservation)
    }

    async fn update(&self, reservation: Reservation) -> Result<Reservation, RepoError> {
        let mut table = self.table.write().await;
        if !table.rows.contains_key(&reservation.id) {
            return Err(RepoError::NotFound);
        }
        table.rows.insert(reservation.id, reservation.clone());
        Ok(reservation)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        table.rows.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

/// In-memory specialty catalog.
pub struct InMemorySpecialtyRepository {
    table: RwLock<Table<SpecialtyRecord>>,
}

impl InMemorySpecialtyRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }
}

impl Default for InMemorySpecialtyRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpecialtyRepository for InMemorySpecialtyRepository {
    async fn find_all(&self) -> Result<Vec<SpecialtyRecord>, RepoError> {
        let table = self.table.read().await;
        let mut all: Vec<_> = table.rows.values().copied().collect();
        all.sort_by_key(|r| r.id);
        Ok(all)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<SpecialtyRecord>, RepoError> {
        Ok(self.table.read().await.rows.get(&id).copied())
    }

    async fn upsert(&self, specialty: Specialty) -> Result<SpecialtyRecord, RepoError> {
        let mut table = self.table.write().await;
        if let Some(existing) = table.rows.values().find(|r| r.specialty == specialty) {
            return Ok(*existing);
        }
        let record = SpecialtyRecord {
            id: table.allocate_id(),
            specialty,
        };
        table.rows.insert(record.id, record);
        Ok(record)
    }
}
