//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use randevu_core::domain::{Account, Reservation, Role, Specialty, SpecialtyRecord};
use randevu_core::error::RepoError;
use randevu_core::ports::{AccountRepository, ReservationRepository, SpecialtyRepository};

use super::entity::{account, reservation, specialty};

fn query_err(e: DbErr) -> RepoError {
    let text = e.to_string();
    if text.contains("duplicate") || text.contains("unique") {
        RepoError::Constraint(text)
    } else {
        RepoError::Query(text)
    }
}

/// PostgreSQL credential store.
pub struct PostgresAccountRepository {
    db: DbConn,
}

impl PostgresAccountRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    async fn find_one(
        &self,
        filter: sea_orm::sea_query::SimpleExpr,
    ) -> Result<Option<Account>, RepoError> {
        let row = account::Entity::find()
            .filter(filter)
            .one(&self.db)
            .await
            .map_err(query_err)?;
        row.map(account::to_domain).transpose()
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, RepoError> {
        let row = account::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;
        row.map(account::to_domain).transpose()
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, RepoError> {
        self.find_one(account::Column::Username.eq(username)).await
    }

    async fn find_by_national_id(&self, national_id: &str) -> Result<Option<Account>, RepoError> {
        self.find_one(account::Column::NationalId.eq(national_id))
            .await
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, RepoError> {
        let count = account::Entity::find()
            .filter(account::Column::Username.eq(username))
            .count(&self.db)
            .await
            .map_err(query_err)?;
        Ok(count > 0)
    }

    async fn exists_by_national_id(&self, national_id: &str) -> Result<bool, RepoError> {
        let count = account::Entity::find()
            .filter(account::Column::NationalId.eq(national_id))
            .count(&self.db)
            .await
            .map_err(query_err)?;
        Ok(count > 0)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepoError> {
        let count = account::Entity::find()
            .filter(account::Column::Email.eq(email))
            .count(&self.db)
            .await
            .map_err(query_err)?;
        Ok(count > 0)
    }

    async fn insert(&self, account: Account) -> Result<Account, RepoError> {
        let row = account::to_active(&account)
            .insert(&self.db)
            .await
            .map_err(query_err)?;
        account::to_domain(row)
    }

    async fn update(&self, account: Account) -> Result<Account, RepoError> {
        let row = account::to_active(&account)
            .update(&self.db)
            .await
            .map_err(query_err)?;
        account::to_domain(row)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let result = account::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;
        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn find_doctors(&self) -> Result<Vec<Account>, RepoError> {
        let rows = account::Entity::find()
            .filter(account::Column::Role.eq(Role::Doctor.as_str()))
            .order_by_asc(account::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;
        rows.into_iter().map(account::to_domain).collect()
    }

    async fn find_doctors_by_specialty(
        &self,
        specialty: Specialty,
    ) -> Result<Vec<Account>, RepoError> {
        let rows = account::Entity::find()
            .filter(account::Column::Role.eq(Role::Doctor.as_str()))
            .filter(account::Column::Specialty.eq(specialty.name()))
            .order_by_asc(account::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;
        rows.into_iter().map(account::to_domain).collect()
    }
}

/// PostgreSQL reservation store. The unique index on
/// (reservation_date, reservation_time) turns a lost conflict race into a
/// `Constraint` error instead of a double booking.
pub struct PostgresReservationRepository {
    db: DbConn,
}

impl PostgresReservationRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReservationRepository for PostgresReservationRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Reservation>, RepoError> {
        let row = reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;
        row.map(reservation::to_domain).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Reservation>, RepoError> {
        let rows = reservation::Entity::find()
            .order_by_asc(reservation::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;
        rows.into_iter().map(reservation::to_domain).collect()
    }

    async fn find_by_slot(
        &self,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<Option<Reservation>, RepoError> {
        let row = reservation::Entity::find()
            .filter(reservation::Column::ReservationDate.eq(date))
            .filter(reservation::Column::ReservationTime.eq(time))
            .one(&self.db)
            .await
            .map_err(query_err)?;
        row.map(reservation::to_domain).transpose()
    }

    async fn find_by_patient(&self, patient_id: i64) -> Result<Vec<Reservation>, RepoError> {
        let rows = reservation::Entity::find()
            .filter(reservation::Column::PatientId.eq(patient_id))
            .order_by_asc(reservation::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;
        rows.into_iter().map(reservation::to_domain).collect()
    }

    async fn insert(&self, reservation_row: Reservation) -> Result<Reservation, RepoError> {
        let row = reservation::to_active(&reservation_row)
            .insert(&self.db)
            .await
            .map_err(query_err)?;
        reservation::to_domain(row)
    }

    async fn update(&self, reservation_row: Reservation) -> Result<Reservation, RepoError> {
        let row = reservation::to_active(&reservation_row)
            .update(&self.db)
            .await
            .map_err(query_err)?;
        reservation::to_domain(row)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let result = reservation::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;
        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

/// PostgreSQL specialty catalog.
pub struct PostgresSpecialtyRepository {
    db: DbConn,
}

impl PostgresSpecialtyRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SpecialtyRepository for PostgresSpecialtyRepository {
    async fn find_all(&self) -> Result<Vec<SpecialtyRecord>, RepoError> {
        let rows = specialty::Entity::find()
            .order_by_asc(specialty::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;
        rows.into_iter().map(specialty::to_domain).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<SpecialtyRecord>, RepoError> {
        let row = specialty::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;
        row.map(specialty::to_domain).transpose()
    }

    async fn upsert(&self, wanted: Specialty) -> Result<SpecialtyRecord, RepoError> {
        let existing = specialty::Entity::find()
            .filter(specialty::Column::Name.eq(wanted.name()))
            .one(&self.db)
            .await
            .map_err(query_err)?;
        if let Some(row) = existing {
            return specialty::to_domain(row);
        }

        let row = specialty::ActiveModel {
            id: sea_orm::NotSet,
            name: sea_orm::Set(wanted.name().to_string()),
            display_name: sea_orm::Set(wanted.display_name().to_string()),
        }
        .insert(&self.db)
        .await
        .map_err(query_err)?;
        specialty::to_domain(row)
    }
}
