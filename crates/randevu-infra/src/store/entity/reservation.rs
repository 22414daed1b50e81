//! Reservation entity for SeaORM.
//!
//! The (reservation_date, reservation_time) pair carries a unique index
//! (created by the migration), which is what makes the booking conflict
//! rule hold under concurrent inserts.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use randevu_core::domain::{Reservation, Specialty};
use randevu_core::error::RepoError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub doctor_id: i64,
    pub patient_id: i64,
    pub reservation_date: Date,
    pub reservation_time: Time,
    pub status: String,
    pub specialty: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn to_domain(model: Model) -> Result<Reservation, RepoError> {
    let specialty = Specialty::from_name(&model.specialty).ok_or_else(|| {
        RepoError::Query(format!(
            "unknown specialty column value: {}",
            model.specialty
        ))
    })?;

    Ok(Reservation {
        id: model.id,
        doctor_id: model.doctor_id,
        patient_id: model.patient_id,
        date: model.reservation_date,
        time: model.reservation_time,
        status: model.status,
        specialty,
    })
}

pub fn to_active(reservation: &Reservation) -> ActiveModel {
    ActiveModel {
        id: if reservation.id == 0 {
            NotSet
        } else {
            Set(reservation.id)
        },
        doctor_id: Set(reservation.doctor_id),
        patient_id: Set(reservation.patient_id),
        reservation_date: Set(reservation.date),
        reservation_time: Set(reservation.time),
        status: Set(reservation.status.clone()),
        specialty: Set(reservation.specialty.name().to_string()),
    }
}
