//! Specialty catalog entity for SeaORM.

use sea_orm::entity::prelude::*;

use randevu_core::domain::{Specialty, SpecialtyRecord};
use randevu_core::error::RepoError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "specialties")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    pub display_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn to_domain(model: Model) -> Result<SpecialtyRecord, RepoError> {
    let specialty = Specialty::from_name(&model.name)
        .ok_or_else(|| RepoError::Query(format!("unknown specialty row: {}", model.name)))?;
    Ok(SpecialtyRecord {
        id: model.id,
        specialty,
    })
}
