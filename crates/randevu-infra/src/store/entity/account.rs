//! Account entity for SeaORM.
//!
//! One row per account, discriminated by the `role` column; the
//! variant-specific columns are nullable and only populated for the
//! matching variant.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use randevu_core::domain::{Account, AccountKind, DoctorProfile, PatientProfile, Role, Specialty};
use randevu_core::error::RepoError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    #[sea_orm(unique)]
    pub national_id: String,
    pub role: String,
    pub name: String,
    pub surname: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub birth_date: Date,
    pub blood_type: Option<String>,
    pub medical_history: Option<String>,
    pub diploma_no: Option<String>,
    pub title: Option<String>,
    pub specialty: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Fallible conversion from a row to the domain account: the role column
/// discriminates the variant, and doctor rows must carry a valid specialty.
pub fn to_domain(model: Model) -> Result<Account, RepoError> {
    let role = Role::parse(&model.role)
        .ok_or_else(|| RepoError::Query(format!("unknown role column value: {}", model.role)))?;

    let kind = match role {
        Role::Admin => AccountKind::Admin,
        Role::Doctor => {
            let specialty_name = model
                .specialty
                .as_deref()
                .ok_or_else(|| RepoError::Query("doctor row without specialty".to_string()))?;
            let specialty = Specialty::from_name(specialty_name).ok_or_else(|| {
                RepoError::Query(format!("unknown specialty column value: {specialty_name}"))
            })?;
            AccountKind::Doctor(DoctorProfile {
                diploma_no: model.diploma_no.unwrap_or_default(),
                title: model.title.unwrap_or_default(),
                specialty,
                patient_ids: Vec::new(),
            })
        }
        Role::Patient => AccountKind::Patient(PatientProfile {
            medical_history: model.medical_history,
            doctor_ids: Vec::new(),
        }),
    };

    Ok(Account {
        id: model.id,
        username: model.username,
        password_hash: model.password_hash,
        national_id: model.national_id,
        name: model.name,
        surname: model.surname,
        email: model.email,
        phone: model.phone,
        address: model.address,
        birth_date: model.birth_date,
        blood_type: model.blood_type,
        kind,
    })
}

/// Conversion from the domain account to an active model. A zero id means
/// "unassigned" and maps to `NotSet` so the database allocates one.
pub fn to_active(account: &Account) -> ActiveModel {
    let (medical_history, diploma_no, title, specialty) = match &account.kind {
        AccountKind::Admin => (None, None, None, None),
        AccountKind::Doctor(profile) => (
            None,
            Some(profile.diploma_no.clone()),
            Some(profile.title.clone()),
            Some(profile.specialty.name().to_string()),
        ),
        AccountKind::Patient(profile) => (profile.medical_history.clone(), None, None, None),
    };

    ActiveModel {
        id: if account.id == 0 {
            NotSet
        } else {
            Set(account.id)
        },
        username: Set(account.username.clone()),
        password_hash: Set(account.password_hash.clone()),
        national_id: Set(account.national_id.clone()),
        role: Set(account.role().as_str().to_string()),
        name: Set(account.name.clone()),
        surname: Set(account.surname.clone()),
        email: Set(account.email.clone()),
        phone: Set(account.phone.clone()),
        address: Set(account.address.clone()),
        birth_date: Set(account.birth_date),
        blood_type: Set(account.blood_type.clone()),
        medical_history: Set(medical_history),
        diploma_no: Set(diploma_no),
        title: Set(title),
        specialty: Set(specialty),
    }
}
