//! Initial schema: accounts, the specialty catalog, and reservations.
//!
//! The unique index on (reservation_date, reservation_time) is the
//! store-level enforcement of the no-double-booking invariant: a booking
//! that loses the check-then-insert race fails on the constraint instead of
//! committing a duplicate slot.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Accounts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Accounts::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Accounts::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(Accounts::NationalId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Accounts::Role).string().not_null())
                    .col(ColumnDef::new(Accounts::Name).string().not_null())
                    .col(ColumnDef::new(Accounts::Surname).string().not_null())
                    .col(
                        ColumnDef::new(Accounts::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Accounts::Phone).string().not_null())
                    .col(ColumnDef::new(Accounts::Address).string())
                    .col(ColumnDef::new(Accounts::BirthDate).date().not_null())
                    .col(ColumnDef::new(Accounts::BloodType).string())
                    .col(ColumnDef::new(Accounts::MedicalHistory).text())
                    .col(ColumnDef::new(Accounts::DiplomaNo).string())
                    .col(ColumnDef::new(Accounts::Title).string())
                    .col(ColumnDef::new(Accounts::Specialty).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Specialties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Specialties::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Specialties::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Specialties::DisplayName).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reservations::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reservations::DoctorId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Reservations::PatientId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::ReservationDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::ReservationTime)
                            .time()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reservations::Status).string().not_null())
                    .col(ColumnDef::new(Reservations::Specialty).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-reservations-doctor")
                            .from(Reservations::Table, Reservations::DoctorId)
                            .to(Accounts::Table, Accounts::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-reservations-patient")
                            .from(Reservations::Table, Reservations::PatientId)
                            .to(Accounts::Table, Accounts::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-reservations-slot")
                    .table(Reservations::Table)
                    .col(Reservations::ReservationDate)
                    .col(Reservations::ReservationTime)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Specialties::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
    Username,
    PasswordHash,
    NationalId,
    Role,
    Name,
    Surname,
    Email,
    Phone,
    Address,
    BirthDate,
    BloodType,
    MedicalHistory,
    DiplomaNo,
    Title,
    Specialty,
}

#[derive(DeriveIden)]
enum Specialties {
    Table,
    Id,
    Name,
    DisplayName,
}

#[derive(DeriveIden)]
enum Reservations {
    Table,
    Id,
    DoctorId,
    PatientId,
    ReservationDate,
    ReservationTime,
    Status,
    Specialty,
}
