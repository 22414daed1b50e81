//! Store adapters: in-memory repositories and, behind the `postgres`
//! feature, SeaORM-backed repositories.

mod memory;

#[cfg(feature = "postgres")]
mod connections;
#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
mod postgres_repo;

pub use memory::{
    InMemoryAccountRepository, InMemoryReservationRepository, InMemorySpecialtyRepository,
};

#[cfg(feature = "postgres")]
pub use connections::{DatabaseConfig, DatabaseConnections};
#[cfg(feature = "postgres")]
pub use postgres_repo::{
    PostgresAccountRepository, PostgresReservationRepository, PostgresSpecialtyRepository,
};

#[cfg(feature = "postgres")]
#[cfg(test)]
mod tests;
