//! # Randevu Infrastructure
//!
//! Concrete implementations of the ports defined in `randevu-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL stores via SeaORM; without it only
//!   the in-memory stores are available.

pub mod auth;
pub mod store;

pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
pub use store::{
    InMemoryAccountRepository, InMemoryReservationRepository, InMemorySpecialtyRepository,
};

#[cfg(feature = "postgres")]
pub use store::{
    DatabaseConfig, DatabaseConnections, PostgresAccountRepository,
    PostgresReservationRepository, PostgresSpecialtyRepository,
};
