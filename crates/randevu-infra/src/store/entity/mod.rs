//! SeaORM entities for the postgres stores.

pub mod account;
pub mod reservation;
pub mod specialty;
