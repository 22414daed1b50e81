//! Application state - shared across all handlers.

use std::sync::Arc;

use randevu_core::ports::{
    AccountRepository, PasswordService, ReservationRepository, SpecialtyRepository, TokenService,
};
use randevu_core::services::{AuthService, DoctorService, PatientService, ReservationService};
use randevu_infra::{
    Argon2PasswordService, InMemoryAccountRepository, InMemoryReservationRepository,
    InMemorySpecialtyRepository, JwtConfig, JwtTokenService,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub bookings: Arc<ReservationService>,
    pub doctors: Arc<DoctorService>,
    pub patients: Arc<PatientService>,
    pub specialties: Arc<dyn SpecialtyRepository>,
}

impl AppState {
    /// Build the application state with appropriate store implementations.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        if let Some(db_config) = &config.database {
            match randevu_infra::DatabaseConnections::init(db_config).await {
                Ok(connections) => {
                    let accounts: Arc<dyn AccountRepository> = Arc::new(
                        randevu_infra::PostgresAccountRepository::new(connections.main.clone()),
                    );
                    let reservations: Arc<dyn ReservationRepository> = Arc::new(
                        randevu_infra::PostgresReservationRepository::new(connections.main.clone()),
                    );
                    let specialties: Arc<dyn SpecialtyRepository> = Arc::new(
                        randevu_infra::PostgresSpecialtyRepository::new(connections.main),
                    );
                    return Self::assemble(accounts, reservations, specialties, config.jwt.clone());
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory stores.",
                        e
                    );
                }
            }
        } else {
            tracing::warn!("DATABASE_URL not set. Running with in-memory stores.");
        }

        Self::with_memory_stores(config.jwt.clone())
    }

    /// State over the in-memory stores: the fallback when no database is
    /// configured, and the fixture for handler tests.
    pub fn with_memory_stores(jwt: JwtConfig) -> Self {
        let accounts: Arc<dyn AccountRepository> = Arc::new(InMemoryAccountRepository::new());
        let reservations: Arc<dyn ReservationRepository> =
            Arc::new(InMemoryReservationRepository::new());
        let specialties: Arc<dyn SpecialtyRepository> = Arc::new(InMemorySpecialtyRepository::new());
        Self::assemble(accounts, reservations, specialties, jwt)
    }

    fn assemble(
        accounts: Arc<dyn AccountRepository>,
        reservations: Arc<dyn ReservationRepository>,
        specialties: Arc<dyn SpecialtyRepository>,
        jwt: JwtConfig,
    ) -> Self {
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(jwt));
        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());

        let auth = Arc::new(AuthService::new(
            accounts.clone(),
            tokens.clone(),
            passwords,
        ));
        let bookings = Arc::new(ReservationService::new(
            reservations.clone(),
            accounts.clone(),
            specialties.clone(),
        ));
        let doctors = Arc::new(DoctorService::new(accounts.clone()));
        let patients = Arc::new(PatientService::new(accounts, reservations));

        tracing::info!("Application state initialized");

        Self {
            auth,
            bookings,
            doctors,
            patients,
            specialties,
        }
    }
}
