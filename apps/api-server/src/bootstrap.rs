//! Startup seeding, run before the listener binds: the specialty catalog
//! upsert and the default admin account.

use randevu_core::DomainError;
use randevu_core::domain::Specialty;

use crate::state::AppState;

pub async fn run(state: &AppState) -> Result<(), DomainError> {
    for specialty in Specialty::ALL {
        state.specialties.upsert(specialty).await?;
    }
    tracing::info!(
        "specialty catalog seeded ({} entries)",
        Specialty::ALL.len()
    );

    state.auth.ensure_admin_account().await?;
    Ok(())
}
