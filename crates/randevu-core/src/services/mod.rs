//! Domain services: the booking core and the authentication flow.

mod auth;
mod doctors;
mod patients;
mod reservations;

pub use auth::{AccountDetails, AuthService, LoginSummary};
pub use doctors::{DoctorDetails, DoctorService, DoctorUpdate};
pub use patients::{PatientService, PatientView, ReservationSummary};
pub use reservations::{DoctorSummary, ReservationService, ReservationView};
