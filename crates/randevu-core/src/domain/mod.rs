//! Domain entities and value types.

mod account;
mod reservation;
mod specialty;

pub use account::{Account, AccountKind, DoctorProfile, NewDoctorProfile, PatientProfile, Registration, Role};
pub use reservation::{BookingRequest, Reservation};
pub use specialty::{Specialty, SpecialtyRecord};
