//! End-to-end flows over the in-memory stores with the real token and
//! password adapters: login round-trips, the booking conflict rule, and the
//! role restrictions baked into the authenticator.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};

use randevu_core::domain::{BookingRequest, NewDoctorProfile, Registration, Role};
use randevu_core::error::DomainError;
use randevu_core::ports::{
    AccountRepository, ReservationRepository, SpecialtyRepository, TokenService,
};
use randevu_core::services::{AuthService, ReservationService};
use randevu_infra::{
    Argon2PasswordService, InMemoryAccountRepository, InMemoryReservationRepository,
    InMemorySpecialtyRepository, JwtConfig, JwtTokenService,
};

const CARDIOLOGY: &str = "Kardiyolog (Kalp ve Damar Hastalıkları Uzmanı)";

struct Fixture {
    accounts: Arc<dyn AccountRepository>,
    specialties: Arc<dyn SpecialtyRepository>,
    tokens: Arc<JwtTokenService>,
    auth: AuthService,
    bookings: ReservationService,
}

impl Fixture {
    fn new() -> Self {
        let accounts: Arc<dyn AccountRepository> = Arc::new(InMemoryAccountRepository::new());
        let reservations: Arc<dyn ReservationRepository> =
            Arc::new(InMemoryReservationRepository::new());
        let specialties: Arc<dyn SpecialtyRepository> =
            Arc::new(InMemorySpecialtyRepository::new());
        let tokens = Arc::new(JwtTokenService::new(JwtConfig::default()));
        let passwords = Arc::new(Argon2PasswordService::new());

        let auth = AuthService::new(accounts.clone(), tokens.clone(), passwords);
        let bookings = ReservationService::new(reservations, accounts.clone(), specialties.clone());

        Self {
            accounts,
            specialties,
            tokens,
            auth,
            bookings,
        }
    }

    async fn seed_catalog(&self) {
        for specialty in randevu_core::domain::Specialty::ALL {
            self.specialties.upsert(specialty).await.unwrap();
        }
    }

    fn registration(username: &str, national_id: &str, email: &str) -> Registration {
        Registration {
            username: username.to_string(),
            password: "parola1".to_string(),
            national_id: national_id.to_string(),
            name: "Ayşe".to_string(),
            surname: "Yılmaz".to_string(),
            email: email.to_string(),
            phone: "5551112233".to_string(),
            address: Some("İstanbul".to_string()),
            birth_date: NaiveDate::from_ymd_opt(1995, 4, 1).unwrap(),
            blood_type: Some("A Rh+".to_string()),
        }
    }

    async fn seed_patient(&self, username: &str, national_id: &str, email: &str) -> i64 {
        self.auth
            .register_patient(Self::registration(username, national_id, email))
            .await
            .unwrap()
            .id
    }

    async fn seed_doctor(&self, username: &str, national_id: &str, email: &str) -> i64 {
        self.auth
            .register_doctor(
                Self::registration(username, national_id, email),
                NewDoctorProfile {
                    diploma_no: "DP-100".to_string(),
                    title: "Prof. Dr.".to_string(),
                    specialty: CARDIOLOGY.to_string(),
                },
            )
            .await
            .unwrap()
            .id
    }

    fn booking(&self, doctor_id: i64, patient_id: i64, date: &str, time: &str) -> BookingRequest {
        BookingRequest {
            doctor_id,
            patient_id,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            time: NaiveTime::parse_from_str(time, "%H:%M").unwrap(),
            status: "pending".to_string(),
            specialty: CARDIOLOGY.to_string(),
        }
    }
}

#[tokio::test]
async fn login_token_verifies_to_the_submitted_username() {
    let fx = Fixture::new();
    fx.seed_patient("ayse", "12345678901", "ayse@example.com").await;

    let summary = fx.auth.login("ayse", "parola1").await.unwrap();

    assert_eq!(summary.role, Role::Patient);
    assert_eq!(summary.username.as_deref(), Some("ayse"));
    let claims = fx.tokens.verify(&summary.token).unwrap();
    assert_eq!(claims.subject, "ayse");
}

#[tokio::test]
async fn wrong_password_is_invalid_credentials() {
    let fx = Fixture::new();
    fx.seed_patient("ayse", "12345678901", "ayse@example.com").await;

    assert!(matches!(
        fx.auth.login("ayse", "yanlış").await,
        Err(DomainError::InvalidCredentials)
    ));
    assert!(matches!(
        fx.auth.login("nobody", "parola1").await,
        Err(DomainError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn doctor_login_issues_a_national_id_token() {
    let fx = Fixture::new();
    fx.seed_doctor("drhouse", "98765432109", "house@example.com").await;

    let summary = fx.auth.doctor_login("98765432109", "parola1").await.unwrap();

    assert_eq!(summary.role, Role::Doctor);
    assert!(summary.username.is_none());
    let claims = fx.tokens.verify(&summary.token).unwrap();
    assert_eq!(claims.subject, "98765432109");

    // The guard path still resolves the account from that subject.
    let resolved = fx.auth.resolve_token(&summary.token).await.unwrap();
    assert_eq!(resolved.username, "drhouse");
}

#[tokio::test]
async fn doctor_login_rejects_non_doctor_accounts() {
    let fx = Fixture::new();
    fx.seed_patient("ayse", "12345678901", "ayse@example.com").await;

    assert!(matches!(
        fx.auth.doctor_login("12345678901", "parola1").await,
        Err(DomainError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn duplicate_registration_is_already_exists() {
    let fx = Fixture::new();
    fx.seed_patient("ayse", "12345678901", "ayse@example.com").await;

    let same_national_id =
        Fixture::registration("fatma", "12345678901", "fatma@example.com");
    assert!(matches!(
        fx.auth.register_patient(same_national_id).await,
        Err(DomainError::AlreadyExists(_))
    ));

    let same_email = Fixture::registration("fatma", "10987654321", "ayse@example.com");
    assert!(matches!(
        fx.auth.register_patient(same_email).await,
        Err(DomainError::AlreadyExists(_))
    ));
}

#[tokio::test]
async fn admin_seeding_is_idempotent() {
    let fx = Fixture::new();

    fx.auth.ensure_admin_account().await.unwrap();
    fx.auth.ensure_admin_account().await.unwrap();

    let admin = fx
        .accounts
        .find_by_username("admin")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(admin.role(), Role::Admin);
}

#[tokio::test]
async fn booking_round_trip_carries_the_display_name() {
    let fx = Fixture::new();
    fx.seed_catalog().await;
    let doctor_id = fx.seed_doctor("drhouse", "98765432109", "house@example.com").await;
    let patient_id = fx.seed_patient("ayse", "12345678901", "ayse@example.com").await;

    let view = fx
        .bookings
        .create(fx.booking(doctor_id, patient_id, "2025-03-10", "09:00"))
        .await
        .unwrap();

    assert_eq!(view.specialty, CARDIOLOGY);
    assert_eq!(view.doctor_id, doctor_id.to_string());
    assert_eq!(view.patient_name, "Ayşe");
    assert_eq!(view.date, "2025-03-10");
    assert_eq!(view.time, "09:00");
}

#[tokio::test]
async fn unknown_specialty_fails_the_booking() {
    let fx = Fixture::new();
    fx.seed_catalog().await;
    let doctor_id = fx.seed_doctor("drhouse", "98765432109", "house@example.com").await;
    let patient_id = fx.seed_patient("ayse", "12345678901", "ayse@example.com").await;

    let mut request = fx.booking(doctor_id, patient_id, "2025-03-10", "09:00");
    request.specialty = "Diş Hekimi".to_string();

    assert!(matches!(
        fx.bookings.create(request).await,
        Err(DomainError::InvalidSpecialty(_))
    ));
}

#[tokio::test]
async fn second_booking_of_the_same_slot_conflicts() {
    let fx = Fixture::new();
    fx.seed_catalog().await;
    let doctor_id = fx.seed_doctor("drhouse", "98765432109", "house@example.com").await;
    let patient_id = fx.seed_patient("ayse", "12345678901", "ayse@example.com").await;

    fx.bookings
        .create(fx.booking(doctor_id, patient_id, "2025-03-10", "09:00"))
        .await
        .unwrap();

    assert!(matches!(
        fx.bookings
            .create(fx.booking(doctor_id, patient_id, "2025-03-10", "09:00"))
            .await,
        Err(DomainError::SlotConflict)
    ));
}

#[tokio::test]
async fn the_conflict_rule_is_global_across_doctors() {
    let fx = Fixture::new();
    fx.seed_catalog().await;
    let first_doctor = fx.seed_doctor("drhouse", "98765432109", "house@example.com").await;
    let second_doctor = fx.seed_doctor("drwilson", "98765432110", "wilson@example.com").await;
    let patient_id = fx.seed_patient("ayse", "12345678901", "ayse@example.com").await;

    fx.bookings
        .create(fx.booking(first_doctor, patient_id, "2025-03-10", "09:00"))
        .await
        .unwrap();

    // Different doctor, same slot: still a conflict.
    assert!(matches!(
        fx.bookings
            .create(fx.booking(second_doctor, patient_id, "2025-03-10", "09:00"))
            .await,
        Err(DomainError::SlotConflict)
    ));
}

#[tokio::test]
async fn update_overwrites_without_rechecking_the_slot() {
    let fx = Fixture::new();
    fx.seed_catalog().await;
    let doctor_id = fx.seed_doctor("drhouse", "98765432109", "house@example.com").await;
    let patient_id = fx.seed_patient("ayse", "12345678901", "ayse@example.com").await;

    fx.bookings
        .create(fx.booking(doctor_id, patient_id, "2025-03-10", "09:00"))
        .await
        .unwrap();
    let second = fx
        .bookings
        .create(fx.booking(doctor_id, patient_id, "2025-03-10", "10:00"))
        .await
        .unwrap();

    // Move the second reservation onto the first one's slot: accepted,
    // because only creation enforces the conflict rule.
    let mut onto_taken_slot = fx.booking(doctor_id, patient_id, "2025-03-10", "09:00");
    onto_taken_slot.status = "confirmed".to_string();
    let updated = fx.bookings.update(second.id, onto_taken_slot).await.unwrap();

    assert_eq!(updated.time, "09:00");
    assert_eq!(updated.status, "confirmed");
}

#[tokio::test]
async fn get_all_reflects_creates_deletes_and_updates() {
    let fx = Fixture::new();
    fx.seed_catalog().await;
    let doctor_id = fx.seed_doctor("drhouse", "98765432109", "house@example.com").await;
    let patient_id = fx.seed_patient("ayse", "12345678901", "ayse@example.com").await;

    let mut ids = Vec::new();
    for hour in 9..12 {
        let view = fx
            .bookings
            .create(fx.booking(doctor_id, patient_id, "2025-03-10", &format!("{hour:02}:00")))
            .await
            .unwrap();
        ids.push(view.id);
    }
    fx.bookings.delete(ids[0]).await.unwrap();

    let mut relabeled = fx.booking(doctor_id, patient_id, "2025-03-10", "10:00");
    relabeled.status = "confirmed".to_string();
    fx.bookings.update(ids[1], relabeled).await.unwrap();

    let all = fx.bookings.get_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].status, "confirmed");
    assert_eq!(all[1].status, "pending");
}

#[tokio::test]
async fn doctors_by_specialty_resolves_the_catalog_id() {
    let fx = Fixture::new();
    fx.seed_catalog().await;
    fx.seed_doctor("drhouse", "98765432109", "house@example.com").await;
    fx.seed_patient("ayse", "12345678901", "ayse@example.com").await;

    // Cardiology is the first seeded catalog row.
    let doctors = fx.bookings.doctors_by_specialty(1).await.unwrap();
    assert_eq!(doctors.len(), 1);
    assert_eq!(doctors[0].specialty, CARDIOLOGY);

    assert!(matches!(
        fx.bookings.doctors_by_specialty(999).await,
        Err(DomainError::NotFound(_))
    ));
}

#[tokio::test]
async fn missing_reservation_lookups_are_not_found() {
    let fx = Fixture::new();
    fx.seed_catalog().await;

    assert!(matches!(
        fx.bookings.get_by_id(42).await,
        Err(DomainError::NotFound(_))
    ));
    assert!(matches!(
        fx.bookings.delete(42).await,
        Err(DomainError::NotFound(_))
    ));
}

#[tokio::test]
async fn expired_token_fails_resolution_not_verification_crash() {
    let fx = Fixture::new();
    fx.seed_patient("ayse", "12345678901", "ayse@example.com").await;

    let expired_tokens = JwtTokenService::new(JwtConfig {
        expiration_millis: -1_000,
        ..JwtConfig::default()
    });
    let token = expired_tokens.issue("ayse").unwrap();

    assert!(matches!(
        fx.auth.resolve_token(&token).await,
        Err(DomainError::Unauthenticated)
    ));
}
