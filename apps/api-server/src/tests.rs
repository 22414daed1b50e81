//! Handler-level tests over the full route table with in-memory stores:
//! the end-to-end booking scenario and the role matrix.

use actix_web::test::TestRequest;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use randevu_infra::JwtConfig;

use crate::bootstrap;
use crate::handlers;
use crate::state::AppState;

const CARDIOLOGY: &str = "Kardiyolog (Kalp ve Damar Hastalıkları Uzmanı)";

async fn seeded_state() -> AppState {
    let state = AppState::with_memory_stores(JwtConfig::default());
    bootstrap::run(&state).await.unwrap();
    state
}

macro_rules! spawn_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .configure(handlers::configure_routes),
        )
        .await
    };
}

/// Login and evaluate to `(token, account id)`.
macro_rules! login {
    ($app:expr, $username:expr, $password:expr) => {{
        let req = post_req(
            "/auth/login",
            None,
            json!({"username": $username, "password": $password}),
        );
        let res = test::call_service($app, req.to_request()).await;
        assert!(res.status().is_success(), "login failed for {}", $username);
        let body: Value = test::read_body_json(res).await;
        (
            body["token"].as_str().unwrap().to_string(),
            body["id"].as_i64().unwrap(),
        )
    }};
}

fn post_req(path: &str, token: Option<&str>, body: Value) -> TestRequest {
    let mut req = TestRequest::post().uri(path).set_json(body);
    if let Some(token) = token {
        req = req.insert_header(("Authorization", format!("Bearer {token}")));
    }
    req
}

fn get_req(path: &str, token: Option<&str>) -> TestRequest {
    let mut req = TestRequest::get().uri(path);
    if let Some(token) = token {
        req = req.insert_header(("Authorization", format!("Bearer {token}")));
    }
    req
}

fn patient_registration() -> Value {
    json!({
        "username": "ayse",
        "password": "parola1",
        "name": "Ayşe",
        "surname": "Yılmaz",
        "email": "ayse@example.com",
        "phone": "5551112233",
        "address": "İstanbul",
        "birthDate": "1995-04-01",
        "bloodType": "A Rh+",
        "nationalId": "12345678901"
    })
}

fn doctor_registration() -> Value {
    json!({
        "username": "drhouse",
        "password": "parola1",
        "name": "Gregory",
        "surname": "House",
        "email": "house@example.com",
        "phone": "5550001122",
        "address": "Ankara",
        "birthDate": "1970-06-11",
        "bloodType": "0 Rh+",
        "nationalId": "98765432109",
        "diplomaNo": "DP-100",
        "title": "Dr.",
        "specialty": CARDIOLOGY
    })
}

fn booking(doctor_id: i64, patient_id: i64, time: &str) -> Value {
    json!({
        "doctorId": doctor_id,
        "patientId": patient_id,
        "date": "2025-03-10",
        "time": time,
        "status": "pending",
        "specialty": CARDIOLOGY
    })
}

#[actix_web::test]
async fn end_to_end_booking_scenario() {
    let state = seeded_state().await;
    let app = spawn_app!(state);

    // Self-service patient registration, then login.
    let res = test::call_service(
        &app,
        post_req("/auth/register", None, patient_registration()).to_request(),
    )
    .await;
    assert_eq!(res.status(), 200);

    let (patient_token, patient_id) = login!(&app, "ayse", "parola1");

    // The seeded admin registers a doctor.
    let (admin_token, _) = login!(&app, "admin", "admin123");
    let res = test::call_service(
        &app,
        post_req(
            "/auth/doctor/register",
            Some(&admin_token),
            doctor_registration(),
        )
        .to_request(),
    )
    .await;
    assert_eq!(res.status(), 201);

    let res =
        test::call_service(&app, get_req("/doctor/all", Some(&admin_token)).to_request()).await;
    assert_eq!(res.status(), 200);
    let doctors: Value = test::read_body_json(res).await;
    let doctor_id = doctors[0]["id"].as_i64().unwrap();

    // Book the slot; the response carries the specialty display name.
    let res = test::call_service(
        &app,
        post_req(
            "/reservations/create",
            Some(&patient_token),
            booking(doctor_id, patient_id, "09:00"),
        )
        .to_request(),
    )
    .await;
    assert_eq!(res.status(), 200);
    let view: Value = test::read_body_json(res).await;
    assert_eq!(view["specialty"], CARDIOLOGY);
    assert_eq!(view["patientName"], "Ayşe");
    assert_eq!(view["date"], "2025-03-10");
    assert_eq!(view["time"], "09:00");

    // Booking the same (date, time) again conflicts.
    let res = test::call_service(
        &app,
        post_req(
            "/reservations/create",
            Some(&patient_token),
            booking(doctor_id, patient_id, "09:00"),
        )
        .to_request(),
    )
    .await;
    assert_eq!(res.status(), 409);
}

#[actix_web::test]
async fn role_matrix_is_enforced() {
    let state = seeded_state().await;
    let app = spawn_app!(state);

    test::call_service(
        &app,
        post_req("/auth/register", None, patient_registration()).to_request(),
    )
    .await;
    let (patient_token, patient_id) = login!(&app, "ayse", "parola1");

    let (admin_token, _) = login!(&app, "admin", "admin123");
    test::call_service(
        &app,
        post_req(
            "/auth/doctor/register",
            Some(&admin_token),
            doctor_registration(),
        )
        .to_request(),
    )
    .await;

    // A PATIENT token on the admin-only doctor listing: Forbidden.
    let res = test::call_service(
        &app,
        get_req("/doctor/all", Some(&patient_token)).to_request(),
    )
    .await;
    assert_eq!(res.status(), 403);

    // Doctor login issues a national-id keyed token.
    let res = test::call_service(
        &app,
        post_req(
            "/auth/doctor/login",
            None,
            json!({"nationalId": "98765432109", "password": "parola1"}),
        )
        .to_request(),
    )
    .await;
    assert_eq!(res.status(), 200);
    let body: Value = test::read_body_json(res).await;
    let doctor_token = body["token"].as_str().unwrap().to_string();
    assert_eq!(body["role"], "DOCTOR");

    let res =
        test::call_service(&app, get_req("/doctor/all", Some(&admin_token)).to_request()).await;
    let doctors: Value = test::read_body_json(res).await;
    let doctor_id = doctors[0]["id"].as_i64().unwrap();

    // A DOCTOR token cannot create reservations.
    let res = test::call_service(
        &app,
        post_req(
            "/reservations/create",
            Some(&doctor_token),
            booking(doctor_id, patient_id, "09:00"),
        )
        .to_request(),
    )
    .await;
    assert_eq!(res.status(), 403);

    // The same booking succeeds with the PATIENT token.
    let res = test::call_service(
        &app,
        post_req(
            "/reservations/create",
            Some(&patient_token),
            booking(doctor_id, patient_id, "09:00"),
        )
        .to_request(),
    )
    .await;
    assert_eq!(res.status(), 200);

    // The doctor token can read what the patient booked.
    let res = test::call_service(
        &app,
        get_req("/reservations/getall", Some(&doctor_token)).to_request(),
    )
    .await;
    assert_eq!(res.status(), 200);
    let all: Value = test::read_body_json(res).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn missing_or_garbage_tokens_are_unauthorized() {
    let state = seeded_state().await;
    let app = spawn_app!(state);

    let res = test::call_service(&app, get_req("/reservations/getall", None).to_request()).await;
    assert_eq!(res.status(), 401);

    let res = test::call_service(
        &app,
        get_req("/reservations/getall", Some("garbage")).to_request(),
    )
    .await;
    assert_eq!(res.status(), 401);
}

#[actix_web::test]
async fn admin_registrations_require_the_admin_role() {
    let state = seeded_state().await;
    let app = spawn_app!(state);

    test::call_service(
        &app,
        post_req("/auth/register", None, patient_registration()).to_request(),
    )
    .await;
    let (patient_token, _) = login!(&app, "ayse", "parola1");

    let res = test::call_service(
        &app,
        post_req(
            "/auth/doctor/register",
            Some(&patient_token),
            doctor_registration(),
        )
        .to_request(),
    )
    .await;
    assert_eq!(res.status(), 403);
}

#[actix_web::test]
async fn specialty_catalog_is_served_to_any_authenticated_role() {
    let state = seeded_state().await;
    let app = spawn_app!(state);

    test::call_service(
        &app,
        post_req("/auth/register", None, patient_registration()).to_request(),
    )
    .await;
    let (patient_token, _) = login!(&app, "ayse", "parola1");

    let res = test::call_service(
        &app,
        get_req("/auth/allspecialties", Some(&patient_token)).to_request(),
    )
    .await;
    assert_eq!(res.status(), 200);
    let catalog: Value = test::read_body_json(res).await;
    assert_eq!(catalog.as_array().unwrap().len(), 30);
    assert_eq!(catalog[0]["name"], CARDIOLOGY);

    let res = test::call_service(&app, get_req("/auth/allspecialties", None).to_request()).await;
    assert_eq!(res.status(), 401);
}

#[actix_web::test]
async fn invalid_specialty_and_dates_are_bad_requests() {
    let state = seeded_state().await;
    let app = spawn_app!(state);

    test::call_service(
        &app,
        post_req("/auth/register", None, patient_registration()).to_request(),
    )
    .await;
    let (patient_token, patient_id) = login!(&app, "ayse", "parola1");

    let mut body = booking(1, patient_id, "09:00");
    body["specialty"] = json!("Diş Hekimi");
    let res = test::call_service(
        &app,
        post_req("/reservations/create", Some(&patient_token), body).to_request(),
    )
    .await;
    assert_eq!(res.status(), 400);

    let mut body = booking(1, patient_id, "09:00");
    body["date"] = json!("10.03.2025");
    let res = test::call_service(
        &app,
        post_req("/reservations/create", Some(&patient_token), body).to_request(),
    )
    .await;
    assert_eq!(res.status(), 400);
}

#[actix_web::test]
async fn duplicate_patient_registration_conflicts() {
    let state = seeded_state().await;
    let app = spawn_app!(state);

    let res = test::call_service(
        &app,
        post_req("/auth/register", None, patient_registration()).to_request(),
    )
    .await;
    assert_eq!(res.status(), 200);

    let res = test::call_service(
        &app,
        post_req("/auth/register", None, patient_registration()).to_request(),
    )
    .await;
    assert_eq!(res.status(), 409);
}

#[actix_web::test]
async fn me_returns_the_token_owner() {
    let state = seeded_state().await;
    let app = spawn_app!(state);

    test::call_service(
        &app,
        post_req("/auth/register", None, patient_registration()).to_request(),
    )
    .await;
    let (patient_token, patient_id) = login!(&app, "ayse", "parola1");

    let res = test::call_service(&app, get_req("/auth/me", Some(&patient_token)).to_request()).await;
    assert_eq!(res.status(), 200);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["username"], "ayse");
    assert_eq!(body["role"], "PATIENT");
    assert_eq!(body["id"].as_i64().unwrap(), patient_id);
}
