//! Authentication handlers: logins, registrations, and the profile/catalog
//! lookups living under `/auth`.

use actix_web::{HttpResponse, web};

use randevu_core::domain::{NewDoctorProfile, Registration, Role};
use randevu_core::services::LoginSummary;
use randevu_shared::dto::{
    DoctorLoginRequest, LoginRequest, LoginResponse, MessageResponse, RegisterDoctorRequest,
    RegisterRequest, SpecialtyResponse, UserDetailsResponse,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let summary = state.auth.login(&req.username, &req.password).await?;
    Ok(HttpResponse::Ok().json(login_response(summary)))
}

/// POST /auth/doctor/login
pub async fn doctor_login(
    state: web::Data<AppState>,
    body: web::Json<DoctorLoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let summary = state
        .auth
        .doctor_login(&req.national_id, &req.password)
        .await?;
    Ok(HttpResponse::Ok().json(login_response(summary)))
}

/// POST /auth/register - self-service patient registration.
pub async fn register_patient(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    state
        .auth
        .register_patient(registration(body.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Registration successful".to_string(),
    }))
}

/// POST /auth/doctor/register - admin only.
pub async fn register_doctor(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<RegisterDoctorRequest>,
) -> AppResult<HttpResponse> {
    identity.require_any(&[Role::Admin])?;

    let req = body.into_inner();
    let profile = NewDoctorProfile {
        diploma_no: req.diploma_no,
        title: req.title,
        specialty: req.specialty,
    };
    state
        .auth
        .register_doctor(registration(req.account), profile)
        .await?;
    Ok(HttpResponse::Created().json(MessageResponse {
        message: "Doctor created".to_string(),
    }))
}

/// POST /auth/admin/register - admin only.
pub async fn register_admin(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    identity.require_any(&[Role::Admin])?;

    state
        .auth
        .register_admin(registration(body.into_inner()))
        .await?;
    Ok(HttpResponse::Created().json(MessageResponse {
        message: "Admin created".to_string(),
    }))
}

/// GET /auth/me - profile of the authenticated account.
pub async fn me(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let details = state.auth.current_user(&identity.account);
    Ok(HttpResponse::Ok().json(UserDetailsResponse {
        id: details.id,
        username: details.username,
        role: details.role.as_str().to_string(),
        name: details.name,
        surname: details.surname,
        email: details.email,
        phone: details.phone,
    }))
}

/// GET /auth/allspecialties - any authenticated role.
pub async fn all_specialties(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    identity.require_any(&[Role::Admin, Role::Doctor, Role::Patient])?;

    let catalog = state.bookings.specialties().await?;
    let response: Vec<SpecialtyResponse> = catalog
        .iter()
        .map(|record| SpecialtyResponse {
            id: record.id,
            name: record.display_name().to_string(),
        })
        .collect();
    Ok(HttpResponse::Ok().json(response))
}

fn login_response(summary: LoginSummary) -> LoginResponse {
    LoginResponse {
        username: summary.username,
        id: summary.id,
        role: summary.role.as_str().to_string(),
        token: summary.token,
        message: summary.message,
    }
}

fn registration(req: RegisterRequest) -> Registration {
    Registration {
        username: req.username,
        password: req.password,
        national_id: req.national_id,
        name: req.name,
        surname: req.surname,
        email: req.email,
        phone: req.phone,
        address: req.address,
        birth_date: req.birth_date,
        blood_type: req.blood_type,
    }
}
