//! Reservation handlers: the booking core plus the specialty lookups used
//! by the booking flow.

use actix_web::{HttpResponse, web};
use chrono::{NaiveDate, NaiveTime};

use randevu_core::domain::{BookingRequest, Role};
use randevu_shared::dto::{MessageResponse, ReservationRequest, SpecialtyResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /reservations/create - patients only.
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<ReservationRequest>,
) -> AppResult<HttpResponse> {
    identity.require_any(&[Role::Patient])?;

    let request = parse_booking(body.into_inner())?;
    let view = state.bookings.create(request).await?;
    Ok(HttpResponse::Ok().json(view))
}

/// GET /reservations/get/{id}
pub async fn get_by_id(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    identity.require_any(&[Role::Doctor, Role::Patient])?;

    let view = state.bookings.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(view))
}

/// GET /reservations/getall
pub async fn get_all(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    identity.require_any(&[Role::Doctor, Role::Patient])?;

    let views = state.bookings.get_all().await?;
    Ok(HttpResponse::Ok().json(views))
}

/// PUT /reservations/update/{id} - any authenticated account.
pub async fn update(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<i64>,
    body: web::Json<ReservationRequest>,
) -> AppResult<HttpResponse> {
    let request = parse_booking(body.into_inner())?;
    let view = state.bookings.update(path.into_inner(), request).await?;
    Ok(HttpResponse::Accepted().json(view))
}

/// DELETE /reservations/delete/{id}
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    identity.require_any(&[Role::Doctor, Role::Patient])?;

    state.bookings.delete(path.into_inner()).await?;
    Ok(HttpResponse::Accepted().json(MessageResponse {
        message: "Reservation deleted".to_string(),
    }))
}

/// GET /reservations/getall/doctors/{id} - doctors for a catalog specialty.
pub async fn doctors_by_specialty(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    identity.require_any(&[Role::Doctor, Role::Patient])?;

    let doctors = state.bookings.doctors_by_specialty(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(doctors))
}

/// GET /reservations/getall/speciality - the full catalog.
pub async fn specialties(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    identity.require_any(&[Role::Doctor, Role::Patient])?;

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

/// Parse the wire-level date/time strings: ISO `YYYY-MM-DD` dates and
/// `HH:MM[:SS]` times.
fn parse_booking(req: ReservationRequest) -> Result<BookingRequest, AppError> {
    let date = NaiveDate::parse_from_str(req.date.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("invalid date: {}", req.date)))?;
    let time = parse_time(req.time.trim())
        .ok_or_else(|| AppError::BadRequest(format!("invalid time: {}", req.time)))?;

    Ok(BookingRequest {
        doctor_id: req.doctor_id,
        patient_id: req.patient_id,
        date,
        time,
        status: req.status,
        specialty: req.specialty,
    })
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}
