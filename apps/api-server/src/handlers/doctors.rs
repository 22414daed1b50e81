//! Doctor administration handlers.

use actix_web::{HttpResponse, web};

use randevu_core::domain::Role;
use randevu_core::services::DoctorUpdate;
use randevu_shared::dto::{MessageResponse, UpdateDoctorRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /doctor/all - admin only.
pub async fn all(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    identity.require_any(&[Role::Admin])?;

    let doctors = state.doctors.all().await?;
    Ok(HttpResponse::Ok().json(doctors))
}

/// GET /doctor/get/{id}
pub async fn get(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    identity.require_any(&[Role::Admin, Role::Doctor])?;

    let details = state.doctors.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(details))
}

/// PUT /doctor/update/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<i64>,
    body: web::Json<UpdateDoctorRequest>,
) -> AppResult<HttpResponse> {
    identity.require_any(&[Role::Admin, Role::Doctor])?;

    let req = body.into_inner();
    let update = DoctorUpdate {
        username: req.username,
        name: req.name,
        surname: req.surname,
        email: req.email,
        phone: req.phone,
        address: req.address,
        birth_date: req.birth_date,
        national_id: req.national_id,
        blood_type: req.blood_type,
        diploma_no: req.diploma_no,
        title: req.title,
        specialty: req.specialty,
    };
    let details = state.doctors.update(path.into_inner(), update).await?;
    Ok(HttpResponse::Ok().json(details))
}

/// DELETE /doctor/delete/{id} - admin only.
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    identity.require_any(&[Role::Admin])?;

    state.doctors.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Doctor deleted".to_string(),
    }))
}
