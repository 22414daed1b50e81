//! Patient profile handlers.

use actix_web::{HttpResponse, web};

use randevu_core::domain::Role;

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /patient/get/{id}
pub async fn get(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    identity.require_any(&[Role::Doctor, Role::Patient])?;

    let view = state.patients.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(view))
}
