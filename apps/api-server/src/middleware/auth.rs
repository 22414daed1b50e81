//! Authorization guard: token extraction, account resolution, and the
//! per-operation role check.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use futures::future::LocalBoxFuture;

use randevu_core::domain::{Account, Role};

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Authenticated identity extractor.
///
/// Extracting an `Identity` verifies the bearer token and resolves its
/// subject to a stored account; handlers then declare their required role
/// set as their first statement:
/// ```ignore
/// async fn list_doctors(identity: Identity) -> AppResult<HttpResponse> {
///     identity.require_any(&[Role::Admin])?;
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    pub account: Account,
}

impl Identity {
    pub fn role(&self) -> Role {
        self.account.role()
    }

    /// "Any of" role check: `Forbidden` when the account's role is not in
    /// the operation's required set.
    pub fn require_any(&self, allowed: &[Role]) -> Result<(), AppError> {
        if allowed.contains(&self.role()) {
            Ok(())
        } else {
            tracing::debug!(
                account_id = self.account.id,
                role = %self.role(),
                required = ?allowed,
                "role check failed"
            );
            Err(AppError::Forbidden)
        }
    }
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| {
                    tracing::error!("AppState not found in app data");
                    AppError::Internal("server configuration error".to_string())
                })?
                .clone();

            // Extract "Bearer <token>" from the Authorization header.
            let header_value = req
                .headers()
                .get(header::AUTHORIZATION)
                .ok_or_else(unauthenticated)?;
            let header_str = header_value.to_str().map_err(|_| unauthenticated())?;
            let token = header_str
                .strip_prefix("Bearer ")
                .ok_or_else(unauthenticated)?;

            // Verify the token and resolve the subject to an account. Any
            // verification failure is absorbed into the 401 path.
            let account = state.auth.resolve_token(token).await?;

            Ok(Identity { account })
        })
    }
}

fn unauthenticated() -> AppError {
    AppError::Unauthorized("Missing or invalid authentication token".to_string())
}
