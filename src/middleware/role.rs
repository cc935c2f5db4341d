use super::AuthUser;
use crate::{errors::ErrorResponse, model::UserRole};
use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::IntoResponse,
};

/// Runs after `auth_middleware`; rejects callers whose account is not a
/// supplier.
pub async fn require_supplier(
    Extension(auth): Extension<AuthUser>,
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    match auth.role {
        UserRole::Supplier => Ok(next.run(req).await),
        UserRole::Retailer => Err((
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::fail("Not authorized as a supplier")),
        )),
    }
}

/// Runs after `auth_middleware`; rejects callers whose account is not a
/// retailer.
pub async fn require_retailer(
    Extension(auth): Extension<AuthUser>,
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    match auth.role {
        UserRole::Retailer => Ok(next.run(req).await),
        UserRole::Supplier => Err((
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::fail("Not authorized as a retailer")),
        )),
    }
}
