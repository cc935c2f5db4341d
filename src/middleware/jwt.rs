use crate::{
    abstract_trait::{DynJwtService, DynUserQueryRepository},
    errors::ErrorResponse,
    model::UserRole,
};
use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::IntoResponse,
};

/// Authenticated caller identity, inserted into request extensions once the
/// bearer token has been verified and the user loaded.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: i32,
    pub role: UserRole,
}

fn unauthorized(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse::fail(message)),
    )
}

pub async fn auth_middleware(
    Extension(jwt): Extension<DynJwtService>,
    Extension(users): Extension<DynUserQueryRepository>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_header| auth_header.to_str().ok())
        .and_then(|auth_value| auth_value.strip_prefix("Bearer ").map(str::to_owned));

    let token = match token {
        Some(token) => token,
        None => return Err(unauthorized("You are not logged in, please provide token")),
    };

    let user_id = match jwt.verify_token(&token, "access") {
        Ok(id) => id as i32,
        Err(_) => return Err(unauthorized("Invalid token")),
    };

    // The token only carries the user id. The role comes from the database so
    // a stale token can never grant a role the account no longer has.
    let user = match users.find_by_id(user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => return Err(unauthorized("Invalid token")),
        Err(_) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::fail("Server error")),
            ));
        }
    };

    req.extensions_mut().insert(AuthUser {
        user_id: user.user_id,
        role: user.role,
    });

    Ok(next.run(req).await)
}
