use crate::{
    abstract_trait::DynUserService,
    domain::responses::{ApiResponse, UserResponse},
    errors::HttpError,
    middleware::auth_middleware,
    state::AppState,
};
use axum::{Extension, Json, http::StatusCode, middleware, response::IntoResponse, routing::get};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/users/suppliers",
    responses(
        (status = 200, description = "Supplier directory", body = ApiResponse<Vec<UserResponse>>),
        (status = 401, description = "Missing or invalid token")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "User"
)]
pub async fn get_suppliers_handler(
    Extension(service): Extension<DynUserService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_suppliers().await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn user_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/users/suppliers", get(get_suppliers_handler))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.user_service.clone()))
        .layer(Extension(app_state.di_container.user_query.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
