use crate::{
    abstract_trait::DynOrderService,
    domain::{
        requests::{CreateOrderRequest, UpdateOrderStatusRequest},
        responses::{ApiResponse, OrderResponse},
    },
    errors::HttpError,
    middleware::{AuthUser, ValidatedJson, auth_middleware, require_retailer, require_supplier},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, patch, post},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Invalid items in order"),
        (status = 403, description = "Not a retailer account")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Order"
)]
pub async fn create_order_handler(
    Extension(service): Extension<DynOrderService>,
    Extension(auth): Extension<AuthUser>,
    ValidatedJson(body): ValidatedJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_order(auth.user_id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/api/orders/{id}/status",
    params(
        ("id" = i32, Path, description = "Order to update")
    ),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Order status updated", body = ApiResponse<OrderResponse>),
        (status = 403, description = "Not a supplier account"),
        (status = 404, description = "No such order owned by this supplier")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Order"
)]
pub async fn update_order_status_handler(
    Extension(service): Extension<DynOrderService>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i32>,
    ValidatedJson(body): ValidatedJson<UpdateOrderStatusRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_status(auth.user_id, id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders/supplier",
    responses(
        (status = 200, description = "Orders received by the caller", body = ApiResponse<Vec<OrderResponse>>),
        (status = 403, description = "Not a supplier account")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Order"
)]
pub async fn get_supplier_orders_handler(
    Extension(service): Extension<DynOrderService>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_supplier(auth.user_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders/retailer",
    responses(
        (status = 200, description = "Orders placed by the caller", body = ApiResponse<Vec<OrderResponse>>),
        (status = 403, description = "Not a retailer account")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Order"
)]
pub async fn get_retailer_orders_handler(
    Extension(service): Extension<DynOrderService>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_retailer(auth.user_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let retailer_routes = OpenApiRouter::new()
        .route("/api/orders", post(create_order_handler))
        .route("/api/orders/retailer", get(get_retailer_orders_handler))
        .route_layer(middleware::from_fn(require_retailer));

    let supplier_routes = OpenApiRouter::new()
        .route("/api/orders/{id}/status", patch(update_order_status_handler))
        .route("/api/orders/supplier", get(get_supplier_orders_handler))
        .route_layer(middleware::from_fn(require_supplier));

    retailer_routes
        .merge(supplier_routes)
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.order_service.clone()))
        .layer(Extension(app_state.di_container.user_query.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
