use crate::{
    abstract_trait::DynInventoryService,
    domain::{
        requests::CreateInventoryItemRequest,
        responses::{ApiResponse, InventoryItemResponse},
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
    routing::{get, post},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/inventory",
    responses(
        (status = 200, description = "Caller's own inventory", body = ApiResponse<Vec<InventoryItemResponse>>),
        (status = 403, description = "Not a supplier account")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Inventory"
)]
pub async fn get_own_inventory_handler(
    Extension(service): Extension<DynInventoryService>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_supplier(auth.user_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/inventory",
    request_body = CreateInventoryItemRequest,
    responses(
        (status = 201, description = "Inventory item created", body = ApiResponse<InventoryItemResponse>),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Not a supplier account")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Inventory"
)]
pub async fn create_inventory_item_handler(
    Extension(service): Extension<DynInventoryService>,
    Extension(auth): Extension<AuthUser>,
    ValidatedJson(body): ValidatedJson<CreateInventoryItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_item(auth.user_id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/inventory/supplier/{supplier_id}",
    params(
        ("supplier_id" = i32, Path, description = "Supplier whose catalog to browse")
    ),
    responses(
        (status = 200, description = "Supplier's catalog", body = ApiResponse<Vec<InventoryItemResponse>>),
        (status = 403, description = "Not a retailer account")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Inventory"
)]
pub async fn browse_supplier_inventory_handler(
    Extension(service): Extension<DynInventoryService>,
    Path(supplier_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_supplier(supplier_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn inventory_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let supplier_routes = OpenApiRouter::new()
        .route(
            "/api/inventory",
            get(get_own_inventory_handler).post(create_inventory_item_handler),
        )
        .route_layer(middleware::from_fn(require_supplier));

    let retailer_routes = OpenApiRouter::new()
        .route(
            "/api/inventory/supplier/{supplier_id}",
            get(browse_supplier_inventory_handler),
        )
        .route_layer(middleware::from_fn(require_retailer));

    supplier_routes
        .merge(retailer_routes)
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.inventory_service.clone()))
        .layer(Extension(app_state.di_container.user_query.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
