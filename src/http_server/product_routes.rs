//! # Product Routes
//!
//! The five CRUD handlers over the shared product store. Each handler is a
//! thin adapter: parse the path id, take the lock, call the store, wrap the
//! result in the response envelope. All domain rules live in the store.

use std::sync::{Arc, RwLock};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::store::{NewProduct, Product, ProductPatch, ProductStore};

use super::errors::{ApiError, ApiResult};
use super::response::ApiResponse;

/// Shared store handle.
///
/// The store itself has no concurrency protection; the lock is what keeps
/// the max-id+1 assignment safe across request handlers.
pub type SharedStore = Arc<RwLock<ProductStore>>;

/// Create the product router, nested under `/api/products` by the server
pub fn product_routes(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(store)
}

/// Parse a path id. Anything non-numeric behaves like an id that does not
/// exist, never a type error.
fn parse_id(raw: &str) -> ApiResult<u32> {
    raw.trim().parse().map_err(|_| ApiError::NotFound)
}

/// GET /api/products
async fn list_products(
    State(store): State<SharedStore>,
) -> ApiResult<Json<ApiResponse<Vec<Product>>>> {
    let store = store.read().map_err(|_| ApiError::lock_poisoned())?;

    let products = store.list().to_vec();
    let count = products.len();
    Ok(Json(ApiResponse::ok_with_count(products, count)))
}

/// GET /api/products/:id
async fn get_product(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Product>>> {
    let id = parse_id(&id)?;
    let store = store.read().map_err(|_| ApiError::lock_poisoned())?;

    let product = store.get(id)?.clone();
    Ok(Json(ApiResponse::ok(product)))
}

/// POST /api/products
async fn create_product(
    State(store): State<SharedStore>,
    Json(fields): Json<NewProduct>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Product>>)> {
    let mut store = store.write().map_err(|_| ApiError::lock_poisoned())?;

    let product = store.create(fields)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(
            product,
            "Product created successfully",
        )),
    ))
}

/// PUT /api/products/:id
async fn update_product(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    Json(patch): Json<ProductPatch>,
) -> ApiResult<Json<ApiResponse<Product>>> {
    let id = parse_id(&id)?;
    let mut store = store.write().map_err(|_| ApiError::lock_poisoned())?;

    let product = store.update(id, patch)?;
    Ok(Json(ApiResponse::ok_with_message(
        product,
        "Product updated successfully",
    )))
}

/// DELETE /api/products/:id
async fn delete_product(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Product>>> {
    let id = parse_id(&id)?;
    let mut store = store.write().map_err(|_| ApiError::lock_poisoned())?;

    let product = store.delete(id)?;
    Ok(Json(ApiResponse::ok_with_message(
        product,
        "Product deleted successfully",
    )))
}
