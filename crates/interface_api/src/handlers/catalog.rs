//! Catalog handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::dto::catalog::{AddOnResponse, ProductResponse};
use crate::{error::ApiError, AppState};

/// Lists all products with their configuration option sets
pub async fn list_products(
    State(state): State<AppState>,
) -> Json<Vec<ProductResponse>> {
    Json(state.catalog.products().iter().map(Into::into).collect())
}

/// Gets a product by name
pub async fn get_product(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ProductResponse>, ApiError> {
    state
        .catalog
        .product(&name)
        .map(|p| Json(p.into()))
        .ok_or_else(|| ApiError::NotFound(format!("Product not found: {name}")))
}

/// Lists the add-ons eligible for a product
pub async fn list_add_ons(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<AddOnResponse>>, ApiError> {
    if state.catalog.product(&name).is_none() {
        return Err(ApiError::NotFound(format!("Product not found: {name}")));
    }

    Ok(Json(
        state
            .catalog
            .add_ons_for(&name)
            .into_iter()
            .map(Into::into)
            .collect(),
    ))
}
