//! HTTP API Layer
//!
//! This crate provides the REST API for the quoting engine using Axum.
//! The calculator runs server-side here so the premium shown during the
//! application flow and the premium validated at submission come from
//! one source of truth.
//!
//! # Architecture
//!
//! - **Handlers**: Catalog lookups and quote computation
//! - **Middleware**: Request logging and tracing
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(calculator, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_catalog::ProductCatalog;
use domain_quote::PremiumCalculator;

use crate::config::ApiConfig;
use crate::handlers::{catalog, health, quote};
use crate::middleware::request_logging;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub calculator: Arc<PremiumCalculator>,
    pub catalog: &'static ProductCatalog,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `calculator` - The premium calculator, already loaded with tables
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(calculator: Arc<PremiumCalculator>, config: ApiConfig) -> Router {
    let state = AppState {
        calculator,
        catalog: ProductCatalog::standard(),
        config,
    };

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Catalog routes
    let catalog_routes = Router::new()
        .route("/", get(catalog::list_products))
        .route("/:name", get(catalog::get_product))
        .route("/:name/add-ons", get(catalog::list_add_ons));

    // Quote routes
    let quote_routes = Router::new().route("/", post(quote::create_quote));

    // API routes
    let api_routes = Router::new()
        .nest("/products", catalog_routes)
        .nest("/quotes", quote_routes)
        .layer(axum_middleware::from_fn(request_logging));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
