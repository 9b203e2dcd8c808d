//! HTTP API Layer
//!
//! REST surface of the respondent home service, built on Axum.
//!
//! # Architecture
//!
//! - **Handlers**: fulfilment requests, case queries and health checks
//! - **Middleware**: request logging
//! - **DTOs**: validated request bodies
//! - **Error Handling**: domain errors rendered as `ErrorResponse` JSON
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use core_kernel::HealthCheckable;
use domain_case::CaseService;
use domain_fulfilment::FulfilmentService;

use crate::handlers::{cases, fulfilment, health};
use crate::middleware::request_logging_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub fulfilment_service: FulfilmentService,
    pub case_service: CaseService,
    /// Adapters consulted by the readiness check
    pub health_checks: Vec<Arc<dyn HealthCheckable>>,
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let api_routes = Router::new()
        .route(
            "/fulfilment-request/sms",
            post(fulfilment::fulfilment_request_by_sms),
        )
        .route(
            "/cases/:case_id/fulfilments/sms",
            post(fulfilment::case_fulfilment_request_by_sms),
        )
        .route(
            "/cases/by-property-reference/:uprn",
            get(cases::get_household_cases_by_uprn),
        )
        .layer(axum_middleware::from_fn(request_logging_middleware));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
