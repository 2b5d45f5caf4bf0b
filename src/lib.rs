//! Customer Support Ticket API
//!
//! CRUD service for customer-support tickets held in process memory.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP (axum)   /tickets  /health  /docs                  │
//! │        │                                                 │
//! │        ▼                                                 │
//! │  ValidTicketRequest ── TicketRequestValidator (cascade)  │
//! │        │                                                 │
//! │        ▼                                                 │
//! │  TicketService ── id, createdAt, status, projection      │
//! │        │                                                 │
//! │        ▼                                                 │
//! │  TicketStore (in-memory, RwLock)                         │
//! └──────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;
pub mod service;
pub mod store;
pub mod validation;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::ApiConfig;
pub use error::{ApiError, TicketError};
pub use models::*;
pub use service::TicketService;
pub use store::{InMemoryTicketStore, TicketStore};
pub use validation::{TicketRequestValidator, ValidationFailure, ValidationResult};

/// API state
pub struct ApiState {
    /// API version
    pub version: String,
    /// Ticket service shared by all requests
    pub tickets: TicketService,
}

impl ApiState {
    /// State serving the given ticket service
    pub fn new(tickets: TicketService) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").into(),
            tickets,
        }
    }
}

impl Default for ApiState {
    fn default() -> Self {
        Self::new(TicketService::default())
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Customer Support API",
        version = "1.0.0",
        description = "Customer support ticket management"
    ),
    paths(
        routes::health::health_check,
        routes::tickets::list_tickets,
        routes::tickets::get_ticket,
        routes::tickets::create_ticket,
        routes::tickets::update_ticket,
        routes::tickets::delete_ticket,
    ),
    components(
        schemas(
            ErrorResponse, error::ValidationErrorResponse, ValidationFailure,
            TicketRequest, TicketResponse, TicketStatus, TicketType,
            routes::health::HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "tickets", description = "Ticket management")
    )
)]
pub struct ApiDoc;

/// Build the API router
pub fn build_router(state: ApiState, config: &ApiConfig) -> Router {
    let mut router = Router::new()
        .route("/health", get(routes::health::health_check))
        .nest(routes::tickets::BASE_PATH, routes::tickets::router());

    if config.enable_docs {
        router = router.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(CorsLayer::permissive()),
        )
        .with_state(Arc::new(state))
}
