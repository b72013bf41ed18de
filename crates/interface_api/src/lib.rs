//! HTTP API Layer
//!
//! This crate provides the REST API for the exchange desk using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for operation types, deductions,
//!   clients, banks, transactions and cashboxes
//! - **Middleware**: Request ids, tracing, request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent `{error, message}` JSON responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//! use infra_store::Store;
//!
//! let app = create_router(Store::new(), config);
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
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_cashbox::CashboxService;
use domain_exchange::{DeductionCatalogPort, TransactionService};
use domain_party::{BankPort, ClientPort};
use infra_store::Store;

use crate::config::ApiConfig;
use crate::handlers::{banks, cashboxes, clients, deductions, health, operation_types, transactions};
use crate::middleware::{request_logging_middleware, REQUEST_ID_HEADER};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub deductions: Arc<dyn DeductionCatalogPort>,
    pub clients: Arc<dyn ClientPort>,
    pub banks: Arc<dyn BankPort>,
    pub cashboxes: CashboxService,
    pub transactions: TransactionService,
    pub store: Store,
    pub config: ApiConfig,
}

impl AppState {
    /// Wires the handlers to the given stores
    pub fn new(store: Store, config: ApiConfig) -> Self {
        Self {
            deductions: store.deduction_port(),
            clients: store.client_port(),
            banks: store.bank_port(),
            cashboxes: store.cashbox_service(),
            transactions: store.transaction_service(),
            store,
            config,
        }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `store` - Storage adapters backing every port
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(store: Store, config: ApiConfig) -> Router {
    let state = AppState::new(store, config);

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let deduction_routes = Router::new()
        .route(
            "/",
            get(deductions::list_deductions).post(deductions::create_deduction),
        )
        .route(
            "/:id",
            get(deductions::get_deduction)
                .put(deductions::update_deduction)
                .delete(deductions::delete_deduction),
        );

    let client_routes = Router::new()
        .route("/", get(clients::list_clients).post(clients::create_client))
        .route(
            "/:id",
            get(clients::get_client)
                .put(clients::update_client)
                .delete(clients::delete_client),
        );

    let bank_routes = Router::new()
        .route("/", get(banks::list_banks).post(banks::create_bank))
        .route(
            "/:id",
            get(banks::get_bank)
                .put(banks::update_bank)
                .delete(banks::delete_bank),
        );

    let transaction_routes = Router::new()
        .route(
            "/",
            get(transactions::list_transactions).post(transactions::create_transaction),
        )
        .route("/preview", post(transactions::preview_transaction));

    let cashbox_routes = Router::new()
        .route(
            "/",
            get(cashboxes::list_cashboxes).post(cashboxes::open_cashbox),
        )
        .route("/current", get(cashboxes::current_cashbox))
        .route("/:id", get(cashboxes::get_cashbox))
        .route("/:id/totals", get(cashboxes::cashbox_totals))
        .route("/:id/close", post(cashboxes::close_cashbox));

    let api_routes = Router::new()
        .route("/operation-types", get(operation_types::list_operation_types))
        .nest("/deductions", deduction_routes)
        .nest("/clients", client_routes)
        .nest("/banks", bank_routes)
        .nest("/transactions", transaction_routes)
        .nest("/cashboxes", cashbox_routes)
        .layer(axum_middleware::from_fn(request_logging_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER)),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
