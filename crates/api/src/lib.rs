//! # CoachDesk API
//!
//! Web server for the consultation booking flow of a financial-coaching
//! practice. Reservations, client profiles, contact messages and
//! testimonials live in a table-oriented record store (Airtable in
//! production, an in-process store for local runs).
//!
//! ## Architecture
//!
//! - **Routes**: URL structure of the public API
//! - **Handlers**: request parsing and validation, response shaping
//! - **Service**: [`service::BookingService`], the resolvers and writers over the record store
//! - **Middleware**: error mapping
//! - **Config**: environment configuration

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Error mapping shared by all handlers
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;
/// Booking resolvers and writers bound to a record store
pub mod service;

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use coachdesk_store::SharedStore;
use eyre::{Result, WrapErr};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use crate::{config::ApiConfig, service::BookingService};

/// Shared application state handed to every handler.
pub struct ApiState {
    pub service: BookingService,
}

impl ApiState {
    pub fn new(service: BookingService) -> Arc<Self> {
        Arc::new(Self { service })
    }
}

/// Installs the global `tracing` subscriber.
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .wrap_err("Failed to install tracing subscriber")?;
    Ok(())
}

/// All routes with request tracing, without CORS or timeouts.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Calendar reads
        .merge(routes::availability::routes())
        // Reservation and intake writes
        .merge(routes::bookings::routes())
        .merge(routes::clients::routes())
        // Marketing site endpoints
        .merge(routes::contact::routes())
        .merge(routes::testimonials::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .wrap_err_with(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(origins))
}

/// The full application: routes, CORS when origins are configured, and the
/// request timeout.
pub fn build_app(state: Arc<ApiState>, config: &ApiConfig) -> Result<Router> {
    let app = router(state);

    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)?),
        None => app,
    };

    Ok(app.layer(
        ServiceBuilder::new().layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    ))
}

/// Starts the API server on `config.server_addr()`.
///
/// The store is built once by the caller and shared by every request.
pub async fn start_server(config: ApiConfig, store: SharedStore) -> Result<()> {
    let service = BookingService::new(store, config.tables.clone(), config.booking_schema);
    let app = build_app(ApiState::new(service), &config)?;

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
