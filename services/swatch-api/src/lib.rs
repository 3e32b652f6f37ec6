//! Swatch API Service Library
//!
//! HTTP server rendering solid and gradient PNG images from URL paths.

pub mod config;
pub mod handlers;
pub mod metrics;
pub mod pipeline;
pub mod state;

use axum::{routing::get, Extension, Router};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Build the full router with middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    use crate::handlers::{common, health, image};

    Router::new()
        // Hex colors
        .route("/:w/:h/hex/:hex", get(image::hex_handler))
        .route("/:w/:h/hex/:hex/:hex2", get(image::hex_gradient_handler))
        // Decimal channels
        .route("/:w/:h/rgb/:r/:g/:b", get(image::rgb_handler))
        .route(
            "/:w/:h/rgb/:r/:g/:b/:r2/:g2/:b2",
            get(image::rgb_gradient_handler),
        )
        .route("/:w/:h/rgba/:r/:g/:b/:a", get(image::rgba_handler))
        .route(
            "/:w/:h/rgba/:r/:g/:b/:a/:r2/:g2/:b2/:a2",
            get(image::rgba_gradient_handler),
        )
        // RAL codes
        .route("/:w/:h/ral/:code", get(image::ral_handler))
        .route("/:w/:h/ral/:code/:code2", get(image::ral_gradient_handler))
        // Health and metrics
        .route("/health", get(health::health_handler))
        .route("/metrics", get(health::metrics_handler))
        .fallback(common::not_found_handler)
        // Middleware
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
