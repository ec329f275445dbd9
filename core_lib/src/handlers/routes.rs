//! Route table for the `/api` surface

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use super::{content, health, leads};
use crate::{error::AppError, AppState};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/api", get(health::handle_root))
        .route("/api/", get(health::handle_root))
        .route("/api/health", get(health::handle_health))
        .route(
            "/api/quotes",
            get(leads::handle_list_quotes).post(leads::handle_create_quote),
        )
        .route(
            "/api/bookings",
            get(leads::handle_list_bookings).post(leads::handle_create_booking),
        )
        .route("/api/contact", post(leads::handle_create_contact))
        .route("/api/services", get(content::handle_services))
        .route("/api/testimonials", get(content::handle_testimonials))
        .route("/api/gallery", get(content::handle_gallery))
        .fallback(handle_not_found)
}

async fn handle_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
