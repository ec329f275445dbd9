use axum::{extract::State, response::IntoResponse, Json};

use crate::AppState;

pub async fn handle_services(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.content.services())
}

pub async fn handle_testimonials(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.content.testimonials())
}

pub async fn handle_gallery(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.content.gallery())
}
