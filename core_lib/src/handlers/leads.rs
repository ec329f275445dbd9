//! Intake and retrieval handlers for quotes, bookings and contact messages

use axum::{extract::State, response::IntoResponse, Json};
use tracing::info;

use crate::{
    error::Result,
    extractors::JsonBody,
    models::{BookingCreate, ContactMessageCreate, QuoteRequestCreate},
    AppState,
};

pub async fn handle_create_quote(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<QuoteRequestCreate>,
) -> Result<impl IntoResponse> {
    info!("POST /api/quotes");

    let quote = state.leads.submit_quote(payload).await?;
    Ok(Json(quote))
}

pub async fn handle_list_quotes(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let quotes = state.leads.list_quotes().await?;
    info!("GET /api/quotes - {} records", quotes.len());

    Ok(Json(quotes))
}

pub async fn handle_create_booking(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<BookingCreate>,
) -> Result<impl IntoResponse> {
    info!("POST /api/bookings");

    let booking = state.leads.submit_booking(payload).await?;
    Ok(Json(booking))
}

pub async fn handle_list_bookings(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let bookings = state.leads.list_bookings().await?;
    info!("GET /api/bookings - {} records", bookings.len());

    Ok(Json(bookings))
}

pub async fn handle_create_contact(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ContactMessageCreate>,
) -> Result<impl IntoResponse> {
    info!("POST /api/contact");

    let message = state.leads.submit_contact(payload).await?;
    Ok(Json(message))
}
