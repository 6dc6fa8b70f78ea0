use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Json;
use axum::Router;

use crate::booking::confirmation::{lookup_confirmation, render_ticket, Confirmation};
use crate::booking::form::{booking_options, BookingOptions, BookingRequest};
use crate::booking::submit::{submit_booking, BookingReceipt};
use crate::error::AppError;
use crate::models::booking::Booking;
use crate::state::AppState;

pub const USER_ID_HEADER: &str = "x-user-id";

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/booking-options", get(get_booking_options))
        .route("/booking/:spot_id", post(create_booking))
        .route("/booking/confirmation/:id", get(get_confirmation))
        .route("/booking/confirmation/:id/ticket", get(download_ticket))
        .route("/bookings", get(list_bookings))
}

async fn get_booking_options(State(state): State<Arc<AppState>>) -> Json<BookingOptions> {
    Json(booking_options(state.settings.today()))
}

async fn create_booking(
    State(state): State<Arc<AppState>>,
    Path(spot_id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<BookingRequest>,
) -> Result<Json<BookingReceipt>, AppError> {
    let user_id = headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok());

    let receipt = submit_booking(&state, &spot_id, user_id, payload).await?;
    Ok(Json(receipt))
}

async fn get_confirmation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Confirmation>, AppError> {
    Ok(Json(lookup_confirmation(&state, &id).await?))
}

async fn download_ticket(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let confirmation = lookup_confirmation(&state, &id).await?;
    let file_stem: String = confirmation
        .booking
        .id
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    let disposition = format!("attachment; filename=\"parkease-{file_stem}.txt\"");

    Ok((
        [
            (CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (CONTENT_DISPOSITION, disposition),
        ],
        render_ticket(&confirmation.booking),
    ))
}

async fn list_bookings(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Booking>>, AppError> {
    Ok(Json(state.bookings.list().await?))
}
