use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde::Deserialize;

use crate::booking::form::DEFAULT_DURATION_HOURS;
use crate::booking::lookup::{lookup_spot, SpotLookup};
use crate::booking::pricing::{quote, Quote};
use crate::error::AppError;
use crate::geo::{rank_by_distance, NearbySpot};
use crate::models::spot::GeoPoint;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/spots", get(list_spots))
        .route("/spots/:id", get(get_spot))
        .route("/spots/:id/quote", get(get_quote))
}

#[derive(Deserialize)]
pub struct NearbyQuery {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct QuoteQuery {
    pub duration: Option<u32>,
}

async fn list_spots(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<Vec<NearbySpot>>, AppError> {
    let origin = match (query.lat, query.lng) {
        (Some(lat), Some(lng)) => Some(GeoPoint { lat, lng }),
        (None, None) => None,
        _ => {
            return Err(AppError::BadRequest(
                "lat and lng must be given together".to_string(),
            ));
        }
    };

    let spots = state.spots.list().await?;
    Ok(Json(rank_by_distance(spots, origin.as_ref(), query.limit)))
}

async fn get_spot(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SpotLookup>, AppError> {
    Ok(Json(lookup_spot(&state, &id).await?))
}

async fn get_quote(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<QuoteQuery>,
) -> Result<Json<Quote>, AppError> {
    let lookup = lookup_spot(&state, &id).await?;
    let duration = query.duration.unwrap_or(DEFAULT_DURATION_HOURS);
    Ok(Json(quote(&lookup.spot, duration)?))
}
