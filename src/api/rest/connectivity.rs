use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde::Deserialize;

use crate::connectivity::ConnectivityStatus;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/connectivity",
        get(get_connectivity).put(update_connectivity),
    )
}

#[derive(Deserialize)]
pub struct UpdateConnectivityRequest {
    pub online: bool,
}

async fn get_connectivity(State(state): State<Arc<AppState>>) -> Json<ConnectivityStatus> {
    Json(state.connectivity.status())
}

async fn update_connectivity(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpdateConnectivityRequest>,
) -> Json<ConnectivityStatus> {
    state.connectivity.set_online(payload.online);

    Json(state.connectivity.status())
}
