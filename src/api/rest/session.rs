use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;
use crate::store::LAST_PAGE_KEY;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/session/last-page",
        get(get_last_page).put(update_last_page),
    )
}

#[derive(Serialize, Deserialize)]
pub struct LastPage {
    pub path: Option<String>,
}

async fn get_last_page(State(state): State<Arc<AppState>>) -> Result<Json<LastPage>, AppError> {
    let path = match state.store.get(LAST_PAGE_KEY).await? {
        Some(raw) => serde_json::from_str(&raw)
            .map_err(|err| AppError::Storage(format!("corrupt {LAST_PAGE_KEY}: {err}")))?,
        None => None,
    };

    Ok(Json(LastPage { path }))
}

async fn update_last_page(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LastPage>,
) -> Result<Json<LastPage>, AppError> {
    match payload.path.as_deref() {
        None => state.store.remove(LAST_PAGE_KEY).await?,
        Some(path) if path.starts_with('/') && !path.starts_with("//") => {
            let raw = serde_json::to_string(path)
                .map_err(|err| AppError::Internal(format!("failed to encode path: {err}")))?;
            state.store.set(LAST_PAGE_KEY, &raw).await?;
        }
        Some(path) => {
            return Err(AppError::BadRequest(format!(
                "last page must be an absolute app path, got {path}"
            )));
        }
    }

    Ok(Json(payload))
}
