use serde::Serialize;
use tracing::{error, warn};

use crate::error::AppError;
use crate::models::notice::Notice;
use crate::models::spot::ParkingSpot;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SpotSource {
    Stored,
    Fallback,
}

impl SpotSource {
    fn label(&self) -> &'static str {
        match self {
            SpotSource::Stored => "stored",
            SpotSource::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SpotLookup {
    pub spot: ParkingSpot,
    pub source: SpotSource,
    pub notice: Option<Notice>,
}

pub async fn lookup_spot(state: &AppState, spot_id: &str) -> Result<SpotLookup, AppError> {
    let stored = match state.spots.get_by_id(spot_id).await {
        Ok(stored) => stored,
        Err(err) => {
            error!(spot_id, error = %err, "failed to load parking spot");
            state.publish(Notice::spot_load_failed());
            return Err(err);
        }
    };

    let lookup = match stored {
        Some(spot) => SpotLookup {
            spot,
            source: SpotSource::Stored,
            notice: None,
        },
        None if state.settings.strict_lookups => {
            return Err(AppError::NotFound(format!("parking spot {spot_id} not found")));
        }
        None => {
            warn!(spot_id, "parking spot not stored; serving sample data");
            let notice = state
                .connectivity
                .is_offline()
                .then(Notice::cached_spot_data);
            if let Some(notice) = &notice {
                state.publish(notice.clone());
            }

            SpotLookup {
                spot: ParkingSpot::fallback(spot_id),
                source: SpotSource::Fallback,
                notice,
            }
        }
    };

    state
        .metrics
        .spot_lookups_total
        .with_label_values(&[lookup.source.label()])
        .inc();

    Ok(lookup)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{lookup_spot, SpotSource};
    use crate::error::AppError;
    use crate::models::spot::ParkingSpot;
    use crate::state::{AppState, BookingSettings};
    use crate::store::MemoryStore;

    fn state(strict_lookups: bool) -> AppState {
        let settings = BookingSettings {
            strict_lookups,
            ..BookingSettings::default()
        };
        AppState::new(Arc::new(MemoryStore::new()), settings, 16)
    }

    #[tokio::test]
    async fn absent_spot_falls_back_to_sample_with_requested_id() {
        let state = state(false);

        let lookup = lookup_spot(&state, "42").await.unwrap();
        assert_eq!(lookup.source, SpotSource::Fallback);
        assert_eq!(lookup.spot.id, "42");
        assert_eq!(lookup.spot.name, "Sample Parking Spot");
        assert_eq!(lookup.spot.hourly_rate, 40.0);
        assert!(lookup.notice.is_none());
    }

    #[tokio::test]
    async fn offline_fallback_carries_cached_data_notice() {
        let state = state(false);
        state.connectivity.set_online(false);

        let lookup = lookup_spot(&state, "42").await.unwrap();
        let notice = lookup.notice.unwrap();
        assert_eq!(notice.message, "Using cached parking data while offline");
    }

    #[tokio::test]
    async fn stored_spot_is_returned_as_is() {
        let state = state(false);
        let mut spot = ParkingSpot::fallback("7");
        spot.name = "Real Lot".to_string();
        state.spots.upsert(spot.clone()).await.unwrap();

        let lookup = lookup_spot(&state, "7").await.unwrap();
        assert_eq!(lookup.source, SpotSource::Stored);
        assert_eq!(lookup.spot, spot);
    }

    #[tokio::test]
    async fn strict_mode_reports_missing_spot() {
        let state = state(true);
        let result = lookup_spot(&state, "42").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
