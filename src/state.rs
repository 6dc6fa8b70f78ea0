use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use tokio::sync::broadcast;
use tracing::info;

use crate::booking::ids::{booking_id_millis, BookingIdGenerator};
use crate::connectivity::ConnectivityObserver;
use crate::error::AppError;
use crate::models::notice::Notice;
use crate::models::spot::sample_spots;
use crate::observability::metrics::Metrics;
use crate::repository::{
    BookingRepository, SpotRepository, StoreBookingRepository, StoreSpotRepository,
};
use crate::store::KeyValueStore;

pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 330;

#[derive(Debug, Clone, Copy)]
pub struct BookingSettings {
    pub submit_delay: Duration,
    pub strict_lookups: bool,
    pub utc_offset: FixedOffset,
}

impl BookingSettings {
    pub fn today(&self) -> NaiveDate {
        self.local_date(Utc::now())
    }

    pub fn local_date(&self, at: DateTime<Utc>) -> NaiveDate {
        at.with_timezone(&self.utc_offset).date_naive()
    }
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(1500),
            strict_lookups: false,
            utc_offset: FixedOffset::east_opt(DEFAULT_UTC_OFFSET_MINUTES * 60)
                .unwrap_or_else(|| Utc.fix()),
        }
    }
}

pub struct AppState {
    pub store: Arc<dyn KeyValueStore>,
    pub spots: Arc<dyn SpotRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    pub connectivity: ConnectivityObserver,
    pub notice_tx: broadcast::Sender<Notice>,
    pub booking_ids: BookingIdGenerator,
    pub settings: BookingSettings,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        settings: BookingSettings,
        event_buffer_size: usize,
    ) -> Self {
        let (notice_tx, _unused_rx) = broadcast::channel(event_buffer_size);
        let metrics = Metrics::new();

        Self {
            spots: Arc::new(StoreSpotRepository::new(store.clone())),
            bookings: Arc::new(StoreBookingRepository::new(store.clone())),
            store,
            connectivity: ConnectivityObserver::new(false, metrics.connectivity_offline.clone()),
            notice_tx,
            booking_ids: BookingIdGenerator::new(),
            settings,
            metrics,
        }
    }

    pub fn publish(&self, notice: Notice) {
        let _ = self.notice_tx.send(notice);
    }

    pub async fn seed_sample_spots(&self) -> Result<usize, AppError> {
        let mut seeded = 0;
        for spot in sample_spots() {
            if self.spots.get_by_id(&spot.id).await?.is_none() {
                self.spots.upsert(spot).await?;
                seeded += 1;
            }
        }

        info!(seeded, "sample spots seeded");
        Ok(seeded)
    }

    pub async fn resume_booking_ids(&self) -> Result<Option<i64>, AppError> {
        let newest = self
            .bookings
            .list()
            .await?
            .iter()
            .filter_map(|booking| booking_id_millis(&booking.id))
            .max();

        if let Some(last_ms) = newest {
            self.booking_ids.resume_after(last_ms);
            info!(last_ms, "booking ids resumed");
        }
        Ok(newest)
    }
}
