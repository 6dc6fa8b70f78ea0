use std::sync::Arc;

use prometheus::IntGauge;
use serde::Serialize;
use tokio::sync::watch;
use tracing::info;

pub const BOOKING_FORM_OFFLINE_BANNER: &str = "You're currently offline. Your booking will be saved locally and synced when you're back online.";
pub const CONFIRMATION_OFFLINE_BANNER: &str = "You're currently offline. This booking has been saved locally and will sync when you're back online.";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConnectivityStatus {
    pub offline: bool,
    pub banner: Option<&'static str>,
}

#[derive(Clone)]
pub struct ConnectivityObserver {
    tx: Arc<watch::Sender<bool>>,
    offline_gauge: IntGauge,
}

impl ConnectivityObserver {
    pub fn new(offline: bool, offline_gauge: IntGauge) -> Self {
        let (tx, _rx) = watch::channel(offline);
        offline_gauge.set(i64::from(offline));
        Self {
            tx: Arc::new(tx),
            offline_gauge,
        }
    }

    pub fn is_offline(&self) -> bool {
        *self.tx.borrow()
    }

    /// Returns `true` when the state actually changed.
    pub fn set_online(&self, online: bool) -> bool {
        let offline = !online;
        let changed = self.tx.send_if_modified(|current| {
            if *current == offline {
                false
            } else {
                *current = offline;
                true
            }
        });

        if changed {
            self.offline_gauge.set(i64::from(offline));
            info!(offline, "connectivity changed");
        }
        changed
    }

    pub fn status(&self) -> ConnectivityStatus {
        let offline = self.is_offline();
        ConnectivityStatus {
            offline,
            banner: offline.then_some(BOOKING_FORM_OFFLINE_BANNER),
        }
    }
}

#[cfg(test)]
mod tests {
    use prometheus::IntGauge;

    use super::{ConnectivityObserver, BOOKING_FORM_OFFLINE_BANNER};

    fn observer() -> (ConnectivityObserver, IntGauge) {
        let gauge = IntGauge::new("connectivity_offline", "test gauge").unwrap();
        (ConnectivityObserver::new(false, gauge.clone()), gauge)
    }

    #[test]
    fn transitions_report_change_only_once() {
        let (observer, _gauge) = observer();

        assert!(observer.set_online(false));
        assert!(!observer.set_online(false));
        assert!(observer.is_offline());

        assert!(observer.set_online(true));
        assert!(!observer.is_offline());
    }

    #[test]
    fn banner_is_shown_only_when_offline() {
        let (observer, _gauge) = observer();
        assert_eq!(observer.status().banner, None);

        observer.set_online(false);
        assert_eq!(observer.status().banner, Some(BOOKING_FORM_OFFLINE_BANNER));
    }

    #[test]
    fn gauge_follows_every_transition() {
        let (observer, gauge) = observer();
        assert_eq!(gauge.get(), 0);

        observer.set_online(false);
        assert_eq!(gauge.get(), 1);

        observer.set_online(true);
        assert_eq!(gauge.get(), 0);
    }
}
