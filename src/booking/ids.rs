use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use rand::Rng;

const BOOKING_ID_PREFIX: &str = "booking-";

/// Issues `booking-<unix millis>` identifiers that never repeat within the
/// process, even when two submissions share a millisecond.
#[derive(Debug, Default)]
pub struct BookingIdGenerator {
    last_ms: AtomicI64,
}

impl BookingIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> String {
        self.next_at(Utc::now().timestamp_millis())
    }

    fn next_at(&self, now_ms: i64) -> String {
        let mut prev = self.last_ms.load(Ordering::Relaxed);
        loop {
            let candidate = now_ms.max(prev + 1);
            match self.last_ms.compare_exchange_weak(
                prev,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return format!("{BOOKING_ID_PREFIX}{candidate}"),
                Err(actual) => prev = actual,
            }
        }
    }

    pub fn resume_after(&self, last_ms: i64) {
        self.last_ms.fetch_max(last_ms, Ordering::AcqRel);
    }
}

pub fn booking_id_millis(id: &str) -> Option<i64> {
    id.strip_prefix(BOOKING_ID_PREFIX)?.parse().ok()
}

pub fn confirmation_code() -> String {
    let digits: u16 = rand::thread_rng().gen_range(1000..=9999);
    format!("PARK{digits}")
}
