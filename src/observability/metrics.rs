use prometheus::{Encoder, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub bookings_total: IntCounterVec,
    pub booking_submit_latency_seconds: HistogramVec,
    pub spot_lookups_total: IntCounterVec,
    pub confirmation_lookups_total: IntCounterVec,
    pub connectivity_offline: IntGauge,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let bookings_total = IntCounterVec::new(
            Opts::new("bookings_total", "Total booking submissions by outcome"),
            &["outcome"],
        )
        .expect("valid bookings_total metric");

        let booking_submit_latency_seconds = HistogramVec::new(
            prometheus::HistogramOpts::new(
                "booking_submit_latency_seconds",
                "Latency of booking submission in seconds",
            ),
            &["outcome"],
        )
        .expect("valid booking_submit_latency_seconds metric");

        let spot_lookups_total = IntCounterVec::new(
            Opts::new("spot_lookups_total", "Spot lookups by data source"),
            &["source"],
        )
        .expect("valid spot_lookups_total metric");

        let confirmation_lookups_total = IntCounterVec::new(
            Opts::new(
                "confirmation_lookups_total",
                "Booking confirmation lookups by data source",
            ),
            &["source"],
        )
        .expect("valid confirmation_lookups_total metric");

        let connectivity_offline = IntGauge::new(
            "connectivity_offline",
            "1 while the client reports itself offline",
        )
        .expect("valid connectivity_offline metric");

        registry
            .register(Box::new(bookings_total.clone()))
            .expect("register bookings_total");
        registry
            .register(Box::new(booking_submit_latency_seconds.clone()))
            .expect("register booking_submit_latency_seconds");
        registry
            .register(Box::new(spot_lookups_total.clone()))
            .expect("register spot_lookups_total");
        registry
            .register(Box::new(confirmation_lookups_total.clone()))
            .expect("register confirmation_lookups_total");
        registry
            .register(Box::new(connectivity_offline.clone()))
            .expect("register connectivity_offline");

        Self {
            registry,
            bookings_total,
            booking_submit_latency_seconds,
            spot_lookups_total,
            confirmation_lookups_total,
            connectivity_offline,
        }
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
