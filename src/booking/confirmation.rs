use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;
use tracing::{error, warn};

use crate::booking::ids::confirmation_code;
use crate::connectivity::CONFIRMATION_OFFLINE_BANNER;
use crate::error::AppError;
use crate::models::booking::{Booking, BookingStatus, PaymentMethod, GUEST_USER_ID};
use crate::models::notice::Notice;
use crate::models::spot::{DEFAULT_CURRENCY, FALLBACK_SPOT_ADDRESS, FALLBACK_SPOT_NAME};
use crate::state::AppState;

pub const PLACEHOLDER_SPOT_ID: &str = "sample";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingSource {
    Stored,
    Placeholder,
}

impl BookingSource {
    fn label(&self) -> &'static str {
        match self {
            BookingSource::Stored => "stored",
            BookingSource::Placeholder => "placeholder",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Confirmation {
    pub booking: Booking,
    pub source: BookingSource,
    pub share_text: String,
    pub banner: Option<&'static str>,
}

pub async fn lookup_confirmation(
    state: &AppState,
    booking_id: &str,
) -> Result<Confirmation, AppError> {
    let stored = match state.bookings.get_by_id(booking_id).await {
        Ok(stored) => stored,
        Err(err) => {
            error!(booking_id, error = %err, "failed to load booking");
            state.publish(Notice::booking_load_failed());
            return Err(err);
        }
    };

    let (booking, source) = match stored {
        Some(booking) => (booking, BookingSource::Stored),
        None if state.settings.strict_lookups => {
            return Err(AppError::NotFound(format!("booking {booking_id} not found")));
        }
        None => {
            warn!(booking_id, "booking not stored; serving placeholder");
            (
                placeholder_booking(booking_id, state.settings.today(), Utc::now()),
                BookingSource::Placeholder,
            )
        }
    };

    state
        .metrics
        .confirmation_lookups_total
        .with_label_values(&[source.label()])
        .inc();

    Ok(Confirmation {
        share_text: share_text(&booking),
        banner: state
            .connectivity
            .is_offline()
            .then_some(CONFIRMATION_OFFLINE_BANNER),
        booking,
        source,
    })
}

pub fn placeholder_booking(booking_id: &str, date: NaiveDate, now: DateTime<Utc>) -> Booking {
    Booking {
        id: booking_id.to_string(),
        user_id: GUEST_USER_ID.to_string(),
        spot_id: PLACEHOLDER_SPOT_ID.to_string(),
        spot_name: FALLBACK_SPOT_NAME.to_string(),
        location: FALLBACK_SPOT_ADDRESS.to_string(),
        date,
        start_time: "10:00".to_string(),
        duration_hours: 2,
        vehicle: "Honda City (KA-01-AB-1234)".to_string(),
        payment_method: PaymentMethod::Later,
        price: 80.0,
        currency: DEFAULT_CURRENCY.to_string(),
        status: BookingStatus::Confirmed,
        created_at: now,
        confirmation_code: confirmation_code(),
    }
}

pub fn share_text(booking: &Booking) -> String {
    format!(
        "I've booked a parking spot at {} on {} at {}.",
        booking.spot_name,
        long_date(booking.date),
        booking.start_time
    )
}

pub fn long_date(date: NaiveDate) -> String {
    let day = date.day();
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{} {day}{suffix}, {}", date.format("%B"), date.year())
}

fn plural_hours(hours: u32) -> String {
    if hours == 1 {
        "1 hour".to_string()
    } else {
        format!("{hours} hours")
    }
}

pub fn render_ticket(booking: &Booking) -> String {
    let lines = [
        "ParkEase Parking Ticket".to_string(),
        format!("Confirmation Code: {}", booking.confirmation_code),
        format!("Booking: {}", booking.id),
        format!("Spot: {}", booking.spot_name),
        format!("Location: {}", booking.location),
        format!("Date: {}", long_date(booking.date)),
        format!(
            "Time: {} ({})",
            booking.start_time,
            plural_hours(booking.duration_hours)
        ),
        format!("Vehicle: {}", booking.vehicle),
        format!("Payment: {}", booking.payment_method.label()),
        format!("Amount: {}{}", booking.currency, booking.price),
        "Status: Confirmed".to_string(),
        "Show this code at the parking entrance".to_string(),
    ];
    let mut ticket = lines.join("\n");
    ticket.push('\n');
    ticket
}
