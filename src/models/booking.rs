use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const GUEST_USER_ID: &str = "guest";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Later,
    Card,
    Upi,
    Wallet,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Later,
        PaymentMethod::Card,
        PaymentMethod::Upi,
        PaymentMethod::Wallet,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Later => "Pay Later (at venue)",
            PaymentMethod::Card => "Credit/Debit Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Wallet => "Wallet",
        }
    }
}

/// A confirmed reservation. Spot fields are a snapshot taken at booking
/// time and do not follow later spot updates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub spot_id: String,
    pub spot_name: String,
    pub location: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub duration_hours: u32,
    pub vehicle: String,
    pub payment_method: PaymentMethod,
    pub price: f64,
    pub currency: String,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub confirmation_code: String,
}
