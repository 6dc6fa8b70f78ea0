use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::booking::PaymentMethod;
use crate::models::vehicle::{saved_vehicle, Vehicle, OTHER_VEHICLE_ID, SAVED_VEHICLES};

pub static START_TIME_OPTIONS: [&str; 13] = [
    "08:00", "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00",
    "18:00", "19:00", "20:00",
];
pub static DURATION_OPTIONS: [u32; 8] = [1, 2, 3, 4, 5, 6, 12, 24];
pub const DEFAULT_START_TIME: &str = "10:00";
pub const DEFAULT_DURATION_HOURS: u32 = 2;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingRequest {
    pub date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub duration_hours: Option<u32>,
    pub vehicle: Option<String>,
    pub vehicle_details: Option<String>,
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingSelection {
    pub date: NaiveDate,
    pub start_time: String,
    pub duration_hours: u32,
    pub vehicle: String,
    pub payment_method: PaymentMethod,
}

impl BookingRequest {
    pub fn validate(self, today: NaiveDate) -> Result<BookingSelection, AppError> {
        let date = self.date.unwrap_or(today);
        if date < today {
            return Err(AppError::BadRequest(format!("date {date} is in the past")));
        }

        let start_time = self
            .start_time
            .unwrap_or_else(|| DEFAULT_START_TIME.to_string());
        if !START_TIME_OPTIONS.iter().any(|option| *option == start_time) {
            return Err(AppError::BadRequest(format!(
                "start time {start_time} is not offered"
            )));
        }

        let duration_hours = self.duration_hours.unwrap_or(DEFAULT_DURATION_HOURS);
        if !DURATION_OPTIONS.contains(&duration_hours) {
            return Err(AppError::BadRequest(format!(
                "duration of {duration_hours} hours is not offered"
            )));
        }

        let vehicle = resolve_vehicle(self.vehicle.as_deref(), self.vehicle_details.as_deref())?;

        Ok(BookingSelection {
            date,
            start_time,
            duration_hours,
            vehicle,
            payment_method: self.payment_method,
        })
    }
}

fn resolve_vehicle(id: Option<&str>, details: Option<&str>) -> Result<String, AppError> {
    let id = id.map(str::trim).unwrap_or_default();
    if id.is_empty() {
        return Err(AppError::BadRequest("vehicle must be selected".to_string()));
    }

    if id == OTHER_VEHICLE_ID {
        let details = details.map(str::trim).unwrap_or_default();
        if details.is_empty() {
            return Err(AppError::BadRequest(
                "vehicle details are required for other vehicles".to_string(),
            ));
        }
        return Ok(details.to_string());
    }

    saved_vehicle(id)
        .map(|vehicle| vehicle.name.to_string())
        .ok_or_else(|| AppError::BadRequest(format!("unknown vehicle {id}")))
}

#[derive(Debug, Serialize)]
pub struct PaymentOption {
    pub id: PaymentMethod,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct BookingOptions {
    pub default_date: NaiveDate,
    pub default_start_time: &'static str,
    pub default_duration_hours: u32,
    pub start_times: &'static [&'static str],
    pub durations: &'static [u32],
    pub vehicles: &'static [Vehicle],
    pub other_vehicle_id: &'static str,
    pub payment_methods: Vec<PaymentOption>,
    pub default_payment_method: PaymentMethod,
}

pub fn booking_options(today: NaiveDate) -> BookingOptions {
    BookingOptions {
        default_date: today,
        default_start_time: DEFAULT_START_TIME,
        default_duration_hours: DEFAULT_DURATION_HOURS,
        start_times: &START_TIME_OPTIONS,
        durations: &DURATION_OPTIONS,
        vehicles: &SAVED_VEHICLES,
        other_vehicle_id: OTHER_VEHICLE_ID,
        payment_methods: PaymentMethod::ALL
            .iter()
            .map(|method| PaymentOption {
                id: *method,
                label: method.label(),
            })
            .collect(),
        default_payment_method: PaymentMethod::default(),
    }
}
