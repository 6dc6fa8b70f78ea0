use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Booking,
    DataSync,
    Error,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NoticeStatus {
    Success,
    Pending,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub status: NoticeStatus,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn booking_confirmed(spot_name: &str) -> Self {
        Self {
            kind: NoticeKind::Booking,
            status: NoticeStatus::Success,
            title: "Booking Confirmed".to_string(),
            message: format!("Your booking at {spot_name} has been confirmed."),
        }
    }

    pub fn booking_saved_offline() -> Self {
        Self {
            kind: NoticeKind::Booking,
            status: NoticeStatus::Pending,
            title: "Saved Offline".to_string(),
            message: "Booking saved offline. Will sync when online.".to_string(),
        }
    }

    pub fn booking_failed() -> Self {
        Self {
            kind: NoticeKind::Error,
            status: NoticeStatus::Failed,
            title: "Booking Failed".to_string(),
            message: "There was an error processing your booking. Please try again.".to_string(),
        }
    }

    pub fn cached_spot_data() -> Self {
        Self {
            kind: NoticeKind::DataSync,
            status: NoticeStatus::Success,
            title: "Offline Data".to_string(),
            message: "Using cached parking data while offline".to_string(),
        }
    }

    pub fn spot_load_failed() -> Self {
        Self {
            kind: NoticeKind::Error,
            status: NoticeStatus::Failed,
            title: "Error".to_string(),
            message: "Could not load parking spot data".to_string(),
        }
    }

    pub fn booking_load_failed() -> Self {
        Self {
            kind: NoticeKind::Error,
            status: NoticeStatus::Failed,
            title: "Error".to_string(),
            message: "Could not load booking details".to_string(),
        }
    }
}
