//! Wire types for the remote pricing/booking/authentication API.
//!
//! Request types serialize to form-encoded bodies (the backend accepts
//! `application/x-www-form-urlencoded` for everything except login, which is
//! JSON). Response types decode leniently: numeric fields default to zero
//! when absent and unknown echo fields are ignored.

use serde::{Deserialize, Serialize};

use crate::rates::RateTable;

/// Fixed vehicle descriptors the booking endpoints expect verbatim.
pub const FIXED_SEATS: &str = "4+1";
pub const FIXED_FUEL_TYPE: &str = "CNG-Diesel";
pub const FIXED_AVAILABILITY: &str = "Available";

/// Request body for the trip/cab-info endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TripInfoRequest {
    #[serde(rename = "tripType")]
    pub trip_type: String,
    #[serde(rename = "pickupLocation")]
    pub pickup_location: String,
    #[serde(rename = "dropLocation")]
    pub drop_location: String,
    pub date: String,
    // The backend reads this exact capitalized key.
    #[serde(rename = "Returndate")]
    pub return_date: String,
    pub time: String,
    pub distance: String,
    pub days: String,
}

/// One bookable cab as listed by the trip-info endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cab {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub category: Option<String>,
}

/// The fleet shown before (or instead of) a cab list from the backend.
#[must_use]
pub fn default_fleet() -> Vec<Cab> {
    let features_small = vec![
        "4+1 Seater".to_string(),
        "USB Charging".to_string(),
        "Air Conditioning".to_string(),
        "Music System".to_string(),
    ];
    vec![
        Cab {
            kind: "Hatchback".into(),
            image: Some("/images/hatchback-car.jpg".into()),
            features: features_small.clone(),
            rating: 4.5,
            reviews: 48,
            category: Some("Hatchback".into()),
        },
        Cab {
            kind: "Sedan".into(),
            image: Some("/images/sedan-car.jpg".into()),
            features: features_small,
            rating: 4.7,
            reviews: 52,
            category: Some("Sedan".into()),
        },
        Cab {
            kind: "SUV".into(),
            image: Some("/images/suv.jpg".into()),
            features: vec![
                "6+1 Seater".into(),
                "USB Charging".into(),
                "Climate Control".into(),
                "Premium Sound System".into(),
            ],
            rating: 4.8,
            reviews: 56,
            category: Some("SUV".into()),
        },
        Cab {
            kind: "MUV".into(),
            image: Some("/images/innova.jpg".into()),
            features: vec![
                "7+1 Seater".into(),
                "USB Charging".into(),
                "Climate Control".into(),
                "Entertainment System".into(),
            ],
            rating: 4.7,
            reviews: 52,
            category: Some("MUV".into()),
        },
    ]
}

/// Response of the trip/cab-info endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TripInfoResponse {
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub tripinfo: Vec<RateTable>,
    #[serde(default)]
    pub days: u32,
    #[serde(default)]
    pub cabinfo: Vec<Cab>,
}

impl TripInfoResponse {
    /// First usable rate table carried by the response, if any.
    #[must_use]
    pub fn rate_table(&self) -> Option<RateTable> {
        self.tripinfo.first().copied().filter(RateTable::is_usable)
    }
}

/// Request body for the quote endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuoteRequest {
    #[serde(rename = "modelName")]
    pub model_name: String,
    #[serde(rename = "modelType")]
    pub model_type: String,
    pub seats: String,
    #[serde(rename = "fuelType")]
    pub fuel_type: String,
    pub availability: String,
    pub price: String,
    #[serde(rename = "pickupLocation")]
    pub pickup_location: String,
    #[serde(rename = "dropLocation")]
    pub drop_location: String,
    pub date: String,
    pub returndate: String,
    pub time: String,
    #[serde(rename = "tripType")]
    pub trip_type: String,
    pub distance: String,
    pub days: String,
}

/// Response of the quote endpoint. Only the four price fields matter here;
/// the rest of the payload echoes the request and is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QuoteResponse {
    #[serde(default)]
    pub driverrate: f64,
    #[serde(default)]
    pub gst: f64,
    #[serde(default)]
    pub service: f64,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
}

/// Request body for the booking-confirm endpoint: the quote fields plus
/// contact details, the displayed price breakdown, and an optional user id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConfirmRequest {
    #[serde(rename = "cabId")]
    pub cab_id: String,
    #[serde(rename = "modelName")]
    pub model_name: String,
    #[serde(rename = "modelType")]
    pub model_type: String,
    pub seats: String,
    #[serde(rename = "fuelType")]
    pub fuel_type: String,
    pub availability: String,
    pub price: String,
    #[serde(rename = "pickupLocation")]
    pub pickup_location: String,
    #[serde(rename = "dropLocation")]
    pub drop_location: String,
    pub date: String,
    pub returndate: String,
    pub time: String,
    #[serde(rename = "tripType")]
    pub trip_type: String,
    pub distance: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub gst: String,
    pub total: String,
    pub days: String,
    pub driverrate: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Response of the booking-confirm endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfirmResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default, rename = "bookingId")]
    pub booking_id: String,
    #[serde(default)]
    pub error: Option<String>,
}

impl ConfirmResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// JSON request body for the authentication endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoginRequest {
    pub mobile: String,
    pub password: String,
}

/// Response of the authentication endpoint. Success is keyed on
/// `status == "success"`; the alternative `message`-keyed shape seen in the
/// wild is tolerated but not treated as a success signal.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, rename = "userId")]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}
