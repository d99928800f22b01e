//! Trip context resolution.
//!
//! A page receives trip parameters through navigation, but earlier pages may
//! already have resolved some of them. [`resolve`] merges both sources into a
//! canonical [`TripContext`] and writes the distance back to the store so
//! later pages (the invoice) can recover it without network access. The
//! resolver never fails; missing inputs degrade to documented defaults.

use serde::{Deserialize, Serialize};

use crate::numbers::{parse_f64, parse_u32};
use crate::store::{KvStore, keys};

/// Whether the journey returns to the pickup point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum TripType {
    #[default]
    OneWay,
    RoundTrip,
}

impl TripType {
    /// Lenient parse. Exactly two spellings mean round trip; anything else,
    /// including an empty or missing value, is one way.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "roundTrip" | "round-trip" => Self::RoundTrip,
            _ => Self::OneWay,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneWay => "oneWay",
            Self::RoundTrip => "roundTrip",
        }
    }

    #[must_use]
    pub const fn is_round_trip(self) -> bool {
        matches!(self, Self::RoundTrip)
    }
}

impl From<String> for TripType {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<TripType> for &'static str {
    fn from(tt: TripType) -> Self {
        tt.as_str()
    }
}

/// Raw navigation parameters as they arrive in the page URL. Everything is
/// optional; the resolver supplies defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavParams {
    pub pickup: Option<String>,
    pub drop: Option<String>,
    #[serde(rename = "pickupLocation")]
    pub pickup_location: Option<String>,
    #[serde(rename = "dropLocation")]
    pub drop_location: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "returnDate")]
    pub return_date: Option<String>,
    pub time: Option<String>,
    #[serde(rename = "tripType")]
    pub trip_type: Option<String>,
    pub distance: Option<String>,
    pub days: Option<String>,
    // Extras carried to the invoice page alongside the trip parameters.
    pub name: Option<String>,
    pub image: Option<String>,
    pub price: Option<String>,
    pub features: Option<String>,
    pub category: Option<String>,
}

/// The resolved set of parameters describing one prospective journey.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TripContext {
    pub pickup: String,
    pub drop: String,
    pub date: String,
    #[serde(rename = "returnDate")]
    pub return_date: String,
    pub time: String,
    #[serde(rename = "tripType")]
    pub trip_type: TripType,
    /// `None` means unknown, not zero: the UI must disable the reserve
    /// action rather than price a zero-length trip.
    #[serde(rename = "distanceKm")]
    pub distance_km: Option<f64>,
    pub days: u32,
}

impl TripContext {
    /// Days the fare scales by: round trips multiply by the rental days,
    /// one-way trips are a single-leg charge.
    #[must_use]
    pub fn billable_days(&self) -> u32 {
        if self.trip_type.is_round_trip() {
            self.days.max(1)
        } else {
            1
        }
    }
}

fn fmt_distance(km: f64) -> String {
    if km.fract() == 0.0 {
        crate::numbers::round_f64_to_i64(km).to_string()
    } else {
        format!("{km}")
    }
}

fn positive(raw: Option<&str>) -> Option<f64> {
    raw.and_then(parse_f64).filter(|v| *v > 0.0)
}

/// Merge navigation parameters with the persisted cache into a canonical
/// trip context.
///
/// Distance precedence: a positive navigation parameter wins; the cached
/// distance is used only when the parameter is absent or zero; with neither,
/// the distance stays unknown. Every resolved distance is written back so
/// subsequent pages observe it without re-supplying it.
pub fn resolve<S: KvStore>(nav: &NavParams, store: &S) -> TripContext {
    let trip_type = TripType::parse(nav.trip_type.as_deref().unwrap_or(""));

    let distance_km = positive(nav.distance.as_deref()).or_else(|| {
        store
            .get_raw(keys::DISTANCE)
            .ok()
            .flatten()
            .as_deref()
            .and_then(parse_f64)
            .filter(|v| *v > 0.0)
    });
    if let Some(km) = distance_km {
        let _ = store.set_raw(keys::DISTANCE, &fmt_distance(km));
    }

    let days = nav
        .days
        .as_deref()
        .and_then(parse_u32)
        .filter(|d| *d > 0)
        .or_else(|| store.get_json::<u32>(keys::TRIP_DAYS).filter(|d| *d > 0))
        .unwrap_or(1);

    let date = nav.date.clone().unwrap_or_default();
    let mut return_date = nav.return_date.clone().unwrap_or_default();
    if trip_type.is_round_trip() && return_date.is_empty() {
        return_date = date.clone();
    }

    TripContext {
        pickup: nav
            .pickup
            .clone()
            .or_else(|| nav.pickup_location.clone())
            .unwrap_or_default(),
        drop: nav
            .drop
            .clone()
            .or_else(|| nav.drop_location.clone())
            .unwrap_or_default(),
        date,
        return_date,
        time: nav.time.clone().unwrap_or_default(),
        trip_type,
        distance_km,
        days,
    }
}
