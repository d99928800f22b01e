//! Price estimation and quote reconciliation.
//!
//! The pages show a client-computed provisional price until the backend
//! returns an authoritative quote. Reconciliation is a one-way transition:
//! once a quote arrives, the provisional estimate no longer contributes to
//! the displayed service, GST or total lines for the rest of the session.

use serde::{Deserialize, Serialize};

use crate::api::QuoteResponse;
use crate::constants::{GST_PCT, SERVICE_CHARGE_PCT};
use crate::numbers::{i64_to_f64, round_f64_to_i64};
use crate::rates::{RateTable, VehicleCategory};
use crate::trip::{TripContext, TripType};

/// Client-side price estimate for one vehicle category. Derived on every
/// render from the current trip context and rate table, never persisted as
/// authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceEstimate {
    pub category: VehicleCategory,
    #[serde(rename = "baseRate")]
    pub base_rate: f64,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    pub days: u32,
    #[serde(rename = "tripType")]
    pub trip_type: TripType,
    pub total: i64,
}

/// Compute the display price for a category.
///
/// `total = round(distance * rate * days)` for round trips; one-way trips do
/// not multiply by days (a single-leg charge). An unknown distance estimates
/// to zero; the UI separately disables reservation in that case.
#[must_use]
pub fn estimate(ctx: &TripContext, table: &RateTable, category: VehicleCategory) -> PriceEstimate {
    let distance_km = ctx.distance_km.unwrap_or(0.0).max(0.0);
    let base_rate = table.rate(category).max(0.0);
    let days = ctx.billable_days();
    let total = round_f64_to_i64(distance_km * base_rate * f64::from(days));
    PriceEstimate {
        category,
        base_rate,
        distance_km,
        days,
        trip_type: ctx.trip_type,
        total,
    }
}

/// Server-authoritative price breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingQuote {
    #[serde(rename = "driverRate")]
    pub driver_rate: i64,
    pub gst: i64,
    #[serde(rename = "serviceCharge")]
    pub service_charge: i64,
    pub total: i64,
    #[serde(rename = "isCalculated")]
    pub is_calculated: bool,
}

impl PricingQuote {
    /// Pure assignment of server fields, with 0 for anything missing.
    #[must_use]
    pub fn from_response(resp: &QuoteResponse) -> Self {
        Self {
            driver_rate: round_f64_to_i64(resp.driverrate),
            gst: round_f64_to_i64(resp.gst),
            service_charge: round_f64_to_i64(resp.service),
            total: round_f64_to_i64(resp.total),
            is_calculated: true,
        }
    }
}

/// Display-facing fare lines for the invoice page.
///
/// Holds the selected base price and, once obtained, the authoritative
/// quote. The provisional breakdown is `base + 10% service + 5% GST`, each
/// surcharge rounded to the nearest currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareState {
    #[serde(rename = "basePrice")]
    base_price: i64,
    quote: Option<PricingQuote>,
}

impl FareState {
    #[must_use]
    pub const fn new(base_price: i64) -> Self {
        Self {
            base_price,
            quote: None,
        }
    }

    #[must_use]
    pub const fn base_price(&self) -> i64 {
        self.base_price
    }

    #[must_use]
    pub const fn is_calculated(&self) -> bool {
        self.quote.is_some()
    }

    /// Replace the base price. Ignored once a quote has been reconciled:
    /// authoritative values win unconditionally for the rest of the session.
    pub fn update_base_price(&mut self, base_price: i64) {
        if self.quote.is_none() {
            self.base_price = base_price;
        }
    }

    /// Adopt the server-computed breakdown. One-way: there is no path back
    /// to the provisional lines.
    pub fn reconcile(&mut self, resp: &QuoteResponse) {
        self.quote = Some(PricingQuote::from_response(resp));
    }

    #[must_use]
    pub fn provisional_service(&self) -> i64 {
        round_f64_to_i64(i64_to_f64(self.base_price) * SERVICE_CHARGE_PCT)
    }

    #[must_use]
    pub fn provisional_gst(&self) -> i64 {
        round_f64_to_i64(i64_to_f64(self.base_price) * GST_PCT)
    }

    #[must_use]
    pub fn service(&self) -> i64 {
        self.quote
            .map_or_else(|| self.provisional_service(), |q| q.service_charge)
    }

    #[must_use]
    pub fn gst(&self) -> i64 {
        self.quote.map_or_else(|| self.provisional_gst(), |q| q.gst)
    }

    #[must_use]
    pub fn total(&self) -> i64 {
        self.quote.map_or_else(
            || self.base_price + self.provisional_service() + self.provisional_gst(),
            |q| q.total,
        )
    }

    /// Driver allowance line, shown only when the server has supplied a
    /// positive value.
    #[must_use]
    pub fn driver_rate(&self) -> Option<i64> {
        self.quote.map(|q| q.driver_rate).filter(|r| *r > 0)
    }
}
