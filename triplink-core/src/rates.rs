//! Per-category base rates.
//!
//! The trip-info endpoint returns one [`RateTable`] per trip. Field names
//! follow the backend: the `MUV` display category reads the `suvplus` field
//! and `Sedan Premium` reads `sedanpremium`. Do not rename these without
//! confirming the backend contract.

use serde::{Deserialize, Serialize};

/// Vehicle class used both for display and as a key into the rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleCategory {
    Hatchback,
    Sedan,
    SedanPremium,
    Suv,
    Muv,
}

impl VehicleCategory {
    pub const ALL: [Self; 5] = [
        Self::Hatchback,
        Self::Sedan,
        Self::SedanPremium,
        Self::Suv,
        Self::Muv,
    ];

    /// Case-insensitive parse of a display label ("SUV", "Sedan Premium").
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "hatchback" => Some(Self::Hatchback),
            "sedan" => Some(Self::Sedan),
            "sedan premium" | "sedanpremium" => Some(Self::SedanPremium),
            "suv" => Some(Self::Suv),
            "muv" => Some(Self::Muv),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hatchback => "Hatchback",
            Self::Sedan => "Sedan",
            Self::SedanPremium => "Sedan Premium",
            Self::Suv => "SUV",
            Self::Muv => "MUV",
        }
    }

    /// The rate-table field this category reads.
    #[must_use]
    pub const fn rate_field(self) -> &'static str {
        match self {
            Self::Hatchback => "hatchback",
            Self::Sedan => "sedan",
            Self::SedanPremium => "sedanpremium",
            Self::Suv => "suv",
            Self::Muv => "suvplus",
        }
    }
}

/// Per-km base rate for each vehicle category, as returned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    #[serde(default)]
    pub hatchback: f64,
    #[serde(default)]
    pub sedan: f64,
    #[serde(default)]
    pub sedanpremium: f64,
    #[serde(default)]
    pub suv: f64,
    #[serde(default)]
    pub suvplus: f64,
}

impl Default for RateTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl RateTable {
    /// Hardcoded fallback rates used when no usable table is available.
    pub const DEFAULT: Self = Self {
        hatchback: 12.0,
        sedan: 15.0,
        sedanpremium: 18.0,
        suv: 21.0,
        suvplus: 26.0,
    };

    /// Base rate for a category parsed from a display label. Unknown labels
    /// fall back to a rate of 0.
    #[must_use]
    pub fn rate_for_label(&self, label: &str) -> f64 {
        VehicleCategory::from_label(label).map_or(0.0, |c| self.rate(c))
    }

    #[must_use]
    pub const fn rate(&self, category: VehicleCategory) -> f64 {
        match category {
            VehicleCategory::Hatchback => self.hatchback,
            VehicleCategory::Sedan => self.sedan,
            VehicleCategory::SedanPremium => self.sedanpremium,
            VehicleCategory::Suv => self.suv,
            VehicleCategory::Muv => self.suvplus,
        }
    }

    /// A table is usable only if at least one category rate is positive.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        [self.hatchback, self.sedan, self.sedanpremium, self.suv, self.suvplus]
            .iter()
            .any(|r| *r > 0.0)
    }

    /// Returns this table if usable, otherwise the default table wholesale.
    /// A malformed or all-zero server response is never partially merged.
    #[must_use]
    pub fn sanitized(self) -> Self {
        if self.is_usable() { self } else { Self::DEFAULT }
    }
}
