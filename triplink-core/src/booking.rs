//! Booking form controller.
//!
//! The invoice page drives its form through [`BookingController`], an
//! explicit state record updated by reducer-style transitions:
//! `Editing -> Submitting -> Succeeded`, with failures dropping straight
//! back to `Editing` (fields retained, server message surfaced). `Succeeded`
//! is terminal for the session.

use serde::{Deserialize, Serialize};

use crate::api::{ConfirmRequest, ConfirmResponse, FIXED_AVAILABILITY, FIXED_FUEL_TYPE, FIXED_SEATS};
use crate::constants::PHONE_DIGITS;
use crate::numbers::{parse_f64, round_f64_to_i64};
use crate::pricing::FareState;
use crate::trip::{NavParams, TripType};

/// User-entered contact details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// Strip everything but decimal digits. This runs on every keystroke, so a
/// pasted "+91 98765-43210" shrinks to its digits instead of being rejected.
#[must_use]
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Why a submission attempt was rejected before reaching the network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter your email")]
    MissingEmail,
    #[error("Phone number is required")]
    MissingPhone,
    #[error("Phone number must be exactly 10 digits")]
    PhoneNotTenDigits,
    #[error("A submission is already in progress")]
    SubmissionInFlight,
}

/// Validate an already-normalized phone value: exactly ten digits.
///
/// # Errors
///
/// Returns the field-level error to render inline.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.is_empty() {
        return Err(ValidationError::MissingPhone);
    }
    if phone.len() != PHONE_DIGITS || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PhoneNotTenDigits);
    }
    Ok(())
}

/// Contact fields addressable by the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
}

/// Where the booking form currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingStage {
    Editing,
    Submitting,
    Succeeded,
}

/// Vehicle and trip details carried from the search page to the invoice,
/// via navigation parameters with the persisted booking blob as backup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CarData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default, rename = "pickupLocation")]
    pub pickup_location: String,
    #[serde(default, rename = "dropLocation")]
    pub drop_location: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, rename = "returnDate")]
    pub return_date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default, rename = "tripType")]
    pub trip_type: TripType,
    #[serde(default)]
    pub distance: String,
    #[serde(default)]
    pub days: String,
}

impl CarData {
    /// Build from the invoice page's navigation parameters.
    #[must_use]
    pub fn from_nav(nav: &NavParams) -> Self {
        let price = nav
            .price
            .as_deref()
            .and_then(parse_f64)
            .map(round_f64_to_i64)
            .unwrap_or(0);
        Self {
            name: nav.name.clone().unwrap_or_default(),
            image: nav.image.clone().unwrap_or_default(),
            price,
            features: nav
                .features
                .as_deref()
                .map(|f| f.split(',').map(str::to_string).collect())
                .unwrap_or_default(),
            category: nav.category.clone().unwrap_or_default(),
            pickup_location: nav.pickup_location.clone().unwrap_or_default(),
            drop_location: nav.drop_location.clone().unwrap_or_default(),
            date: nav.date.clone().unwrap_or_default(),
            return_date: nav.return_date.clone().unwrap_or_default(),
            time: nav.time.clone().unwrap_or_default(),
            trip_type: TripType::parse(nav.trip_type.as_deref().unwrap_or("")),
            distance: nav.distance.clone().unwrap_or_default(),
            days: nav.days.clone().unwrap_or_default(),
        }
    }
}

/// Immutable submission payload. Created only at submit time, never mutated
/// afterwards; the server assigns the booking identifier on success.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRecord {
    request: ConfirmRequest,
}

impl BookingRecord {
    /// Assemble the payload. The submitted totals are copied from the fare
    /// lines currently displayed (provisional or authoritative), never
    /// recomputed independently.
    #[must_use]
    pub fn new(
        car: &CarData,
        contact: &ContactInfo,
        fare: &FareState,
        user_id: Option<&str>,
    ) -> Self {
        let returndate = if car.trip_type.is_round_trip() {
            if car.return_date.is_empty() {
                car.date.clone()
            } else {
                car.return_date.clone()
            }
        } else {
            String::new()
        };
        Self {
            request: ConfirmRequest {
                cab_id: car.name.clone(),
                model_name: car.name.clone(),
                model_type: car.category.clone(),
                seats: FIXED_SEATS.into(),
                fuel_type: FIXED_FUEL_TYPE.into(),
                availability: FIXED_AVAILABILITY.into(),
                price: fare.base_price().to_string(),
                pickup_location: car.pickup_location.clone(),
                drop_location: car.drop_location.clone(),
                date: car.date.clone(),
                returndate,
                time: car.time.clone(),
                trip_type: car.trip_type.as_str().into(),
                distance: car.distance.clone(),
                name: contact.name.clone(),
                email: contact.email.clone(),
                phone: contact.phone.clone(),
                service: fare.service().to_string(),
                gst: fare.gst().to_string(),
                total: fare.total().to_string(),
                days: car.days.clone(),
                driverrate: fare.driver_rate().unwrap_or(0).to_string(),
                user_id: user_id.unwrap_or_default().to_string(),
            },
        }
    }

    #[must_use]
    pub const fn request(&self) -> &ConfirmRequest {
        &self.request
    }
}

/// State record behind the invoice booking form.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingController {
    stage: BookingStage,
    contact: ContactInfo,
    phone_error: Option<ValidationError>,
    error: Option<String>,
    booking_id: Option<String>,
    locked: bool,
}

impl Default for BookingController {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingController {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stage: BookingStage::Editing,
            contact: ContactInfo {
                name: String::new(),
                email: String::new(),
                phone: String::new(),
            },
            phone_error: None,
            error: None,
            booking_id: None,
            locked: false,
        }
    }

    /// Pre-fill from the cached session record. Only empty fields are
    /// touched; anything the user already typed takes precedence.
    pub fn prefill(&mut self, cached: &ContactInfo) {
        if self.contact.name.is_empty() {
            self.contact.name = cached.name.clone();
        }
        if self.contact.email.is_empty() {
            self.contact.email = cached.email.clone();
        }
        if self.contact.phone.is_empty() {
            self.contact.phone = normalize_phone(&cached.phone);
        }
    }

    /// Apply a keystroke. Phone input is normalized to digits and validated
    /// incrementally; edits are ignored once the contact fields are locked.
    pub fn set_field(&mut self, field: ContactField, value: &str) {
        if self.locked || self.stage == BookingStage::Succeeded {
            return;
        }
        match field {
            ContactField::Name => self.contact.name = value.to_string(),
            ContactField::Email => self.contact.email = value.to_string(),
            ContactField::Phone => {
                let digits = normalize_phone(value);
                self.phone_error = validate_phone(&digits).err();
                self.contact.phone = digits;
            }
        }
    }

    /// Lock the contact fields. Called once a quote has been reconciled:
    /// the price was computed against this exact contact triplet, so later
    /// edits would desynchronize quote and booking.
    pub fn lock_contact(&mut self) {
        self.locked = true;
    }

    /// Gate into `Submitting`. On any validation failure the stage stays
    /// `Editing`: phone problems surface inline, name/email problems as a
    /// blocking alert.
    ///
    /// # Errors
    ///
    /// Returns the first failed check, or `SubmissionInFlight` when a
    /// submission is already outstanding.
    pub fn begin_submit(&mut self) -> Result<(), ValidationError> {
        match self.stage {
            BookingStage::Submitting => return Err(ValidationError::SubmissionInFlight),
            BookingStage::Succeeded => return Err(ValidationError::SubmissionInFlight),
            BookingStage::Editing => {}
        }
        if let Err(err) = validate_phone(&self.contact.phone) {
            self.phone_error = Some(err.clone());
            return Err(err);
        }
        if self.contact.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.contact.email.trim().is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        self.phone_error = None;
        self.error = None;
        self.stage = BookingStage::Submitting;
        Ok(())
    }

    /// Apply the confirm response. Success captures the server-issued
    /// booking id and is terminal; anything else drops back to `Editing`
    /// with the server message (or a generic one) surfaced. Contact fields
    /// are always retained.
    pub fn complete(&mut self, resp: &ConfirmResponse) {
        if self.stage == BookingStage::Succeeded {
            return;
        }
        if resp.is_success() {
            self.booking_id = Some(resp.booking_id.clone());
            self.error = None;
            self.stage = BookingStage::Succeeded;
        } else {
            self.error = Some(
                resp.error
                    .clone()
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| "Failed to complete booking. Please try again.".into()),
            );
            self.stage = BookingStage::Editing;
        }
    }

    /// Transport-level failure: no response to read, same presentation path.
    pub fn fail(&mut self, message: Option<String>) {
        if self.stage == BookingStage::Succeeded {
            return;
        }
        self.error = Some(
            message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "Failed to complete booking. Please try again.".into()),
        );
        self.stage = BookingStage::Editing;
    }

    #[must_use]
    pub const fn stage(&self) -> &BookingStage {
        &self.stage
    }

    #[must_use]
    pub const fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    #[must_use]
    pub const fn phone_error(&self) -> Option<&ValidationError> {
        self.phone_error.as_ref()
    }

    #[must_use]
    pub const fn error(&self) -> Option<&String> {
        self.error.as_ref()
    }

    #[must_use]
    pub const fn booking_id(&self) -> Option<&String> {
        self.booking_id.as_ref()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.stage == BookingStage::Submitting
    }

    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.stage == BookingStage::Succeeded
    }

    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_controller() -> BookingController {
        let mut c = BookingController::new();
        c.set_field(ContactField::Name, "Asha");
        c.set_field(ContactField::Email, "asha@example.com");
        c.set_field(ContactField::Phone, "9876543210");
        c
    }

    #[test]
    fn phone_normalization_strips_non_digits() {
        assert_eq!(normalize_phone("+91 98765-43210"), "919876543210");
        assert_eq!(normalize_phone("abc"), "");
    }

    #[test]
    fn phone_validation_requires_exactly_ten_digits() {
        assert!(validate_phone("9876543210").is_ok());
        assert_eq!(validate_phone(""), Err(ValidationError::MissingPhone));
        assert_eq!(validate_phone("12345"), Err(ValidationError::PhoneNotTenDigits));
        assert_eq!(
            validate_phone("12345678901"),
            Err(ValidationError::PhoneNotTenDigits)
        );
    }

    #[test]
    fn incremental_phone_edit_tracks_field_error() {
        let mut c = BookingController::new();
        c.set_field(ContactField::Phone, "98a76");
        assert_eq!(c.contact().phone, "9876");
        assert_eq!(c.phone_error(), Some(&ValidationError::PhoneNotTenDigits));
        c.set_field(ContactField::Phone, "9876543210");
        assert_eq!(c.phone_error(), None);
    }

    #[test]
    fn submit_gate_blocks_invalid_forms() {
        let mut c = BookingController::new();
        assert_eq!(c.begin_submit(), Err(ValidationError::MissingPhone));
        assert_eq!(*c.stage(), BookingStage::Editing);

        c.set_field(ContactField::Phone, "9876543210");
        assert_eq!(c.begin_submit(), Err(ValidationError::MissingName));

        c.set_field(ContactField::Name, "Asha");
        assert_eq!(c.begin_submit(), Err(ValidationError::MissingEmail));

        c.set_field(ContactField::Email, "asha@example.com");
        assert!(c.begin_submit().is_ok());
        assert!(c.is_submitting());
    }

    #[test]
    fn duplicate_submission_is_rejected_while_in_flight() {
        let mut c = valid_controller();
        c.begin_submit().unwrap();
        assert_eq!(c.begin_submit(), Err(ValidationError::SubmissionInFlight));
    }

    #[test]
    fn success_is_terminal_and_exposes_booking_id() {
        let mut c = valid_controller();
        c.begin_submit().unwrap();
        c.complete(&ConfirmResponse {
            status: "success".into(),
            booking_id: "WTL123".into(),
            error: None,
        });
        assert!(c.succeeded());
        assert_eq!(c.booking_id().map(String::as_str), Some("WTL123"));

        // A late failure response must not re-enter the form.
        c.fail(None);
        assert!(c.succeeded());
    }

    #[test]
    fn failure_returns_to_editing_with_fields_retained() {
        let mut c = valid_controller();
        c.begin_submit().unwrap();
        c.complete(&ConfirmResponse {
            status: "error".into(),
            booking_id: String::new(),
            error: Some("slot unavailable".into()),
        });
        assert_eq!(*c.stage(), BookingStage::Editing);
        assert_eq!(c.error().map(String::as_str), Some("slot unavailable"));
        assert_eq!(c.contact().name, "Asha");
        assert_eq!(c.contact().phone, "9876543210");
    }

    #[test]
    fn locked_contact_ignores_edits() {
        let mut c = valid_controller();
        c.lock_contact();
        c.set_field(ContactField::Name, "Someone Else");
        assert_eq!(c.contact().name, "Asha");
    }

    #[test]
    fn prefill_never_overwrites_user_input() {
        let mut c = BookingController::new();
        c.set_field(ContactField::Name, "Typed");
        c.prefill(&ContactInfo {
            name: "Cached".into(),
            email: "cached@example.com".into(),
            phone: "98765 43210".into(),
        });
        assert_eq!(c.contact().name, "Typed");
        assert_eq!(c.contact().email, "cached@example.com");
        assert_eq!(c.contact().phone, "9876543210");
    }
}
