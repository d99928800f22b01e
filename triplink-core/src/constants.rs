//! Fixed behavioral knobs shared by the pages.

/// How often the search page refreshes trip and rate data, in milliseconds.
pub const PRICE_POLL_INTERVAL_MS: u32 = 30_000;

/// Delay before leaving the invoice page after a confirmed booking.
pub const BOOKING_REDIRECT_DELAY_MS: u32 = 3_000;

/// Delay before leaving the login page after a successful login.
pub const LOGIN_REDIRECT_DELAY_MS: u32 = 2_000;

/// Provisional service charge applied before a server quote arrives.
pub const SERVICE_CHARGE_PCT: f64 = 0.10;

/// Provisional GST applied before a server quote arrives.
pub const GST_PCT: f64 = 0.05;

/// Distance substituted when the trip-info endpoint is unreachable and no
/// cached distance exists.
pub const FALLBACK_DISTANCE_KM: f64 = 100.0;

/// Required length of a contact phone number, digits only.
pub const PHONE_DIGITS: usize = 10;
