//! Triplink Booking Engine
//!
//! Platform-agnostic core logic for the Triplink cab-booking front end.
//! This crate provides trip resolution, price reconciliation and the booking
//! state machines without UI or platform-specific dependencies.

pub mod api;
pub mod auth;
pub mod booking;
pub mod constants;
pub mod numbers;
pub mod pricing;
pub mod rates;
pub mod store;
pub mod trip;

// Re-export commonly used types
pub use api::{
    Cab, ConfirmRequest, ConfirmResponse, LoginRequest, LoginResponse, QuoteRequest,
    QuoteResponse, TripInfoRequest, TripInfoResponse,
};
pub use auth::{
    LoginError, LoginForm, LoginStatus, UserSession, load_session, persist_session,
    redirect_for_role, take_registration_banner,
};
pub use booking::{
    BookingController, BookingRecord, BookingStage, CarData, ContactField, ContactInfo,
    ValidationError, normalize_phone, validate_phone,
};
pub use pricing::{FareState, PriceEstimate, PricingQuote, estimate};
pub use rates::{RateTable, VehicleCategory};
pub use store::{KvStore, MemoryStore, keys};
pub use trip::{NavParams, TripContext, TripType, resolve};
