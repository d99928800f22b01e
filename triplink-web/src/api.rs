//! HTTP client for the remote pricing/booking/authentication API.
//!
//! All booking endpoints take form-encoded POST bodies; login takes JSON.
//! Callers own their failure presentation: transport and decode problems
//! come back as [`ApiError`] and are either degraded to cached/default data
//! (trip info) or surfaced as a blocking message (confirm, login).

use serde::Serialize;
use serde::de::DeserializeOwned;
use triplink_core::api::{
    ConfirmResponse, LoginRequest, LoginResponse, QuoteRequest, QuoteResponse, TripInfoRequest,
    TripInfoResponse,
};
use triplink_core::booking::BookingRecord;

/// Production API origin.
pub const API_BASE_URL: &str = "https://api.worldtriplink.com";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("server responded with status {0}")]
    BadStatus(u16),
    #[error("could not encode request body: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}

/// Thin client over the four endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self {
            base: API_BASE_URL.to_string(),
        }
    }
}

impl ApiClient {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    async fn post_form<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let encoded = serde_urlencoded::to_string(body)?;
        let resp = gloo_net::http::Request::post(&format!("{}{path}", self.base))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(encoded)?
            .send()
            .await?;
        if !resp.ok() {
            return Err(ApiError::BadStatus(resp.status()));
        }
        Ok(resp.json::<T>().await?)
    }

    /// Quote trip/cab info for a prospective journey.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, or a body
    /// that does not decode; the caller falls back to cached or default
    /// rate data.
    pub async fn fetch_trip_info(&self, req: &TripInfoRequest) -> Result<TripInfoResponse, ApiError> {
        self.post_form("/api/cab1", req).await
    }

    /// Obtain the authoritative price breakdown for a selected vehicle.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, or an
    /// undecodable body; the provisional fare lines stay in place.
    pub async fn fetch_quote(&self, req: &QuoteRequest) -> Result<QuoteResponse, ApiError> {
        self.post_form("/api/invoice1", req).await
    }

    /// Submit the final booking.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, or an
    /// undecodable body; the booking controller surfaces a blocking message.
    pub async fn confirm_booking(&self, record: &BookingRecord) -> Result<ConfirmResponse, ApiError> {
        self.post_form("/api/bookingConfirm", record.request()).await
    }

    /// Authenticate. The response body is read even on a non-2xx status so
    /// the server's message can be surfaced; the flag reports whether the
    /// HTTP status was OK.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an undecodable body.
    pub async fn login(&self, req: &LoginRequest) -> Result<(bool, LoginResponse), ApiError> {
        let resp = gloo_net::http::Request::post(&format!("{}/auth/login1", self.base))
            .json(req)?
            .send()
            .await?;
        let ok = resp.ok();
        let body = resp.json::<LoginResponse>().await?;
        Ok((ok, body))
    }
}
