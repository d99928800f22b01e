//! Query-string plumbing between pages.

use serde::Deserialize;
use triplink_core::trip::NavParams;
use yew_router::prelude::Location;

/// Decode the navigation parameters carried in the current URL. Unknown or
/// missing keys simply come back as `None`; a malformed query degrades to an
/// empty parameter set rather than failing the page.
#[must_use]
pub fn nav_params(location: Option<&Location>) -> NavParams {
    location
        .and_then(|loc| loc.query::<NavParams>().ok())
        .unwrap_or_default()
}

/// Parameters the login page reads from its URL.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LoginQuery {
    /// Any non-empty value means a prior attempt was rejected upstream.
    #[serde(default)]
    pub error: Option<String>,
    /// Post-login destination overriding the role mapping.
    #[serde(default)]
    pub redirect: Option<String>,
}

/// Decode the login page's query parameters.
#[must_use]
pub fn login_query(location: Option<&Location>) -> LoginQuery {
    location
        .and_then(|loc| loc.query::<LoginQuery>().ok())
        .unwrap_or_default()
}
