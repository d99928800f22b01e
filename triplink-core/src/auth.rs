//! Login flow and the signed user-session record.
//!
//! Success is keyed on HTTP 200 plus `status == "success"` in the response
//! body. On failure only the password field is cleared; the mobile number is
//! retained for the next attempt.

use serde::{Deserialize, Serialize};

use crate::api::{LoginRequest, LoginResponse};
use crate::store::{KvStore, keys};

/// Signed user record persisted to the session scope after a login.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    #[serde(rename = "userId")]
    pub user_id: i64,
    #[serde(rename = "mobileNo")]
    pub mobile_no: String,
    pub role: String,
    #[serde(rename = "isLoggedIn")]
    pub logged_in: bool,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// Post-login landing route for a role. An explicit `redirect` navigation
/// parameter wins over the role mapping.
#[must_use]
pub fn redirect_for_role(role: &str, explicit: Option<&str>) -> String {
    if let Some(target) = explicit.filter(|t| !t.is_empty()) {
        return target.to_string();
    }
    match role {
        "ADMIN" => "/admin/dashboard".into(),
        "VENDOR" => "/vendor/dashboard".into(),
        "DRIVER" => "/driver/dashboard".into(),
        _ => "/".into(),
    }
}

/// Why a login attempt was rejected before reaching the network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Please enter your mobile number")]
    MissingMobile,
    #[error("Please enter your password")]
    MissingPassword,
    #[error("A login is already in progress")]
    SubmissionInFlight,
}

/// Where the login form currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStatus {
    Editing,
    Submitting,
    Succeeded,
}

/// State record behind the login form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    mobile: String,
    password: String,
    status: Option<LoginStatus>,
    error: Option<String>,
    banner: Option<String>,
    session: Option<UserSession>,
}

impl LoginForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Editing a field clears any stale error banner.
    pub fn set_mobile(&mut self, value: &str) {
        self.mobile = value.to_string();
        self.error = None;
    }

    pub fn set_password(&mut self, value: &str) {
        self.password = value.to_string();
        self.error = None;
    }

    /// Show a one-shot informational banner (registration hand-off).
    pub fn show_banner(&mut self, message: String) {
        self.banner = Some(message);
    }

    /// Surface an error outside the submit cycle (navigation `error` flag,
    /// pre-submit validation).
    pub fn show_error(&mut self, message: String) {
        self.error = Some(message);
    }

    /// Gate into `Submitting` and produce the request payload.
    ///
    /// # Errors
    ///
    /// Returns the first failed check, or `SubmissionInFlight` while a
    /// login is already outstanding.
    pub fn begin_submit(&mut self) -> Result<LoginRequest, LoginError> {
        match self.status() {
            LoginStatus::Submitting | LoginStatus::Succeeded => {
                return Err(LoginError::SubmissionInFlight);
            }
            LoginStatus::Editing => {}
        }
        if self.mobile.trim().is_empty() {
            return Err(LoginError::MissingMobile);
        }
        if self.password.is_empty() {
            return Err(LoginError::MissingPassword);
        }
        self.error = None;
        self.status = Some(LoginStatus::Submitting);
        Ok(LoginRequest {
            mobile: self.mobile.clone(),
            password: self.password.clone(),
        })
    }

    /// Apply the authentication response. On success the session record is
    /// built (role uppercased, `USER` default) and the status becomes
    /// terminal; otherwise the password is cleared and the server message
    /// (or a generic one) is surfaced.
    pub fn complete(&mut self, http_ok: bool, resp: &LoginResponse) {
        if self.status() == LoginStatus::Succeeded {
            return;
        }
        if http_ok && resp.is_success() {
            let role = resp
                .role
                .as_deref()
                .filter(|r| !r.is_empty())
                .map_or_else(|| "USER".to_string(), str::to_uppercase);
            let name = resp
                .name
                .clone()
                .or_else(|| resp.username.clone())
                .unwrap_or_default();
            let username = resp
                .username
                .clone()
                .or_else(|| resp.name.clone())
                .unwrap_or_default();
            self.session = Some(UserSession {
                user_id: resp.user_id.unwrap_or(0),
                mobile_no: self.mobile.clone(),
                role,
                logged_in: true,
                name,
                username,
                email: resp.email.clone().unwrap_or_default(),
            });
            self.banner = Some("Login successful! Redirecting...".into());
            self.status = Some(LoginStatus::Succeeded);
        } else {
            self.password.clear();
            self.error = Some(
                resp.message
                    .clone()
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| "Login failed. Please try again.".into()),
            );
            self.status = Some(LoginStatus::Editing);
        }
    }

    /// Transport-level failure: clear the password, surface a generic error.
    pub fn fail(&mut self) {
        if self.status() == LoginStatus::Succeeded {
            return;
        }
        self.password.clear();
        self.error = Some("An error occurred during login. Please try again.".into());
        self.status = Some(LoginStatus::Editing);
    }

    #[must_use]
    pub fn status(&self) -> LoginStatus {
        self.status.unwrap_or(LoginStatus::Editing)
    }

    #[must_use]
    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status() == LoginStatus::Submitting
    }

    #[must_use]
    pub const fn error(&self) -> Option<&String> {
        self.error.as_ref()
    }

    #[must_use]
    pub const fn banner(&self) -> Option<&String> {
        self.banner.as_ref()
    }

    #[must_use]
    pub const fn session(&self) -> Option<&UserSession> {
        self.session.as_ref()
    }
}

/// Persist the session record under the combined key and the individual
/// fields other components read.
pub fn persist_session<S: KvStore>(store: &S, session: &UserSession) {
    let mut filled = session.clone();
    // Registration leaves name/email behind for a first login that the
    // backend does not echo them on.
    if filled.username.is_empty() {
        if let Ok(Some(reg)) = store.get_raw(keys::REG_USERNAME) {
            filled.username = reg.clone();
            if filled.name.is_empty() {
                filled.name = reg;
            }
        }
    }
    if filled.email.is_empty() {
        if let Ok(Some(reg)) = store.get_raw(keys::REG_EMAIL) {
            filled.email = reg;
        }
    }
    let _ = store.set_json(keys::USER, &filled);
    let _ = store.set_raw(keys::USER_ID, &filled.user_id.to_string());
    let _ = store.set_raw(keys::MOBILE_NO, &filled.mobile_no);
    let _ = store.set_raw(keys::USER_ROLE, &filled.role);
}

/// Recover the session record, if one was persisted.
#[must_use]
pub fn load_session<S: KvStore>(store: &S) -> Option<UserSession> {
    store.get_json(keys::USER)
}

/// One-shot registration banner hand-off: read, consume, return the message.
#[must_use]
pub fn take_registration_banner<S: KvStore>(store: &S) -> Option<String> {
    let flagged = store
        .get_raw(keys::REGISTRATION_SUCCESS)
        .ok()
        .flatten()
        .is_some_and(|v| v == "true");
    if !flagged {
        return None;
    }
    let message = store
        .get_raw(keys::REGISTRATION_MESSAGE)
        .ok()
        .flatten()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| "Registration successful! Please log in.".into());
    let _ = store.remove(keys::REGISTRATION_SUCCESS);
    let _ = store.remove(keys::REGISTRATION_MESSAGE);
    Some(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn role_redirects() {
        assert_eq!(redirect_for_role("ADMIN", None), "/admin/dashboard");
        assert_eq!(redirect_for_role("VENDOR", None), "/vendor/dashboard");
        assert_eq!(redirect_for_role("DRIVER", None), "/driver/dashboard");
        assert_eq!(redirect_for_role("USER", None), "/");
        assert_eq!(redirect_for_role("ADMIN", Some("/search")), "/search");
        assert_eq!(redirect_for_role("USER", Some("")), "/");
    }

    #[test]
    fn successful_login_builds_session() {
        let mut form = LoginForm::new();
        form.set_mobile("9876543210");
        form.set_password("secret");
        form.begin_submit().unwrap();
        form.complete(
            true,
            &LoginResponse {
                status: "success".into(),
                role: Some("user".into()),
                user_id: Some(709),
                ..LoginResponse::default()
            },
        );
        assert_eq!(form.status(), LoginStatus::Succeeded);
        let session = form.session().unwrap();
        assert_eq!(session.user_id, 709);
        assert_eq!(session.role, "USER");
        assert!(session.logged_in);
        assert_eq!(session.mobile_no, "9876543210");
    }

    #[test]
    fn failed_login_clears_password_only() {
        let mut form = LoginForm::new();
        form.set_mobile("9876543210");
        form.set_password("wrong");
        form.begin_submit().unwrap();
        form.complete(
            true,
            &LoginResponse {
                status: "error".into(),
                message: Some("Invalid credentials".into()),
                ..LoginResponse::default()
            },
        );
        assert_eq!(form.status(), LoginStatus::Editing);
        assert_eq!(form.password(), "");
        assert_eq!(form.mobile(), "9876543210");
        assert_eq!(form.error().map(String::as_str), Some("Invalid credentials"));
    }

    #[test]
    fn message_keyed_shape_is_not_a_success() {
        let mut form = LoginForm::new();
        form.set_mobile("9876543210");
        form.set_password("pw");
        form.begin_submit().unwrap();
        form.complete(
            true,
            &LoginResponse {
                message: Some("Login Successful".into()),
                ..LoginResponse::default()
            },
        );
        assert_eq!(form.status(), LoginStatus::Editing);
        assert!(form.session().is_none());
    }

    #[test]
    fn session_persistence_writes_individual_keys() {
        let store = MemoryStore::new();
        persist_session(
            &store,
            &UserSession {
                user_id: 709,
                mobile_no: "9876543210".into(),
                role: "USER".into(),
                logged_in: true,
                ..UserSession::default()
            },
        );
        assert_eq!(store.get_raw(keys::USER_ID).unwrap().as_deref(), Some("709"));
        assert_eq!(store.get_raw(keys::USER_ROLE).unwrap().as_deref(), Some("USER"));
        assert_eq!(load_session(&store).unwrap().user_id, 709);
    }

    #[test]
    fn registration_fields_backfill_session() {
        let store = MemoryStore::new()
            .with(keys::REG_USERNAME, "asha")
            .with(keys::REG_EMAIL, "asha@example.com");
        persist_session(
            &store,
            &UserSession {
                user_id: 1,
                mobile_no: "9876543210".into(),
                role: "USER".into(),
                logged_in: true,
                ..UserSession::default()
            },
        );
        let loaded = load_session(&store).unwrap();
        assert_eq!(loaded.username, "asha");
        assert_eq!(loaded.name, "asha");
        assert_eq!(loaded.email, "asha@example.com");
    }

    #[test]
    fn registration_banner_is_one_shot() {
        let store = MemoryStore::new()
            .with(keys::REGISTRATION_SUCCESS, "true")
            .with(keys::REGISTRATION_MESSAGE, "Welcome aboard");
        assert_eq!(take_registration_banner(&store).as_deref(), Some("Welcome aboard"));
        assert_eq!(take_registration_banner(&store), None);
    }
}
