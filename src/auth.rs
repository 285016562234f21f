//! Session gating. Sign-in and token issuance belong to the external identity
//! provider; this only decides which side of the gate a request is on.

use actix_web::HttpRequest;

use crate::config::Settings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    SignedIn { session: String },
    SignedOut { redirect_to: String },
}

impl AuthState {
    pub fn signed_in(session: impl Into<String>) -> Self {
        AuthState::SignedIn {
            session: session.into(),
        }
    }

    pub fn signed_out(redirect_to: impl Into<String>) -> Self {
        AuthState::SignedOut {
            redirect_to: redirect_to.into(),
        }
    }

    /// A request is signed in when it carries a non-empty session cookie.
    pub fn from_request(req: &HttpRequest, settings: &Settings) -> Self {
        match req.cookie(&settings.session_cookie) {
            Some(cookie) if !cookie.value().is_empty() => Self::signed_in(cookie.value()),
            _ => Self::signed_out(settings.sign_in_url.clone()),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, AuthState::SignedIn { .. })
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            AuthState::SignedOut { redirect_to } => Some(redirect_to),
            AuthState::SignedIn { .. } => None,
        }
    }
}
