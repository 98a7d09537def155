//! Reporter sessions carried in a signed cookie.
//!
//! A session is either anonymous (no valid cookie) or holds the reporter
//! role. The role lives in an HS256 token signed with the configured secret,
//! so nothing about sessions is kept in process memory and several reporters
//! can be logged in at once.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Redirect, Response};
use chrono::Duration;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use statusboard_domain::time::{Timestamp, now};

use crate::state::AppState;

/// Name of the cookie holding the session token.
pub const COOKIE_NAME: &str = "statusboard_session";

/// Where anonymous requests to reporter-only routes are sent.
pub const LOGIN_PATH: &str = "/reporter";

const SUBJECT: &str = "reporter";

/// Role attached to the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Anonymous,
    Reporter,
}

/// Claims stored in the session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    /// Random per-login id, only used to correlate log lines.
    pub jti: Uuid,
    pub iat: i64,
    pub exp: i64,
}

/// Failure while signing a session token.
#[derive(Debug, thiserror::Error)]
#[error("failed to sign session token")]
pub struct SessionError(#[from] jsonwebtoken::errors::Error);

/// Signing keys and cookie attributes for reporter sessions.
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
    secure_cookie: bool,
}

impl SessionKeys {
    /// Build keys from the shared signing secret.
    ///
    /// Sessions expire `ttl` after login. `secure_cookie` adds the `Secure`
    /// attribute, which browsers only honor over HTTPS.
    #[must_use]
    pub fn new(secret: &[u8], ttl: Duration, secure_cookie: bool) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.sub = Some(SUBJECT.to_string());
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl,
            secure_cookie,
        }
    }

    /// Sign a reporter token valid from now.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the token cannot be encoded.
    pub fn issue(&self) -> Result<String, SessionError> {
        self.issue_at(now())
    }

    fn issue_at(&self, at: Timestamp) -> Result<String, SessionError> {
        let claims = Claims {
            sub: SUBJECT.to_string(),
            role: Role::Reporter,
            jti: Uuid::new_v4(),
            iat: at.timestamp(),
            exp: (at + self.ttl).timestamp(),
        };
        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;
        tracing::debug!(session = %claims.jti, "reporter session issued");
        Ok(token)
    }

    /// Decode and check a token, returning its claims when valid.
    #[must_use]
    pub fn verify(&self, token: &str) -> Option<Claims> {
        match jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation) {
            Ok(data) => Some(data.claims),
            Err(err) => {
                tracing::debug!(error = %err, "ignoring invalid session token");
                None
            }
        }
    }

    /// Resolve the role carried by the request's cookies.
    #[must_use]
    pub fn role(&self, headers: &HeaderMap) -> Role {
        cookie_value(headers, COOKIE_NAME)
            .filter(|token| !token.is_empty())
            .and_then(|token| self.verify(token))
            .map_or(Role::Anonymous, |claims| claims.role)
    }

    /// `Set-Cookie` value installing `token`.
    #[must_use]
    pub fn login_cookie(&self, token: &str) -> String {
        self.cookie(token, self.ttl.num_seconds())
    }

    /// `Set-Cookie` value removing the session cookie.
    #[must_use]
    pub fn logout_cookie(&self) -> String {
        self.cookie("", 0)
    }

    fn cookie(&self, value: &str, max_age: i64) -> String {
        let secure = if self.secure_cookie { "; Secure" } else { "" };
        format!("{COOKIE_NAME}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}{secure}")
    }
}

/// Find a cookie by name across every `Cookie` header.
fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Extractor yielding the role of the current request. Never rejects.
pub struct CurrentRole(pub Role);

impl<LR> FromRequestParts<AppState<LR>> for CurrentRole
where
    LR: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<LR>,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(state.sessions.role(&parts.headers)))
    }
}

/// Extractor guarding reporter-only routes.
///
/// Anonymous requests are rejected with a redirect to the login page, before
/// the handler runs.
pub struct Reporter;

/// Rejection for [`Reporter`]: redirect to the login page.
pub struct LoginRequired;

impl IntoResponse for LoginRequired {
    fn into_response(self) -> Response {
        Redirect::to(LOGIN_PATH).into_response()
    }
}

impl<LR> FromRequestParts<AppState<LR>> for Reporter
where
    LR: Send + Sync,
{
    type Rejection = LoginRequired;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<LR>,
    ) -> Result<Self, Self::Rejection> {
        match state.sessions.role(&parts.headers) {
            Role::Reporter => Ok(Self),
            Role::Anonymous => {
                tracing::debug!(path = %parts.uri.path(), "reporter session required");
                Err(LoginRequired)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn keys() -> SessionKeys {
        SessionKeys::new(b"test-secret", Duration::hours(1), false)
    }

    fn headers_with_cookie(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn should_verify_freshly_issued_token() {
        let keys = keys();
        let token = keys.issue().unwrap();
        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.role, Role::Reporter);
        assert_eq!(claims.sub, "reporter");
    }

    #[test]
    fn should_reject_expired_token() {
        let keys = keys();
        let token = keys.issue_at(now() - Duration::hours(2)).unwrap();
        assert!(keys.verify(&token).is_none());
    }

    #[test]
    fn should_reject_token_signed_with_other_secret() {
        let other = SessionKeys::new(b"other-secret", Duration::hours(1), false);
        let token = other.issue().unwrap();
        assert!(keys().verify(&token).is_none());
    }

    #[test]
    fn should_reject_tampered_token() {
        let keys = keys();
        let mut token = keys.issue().unwrap();
        token.push('x');
        assert!(keys.verify(&token).is_none());
    }

    #[test]
    fn should_issue_distinct_session_ids() {
        let keys = keys();
        let a = keys.verify(&keys.issue().unwrap()).unwrap();
        let b = keys.verify(&keys.issue().unwrap()).unwrap();
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn should_resolve_reporter_role_from_cookie_header() {
        let keys = keys();
        let token = keys.issue().unwrap();
        let headers = headers_with_cookie(&format!("theme=dark; {COOKIE_NAME}={token}"));
        assert_eq!(keys.role(&headers), Role::Reporter);
    }

    #[test]
    fn should_resolve_anonymous_role_without_cookie() {
        assert_eq!(keys().role(&HeaderMap::new()), Role::Anonymous);
    }

    #[test]
    fn should_resolve_anonymous_role_for_cleared_cookie() {
        let headers = headers_with_cookie(&format!("{COOKIE_NAME}="));
        assert_eq!(keys().role(&headers), Role::Anonymous);
    }

    #[test]
    fn should_build_http_only_login_cookie_with_ttl() {
        let cookie = keys().login_cookie("abc");
        assert_eq!(
            cookie,
            "statusboard_session=abc; Path=/; HttpOnly; SameSite=Lax; Max-Age=3600"
        );
    }

    #[test]
    fn should_expire_cookie_immediately_on_logout() {
        let keys = SessionKeys::new(b"test-secret", Duration::hours(1), true);
        let cookie = keys.logout_cookie();
        assert!(cookie.starts_with("statusboard_session=;"));
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.ends_with("; Secure"));
    }
}
