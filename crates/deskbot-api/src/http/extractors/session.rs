//! Session identity extractor.
//!
//! The session key lives in the `deskbot_session` cookie, not in the request
//! body. Extraction never fails: when the cookie is absent a fresh UUIDv7 key
//! is minted, and the handler attaches the matching `Set-Cookie` header so
//! the client carries it on subsequent requests.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::{HeaderMap, HeaderValue, COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use uuid::Uuid;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "deskbot_session";

/// Session identity for the current request.
pub struct SessionId {
    pub id: String,
    /// True when the id was minted for this request and the response must
    /// set the cookie.
    pub is_new: bool,
}

impl SessionId {
    /// Headers the handler must attach to the response: the `Set-Cookie`
    /// for a freshly minted session, empty otherwise.
    pub fn response_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if self.is_new {
            let cookie = format!("{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax", self.id);
            if let Ok(value) = HeaderValue::from_str(&cookie) {
                headers.insert(SET_COOKIE, value);
            }
        }
        headers
    }
}

impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(id) = session_from_headers(&parts.headers) {
            return Ok(SessionId { id, is_new: false });
        }

        Ok(SessionId {
            id: Uuid::now_v7().to_string(),
            is_new: true,
        })
    }
}

/// Pull the session key out of the `Cookie` header, if present.
fn session_from_headers(headers: &HeaderMap) -> Option<String> {
    let cookie_header = headers.get(COOKIE)?.to_str().ok()?;

    for pair in cookie_header.split(';') {
        let mut parts = pair.trim().splitn(2, '=');
        let name = parts.next()?.trim();
        if name == SESSION_COOKIE {
            let value = parts.next()?.trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }

    None
}
