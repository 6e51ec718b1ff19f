use axum::http::{header, HeaderMap, HeaderValue};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use cookie::Cookie;
use shared_types::{decode_session, encode_session, SessionUser};
use std::sync::{Arc, Mutex};

/// Cookie holding the serialized session record.
pub const SESSION_COOKIE: &str = "crestview_session";

/// Session lifetime. Re-login after this simply re-issues the cookie.
const SESSION_MAX_AGE_DAYS: i64 = 7;

fn cookie_secure() -> bool {
    std::env::var("COOKIE_SECURE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

fn cookie_domain() -> Option<String> {
    std::env::var("COOKIE_DOMAIN")
        .ok()
        .filter(|d| !d.is_empty())
}

/// Encode a session record into a cookie-safe value.
///
/// The record is JSON like the original localStorage snapshot, base64url
/// wrapped so quotes and separators never leak into the Cookie header.
pub fn encode_cookie_value(user: &SessionUser) -> String {
    URL_SAFE_NO_PAD.encode(encode_session(user))
}

/// Decode a cookie value back into a session record.
/// Any failure (bad base64, bad UTF-8, bad JSON, unknown role) yields None,
/// which callers treat as "not signed in".
pub fn decode_cookie_value(raw: &str) -> Option<SessionUser> {
    let bytes = URL_SAFE_NO_PAD.decode(raw).ok()?;
    let json = String::from_utf8(bytes).ok()?;
    decode_session(&json)
}

/// Build a Set-Cookie header value carrying the session record.
pub fn build_session_cookie(user: &SessionUser) -> HeaderValue {
    let mut builder = Cookie::build((SESSION_COOKIE, encode_cookie_value(user)))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::days(SESSION_MAX_AGE_DAYS))
        .secure(cookie_secure());

    if let Some(domain) = cookie_domain() {
        builder = builder.domain(domain);
    }

    HeaderValue::from_str(&builder.build().to_string())
        .expect("cookie header value should be valid")
}

/// Build a Set-Cookie header value that clears the session cookie.
pub fn build_clear_cookie() -> HeaderValue {
    let cleared = Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::ZERO)
        .build();

    HeaderValue::from_str(&cleared.to_string()).expect("clear cookie should be valid")
}

/// Extract and decode the session record from request cookies.
pub fn extract_session(headers: &HeaderMap) -> Option<SessionUser> {
    let raw = extract_cookie(headers, SESSION_COOKIE)?;
    decode_cookie_value(&raw)
}

fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    for header_value in headers.get_all(header::COOKIE) {
        if let Ok(cookie_str) = header_value.to_str() {
            for piece in cookie_str.split(';') {
                if let Ok(c) = Cookie::parse(piece.trim().to_string()) {
                    if c.name() == name {
                        return Some(c.value().to_string());
                    }
                }
            }
        }
    }
    None
}

/// Cookie change requested by a server function, applied to the response
/// by the session middleware.
#[derive(Clone, Debug)]
pub enum PendingCookieAction {
    Set(SessionUser),
    Clear,
}

/// Shared slot for server functions to communicate cookie actions to the
/// middleware.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Option<PendingCookieAction>>>);

/// Schedule the session cookie to be set by the middleware.
/// Called from the login server function.
pub fn schedule_session_cookie(user: &SessionUser) {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            *slot.0.lock().unwrap() = Some(PendingCookieAction::Set(user.clone()));
        }
    }
}

/// Schedule the session cookie to be cleared by the middleware.
/// Called from the logout server function.
pub fn schedule_clear_cookie() {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            *slot.0.lock().unwrap() = Some(PendingCookieAction::Clear);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::UserRole;

    fn principal() -> SessionUser {
        SessionUser {
            name: "Rosa Delgado".to_string(),
            email: "rosa@crestview.edu".to_string(),
            role: UserRole::Principal,
        }
    }

    #[test]
    fn cookie_value_roundtrip() {
        let user = principal();
        let value = encode_cookie_value(&user);
        assert_eq!(decode_cookie_value(&value), Some(user));
    }

    #[test]
    fn malformed_cookie_value_decodes_to_none() {
        assert_eq!(decode_cookie_value("%%% not base64 %%%"), None);
        // Valid base64, but not a session record.
        let garbage = URL_SAFE_NO_PAD.encode("{\"role\":17}");
        assert_eq!(decode_cookie_value(&garbage), None);
    }

    #[test]
    fn extract_session_reads_the_named_cookie() {
        let user = principal();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!(
                "other=1; {}={}",
                SESSION_COOKIE,
                encode_cookie_value(&user)
            ))
            .unwrap(),
        );
        assert_eq!(extract_session(&headers), Some(user));
    }

    #[test]
    fn extract_session_without_cookie_is_none() {
        let headers = HeaderMap::new();
        assert_eq!(extract_session(&headers), None);
    }

    #[test]
    fn clear_cookie_empties_the_value() {
        let value = build_clear_cookie();
        let cookie = Cookie::parse(value.to_str().unwrap().to_string()).unwrap();
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "");
    }
}
