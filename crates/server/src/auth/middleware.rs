use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::Response,
};

use super::cookies::{self, CookieSlot, PendingCookieAction};

/// Session middleware. For each request it:
/// 1. Decodes the session cookie (malformed → treated as absent)
/// 2. Inserts the decoded record into request extensions
/// 3. Inserts a slot so server functions can schedule cookie changes
/// 4. After the handler runs, applies any scheduled cookie change
///
/// Does NOT reject unauthenticated requests — downstream handlers decide
/// authorization.
pub async fn session_middleware(mut req: Request, next: Next) -> Response {
    if let Some(user) = cookies::extract_session(req.headers()) {
        req.extensions_mut().insert(user);
    }

    let cookie_slot = CookieSlot::default();
    req.extensions_mut().insert(cookie_slot.clone());

    let mut response = next.run(req).await;

    if let Some(action) = cookie_slot.0.lock().unwrap().take() {
        match action {
            PendingCookieAction::Set(user) => {
                response
                    .headers_mut()
                    .append(header::SET_COOKIE, cookies::build_session_cookie(&user));
            }
            PendingCookieAction::Clear => {
                response
                    .headers_mut()
                    .append(header::SET_COOKIE, cookies::build_clear_cookie());
            }
        }
    }

    response
}
