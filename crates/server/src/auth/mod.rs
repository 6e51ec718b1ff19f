pub mod cookies;
pub mod middleware;
pub mod password;

use shared_types::{AppError, SessionUser};

/// Read the session record for the current server-function request.
///
/// The session middleware decodes the cookie ahead of time and stashes the
/// record in request extensions; direct cookie parsing is the fallback for
/// requests that did not pass through it.
pub fn session_from_request() -> Option<SessionUser> {
    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();

    if let Some(user) = parts.extensions.get::<SessionUser>() {
        return Some(user.clone());
    }

    cookies::extract_session(&parts.headers)
}

/// Guard for the student endpoints: a session must exist and its role must
/// be in the privileged set. The client applies the same gate before
/// rendering; this keeps it from being client-only.
pub fn require_roster_access() -> Result<SessionUser, AppError> {
    let user =
        session_from_request().ok_or_else(|| AppError::unauthorized("Not signed in"))?;
    if !user.can_manage_students() {
        return Err(AppError::forbidden("Admin access required"));
    }
    Ok(user)
}
