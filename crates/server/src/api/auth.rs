use dioxus::prelude::*;
use shared_types::SessionUser;

/// Login with email and password. Sets the HTTP-only session cookie on
/// success and returns the session record for the client auth context.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String) -> Result<SessionUser, ServerFnError> {
    use crate::auth::{cookies, password as pw};
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use crate::repo::user;
    use shared_types::{AppError, LoginRequest, UserRole};
    use validator::Validate;

    let req = LoginRequest {
        email: email.clone(),
        password: password.clone(),
    };
    req.validate()
        .map_err(|e| AppError::from(e).into_server_fn_error())?;

    let pool = get_db().await;
    let row = user::find_by_email(pool, &email)
        .await
        .map_err(|e| e.into_server_fn_error())?
        .ok_or_else(|| {
            AppError::unauthorized("Invalid email or password").into_server_fn_error()
        })?;

    let valid = pw::verify_password(&password, &row.password_hash)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;
    if !valid {
        return Err(AppError::unauthorized("Invalid email or password").into_server_fn_error());
    }

    let session = SessionUser {
        name: row.name,
        email: row.email,
        role: UserRole::from_str_or_default(&row.role),
    };

    // Schedule the cookie to be set by the session middleware
    cookies::schedule_session_cookie(&session);

    tracing::info!(user = %session.email, role = %session.role, "login succeeded");
    Ok(session)
}

/// Resolve the session record for the current request.
/// Returns None when the cookie is absent or malformed.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn current_session() -> Result<Option<SessionUser>, ServerFnError> {
    Ok(crate::auth::session_from_request())
}

/// Clear the session cookie.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    crate::auth::cookies::schedule_clear_cookie();
    Ok(())
}
