use dioxus::prelude::ServerFnError;
use shared_types::AppError;

/// Convert sqlx errors into structured application errors.
pub trait SqlxErrorExt {
    fn into_app_error(self) -> AppError;
}

impl SqlxErrorExt for sqlx::Error {
    fn into_app_error(self) -> AppError {
        match self {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found"),
            sqlx::Error::Database(db_err)
                if matches!(db_err.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
            {
                AppError::conflict("A record with that identifier already exists")
            }
            other => AppError::database(other.to_string()),
        }
    }
}

/// Carry an `AppError` across the server-function boundary as JSON, so the
/// client can recover the kind and field errors with
/// `AppError::from_server_error`.
pub trait AppErrorExt {
    fn into_server_fn_error(self) -> ServerFnError;
}

impl AppErrorExt for AppError {
    fn into_server_fn_error(self) -> ServerFnError {
        match serde_json::to_string(&self) {
            Ok(json) => ServerFnError::new(json),
            Err(_) => ServerFnError::new(self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::AppErrorKind;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let err = sqlx::Error::RowNotFound.into_app_error();
        assert_eq!(err.kind, AppErrorKind::NotFound);
    }

    #[test]
    fn server_fn_error_roundtrips_through_json() {
        let original = AppError::forbidden("Admin access required");
        let wire = original.clone().into_server_fn_error().to_string();
        let recovered = AppError::from_server_error(&wire).unwrap();
        assert_eq!(recovered, original);
    }
}
