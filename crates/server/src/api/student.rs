use dioxus::prelude::*;
use shared_types::{CreateStudentRequest, StudentRecord};

/// Fetch the full student roster, each student joined with its class
/// assignments, classes and grades, ordered by last name ascending.
/// No pagination and no server-side filtering: the roster view holds the
/// whole list in memory and filters there.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_students() -> Result<Vec<StudentRecord>, ServerFnError> {
    use crate::auth::require_roster_access;
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use crate::repo::student;

    require_roster_access().map_err(|e| e.into_server_fn_error())?;

    let pool = get_db().await;
    let roster = student::list_with_assignments(pool)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    Ok(roster)
}

/// Get a single student by ID with assignment history.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_student(id: String) -> Result<StudentRecord, ServerFnError> {
    use crate::auth::require_roster_access;
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use crate::repo::student;
    use shared_types::AppError;
    use uuid::Uuid;

    require_roster_access().map_err(|e| e.into_server_fn_error())?;

    let uuid = Uuid::parse_str(&id)
        .map_err(|_| AppError::bad_request("Invalid student id").into_server_fn_error())?;

    let pool = get_db().await;
    let record = student::find_by_id(pool, uuid)
        .await
        .map_err(|e| e.into_server_fn_error())?
        .ok_or_else(|| AppError::not_found("Student not found").into_server_fn_error())?;

    Ok(record)
}

/// Register a new student.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn create_student(req: CreateStudentRequest) -> Result<StudentRecord, ServerFnError> {
    use crate::auth::require_roster_access;
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use crate::repo::student;
    use shared_types::AppError;
    use validator::Validate;

    require_roster_access().map_err(|e| e.into_server_fn_error())?;

    req.validate()
        .map_err(|e| AppError::from(e).into_server_fn_error())?;

    let pool = get_db().await;
    let record = student::create(pool, req)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    tracing::info!(student = %record.student_id, "student created");
    Ok(record)
}
