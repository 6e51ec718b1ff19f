use dioxus::prelude::*;
use shared_types::{filter_roster, StudentRecord};
use shared_ui::{
    Avatar, AvatarFallback, AvatarImage, Badge, BadgeVariant, Button, ButtonVariant, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow,
    Input, PageActions, PageHeader, PageTitle, SearchBar, Skeleton, ToastOptions,
};

use crate::auth::{roster_access, use_auth, RosterAccess};
use crate::format_helpers::capitalize;
use crate::routes::Route;

const ROSTER_COLUMNS: i64 = 5;

/// Resolve the roster fetch into the list to display and an optional
/// failure message for the toast. A failed fetch leaves the roster empty.
fn apply_fetch_result<E: std::fmt::Display>(
    result: Result<Vec<StudentRecord>, E>,
) -> (Vec<StudentRecord>, Option<String>) {
    match result {
        Ok(students) => (students, None),
        Err(e) => (
            Vec::new(),
            Some(shared_types::AppError::friendly_message(&e.to_string())),
        ),
    }
}

/// Student roster page.
///
/// The whole roster is fetched once and filtered in memory as the user
/// types, matching against first name, last name and student ID.
#[component]
pub fn StudentList() -> Element {
    let auth = use_auth();
    let toast = shared_ui::use_toast();

    // Access is decided before any view state is built.
    let access = roster_access(auth.current_user.read().as_ref());
    match access {
        RosterAccess::Allowed => {}
        RosterAccess::RedirectToLogin => {
            navigator().push(Route::Login {});
            return rsx! {};
        }
        RosterAccess::RedirectToDashboard => {
            navigator().push(Route::Dashboard {});
            return rsx! {};
        }
    }

    let mut roster = use_signal(Vec::<StudentRecord>::new);
    let mut loading = use_signal(|| true);
    let mut search_input = use_signal(String::new);

    use_future(move || async move {
        let (students, failure) = apply_fetch_result(server::api::list_students().await);
        roster.set(students);
        if let Some(message) = failure {
            toast.error(message, ToastOptions::new());
        }
        loading.set(false);
    });

    let displayed = use_memo(move || filter_roster(&roster.read(), &search_input.read()));

    let has_students = !roster.read().is_empty();
    let shown = displayed.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./students.css") }

        div { class: "container",
            PageHeader {
                PageTitle { "Students" }
                PageActions {
                    Link { to: Route::StudentCreate {},
                        Button { variant: ButtonVariant::Primary, "Add Student" }
                    }
                }
            }

            SearchBar {
                Input {
                    value: search_input.read().clone(),
                    placeholder: "Search by name or student ID...",
                    on_input: move |evt: FormEvent| search_input.set(evt.value()),
                }
            }

            if loading() {
                div { class: "roster-loading",
                    Skeleton {}
                    Skeleton {}
                    Skeleton {}
                }
            } else {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Student ID" }
                        DataTableColumn { "Name" }
                        DataTableColumn { "Gender" }
                        DataTableColumn { "Class" }
                        DataTableColumn { "Actions" }
                    }
                    DataTableBody {
                        if shown.is_empty() {
                            DataTableEmpty { colspan: ROSTER_COLUMNS,
                                if has_students {
                                    "No students match your search."
                                } else {
                                    "No students enrolled yet."
                                }
                            }
                        }
                        for student in shown {
                            StudentRow { student: student }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StudentRow(student: StudentRecord) -> Element {
    let id = student.id.to_string();
    let full_name = student.full_name();
    let initials = student.initials();
    let gender = capitalize(&student.gender);
    let class_label = student.current_class_label();
    let class_variant = if class_label == "Not Assigned" {
        BadgeVariant::Muted
    } else {
        BadgeVariant::Secondary
    };

    rsx! {
        DataTableRow {
            DataTableCell { "{student.student_id}" }
            DataTableCell {
                div { class: "roster-name-cell",
                    Avatar {
                        if let Some(url) = student.profile_image_url.clone() {
                            AvatarImage { src: url }
                        }
                        AvatarFallback { "{initials}" }
                    }
                    span { "{full_name}" }
                }
            }
            DataTableCell { "{gender}" }
            DataTableCell {
                Badge { variant: class_variant, "{class_label}" }
            }
            DataTableCell {
                Link { to: Route::StudentDetail { id },
                    Button { variant: ButtonVariant::Outline, "View" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn student(first: &str, last: &str, sid: &str) -> StudentRecord {
        StudentRecord {
            id: uuid::Uuid::new_v4(),
            student_id: sid.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            gender: "female".to_string(),
            profile_image_url: None,
            created_at: chrono::Utc::now(),
            class_assignments: vec![],
        }
    }

    #[test]
    fn successful_fetch_fills_roster_without_failure() {
        let fetched = vec![student("Amara", "Bello", "CRX-1001")];
        let (roster, failure) =
            apply_fetch_result::<String>(Ok(fetched.clone()));
        assert_eq!(roster, fetched);
        assert_eq!(failure, None);
    }

    #[test]
    fn failed_fetch_leaves_roster_empty_with_friendly_message() {
        let server_error = r#"error running server function: {"kind":"DatabaseError","message":"Could not load students"} (details: None)"#;
        let (roster, failure) =
            apply_fetch_result::<String>(Err(server_error.to_string()));
        assert!(roster.is_empty());
        assert_eq!(failure, Some("Could not load students".to_string()));
    }

    #[test]
    fn unparseable_failure_falls_back_to_generic_message() {
        let (roster, failure) =
            apply_fetch_result::<String>(Err("connection reset".to_string()));
        assert!(roster.is_empty());
        assert_eq!(
            failure,
            Some("Something went wrong. Please try again.".to_string())
        );
    }
}
