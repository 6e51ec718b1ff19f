use dioxus::prelude::*;
use shared_types::StudentRecord;
use shared_ui::{
    Avatar, AvatarFallback, AvatarImage, Badge, BadgeVariant, Button, ButtonVariant, Card,
    CardContent, CardHeader, CardTitle, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableEmpty, DataTableHeader, DataTableRow, PageActions, PageHeader, PageTitle, Separator,
};

use crate::auth::{roster_access, use_auth, RosterAccess};
use crate::format_helpers::{capitalize, format_date_human};
use crate::routes::Route;

/// Student detail page with profile and class assignment history.
#[component]
pub fn StudentDetail(id: String) -> Element {
    let auth = use_auth();

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

    let fetch_id = id.clone();
    let resource = use_server_future(move || {
        let id = fetch_id.clone();
        async move { server::api::get_student(id).await }
    })?;

    let result = resource.read().as_ref().cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./students.css") }

        div { class: "container",
            PageHeader {
                PageTitle { "Student Profile" }
                PageActions {
                    Link { to: Route::StudentList {},
                        Button { variant: ButtonVariant::Outline, "Back to Roster" }
                    }
                }
            }

            match result {
                Some(Ok(student)) => rsx! { StudentProfile { student: student } },
                Some(Err(e)) => rsx! {
                    Card {
                        CardContent {
                            p { class: "detail-error",
                                {shared_types::AppError::friendly_message(&e.to_string())}
                            }
                        }
                    }
                },
                None => rsx! {
                    Card {
                        CardContent {
                            p { "Loading student..." }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn StudentProfile(student: StudentRecord) -> Element {
    let full_name = student.full_name();
    let initials = student.initials();
    let gender = capitalize(&student.gender);
    let class_label = student.current_class_label();
    let enrolled = format_date_human(&student.created_at.to_rfc3339());

    rsx! {
        Card {
            CardContent {
                div { class: "detail-profile",
                    Avatar {
                        if let Some(url) = student.profile_image_url.clone() {
                            AvatarImage { src: url }
                        }
                        AvatarFallback { "{initials}" }
                    }
                    div { class: "detail-identity",
                        h3 { class: "detail-name", "{full_name}" }
                        span { class: "detail-student-id", "{student.student_id}" }
                    }
                    Badge { variant: BadgeVariant::Secondary, "{class_label}" }
                }

                Separator {}

                div { class: "detail-facts",
                    div { class: "detail-fact",
                        span { class: "detail-fact-label", "Gender" }
                        span { "{gender}" }
                    }
                    div { class: "detail-fact",
                        span { class: "detail-fact-label", "Enrolled" }
                        span { "{enrolled}" }
                    }
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Class Assignments" }
            }
            CardContent {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Class" }
                        DataTableColumn { "Grade" }
                        DataTableColumn { "Academic Year" }
                    }
                    DataTableBody {
                        if student.class_assignments.is_empty() {
                            DataTableEmpty { colspan: 3,
                                "No class assignments on record."
                            }
                        }
                        for assignment in student.class_assignments.clone() {
                            DataTableRow {
                                DataTableCell {
                                    {assignment.class.as_ref().map(|c| c.name.clone()).unwrap_or_else(|| "Unknown Class".to_string())}
                                }
                                DataTableCell {
                                    {assignment.class.as_ref().and_then(|c| c.grade.as_ref()).map(|g| g.name.clone()).unwrap_or_else(|| "--".to_string())}
                                }
                                DataTableCell {
                                    {assignment.class.as_ref().map(|c| c.academic_year.to_string()).unwrap_or_else(|| "--".to_string())}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
