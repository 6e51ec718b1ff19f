use dioxus::prelude::*;
use shared_types::CreateStudentRequest;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, FieldError,
    Form, FormSelect, Input, PageHeader, PageTitle, ToastOptions,
};
use std::collections::HashMap;

use crate::auth::{roster_access, use_auth, RosterAccess};
use crate::routes::Route;

/// Register a new student.
#[component]
pub fn StudentCreate() -> Element {
    let auth = use_auth();
    let toast = shared_ui::use_toast();

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

    let mut student_id = use_signal(String::new);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut gender = use_signal(|| "male".to_string());
    let mut profile_image_url = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_save = move |_: FormEvent| {
        saving.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        let image = profile_image_url.read().trim().to_string();
        let req = CreateStudentRequest {
            student_id: student_id.read().trim().to_string(),
            first_name: first_name.read().trim().to_string(),
            last_name: last_name.read().trim().to_string(),
            gender: gender.read().clone(),
            profile_image_url: if image.is_empty() { None } else { Some(image) },
        };

        spawn(async move {
            match server::api::create_student(req).await {
                Ok(student) => {
                    toast.success(
                        format!("{} added to the roster", student.full_name()),
                        ToastOptions::new(),
                    );
                    navigator().push(Route::StudentList {});
                }
                Err(e) => {
                    let err_str = e.to_string();
                    let fe = shared_types::AppError::parse_field_errors(&err_str);
                    if fe.is_empty() {
                        error_msg.set(Some(shared_types::AppError::friendly_message(&err_str)));
                    } else {
                        field_errors.set(fe);
                    }
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./students.css") }

        div { class: "container",
            PageHeader {
                PageTitle { "Add Student" }
            }

            Card {
                CardHeader {
                    CardTitle { "Student Details" }
                    CardDescription { "Register a new student in the school roster." }
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "form-error", "{err}" }
                    }

                    Form { onsubmit: handle_save,
                        Input {
                            label: "Student ID",
                            value: student_id.read().clone(),
                            placeholder: "e.g. STU-1042",
                            on_input: move |e: FormEvent| student_id.set(e.value()),
                        }
                        FieldError { message: field_errors().get("student_id").cloned() }

                        Input {
                            label: "First Name",
                            value: first_name.read().clone(),
                            on_input: move |e: FormEvent| first_name.set(e.value()),
                        }
                        FieldError { message: field_errors().get("first_name").cloned() }

                        Input {
                            label: "Last Name",
                            value: last_name.read().clone(),
                            on_input: move |e: FormEvent| last_name.set(e.value()),
                        }
                        FieldError { message: field_errors().get("last_name").cloned() }

                        FormSelect {
                            label: "Gender",
                            value: gender.read().clone(),
                            onchange: move |e: Event<FormData>| gender.set(e.value()),
                            option { value: "male", "Male" }
                            option { value: "female", "Female" }
                            option { value: "other", "Other" }
                        }
                        FieldError { message: field_errors().get("gender").cloned() }

                        Input {
                            label: "Profile Image URL (optional)",
                            value: profile_image_url.read().clone(),
                            placeholder: "https://...",
                            on_input: move |e: FormEvent| profile_image_url.set(e.value()),
                        }

                        div { class: "form-actions",
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    navigator().push(Route::StudentList {});
                                },
                                "Cancel"
                            }
                            Button {
                                variant: ButtonVariant::Primary,
                                disabled: saving(),
                                if saving() { "Saving..." } else { "Add Student" }
                            }
                        }
                    }
                }
            }
        }
    }
}
