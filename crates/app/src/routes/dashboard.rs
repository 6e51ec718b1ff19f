use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClipboardList, LdUsers};
use dioxus_free_icons::Icon;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

/// Landing page after sign-in.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();

    let user = auth.current_user.read().clone();
    let name = user
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_else(|| "there".to_string());
    let can_manage = user
        .as_ref()
        .map(|u| u.can_manage_students())
        .unwrap_or(false);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            h2 { class: "dashboard-title", "Welcome back, {name}" }
            p { class: "dashboard-subtitle",
                "Here is an overview of your school administration tools."
            }

            div { class: "dashboard-grid",
                if can_manage {
                    Link { to: Route::StudentList {}, class: "dashboard-card-link",
                        Card {
                            CardHeader {
                                CardTitle {
                                    Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                                    " Students"
                                }
                                CardDescription { "Browse and manage the student roster" }
                            }
                            CardContent {
                                p { "View every enrolled student, search the roster, and register new students." }
                            }
                        }
                    }
                }
                Card {
                    CardHeader {
                        CardTitle {
                            Icon::<LdClipboardList> { icon: LdClipboardList, width: 18, height: 18 }
                            " Getting Started"
                        }
                        CardDescription { "Quick reference" }
                    }
                    CardContent {
                        p {
                            "Use the sidebar to move between sections. Student administration "
                            "is available to admin and principal accounts."
                        }
                    }
                }
            }
        }
    }
}
