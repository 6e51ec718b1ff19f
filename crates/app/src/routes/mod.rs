pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod students;

use crate::auth::use_auth;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdGraduationCap, LdLayoutDashboard, LdUsers};
use dioxus_free_icons::Icon;
use shared_ui::{
    Avatar, AvatarFallback, Badge, BadgeVariant, DropdownMenu, DropdownMenuContent,
    DropdownMenuItem, DropdownMenuSeparator, DropdownMenuTrigger, Navbar, Separator, Sidebar,
    SidebarContent, SidebarFooter, SidebarGroup, SidebarGroupLabel, SidebarHeader, SidebarInset,
    SidebarMenu, SidebarMenuButton, SidebarMenuItem, SidebarProvider, SidebarSeparator,
    SidebarTrigger,
};

use dashboard::Dashboard;
use login::Login;
use not_found::NotFound;
use students::create::StudentCreate;
use students::detail::StudentDetail;
use students::list::StudentList;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[redirect("/", || Route::Dashboard {})]
    #[route("/dashboard")]
    Dashboard {},
    #[route("/admin/students")]
    StudentList {},
    #[route("/admin/students/add")]
    StudentCreate {},
    #[route("/admin/students/:id")]
    StudentDetail { id: String },
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Auth guard layout, redirects to /login when there is no session.
///
/// Uses `use_server_future` with `?` to propagate suspension properly.
/// During SSR the component suspends until the session check completes, then
/// Dioxus re-renders with the resolved data embedded in the HTML.
/// A `SuspenseBoundary` in `App` catches the suspension and shows a fallback.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();

    let resource =
        use_server_future(move || async move { server::api::current_session().await })?;

    let result = resource.read().as_ref().cloned();

    match result {
        Some(Ok(Some(user))) => {
            if !auth.is_authenticated() {
                auth.set_user(user);
            }
            rsx! { Outlet::<Route> {} }
        }
        Some(Ok(None)) | Some(Err(_)) => {
            auth.clear_auth();
            navigator().push(Route::Login {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        None => {
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            }
        }
    }
}

/// Main app layout with sidebar and top navbar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();

    let user = auth.current_user.read().clone();
    let display_name = user
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_else(|| "Guest".to_string());
    let initials = user
        .as_ref()
        .map(|u| u.initials())
        .unwrap_or_else(|| "?".to_string());
    let role_label = user
        .as_ref()
        .map(|u| u.role.display_name())
        .unwrap_or("Signed out");
    let can_manage = user
        .as_ref()
        .map(|u| u.can_manage_students())
        .unwrap_or(false);

    let page_title = match &route {
        Route::Dashboard {} => "Dashboard",
        Route::StudentList {} | Route::StudentCreate {} | Route::StudentDetail { .. } => {
            "Students"
        }
        Route::Login {} => "Sign In",
        _ => "",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: true,
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 20, height: 20 }
                        span { class: "sidebar-brand-name", "Crestview" }
                    }
                }

                SidebarSeparator {}

                SidebarContent {
                    SidebarGroup {
                        SidebarGroupLabel { "Overview" }
                        SidebarMenu {
                            SidebarMenuItem {
                                Link { to: Route::Dashboard {},
                                    SidebarMenuButton { active: matches!(route, Route::Dashboard {}),
                                        Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                                        "Dashboard"
                                    }
                                }
                            }
                        }
                    }

                    if can_manage {
                        SidebarSeparator {}
                        SidebarGroup {
                            SidebarGroupLabel { "Administration" }
                            SidebarMenu {
                                SidebarMenuItem {
                                    Link { to: Route::StudentList {},
                                        SidebarMenuButton {
                                            active: matches!(
                                                route,
                                                Route::StudentList {} | Route::StudentCreate {} | Route::StudentDetail { .. }
                                            ),
                                            Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                                            "Students"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    div { class: "sidebar-footer-user",
                        span { class: "sidebar-footer-name", "{display_name}" }
                        Badge { variant: BadgeVariant::Outline, "{role_label}" }
                    }
                }
            }

            SidebarInset {
                Navbar {
                    div { class: "navbar-bar",
                        SidebarTrigger {
                            span { class: "navbar-trigger-icon", "\u{2630}" }
                        }

                        Separator { horizontal: false }

                        span { class: "navbar-title", "{page_title}" }

                        div { class: "navbar-spacer" }

                        DropdownMenu {
                            DropdownMenuTrigger {
                                Avatar {
                                    AvatarFallback { "{initials}" }
                                }
                            }
                            DropdownMenuContent {
                                DropdownMenuItem::<String> {
                                    value: "profile".to_string(),
                                    index: 0usize,
                                    div { class: "dropdown-user-info",
                                        span { class: "dropdown-user-name", "{display_name}" }
                                        span { class: "dropdown-user-role", "{role_label}" }
                                    }
                                }
                                DropdownMenuSeparator {}
                                DropdownMenuItem::<String> {
                                    value: "logout".to_string(),
                                    index: 1usize,
                                    on_select: move |_: String| {
                                        spawn(async move {
                                            let _ = server::api::logout().await;
                                        });
                                        auth.clear_auth();
                                        navigator().push(Route::Login {});
                                    },
                                    "Sign Out"
                                }
                            }
                        }
                    }
                }

                div { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
