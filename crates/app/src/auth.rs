use dioxus::prelude::*;
use shared_types::SessionUser;

/// Global authentication state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<SessionUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: SessionUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Outcome of the roster access check, decided before any view is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RosterAccess {
    Allowed,
    RedirectToLogin,
    RedirectToDashboard,
}

/// Decide whether the current user may see the student admin pages.
///
/// No session means login; a session without the admin or principal role
/// means back to the dashboard.
pub fn roster_access(session: Option<&SessionUser>) -> RosterAccess {
    match session {
        None => RosterAccess::RedirectToLogin,
        Some(user) if user.can_manage_students() => RosterAccess::Allowed,
        Some(_) => RosterAccess::RedirectToDashboard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::UserRole;

    fn user(role: UserRole) -> SessionUser {
        SessionUser {
            name: "Dana Whitfield".to_string(),
            email: "dana@crestview.edu".to_string(),
            role,
        }
    }

    #[test]
    fn no_session_redirects_to_login() {
        assert_eq!(roster_access(None), RosterAccess::RedirectToLogin);
    }

    #[test]
    fn teacher_redirects_to_dashboard() {
        let u = user(UserRole::Teacher);
        assert_eq!(roster_access(Some(&u)), RosterAccess::RedirectToDashboard);
    }

    #[test]
    fn admin_and_principal_are_allowed() {
        let admin = user(UserRole::Admin);
        let principal = user(UserRole::Principal);
        assert_eq!(roster_access(Some(&admin)), RosterAccess::Allowed);
        assert_eq!(roster_access(Some(&principal)), RosterAccess::Allowed);
    }
}
