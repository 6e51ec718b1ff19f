use serde::{Deserialize, Serialize};
use std::fmt;

/// Role carried in the session record.
///
/// Stored as a lowercase string; unknown strings decode to `Teacher`, the
/// least-privileged role, via [`UserRole::from_str_or_default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Principal,
    Teacher,
}

impl UserRole {
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "admin" => UserRole::Admin,
            "principal" => UserRole::Principal,
            _ => UserRole::Teacher,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Principal => "principal",
            UserRole::Teacher => "teacher",
        }
    }

    /// Human-readable name for display in the shell.
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Principal => "Principal",
            UserRole::Teacher => "Teacher",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The identity snapshot written at login and read by the dashboard shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl SessionUser {
    /// Whether this user may see the student roster and its management actions.
    pub fn can_manage_students(&self) -> bool {
        matches!(self.role, UserRole::Admin | UserRole::Principal)
    }

    /// Up to two uppercase initials for the avatar fallback.
    /// Falls back to the first character of the email, then "U".
    pub fn initials(&self) -> String {
        let from_name: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase();
        if !from_name.is_empty() {
            return from_name;
        }
        self.email
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "U".to_string())
    }
}

/// Serialize a session record for persistence.
pub fn encode_session(user: &SessionUser) -> String {
    serde_json::to_string(user).unwrap_or_default()
}

/// Decode a persisted session record.
///
/// Malformed content is treated as "no session" rather than a fault, so a
/// corrupt record redirects to login instead of breaking the render.
pub fn decode_session(raw: &str) -> Option<SessionUser> {
    serde_json::from_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn admin() -> SessionUser {
        SessionUser {
            name: "Ada Okafor".to_string(),
            email: "ada@crestview.edu".to_string(),
            role: UserRole::Admin,
        }
    }

    #[test]
    fn session_roundtrip() {
        let user = admin();
        let encoded = encode_session(&user);
        assert_eq!(decode_session(&encoded), Some(user));
    }

    #[test]
    fn malformed_session_decodes_to_none() {
        assert_eq!(decode_session("not json"), None);
        assert_eq!(decode_session(""), None);
        assert_eq!(decode_session(r#"{"name":"x"}"#), None);
    }

    #[test]
    fn unknown_role_string_decodes_to_none() {
        // Roles outside the fixed set are rejected at the serde layer.
        let raw = r#"{"name":"X","email":"x@crestview.edu","role":"superadmin"}"#;
        assert_eq!(decode_session(raw), None);
    }

    #[test]
    fn role_from_str_defaults_to_teacher() {
        assert_eq!(UserRole::from_str_or_default("admin"), UserRole::Admin);
        assert_eq!(UserRole::from_str_or_default("principal"), UserRole::Principal);
        assert_eq!(UserRole::from_str_or_default("teacher"), UserRole::Teacher);
        assert_eq!(UserRole::from_str_or_default("janitor"), UserRole::Teacher);
    }

    #[test]
    fn privilege_gate_covers_admin_and_principal_only() {
        let mut user = admin();
        assert!(user.can_manage_students());
        user.role = UserRole::Principal;
        assert!(user.can_manage_students());
        user.role = UserRole::Teacher;
        assert!(!user.can_manage_students());
    }

    #[test]
    fn initials_come_from_name_then_email() {
        assert_eq!(admin().initials(), "AO");

        let no_name = SessionUser {
            name: String::new(),
            email: "principal@crestview.edu".to_string(),
            role: UserRole::Principal,
        };
        assert_eq!(no_name.initials(), "P");

        let empty = SessionUser {
            name: String::new(),
            email: String::new(),
            role: UserRole::Teacher,
        };
        assert_eq!(empty.initials(), "U");
    }
}
