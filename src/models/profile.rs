use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Student,
    Parent,
    Driver,
}

impl UserRole {
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Parent => "parent",
            UserRole::Driver => "driver",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "student" | "s" => Some(UserRole::Student),
            "parent" | "p" => Some(UserRole::Parent),
            "driver" | "d" => Some(UserRole::Driver),
            _ => None,
        }
    }
}

/// Persisted user profile. Survives a session reset; removed only by
/// `reset --all`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub role: UserRole,
    pub name: String,
    #[serde(default)]
    pub student_phone: String,
    #[serde(default)]
    pub parent_phone: String,
    /// Whether the rider has an active shuttle application.
    #[serde(default)]
    pub is_applied: bool,
}

impl UserProfile {
    pub fn new(role: UserRole, name: &str) -> Self {
        Self {
            role,
            name: name.to_string(),
            student_phone: String::new(),
            parent_phone: String::new(),
            is_applied: false,
        }
    }
}
