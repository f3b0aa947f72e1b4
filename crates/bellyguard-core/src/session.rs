// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Session identity attributes.
//!
//! A [`Session`] is an explicit value snapshotted from the host's session
//! storage, not ambient state: the decision core only ever sees this value,
//! which keeps it deterministic and testable without a simulated browser.
//!
//! A session is logically in one of two states: **anonymous** (not logged
//! in) or **authenticated**. The transition into authenticated happens in an
//! external login flow that writes the storage keys below; the transition
//! back happens on logout (full clear) or when the periodic liveness check
//! finds the logged-in flag gone. The guard itself only reads, except for
//! the full clear it performs on a corrupted (role-less) session.

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Session storage keys written by the login flow.
pub mod keys {
    /// Stored as the literal string `"true"` when logged in.
    pub const LOGGED_IN: &str = "loggedIn";
    /// Document id of the signed-in admin.
    pub const USER_ID: &str = "userId";
    /// Display name.
    pub const USER_NAME: &str = "userName";
    /// Contact email.
    pub const USER_EMAIL: &str = "userEmail";
    /// Role code (`super_admin`, `content_manager`, ...).
    pub const USER_ROLE: &str = "userRole";
}

// =============================================================================
// Session
// =============================================================================

/// Identity attributes of the current browser session.
///
/// `role` keeps the raw stored string: a logged-in session holding an
/// unrecognized role code is still *present* for the missing-role check and
/// is denied as forbidden, not treated as role-less.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Whether the stored logged-in flag was exactly `"true"`.
    pub logged_in: bool,
    /// Raw role code, if present and non-empty.
    pub role: Option<String>,
    /// User document id.
    pub user_id: Option<String>,
    /// Display name.
    pub user_name: Option<String>,
    /// Contact email.
    pub user_email: Option<String>,
}

impl Session {
    /// Creates an anonymous (logged-out) session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Creates a logged-in session with the given role.
    pub fn authenticated(role: Role) -> Self {
        Self {
            logged_in: true,
            role: Some(role.as_str().to_string()),
            ..Self::default()
        }
    }

    /// Creates a logged-in session with a raw role code.
    pub fn with_raw_role(role: impl Into<String>) -> Self {
        let raw: String = role.into();
        Self {
            logged_in: true,
            role: if raw.trim().is_empty() { None } else { Some(raw) },
            ..Self::default()
        }
    }

    /// Sets the user id.
    pub fn with_user_id(mut self, id: impl Into<String>) -> Self {
        self.user_id = Some(id.into());
        self
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.user_name = Some(name.into());
        self
    }

    /// Sets the email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.user_email = Some(email.into());
        self
    }

    /// Returns the raw role code, if any.
    pub fn role_code(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// Returns the parsed role, if the stored code is recognized.
    pub fn parsed_role(&self) -> Option<Role> {
        self.role.as_deref().and_then(Role::parse)
    }

    /// Returns `true` if the session carries no usable role attribute.
    pub fn is_role_missing(&self) -> bool {
        self.role.as_deref().map_or(true, |r| r.trim().is_empty())
    }

    /// Returns the display name, falling back to a generic label.
    pub fn display_name(&self) -> &str {
        self.user_name.as_deref().unwrap_or("user")
    }

    /// Returns the email, falling back to a dash.
    pub fn display_email(&self) -> &str {
        self.user_email.as_deref().unwrap_or("-")
    }
}

// =============================================================================
// Tests
// =============================================================================
