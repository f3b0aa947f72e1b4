// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Role definitions for the admin access guard.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Role
// =============================================================================

/// Privilege classes recognized by the admin front-end.
///
/// The string form of each role is the snake_case code stored in the
/// session (`super_admin`, `content_manager`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Unrestricted access to every admin page.
    SuperAdmin,
    /// Manages articles and editorial content.
    ContentManager,
    /// Manages user accounts and role assignments.
    UserManager,
    /// Manages the food catalog.
    FoodManager,
    /// Manages the exercise guide.
    ExerciseManager,
    /// Regular application user with no admin pages.
    User,
}

impl Role {
    /// Returns the role code as stored in the session.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::ContentManager => "content_manager",
            Role::UserManager => "user_manager",
            Role::FoodManager => "food_manager",
            Role::ExerciseManager => "exercise_manager",
            Role::User => "user",
        }
    }

    /// Parses a role from its session code.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "super_admin" => Some(Role::SuperAdmin),
            "content_manager" => Some(Role::ContentManager),
            "user_manager" => Some(Role::UserManager),
            "food_manager" => Some(Role::FoodManager),
            "exercise_manager" => Some(Role::ExerciseManager),
            "user" => Some(Role::User),
            _ => None,
        }
    }

    /// Returns the fixed human-readable label for this role.
    pub fn label(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::ContentManager => "Content Manager",
            Role::UserManager => "User Manager",
            Role::FoodManager => "Food Manager",
            Role::ExerciseManager => "Exercise Manager",
            Role::User => "User",
        }
    }

    /// Returns all roles.
    pub fn all() -> &'static [Role] {
        &[
            Role::SuperAdmin,
            Role::ContentManager,
            Role::UserManager,
            Role::FoodManager,
            Role::ExerciseManager,
            Role::User,
        ]
    }

    /// Returns the roles with access to the admin dashboard.
    pub fn admin_roles() -> &'static [Role] {
        &[
            Role::SuperAdmin,
            Role::ContentManager,
            Role::UserManager,
            Role::FoodManager,
            Role::ExerciseManager,
        ]
    }

    /// Returns `true` if this role is an admin-facing role.
    pub fn is_admin(&self) -> bool {
        !matches!(self, Role::User)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns the human-readable label for a raw role code.
///
/// Known codes map to their fixed label; unknown codes are returned
/// unchanged (identity fallback), so the function is total and never fails.
pub fn label_for(raw: &str) -> String {
    match Role::parse(raw) {
        Some(role) => role.label().to_string(),
        None => raw.to_string(),
    }
}

// =============================================================================
// Role Set
// =============================================================================

/// An ordered set of roles.
///
/// Insertion order is preserved so that rendered role lists (denial
/// messages, policy listings) are deterministic and follow declaration
/// order rather than hash order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSet {
    roles: Vec<Role>,
}

impl RoleSet {
    /// Creates an empty role set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a role set from a list of roles.
    pub fn from_roles(roles: impl IntoIterator<Item = Role>) -> Self {
        let mut set = Self::new();
        for role in roles {
            set.add(role);
        }
        set
    }

    /// Adds a role to the set. Duplicates are ignored.
    pub fn add(&mut self, role: Role) {
        if !self.roles.contains(&role) {
            self.roles.push(role);
        }
    }

    /// Returns `true` if the set contains the given role.
    pub fn contains(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Returns `true` if the set contains any of the given roles.
    pub fn contains_any(&self, roles: &[Role]) -> bool {
        roles.iter().any(|r| self.contains(*r))
    }

    /// Returns the number of roles in the set.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Returns an iterator over the roles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Role> {
        self.roles.iter()
    }

    /// Renders the human-readable labels of the roles, comma separated.
    pub fn labels(&self) -> String {
        self.roles
            .iter()
            .map(|r| r.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        Self::from_roles(iter)
    }
}

impl From<&[Role]> for RoleSet {
    fn from(roles: &[Role]) -> Self {
        Self::from_roles(roles.iter().copied())
    }
}

impl fmt::Display for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<&str> = self.roles.iter().map(|r| r.as_str()).collect();
        write!(f, "{}", codes.join(", "))
    }
}

// =============================================================================
// Tests
// =============================================================================
