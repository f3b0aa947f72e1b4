// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Protected page identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The admin pages known to the access guard.
///
/// Page-name strings that do not parse to a variant are treated as
/// unrestricted by the guard (implicit allow for unmapped pages).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// Article management.
    Articles,
    /// User account management.
    ManageUsers,
    /// Food catalog management.
    FoodCatalog,
    /// Exercise guide management.
    ExerciseGuide,
    /// Alias page sharing the exercise guide policy.
    ExerciseManagement,
    /// Role assignment management.
    AdminManagement,
    /// Admin landing page.
    Dashboard,
}

impl Page {
    /// Returns the page key as used by the permission table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Articles => "articles",
            Page::ManageUsers => "manage_users",
            Page::FoodCatalog => "food_catalog",
            Page::ExerciseGuide => "exercise_guide",
            Page::ExerciseManagement => "exercise_management",
            Page::AdminManagement => "admin_management",
            Page::Dashboard => "dashboard",
        }
    }

    /// Parses a page from its key string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "articles" => Some(Page::Articles),
            "manage_users" => Some(Page::ManageUsers),
            "food_catalog" => Some(Page::FoodCatalog),
            "exercise_guide" => Some(Page::ExerciseGuide),
            "exercise_management" => Some(Page::ExerciseManagement),
            "admin_management" => Some(Page::AdminManagement),
            "dashboard" => Some(Page::Dashboard),
            _ => None,
        }
    }

    /// Returns the link target for this page in the navigation chrome.
    pub fn href(&self) -> &'static str {
        match self {
            Page::Articles => "articles.html",
            Page::ManageUsers => "manage_users.html",
            Page::FoodCatalog => "food_catalog.html",
            Page::ExerciseGuide | Page::ExerciseManagement => "exercise_guide.html",
            Page::AdminManagement => "admin_management.html",
            Page::Dashboard => "dashboard.html",
        }
    }

    /// Returns all pages.
    pub fn all() -> &'static [Page] {
        &[
            Page::Articles,
            Page::ManageUsers,
            Page::FoodCatalog,
            Page::ExerciseGuide,
            Page::ExerciseManagement,
            Page::AdminManagement,
            Page::Dashboard,
        ]
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
