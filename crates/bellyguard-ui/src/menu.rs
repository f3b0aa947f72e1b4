// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Navigation menu permissions.
//!
//! The menu logic is split into a pure plan computation ([`plan_menu`]) and
//! a thin presentation adapter ([`MenuPresenter`]) that replays the plan
//! onto the navigation chrome. The plan side needs no browser environment,
//! so the decision rules are unit-testable in isolation.

use serde::{Deserialize, Serialize};

use bellyguard_core::role::label_for;
use bellyguard_core::{Page, Role, Session};

/// Applies a computed [`MenuPlan`] to the navigation chrome.
///
/// `hide_link` is expected to hide every navigation element pointing at the
/// link target, including an enclosing list-item container if the
/// presentation layer models one.
pub trait MenuPresenter: Send + Sync {
    /// Hides all navigation elements pointing at `href`.
    fn hide_link(&self, href: &str);

    /// Shows the role badge with the given label.
    fn show_role_badge(&self, label: &str);
}

/// The fixed menu sections and the roles that may see them.
fn sections() -> [(&'static str, &'static [Role]); 5] {
    [
        (
            Page::Articles.href(),
            &[Role::SuperAdmin, Role::ContentManager][..],
        ),
        (
            Page::ExerciseGuide.href(),
            &[Role::SuperAdmin, Role::ExerciseManager][..],
        ),
        (
            Page::ManageUsers.href(),
            &[Role::SuperAdmin, Role::UserManager][..],
        ),
        (
            Page::AdminManagement.href(),
            &[Role::SuperAdmin, Role::UserManager][..],
        ),
        (
            Page::FoodCatalog.href(),
            &[Role::SuperAdmin, Role::FoodManager][..],
        ),
    ]
}

// =============================================================================
// MenuPlan
// =============================================================================

/// What the presentation layer should do to the menu for a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuPlan {
    /// Link targets to hide, in menu order.
    pub hidden_links: Vec<String>,
    /// Role badge label to display, if the session has a role.
    pub role_badge: Option<String>,
}

impl MenuPlan {
    /// Replays the plan onto a presenter.
    pub fn apply(&self, presenter: &dyn MenuPresenter) {
        for href in &self.hidden_links {
            presenter.hide_link(href);
        }
        if let Some(label) = &self.role_badge {
            presenter.show_role_badge(label);
        }
    }
}

/// Computes the menu plan for a session.
///
/// A session without a role attribute gets an empty plan: the menu is left
/// untouched and no badge is shown. A session with an unrecognized role
/// code hides every restricted section and shows the raw code as its badge.
pub fn plan_menu(session: &Session) -> MenuPlan {
    let Some(raw_role) = session.role_code().filter(|r| !r.trim().is_empty()) else {
        return MenuPlan::default();
    };

    let role = session.parsed_role();
    let hidden_links = sections()
        .into_iter()
        .filter(|(_, allowed)| !role.is_some_and(|r| allowed.contains(&r)))
        .map(|(href, _)| href.to_string())
        .collect();

    MenuPlan {
        hidden_links,
        role_badge: Some(label_for(raw_role)),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_super_admin_sees_everything() {
        let plan = plan_menu(&Session::authenticated(Role::SuperAdmin));
        assert!(plan.hidden_links.is_empty());
        assert_eq!(plan.role_badge.as_deref(), Some("Super Admin"));
    }

    #[test]
    fn test_food_manager_keeps_only_food_section() {
        let plan = plan_menu(&Session::authenticated(Role::FoodManager));
        assert!(!plan.hidden_links.contains(&"food_catalog.html".to_string()));
        assert!(plan.hidden_links.contains(&"articles.html".to_string()));
        assert!(plan.hidden_links.contains(&"exercise_guide.html".to_string()));
        assert!(plan.hidden_links.contains(&"manage_users.html".to_string()));
        assert!(plan.hidden_links.contains(&"admin_management.html".to_string()));
    }

    #[test]
    fn test_user_manager_keeps_both_user_sections() {
        let plan = plan_menu(&Session::authenticated(Role::UserManager));
        assert!(!plan.hidden_links.contains(&"manage_users.html".to_string()));
        assert!(!plan.hidden_links.contains(&"admin_management.html".to_string()));
        assert!(plan.hidden_links.contains(&"food_catalog.html".to_string()));
    }

    #[test]
    fn test_missing_role_leaves_menu_untouched() {
        let plan = plan_menu(&Session::anonymous());
        assert_eq!(plan, MenuPlan::default());
    }

    #[test]
    fn test_unknown_role_hides_everything_with_raw_badge() {
        let plan = plan_menu(&Session::with_raw_role("bogus_role"));
        assert_eq!(plan.hidden_links.len(), 5);
        assert_eq!(plan.role_badge.as_deref(), Some("bogus_role"));
    }
}
