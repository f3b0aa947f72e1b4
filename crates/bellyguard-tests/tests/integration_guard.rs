// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Guard Integration Tests
//!
//! End-to-end checks of [`AccessGuard`] against mocked collaborators:
//!
//! - `test_access_*`: page access decisions and their side effects
//! - `test_permission_*`: role queries and content editing
//! - `test_logout_*`: secure logout
//! - `test_user_*`: current-user snapshots and role labels

use bellyguard_core::{ContentType, Page, Role};
use bellyguard_tests::common::init_test_logging;
use bellyguard_tests::prelude::*;

fn harness_for(role: Role) -> GuardHarness {
    init_test_logging();
    GuardBuilder::new()
        .store(SessionFixtures::logged_in(role))
        .build()
}

// =============================================================================
// Page Access
// =============================================================================

#[test]
fn test_access_granted_fires_no_side_effects() {
    let h = harness_for(Role::FoodManager);

    assert!(h.guard.check_page_access(Page::FoodCatalog, true));
    h.assert_no_side_effects();
}

#[test]
fn test_access_forbidden_warns_and_redirects_to_dashboard() {
    let h = harness_for(Role::ContentManager);

    assert!(!h.guard.check_page_access(Page::ManageUsers, true));
    h.assert_warned_containing(&[
        "Siri",
        "siri@example.com",
        "Content Manager",
        "Super Admin, User Manager",
    ]);
    h.assert_navigated_to("dashboard.html");
}

#[test]
fn test_access_not_logged_in_redirects_to_login() {
    init_test_logging();
    // The role in the store is irrelevant once the flag is not "true".
    let h = GuardBuilder::new()
        .store(SessionFixtures::logged_out_flag(Role::SuperAdmin))
        .build();

    for page in Page::all() {
        assert!(!h.guard.check_page_access(*page, false));
    }
    assert!(!h.guard.check_page_access(Page::Dashboard, true));
    h.assert_navigated_to("login_admin.html");
}

#[test]
fn test_access_missing_role_clears_session_and_redirects() {
    init_test_logging();
    let h = GuardBuilder::new()
        .store(SessionFixtures::logged_in_without_role())
        .build();

    assert!(!h.guard.check_page_access(Page::Dashboard, true));
    h.assert_session_cleared();
    h.assert_navigated_to("login_admin.html");
}

#[test]
fn test_access_redirect_suppressed_means_no_effects_at_all() {
    let h = harness_for(Role::ContentManager);

    assert!(!h.guard.check_page_access(Page::ManageUsers, false));
    h.assert_no_side_effects();

    let h = GuardBuilder::new().store(SessionFixtures::anonymous()).build();
    assert!(!h.guard.check_page_access(Page::Dashboard, false));
    h.assert_no_side_effects();
}

#[test]
fn test_access_unknown_page_name_is_unrestricted() {
    let h = harness_for(Role::User);

    assert!(h.guard.check_page_access_named("release_notes", true));
    h.assert_no_side_effects();
}

#[test]
fn test_access_unknown_page_still_requires_login() {
    init_test_logging();
    let h = GuardBuilder::new().store(SessionFixtures::anonymous()).build();

    assert!(!h.guard.check_page_access_named("release_notes", true));
    h.assert_navigated_to("login_admin.html");
}

#[test]
fn test_access_unrecognized_role_code_is_forbidden_with_raw_label() {
    init_test_logging();
    let h = GuardBuilder::new()
        .store(SessionFixtures::logged_in_with_raw_role("bogus_role"))
        .build();

    assert!(!h.guard.check_page_access(Page::Dashboard, true));
    h.assert_warned_containing(&["bogus_role"]);
    h.assert_navigated_to("dashboard.html");
    // Forbidden never clears the session; only a missing role does.
    assert_eq!(h.store.clear_count(), 0);
}

#[test]
fn test_access_repeated_denials_repeat_side_effects() {
    let h = harness_for(Role::ContentManager);

    assert!(!h.guard.check_page_access(Page::ManageUsers, true));
    assert!(!h.guard.check_page_access(Page::ManageUsers, true));

    assert_eq!(h.notifier.warnings().len(), 2);
    assert_eq!(h.navigator.visited().len(), 2);
}

#[test]
fn test_access_custom_urls_are_honored() {
    init_test_logging();
    let config = bellyguard_ui::GuardConfig::new()
        .with_login_url("signin.html")
        .with_dashboard_url("home.html");
    let h = GuardBuilder::new()
        .store(SessionFixtures::logged_in(Role::ContentManager))
        .config(config)
        .build();

    assert!(!h.guard.check_page_access(Page::ManageUsers, true));
    h.assert_navigated_to("home.html");
}

// =============================================================================
// Role Queries
// =============================================================================

#[test]
fn test_permission_single_role_requires_exact_match() {
    let h = harness_for(Role::FoodManager);

    assert!(h.guard.has_permission(Role::FoodManager));
    assert!(!h.guard.has_permission(Role::SuperAdmin));
    h.assert_no_side_effects();
}

#[test]
fn test_permission_role_set_requires_membership() {
    let h = harness_for(Role::FoodManager);

    assert!(h.guard.has_permission([Role::SuperAdmin, Role::FoodManager]));
    assert!(!h.guard.has_permission([Role::SuperAdmin, Role::UserManager]));
    assert!(!h.guard.has_permission(Vec::<Role>::new()));
}

#[test]
fn test_permission_absent_role_always_denies() {
    init_test_logging();
    let h = GuardBuilder::new()
        .store(SessionFixtures::logged_in_without_role())
        .build();

    assert!(!h.guard.has_permission(Role::SuperAdmin));
    assert!(!h.guard.has_permission([Role::SuperAdmin, Role::User]));
    h.assert_no_side_effects();
}

#[test]
fn test_permission_content_editing_matrix() {
    let h = harness_for(Role::ExerciseManager);
    assert!(h.guard.can_edit_content(ContentType::Exercise));
    assert!(!h.guard.can_edit_content(ContentType::Food));

    let h = harness_for(Role::FoodManager);
    assert!(!h.guard.can_edit_content(ContentType::Exercise));
    assert!(h.guard.can_edit_content(ContentType::Food));

    let h = harness_for(Role::SuperAdmin);
    for content in ContentType::all() {
        assert!(h.guard.can_edit_content(*content), "{content}");
    }
}

#[test]
fn test_permission_unknown_content_tag_denies() {
    let h = harness_for(Role::SuperAdmin);
    assert!(h.guard.can_edit_content_named("exercise"));
    assert!(!h.guard.can_edit_content_named("bogus_type"));
}

// =============================================================================
// Logout
// =============================================================================

#[test]
fn test_logout_confirmed_clears_both_stores_and_redirects() {
    init_test_logging();
    let h = GuardBuilder::new()
        .store(SessionFixtures::logged_in(Role::SuperAdmin))
        .with_persistent_store()
        .build();

    assert!(h.guard.secure_logout());
    h.assert_session_cleared();
    let persistent = h.persistent.as_ref().unwrap();
    assert!(persistent.is_empty());
    h.assert_navigated_to("login_admin.html");
}

#[test]
fn test_logout_declined_changes_nothing() {
    init_test_logging();
    let h = GuardBuilder::new()
        .store(SessionFixtures::logged_in(Role::SuperAdmin))
        .confirm_answer(false)
        .build();

    assert!(!h.guard.secure_logout());
    assert_eq!(h.store.clear_count(), 0);
    h.assert_not_navigated();
    assert_eq!(h.notifier.confirms().len(), 1);
}

// =============================================================================
// Current User
// =============================================================================

#[test]
fn test_user_snapshot_reflects_store() {
    let h = harness_for(Role::UserManager);

    let user = h.guard.current_user();
    assert!(user.logged_in);
    assert_eq!(user.id.as_deref(), Some("admin-001"));
    assert_eq!(user.name.as_deref(), Some("Siri"));
    assert_eq!(user.role.as_deref(), Some("user_manager"));
}

#[test]
fn test_user_snapshot_of_empty_store() {
    init_test_logging();
    let h = GuardBuilder::new().store(SessionFixtures::anonymous()).build();

    let user = h.guard.current_user();
    assert!(!user.logged_in);
    assert_eq!(user.role, None);
}

#[test]
fn test_user_role_labels() {
    let h = harness_for(Role::User);

    assert_eq!(h.guard.role_label("super_admin"), "Super Admin");
    assert_eq!(h.guard.role_label("exercise_manager"), "Exercise Manager");
    assert_eq!(h.guard.role_label("made_up"), "made_up");
}
