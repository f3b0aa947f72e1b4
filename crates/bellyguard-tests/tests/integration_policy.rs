// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Policy Integration Tests
//!
//! Property-style checks of the default permission tables through the full
//! guard, plus custom policies through the builder:
//!
//! - `test_table_*`: the grant matrix of the default tables
//! - `test_policy_*`: builder-made policies

use bellyguard_core::{AccessPolicy, Page, PageAccess, Role};
use bellyguard_tests::common::init_test_logging;
use bellyguard_tests::prelude::*;

fn harness_for(role: Role) -> GuardHarness {
    init_test_logging();
    GuardBuilder::new()
        .store(SessionFixtures::logged_in(role))
        .build()
}

// =============================================================================
// Default Table Matrix
// =============================================================================

/// For every mapped page, the guard grants exactly the roles in the table.
#[test]
fn test_table_grant_matrix_matches_policy() {
    let policy = AccessPolicy::new();

    for role in Role::all() {
        let h = harness_for(*role);
        for page in Page::all() {
            let expected = match policy.page_access(*page) {
                Some(PageAccess::Restricted(allowed)) => allowed.contains(*role),
                Some(PageAccess::Open) | None => true,
            };
            assert_eq!(
                h.guard.check_page_access(*page, false),
                expected,
                "role {role} on page {page}"
            );
        }
    }
}

#[test]
fn test_table_unmapped_names_grant_for_every_role() {
    for role in Role::all() {
        let h = harness_for(*role);
        assert!(h.guard.check_page_access_named("anything_else", false));
        assert!(h.guard.check_page_access_named("", false));
    }
}

#[test]
fn test_table_regular_user_is_locked_out_of_admin_pages() {
    let h = harness_for(Role::User);
    for page in Page::all() {
        assert!(!h.guard.check_page_access(*page, false), "{page}");
    }
}

#[test]
fn test_table_exercise_alias_grants_like_exercise_guide() {
    let h = harness_for(Role::ExerciseManager);
    assert!(h.guard.check_page_access(Page::ExerciseGuide, false));
    assert!(h.guard.check_page_access(Page::ExerciseManagement, false));

    let h = harness_for(Role::FoodManager);
    assert!(!h.guard.check_page_access(Page::ExerciseGuide, false));
    assert!(!h.guard.check_page_access(Page::ExerciseManagement, false));
}

// =============================================================================
// Custom Policies
// =============================================================================

#[test]
fn test_policy_explicitly_open_page_admits_any_role() {
    init_test_logging();
    let policy = AccessPolicy::builder()
        .with_default_tables()
        .open(Page::Dashboard)
        .build();

    let h = GuardBuilder::new()
        .store(SessionFixtures::logged_in(Role::User))
        .policy(policy)
        .build();

    assert!(h.guard.check_page_access(Page::Dashboard, true));
    h.assert_no_side_effects();
}

#[test]
fn test_policy_empty_tables_fall_open_but_still_require_login() {
    init_test_logging();
    let policy = AccessPolicy::builder().build();

    let h = GuardBuilder::new()
        .store(SessionFixtures::logged_in(Role::User))
        .policy(policy.clone())
        .build();
    assert!(h.guard.check_page_access(Page::ManageUsers, false));
    // The content table is empty too: editing denies everywhere.
    assert!(!h.guard.can_edit_content_named("food"));

    let h = GuardBuilder::new()
        .store(SessionFixtures::anonymous())
        .policy(policy)
        .build();
    assert!(!h.guard.check_page_access(Page::ManageUsers, false));
}

#[test]
fn test_policy_tightened_page_overrides_default() {
    init_test_logging();
    let policy = AccessPolicy::builder()
        .with_default_tables()
        .restrict(Page::FoodCatalog, [Role::SuperAdmin])
        .build();

    let h = GuardBuilder::new()
        .store(SessionFixtures::logged_in(Role::FoodManager))
        .policy(policy)
        .build();

    assert!(!h.guard.check_page_access(Page::FoodCatalog, true));
    h.assert_warned_containing(&["Food Manager", "Super Admin"]);
    h.assert_navigated_to("dashboard.html");
}
