// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Page and content permission tables.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::content::ContentType;
use crate::page::Page;
use crate::role::{Role, RoleSet};

// =============================================================================
// Page Access
// =============================================================================

/// Access declaration for a single page.
///
/// Deliberately open pages are declared with [`PageAccess::Open`] rather
/// than relying on absence from the table; absence still means open at the
/// guard edge (implicit allow for unmapped pages is load-bearing behavior).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageAccess {
    /// No restriction: any authenticated session may view the page.
    Open,
    /// Only the listed roles may view the page.
    Restricted(RoleSet),
}

impl PageAccess {
    /// Returns `true` if the given role may view the page.
    pub fn allows(&self, role: Role) -> bool {
        match self {
            PageAccess::Open => true,
            PageAccess::Restricted(roles) => roles.contains(role),
        }
    }

    /// Returns the allowed role set, if the page is restricted.
    pub fn allowed_roles(&self) -> Option<&RoleSet> {
        match self {
            PageAccess::Open => None,
            PageAccess::Restricted(roles) => Some(roles),
        }
    }
}

// =============================================================================
// Access Policy
// =============================================================================

/// Static permission tables for pages and content editing.
///
/// Built once at startup and shared across all checks. The default policy
/// is the production table for the admin front-end.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    pages: Arc<HashMap<Page, PageAccess>>,
    content: Arc<HashMap<ContentType, RoleSet>>,
}

impl AccessPolicy {
    /// Creates the default policy.
    pub fn new() -> Self {
        Self::builder().with_default_tables().build()
    }

    /// Creates a policy builder.
    pub fn builder() -> AccessPolicyBuilder {
        AccessPolicyBuilder::new()
    }

    /// Returns the access declaration for a page.
    ///
    /// `None` means the page is not in the table at all, which the guard
    /// treats the same as [`PageAccess::Open`].
    pub fn page_access(&self, page: Page) -> Option<&PageAccess> {
        self.pages.get(&page)
    }

    /// Returns the roles allowed to edit the given content type.
    pub fn content_editors(&self, content: ContentType) -> Option<&RoleSet> {
        self.content.get(&content)
    }

    /// Returns `true` if the given role may view the given page.
    pub fn page_allows(&self, page: Page, role: Role) -> bool {
        match self.pages.get(&page) {
            Some(access) => access.allows(role),
            None => true,
        }
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Access Policy Builder
// =============================================================================

/// Builder for constructing access policies.
#[derive(Debug, Default)]
pub struct AccessPolicyBuilder {
    pages: HashMap<Page, PageAccess>,
    content: HashMap<ContentType, RoleSet>,
}

impl AccessPolicyBuilder {
    /// Creates a new builder with empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the production permission tables.
    pub fn with_default_tables(self) -> Self {
        self.restrict(Page::Articles, [Role::SuperAdmin, Role::ContentManager])
            .restrict(Page::ManageUsers, [Role::SuperAdmin, Role::UserManager])
            .restrict(Page::FoodCatalog, [Role::SuperAdmin, Role::FoodManager])
            .restrict(Page::ExerciseGuide, [Role::SuperAdmin, Role::ExerciseManager])
            .restrict(
                Page::ExerciseManagement,
                [Role::SuperAdmin, Role::ExerciseManager],
            )
            .restrict(Page::AdminManagement, [Role::SuperAdmin, Role::UserManager])
            .restrict(Page::Dashboard, Role::admin_roles().iter().copied())
            .editors(ContentType::Article, [Role::SuperAdmin, Role::ContentManager])
            .editors(
                ContentType::Exercise,
                [Role::SuperAdmin, Role::ExerciseManager],
            )
            .editors(ContentType::Food, [Role::SuperAdmin, Role::FoodManager])
            .editors(ContentType::User, [Role::SuperAdmin, Role::UserManager])
    }

    /// Restricts a page to the given roles.
    pub fn restrict(mut self, page: Page, roles: impl IntoIterator<Item = Role>) -> Self {
        self.pages
            .insert(page, PageAccess::Restricted(RoleSet::from_roles(roles)));
        self
    }

    /// Declares a page explicitly open to any authenticated session.
    pub fn open(mut self, page: Page) -> Self {
        self.pages.insert(page, PageAccess::Open);
        self
    }

    /// Sets the roles allowed to edit a content type.
    pub fn editors(mut self, content: ContentType, roles: impl IntoIterator<Item = Role>) -> Self {
        self.content.insert(content, RoleSet::from_roles(roles));
        self
    }

    /// Builds the policy.
    pub fn build(self) -> AccessPolicy {
        AccessPolicy {
            pages: Arc::new(self.pages),
            content: Arc::new(self.content),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_table() {
        let policy = AccessPolicy::new();

        assert!(policy.page_allows(Page::Articles, Role::ContentManager));
        assert!(!policy.page_allows(Page::Articles, Role::FoodManager));
        assert!(policy.page_allows(Page::FoodCatalog, Role::FoodManager));
        assert!(!policy.page_allows(Page::ManageUsers, Role::ContentManager));
        assert!(policy.page_allows(Page::AdminManagement, Role::UserManager));
    }

    #[test]
    fn test_super_admin_allowed_everywhere() {
        let policy = AccessPolicy::new();
        for page in Page::all() {
            assert!(policy.page_allows(*page, Role::SuperAdmin), "{page}");
        }
    }

    #[test]
    fn test_dashboard_open_to_all_admin_roles_only() {
        let policy = AccessPolicy::new();
        for role in Role::admin_roles() {
            assert!(policy.page_allows(Page::Dashboard, *role));
        }
        assert!(!policy.page_allows(Page::Dashboard, Role::User));
    }

    #[test]
    fn test_exercise_alias_shares_table_entry() {
        let policy = AccessPolicy::new();
        assert_eq!(
            policy.page_access(Page::ExerciseGuide),
            policy.page_access(Page::ExerciseManagement)
        );
    }

    #[test]
    fn test_explicitly_open_page() {
        let policy = AccessPolicy::builder().open(Page::Dashboard).build();
        assert_eq!(policy.page_access(Page::Dashboard), Some(&PageAccess::Open));
        assert!(policy.page_allows(Page::Dashboard, Role::User));
    }

    #[test]
    fn test_missing_entry_is_implicit_allow() {
        let policy = AccessPolicyBuilder::new().build();
        assert_eq!(policy.page_access(Page::Articles), None);
        assert!(policy.page_allows(Page::Articles, Role::User));
    }

    #[test]
    fn test_content_editor_table() {
        let policy = AccessPolicy::new();
        let editors = policy.content_editors(ContentType::Exercise).unwrap();
        assert!(editors.contains(Role::ExerciseManager));
        assert!(!editors.contains(Role::FoodManager));
    }
}
