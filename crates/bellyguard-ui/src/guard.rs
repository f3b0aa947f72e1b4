// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! The access guard facade.
//!
//! [`AccessGuard`] is the surface every admin page invokes on load. It
//! snapshots the session store, runs the pure decision core, and performs
//! the warn/redirect side effects on denial. All collaborators are injected
//! traits, so the guard runs unchanged under tests and in real hosts.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use bellyguard_core::{
    evaluate_access, label_for, AccessDecision, AccessPolicy, ContentType, DenialReason, Page,
    Role, Session,
};

use crate::config::GuardConfig;
use crate::effects::{Navigator, Notifier};
use crate::menu::{plan_menu, MenuPresenter};
use crate::store::{snapshot_session, SessionStore};

// =============================================================================
// Role Requirement
// =============================================================================

/// A single role or a set of acceptable roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleRequirement {
    /// The session role must equal this role.
    Single(Role),
    /// The session role must be one of these roles.
    AnyOf(Vec<Role>),
}

impl From<Role> for RoleRequirement {
    fn from(role: Role) -> Self {
        RoleRequirement::Single(role)
    }
}

impl From<Vec<Role>> for RoleRequirement {
    fn from(roles: Vec<Role>) -> Self {
        RoleRequirement::AnyOf(roles)
    }
}

impl From<&[Role]> for RoleRequirement {
    fn from(roles: &[Role]) -> Self {
        RoleRequirement::AnyOf(roles.to_vec())
    }
}

impl<const N: usize> From<[Role; N]> for RoleRequirement {
    fn from(roles: [Role; N]) -> Self {
        RoleRequirement::AnyOf(roles.to_vec())
    }
}

// =============================================================================
// Current User
// =============================================================================

/// Snapshot of the signed-in user, as exposed to page scripts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User document id.
    pub id: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Raw role code.
    pub role: Option<String>,
    /// Whether the session is logged in.
    pub logged_in: bool,
}

impl From<Session> for CurrentUser {
    fn from(session: Session) -> Self {
        Self {
            id: session.user_id,
            name: session.user_name,
            email: session.user_email,
            role: session.role,
            logged_in: session.logged_in,
        }
    }
}

// =============================================================================
// AccessGuard
// =============================================================================

/// Page-access guard for the admin front-end.
///
/// This is an advisory UI gate: the role it reads is client-held state
/// written by the login flow, not a server-verified credential. It decides
/// what to show and where to send the user, nothing more.
pub struct AccessGuard {
    policy: AccessPolicy,
    config: GuardConfig,
    session: Arc<dyn SessionStore>,
    persistent: Option<Arc<dyn SessionStore>>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    presenter: Arc<dyn MenuPresenter>,
}

impl AccessGuard {
    /// Creates a guard with the default policy and configuration.
    pub fn new(
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        presenter: Arc<dyn MenuPresenter>,
    ) -> Self {
        Self {
            policy: AccessPolicy::new(),
            config: GuardConfig::default(),
            session,
            persistent: None,
            navigator,
            notifier,
            presenter,
        }
    }

    /// Replaces the access policy.
    pub fn with_policy(mut self, policy: AccessPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: GuardConfig) -> Self {
        self.config = config;
        self
    }

    /// Attaches a persistent (profile-scoped) store that secure logout
    /// clears alongside the session store.
    pub fn with_persistent_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.persistent = Some(store);
        self
    }

    /// Returns the guard configuration.
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Returns the access policy.
    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    /// Snapshots the current session.
    pub fn session(&self) -> Session {
        snapshot_session(self.session.as_ref())
    }

    // =========================================================================
    // Page access
    // =========================================================================

    /// Checks whether the current session may view `page`.
    ///
    /// On denial, and only when `redirect` is true: warns the user and
    /// navigates to the login page (unauthenticated or role-less session;
    /// the latter also clears the whole session store) or to the dashboard
    /// (role outside the allow-list). Never panics; calling it again under
    /// the same session repeats the side effects.
    pub fn check_page_access(&self, page: Page, redirect: bool) -> bool {
        self.check(Some(page), page.as_str(), redirect)
    }

    /// Checks access for a page named by an arbitrary string.
    ///
    /// Names outside the known page set are unrestricted: once the session
    /// is logged in and carries a role, access is granted.
    pub fn check_page_access_named(&self, name: &str, redirect: bool) -> bool {
        self.check(Page::parse(name), name, redirect)
    }

    fn check(&self, page: Option<Page>, page_name: &str, redirect: bool) -> bool {
        let session = self.session();
        let decision = evaluate_access(&session, page, &self.policy);

        match &decision {
            AccessDecision::Granted => {
                debug!(page = page_name, role = ?session.role_code(), "access granted");
                true
            }
            AccessDecision::Denied(reason) => {
                warn!(page = page_name, reason = ?reason, "access denied");
                if redirect {
                    self.deny(reason, &session);
                }
                false
            }
        }
    }

    fn deny(&self, reason: &DenialReason, session: &Session) {
        self.notifier.warn(&reason.message(session));
        match reason {
            DenialReason::NotAuthenticated => {
                self.navigator.navigate_to(&self.config.login_url);
            }
            DenialReason::MissingRole => {
                // A role-less session is treated as corrupted: wipe it.
                self.session.clear();
                self.navigator.navigate_to(&self.config.login_url);
            }
            DenialReason::Forbidden { .. } => {
                self.navigator.navigate_to(&self.config.dashboard_url);
            }
        }
    }

    // =========================================================================
    // Role queries
    // =========================================================================

    /// Returns `true` if the session role is present and satisfies the
    /// requirement. No side effects.
    pub fn has_permission(&self, requirement: impl Into<RoleRequirement>) -> bool {
        let Some(role) = self.session().parsed_role() else {
            return false;
        };
        match requirement.into() {
            RoleRequirement::Single(required) => role == required,
            RoleRequirement::AnyOf(required) => required.contains(&role),
        }
    }

    /// Returns `true` if the session role may edit the given content type.
    pub fn can_edit_content(&self, content: ContentType) -> bool {
        match self.policy.content_editors(content) {
            Some(editors) => self
                .session()
                .parsed_role()
                .is_some_and(|role| editors.contains(role)),
            None => false,
        }
    }

    /// String entry point for content editing checks; unknown tags deny.
    pub fn can_edit_content_named(&self, tag: &str) -> bool {
        match ContentType::parse(tag) {
            Some(content) => self.can_edit_content(content),
            None => false,
        }
    }

    /// Returns the human-readable label for a raw role code.
    pub fn role_label(&self, raw: &str) -> String {
        label_for(raw)
    }

    /// Returns a snapshot of the signed-in user.
    pub fn current_user(&self) -> CurrentUser {
        self.session().into()
    }

    // =========================================================================
    // Menu and logout
    // =========================================================================

    /// Hides the navigation sections the session role may not see and shows
    /// the role badge.
    ///
    /// A session without a role leaves the menu untouched.
    pub fn setup_menu_permissions(&self) {
        let session = self.session();
        let plan = plan_menu(&session);
        if plan == Default::default() {
            warn!("no role in session, leaving menu untouched");
            return;
        }
        debug!(
            role = ?session.role_code(),
            hidden = plan.hidden_links.len(),
            "applying menu permissions"
        );
        plan.apply(self.presenter.as_ref());
    }

    /// Asks for confirmation and, if confirmed, clears the session and
    /// persistent stores and navigates to the login page.
    ///
    /// Returns `true` if the user confirmed and was logged out.
    pub fn secure_logout(&self) -> bool {
        if !self.notifier.confirm("Log out of the system?") {
            return false;
        }
        info!("logging out, clearing session state");
        self.session.clear();
        if let Some(persistent) = &self.persistent {
            persistent.clear();
        }
        self.navigator.navigate_to(&self.config.login_url);
        true
    }
}
