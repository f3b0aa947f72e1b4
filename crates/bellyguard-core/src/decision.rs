// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Pure access evaluation.
//!
//! [`evaluate_access`] is a total function from session, page, and policy to
//! a decision. It performs no I/O and never panics; the effectful guard
//! layer turns denials into warnings and redirects.

use serde::{Deserialize, Serialize};

use crate::error::AccessError;
use crate::page::Page;
use crate::policy::AccessPolicy;
use crate::role::{label_for, RoleSet};
use crate::session::Session;

// =============================================================================
// Decision Types
// =============================================================================

/// Why access to a page was denied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// The session is not logged in.
    NotAuthenticated,
    /// Logged in, but no role attribute. The guard clears the whole session
    /// on this path before redirecting to login.
    MissingRole,
    /// The session role is outside the page's allow-list.
    Forbidden {
        /// Raw role code held by the session.
        role: String,
        /// Roles the page permits, in table order.
        allowed: RoleSet,
    },
}

impl DenialReason {
    /// Renders the user-facing message for this denial.
    ///
    /// The forbidden message names the user, their email, the label of the
    /// role they hold, and the labels of the roles the page permits.
    pub fn message(&self, session: &Session) -> String {
        match self {
            DenialReason::NotAuthenticated => {
                "Please log in before using this page.".to_string()
            }
            DenialReason::MissingRole => {
                "No role information was found for this session.\nPlease log in again."
                    .to_string()
            }
            DenialReason::Forbidden { role, allowed } => format!(
                "You do not have permission to view this page.\n\n\
                 User: {name}\n\
                 Email: {email}\n\
                 Current role: {role_label}\n\n\
                 Permitted roles: {allowed_labels}\n\n\
                 Contact an administrator if you need access to this page.",
                name = session.display_name(),
                email = session.display_email(),
                role_label = label_for(role),
                allowed_labels = allowed.labels(),
            ),
        }
    }

    /// Converts the reason into the matching [`AccessError`].
    pub fn into_error(self) -> AccessError {
        match self {
            DenialReason::NotAuthenticated => AccessError::NotAuthenticated,
            DenialReason::MissingRole => AccessError::MissingRole,
            DenialReason::Forbidden { role, allowed } => {
                AccessError::Forbidden { role, allowed }
            }
        }
    }
}

/// Outcome of a page access evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessDecision {
    /// Access is granted.
    Granted,
    /// Access is denied for the given reason.
    Denied(DenialReason),
}

impl AccessDecision {
    /// Returns `true` if access was granted.
    pub fn is_granted(&self) -> bool {
        matches!(self, AccessDecision::Granted)
    }

    /// Returns the denial reason, if denied.
    pub fn denial(&self) -> Option<&DenialReason> {
        match self {
            AccessDecision::Granted => None,
            AccessDecision::Denied(reason) => Some(reason),
        }
    }

    /// Converts the decision into a result.
    pub fn into_result(self) -> Result<(), AccessError> {
        match self {
            AccessDecision::Granted => Ok(()),
            AccessDecision::Denied(reason) => Err(reason.into_error()),
        }
    }
}

// =============================================================================
// Evaluation
// =============================================================================

/// Decides whether the session may view the page.
///
/// `page` is `None` for page names outside the known set; such pages are
/// unrestricted once the session itself checks out. The decision procedure
/// is ordered and the first failing condition wins:
///
/// 1. not logged in
/// 2. logged in without a role attribute
/// 3. page unknown or not in the table, or page open: granted
/// 4. role in the page's allow-list: granted, otherwise forbidden
pub fn evaluate_access(
    session: &Session,
    page: Option<Page>,
    policy: &AccessPolicy,
) -> AccessDecision {
    if !session.logged_in {
        return AccessDecision::Denied(DenialReason::NotAuthenticated);
    }

    if session.is_role_missing() {
        return AccessDecision::Denied(DenialReason::MissingRole);
    }

    let allowed = match page.and_then(|p| policy.page_access(p)) {
        Some(access) => match access.allowed_roles() {
            Some(allowed) => allowed,
            // Explicitly open page.
            None => return AccessDecision::Granted,
        },
        // Unknown or unmapped page: implicit allow.
        None => return AccessDecision::Granted,
    };

    // An unrecognized role code can never be a member of the allow-list,
    // so it lands here as Forbidden rather than MissingRole.
    match session.parsed_role() {
        Some(role) if allowed.contains(role) => AccessDecision::Granted,
        _ => AccessDecision::Denied(DenialReason::Forbidden {
            role: session.role_code().unwrap_or_default().to_string(),
            allowed: allowed.clone(),
        }),
    }
}

// =============================================================================
// Tests
// =============================================================================
