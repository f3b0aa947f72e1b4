// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Access error taxonomy.

use thiserror::Error;

use crate::role::RoleSet;

/// Result type alias for access checks.
pub type AccessResult<T> = Result<T, AccessError>;

/// Why an access check was denied.
///
/// All three variants are terminal for the page being checked: none are
/// retried, and the guard surfaces each as a blocking message plus a
/// redirect unless the caller suppressed side effects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The session is not logged in.
    #[error("not authenticated")]
    NotAuthenticated,

    /// Logged in, but the session carries no role attribute. Treated as a
    /// corrupted session: the guard clears all session state on this path.
    #[error("session has no role attribute")]
    MissingRole,

    /// Authenticated with a role outside the page's allow-list.
    #[error("role '{role}' is not permitted (allowed: {allowed})")]
    Forbidden {
        /// Raw role code held by the session.
        role: String,
        /// Roles the page permits.
        allowed: RoleSet,
    },
}
