// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Test Fixtures
//!
//! Pre-built session store states for consistent and reproducible testing.
//! Each fixture represents one of the session shapes the original login
//! flow produces (or fails to produce).

use bellyguard_core::session::keys;
use bellyguard_core::Role;

use super::mocks::MockSessionStore;

/// Fixture providing standard session store states.
pub struct SessionFixtures;

impl SessionFixtures {
    /// A logged-in session for the given role with standard identity.
    pub fn logged_in(role: Role) -> MockSessionStore {
        MockSessionStore::with_entries([
            (keys::LOGGED_IN, "true"),
            (keys::USER_ROLE, role.as_str()),
            (keys::USER_ID, "admin-001"),
            (keys::USER_NAME, "Siri"),
            (keys::USER_EMAIL, "siri@example.com"),
        ])
    }

    /// A session that never logged in (empty store).
    pub fn anonymous() -> MockSessionStore {
        MockSessionStore::new()
    }

    /// A store with the logged-in flag explicitly set to `"false"`.
    pub fn logged_out_flag(role: Role) -> MockSessionStore {
        MockSessionStore::with_entries([
            (keys::LOGGED_IN, "false"),
            (keys::USER_ROLE, role.as_str()),
        ])
    }

    /// A corrupted session: logged in but with no role attribute.
    pub fn logged_in_without_role() -> MockSessionStore {
        MockSessionStore::with_entries([
            (keys::LOGGED_IN, "true"),
            (keys::USER_ID, "admin-002"),
            (keys::USER_NAME, "Nok"),
        ])
    }

    /// A logged-in session holding an unrecognized role code.
    pub fn logged_in_with_raw_role(raw_role: &str) -> MockSessionStore {
        MockSessionStore::with_entries([
            (keys::LOGGED_IN, "true"),
            (keys::USER_ROLE, raw_role),
            (keys::USER_NAME, "Siri"),
            (keys::USER_EMAIL, "siri@example.com"),
        ])
    }
}
