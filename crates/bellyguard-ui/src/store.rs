// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Session storage seam.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use bellyguard_core::session::{keys, Session};

// =============================================================================
// SessionStore
// =============================================================================

/// Flat, string-valued key/value store scoped to the browser session.
///
/// The store is last-writer-wins with a single writer (the login/logout
/// flow); the guard only reads and clears. `set` exists for the login flow
/// and for tests.
pub trait SessionStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    fn set(&self, key: &str, value: &str);

    /// Removes every key in the store.
    fn clear(&self);
}

/// Snapshots the store into an explicit [`Session`] value.
///
/// The logged-in flag is true only when the stored string is exactly
/// `"true"`; a blank role string counts as absent.
pub fn snapshot_session(store: &dyn SessionStore) -> Session {
    let non_blank = |v: String| if v.trim().is_empty() { None } else { Some(v) };
    Session {
        logged_in: store.get(keys::LOGGED_IN).as_deref() == Some("true"),
        role: store.get(keys::USER_ROLE).and_then(non_blank),
        user_id: store.get(keys::USER_ID).and_then(non_blank),
        user_name: store.get(keys::USER_NAME).and_then(non_blank),
        user_email: store.get(keys::USER_EMAIL).and_then(non_blank),
    }
}

// =============================================================================
// MemorySessionStore
// =============================================================================

/// In-memory [`SessionStore`] backed by a lock-protected map.
///
/// This is the store used in tests and in non-browser hosts; a browser host
/// adapts its own storage behind the trait instead.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store wrapped in an `Arc`.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Writes the standard keys for a logged-in session.
    pub fn login(&self, role: &str, user_id: &str, name: &str, email: &str) {
        self.set(keys::LOGGED_IN, "true");
        self.set(keys::USER_ROLE, role);
        self.set(keys::USER_ID, user_id);
        self.set(keys::USER_NAME, name);
        self.set(keys::USER_EMAIL, email);
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.write().insert(key.to_string(), value.to_string());
    }

    fn clear(&self) {
        self.entries.write().clear();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bellyguard_core::Role;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemorySessionStore::new();
        store.set(keys::USER_ROLE, "food_manager");
        assert_eq!(store.get(keys::USER_ROLE).as_deref(), Some("food_manager"));
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_snapshot_full_session() {
        let store = MemorySessionStore::new();
        store.login("food_manager", "u-1", "Anan", "anan@example.com");

        let session = snapshot_session(&store);
        assert!(session.logged_in);
        assert_eq!(session.parsed_role(), Some(Role::FoodManager));
        assert_eq!(session.user_name.as_deref(), Some("Anan"));
    }

    #[test]
    fn test_snapshot_requires_exact_true() {
        let store = MemorySessionStore::new();
        store.set(keys::LOGGED_IN, "TRUE");
        assert!(!snapshot_session(&store).logged_in);

        store.set(keys::LOGGED_IN, "false");
        assert!(!snapshot_session(&store).logged_in);

        store.set(keys::LOGGED_IN, "true");
        assert!(snapshot_session(&store).logged_in);
    }

    #[test]
    fn test_snapshot_blank_fields_absent() {
        let store = MemorySessionStore::new();
        store.set(keys::LOGGED_IN, "true");
        store.set(keys::USER_ROLE, "  ");
        let session = snapshot_session(&store);
        assert!(session.is_role_missing());
        assert_eq!(session.user_email, None);
    }
}
