// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Mock Collaborators
//!
//! Recording mock implementations of the guard's collaborator traits.
//!
//! ## Design Principles
//!
//! - Every interaction is recorded for verification
//! - Configurable behavior (confirm answers, current location)
//! - Thread-safe so the same mocks work under the liveness watcher

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::{Mutex, RwLock};

use bellyguard_ui::{MenuPresenter, Navigator, Notifier, SessionStore};

// =============================================================================
// Mock Session Store
// =============================================================================

/// A [`SessionStore`] that counts reads, writes, and clears.
#[derive(Debug, Default)]
pub struct MockSessionStore {
    entries: RwLock<HashMap<String, String>>,
    get_count: AtomicU64,
    set_count: AtomicU64,
    clear_count: AtomicU64,
}

impl MockSessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with the given entries.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        {
            let mut map = store.entries.write();
            for (k, v) in entries {
                map.insert(k.to_string(), v.to_string());
            }
        }
        store
    }

    /// Number of `get` calls observed.
    pub fn get_count(&self) -> u64 {
        self.get_count.load(Ordering::SeqCst)
    }

    /// Number of `set` calls observed.
    pub fn set_count(&self) -> u64 {
        self.set_count.load(Ordering::SeqCst)
    }

    /// Number of `clear` calls observed.
    pub fn clear_count(&self) -> u64 {
        self.clear_count.load(Ordering::SeqCst)
    }

    /// Returns `true` if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl SessionStore for MockSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.get_count.fetch_add(1, Ordering::SeqCst);
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.set_count.fetch_add(1, Ordering::SeqCst);
        self.entries.write().insert(key.to_string(), value.to_string());
    }

    fn clear(&self) {
        self.clear_count.fetch_add(1, Ordering::SeqCst);
        self.entries.write().clear();
    }
}

// =============================================================================
// Mock Navigator
// =============================================================================

/// A [`Navigator`] that records every redirect.
#[derive(Debug, Default)]
pub struct MockNavigator {
    location: Mutex<String>,
    visited: Mutex<Vec<String>>,
}

impl MockNavigator {
    /// Creates a navigator with an empty location.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a navigator positioned at the given URL.
    pub fn at(location: impl Into<String>) -> Self {
        let nav = Self::new();
        *nav.location.lock() = location.into();
        nav
    }

    /// Sets the current location without recording a visit.
    pub fn set_location(&self, location: impl Into<String>) {
        *self.location.lock() = location.into();
    }

    /// Every URL navigated to, in order.
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().clone()
    }

    /// The most recent redirect target, if any.
    pub fn last_visited(&self) -> Option<String> {
        self.visited.lock().last().cloned()
    }
}

impl Navigator for MockNavigator {
    fn navigate_to(&self, url: &str) {
        *self.location.lock() = url.to_string();
        self.visited.lock().push(url.to_string());
    }

    fn current_location(&self) -> String {
        self.location.lock().clone()
    }
}

// =============================================================================
// Mock Notifier
// =============================================================================

/// A [`Notifier`] that records warnings and answers confirms from a flag.
#[derive(Debug)]
pub struct MockNotifier {
    warnings: Mutex<Vec<String>>,
    confirms: Mutex<Vec<String>>,
    confirm_answer: AtomicBool,
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self {
            warnings: Mutex::new(Vec::new()),
            confirms: Mutex::new(Vec::new()),
            confirm_answer: AtomicBool::new(true),
        }
    }
}

impl MockNotifier {
    /// Creates a notifier that answers "yes" to confirms.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the answer returned by `confirm`.
    pub fn answer_confirms_with(&self, answer: bool) {
        self.confirm_answer.store(answer, Ordering::SeqCst);
    }

    /// Every warning shown, in order.
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().clone()
    }

    /// Every confirm prompt shown, in order.
    pub fn confirms(&self) -> Vec<String> {
        self.confirms.lock().clone()
    }
}

impl Notifier for MockNotifier {
    fn warn(&self, message: &str) {
        self.warnings.lock().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.lock().push(message.to_string());
        self.confirm_answer.load(Ordering::SeqCst)
    }
}

// =============================================================================
// Mock Menu Presenter
// =============================================================================

/// A [`MenuPresenter`] that records hidden links and badge labels.
#[derive(Debug, Default)]
pub struct MockMenuPresenter {
    hidden: Mutex<Vec<String>>,
    badges: Mutex<Vec<String>>,
}

impl MockMenuPresenter {
    /// Creates an empty presenter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every link target hidden, in order.
    pub fn hidden_links(&self) -> Vec<String> {
        self.hidden.lock().clone()
    }

    /// Every badge label shown, in order.
    pub fn badges(&self) -> Vec<String> {
        self.badges.lock().clone()
    }
}

impl MenuPresenter for MockMenuPresenter {
    fn hide_link(&self, href: &str) {
        self.hidden.lock().push(href.to_string());
    }

    fn show_role_badge(&self, label: &str) {
        self.badges.lock().push(label.to_string());
    }
}
