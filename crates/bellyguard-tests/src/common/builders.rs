// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Test Builders
//!
//! Builder for assembling a fully mocked [`AccessGuard`] with access to
//! every mock for post-hoc verification.

use std::sync::Arc;

use bellyguard_core::AccessPolicy;
use bellyguard_ui::{AccessGuard, GuardConfig};

use super::mocks::{MockMenuPresenter, MockNavigator, MockNotifier, MockSessionStore};

// =============================================================================
// Guard Harness
// =============================================================================

/// An [`AccessGuard`] wired to recording mocks.
pub struct GuardHarness {
    /// The guard under test.
    pub guard: AccessGuard,
    /// The session store behind the guard.
    pub store: Arc<MockSessionStore>,
    /// An optional persistent store behind the guard.
    pub persistent: Option<Arc<MockSessionStore>>,
    /// The navigator behind the guard.
    pub navigator: Arc<MockNavigator>,
    /// The notifier behind the guard.
    pub notifier: Arc<MockNotifier>,
    /// The menu presenter behind the guard.
    pub presenter: Arc<MockMenuPresenter>,
}

impl GuardHarness {
    /// Returns `true` if no warning and no redirect was recorded.
    pub fn no_side_effects(&self) -> bool {
        self.notifier.warnings().is_empty() && self.navigator.visited().is_empty()
    }
}

// =============================================================================
// Guard Builder
// =============================================================================

/// Builder for [`GuardHarness`] instances.
pub struct GuardBuilder {
    store: MockSessionStore,
    persistent: Option<Arc<MockSessionStore>>,
    policy: Option<AccessPolicy>,
    config: Option<GuardConfig>,
    confirm_answer: bool,
}

impl Default for GuardBuilder {
    fn default() -> Self {
        Self {
            store: MockSessionStore::new(),
            persistent: None,
            policy: None,
            config: None,
            confirm_answer: true,
        }
    }
}

impl GuardBuilder {
    /// Creates a builder with an empty session store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the given session store state.
    pub fn store(mut self, store: MockSessionStore) -> Self {
        self.store = store;
        self
    }

    /// Attaches a persistent store that secure logout must clear too.
    pub fn with_persistent_store(mut self) -> Self {
        self.persistent = Some(Arc::new(MockSessionStore::with_entries([(
            "remembered_email",
            "siri@example.com",
        )])));
        self
    }

    /// Overrides the access policy.
    pub fn policy(mut self, policy: AccessPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Overrides the guard configuration.
    pub fn config(mut self, config: GuardConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the answer the notifier gives to confirm prompts.
    pub fn confirm_answer(mut self, answer: bool) -> Self {
        self.confirm_answer = answer;
        self
    }

    /// Builds the harness.
    pub fn build(self) -> GuardHarness {
        let store = Arc::new(self.store);
        let navigator = Arc::new(MockNavigator::at("dashboard.html"));
        let notifier = Arc::new(MockNotifier::new());
        notifier.answer_confirms_with(self.confirm_answer);
        let presenter = Arc::new(MockMenuPresenter::new());

        let mut guard = AccessGuard::new(
            store.clone(),
            navigator.clone(),
            notifier.clone(),
            presenter.clone(),
        );
        if let Some(policy) = self.policy {
            guard = guard.with_policy(policy);
        }
        if let Some(config) = self.config {
            guard = guard.with_config(config);
        }
        if let Some(persistent) = &self.persistent {
            guard = guard.with_persistent_store(persistent.clone());
        }

        GuardHarness {
            guard,
            store,
            persistent: self.persistent,
            navigator,
            notifier,
            presenter,
        }
    }
}
