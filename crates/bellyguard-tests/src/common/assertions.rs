// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Custom Test Assertions
//!
//! Domain-specific assertion helpers with informative failure messages.

use super::builders::GuardHarness;

/// Assertion extensions for the guard harness.
pub trait GuardAssertions {
    /// Assert that the last redirect went to `url`.
    fn assert_navigated_to(&self, url: &str);

    /// Assert that no redirect happened at all.
    fn assert_not_navigated(&self);

    /// Assert that exactly one warning was shown and that it contains
    /// every given fragment.
    fn assert_warned_containing(&self, fragments: &[&str]);

    /// Assert that no warning and no redirect fired.
    fn assert_no_side_effects(&self);

    /// Assert that the session store was cleared (and is now empty).
    fn assert_session_cleared(&self);
}

impl GuardAssertions for GuardHarness {
    fn assert_navigated_to(&self, url: &str) {
        assert_eq!(
            self.navigator.last_visited().as_deref(),
            Some(url),
            "expected a redirect to {url:?}, visited: {:?}",
            self.navigator.visited()
        );
    }

    fn assert_not_navigated(&self) {
        assert!(
            self.navigator.visited().is_empty(),
            "expected no redirect, visited: {:?}",
            self.navigator.visited()
        );
    }

    fn assert_warned_containing(&self, fragments: &[&str]) {
        let warnings = self.notifier.warnings();
        assert_eq!(
            warnings.len(),
            1,
            "expected exactly one warning, got: {warnings:?}"
        );
        for fragment in fragments {
            assert!(
                warnings[0].contains(fragment),
                "warning {:?} does not contain {fragment:?}",
                warnings[0]
            );
        }
    }

    fn assert_no_side_effects(&self) {
        assert!(
            self.notifier.warnings().is_empty(),
            "unexpected warnings: {:?}",
            self.notifier.warnings()
        );
        self.assert_not_navigated();
    }

    fn assert_session_cleared(&self) {
        assert!(
            self.store.clear_count() > 0,
            "expected the session store to be cleared"
        );
        assert!(self.store.is_empty(), "session store still holds keys");
    }
}
