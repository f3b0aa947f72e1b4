// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Navigation and notification seams.
//!
//! Both collaborators are fire-and-forget from the guard's point of view:
//! no acknowledgment, no retry. A browser host wires these to
//! `window.location` and `alert`/`confirm`; tests use recording mocks.

/// Redirects the current view.
pub trait Navigator: Send + Sync {
    /// Unconditionally navigates to `url`. The calling context is assumed
    /// to be torn down afterwards, so no return value is expected.
    fn navigate_to(&self, url: &str);

    /// Returns the URL of the current view.
    ///
    /// Used by the liveness watcher to avoid redirect loops when the
    /// current view already is the login page.
    fn current_location(&self) -> String;
}

/// Blocking, user-acknowledged message surface.
pub trait Notifier: Send + Sync {
    /// Shows a warning the user must acknowledge.
    fn warn(&self, message: &str);

    /// Asks a yes/no question and returns the answer.
    fn confirm(&self, message: &str) -> bool;
}
