// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Periodic session liveness watcher.
//!
//! The watcher polls the session store on a fixed interval and sends the
//! user back to the login page if the logged-in flag is gone. It does not
//! react to session mutation directly; it is a poll, independent per
//! instance, stopped only by aborting the returned handle or tearing down
//! the runtime.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::warn;

use bellyguard_core::session::keys;

use crate::config::GuardConfig;
use crate::effects::Navigator;
use crate::store::SessionStore;

/// Spawns the liveness watcher.
///
/// Every `liveness_interval`, re-reads the logged-in flag; if the session
/// is no longer logged in and the current view is not already the login
/// page, navigates to the login page. The first check happens one full
/// interval after spawn.
pub fn spawn_liveness_watcher(
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    config: &GuardConfig,
) -> JoinHandle<()> {
    let login_url = config.login_url.clone();
    let period = config.liveness_interval;

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // The first tick completes immediately; skip it so the first
        // re-validation happens one full period after spawn.
        interval.tick().await;

        loop {
            interval.tick().await;

            let logged_in = store.get(keys::LOGGED_IN).as_deref() == Some("true");
            if logged_in {
                continue;
            }
            if navigator.current_location().contains(&login_url) {
                continue;
            }
            warn!("session expired, redirecting to login");
            navigator.navigate_to(&login_url);
        }
    })
}

// =============================================================================
// Tests
// =============================================================================
