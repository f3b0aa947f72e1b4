// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # bellyguard-ui
//!
//! Effectful guard surface for the BellyReset admin front-end.
//!
//! This crate wires the pure decision core (`bellyguard-core`) to its
//! environment through injected collaborator traits:
//!
//! - [`SessionStore`]: browser session storage (read, clear)
//! - [`Navigator`]: page redirects
//! - [`Notifier`]: blocking warn/confirm dialogs
//! - [`MenuPresenter`]: navigation chrome (hide links, role badge)
//!
//! [`AccessGuard`] is the facade every admin page calls on load, and
//! [`spawn_liveness_watcher`] is the periodic logged-in re-check.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use bellyguard_core::Page;
//! use bellyguard_ui::{AccessGuard, MemorySessionStore};
//!
//! let store = MemorySessionStore::shared();
//! let guard = AccessGuard::new(store, navigator, notifier, presenter);
//!
//! if guard.check_page_access(Page::FoodCatalog, true) {
//!     guard.setup_menu_permissions();
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod effects;
pub mod guard;
pub mod liveness;
pub mod menu;
pub mod store;

pub use config::GuardConfig;
pub use effects::{Navigator, Notifier};
pub use guard::{AccessGuard, CurrentUser, RoleRequirement};
pub use liveness::spawn_liveness_watcher;
pub use menu::{plan_menu, MenuPlan, MenuPresenter};
pub use store::{snapshot_session, MemorySessionStore, SessionStore};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
