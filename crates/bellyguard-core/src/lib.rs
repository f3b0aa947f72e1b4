// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # bellyguard-core
//!
//! Pure decision core for the BellyReset admin page-access guard.
//!
//! This crate owns the typed domain model and the access evaluation logic:
//!
//! - **Role**: privilege classes and their human-readable labels
//! - **Page**: the protected admin pages
//! - **ContentType**: editable content categories
//! - **AccessPolicy**: the static page and content permission tables
//! - **Session**: explicit session identity value
//! - **evaluate_access**: total, side-effect-free access decision
//!
//! Everything here is synchronous and free of I/O. The effectful pieces
//! (session storage, navigation, notification, menu rendering) live in
//! `bellyguard-ui` behind injected collaborator traits.
//!
//! ## Example
//!
//! ```rust
//! use bellyguard_core::{evaluate_access, AccessPolicy, Page, Role, Session};
//!
//! let policy = AccessPolicy::new();
//! let session = Session::authenticated(Role::FoodManager);
//!
//! let decision = evaluate_access(&session, Some(Page::FoodCatalog), &policy);
//! assert!(decision.is_granted());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod content;
pub mod decision;
pub mod error;
pub mod page;
pub mod policy;
pub mod role;
pub mod session;

pub use content::ContentType;
pub use decision::{evaluate_access, AccessDecision, DenialReason};
pub use error::{AccessError, AccessResult};
pub use page::Page;
pub use policy::{AccessPolicy, AccessPolicyBuilder, PageAccess};
pub use role::{label_for, Role, RoleSet};
pub use session::Session;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
