// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # BellyGuard Integration Tests
//!
//! Integration tests for the admin page-access guard. The crate provides
//! shared mocks, fixtures, and assertion helpers; the suites live under
//! `tests/`.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run all integration tests
//! cargo test -p bellyguard-tests
//!
//! # Run specific test suite
//! cargo test -p bellyguard-tests --test integration_guard
//! cargo test -p bellyguard-tests --test integration_policy
//! cargo test -p bellyguard-tests --test integration_menu
//! ```
//!
//! ## Test Categories
//!
//! ### Guard Tests (`integration_guard.rs`)
//! - Page access decisions and side effects (warn, redirect, clear)
//! - Role queries and content editing checks
//! - Secure logout and current-user snapshots
//!
//! ### Policy Tests (`integration_policy.rs`)
//! - Full page/role grant matrix against the default tables
//! - Implicit allow for unmapped page names
//! - Custom policies through the builder
//!
//! ### Menu Tests (`integration_menu.rs`)
//! - Menu plans replayed through the presenter
//! - Role badge display

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod common;

/// Re-export commonly used items for convenience.
pub mod prelude {
    pub use crate::common::assertions::*;
    pub use crate::common::builders::*;
    pub use crate::common::fixtures::*;
    pub use crate::common::mocks::*;
}
