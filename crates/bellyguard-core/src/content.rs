// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Editable content categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Content categories an admin may edit.
///
/// Unlike pages, an unrecognized content-type tag always denies: there is
/// no implicit-allow fallback for content editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// Editorial articles.
    Article,
    /// Exercise guide entries.
    Exercise,
    /// Food catalog entries.
    Food,
    /// User accounts.
    User,
}

impl ContentType {
    /// Returns the content-type tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Article => "article",
            ContentType::Exercise => "exercise",
            ContentType::Food => "food",
            ContentType::User => "user",
        }
    }

    /// Parses a content type from its tag.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "article" => Some(ContentType::Article),
            "exercise" => Some(ContentType::Exercise),
            "food" => Some(ContentType::Food),
            "user" => Some(ContentType::User),
            _ => None,
        }
    }

    /// Returns all content types.
    pub fn all() -> &'static [ContentType] {
        &[
            ContentType::Article,
            ContentType::Exercise,
            ContentType::Food,
            ContentType::User,
        ]
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
