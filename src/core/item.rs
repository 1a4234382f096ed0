// WolframAlpha Launcher - Display Items
// Copyright (C) 2025 Akaere Networks
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Suggestion entries handed to the launcher
//!
//! Items are rebuilt on every request and never persisted.

use serde::Serialize;

use crate::config::DEFAULT_KEYWORD;

pub const NO_RESULTS: &str = "No results.";
pub const NO_API_KEY: &str = "You don't have an API key.";

const COPY_HINT: &str = "Press Enter to copy to clipboard";
const CONFIRM_HINT: &str = "Add a backslash ( \\ ) to send query.";
const LINK_HINT: &str = "Press Enter to see your query at WolframAlpha.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Catalog entry that activates the plugin
    Keyword,
    /// Echo of unconfirmed input
    PendingQuery,
    /// One pod summary
    Answer,
    /// "No results." or an error message
    Fallback,
    /// Link to the query in the provider's web UI
    OpenQueryLink,
}

/// How the launcher treats an item on execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Keyword,
    Expression,
    Url,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgsHint {
    Required,
    Forbidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HitHint {
    NoArgs,
    Ignore,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayItem {
    pub kind: ItemKind,
    pub label: String,
    pub short_desc: String,
    /// Copy payload or URL
    pub target: String,
    pub args_hint: ArgsHint,
    pub hit_hint: HitHint,
}

impl ItemKind {
    pub fn category(self) -> ItemCategory {
        match self {
            ItemKind::Keyword => ItemCategory::Keyword,
            ItemKind::PendingQuery | ItemKind::Answer | ItemKind::Fallback => {
                ItemCategory::Expression
            }
            ItemKind::OpenQueryLink => ItemCategory::Url,
        }
    }
}

impl DisplayItem {
    fn expression(kind: ItemKind, label: String, short_desc: &str, target: String) -> Self {
        Self {
            kind,
            label,
            short_desc: short_desc.to_string(),
            target,
            args_hint: ArgsHint::Forbidden,
            hit_hint: HitHint::Ignore,
        }
    }

    pub fn keyword() -> Self {
        Self {
            kind: ItemKind::Keyword,
            label: DEFAULT_KEYWORD.to_string(),
            short_desc: "Ask WolframAlpha".to_string(),
            target: DEFAULT_KEYWORD.to_string(),
            args_hint: ArgsHint::Required,
            hit_hint: HitHint::NoArgs,
        }
    }

    pub fn pending_query(text: &str) -> Self {
        Self::expression(ItemKind::PendingQuery, format!("= {}", text), CONFIRM_HINT, text.to_string())
    }

    pub fn answer(summary: String) -> Self {
        Self::expression(ItemKind::Answer, format!("= {}", summary), COPY_HINT, summary)
    }

    pub fn fallback(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::expression(ItemKind::Fallback, format!("= {}", message), COPY_HINT, message)
    }

    pub fn no_results() -> Self {
        Self::fallback(NO_RESULTS)
    }

    pub fn not_configured() -> Self {
        Self::fallback(NO_API_KEY)
    }

    pub fn http_error(status: u16) -> Self {
        Self::fallback(format!("Error getting query: {}", status))
    }

    pub fn open_query_link(text: &str, url: String) -> Self {
        Self {
            kind: ItemKind::OpenQueryLink,
            label: text.to_string(),
            short_desc: LINK_HINT.to_string(),
            target: url,
            args_hint: ArgsHint::Forbidden,
            hit_hint: HitHint::Ignore,
        }
    }

    pub fn category(&self) -> ItemCategory {
        self.kind.category()
    }

    pub fn is_keyword(&self) -> bool {
        self.kind == ItemKind::Keyword && self.target == DEFAULT_KEYWORD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_item() {
        let item = DisplayItem::answer("Result: 4".to_string());
        assert_eq!(item.label, "= Result: 4");
        assert_eq!(item.target, "Result: 4");
        assert_eq!(item.category(), ItemCategory::Expression);
        assert_eq!(item.args_hint, ArgsHint::Forbidden);
    }

    #[test]
    fn test_fallback_items() {
        assert_eq!(DisplayItem::no_results().target, "No results.");
        assert_eq!(DisplayItem::no_results().label, "= No results.");
        assert_eq!(DisplayItem::not_configured().kind, ItemKind::Fallback);
        assert!(DisplayItem::http_error(403).target.contains("403"));
    }

    #[test]
    fn test_keyword_item() {
        let item = DisplayItem::keyword();
        assert!(item.is_keyword());
        assert_eq!(item.category(), ItemCategory::Keyword);
        assert_eq!(item.hit_hint, HitHint::NoArgs);
        assert!(!DisplayItem::pending_query(":W").is_keyword());
    }

    #[test]
    fn test_link_item_is_url() {
        let item = DisplayItem::open_query_link("pi", "https://example.test/?i=pi".to_string());
        assert_eq!(item.category(), ItemCategory::Url);
        assert_eq!(item.label, "pi");
    }

    #[test]
    fn test_item_serializes_snake_case() {
        let json = serde_json::to_value(DisplayItem::pending_query("pi")).unwrap();
        assert_eq!(json["kind"], "pending_query");
        assert_eq!(json["args_hint"], "forbidden");
        assert_eq!(json["target"], "pi");
    }
}
