// WolframAlpha Launcher - Query Analysis
// Copyright (C) 2025 Akaere Networks
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::config::{CONFIRM_MARKER, DEFAULT_KEYWORD};

/// User text plus whether it ends with the confirmation marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub text: String,
    pub confirmed: bool,
}

/// What a suggestion request should do with the text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryMode {
    /// Nothing to show
    Empty,
    /// Echo the text and wait for the marker
    Preview(String),
    /// Marker present: ask the provider with the marker stripped
    Execute(String),
}

impl Query {
    pub fn parse(input: &str) -> Self {
        match input.strip_suffix(CONFIRM_MARKER) {
            Some(text) => Self { text: text.to_string(), confirmed: true },
            None => Self { text: input.to_string(), confirmed: false },
        }
    }

    pub fn mode(&self) -> QueryMode {
        if self.text.is_empty() && !self.confirmed {
            QueryMode::Empty
        } else if self.confirmed {
            QueryMode::Execute(self.text.clone())
        } else {
            QueryMode::Preview(self.text.clone())
        }
    }
}

pub fn analyze_query(input: &str) -> QueryMode {
    Query::parse(input).mode()
}

/// Text following the keyword trigger, if the input starts with it.
///
/// `Some("")` means the keyword was typed with nothing after it.
pub fn strip_keyword(input: &str) -> Option<&str> {
    input.strip_prefix(DEFAULT_KEYWORD).map(str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_parsing() {
        assert_eq!(
            Query::parse("integrate x^2\\"),
            Query { text: "integrate x^2".to_string(), confirmed: true }
        );
        assert_eq!(
            Query::parse("integrate x^2"),
            Query { text: "integrate x^2".to_string(), confirmed: false }
        );
        // only the last marker is stripped
        assert_eq!(Query::parse("a\\\\").text, "a\\");
    }

    #[test]
    fn test_query_mode() {
        assert_eq!(analyze_query(""), QueryMode::Empty);
        assert_eq!(analyze_query("pi"), QueryMode::Preview("pi".to_string()));
        assert_eq!(analyze_query("pi\\"), QueryMode::Execute("pi".to_string()));
        assert_eq!(analyze_query("\\"), QueryMode::Execute(String::new()));
    }

    #[test]
    fn test_strip_keyword() {
        assert_eq!(strip_keyword(":W  2+2 "), Some("2+2"));
        assert_eq!(strip_keyword(":W"), Some(""));
        assert_eq!(strip_keyword("2+2"), None);
    }
}
