// WolframAlpha Launcher - Answer Formatting
// Copyright (C) 2025 Akaere Networks
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Turning pods into one-line answers and queries into web links

use once_cell::sync::Lazy;
use regex::Regex;

use super::models::Pod;

/// Pod echoing the interpreted input back; never shown
pub const INPUT_POD_ID: &str = "Input";

/// Literal two-character `\n` escape the API leaves in some plaintext
const NEWLINE_ESCAPE: &str = "\\n";

static WHITESPACE_RUN: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"\s+").ok());

/// Normalize one plaintext fragment.
///
/// Literal `\n` escapes become `"; "`, whitespace runs collapse to a single
/// space and the ends are trimmed. Applying it twice changes nothing.
pub fn normalize_fragment(raw: &str) -> String {
    let mut text = raw.replace(NEWLINE_ESCAPE, "; ");
    if let Some(re) = WHITESPACE_RUN.as_ref() {
        text = re.replace_all(&text, " ").into_owned();
    }
    text.trim().to_string()
}

/// `"Title: a, b"` for a displayable pod, `None` for the input echo or a pod
/// whose fragments are all empty.
pub fn summarize_pod(pod: &Pod) -> Option<String> {
    if pod.id == INPUT_POD_ID {
        return None;
    }

    let fragments: Vec<String> = pod
        .plaintexts()
        .map(normalize_fragment)
        .filter(|fragment| !fragment.is_empty())
        .collect();

    if fragments.is_empty() {
        return None;
    }

    Some(format!("{}: {}", pod.title, fragments.join(", ")))
}

/// Web UI link for a query; `{}` in the template receives the percent-encoded text
pub fn query_link(template: &str, text: &str) -> String {
    let encoded = urlencoding::encode(text);
    if template.contains("{}") {
        template.replacen("{}", &encoded, 1)
    } else {
        format!("{}{}", template, encoded)
    }
}
