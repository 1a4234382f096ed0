// WolframAlpha Launcher - Query Processor
// Copyright (C) 2025 Akaere Networks
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Turning typed text into display items
//!
//! Both entry points are plain functions over an explicit configuration and a
//! [`Provider`], so they run the same inside a launcher or a test.

use crate::config::WolframConfig;
use crate::core::item::DisplayItem;
use crate::core::query::{QueryMode, analyze_query};
use crate::services::wolfram::{
    Provider,
    ProviderRequest,
    QueryResult,
    WolframResult,
    query_link,
    summarize_pod,
};
use crate::{log_debug, log_warn};

/// Decide between preview and execution for one suggestion request.
///
/// Without a key a single "no API key" item comes back and nothing is sent.
/// Unconfirmed text is echoed as a pending query. Confirmed text is sent to
/// the provider through [`ask`].
pub fn evaluate<P: Provider + ?Sized>(
    input: &str,
    config: &WolframConfig,
    provider: &P
) -> WolframResult<Vec<DisplayItem>> {
    let mode = analyze_query(input);
    if mode == QueryMode::Empty {
        return Ok(Vec::new());
    }

    let Some(app_id) = config.credential() else {
        log_debug!("No API key configured, skipping query");
        return Ok(vec![DisplayItem::not_configured()]);
    };

    match mode {
        QueryMode::Empty => Ok(Vec::new()),
        QueryMode::Preview(text) => Ok(vec![DisplayItem::pending_query(&text)]),
        QueryMode::Execute(text) => ask(&text, app_id, config, provider),
    }
}

/// Query the provider once and render its answer.
///
/// Result order: one answer per displayable primary pod (document order), or
/// a single "No results." item, then the link to the query in the web UI.
/// A non-OK status yields only an error item. Transport and XML failures are
/// returned as errors.
pub fn ask<P: Provider + ?Sized>(
    text: &str,
    app_id: &str,
    config: &WolframConfig,
    provider: &P
) -> WolframResult<Vec<DisplayItem>> {
    let response = provider.fetch(&ProviderRequest {
        endpoint: &config.api_url,
        input: text,
        app_id,
    })?;

    if !response.is_ok() {
        log_warn!("WolframAlpha returned HTTP {} for query '{}'", response.status, text);
        return Ok(vec![DisplayItem::http_error(response.status)]);
    }

    let result = QueryResult::from_xml(&response.body)?;
    let mut items = answer_items(&result);
    log_debug!("Query '{}' produced {} answer(s)", text, items.len());

    if items.is_empty() {
        items.push(DisplayItem::no_results());
    }
    items.push(DisplayItem::open_query_link(text, query_link(&config.query_url, text)));

    Ok(items)
}

/// Answer items for every primary pod with displayable text
pub fn answer_items(result: &QueryResult) -> Vec<DisplayItem> {
    result
        .primary_pods()
        .filter_map(summarize_pod)
        .map(DisplayItem::answer)
        .collect()
}
