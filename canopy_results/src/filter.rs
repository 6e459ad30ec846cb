// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Search filtering helper for building candidate lists.

use alloc::vec::Vec;

use crate::entry::ResultEntry;

/// Filters entries whose display value contains `query`, case-insensitively.
///
/// The widget core never filters implicitly — callers own the candidate set
/// and decide when to narrow it, typically from a search-change callback.
/// An empty query returns every entry unchanged; order is preserved.
pub fn filter_results<M: Clone>(entries: &[ResultEntry<M>], query: &str) -> Vec<ResultEntry<M>> {
    if query.is_empty() {
        return entries.to_vec();
    }
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|e| e.value.to_lowercase().contains(needle.as_str()))
        .cloned()
        .collect()
}
