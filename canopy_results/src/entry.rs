// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The normalized candidate record and input normalization helpers.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

/// A single normalized candidate result.
///
/// Callers may supply either plain strings or structured records; both
/// normalize into this shape. The generic parameter `M` is an opaque host
/// payload carried through untouched (for example, an icon id or a row
/// of host data) and defaults to `()` for callers that need none.
///
/// `id` is expected to be unique within one results list. Duplicates are
/// resolved by [`dedupe_last_wins`] before the list is used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultEntry<M = ()> {
    /// Stable identifier, unique within a results list.
    pub id: String,
    /// Display label for the result.
    pub value: String,
    /// Optional category label used by categorization.
    pub category: Option<String>,
    /// Opaque host payload.
    pub metadata: Option<M>,
}

impl<M> ResultEntry<M> {
    /// Creates an entry with the given id and display value, no category,
    /// and no metadata.
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            category: None,
            metadata: None,
        }
    }

    /// Sets the category label.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Attaches an opaque host payload.
    #[must_use]
    pub fn with_metadata(mut self, metadata: M) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

impl<M> From<&str> for ResultEntry<M> {
    /// A plain string becomes an entry whose id equals its value.
    fn from(s: &str) -> Self {
        Self::new(s, s)
    }
}

impl<M> From<String> for ResultEntry<M> {
    fn from(s: String) -> Self {
        Self {
            id: s.clone(),
            value: s,
            category: None,
            metadata: None,
        }
    }
}

/// Normalizes a heterogeneous input sequence into [`ResultEntry`] records.
///
/// Accepts anything convertible into an entry — plain `&str`/`String`
/// labels or already-structured records — and preserves input order.
pub fn normalize<M, I, T>(inputs: I) -> Vec<ResultEntry<M>>
where
    I: IntoIterator<Item = T>,
    T: Into<ResultEntry<M>>,
{
    inputs.into_iter().map(Into::into).collect()
}

/// Resolves duplicate ids with last-write-wins semantics.
///
/// For each id the surviving entry carries the *data* of its last
/// occurrence but sits at the *position* of its first occurrence, so the
/// caller-supplied ordering of the list stays stable. Lists without
/// duplicates pass through unchanged.
pub fn dedupe_last_wins<M>(entries: Vec<ResultEntry<M>>) -> Vec<ResultEntry<M>> {
    let mut slots: HashMap<String, usize> = HashMap::with_capacity(entries.len());
    let mut out: Vec<ResultEntry<M>> = Vec::with_capacity(entries.len());
    for entry in entries {
        match slots.get(entry.id.as_str()) {
            Some(&slot) => out[slot] = entry,
            None => {
                slots.insert(entry.id.clone(), out.len());
                out.push(entry);
            }
        }
    }
    out
}
