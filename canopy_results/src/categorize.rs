// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Order-preserving grouping of a flat result list into category buckets.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::entry::ResultEntry;

/// One ordered category bucket within [`CategorizedResults`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bucket<M = ()> {
    label: Option<String>,
    items: Vec<ResultEntry<M>>,
}

impl<M> Bucket<M> {
    /// The category label, or `None` for the uncategorized bucket.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Items in this bucket, in source-list order.
    #[must_use]
    pub fn items(&self) -> &[ResultEntry<M>] {
        &self.items
    }
}

/// The derived grouping of a results list into ordered category buckets.
///
/// Always recomputed from the source list, never mutated in place. Bucket
/// order equals first-occurrence order of each label in the source list;
/// items within a bucket keep their source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategorizedResults<M = ()> {
    // Most widgets have a handful of categories; keep them inline.
    buckets: SmallVec<[Bucket<M>; 4]>,
    implicit: bool,
}

impl<M> CategorizedResults<M> {
    /// The ordered buckets.
    #[must_use]
    pub fn buckets(&self) -> &[Bucket<M>] {
        &self.buckets
    }

    /// `true` when no source entry carried a category, so the grouping is a
    /// single implicit bucket whose heading should not be rendered.
    #[must_use]
    pub fn is_implicit(&self) -> bool {
        self.implicit
    }

    /// Total number of items across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|b| b.items.len()).sum()
    }

    /// `true` when no bucket holds any item.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(|b| b.items.is_empty())
    }

    /// Looks up an entry by id across all buckets.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&ResultEntry<M>> {
        self.buckets
            .iter()
            .flat_map(|b| b.items.iter())
            .find(|e| e.id == id)
    }

    /// Iterates over all items in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = &ResultEntry<M>> {
        self.buckets.iter().flat_map(|b| b.items.iter())
    }
}

/// Groups `entries` into ordered category buckets.
///
/// The walk is single-pass and stable:
///
/// 1. If no entry carries a category, the whole list becomes one implicit
///    unlabeled bucket in input order ([`CategorizedResults::is_implicit`]
///    reports this so hosts can suppress the heading).
/// 2. Otherwise each entry is appended to the bucket matching its category;
///    entries without a category go to a reserved unlabeled bucket. A bucket
///    is created the first time its label is seen.
/// 3. Buckets are returned in creation order, items in source order.
///
/// Never alphabetical, never re-sorted: caller-supplied ranking survives.
/// An empty input yields no buckets.
pub fn categorize<M: Clone>(entries: &[ResultEntry<M>]) -> CategorizedResults<M> {
    if entries.is_empty() {
        return CategorizedResults {
            buckets: SmallVec::new(),
            implicit: true,
        };
    }

    if entries.iter().all(|e| e.category.is_none()) {
        let mut buckets = SmallVec::new();
        buckets.push(Bucket {
            label: None,
            items: entries.to_vec(),
        });
        return CategorizedResults {
            buckets,
            implicit: true,
        };
    }

    let mut buckets: SmallVec<[Bucket<M>; 4]> = SmallVec::new();
    // Keyed lookup from label to bucket slot; `None` labels share one slot.
    let mut slots: HashMap<Option<&str>, usize> = HashMap::new();
    for entry in entries {
        let key = entry.category.as_deref();
        let slot = *slots.entry(key).or_insert_with(|| {
            buckets.push(Bucket {
                label: entry.category.clone(),
                items: Vec::new(),
            });
            buckets.len() - 1
        });
        buckets[slot].items.push(entry.clone());
    }

    CategorizedResults {
        buckets,
        implicit: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn entry(id: &str, value: &str) -> ResultEntry {
        ResultEntry::new(id, value)
    }

    #[test]
    fn uncategorized_input_yields_single_implicit_bucket() {
        let entries = vec![entry("1", "A"), entry("2", "B"), entry("3", "C")];
        let grouped = categorize(&entries);

        assert!(grouped.is_implicit());
        assert_eq!(grouped.buckets().len(), 1);
        assert!(grouped.buckets()[0].label().is_none());
        let ids: Vec<&str> = grouped.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn buckets_follow_first_occurrence_order() {
        let entries = vec![
            entry("1", "A").with_category("X"),
            entry("2", "B"),
            entry("3", "C").with_category("X"),
            entry("4", "D").with_category("Y"),
        ];
        let grouped = categorize(&entries);

        assert!(!grouped.is_implicit());
        let labels: Vec<Option<&str>> =
            grouped.buckets().iter().map(|b| b.label()).collect();
        assert_eq!(labels, vec![Some("X"), None, Some("Y")]);

        let x_ids: Vec<&str> = grouped.buckets()[0]
            .items()
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(x_ids, vec!["1", "3"]);
        let none_ids: Vec<&str> = grouped.buckets()[1]
            .items()
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(none_ids, vec!["2"]);
        let y_ids: Vec<&str> = grouped.buckets()[2]
            .items()
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(y_ids, vec!["4"]);
    }

    #[test]
    fn grouping_never_sorts_items_or_labels() {
        // Labels arrive in reverse-alphabetical first-occurrence order and
        // must stay that way.
        let entries = vec![
            entry("1", "A").with_category("Zebra"),
            entry("2", "B").with_category("Alpha"),
            entry("3", "C").with_category("Zebra"),
        ];
        let grouped = categorize(&entries);
        let labels: Vec<Option<&str>> =
            grouped.buckets().iter().map(|b| b.label()).collect();
        assert_eq!(labels, vec![Some("Zebra"), Some("Alpha")]);
    }

    #[test]
    fn find_resolves_ids_across_buckets() {
        let entries = vec![
            entry("1", "A").with_category("X"),
            entry("2", "B"),
        ];
        let grouped = categorize(&entries);
        assert_eq!(grouped.find("2").map(|e| e.value.as_str()), Some("B"));
        assert!(grouped.find("missing").is_none());
    }

    #[test]
    fn empty_input_yields_no_buckets() {
        let grouped: CategorizedResults = categorize(&[]);
        assert!(grouped.is_implicit());
        assert!(grouped.is_empty());
        assert_eq!(grouped.len(), 0);
        assert!(grouped.buckets().is_empty());
    }

    #[test]
    fn len_counts_items_across_buckets() {
        let entries = vec![
            entry("1", "A").with_category("X"),
            entry("2", "B").with_category("Y"),
            entry("3", "C").with_category("X"),
        ];
        let grouped = categorize(&entries);
        assert_eq!(grouped.len(), 3);
        assert!(!grouped.is_empty());
    }
}
