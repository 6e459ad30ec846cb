// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Results: the candidate-result model for search-and-select widgets.
//!
//! This crate normalizes heterogeneous caller input (plain labels or
//! structured records) into a uniform [`ResultEntry`] record and groups a
//! flat result list into ordered category buckets via [`categorize`].
//!
//! The grouping is deliberately a **stable, single-pass, order-preserving**
//! walk: bucket order equals the first-occurrence order of each category
//! label, and items within a bucket keep their relative order from the
//! source list. Results are never re-sorted, so relevance ranking supplied
//! by the caller survives categorization unchanged.
//!
//! ## Minimal example
//!
//! ```rust
//! use canopy_results::{ResultEntry, categorize};
//!
//! let entries: Vec<ResultEntry> = vec![
//!     ResultEntry::new("1", "Apple").with_category("Fruit"),
//!     ResultEntry::new("2", "Carrot"),
//!     ResultEntry::new("3", "Banana").with_category("Fruit"),
//! ];
//!
//! let grouped = categorize(&entries);
//! let buckets: Vec<_> = grouped.buckets().iter().map(|b| b.label()).collect();
//! // "Fruit" appears first (first occurrence), then the uncategorized bucket.
//! assert_eq!(buckets, vec![Some("Fruit"), None]);
//! assert_eq!(grouped.buckets()[0].items()[0].value, "Apple");
//! ```
//!
//! Plain strings normalize to entries whose id equals their value:
//!
//! ```rust
//! use canopy_results::{ResultEntry, normalize};
//!
//! let entries: Vec<ResultEntry> = normalize(["alpha", "beta"]);
//! assert_eq!(entries[0].id, "alpha");
//! assert_eq!(entries[0].value, "alpha");
//! assert!(entries[0].category.is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod categorize;
mod entry;
mod filter;

pub use categorize::{Bucket, CategorizedResults, categorize};
pub use entry::{ResultEntry, dedupe_last_wins, normalize};
pub use filter::filter_results;
