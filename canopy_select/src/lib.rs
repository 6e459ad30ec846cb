// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Select: the shared-state controller for search-and-select widgets.
//!
//! One [`SelectController`] instance owns the single source of truth for a
//! widget instantiation: the candidate results, the search text, the current
//! selection, the panel-open flag, and the registered trigger anchor. Every
//! sub-element — triggers, search box, results list, add-item button — reads
//! and mutates state exclusively through the controller handle it is given,
//! so no sub-element knows about any other.
//!
//! The core is single-threaded and synchronous: every mutator updates state
//! first and then invokes the matching caller-supplied callback in the same
//! turn, and callback invocations across mutator calls preserve call order.
//! Invalid input is tolerated rather than raised: selecting an id that is
//! not in the current results is a documented no-op, which keeps the
//! contract forgiving toward stale ids from asynchronous result-set updates.
//!
//! ## Minimal example
//!
//! ```rust
//! use canopy_select::{SelectController, SelectionChange};
//!
//! let mut ctl: SelectController = SelectController::new(["Apple", "Banana"]);
//!
//! ctl.set_search_value("ban");
//! assert_eq!(ctl.search_value(), "ban");
//!
//! // Selecting a known id stores it; an unknown id is a silent no-op.
//! assert_eq!(ctl.set_selected_result("Banana"), SelectionChange::Applied);
//! assert_eq!(ctl.set_selected_result("Cherry"), SelectionChange::Ignored);
//! assert_eq!(ctl.selected_id(), Some("Banana"));
//! ```
//!
//! ## Context distribution
//!
//! Descendants receive the controller handle itself — explicit dependency
//! injection rather than ambient discovery. The escape hatch for callers
//! that want full control over the rendered subtree is
//! [`SelectController::compose`] (or [`Composition`] when the two body
//! forms must be mutually exclusive), which hands the user function the
//! exact same handle, so both paths observe identical state:
//!
//! ```rust
//! use canopy_select::SelectController;
//!
//! let mut ctl: SelectController = SelectController::new(["Apple"]);
//! let ambient = ctl.snapshot();
//! let via_hatch = ctl.compose(|ctl| ctl.snapshot());
//! assert_eq!(ambient, via_hatch);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod context;
mod controller;

pub use canopy_results::{Bucket, CategorizedResults, ResultEntry};
pub use context::{Composition, ContextSnapshot};
pub use controller::{AnchorToken, SelectController, SelectOptions, SelectionChange};
