// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Elements: the named sub-elements of the select widget.
//!
//! These are thin, renderer-agnostic state machines — a namespace of
//! cooperating types that all consume the same shared
//! [`SelectController`](canopy_select::SelectController) handle. No element
//! knows about any other; simple integrations mount the stock set with zero
//! wiring, while advanced integrations replace, reorder, or augment any of
//! them without touching controller internals.
//!
//! Host frameworks own the actual widgets, markup, and event plumbing.
//! What lives here are the binding and ordering contracts:
//!
//! - [`ButtonTrigger`] / [`DropdownTrigger`]: run the user's click handler
//!   first (against pre-toggle state), then toggle the panel unless the
//!   handler asked to [`Propagation::Stop`]; register the anchor on mount.
//! - [`SearchBox`]: binds text input to the controller's search value — its
//!   only write path, not independently overridable.
//! - [`ResultsList`]: flattens the categorized results into a render model
//!   of headings and selectable rows; row activation selects and, by
//!   default, closes the panel.
//! - [`AddItemButton`]: invokes the create-item callback with the search
//!   text current at activation time.
//!
//! ## Minimal example
//!
//! ```rust
//! use canopy_elements::{ButtonTrigger, ListRow, ResultsList, SearchBox};
//! use canopy_select::{AnchorToken, SelectController};
//!
//! let mut ctl: SelectController = SelectController::new(["Apple", "Banana"]);
//!
//! let mut trigger: ButtonTrigger<(), ()> = ButtonTrigger::new();
//! trigger.on_mount(&mut ctl, AnchorToken(1));
//! trigger.on_click(&mut ctl, &());
//! assert!(ctl.is_panel_open());
//!
//! SearchBox.on_input(&mut ctl, "ba");
//!
//! let rows = ResultsList.rows(&ctl);
//! assert_eq!(rows[0], ListRow::Item { id: "Apple", value: "Apple" });
//!
//! ResultsList.activate(&mut ctl, "Banana");
//! assert_eq!(ctl.selected_id(), Some("Banana"));
//! assert!(!ctl.is_panel_open()); // closes on selection by default
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod add_item;
mod list;
mod search_box;
mod trigger;

pub use add_item::AddItemButton;
pub use list::{ListRow, ResultsList};
pub use search_box::SearchBox;
pub use trigger::{ButtonTrigger, DropdownTrigger, Propagation};
