// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The widget's single source of truth and its mutator surface.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use canopy_results::{CategorizedResults, ResultEntry, categorize, dedupe_last_wins, normalize};

use crate::context::ContextSnapshot;

/// Caller-supplied state-change callback.
type Callback = Box<dyn FnMut(&str)>;

/// Opaque handle to a trigger's rendered element.
///
/// Whichever trigger is mounted registers its token with the controller;
/// the overlay positioner hands the token back to the host to resolve the
/// anchor's measured bounds. The host owns the meaning of individual token
/// values (for example, an element id or a slot in a widget arena).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AnchorToken(pub u64);

/// Construction-time options for a [`SelectController`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOptions {
    /// Initial search text; empty unless the integration provides one.
    pub initial_search: String,
    /// Whether activating a result row also closes the panel.
    pub close_on_select: bool,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            initial_search: String::new(),
            close_on_select: true,
        }
    }
}

/// Outcome of a selection mutator.
///
/// A stale or unknown id is tolerated, not raised: the mutator leaves state
/// untouched, fires no callback, and reports [`SelectionChange::Ignored`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectionChange {
    /// The id resolved to a current result and was stored.
    Applied,
    /// The id did not resolve; the call had no observable effect.
    Ignored,
}

impl SelectionChange {
    /// `true` if the selection was stored.
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Owner of all mutable widget state for one instantiation.
///
/// The controller is the shared context: sub-elements hold only the handle
/// they are given and never a private copy of any state slice. All state
/// lives for the instantiation's lifetime and is discarded on
/// [`teardown`](Self::teardown); nothing persists across instantiations.
///
/// Mutators are synchronous and single-threaded. Within one call, the state
/// update strictly precedes the callback invocation; across calls, callbacks
/// fire in mutator call order and are never merged or deferred.
pub struct SelectController<M = ()> {
    entries: Vec<ResultEntry<M>>,
    categorized: CategorizedResults<M>,
    search_value: String,
    selected: Option<String>,
    panel_open: bool,
    anchor: Option<AnchorToken>,
    options: SelectOptions,
    on_search_change: Option<Callback>,
    on_selected_change: Option<Callback>,
    on_add_item: Option<Callback>,
    torn_down: bool,
}

impl<M: Clone> SelectController<M> {
    /// Creates a controller over the given candidate results.
    ///
    /// Inputs may be plain strings or structured [`ResultEntry`] records.
    /// Duplicate ids are resolved last-write-wins, with the survivor keeping
    /// the position of the id's first occurrence.
    pub fn new<I, T>(results: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ResultEntry<M>>,
    {
        let entries = dedupe_last_wins(normalize(results));
        let categorized = categorize(&entries);
        Self {
            entries,
            categorized,
            search_value: String::new(),
            selected: None,
            panel_open: false,
            anchor: None,
            options: SelectOptions::default(),
            on_search_change: None,
            on_selected_change: None,
            on_add_item: None,
            torn_down: false,
        }
    }

    /// Applies construction-time options.
    #[must_use]
    pub fn with_options(mut self, options: SelectOptions) -> Self {
        self.search_value = options.initial_search.clone();
        self.options = options;
        self
    }

    /// Registers the search-change callback.
    #[must_use]
    pub fn on_search_change(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_search_change = Some(Box::new(f));
        self
    }

    /// Registers the selection-change callback.
    #[must_use]
    pub fn on_selected_change(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_selected_change = Some(Box::new(f));
        self
    }

    /// Registers the create-item callback invoked by
    /// [`add_item`](Self::add_item) with the current search text.
    #[must_use]
    pub fn on_add_item(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_add_item = Some(Box::new(f));
        self
    }

    /// Overwrites the search text and reports the new value.
    ///
    /// Unconditional: no change detection, no debouncing. The callback (if
    /// registered) runs synchronously after the state update.
    pub fn set_search_value(&mut self, value: impl Into<String>) {
        if self.torn_down {
            return;
        }
        self.search_value = value.into();
        if let Some(cb) = self.on_search_change.as_mut() {
            cb(&self.search_value);
        }
    }

    /// Selects the result with the given id, if it exists.
    ///
    /// An unknown id leaves the selection unchanged and fires no callback.
    /// Repeating a valid id re-stores it and fires the callback once per
    /// call; calls are never merged.
    pub fn set_selected_result(&mut self, id: &str) -> SelectionChange {
        if self.torn_down {
            return SelectionChange::Ignored;
        }
        if !self.entries.iter().any(|e| e.id == id) {
            return SelectionChange::Ignored;
        }
        self.selected = Some(String::from(id));
        if let Some(cb) = self.on_selected_change.as_mut() {
            cb(id);
        }
        SelectionChange::Applied
    }

    /// Row-activation path: selects the id and, when
    /// [`SelectOptions::close_on_select`] is set and the selection applied,
    /// also closes the panel.
    pub fn select_and_maybe_close(&mut self, id: &str) -> SelectionChange {
        let change = self.set_selected_result(id);
        if change.is_applied() && self.options.close_on_select {
            self.panel_open = false;
        }
        change
    }

    /// Overwrites the panel-open flag.
    ///
    /// Panel visibility is purely presentational and is never reported
    /// through a callback.
    pub fn set_panel_open(&mut self, open: bool) {
        if self.torn_down {
            return;
        }
        self.panel_open = open;
    }

    /// Flips the panel-open flag.
    pub fn toggle_panel(&mut self) {
        if self.torn_down {
            return;
        }
        self.panel_open = !self.panel_open;
    }

    /// Registers the mounted trigger's anchor token; last writer wins.
    ///
    /// Only one trigger is expected to be mounted at a time, but multiple
    /// registrations are tolerated silently.
    pub fn register_trigger_anchor(&mut self, token: AnchorToken) {
        if self.torn_down {
            return;
        }
        self.anchor = Some(token);
    }

    /// Clears the registered anchor, typically on trigger unmount.
    pub fn clear_trigger_anchor(&mut self) {
        self.anchor = None;
    }

    /// Invokes the create-item callback with the current search text.
    ///
    /// The text is read at activation time, not from any render-time
    /// snapshot.
    pub fn add_item(&mut self) {
        if self.torn_down {
            return;
        }
        if let Some(cb) = self.on_add_item.as_mut() {
            cb(&self.search_value);
        }
    }

    /// Replaces the candidate result set.
    ///
    /// The new list is normalized and deduped, the categorization is
    /// recomputed, and a selection whose id no longer resolves is dropped
    /// silently — replacing the result set is the caller's own act, so no
    /// selection-change callback fires for the drop.
    pub fn set_results<I, T>(&mut self, results: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<ResultEntry<M>>,
    {
        if self.torn_down {
            return;
        }
        self.entries = dedupe_last_wins(normalize(results));
        self.categorized = categorize(&self.entries);
        let dangling = self
            .selected
            .as_deref()
            .is_some_and(|id| !self.entries.iter().any(|e| e.id == id));
        if dangling {
            self.selected = None;
        }
    }

    /// The derived, categorized view of the current results.
    #[must_use]
    pub fn results(&self) -> &CategorizedResults<M> {
        &self.categorized
    }

    /// The normalized flat result list.
    #[must_use]
    pub fn raw_results(&self) -> &[ResultEntry<M>] {
        &self.entries
    }

    /// The current search text.
    #[must_use]
    pub fn search_value(&self) -> &str {
        &self.search_value
    }

    /// The selected result's id, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected result record, if any. A non-none selection always
    /// resolves to an entry in the current results.
    #[must_use]
    pub fn selected_result(&self) -> Option<&ResultEntry<M>> {
        let id = self.selected.as_deref()?;
        self.entries.iter().find(|e| e.id == id)
    }

    /// Whether the panel is open.
    #[must_use]
    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    /// The registered trigger anchor, if one is mounted.
    #[must_use]
    pub fn trigger_anchor(&self) -> Option<AnchorToken> {
        self.anchor
    }

    /// The construction-time options.
    #[must_use]
    pub fn options(&self) -> &SelectOptions {
        &self.options
    }

    /// Whether [`teardown`](Self::teardown) has run.
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Takes an owned snapshot of every readable context field.
    #[must_use]
    pub fn snapshot(&self) -> ContextSnapshot<M> {
        ContextSnapshot {
            results: self.categorized.clone(),
            search_value: self.search_value.clone(),
            selected_result: self.selected_result().cloned(),
            trigger_anchor: self.anchor,
            is_panel_open: self.panel_open,
        }
    }

    /// Hands the controller handle to a caller-supplied composition
    /// function and returns its output.
    ///
    /// This is the function-as-body escape hatch: the function receives the
    /// exact same shared handle every declarative sub-element uses, so both
    /// composition paths observe identical state.
    pub fn compose<R>(&mut self, body: impl FnOnce(&mut Self) -> R) -> R {
        body(self)
    }

    /// Tears the instantiation down.
    ///
    /// Deregisters the anchor, closes the panel, and disarms every
    /// callback. Later mutator calls change nothing and fire nothing; no
    /// callback may run after teardown.
    pub fn teardown(&mut self) {
        self.anchor = None;
        self.panel_open = false;
        self.on_search_change = None;
        self.on_selected_change = None;
        self.on_add_item = None;
        self.torn_down = true;
    }
}

impl<M: fmt::Debug> fmt::Debug for SelectController<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectController")
            .field("entries", &self.entries)
            .field("search_value", &self.search_value)
            .field("selected", &self.selected)
            .field("panel_open", &self.panel_open)
            .field("anchor", &self.anchor)
            .field("options", &self.options)
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}
