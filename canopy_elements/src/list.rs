// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The results list: headings, selectable rows, and row activation.

use alloc::vec::Vec;

use canopy_select::{SelectController, SelectionChange};

/// One renderable row of the results list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ListRow<'a> {
    /// A category heading. `None` labels the uncategorized bucket; the host
    /// chooses its display text.
    Heading(Option<&'a str>),
    /// A selectable result row.
    Item {
        /// Id passed to [`ResultsList::activate`] on activation.
        id: &'a str,
        /// Display label.
        value: &'a str,
    },
}

/// The list element: flattens categorized results into a render model.
///
/// An empty row list is not a failure; any "no results match" affordance is
/// presentation layered on top.
#[derive(Copy, Clone, Debug, Default)]
pub struct ResultsList;

impl ResultsList {
    /// Builds the ordered render model for the current results.
    ///
    /// Each bucket contributes a heading followed by its rows, except the
    /// implicit single-bucket case, whose heading is omitted entirely.
    #[must_use]
    pub fn rows<'a, M: Clone>(&self, controller: &'a SelectController<M>) -> Vec<ListRow<'a>> {
        let results = controller.results();
        let mut rows = Vec::with_capacity(results.len() + results.buckets().len());
        for bucket in results.buckets() {
            if !results.is_implicit() {
                rows.push(ListRow::Heading(bucket.label()));
            }
            for entry in bucket.items() {
                rows.push(ListRow::Item {
                    id: &entry.id,
                    value: &entry.value,
                });
            }
        }
        rows
    }

    /// Activates a row: selects the id and, by default, closes the panel
    /// (configurable via
    /// [`SelectOptions::close_on_select`](canopy_select::SelectOptions)).
    pub fn activate<M: Clone>(
        &self,
        controller: &mut SelectController<M>,
        id: &str,
    ) -> SelectionChange {
        controller.select_and_maybe_close(id)
    }
}
