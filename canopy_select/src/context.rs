// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Context distribution: the read surface and the two widget-body forms.

use alloc::string::String;

use canopy_results::{CategorizedResults, ResultEntry};

use crate::controller::{AnchorToken, SelectController};

/// An owned snapshot of every readable shared-context field.
///
/// Snapshots exist for observation — host change detection and tests that
/// compare what the ambient path and the escape-hatch path each saw at the
/// same instant. Elements themselves read live state through the controller
/// handle and never hold a snapshot across interactions.
#[derive(Clone, Debug, PartialEq)]
pub struct ContextSnapshot<M = ()> {
    /// Derived, categorized results.
    pub results: CategorizedResults<M>,
    /// Current search text.
    pub search_value: String,
    /// Currently selected result record, if any.
    pub selected_result: Option<ResultEntry<M>>,
    /// Registered trigger anchor, if a trigger is mounted.
    pub trigger_anchor: Option<AnchorToken>,
    /// Panel-open flag.
    pub is_panel_open: bool,
}

/// The widget's body: a pre-built declarative subtree, or a function that
/// builds one from the shared controller handle.
///
/// The two forms are mutually exclusive by construction. The function form
/// receives the same handle the declarative sub-elements use, so both forms
/// observe identical state; the distributor does nothing special for the
/// function beyond invoking it.
#[derive(Debug)]
pub enum Composition<R, F> {
    /// A subtree built from declared sub-elements.
    Subtree(R),
    /// The escape hatch: build the subtree from the shared handle.
    With(F),
}

impl<R, F> Composition<R, F> {
    /// Collapses either body form into the rendered value.
    pub fn resolve<M>(self, controller: &mut SelectController<M>) -> R
    where
        M: Clone,
        F: FnOnce(&mut SelectController<M>) -> R,
    {
        match self {
            Self::Subtree(rendered) => rendered,
            Self::With(body) => controller.compose(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    #[test]
    fn escape_hatch_observes_the_same_state_as_ambient_reads() {
        let mut ctl: SelectController = SelectController::new(["Apple", "Banana"]);
        ctl.set_search_value("ba");
        ctl.set_selected_result("Banana");
        ctl.register_trigger_anchor(AnchorToken(3));
        ctl.set_panel_open(true);

        let ambient = ctl.snapshot();
        let via_hatch = ctl.compose(|ctl| ctl.snapshot());
        assert_eq!(ambient, via_hatch);
    }

    #[test]
    fn escape_hatch_mutations_land_on_the_shared_state() {
        let mut ctl: SelectController = SelectController::new(["Apple"]);
        ctl.compose(|ctl| {
            ctl.set_search_value("via hatch");
            ctl.set_panel_open(true);
        });
        assert_eq!(ctl.search_value(), "via hatch");
        assert!(ctl.is_panel_open());
    }

    #[test]
    fn composition_forms_are_mutually_exclusive_and_equivalent() {
        type Rendered = Vec<String>;

        fn render(ctl: &mut SelectController) -> Rendered {
            ctl.results().iter().map(|e| e.value.clone()).collect()
        }

        let mut ctl: SelectController = SelectController::new(["Apple", "Banana"]);

        let declared: Composition<Rendered, fn(&mut SelectController) -> Rendered> =
            Composition::Subtree(render(&mut ctl));
        let functional: Composition<Rendered, fn(&mut SelectController) -> Rendered> =
            Composition::With(render);

        let a = declared.resolve(&mut ctl);
        let b = functional.resolve(&mut ctl);
        assert_eq!(a, b);
        assert_eq!(a, ["Apple".to_string(), "Banana".to_string()]);
    }
}
