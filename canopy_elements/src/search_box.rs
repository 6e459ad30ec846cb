// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The search input binding.

use canopy_select::SelectController;

/// The search input element.
///
/// Its value and change handling are bound to the controller's search state
/// and are not independently overridable — routing input anywhere else
/// would break the shared-state contract. Pass-through presentation
/// attributes belong to the host widget wrapping this binding.
#[derive(Copy, Clone, Debug, Default)]
pub struct SearchBox;

impl SearchBox {
    /// Forwards a text-change from the host input to the controller.
    ///
    /// Unconditional and undebounced; the search-change callback fires
    /// synchronously.
    pub fn on_input<M: Clone>(&self, controller: &mut SelectController<M>, text: &str) {
        controller.set_search_value(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_binds_to_search_value() {
        let mut ctl: SelectController = SelectController::new(["a"]);
        SearchBox.on_input(&mut ctl, "que");
        SearchBox.on_input(&mut ctl, "query");
        assert_eq!(ctl.search_value(), "query");
    }
}
