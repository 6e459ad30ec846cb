// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The create-new-item element.

use canopy_select::SelectController;

/// The add-item element.
///
/// Activation hands the *current* search text — read at activation time,
/// never a render-time snapshot — to the caller's create callback.
#[derive(Copy, Clone, Debug, Default)]
pub struct AddItemButton;

impl AddItemButton {
    /// Invokes the create-item callback with the current search text.
    pub fn activate<M: Clone>(&self, controller: &mut SelectController<M>) {
        controller.add_item();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[test]
    fn activation_passes_the_search_text_current_at_that_moment() {
        let created: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&created);
        let mut ctl: SelectController =
            SelectController::new(["a"]).on_add_item(move |v| sink.borrow_mut().push(v.to_string()));

        ctl.set_search_value("draft");
        ctl.set_search_value("final");
        AddItemButton.activate(&mut ctl);

        assert_eq!(*created.borrow(), vec!["final"]);
    }

    #[test]
    fn activation_without_callback_is_a_no_op() {
        let mut ctl: SelectController = SelectController::new(["a"]);
        ctl.set_search_value("anything");
        AddItemButton.activate(&mut ctl);
    }
}
