// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger elements: anchor registration and the click-to-toggle contract.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use canopy_select::{AnchorToken, SelectController};

/// Whether a user click handler allows the internal toggle to proceed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Propagation {
    /// Keep going: the trigger toggles the panel after the handler.
    Continue,
    /// Documented escape hatch: suppress the internal toggle.
    Stop,
}

/// User click handler: receives the raw host event and a read-only view of
/// the controller's pre-toggle state.
type ClickHandler<E, M> = Box<dyn FnMut(&E, &SelectController<M>) -> Propagation>;

/// The plain clickable trigger.
///
/// Ordering is the contract: on click, the caller-supplied handler (if any)
/// runs first, observing the pre-toggle state and the unmodified raw event;
/// the internal toggle then runs unless the handler returned
/// [`Propagation::Stop`]. `E` is the host's event type.
pub struct ButtonTrigger<E, M = ()> {
    handler: Option<ClickHandler<E, M>>,
}

impl<E, M: Clone> ButtonTrigger<E, M> {
    /// Creates a trigger with no user click handler.
    #[must_use]
    pub fn new() -> Self {
        Self { handler: None }
    }

    /// Creates a trigger that runs `handler` before each toggle.
    #[must_use]
    pub fn with_handler(
        handler: impl FnMut(&E, &SelectController<M>) -> Propagation + 'static,
    ) -> Self {
        Self {
            handler: Some(Box::new(handler)),
        }
    }

    /// Registers this trigger's rendered element as the panel anchor.
    ///
    /// Call again with a fresh token whenever the rendered element's
    /// identity changes; the controller keeps the last registration.
    pub fn on_mount(&self, controller: &mut SelectController<M>, token: AnchorToken) {
        controller.register_trigger_anchor(token);
    }

    /// Deregisters the anchor when the trigger leaves the tree.
    pub fn on_unmount(&self, controller: &mut SelectController<M>) {
        controller.clear_trigger_anchor();
    }

    /// Handles a click: user handler first, then the panel toggle.
    ///
    /// Returns `true` if the toggle ran. Only an explicit
    /// [`Propagation::Stop`] from the handler suppresses it.
    pub fn on_click(&mut self, controller: &mut SelectController<M>, event: &E) -> bool {
        let propagation = match self.handler.as_mut() {
            Some(handler) => handler(event, &*controller),
            None => Propagation::Continue,
        };
        match propagation {
            Propagation::Continue => {
                controller.toggle_panel();
                true
            }
            Propagation::Stop => false,
        }
    }
}

impl<E, M: Clone> Default for ButtonTrigger<E, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, M> fmt::Debug for ButtonTrigger<E, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonTrigger")
            .field("has_handler", &self.handler.is_some())
            .finish_non_exhaustive()
    }
}

/// The labeled dropdown trigger.
///
/// Displays the selected result's value, falling back to a placeholder,
/// and shares the [`ButtonTrigger`] click-and-anchor behavior. The open
/// flag is re-exposed so presentation code can drive a visual indicator
/// (for example, a rotated chevron); the indicator itself is host territory.
pub struct DropdownTrigger<E, M = ()> {
    placeholder: String,
    trigger: ButtonTrigger<E, M>,
}

impl<E, M: Clone> DropdownTrigger<E, M> {
    /// Creates a dropdown trigger with the given placeholder text.
    #[must_use]
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            trigger: ButtonTrigger::new(),
        }
    }

    /// Adds a user click handler, run before each toggle.
    #[must_use]
    pub fn with_handler(
        mut self,
        handler: impl FnMut(&E, &SelectController<M>) -> Propagation + 'static,
    ) -> Self {
        self.trigger = ButtonTrigger::with_handler(handler);
        self
    }

    /// The text to display: the selected result's value, or the placeholder
    /// when nothing is selected.
    #[must_use]
    pub fn label<'a>(&'a self, controller: &'a SelectController<M>) -> &'a str {
        controller
            .selected_result()
            .map(|entry| entry.value.as_str())
            .unwrap_or(&self.placeholder)
    }

    /// Whether the panel is open, for indicator presentation.
    #[must_use]
    pub fn is_panel_open(&self, controller: &SelectController<M>) -> bool {
        controller.is_panel_open()
    }

    /// See [`ButtonTrigger::on_mount`].
    pub fn on_mount(&self, controller: &mut SelectController<M>, token: AnchorToken) {
        self.trigger.on_mount(controller, token);
    }

    /// See [`ButtonTrigger::on_unmount`].
    pub fn on_unmount(&self, controller: &mut SelectController<M>) {
        self.trigger.on_unmount(controller);
    }

    /// See [`ButtonTrigger::on_click`].
    pub fn on_click(&mut self, controller: &mut SelectController<M>, event: &E) -> bool {
        self.trigger.on_click(controller, event)
    }
}

impl<E, M> fmt::Debug for DropdownTrigger<E, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropdownTrigger")
            .field("placeholder", &self.placeholder)
            .field("trigger", &self.trigger)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    /// Stand-in for a host event payload.
    #[derive(Debug, PartialEq, Eq)]
    struct Ev(u32);

    #[test]
    fn click_without_handler_toggles() {
        let mut ctl: SelectController = SelectController::new(["a"]);
        let mut trigger: ButtonTrigger<Ev> = ButtonTrigger::new();

        assert!(trigger.on_click(&mut ctl, &Ev(1)));
        assert!(ctl.is_panel_open());
        assert!(trigger.on_click(&mut ctl, &Ev(2)));
        assert!(!ctl.is_panel_open());
    }

    #[test]
    fn handler_runs_first_and_sees_pre_toggle_state() {
        let seen: Rc<RefCell<Vec<(u32, bool)>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut ctl: SelectController = SelectController::new(["a"]);
        let mut trigger: ButtonTrigger<Ev> =
            ButtonTrigger::with_handler(move |ev: &Ev, ctl: &SelectController| {
                sink.borrow_mut().push((ev.0, ctl.is_panel_open()));
                Propagation::Continue
            });

        trigger.on_click(&mut ctl, &Ev(1));
        trigger.on_click(&mut ctl, &Ev(2));

        // Each handler invocation observed the raw event and the state
        // before that click's toggle.
        assert_eq!(*seen.borrow(), vec![(1, false), (2, true)]);
        assert!(!ctl.is_panel_open());
    }

    #[test]
    fn stop_suppresses_the_toggle() {
        let mut ctl: SelectController = SelectController::new(["a"]);
        let mut trigger: ButtonTrigger<Ev> =
            ButtonTrigger::with_handler(|_, _| Propagation::Stop);

        assert!(!trigger.on_click(&mut ctl, &Ev(1)));
        assert!(!ctl.is_panel_open());
    }

    #[test]
    fn mount_registers_and_remount_replaces_the_anchor() {
        let mut ctl: SelectController = SelectController::new(["a"]);
        let trigger: ButtonTrigger<Ev> = ButtonTrigger::new();

        trigger.on_mount(&mut ctl, AnchorToken(1));
        assert_eq!(ctl.trigger_anchor(), Some(AnchorToken(1)));

        // Element identity changed: re-registration wins.
        trigger.on_mount(&mut ctl, AnchorToken(2));
        assert_eq!(ctl.trigger_anchor(), Some(AnchorToken(2)));

        trigger.on_unmount(&mut ctl);
        assert!(ctl.trigger_anchor().is_none());
    }

    #[test]
    fn dropdown_label_falls_back_to_placeholder() {
        let mut ctl: SelectController = SelectController::new(["Apple", "Banana"]);
        let dropdown: DropdownTrigger<Ev> = DropdownTrigger::new("Pick a fruit…");

        assert_eq!(dropdown.label(&ctl), "Pick a fruit…");
        ctl.set_selected_result("Banana");
        assert_eq!(dropdown.label(&ctl), "Banana");
    }

    #[test]
    fn dropdown_shares_the_toggle_and_anchor_paths() {
        let mut ctl: SelectController = SelectController::new(["a"]);
        let mut dropdown: DropdownTrigger<Ev> = DropdownTrigger::new("…");

        dropdown.on_mount(&mut ctl, AnchorToken(9));
        assert_eq!(ctl.trigger_anchor(), Some(AnchorToken(9)));

        assert!(!dropdown.is_panel_open(&ctl));
        dropdown.on_click(&mut ctl, &Ev(1));
        assert!(dropdown.is_panel_open(&ctl));
    }

    #[test]
    fn dropdown_handler_can_stop_the_toggle() {
        let mut ctl: SelectController = SelectController::new(["a"]);
        let mut dropdown: DropdownTrigger<Ev> =
            DropdownTrigger::new("…").with_handler(|_, _| Propagation::Stop);

        assert!(!dropdown.on_click(&mut ctl, &Ev(1)));
        assert!(!ctl.is_panel_open());
    }
}
