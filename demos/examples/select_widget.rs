// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end wiring of the select widget core without a UI framework:
//! - `canopy_select` for the shared-state controller and callbacks,
//! - `canopy_elements` for trigger/search/list/add-item contracts,
//! - `canopy_overlay` for the anchor-relative placement decision,
//! - `canopy_results` for filtering the candidate set on search changes.
//!
//! Run:
//! - `cargo run -p canopy_demos --example select_widget`

use canopy_elements::{AddItemButton, ButtonTrigger, DropdownTrigger, ListRow, ResultsList, SearchBox};
use canopy_overlay::{BelowAnchor, resolve_overlay};
use canopy_results::{ResultEntry, filter_results};
use canopy_select::{AnchorToken, SelectController};
use kurbo::Rect;

/// Stand-in for a host framework's pointer event.
#[derive(Debug)]
struct ClickEvent {
    #[allow(dead_code)]
    x: f64,
    #[allow(dead_code)]
    y: f64,
}

fn candidates() -> Vec<ResultEntry> {
    vec![
        ResultEntry::new("apple", "Apple").with_category("Fruit"),
        ResultEntry::new("banana", "Banana").with_category("Fruit"),
        ResultEntry::new("carrot", "Carrot").with_category("Vegetable"),
        ResultEntry::new("cherry", "Cherry").with_category("Fruit"),
        ResultEntry::new("salt", "Salt"),
    ]
}

fn print_rows(ctl: &SelectController) {
    for row in ResultsList.rows(ctl) {
        match row {
            ListRow::Heading(Some(label)) => println!("  == {label} =="),
            ListRow::Heading(None) => println!("  == (other) =="),
            ListRow::Item { value, .. } => println!("  - {value}"),
        }
    }
}

fn main() {
    let mut ctl: SelectController = SelectController::new(candidates())
        .on_search_change(|v| println!("[callback] search changed: {v:?}"))
        .on_selected_change(|id| println!("[callback] selected: {id}"))
        .on_add_item(|v| println!("[callback] create new item from: {v:?}"));

    // Mount a dropdown trigger and register its rendered element as anchor.
    let mut dropdown: DropdownTrigger<ClickEvent> = DropdownTrigger::new("Pick an ingredient…");
    dropdown.on_mount(&mut ctl, AnchorToken(1));
    println!("trigger label: {}", dropdown.label(&ctl));

    // The host measured the trigger at these bounds.
    let anchor_bounds = Rect::new(40.0, 100.0, 240.0, 132.0);
    let policy = BelowAnchor::new(180.0).with_gap(2.0);

    // Closed: the positioner renders nothing.
    assert!(resolve_overlay(ctl.is_panel_open(), Some(anchor_bounds), &policy).is_none());

    // Click the trigger: panel opens, overlay placement derives from the anchor.
    dropdown.on_click(&mut ctl, &ClickEvent { x: 50.0, y: 110.0 });
    if let Some(placement) = resolve_overlay(ctl.is_panel_open(), Some(anchor_bounds), &policy) {
        println!(
            "overlay at ({}, {}), {}x{}",
            placement.origin.x, placement.origin.y, placement.size.width, placement.size.height
        );
    }

    println!("\nall candidates:");
    print_rows(&ctl);

    // Type into the search box; the host narrows the candidate set itself.
    SearchBox.on_input(&mut ctl, "ca");
    let narrowed = filter_results(&candidates(), ctl.search_value());
    ctl.set_results(narrowed);
    println!("\nmatches for {:?}:", ctl.search_value());
    print_rows(&ctl);

    // Activate a row: selection is stored and the panel closes by default.
    ResultsList.activate(&mut ctl, "carrot");
    println!("trigger label: {}", dropdown.label(&ctl));
    assert!(!ctl.is_panel_open());

    // A stale id from an async update is tolerated silently.
    ResultsList.activate(&mut ctl, "banana");

    // Nothing matches "caviar"; offer creation instead.
    SearchBox.on_input(&mut ctl, "caviar");
    ctl.set_results(filter_results(&candidates(), ctl.search_value()));
    if ctl.results().is_empty() {
        AddItemButton.activate(&mut ctl);
    }

    // The escape hatch sees the exact same state as the ambient path.
    let ambient = ctl.snapshot();
    let via_hatch = ctl.compose(|ctl| ctl.snapshot());
    assert_eq!(ambient, via_hatch);

    // A bare ButtonTrigger works the same way for custom presentations.
    let mut plain: ButtonTrigger<ClickEvent> = ButtonTrigger::new();
    plain.on_mount(&mut ctl, AnchorToken(2));
    plain.on_click(&mut ctl, &ClickEvent { x: 0.0, y: 0.0 });
    assert!(ctl.is_panel_open());

    ctl.teardown();
    println!("\ntorn down; later mutations are inert.");
}
