use gtk4::prelude::*;
use gtk4::Entry;

use crate::form::FieldController;

/// CSS class carried by an entry while its placeholder is showing; the
/// runtime stylesheet renders it grey instead of the real-input black.
pub const ENTRY_HINT_CLASS: &str = "hint";

/// Builds the entry for one form field, seeded from the controller's
/// current display state.
pub fn hint_entry(controller: &FieldController) -> Entry {
    let entry = Entry::new();
    entry.set_text(controller.display_text());
    entry.set_hexpand(true);
    entry.add_css_class("address-entry");
    sync_hint_class(&entry, controller.is_placeholder_active());
    entry
}

/// Keeps the hint styling in step with the controller's placeholder flag.
pub fn sync_hint_class(entry: &Entry, placeholder_active: bool) {
    if placeholder_active {
        entry.add_css_class(ENTRY_HINT_CLASS);
    } else {
        entry.remove_css_class(ENTRY_HINT_CLASS);
    }
}
