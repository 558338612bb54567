use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{ApplicationWindow, Entry, EventControllerFocus, Fixed, GestureClick, Grid};

use crate::form::{FieldId, FocusGain, FocusLoss};
use crate::ui::{hint_entry, sync_hint_class, LAYOUT_TOKENS};

use super::{preview_runtime, FormContext};

/// (column, row, width) cells per field, in the fixed layout order:
/// First | Last on the top row, Address across the middle, then
/// City | State | Zip.
const GRID_CELLS: [(i32, i32, i32); 6] = [
    (0, 0, 1),
    (1, 0, 2),
    (0, 1, 3),
    (0, 2, 1),
    (1, 2, 1),
    (2, 2, 1),
];

pub(super) fn build_input_grid(context: &Rc<FormContext>) -> Grid {
    let grid = Grid::new();
    grid.set_row_spacing(LAYOUT_TOKENS.spacing_5 as u32);
    grid.set_column_spacing(LAYOUT_TOKENS.spacing_5 as u32);
    grid.set_column_homogeneous(true);

    for (field, (column, row, width)) in FieldId::ALL.into_iter().zip(GRID_CELLS) {
        let entry = hint_entry(context.registry.borrow().controller(field));
        wire_focus_controller(context.clone(), &entry, field);
        grid.attach(&entry, column, row, width, 1);
    }

    grid
}

/// Each entry carries its field tag from construction; focus events
/// resolve through the registry by tag, never by widget identity.
fn wire_focus_controller(context: Rc<FormContext>, entry: &Entry, field: FieldId) {
    let controller = EventControllerFocus::new();
    {
        let context = context.clone();
        let entry = entry.clone();
        controller.connect_enter(move |_| on_focus_gained(&context, &entry, field));
    }
    {
        let entry = entry.clone();
        controller.connect_leave(move |_| on_focus_lost(&context, &entry, field));
    }
    entry.add_controller(controller);
}

fn on_focus_gained(context: &FormContext, entry: &Entry, field: FieldId) {
    let mut registry = context.registry.borrow_mut();
    let Some(controller) = registry.resolve(Some(field)) else {
        return;
    };
    if controller.focus_gained() == FocusGain::ClearedPlaceholder {
        entry.set_text("");
        sync_hint_class(entry, false);
    }
}

fn on_focus_lost(context: &FormContext, entry: &Entry, field: FieldId) {
    let outcome = {
        let mut registry = context.registry.borrow_mut();
        let Some(controller) = registry.resolve(Some(field)) else {
            return;
        };
        let outcome = controller.focus_lost(entry.text().as_str());
        if outcome == FocusLoss::PlaceholderRestored {
            entry.set_text(controller.display_text());
        }
        sync_hint_class(entry, controller.is_placeholder_active());
        outcome
    };

    if outcome == FocusLoss::Committed {
        preview_runtime::run_commit(context);
    }
}

/// Clicking the window background (outside any registered field) clears
/// keyboard focus, which fires the focused entry's focus-lost path. The
/// Target phase keeps clicks on the entries themselves out of this
/// gesture.
pub(super) fn install_background_focus_clear(window: &ApplicationWindow, surface: &Fixed) {
    let click = GestureClick::new();
    click.set_propagation_phase(gtk4::PropagationPhase::Target);
    {
        let window = window.clone();
        click.connect_pressed(move |_, _, _, _| {
            gtk4::prelude::GtkWindowExt::set_focus(&window, None::<&gtk4::Widget>);
        });
    }
    surface.add_controller(click);
}
