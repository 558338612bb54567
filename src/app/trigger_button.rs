use std::cell::Cell;
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{
    Align, ApplicationWindow, Box as GtkBox, DrawingArea, EventControllerMotion, FileDialog,
    GestureClick, Overlay,
};

use crate::geometry::{smooth_closed_outline, Color, OutlinePoint, RoundedRectSpec};
use crate::ui::{COLOR_TOKENS, FONT_NAME, LAYOUT_TOKENS};

use super::FormContext;

const TRIGGER_LABEL: &str = "Create";

/// Hover state of the trigger control's fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TriggerFill {
    Idle,
    Hover,
}

impl TriggerFill {
    pub(super) fn color(self) -> Color {
        match self {
            TriggerFill::Idle => COLOR_TOKENS.trigger_fill,
            TriggerFill::Hover => COLOR_TOKENS.trigger_fill_hover,
        }
    }

    pub(super) fn pointer_entered(self) -> Self {
        TriggerFill::Hover
    }

    pub(super) fn pointer_left(self) -> Self {
        TriggerFill::Idle
    }
}

/// Builds the rounded "Create" control. The smoothed polygon on the
/// drawing area is purely visual; a transparent overlay sized to the
/// shape's bounding box is the actual interactive surface, since a filled
/// polygon's hit-test region is not reliable for irregular shapes.
pub(super) fn build_trigger_button(
    context: &Rc<FormContext>,
    window: &ApplicationWindow,
) -> Overlay {
    let tokens = LAYOUT_TOKENS;
    let spec = RoundedRectSpec::new(
        tokens.trigger_rect_x1,
        tokens.trigger_rect_y1,
        tokens.trigger_rect_x2,
        tokens.trigger_rect_y2,
        tokens.trigger_corner_radius,
    );
    let curve = smooth_closed_outline(&spec.outline(), tokens.trigger_smoothing_steps);

    let fill = Rc::new(Cell::new(TriggerFill::Idle));

    let canvas = DrawingArea::new();
    canvas.set_content_width(tokens.trigger_canvas_width);
    canvas.set_content_height(tokens.trigger_canvas_height);
    {
        let fill = fill.clone();
        canvas.set_draw_func(move |_, cr, _, _| {
            draw_trigger(cr, &curve, fill.get());
        });
    }

    let hit_area = GtkBox::new(gtk4::Orientation::Horizontal, 0);
    hit_area.set_halign(Align::Start);
    hit_area.set_valign(Align::Start);
    hit_area.set_margin_start(tokens.trigger_rect_x1 as i32);
    hit_area.set_margin_top(tokens.trigger_rect_y1 as i32);
    hit_area.set_size_request(spec.width() as i32, spec.height() as i32);

    let motion = EventControllerMotion::new();
    {
        let fill = fill.clone();
        let canvas = canvas.clone();
        motion.connect_enter(move |_, _, _| {
            fill.set(fill.get().pointer_entered());
            canvas.queue_draw();
        });
    }
    {
        let fill = fill.clone();
        let canvas = canvas.clone();
        motion.connect_leave(move |_| {
            fill.set(fill.get().pointer_left());
            canvas.queue_draw();
        });
    }
    hit_area.add_controller(motion);

    let click = GestureClick::new();
    {
        let context = context.clone();
        let window = window.clone();
        click.connect_released(move |_, _, _, _| {
            open_export_dialog(&context, &window);
        });
    }
    hit_area.add_controller(click);

    let overlay = Overlay::new();
    overlay.set_child(Some(&canvas));
    overlay.add_overlay(&hit_area);
    overlay
}

fn draw_trigger(cr: &gtk4::cairo::Context, curve: &[OutlinePoint], fill: TriggerFill) {
    let Some(first) = curve.first() else {
        return;
    };

    let (r, g, b) = fill.color().to_rgb_f64();
    cr.set_source_rgb(r, g, b);
    cr.move_to(first.x, first.y);
    for point in &curve[1..] {
        cr.line_to(point.x, point.y);
    }
    cr.close_path();
    if let Err(err) = cr.fill() {
        tracing::warn!(?err, "failed to fill trigger outline");
        return;
    }

    let (r, g, b) = COLOR_TOKENS.trigger_text.to_rgb_f64();
    cr.set_source_rgb(r, g, b);
    cr.select_font_face(
        FONT_NAME,
        gtk4::cairo::FontSlant::Normal,
        gtk4::cairo::FontWeight::Normal,
    );
    cr.set_font_size(f64::from(LAYOUT_TOKENS.trigger_font_size));

    let tokens = LAYOUT_TOKENS;
    let center_x = (tokens.trigger_rect_x1 + tokens.trigger_rect_x2) / 2.0;
    let center_y = (tokens.trigger_rect_y1 + tokens.trigger_rect_y2) / 2.0;
    match cr.text_extents(TRIGGER_LABEL) {
        Ok(extents) => {
            let x = center_x - extents.width() / 2.0 - extents.x_bearing();
            let y = center_y - extents.height() / 2.0 - extents.y_bearing();
            cr.move_to(x, y);
            if let Err(err) = cr.show_text(TRIGGER_LABEL) {
                tracing::warn!(?err, "failed to draw trigger label");
            }
        }
        Err(err) => {
            tracing::warn!(?err, "failed to measure trigger label");
        }
    }
}

/// Explicit-path export: prompt for a destination, then render the sheet
/// there. A dismissed dialog invokes no collaborator at all.
fn open_export_dialog(context: &Rc<FormContext>, window: &ApplicationWindow) {
    let filter = gtk4::FileFilter::new();
    filter.set_name(Some("PDF files"));
    filter.add_suffix("pdf");
    let filters = gtk4::gio::ListStore::new::<gtk4::FileFilter>();
    filters.append(&filter);

    let dialog = FileDialog::builder()
        .title("Save label sheet")
        .initial_name("address_labels.pdf")
        .filters(&filters)
        .default_filter(&filter)
        .modal(true)
        .build();

    let context = context.clone();
    dialog.save(
        Some(window),
        gtk4::gio::Cancellable::NONE,
        move |result| {
            let Ok(file) = result else {
                tracing::debug!("sheet export cancelled at the save dialog");
                return;
            };
            let Some(target) = file.path() else {
                return;
            };
            match context.pipeline.export_sheet_to(&target) {
                Ok(()) => context.preview.clear_status(),
                Err(err) => context.preview.report_error(&err),
            }
        },
    );
}
