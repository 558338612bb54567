use std::path::Path;

use gtk4::prelude::*;
use gtk4::{Label, Picture};

use crate::notification;
use crate::pipeline::PipelineError;

use super::FormContext;

/// The displayed single-label preview plus the inline status line.
/// Exclusively owned by the pipeline side of the app: the image reference
/// is only ever replaced inside a successful commit, so a failed refresh
/// leaves the previous preview in place.
pub(crate) struct PreviewRuntime {
    picture: Picture,
    status: Label,
}

impl PreviewRuntime {
    pub(super) fn new(placeholder_image: &Path) -> Self {
        let picture = Picture::for_file(&gtk4::gio::File::for_path(placeholder_image));
        picture.set_can_shrink(true);
        picture.set_size_request(150, 90);

        let status = Label::new(None);
        status.add_css_class("status-message");
        status.set_visible(false);

        Self { picture, status }
    }

    pub(super) fn picture(&self) -> &Picture {
        &self.picture
    }

    pub(super) fn status_label(&self) -> &Label {
        &self.status
    }

    /// Swaps in the freshly extracted preview; the old paintable is
    /// released with the replaced file reference.
    pub(super) fn refresh(&self, preview_path: &Path) {
        self.picture
            .set_file(Some(&gtk4::gio::File::for_path(preview_path)));
    }

    pub(super) fn clear_status(&self) {
        self.status.set_text("");
        self.status.set_visible(false);
    }

    pub(super) fn report_error(&self, err: &PipelineError) {
        tracing::error!(error = %err, "render pipeline failed");
        self.status.set_text(&err.to_string());
        self.status.set_visible(true);
        notification::send(err.to_string());
    }
}

/// Runs the full commit sequence for the current form state and applies
/// the outcome to the preview surface.
pub(super) fn run_commit(context: &FormContext) {
    let result = context.pipeline.commit(&context.registry.borrow());
    match result {
        Ok(preview_path) => {
            context.preview.clear_status();
            context.preview.refresh(&preview_path);
        }
        Err(err) => context.preview.report_error(&err),
    }
}
