use std::cell::RefCell;
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, Fixed};

use crate::config::{load_app_config, AppConfig};
use crate::error::{AppError, AppResult};
use crate::form::FieldRegistry;
use crate::pipeline::RenderPipeline;
use crate::render::{CommandLabelExtractor, CommandSheetRenderer};
use crate::storage::JsonRecordStore;
use crate::ui::LAYOUT_TOKENS;

mod form_runtime;
mod preview_runtime;
mod runtime_css;
mod trigger_button;

use self::preview_runtime::PreviewRuntime;
use self::runtime_css::install_runtime_css;

const APP_ID: &str = "io.github.lovelylabels.LovelyLabels";
const APP_TITLE: &str = "Lovely Labels";

/// Shared per-window state handed into event closures: the field
/// registry, the render pipeline, and the preview surface. One explicit
/// context object instead of process-wide globals.
pub(crate) struct FormContext {
    pub(crate) registry: RefCell<FieldRegistry>,
    pub(crate) pipeline: RenderPipeline,
    pub(crate) preview: PreviewRuntime,
}

pub struct App {
    config: AppConfig,
}

impl App {
    pub fn new() -> Self {
        Self {
            config: load_app_config(),
        }
    }

    pub fn start(&mut self) -> AppResult<()> {
        tracing::info!("starting gtk runtime");
        let application = Application::new(Some(APP_ID), gtk4::gio::ApplicationFlags::NON_UNIQUE);

        let config = self.config.clone();
        application.connect_activate(move |app| {
            build_main_window(app, &config);
        });

        // No CLI flags exist; keep GTK away from the process arguments.
        let exit = application.run_with_args::<&str>(&[]);
        let code = i32::from(exit);
        if code == 0 {
            Ok(())
        } else {
            Err(AppError::Exit { code })
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn build_main_window(app: &Application, config: &AppConfig) {
    install_runtime_css();

    let tokens = LAYOUT_TOKENS;
    let window = ApplicationWindow::new(app);
    window.add_css_class("lovely-root");
    window.set_title(Some(APP_TITLE));
    window.set_default_size(tokens.window_width, tokens.window_height);
    window.set_resizable(false);

    let pipeline = RenderPipeline::new(
        Box::new(JsonRecordStore::with_path(config.data_file.clone())),
        Box::new(CommandSheetRenderer::new(config.sheet_command.clone())),
        Box::new(CommandLabelExtractor::new(
            config.crop_command.clone(),
            config.preview_image.clone(),
        )),
    );

    let preview = PreviewRuntime::new(&config.placeholder_preview_image);
    let context = Rc::new(FormContext {
        registry: RefCell::new(FieldRegistry::new()),
        pipeline,
        preview,
    });

    let layout = Fixed::new();

    let logo = gtk4::Picture::for_file(&gtk4::gio::File::for_path(&config.logo_image));
    logo.set_can_shrink(true);
    layout.put(&logo, 30.0, 25.0);

    layout.put(context.preview.picture(), 220.0, 25.0);
    layout.put(context.preview.status_label(), 10.0, 215.0);

    let grid = form_runtime::build_input_grid(&context);
    layout.put(&grid, 60.0, 125.0);

    let trigger = trigger_button::build_trigger_button(&context, &window);
    let trigger_x = f64::from(tokens.window_width - tokens.trigger_canvas_width) / 2.0;
    layout.put(&trigger, trigger_x, 240.0);

    form_runtime::install_background_focus_clear(&window, &layout);

    window.set_child(Some(&layout));
    window.present();
}
