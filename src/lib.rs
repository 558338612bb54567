pub mod app;
mod config;
pub mod error;
pub mod form;
pub mod geometry;
pub mod logging;
pub mod notification;
pub mod pipeline;
pub mod record;
pub mod render;
pub mod storage;
pub mod ui;

pub use error::{AppError, AppResult};

/// Entrypoint used by the binary and higher-level integrations.
pub fn run() -> AppResult<()> {
    logging::init();
    tracing::info!("starting Lovely Labels");

    let mut app = app::App::new();
    app.start()?;

    tracing::info!("shutdown complete");
    Ok(())
}
