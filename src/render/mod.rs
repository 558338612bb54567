use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

/// External rendering collaborators. The sheet generator and single-label
/// extractor are separate programs; their rendering internals are not part
/// of this crate and they are invoked synchronously through their call
/// contracts only: zero arguments for default output locations, one
/// positional path argument for an explicit destination.

const DEFAULT_SHEET_COMMAND: &str = "lovely-labels-sheet";
const DEFAULT_CROP_COMMAND: &str = "lovely-labels-crop";
const DEFAULT_PREVIEW_IMAGE: &str = "output/single_address_label.png";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to launch {command}: {source}")]
    CommandIo {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("{command} failed: {message}")]
    CommandFailed { command: String, message: String },
    #[error("{command} reported success but produced no file at {path}")]
    MissingOutput { command: String, path: PathBuf },
}

pub type RenderResult<T> = std::result::Result<T, RenderError>;

/// Sheet-generation collaborator: renders the multi-label PDF from the
/// most recently persisted record.
pub trait SheetRenderer {
    /// Renders to the collaborator's internal default location.
    fn render_default(&self) -> RenderResult<()>;
    /// Renders to a caller-supplied destination.
    fn render_to(&self, target: &Path) -> RenderResult<()>;
}

/// Single-label extraction collaborator: reads the default sheet output
/// and produces the preview image, returning where it wrote it.
pub trait LabelExtractor {
    fn extract_preview(&self) -> RenderResult<PathBuf>;
}

#[derive(Debug, Clone)]
pub struct CommandSheetRenderer {
    command: String,
}

impl CommandSheetRenderer {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Default for CommandSheetRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_SHEET_COMMAND)
    }
}

impl SheetRenderer for CommandSheetRenderer {
    fn render_default(&self) -> RenderResult<()> {
        run_command_status(&self.command, None)
    }

    fn render_to(&self, target: &Path) -> RenderResult<()> {
        run_command_status(&self.command, Some(target))
    }
}

#[derive(Debug, Clone)]
pub struct CommandLabelExtractor {
    command: String,
    preview_image: PathBuf,
}

impl CommandLabelExtractor {
    pub fn new(command: impl Into<String>, preview_image: PathBuf) -> Self {
        Self {
            command: command.into(),
            preview_image,
        }
    }
}

impl Default for CommandLabelExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_CROP_COMMAND, PathBuf::from(DEFAULT_PREVIEW_IMAGE))
    }
}

impl LabelExtractor for CommandLabelExtractor {
    fn extract_preview(&self) -> RenderResult<PathBuf> {
        run_command_status(&self.command, None)?;

        if !self.preview_image.is_file() {
            return Err(RenderError::MissingOutput {
                command: self.command.clone(),
                path: self.preview_image.clone(),
            });
        }
        Ok(self.preview_image.clone())
    }
}

fn run_command_status(command: &str, target: Option<&Path>) -> RenderResult<()> {
    let mut process = Command::new(command);
    if let Some(target) = target {
        process.arg(target);
    }

    let status = process.status().map_err(|err| RenderError::CommandIo {
        command: command.to_string(),
        source: err,
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(RenderError::CommandFailed {
            command: command.to_string(),
            message: format!("command exited with status: {status}"),
        })
    }
}
