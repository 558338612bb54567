use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::form::FieldRegistry;
use crate::record::{RecipientRecord, RecordError};
use crate::render::{LabelExtractor, RenderError, SheetRenderer};
use crate::storage::{RecordStore, StorageError};

/// Save-path prompt collaborator. A dismissed prompt returns `None`,
/// which is a normal no-op, not an error.
pub trait SavePathPrompt {
    fn choose_destination(&self) -> Option<PathBuf>;
}

pub type PipelineResult<T> = std::result::Result<T, PipelineError>;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Incomplete(#[from] RecordError),
    #[error("failed to persist recipient record: {0}")]
    Persist(#[from] StorageError),
    #[error("label sheet rendering failed: {0}")]
    RenderSheet(#[source] RenderError),
    #[error("preview extraction failed: {0}")]
    ExtractPreview(#[source] RenderError),
}

/// Orchestrates "a field committed" into persisted data and refreshed
/// rendering artifacts. Owns its collaborators behind trait objects so
/// the three external calls can later move off the dispatch path without
/// touching field-state logic. All steps run synchronously, in order.
pub struct RenderPipeline {
    store: Box<dyn RecordStore>,
    sheet: Box<dyn SheetRenderer>,
    extractor: Box<dyn LabelExtractor>,
}

impl RenderPipeline {
    pub fn new(
        store: Box<dyn RecordStore>,
        sheet: Box<dyn SheetRenderer>,
        extractor: Box<dyn LabelExtractor>,
    ) -> Self {
        Self {
            store,
            sheet,
            extractor,
        }
    }

    /// Runs the full commit sequence: snapshot all six fields, derive the
    /// record (fails on an empty "last" before anything is written),
    /// persist, render the sheet to its default location, extract the
    /// single-label preview. Returns the preview image path for the UI to
    /// display. Any error leaves the previously displayed preview intact.
    pub fn commit(&self, registry: &FieldRegistry) -> PipelineResult<PathBuf> {
        let snapshot = registry.snapshot();
        let record = RecipientRecord::from_snapshot(&snapshot)?;

        tracing::debug!(image = %record.image, "persisting recipient record");
        self.store.persist(&record)?;

        self.sheet
            .render_default()
            .map_err(PipelineError::RenderSheet)?;

        let preview = self
            .extractor
            .extract_preview()
            .map_err(PipelineError::ExtractPreview)?;
        tracing::debug!(preview = %preview.display(), "preview refreshed");
        Ok(preview)
    }

    /// Explicit-path export: prompt for a destination, then render the
    /// sheet there. Does not re-snapshot or persist; the sheet renderer
    /// reads the most recently persisted record. Cancelling the prompt
    /// performs no collaborator call at all.
    pub fn export_sheet(&self, prompt: &dyn SavePathPrompt) -> PipelineResult<Option<PathBuf>> {
        let Some(target) = prompt.choose_destination() else {
            tracing::debug!("sheet export cancelled at the save prompt");
            return Ok(None);
        };

        self.export_sheet_to(&target)?;
        Ok(Some(target))
    }

    /// Path-supplied export, used directly by the async file dialog
    /// callback in the GTK layer.
    pub fn export_sheet_to(&self, target: &Path) -> PipelineResult<()> {
        tracing::info!(target = %target.display(), "exporting label sheet");
        self.sheet
            .render_to(target)
            .map_err(PipelineError::RenderSheet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldId;
    use std::cell::RefCell;
    use std::rc::Rc;

    type CallLog = Rc<RefCell<Vec<String>>>;

    struct FakeStore {
        log: CallLog,
        persisted: Rc<RefCell<Vec<RecipientRecord>>>,
        fail: bool,
    }

    impl RecordStore for FakeStore {
        fn persist(&self, record: &RecipientRecord) -> Result<(), StorageError> {
            if self.fail {
                return Err(StorageError::Io(std::io::Error::other("disk full")));
            }
            self.log.borrow_mut().push("persist".to_string());
            self.persisted.borrow_mut().push(record.clone());
            Ok(())
        }
    }

    struct FakeSheet {
        log: CallLog,
        fail: bool,
    }

    impl SheetRenderer for FakeSheet {
        fn render_default(&self) -> Result<(), RenderError> {
            if self.fail {
                return Err(RenderError::CommandFailed {
                    command: "sheet".to_string(),
                    message: "missing asset".to_string(),
                });
            }
            self.log.borrow_mut().push("sheet:default".to_string());
            Ok(())
        }

        fn render_to(&self, target: &Path) -> Result<(), RenderError> {
            if self.fail {
                return Err(RenderError::CommandFailed {
                    command: "sheet".to_string(),
                    message: "missing asset".to_string(),
                });
            }
            self.log
                .borrow_mut()
                .push(format!("sheet:{}", target.display()));
            Ok(())
        }
    }

    struct FakeExtractor {
        log: CallLog,
    }

    impl LabelExtractor for FakeExtractor {
        fn extract_preview(&self) -> Result<PathBuf, RenderError> {
            self.log.borrow_mut().push("extract".to_string());
            Ok(PathBuf::from("output/single_address_label.png"))
        }
    }

    struct FakePrompt {
        destination: Option<PathBuf>,
        log: CallLog,
    }

    impl SavePathPrompt for FakePrompt {
        fn choose_destination(&self) -> Option<PathBuf> {
            self.log.borrow_mut().push("prompt".to_string());
            self.destination.clone()
        }
    }

    struct Harness {
        pipeline: RenderPipeline,
        log: CallLog,
        persisted: Rc<RefCell<Vec<RecipientRecord>>>,
    }

    fn harness(store_fails: bool, sheet_fails: bool) -> Harness {
        let log: CallLog = Rc::new(RefCell::new(Vec::new()));
        let persisted = Rc::new(RefCell::new(Vec::new()));
        let pipeline = RenderPipeline::new(
            Box::new(FakeStore {
                log: log.clone(),
                persisted: persisted.clone(),
                fail: store_fails,
            }),
            Box::new(FakeSheet {
                log: log.clone(),
                fail: sheet_fails,
            }),
            Box::new(FakeExtractor { log: log.clone() }),
        );
        Harness {
            pipeline,
            log,
            persisted,
        }
    }

    fn full_registry() -> FieldRegistry {
        let mut registry = FieldRegistry::new();
        for (id, text) in [
            (FieldId::First, "Jane"),
            (FieldId::Last, "Doe"),
            (FieldId::Address, "1 Rd"),
            (FieldId::City, "Town"),
            (FieldId::State, "CA"),
            (FieldId::Zip, "90001"),
        ] {
            registry.controller_mut(id).focus_gained();
            registry.controller_mut(id).focus_lost(text);
        }
        registry
    }

    #[test]
    fn commit_runs_persist_sheet_extract_in_order() {
        let harness = harness(false, false);
        let preview = harness.pipeline.commit(&full_registry()).unwrap();

        assert_eq!(preview, PathBuf::from("output/single_address_label.png"));
        assert_eq!(
            *harness.log.borrow(),
            vec!["persist", "sheet:default", "extract"]
        );
        assert_eq!(
            harness.persisted.borrow()[0].image,
            "images/letters/D.jpg"
        );
    }

    #[test]
    fn commit_twice_persists_identical_records() {
        let harness = harness(false, false);
        let registry = full_registry();

        harness.pipeline.commit(&registry).unwrap();
        harness.pipeline.commit(&registry).unwrap();

        let persisted = harness.persisted.borrow();
        assert_eq!(persisted.len(), 2);
        assert_eq!(persisted[0], persisted[1]);
    }

    #[test]
    fn placeholder_last_field_stops_the_pipeline_before_any_collaborator() {
        let harness = harness(false, false);
        let mut registry = FieldRegistry::new();
        registry.controller_mut(FieldId::First).focus_gained();
        registry.controller_mut(FieldId::First).focus_lost("Jane");

        let err = harness.pipeline.commit(&registry).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Incomplete(RecordError::MissingLastName)
        ));
        assert!(harness.log.borrow().is_empty());
    }

    #[test]
    fn persist_failure_skips_the_rendering_collaborators() {
        let harness = harness(true, false);
        let err = harness.pipeline.commit(&full_registry()).unwrap_err();

        assert!(matches!(err, PipelineError::Persist(_)));
        assert!(harness.log.borrow().is_empty());
    }

    #[test]
    fn sheet_failure_skips_preview_extraction() {
        let harness = harness(false, true);
        let err = harness.pipeline.commit(&full_registry()).unwrap_err();

        assert!(matches!(err, PipelineError::RenderSheet(_)));
        assert_eq!(*harness.log.borrow(), vec!["persist"]);
    }

    #[test]
    fn cancelled_save_prompt_is_a_no_op() {
        let harness = harness(false, false);
        let prompt = FakePrompt {
            destination: None,
            log: harness.log.clone(),
        };

        let exported = harness.pipeline.export_sheet(&prompt).unwrap();
        assert!(exported.is_none());
        assert_eq!(*harness.log.borrow(), vec!["prompt"]);
    }

    #[test]
    fn export_renders_to_the_chosen_path_without_persisting() {
        let harness = harness(false, false);
        let prompt = FakePrompt {
            destination: Some(PathBuf::from("/tmp/labels.pdf")),
            log: harness.log.clone(),
        };

        let exported = harness.pipeline.export_sheet(&prompt).unwrap();
        assert_eq!(exported, Some(PathBuf::from("/tmp/labels.pdf")));
        assert_eq!(*harness.log.borrow(), vec!["prompt", "sheet:/tmp/labels.pdf"]);
        assert!(harness.persisted.borrow().is_empty());
    }
}
