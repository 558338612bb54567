pub mod field;
pub mod registry;

pub use field::{FieldController, FieldId, FocusGain, FocusLoss};
pub use registry::{FieldRegistry, FormSnapshot};
