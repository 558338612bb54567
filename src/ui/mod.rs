mod style;
mod widgets;

pub use style::{ColorTokens, StyleTokens, COLOR_TOKENS, FONT_NAME, LAYOUT_TOKENS};
pub use widgets::{hint_entry, sync_hint_class, ENTRY_HINT_CLASS};
