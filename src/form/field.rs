/// One input field of the recipient form: identity, placeholder text, and
/// the placeholder/real-value state machine driven by focus changes.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    First,
    Last,
    Address,
    City,
    State,
    Zip,
}

impl FieldId {
    /// Fixed insertion order; meaningful for layout, not for resolution.
    pub const ALL: [FieldId; 6] = [
        FieldId::First,
        FieldId::Last,
        FieldId::Address,
        FieldId::City,
        FieldId::State,
        FieldId::Zip,
    ];

    /// Hint text shown while the field holds no real input.
    pub const fn placeholder(self) -> &'static str {
        match self {
            FieldId::First => "First",
            FieldId::Last => "Last",
            FieldId::Address => "Address",
            FieldId::City => "City",
            FieldId::State => "State",
            FieldId::Zip => "Zip",
        }
    }

    /// Lower-cased key used in the persisted record.
    pub const fn key(self) -> &'static str {
        match self {
            FieldId::First => "first",
            FieldId::Last => "last",
            FieldId::Address => "address",
            FieldId::City => "city",
            FieldId::State => "state",
            FieldId::Zip => "zip",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            FieldId::First => 0,
            FieldId::Last => 1,
            FieldId::Address => 2,
            FieldId::City => 3,
            FieldId::State => 4,
            FieldId::Zip => 5,
        }
    }
}

/// Outcome of a focus-gain event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusGain {
    /// The placeholder was showing; it has been cleared for real input.
    ClearedPlaceholder,
    /// The field already held real content; nothing changed.
    Unchanged,
}

/// Outcome of a focus-loss event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusLoss {
    /// The field was left empty; its placeholder text is showing again.
    PlaceholderRestored,
    /// The field content was committed as real data. The caller is
    /// expected to run the render pipeline; re-committing an unchanged
    /// value re-runs it (idempotent, deliberately not optimized).
    Committed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldController {
    id: FieldId,
    value: String,
    placeholder_active: bool,
}

impl FieldController {
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            value: id.placeholder().to_string(),
            placeholder_active: true,
        }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Text the toolkit entry should currently display: the placeholder
    /// while active, the committed value otherwise.
    pub fn display_text(&self) -> &str {
        &self.value
    }

    pub fn is_placeholder_active(&self) -> bool {
        self.placeholder_active
    }

    /// Semantic value for persistence: a placeholder-active field is
    /// empty, the hint text never leaks into the record.
    pub fn committed_value(&self) -> &str {
        if self.placeholder_active {
            ""
        } else {
            &self.value
        }
    }

    pub fn focus_gained(&mut self) -> FocusGain {
        if self.placeholder_active {
            self.value.clear();
            self.placeholder_active = false;
            FocusGain::ClearedPlaceholder
        } else {
            FocusGain::Unchanged
        }
    }

    /// Applies the text the entry held when focus left it. Purely local
    /// state mutation; the returned outcome tells the caller whether a
    /// commit happened. Errors never originate here.
    pub fn focus_lost(&mut self, text: &str) -> FocusLoss {
        if text.is_empty() {
            self.value = self.id.placeholder().to_string();
            self.placeholder_active = true;
            FocusLoss::PlaceholderRestored
        } else {
            self.value = text.to_string();
            self.placeholder_active = false;
            FocusLoss::Committed
        }
    }
}
