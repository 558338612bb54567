use super::field::{FieldController, FieldId};

/// Owns the six field controllers in their fixed layout order and maps
/// input events back to the field they belong to. Each registered control
/// carries an explicit [`FieldId`] tag attached at construction, so
/// resolution is a plain lookup instead of widget-identity comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRegistry {
    controllers: [FieldController; 6],
}

/// Point-in-time capture of all six committed values, taken as a whole
/// whenever any single field commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    values: [(FieldId, String); 6],
}

impl FormSnapshot {
    pub fn value(&self, id: FieldId) -> &str {
        &self.values[id.index()].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.values.iter().map(|(id, value)| (*id, value.as_str()))
    }
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self {
            controllers: FieldId::ALL.map(FieldController::new),
        }
    }

    pub fn controller(&self, id: FieldId) -> &FieldController {
        &self.controllers[id.index()]
    }

    pub fn controller_mut(&mut self, id: FieldId) -> &mut FieldController {
        &mut self.controllers[id.index()]
    }

    /// Resolves a raw input event back to its controller. Events raised
    /// outside any registered field (background clicks) carry no tag and
    /// resolve to `None`; the focus pipeline treats that as a no-op.
    pub fn resolve(&mut self, source: Option<FieldId>) -> Option<&mut FieldController> {
        source.map(|id| self.controller_mut(id))
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldController> {
        self.controllers.iter()
    }

    /// Snapshots the committed value of all six fields at once, not just
    /// the field that triggered the commit.
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            values: FieldId::ALL
                .map(|id| (id, self.controller(id).committed_value().to_string())),
        }
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_registers_all_six_fields_in_layout_order() {
        let registry = FieldRegistry::new();
        let ids: Vec<FieldId> = registry.fields().map(|controller| controller.id()).collect();
        assert_eq!(ids, FieldId::ALL);
    }

    #[test]
    fn resolve_returns_the_tagged_controller() {
        let mut registry = FieldRegistry::new();
        let controller = registry
            .resolve(Some(FieldId::City))
            .expect("tagged events resolve");
        assert_eq!(controller.id(), FieldId::City);
    }

    #[test]
    fn resolve_of_an_untagged_event_is_none() {
        let mut registry = FieldRegistry::new();
        assert!(registry.resolve(None).is_none());
    }

    #[test]
    fn snapshot_captures_all_fields_not_just_the_committed_one() {
        let mut registry = FieldRegistry::new();
        registry.controller_mut(FieldId::First).focus_gained();
        registry.controller_mut(FieldId::First).focus_lost("Jane");

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.value(FieldId::First), "Jane");
        // Untouched fields contribute semantic emptiness, not hint text.
        assert_eq!(snapshot.value(FieldId::Last), "");
        assert_eq!(snapshot.value(FieldId::Zip), "");
        assert_eq!(snapshot.iter().count(), 6);
    }

    #[test]
    fn snapshot_is_stable_for_unchanged_fields() {
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

        assert_eq!(registry.snapshot(), registry.snapshot());
    }
}
