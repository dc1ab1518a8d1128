//! Field definitions panel: an ordered field list with one-at-a-time
//! expansion and partial-patch editing.

use crate::form::{join_comma_list, split_comma_list};
use crate::models::{DataType, FieldDefinition};

/// Partial update to one field; `None` leaves the target value untouched.
#[derive(Clone, Debug, Default)]
pub struct FieldPatch {
    pub field_name: Option<String>,
    pub display_name: Option<String>,
    pub data_type: Option<DataType>,
    pub description: Option<String>,
    pub example_values: Option<Vec<String>>,
    pub is_queryable: Option<bool>,
    pub is_filterable: Option<bool>,
    pub is_required: Option<bool>,
    pub is_pii: Option<bool>,
}

impl FieldPatch {
    fn apply(self, field: &mut FieldDefinition) {
        if let Some(v) = self.field_name {
            field.field_name = v;
        }
        if let Some(v) = self.display_name {
            field.display_name = v;
        }
        if let Some(v) = self.data_type {
            field.data_type = v;
        }
        if let Some(v) = self.description {
            field.description = v;
        }
        if let Some(v) = self.example_values {
            field.example_values = v;
        }
        if let Some(v) = self.is_queryable {
            field.is_queryable = v;
        }
        if let Some(v) = self.is_filterable {
            field.is_filterable = v;
        }
        if let Some(v) = self.is_required {
            field.is_required = v;
        }
        if let Some(v) = self.is_pii {
            field.is_pii = v;
        }
    }
}

/// Transient UI state of the panel: at most one entry is expanded.
///
/// The field list itself belongs to the parent form; every mutating method
/// takes it as an argument.
#[derive(Clone, Debug, Default)]
pub struct FieldDefinitionsPanel {
    expanded: Option<String>,
}

impl FieldDefinitionsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the currently expanded entry, if any.
    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }

    /// Append a blank field and expand it. Returns the new field's id.
    pub fn add_field(&mut self, fields: &mut Vec<FieldDefinition>) -> String {
        let field = FieldDefinition::new();
        let id = field.id.clone();
        fields.push(field);
        self.expanded = Some(id.clone());
        id
    }

    /// Merge a partial patch into the entry matching `id`; other entries and
    /// their order are untouched. Unknown ids are ignored.
    pub fn update_field(&self, fields: &mut [FieldDefinition], id: &str, patch: FieldPatch) {
        if let Some(field) = fields.iter_mut().find(|f| f.id == id) {
            patch.apply(field);
        }
    }

    /// Delete the entry matching `id`, collapsing it if it was expanded.
    pub fn remove_field(&mut self, fields: &mut Vec<FieldDefinition>, id: &str) {
        fields.retain(|f| f.id != id);
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        }
    }

    /// Toggle expansion: re-clicking the expanded entry collapses it,
    /// clicking another entry switches expansion to it.
    pub fn toggle(&mut self, id: &str) {
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
    }

    /// Header label of an entry: display name, else field name, else a
    /// placeholder.
    pub fn header_label<'a>(&self, field: &'a FieldDefinition) -> &'a str {
        if !field.display_name.is_empty() {
            &field.display_name
        } else if !field.field_name.is_empty() {
            &field.field_name
        } else {
            "New Field"
        }
    }

    /// Display form of an entry's example values.
    pub fn example_values_text(&self, field: &FieldDefinition) -> String {
        join_comma_list(&field.example_values)
    }

    /// Edit an entry's example values from the single text input.
    pub fn set_example_values(&self, fields: &mut [FieldDefinition], id: &str, input: &str) {
        self.update_field(
            fields,
            id,
            FieldPatch {
                example_values: Some(split_comma_list(input)),
                ..Default::default()
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two adds produce two entries with distinct ids; the second add steals
    /// the expansion from the first.
    #[test]
    fn add_twice_expands_latest() {
        let mut panel = FieldDefinitionsPanel::new();
        let mut fields = Vec::new();

        let first = panel.add_field(&mut fields);
        assert!(panel.is_expanded(&first));

        let second = panel.add_field(&mut fields);
        assert_eq!(fields.len(), 2);
        assert_ne!(first, second);
        assert!(panel.is_expanded(&second));
        assert!(!panel.is_expanded(&first));
    }

    /// Re-clicking the expanded header collapses it.
    #[test]
    fn toggle_collapses_and_switches() {
        let mut panel = FieldDefinitionsPanel::new();
        let mut fields = Vec::new();
        let first = panel.add_field(&mut fields);
        let second = panel.add_field(&mut fields);

        panel.toggle(&second);
        assert_eq!(panel.expanded(), None);

        panel.toggle(&first);
        panel.toggle(&second);
        assert!(panel.is_expanded(&second));
    }

    /// Patches merge into the matching entry only, preserving order.
    #[test]
    fn update_merges_partially() {
        let mut panel = FieldDefinitionsPanel::new();
        let mut fields = Vec::new();
        let first = panel.add_field(&mut fields);
        let second = panel.add_field(&mut fields);

        panel.update_field(
            &mut fields,
            &second,
            FieldPatch {
                field_name: Some("patient_id".into()),
                is_pii: Some(true),
                ..Default::default()
            },
        );

        assert_eq!(fields[0].id, first);
        assert!(fields[0].field_name.is_empty());
        assert_eq!(fields[1].field_name, "patient_id");
        assert!(fields[1].is_pii);
        // untouched values survive the merge
        assert!(fields[1].is_queryable);
        assert_eq!(fields[1].data_type, DataType::String);
    }

    /// Blank names are permitted; nothing blocks adding or keeping them, and
    /// duplicate field names are not rejected either.
    #[test]
    fn blank_and_duplicate_names_allowed() {
        let mut panel = FieldDefinitionsPanel::new();
        let mut fields = Vec::new();
        let a = panel.add_field(&mut fields);
        let b = panel.add_field(&mut fields);
        panel.update_field(&mut fields, &a, FieldPatch {
            field_name: Some("amount".into()),
            ..Default::default()
        });
        panel.update_field(&mut fields, &b, FieldPatch {
            field_name: Some("amount".into()),
            ..Default::default()
        });
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].field_name, fields[1].field_name);
    }

    /// Removing the expanded entry clears the expansion; removing another
    /// entry leaves it alone.
    #[test]
    fn remove_clears_expansion() {
        let mut panel = FieldDefinitionsPanel::new();
        let mut fields = Vec::new();
        let first = panel.add_field(&mut fields);
        let second = panel.add_field(&mut fields);

        panel.remove_field(&mut fields, &first);
        assert_eq!(fields.len(), 1);
        assert!(panel.is_expanded(&second));

        panel.remove_field(&mut fields, &second);
        assert!(fields.is_empty());
        assert_eq!(panel.expanded(), None);
    }

    /// The example-values editor round-trips through the comma-separated
    /// text form, dropping empty segments.
    #[test]
    fn example_values_round_trip() {
        let mut panel = FieldDefinitionsPanel::new();
        let mut fields = Vec::new();
        let id = panel.add_field(&mut fields);

        panel.set_example_values(&mut fields, &id, "a, b,, c");
        assert_eq!(fields[0].example_values, ["a", "b", "c"]);
        assert_eq!(panel.example_values_text(&fields[0]), "a, b, c");
    }

    /// Header labels fall back from display name to field name to the
    /// placeholder.
    #[test]
    fn header_label_fallback() {
        let panel = FieldDefinitionsPanel::new();
        let mut field = FieldDefinition::new();
        assert_eq!(panel.header_label(&field), "New Field");

        field.field_name = "patient_id".into();
        assert_eq!(panel.header_label(&field), "patient_id");

        field.display_name = "Patient ID".into();
        assert_eq!(panel.header_label(&field), "Patient ID");
    }
}
