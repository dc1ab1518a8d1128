//! Create/edit page: the canonical form aggregate, validation, and the
//! save/reset actions.

use crate::catalog::{seed, templates};
use crate::errors::{GroundingError, GroundingResult};
use crate::form::field_definitions::{FieldDefinitionsPanel, FieldPatch};
use crate::form::freshness;
use crate::form::ontology::OntologyPanel;
use crate::models::{
    CreateIndexForm, DataSourceSelection, FreshnessType, Index, IngestionType, OntologyType,
    RefreshCadence, RelationshipType, ScheduleFrequency, DESCRIPTION_MAX_LEN,
};

/// View state of the create/edit page.
///
/// The page owns the form aggregate and the sub-panels' transient state;
/// every panel operation below hands the panel exactly the slice of the form
/// it manages and merges nothing else.
#[derive(Clone, Debug)]
pub struct CreateIndexPage {
    pub form: CreateIndexForm,
    editing: bool,
    show_data_source_settings: bool,
    pub fields_panel: FieldDefinitionsPanel,
    pub ontology_panel: OntologyPanel,
}

impl CreateIndexPage {
    /// Blank form for creating a new index. The data source settings stay
    /// hidden until a data source is picked.
    pub fn create() -> Self {
        Self {
            form: CreateIndexForm::new(),
            editing: false,
            show_data_source_settings: false,
            fields_panel: FieldDefinitionsPanel::new(),
            ontology_panel: OntologyPanel::new(),
        }
    }

    /// Pre-filled form for editing an existing index; the settings section
    /// starts revealed.
    pub fn edit(index: &Index) -> Self {
        Self {
            form: CreateIndexForm::for_index(index),
            editing: true,
            show_data_source_settings: true,
            fields_panel: FieldDefinitionsPanel::new(),
            ontology_panel: OntologyPanel::new(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn show_data_source_settings(&self) -> bool {
        self.show_data_source_settings
    }

    // -- general details ----------------------------------------------------

    pub fn set_name(&mut self, name: &str) {
        self.form.name = name.to_string();
    }

    pub fn set_description(&mut self, description: &str) {
        self.form.description = description.to_string();
    }

    pub fn set_folder(&mut self, folder: &str) {
        self.form.folder = folder.to_string();
    }

    /// Character counter under the description box ("12/1024").
    pub fn description_counter(&self) -> String {
        format!("{}/{}", self.form.description.chars().count(), DESCRIPTION_MAX_LEN)
    }

    // -- data settings ------------------------------------------------------

    /// Picking either data source also reveals the data source settings
    /// section; nothing un-reveals it for the life of the page.
    pub fn select_data_source(&mut self, selection: DataSourceSelection) {
        self.form.data_source = Some(selection);
        self.show_data_source_settings = true;
    }

    /// File upload is only offered once the storage bucket is the selected
    /// source; the transfer itself is a backend concern.
    pub fn upload_available(&self) -> bool {
        self.form.data_source == Some(DataSourceSelection::StorageBucket)
    }

    // -- scheduling ---------------------------------------------------------

    pub fn set_ingestion_type(&mut self, ingestion_type: IngestionType) {
        self.form.ingestion_type = ingestion_type;
    }

    pub fn set_enable_schedule(&mut self, enabled: bool) {
        self.form.enable_schedule = enabled;
    }

    pub fn set_schedule_frequency(&mut self, frequency: ScheduleFrequency) {
        self.form.schedule_frequency = Some(frequency);
    }

    // -- actions ------------------------------------------------------------

    pub fn is_valid(&self) -> bool {
        self.form.is_valid()
    }

    /// Hand the form to the save contract. With required fields missing this
    /// refuses without touching any state — the disabled-save-button
    /// contract, surfaced as an error for non-interactive callers.
    pub fn submit(&self) -> GroundingResult<CreateIndexForm> {
        let missing = self.form.missing_fields();
        if !missing.is_empty() {
            return Err(GroundingError::IncompleteForm { missing });
        }
        Ok(self.form.clone())
    }

    /// Restore a fresh default form in place. Distinct from cancel (the
    /// shell discards the whole page): reset keeps the page alive and does
    /// not hide an already-revealed settings section.
    pub fn reset(&mut self) {
        self.form = CreateIndexForm::default();
    }

    /// Bulk-replace an empty field list with the sample set. A single
    /// irreversible overwrite, offered only while the list is empty.
    pub fn load_sample_fields(&mut self) {
        if self.form.field_definitions.is_empty() {
            self.form.field_definitions = seed::sample_field_definitions();
        }
    }

    // -- field definitions panel -------------------------------------------

    pub fn add_field(&mut self) -> String {
        self.fields_panel.add_field(&mut self.form.field_definitions)
    }

    pub fn update_field(&mut self, id: &str, patch: FieldPatch) {
        self.fields_panel
            .update_field(&mut self.form.field_definitions, id, patch);
    }

    pub fn remove_field(&mut self, id: &str) {
        self.fields_panel
            .remove_field(&mut self.form.field_definitions, id);
    }

    pub fn toggle_field(&mut self, id: &str) {
        self.fields_panel.toggle(id);
    }

    pub fn set_field_example_values(&mut self, id: &str, input: &str) {
        self.fields_panel
            .set_example_values(&mut self.form.field_definitions, id, input);
    }

    // -- ontology panel -----------------------------------------------------

    pub fn set_ontology_tab(&mut self, tab: OntologyType) {
        self.ontology_panel.set_active_tab(tab);
    }

    pub fn select_published_ontology(&mut self, id: &str) {
        self.ontology_panel.select_published(&mut self.form.ontology, id);
    }

    pub fn select_ontology_template(&mut self, id: &str) {
        self.ontology_panel
            .select_template(&mut self.form.ontology, &templates::ontology_templates(), id);
    }

    pub fn add_term(&mut self) {
        self.ontology_panel.add_term(&mut self.form.ontology);
    }

    pub fn remove_term(&mut self, term_id: &str) {
        self.ontology_panel.remove_term(&mut self.form.ontology, term_id);
    }

    pub fn add_relationship(&mut self) {
        self.ontology_panel.add_relationship(&mut self.form.ontology);
    }

    pub fn remove_relationship(&mut self, rel_id: &str) {
        self.ontology_panel
            .remove_relationship(&mut self.form.ontology, rel_id);
    }

    pub fn set_relationship_type(&mut self, relationship_type: RelationshipType) {
        self.ontology_panel.set_relationship_type(relationship_type);
    }

    pub fn clear_ontology(&mut self) {
        self.ontology_panel.clear(&mut self.form.ontology);
    }

    // -- freshness panel ----------------------------------------------------

    pub fn set_freshness_type(&mut self, freshness_type: FreshnessType) {
        freshness::select_type(&mut self.form.freshness_config, freshness_type);
    }

    pub fn set_refresh_cadence(&mut self, cadence: RefreshCadence) {
        freshness::set_cadence(&mut self.form.freshness_config, cadence);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DataType;

    /// Create starts hidden; editing starts revealed; picking a source
    /// reveals and nothing hides again.
    #[test]
    fn settings_reveal_is_irreversible() {
        let mut page = CreateIndexPage::create();
        assert!(!page.show_data_source_settings());

        page.select_data_source(DataSourceSelection::Connector);
        assert!(page.show_data_source_settings());

        page.reset();
        assert!(page.show_data_source_settings());
        assert_eq!(page.form.data_source, None);
    }

    /// The worked validity example: name, folder, and source make the form
    /// valid; clearing the name invalidates it again.
    #[test]
    fn validity_scenario() {
        let mut page = CreateIndexPage::create();
        page.set_name("Docs");
        page.set_folder("Finance");
        page.select_data_source(DataSourceSelection::StorageBucket);
        assert!(page.is_valid());

        page.set_name("");
        assert!(!page.is_valid());
    }

    /// Submit refuses an invalid form without side effects and names the
    /// missing fields; a valid form round-trips.
    #[test]
    fn submit_gate() {
        let mut page = CreateIndexPage::create();
        let err = page.submit().unwrap_err();
        assert!(err.to_string().contains("name"));
        assert!(err.to_string().contains("dataSource"));

        page.set_name("Docs");
        page.set_folder("Finance");
        page.select_data_source(DataSourceSelection::StorageBucket);
        let form = page.submit().unwrap();
        assert_eq!(form.name, "Docs");
    }

    /// Editing pre-fills from the index and reveals settings.
    #[test]
    fn edit_prefill() {
        let indexes = crate::catalog::seed::sample_indexes();
        let page = CreateIndexPage::edit(&indexes[0]);
        assert!(page.is_editing());
        assert!(page.show_data_source_settings());
        assert_eq!(page.form.name, indexes[0].name);
        assert_eq!(
            page.form.data_source,
            Some(DataSourceSelection::StorageBucket)
        );
    }

    /// Reset restores the default form in place but keeps page-level state.
    #[test]
    fn reset_restores_defaults() {
        let mut page = CreateIndexPage::create();
        page.set_name("Docs");
        page.set_description("A description");
        page.set_enable_schedule(true);
        page.add_field();

        page.reset();
        assert_eq!(page.form, CreateIndexForm::default());
        assert!(!page.is_editing());
    }

    /// Sample fields only load into an empty list.
    #[test]
    fn sample_fields_only_when_empty() {
        let mut page = CreateIndexPage::create();
        page.load_sample_fields();
        let loaded = page.form.field_definitions.len();
        assert!(loaded > 0);

        let first_id = page.form.field_definitions[0].id.clone();
        page.load_sample_fields();
        assert_eq!(page.form.field_definitions.len(), loaded);
        assert_eq!(page.form.field_definitions[0].id, first_id);

        let mut page = CreateIndexPage::create();
        page.add_field();
        page.load_sample_fields();
        assert_eq!(page.form.field_definitions.len(), 1);
    }

    /// Upload is offered only for the storage bucket.
    #[test]
    fn upload_availability() {
        let mut page = CreateIndexPage::create();
        assert!(!page.upload_available());
        page.select_data_source(DataSourceSelection::Connector);
        assert!(!page.upload_available());
        page.select_data_source(DataSourceSelection::StorageBucket);
        assert!(page.upload_available());
    }

    /// The description counter tracks characters against the budget.
    #[test]
    fn description_counter_format() {
        let mut page = CreateIndexPage::create();
        assert_eq!(page.description_counter(), "0/1024");
        page.set_description("Grounding corpus");
        assert_eq!(page.description_counter(), "16/1024");
    }

    /// Panel plumbing reaches the form's slices.
    #[test]
    fn panel_delegation_touches_form() {
        let mut page = CreateIndexPage::create();

        let id = page.add_field();
        page.update_field(
            &id,
            FieldPatch {
                data_type: Some(DataType::Date),
                ..Default::default()
            },
        );
        page.set_field_example_values(&id, "2026-01-01, 2026-02-01");
        assert_eq!(page.form.field_definitions[0].data_type, DataType::Date);
        assert_eq!(page.form.field_definitions[0].example_values.len(), 2);

        page.set_ontology_tab(OntologyType::Template);
        page.select_ontology_template("schema-org");
        assert_eq!(
            page.form.ontology.as_ref().unwrap().ontology_type,
            OntologyType::Template
        );
        page.clear_ontology();
        assert!(page.form.ontology.is_none());

        page.set_freshness_type(FreshnessType::Live);
        assert_eq!(page.form.freshness_config.refresh_cadence, None);
    }
}
