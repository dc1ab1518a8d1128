//! Ontology attachment panel.
//!
//! The attachment itself is optional and owned by the parent form; it is
//! materialized lazily on the first mutating action, stamped with the tab
//! that was active at that moment. The panel keeps only view state: the
//! active tab, and one draft apiece for the add-term and add-relationship
//! forms.

use indexmap::IndexMap;

use crate::form::split_comma_list;
use crate::models::{
    generate_id, DictionaryTerm, EntityRelationship, OntologyAttachment, OntologyTemplate,
    OntologyType, RelationshipType,
};

/// Draft of a dictionary term being composed in the add-term form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TermDraft {
    pub term: String,
    pub synonyms: Vec<String>,
    pub definition: String,
    pub related_terms: Vec<String>,
}

/// Draft of an entity relationship being composed in the add-relationship
/// form. The relationship type always carries a default, so it never blocks
/// the add.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RelationshipDraft {
    pub source_entity: String,
    pub target_entity: String,
    pub relationship_field: String,
    pub relationship_type: RelationshipType,
}

/// Partial update to the attachment. `ontology_type` is only carried by
/// tab-driven updates; patches from the add/remove paths leave an existing
/// attachment's type alone.
#[derive(Clone, Debug, Default)]
pub struct OntologyPatch {
    pub name: Option<String>,
    pub source: Option<String>,
    pub ontology_type: Option<OntologyType>,
    pub terms: Option<Vec<DictionaryTerm>>,
    pub relationships: Option<Vec<EntityRelationship>>,
}

/// View state of the attachment panel.
#[derive(Clone, Debug)]
pub struct OntologyPanel {
    active_tab: OntologyType,
    term_draft: TermDraft,
    relationship_draft: RelationshipDraft,
    show_term_form: bool,
    show_relationship_form: bool,
}

impl Default for OntologyPanel {
    fn default() -> Self {
        Self {
            active_tab: OntologyType::Existing,
            term_draft: TermDraft::default(),
            relationship_draft: RelationshipDraft::default(),
            show_term_form: false,
            show_relationship_form: false,
        }
    }
}

impl OntologyPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected tab. Switching tabs is view-only: it neither creates nor
    /// mutates the attachment.
    pub fn active_tab(&self) -> OntologyType {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: OntologyType) {
        self.active_tab = tab;
    }

    /// Merge a patch into the attachment, materializing it first if absent.
    /// A freshly materialized attachment takes its type from the active tab;
    /// after that, only patches that explicitly carry a type change it.
    pub fn apply(&self, ontology: &mut Option<OntologyAttachment>, patch: OntologyPatch) {
        let target = ontology.get_or_insert_with(|| OntologyAttachment::new(self.active_tab));
        if let Some(v) = patch.name {
            target.name = v;
        }
        if let Some(v) = patch.source {
            target.source = Some(v);
        }
        if let Some(v) = patch.ontology_type {
            target.ontology_type = v;
        }
        if let Some(v) = patch.terms {
            target.terms = v;
        }
        if let Some(v) = patch.relationships {
            target.relationships = v;
        }
    }

    /// "Existing" tab selector: reference a published ontology by id. The id
    /// doubles as the display name until the backend resolves it.
    pub fn select_published(&self, ontology: &mut Option<OntologyAttachment>, id: &str) {
        self.apply(
            ontology,
            OntologyPatch {
                name: Some(id.to_string()),
                source: Some(id.to_string()),
                ontology_type: Some(OntologyType::Existing),
                ..Default::default()
            },
        );
    }

    /// Template card click: on a catalog hit, adopt the template's name and
    /// standard and force the template type. Unknown ids are a no-op.
    pub fn select_template(
        &self,
        ontology: &mut Option<OntologyAttachment>,
        catalog: &IndexMap<String, OntologyTemplate>,
        id: &str,
    ) {
        if let Some(template) = catalog.get(id) {
            self.apply(
                ontology,
                OntologyPatch {
                    name: Some(template.name.clone()),
                    source: Some(template.standard.clone()),
                    ontology_type: Some(OntologyType::Template),
                    ..Default::default()
                },
            );
        }
    }

    /// Discard the whole attachment. The active tab and both drafts survive.
    pub fn clear(&self, ontology: &mut Option<OntologyAttachment>) {
        *ontology = None;
    }

    // -- add-term form ------------------------------------------------------

    pub fn term_draft(&self) -> &TermDraft {
        &self.term_draft
    }

    pub fn show_term_form(&self) -> bool {
        self.show_term_form
    }

    pub fn open_term_form(&mut self) {
        self.show_term_form = true;
    }

    pub fn cancel_term_form(&mut self) {
        self.show_term_form = false;
    }

    pub fn set_term(&mut self, term: &str) {
        self.term_draft.term = term.to_string();
    }

    pub fn set_term_definition(&mut self, definition: &str) {
        self.term_draft.definition = definition.to_string();
    }

    /// Comma-separated editor; lossy for values containing commas.
    pub fn set_term_synonyms(&mut self, input: &str) {
        self.term_draft.synonyms = split_comma_list(input);
    }

    /// Comma-separated editor; entries need not resolve to existing terms.
    pub fn set_term_related(&mut self, input: &str) {
        self.term_draft.related_terms = split_comma_list(input);
    }

    /// The add button's enabled state.
    pub fn can_add_term(&self) -> bool {
        !self.term_draft.term.is_empty() && !self.term_draft.definition.is_empty()
    }

    /// Append the drafted term. On success the draft is cleared and the form
    /// hidden; with an incomplete draft this is a strict no-op (the draft is
    /// kept and the form stays visible).
    pub fn add_term(&mut self, ontology: &mut Option<OntologyAttachment>) {
        if !self.can_add_term() {
            return;
        }
        let draft = std::mem::take(&mut self.term_draft);
        let term = DictionaryTerm {
            id: generate_id("term"),
            term: draft.term,
            synonyms: draft.synonyms,
            definition: draft.definition,
            related_terms: draft.related_terms,
        };
        let mut terms = ontology.as_ref().map(|o| o.terms.clone()).unwrap_or_default();
        terms.push(term);
        self.apply(
            ontology,
            OntologyPatch {
                terms: Some(terms),
                ..Default::default()
            },
        );
        self.show_term_form = false;
    }

    pub fn remove_term(&self, ontology: &mut Option<OntologyAttachment>, term_id: &str) {
        let remaining = ontology
            .as_ref()
            .map(|o| {
                o.terms
                    .iter()
                    .filter(|t| t.id != term_id)
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        self.apply(
            ontology,
            OntologyPatch {
                terms: Some(remaining),
                ..Default::default()
            },
        );
    }

    // -- add-relationship form ----------------------------------------------

    pub fn relationship_draft(&self) -> &RelationshipDraft {
        &self.relationship_draft
    }

    pub fn show_relationship_form(&self) -> bool {
        self.show_relationship_form
    }

    pub fn open_relationship_form(&mut self) {
        self.show_relationship_form = true;
    }

    pub fn cancel_relationship_form(&mut self) {
        self.show_relationship_form = false;
    }

    pub fn set_relationship_source(&mut self, source: &str) {
        self.relationship_draft.source_entity = source.to_string();
    }

    pub fn set_relationship_target(&mut self, target: &str) {
        self.relationship_draft.target_entity = target.to_string();
    }

    pub fn set_relationship_field(&mut self, field: &str) {
        self.relationship_draft.relationship_field = field.to_string();
    }

    pub fn set_relationship_type(&mut self, relationship_type: RelationshipType) {
        self.relationship_draft.relationship_type = relationship_type;
    }

    /// All three of source, target, and join field are required; the type
    /// never is.
    pub fn can_add_relationship(&self) -> bool {
        !self.relationship_draft.source_entity.is_empty()
            && !self.relationship_draft.target_entity.is_empty()
            && !self.relationship_draft.relationship_field.is_empty()
    }

    /// Append the drafted relationship; same success/no-op contract as
    /// [`OntologyPanel::add_term`].
    pub fn add_relationship(&mut self, ontology: &mut Option<OntologyAttachment>) {
        if !self.can_add_relationship() {
            return;
        }
        let draft = std::mem::take(&mut self.relationship_draft);
        let relationship = EntityRelationship {
            id: generate_id("rel"),
            source_entity: draft.source_entity,
            target_entity: draft.target_entity,
            relationship_field: draft.relationship_field,
            relationship_type: draft.relationship_type,
        };
        let mut relationships = ontology
            .as_ref()
            .map(|o| o.relationships.clone())
            .unwrap_or_default();
        relationships.push(relationship);
        self.apply(
            ontology,
            OntologyPatch {
                relationships: Some(relationships),
                ..Default::default()
            },
        );
        self.show_relationship_form = false;
    }

    pub fn remove_relationship(&self, ontology: &mut Option<OntologyAttachment>, rel_id: &str) {
        let remaining = ontology
            .as_ref()
            .map(|o| {
                o.relationships
                    .iter()
                    .filter(|r| r.id != rel_id)
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        self.apply(
            ontology,
            OntologyPatch {
                relationships: Some(remaining),
                ..Default::default()
            },
        );
    }
}
