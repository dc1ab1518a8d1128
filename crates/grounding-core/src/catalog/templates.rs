//! Ontology template catalog and the published-ontology options of the
//! attachment panel's "existing" tab.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::OntologyTemplate;

/// Template catalog keyed by template id. Iteration order is the display
/// order of the template grid.
pub fn ontology_templates() -> IndexMap<String, OntologyTemplate> {
    let templates = [
        OntologyTemplate {
            id: "fibo".into(),
            name: "Financial Business Ontology".into(),
            standard: "FIBO 2024 Q2".into(),
            description: "Instruments, parties, and agreements for finance corpora.".into(),
        },
        OntologyTemplate {
            id: "fhir".into(),
            name: "Clinical Terminology".into(),
            standard: "HL7 FHIR R5".into(),
            description: "Patient, encounter, and observation vocabulary for healthcare data."
                .into(),
        },
        OntologyTemplate {
            id: "schema-org".into(),
            name: "General Web Vocabulary".into(),
            standard: "Schema.org v26".into(),
            description: "Broad-coverage entities for mixed document collections.".into(),
        },
        OntologyTemplate {
            id: "gs1".into(),
            name: "Product & Logistics".into(),
            standard: "GS1 Global Data Dictionary".into(),
            description: "Trade items, shipments, and locations for supply-chain data.".into(),
        },
    ];
    templates.into_iter().map(|t| (t.id.clone(), t)).collect()
}

/// Look a template up by id.
pub fn template_by_id(id: &str) -> Option<OntologyTemplate> {
    ontology_templates().shift_remove(id)
}

/// A published ontology selectable on the "existing" tab.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedOntology {
    pub id: String,
    pub label: String,
}

/// Published ontologies exposed by the platform's ontology definitions.
pub fn published_ontologies() -> Vec<PublishedOntology> {
    vec![
        PublishedOntology {
            id: "healthcare-ontology".into(),
            label: "Healthcare Ontology v2.1".into(),
        },
        PublishedOntology {
            id: "finance-ontology".into(),
            label: "Finance Ontology v1.3".into(),
        },
        PublishedOntology {
            id: "manufacturing-ontology".into(),
            label: "Manufacturing Ontology v3.0".into(),
        },
    ]
}
