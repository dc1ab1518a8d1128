//! Seed indexes, folder catalog, sample field definitions, and the tenant
//! quota snapshot.

use serde::{Deserialize, Serialize};

use crate::models::{
    generate_id, DataType, DictionaryTerm, EntityRelationship, FieldDefinition, FreshnessConfig,
    FreshnessType, Index, IngestionStatus, OntologyAttachment, OntologyType, RefreshCadence,
    RelationshipType,
};

/// Folder catalog, used both as the form's folder selector and the list
/// page's folder filter facet.
pub fn folders() -> Vec<String> {
    ["Shared", "Finance", "HR", "Legal", "Engineering"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// The seven seeded indexes visible to the operator.
///
/// Storage sizes add up to the quota snapshot's 2.21 MB total.
pub fn sample_indexes() -> Vec<Index> {
    vec![
        Index {
            id: "idx-knowledge-base".into(),
            name: "Knowledge Base Articles".into(),
            folder: "Shared".into(),
            data_source: "Storage Bucket".into(),
            description: "Published help-center articles grounding customer-facing agents.".into(),
            score: 94,
            storage_size: "512 KB".into(),
            ingestion_status: IngestionStatus::Successful,
            last_sync: "2 hours ago".into(),
            last_queried: "5 minutes ago".into(),
            field_definitions: Some(sample_field_definitions()),
            ontology: None,
            freshness_config: Some(FreshnessConfig {
                freshness_type: FreshnessType::Persistent,
                last_sync_timestamp: Some("2026-01-28 09:15 UTC".into()),
                refresh_cadence: Some(RefreshCadence::Daily),
                is_real_time: Some(false),
            }),
        },
        Index {
            id: "idx-invoice-archive".into(),
            name: "Invoice Archive".into(),
            folder: "Finance".into(),
            data_source: "Storage Bucket".into(),
            description: "Scanned and digital invoices from the past three fiscal years.".into(),
            score: 92,
            storage_size: "384 KB".into(),
            ingestion_status: IngestionStatus::Successful,
            last_sync: "1 day ago".into(),
            last_queried: "32 minutes ago".into(),
            field_definitions: None,
            ontology: Some(OntologyAttachment {
                id: generate_id("ontology"),
                name: "Finance Ontology v1.3".into(),
                ontology_type: OntologyType::Existing,
                source: Some("finance-ontology".into()),
                terms: Vec::new(),
                relationships: Vec::new(),
            }),
            freshness_config: Some(FreshnessConfig {
                freshness_type: FreshnessType::Persistent,
                last_sync_timestamp: Some("2026-01-27 22:40 UTC".into()),
                refresh_cadence: Some(RefreshCadence::Weekly),
                is_real_time: Some(false),
            }),
        },
        Index {
            id: "idx-contracts".into(),
            name: "Contract Repository".into(),
            folder: "Legal".into(),
            data_source: "Storage Bucket".into(),
            description: "Executed contracts and amendments, including supplier MSAs.".into(),
            score: 88,
            storage_size: "412 KB".into(),
            ingestion_status: IngestionStatus::InProgress,
            last_sync: "in progress".into(),
            last_queried: "3 hours ago".into(),
            field_definitions: None,
            ontology: None,
            freshness_config: None,
        },
        Index {
            id: "idx-handbook".into(),
            name: "Employee Handbook".into(),
            folder: "HR".into(),
            data_source: "Storage Bucket".into(),
            description: "Policies, benefits, and onboarding material for all regions.".into(),
            score: 76,
            storage_size: "298 KB".into(),
            ingestion_status: IngestionStatus::Successful,
            last_sync: "3 days ago".into(),
            last_queried: "1 day ago".into(),
            field_definitions: None,
            ontology: None,
            freshness_config: None,
        },
        Index {
            id: "idx-support-tickets".into(),
            name: "Customer Support Tickets".into(),
            folder: "Shared".into(),
            data_source: "Connector".into(),
            description: "Live ticket stream from the support desk connector.".into(),
            score: 71,
            storage_size: "256 KB".into(),
            ingestion_status: IngestionStatus::Pending,
            last_sync: "never".into(),
            last_queried: "never".into(),
            field_definitions: None,
            ontology: Some(OntologyAttachment {
                id: generate_id("ontology"),
                name: "Support Desk Dictionary".into(),
                ontology_type: OntologyType::Inline,
                source: None,
                terms: vec![
                    DictionaryTerm {
                        id: generate_id("term"),
                        term: "Ticket".into(),
                        synonyms: vec!["case".into(), "incident".into()],
                        definition: "A tracked customer request from intake to resolution.".into(),
                        related_terms: vec!["Escalation".into()],
                    },
                    DictionaryTerm {
                        id: generate_id("term"),
                        term: "Escalation".into(),
                        synonyms: vec!["sev bump".into()],
                        definition: "A ticket promoted to a higher support tier.".into(),
                        related_terms: vec!["Ticket".into()],
                    },
                ],
                relationships: vec![EntityRelationship {
                    id: generate_id("rel"),
                    source_entity: "Ticket".into(),
                    target_entity: "Customer".into(),
                    relationship_field: "customer_id".into(),
                    relationship_type: RelationshipType::BelongsTo,
                }],
            }),
            freshness_config: Some(FreshnessConfig {
                freshness_type: FreshnessType::Live,
                last_sync_timestamp: None,
                refresh_cadence: None,
                is_real_time: Some(true),
            }),
        },
        Index {
            id: "idx-runbooks".into(),
            name: "Engineering Runbooks".into(),
            folder: "Engineering".into(),
            data_source: "Storage Bucket".into(),
            description: "Operational runbooks and incident postmortems.".into(),
            score: 65,
            storage_size: "215 KB".into(),
            ingestion_status: IngestionStatus::Failed,
            last_sync: "5 days ago".into(),
            last_queried: "2 days ago".into(),
            field_definitions: None,
            ontology: None,
            freshness_config: None,
        },
        Index {
            id: "idx-product-catalog".into(),
            name: "Product Catalog".into(),
            folder: "Shared".into(),
            data_source: "Connector".into(),
            description: "SKU catalog exported from the commerce platform.".into(),
            score: 45,
            storage_size: "186 KB".into(),
            ingestion_status: IngestionStatus::Pending,
            last_sync: "never".into(),
            last_queried: "never".into(),
            field_definitions: None,
            ontology: None,
            freshness_config: None,
        },
    ]
}

/// Sample field definitions offered as a bulk starting point when an index
/// has none yet. Ids are minted fresh on every call.
pub fn sample_field_definitions() -> Vec<FieldDefinition> {
    vec![
        FieldDefinition {
            id: generate_id("field"),
            field_name: "document_title".into(),
            display_name: "Document Title".into(),
            data_type: DataType::String,
            description: "Human-readable title of the source document.".into(),
            example_values: vec!["Q3 Revenue Report".into(), "Onboarding Checklist".into()],
            is_queryable: true,
            is_filterable: false,
            is_required: true,
            is_pii: false,
        },
        FieldDefinition {
            id: generate_id("field"),
            field_name: "created_date".into(),
            display_name: "Created Date".into(),
            data_type: DataType::Date,
            description: "Date the document entered the source system.".into(),
            example_values: vec!["2025-11-02".into(), "2026-01-15".into()],
            is_queryable: true,
            is_filterable: true,
            is_required: false,
            is_pii: false,
        },
        FieldDefinition {
            id: generate_id("field"),
            field_name: "department".into(),
            display_name: "Department".into(),
            data_type: DataType::String,
            description: "Owning department, used to scope retrieval.".into(),
            example_values: vec!["Finance".into(), "HR".into(), "Legal".into()],
            is_queryable: true,
            is_filterable: true,
            is_required: false,
            is_pii: false,
        },
        FieldDefinition {
            id: generate_id("field"),
            field_name: "author_email".into(),
            display_name: "Author Email".into(),
            data_type: DataType::String,
            description: "Contact address of the document author.".into(),
            example_values: vec!["jordan@example.com".into()],
            is_queryable: false,
            is_filterable: false,
            is_required: false,
            is_pii: true,
        },
    ]
}

// ---------------------------------------------------------------------------
// Quota
// ---------------------------------------------------------------------------

/// Tenant-level index quota as reported by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaSnapshot {
    pub used: u32,
    pub limit: u32,
    pub storage_total: String,
}

impl QuotaSnapshot {
    pub fn percent_used(&self) -> u32 {
        if self.limit == 0 {
            return 0;
        }
        self.used * 100 / self.limit
    }

    pub fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.used)
    }
}

/// The quota banner content shown above the index table.
pub fn quota_snapshot() -> QuotaSnapshot {
    QuotaSnapshot {
        used: 8,
        limit: 100,
        storage_total: "2.21 MB".into(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
