//! Shared typed models used across the catalog, list, and form layers.
//!
//! Everything here serializes with the camelCase field names and string
//! values the backend contract uses, so a serialized [`CreateIndexForm`] is
//! exactly the payload the save endpoint expects.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

// ---------------------------------------------------------------------------
// Contract constants
// ---------------------------------------------------------------------------

/// Character budget for the index description field.
pub const DESCRIPTION_MAX_LEN: usize = 1024;

// ---------------------------------------------------------------------------
// Id generation
// ---------------------------------------------------------------------------

static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a short unique id of the form `{prefix}-{16 hex chars}`.
///
/// The hex part is a truncated SHA-256 digest over the prefix and a
/// process-wide counter, so ids stay unique even when minted back-to-back.
pub fn generate_id(prefix: &str) -> String {
    let seq = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    let mut hasher = Sha256::new();
    hasher.update(prefix.as_bytes());
    hasher.update(seq.to_le_bytes());
    let digest = format!("{:x}", hasher.finalize());
    format!("{prefix}-{}", &digest[..16])
}

// ---------------------------------------------------------------------------
// 1. Enumerated wire values
// ---------------------------------------------------------------------------

/// Reported state of an index's most recent ingestion run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IngestionStatus {
    Successful,
    #[serde(rename = "In Progress")]
    InProgress,
    Failed,
    Pending,
}

impl IngestionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            IngestionStatus::Successful => "Successful",
            IngestionStatus::InProgress => "In Progress",
            IngestionStatus::Failed => "Failed",
            IngestionStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for IngestionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data type of a single retrievable attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    String,
    Number,
    Date,
    Boolean,
    Array,
    Object,
}

impl DataType {
    /// Selector order of the field-definition type dropdown.
    pub const ALL: [DataType; 6] = [
        DataType::String,
        DataType::Number,
        DataType::Date,
        DataType::Boolean,
        DataType::Array,
        DataType::Object,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::Number => "number",
            DataType::Date => "date",
            DataType::Boolean => "boolean",
            DataType::Array => "array",
            DataType::Object => "object",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which input mode produced an ontology attachment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OntologyType {
    Existing,
    Inline,
    Template,
}

impl OntologyType {
    pub fn as_str(self) -> &'static str {
        match self {
            OntologyType::Existing => "existing",
            OntologyType::Inline => "inline",
            OntologyType::Template => "template",
        }
    }
}

/// Directed edge label between two entities of an inline dictionary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    #[default]
    RelatesTo,
    HasMany,
    BelongsTo,
    References,
}

impl RelationshipType {
    pub const ALL: [RelationshipType; 4] = [
        RelationshipType::RelatesTo,
        RelationshipType::HasMany,
        RelationshipType::BelongsTo,
        RelationshipType::References,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RelationshipType::RelatesTo => "relates_to",
            RelationshipType::HasMany => "has_many",
            RelationshipType::BelongsTo => "belongs_to",
            RelationshipType::References => "references",
        }
    }

    /// Human form shown in relationship rows ("relates to", "has many", ...).
    pub fn label(self) -> &'static str {
        match self {
            RelationshipType::RelatesTo => "relates to",
            RelationshipType::HasMany => "has many",
            RelationshipType::BelongsTo => "belongs to",
            RelationshipType::References => "references",
        }
    }
}

/// Whether indexed data is cached-and-synced or queried live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FreshnessType {
    Persistent,
    Live,
}

/// Sync interval for persistent sources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefreshCadence {
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Manual,
}

impl RefreshCadence {
    pub const ALL: [RefreshCadence; 5] = [
        RefreshCadence::Hourly,
        RefreshCadence::Daily,
        RefreshCadence::Weekly,
        RefreshCadence::Monthly,
        RefreshCadence::Manual,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RefreshCadence::Hourly => "hourly",
            RefreshCadence::Daily => "daily",
            RefreshCadence::Weekly => "weekly",
            RefreshCadence::Monthly => "monthly",
            RefreshCadence::Manual => "manual",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RefreshCadence::Hourly => "Hourly",
            RefreshCadence::Daily => "Daily",
            RefreshCadence::Weekly => "Weekly",
            RefreshCadence::Monthly => "Monthly",
            RefreshCadence::Manual => "Manual only",
        }
    }
}

impl fmt::Display for RefreshCadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interval options of the ingestion schedule (no manual option here).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleFrequency {
    Hourly,
    Daily,
    Weekly,
    Monthly,
}

impl ScheduleFrequency {
    pub const ALL: [ScheduleFrequency; 4] = [
        ScheduleFrequency::Hourly,
        ScheduleFrequency::Daily,
        ScheduleFrequency::Weekly,
        ScheduleFrequency::Monthly,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScheduleFrequency::Hourly => "hourly",
            ScheduleFrequency::Daily => "daily",
            ScheduleFrequency::Weekly => "weekly",
            ScheduleFrequency::Monthly => "monthly",
        }
    }
}

/// Ingestion tier selected in the form sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngestionType {
    Basic,
    Advanced,
}

/// Data source chosen in the form; the not-yet-chosen state is `None` at the
/// form level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataSourceSelection {
    StorageBucket,
    Connector,
}

impl DataSourceSelection {
    pub fn as_str(self) -> &'static str {
        match self {
            DataSourceSelection::StorageBucket => "storage-bucket",
            DataSourceSelection::Connector => "connector",
        }
    }

    /// Display name as the list page shows it.
    pub fn label(self) -> &'static str {
        match self {
            DataSourceSelection::StorageBucket => "Storage Bucket",
            DataSourceSelection::Connector => "Connector",
        }
    }
}

// ---------------------------------------------------------------------------
// 2. FieldDefinition
// ---------------------------------------------------------------------------

/// Metadata describing one retrievable attribute of the indexed data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub id: String,
    pub field_name: String,
    pub display_name: String,
    pub data_type: DataType,
    pub description: String,
    pub example_values: Vec<String>,
    pub is_queryable: bool,
    pub is_filterable: bool,
    pub is_required: bool,
    /// Sensitive fields are excluded from downstream agent context.
    #[serde(rename = "isPII")]
    pub is_pii: bool,
}

impl FieldDefinition {
    /// A blank field as the panel's add button creates it: queryable by
    /// default, everything else off.
    pub fn new() -> Self {
        Self {
            id: generate_id("field"),
            field_name: String::new(),
            display_name: String::new(),
            data_type: DataType::String,
            description: String::new(),
            example_values: Vec::new(),
            is_queryable: true,
            is_filterable: false,
            is_required: false,
            is_pii: false,
        }
    }
}

impl Default for FieldDefinition {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// 3. Ontology attachment
// ---------------------------------------------------------------------------

/// A dictionary term of an inline ontology.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryTerm {
    pub id: String,
    pub term: String,
    pub synonyms: Vec<String>,
    pub definition: String,
    /// Names only; not required to resolve to existing terms.
    pub related_terms: Vec<String>,
}

/// A directed edge between two entities, joined by a field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRelationship {
    pub id: String,
    pub source_entity: String,
    pub target_entity: String,
    pub relationship_field: String,
    pub relationship_type: RelationshipType,
}

/// At most one per index. For `existing`/`template` attachments `source`
/// carries the external reference and the collections stay empty; only
/// `inline` attachments populate `terms`/`relationships`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OntologyAttachment {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub ontology_type: OntologyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default)]
    pub terms: Vec<DictionaryTerm>,
    #[serde(default)]
    pub relationships: Vec<EntityRelationship>,
}

impl OntologyAttachment {
    pub fn new(ontology_type: OntologyType) -> Self {
        Self {
            id: generate_id("ontology"),
            name: String::new(),
            ontology_type,
            source: None,
            terms: Vec::new(),
            relationships: Vec::new(),
        }
    }
}

/// A bootstrap template offered by the template catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OntologyTemplate {
    pub id: String,
    pub name: String,
    pub standard: String,
    pub description: String,
}

// ---------------------------------------------------------------------------
// 4. FreshnessConfig
// ---------------------------------------------------------------------------

/// Sync policy of an index's data source.
///
/// Live sources are mutually exclusive with the persistent-only fields:
/// entering live mode clears `last_sync_timestamp` and `refresh_cadence`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreshnessConfig {
    #[serde(rename = "type")]
    pub freshness_type: FreshnessType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sync_timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_cadence: Option<RefreshCadence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_real_time: Option<bool>,
}

impl Default for FreshnessConfig {
    fn default() -> Self {
        Self {
            freshness_type: FreshnessType::Persistent,
            last_sync_timestamp: None,
            refresh_cadence: Some(RefreshCadence::Daily),
            is_real_time: None,
        }
    }
}

// ---------------------------------------------------------------------------
// 5. Index
// ---------------------------------------------------------------------------

/// A named configuration describing how one body of data is ingested,
/// enriched, and kept fresh for retrieval.
///
/// `storage_size`, `last_sync` and `last_queried` are backend-reported
/// display strings; this layer never computes them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Index {
    pub id: String,
    pub name: String,
    pub folder: String,
    pub data_source: String,
    pub description: String,
    /// 0-100 retrieval quality score.
    pub score: u8,
    pub storage_size: String,
    pub ingestion_status: IngestionStatus,
    pub last_sync: String,
    pub last_queried: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_definitions: Option<Vec<FieldDefinition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ontology: Option<OntologyAttachment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freshness_config: Option<FreshnessConfig>,
}

// ---------------------------------------------------------------------------
// 6. CreateIndexForm
// ---------------------------------------------------------------------------

/// The transient aggregate edited by the create/edit page. Discarded on
/// cancel, handed to the save contract when committed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIndexForm {
    pub name: String,
    pub description: String,
    pub folder: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<DataSourceSelection>,
    pub ingestion_type: IngestionType,
    pub enable_schedule: bool,
    /// Meaningful only while `enable_schedule` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_frequency: Option<ScheduleFrequency>,
    pub field_definitions: Vec<FieldDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ontology: Option<OntologyAttachment>,
    pub freshness_config: FreshnessConfig,
}

impl CreateIndexForm {
    /// Fresh form for creating a new index.
    pub fn new() -> Self {
        Self {
            schedule_frequency: Some(ScheduleFrequency::Daily),
            ..Self::default()
        }
    }

    /// Pre-filled form for editing an existing index.
    ///
    /// The data source is forced to the storage bucket, and scheduling is
    /// never restored from the stored index; both quirks are part of the
    /// current save contract and covered by tests.
    pub fn for_index(index: &Index) -> Self {
        Self {
            name: index.name.clone(),
            description: index.description.clone(),
            folder: index.folder.clone(),
            data_source: Some(DataSourceSelection::StorageBucket),
            field_definitions: index.field_definitions.clone().unwrap_or_default(),
            ontology: index.ontology.clone(),
            freshness_config: index.freshness_config.clone().unwrap_or_default(),
            ..Self::new()
        }
    }

    /// Names of required fields that are still empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("name");
        }
        if self.folder.is_empty() {
            missing.push("folder");
        }
        if self.data_source.is_none() {
            missing.push("dataSource");
        }
        missing
    }

    pub fn is_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

impl Default for CreateIndexForm {
    /// The shape the reset action restores. Unlike [`CreateIndexForm::new`],
    /// reset leaves `schedule_frequency` unset.
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            folder: String::new(),
            data_source: None,
            ingestion_type: IngestionType::Advanced,
            enable_schedule: false,
            schedule_frequency: None,
            field_definitions: Vec::new(),
            ontology: None,
            freshness_config: FreshnessConfig::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
