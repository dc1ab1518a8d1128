//! Create/edit page and its three sub-panels.
//!
//! The page owns the canonical [`crate::models::CreateIndexForm`]; panels own
//! only transient UI state (expansion, drafts, active tab) and mutate the
//! slice of the form the page hands them. No panel ever reads or writes a
//! sibling's slice.

pub mod field_definitions;
pub mod freshness;
pub mod ontology;
pub mod page;

/// Split a comma-separated input into trimmed, non-empty values.
///
/// This round-trip is lossy for values that themselves contain commas; the
/// editors that use it accept that in exchange for a single text input.
pub fn split_comma_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Join values back into the single-input display form.
pub fn join_comma_list(values: &[String]) -> String {
    values.join(", ")
}
