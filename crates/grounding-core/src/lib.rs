//! Core view-state model for the Context Grounding administration console.
//!
//! This crate holds the presentation logic behind the console: the shared
//! domain model, the mock backend catalogs, the index list page with its
//! filters and derived display values, the multi-panel create/edit form,
//! and the top-level shell that routes between them. State flows one way —
//! each page owns its canonical state, sub-panels keep only transient view
//! state and mutate the slice the page hands them.

pub mod catalog;
pub mod errors;
pub mod form;
pub mod list;
pub mod models;
pub mod shell;
