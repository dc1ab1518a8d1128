//! Data freshness panel: a stateless transition table over the form's
//! freshness config.
//!
//! The two directions are deliberately asymmetric. Entering live mode
//! discards the persistent-only fields (cadence, last-sync timestamp);
//! returning to persistent mode does not resurrect or re-default them, so a
//! persistent → live → persistent round trip leaves the cadence cleared.

use crate::models::{FreshnessConfig, FreshnessType, RefreshCadence};

/// Cadence shown when none is stored. A display default only; it is never
/// written back into the config.
pub const DISPLAY_DEFAULT_CADENCE: RefreshCadence = RefreshCadence::Daily;

/// Switch the config between persistent and live.
pub fn select_type(config: &mut FreshnessConfig, next: FreshnessType) {
    match next {
        FreshnessType::Persistent => {
            config.freshness_type = FreshnessType::Persistent;
            config.is_real_time = Some(false);
            // cadence and last-sync timestamp are left as they are
        }
        FreshnessType::Live => {
            config.freshness_type = FreshnessType::Live;
            config.is_real_time = Some(true);
            config.last_sync_timestamp = None;
            config.refresh_cadence = None;
        }
    }
}

/// Set the sync cadence (the selector is only shown in persistent mode).
pub fn set_cadence(config: &mut FreshnessConfig, cadence: RefreshCadence) {
    config.refresh_cadence = Some(cadence);
}

/// Cadence to display: the stored one, else the display default.
pub fn displayed_cadence(config: &FreshnessConfig) -> RefreshCadence {
    config.refresh_cadence.unwrap_or(DISPLAY_DEFAULT_CADENCE)
}

/// Preview line under the mode selector.
pub fn summary(config: &FreshnessConfig) -> String {
    match config.freshness_type {
        FreshnessType::Persistent => {
            format!("Data will be synced {}", displayed_cadence(config))
        }
        FreshnessType::Live => {
            "Data is queried directly from the source with no caching".into()
        }
    }
}

/// "Last synced" line, shown only in persistent mode when a timestamp is
/// known.
pub fn last_sync_line(config: &FreshnessConfig) -> Option<String> {
    match config.freshness_type {
        FreshnessType::Persistent => config
            .last_sync_timestamp
            .as_ref()
            .map(|ts| format!("Last synced: {ts}")),
        FreshnessType::Live => None,
    }
}
