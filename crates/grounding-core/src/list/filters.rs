//! Filter state and the list predicate.

use crate::models::Index;

/// Sentinel facet value meaning "do not filter on this facet".
pub const ALL_FACET: &str = "All";

/// Filter controls of the index table.
///
/// `score_band` and `time_range` are stored but never applied to the
/// predicate. The controls render; their wiring was never built. Tests pin
/// the inertness so a future change to it is deliberate.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexFilter {
    /// Case-insensitive substring match on the index name.
    pub search_term: String,
    /// Exact folder match, or [`ALL_FACET`].
    pub folder: String,
    /// Exact data-source match, or [`ALL_FACET`].
    pub data_source: String,
    pub score_band: String,
    pub time_range: String,
}

impl Default for IndexFilter {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            folder: ALL_FACET.into(),
            data_source: ALL_FACET.into(),
            score_band: ALL_FACET.into(),
            time_range: "Last month".into(),
        }
    }
}

impl IndexFilter {
    /// Conjunction of the three active predicates: name substring, folder
    /// equality-or-All, data-source equality-or-All.
    pub fn matches(&self, index: &Index) -> bool {
        let matches_search = index
            .name
            .to_lowercase()
            .contains(&self.search_term.to_lowercase());
        let matches_folder = self.folder == ALL_FACET || index.folder == self.folder;
        let matches_data_source =
            self.data_source == ALL_FACET || index.data_source == self.data_source;
        matches_search && matches_folder && matches_data_source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::sample_indexes;

    fn filtered(filter: &IndexFilter) -> Vec<String> {
        sample_indexes()
            .into_iter()
            .filter(|i| filter.matches(i))
            .map(|i| i.name)
            .collect()
    }

    /// The default filter matches everything.
    #[test]
    fn default_matches_all() {
        let filter = IndexFilter::default();
        assert_eq!(filtered(&filter).len(), sample_indexes().len());
    }

    /// Search is a case-insensitive substring match on the name.
    #[test]
    fn search_is_case_insensitive_substring() {
        let filter = IndexFilter {
            search_term: "INVOICE".into(),
            ..Default::default()
        };
        assert_eq!(filtered(&filter), ["Invoice Archive"]);

        let filter = IndexFilter {
            search_term: "book".into(),
            ..Default::default()
        };
        assert_eq!(
            filtered(&filter),
            ["Employee Handbook", "Engineering Runbooks"]
        );
    }

    /// Setting a facet to the sentinel is equivalent to no filter at all.
    #[test]
    fn all_sentinel_is_no_filter() {
        let with_sentinel = IndexFilter {
            folder: ALL_FACET.into(),
            data_source: ALL_FACET.into(),
            ..Default::default()
        };
        assert_eq!(filtered(&with_sentinel).len(), sample_indexes().len());
    }

    /// Facets intersect with the search term.
    #[test]
    fn facets_intersect() {
        let filter = IndexFilter {
            search_term: "c".into(),
            folder: "Shared".into(),
            data_source: "Connector".into(),
            ..Default::default()
        };
        assert_eq!(filtered(&filter), ["Customer Support Tickets", "Product Catalog"]);
    }

    /// The score and time-range controls change nothing.
    #[test]
    fn score_and_time_range_are_inert() {
        let baseline = filtered(&IndexFilter::default());
        let filter = IndexFilter {
            score_band: "High (90+)".into(),
            time_range: "Last year".into(),
            ..Default::default()
        };
        assert_eq!(filtered(&filter), baseline);
    }
}
