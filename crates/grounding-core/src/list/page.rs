//! List page state and row actions.

use crate::catalog::seed::{self, QuotaSnapshot};
use crate::list::filters::IndexFilter;
use crate::models::Index;

/// View state of the index list page.
///
/// The backing collection is seeded once at construction and never reset;
/// all filtering is recomputed from it on demand (the set is small and
/// static, so nothing is memoized).
#[derive(Clone, Debug)]
pub struct IndexListPage {
    indexes: Vec<Index>,
    pub filter: IndexFilter,
}

impl IndexListPage {
    /// Page over the seeded catalog.
    pub fn new() -> Self {
        Self::with_indexes(seed::sample_indexes())
    }

    /// Page over an injected collection (the real listing contract).
    pub fn with_indexes(indexes: Vec<Index>) -> Self {
        Self {
            indexes,
            filter: IndexFilter::default(),
        }
    }

    /// Seeded collection, unfiltered.
    pub fn indexes(&self) -> &[Index] {
        &self.indexes
    }

    /// The rows currently visible under the active filter, in seed order.
    pub fn filtered(&self) -> Vec<&Index> {
        self.indexes.iter().filter(|i| self.filter.matches(i)).collect()
    }

    /// Resolve a row activation to the index to edit. Both the row itself
    /// and the index-name link route here.
    pub fn edit_target(&self, id: &str) -> Option<&Index> {
        self.indexes.iter().find(|i| i.id == id)
    }

    /// The row-level "more" control swallows its click: activating it never
    /// yields a navigation target.
    pub fn more_options(&self, _id: &str) -> Option<&Index> {
        None
    }

    /// Quota banner content.
    pub fn quota(&self) -> QuotaSnapshot {
        seed::quota_snapshot()
    }

    /// Footer range label over the unfiltered collection.
    ///
    /// TODO: replace with real ranges once the catalog service exposes paged
    /// listing; the mock collection is fixed-size, so this is always one page.
    pub fn showing_label(&self) -> String {
        let total = self.indexes.len();
        format!("1 - {total} / {total}")
    }

    /// Footer page label; see [`IndexListPage::showing_label`].
    pub fn page_label(&self) -> String {
        "Page 1 / 1".into()
    }
}

impl Default for IndexListPage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::filters::ALL_FACET;

    /// Filtering narrows the visible rows without touching the backing set.
    #[test]
    fn filtering_preserves_backing_set() {
        let mut page = IndexListPage::new();
        page.filter.folder = "Finance".into();
        assert_eq!(page.filtered().len(), 1);
        assert_eq!(page.indexes().len(), 7);

        page.filter.folder = ALL_FACET.into();
        assert_eq!(page.filtered().len(), 7);
    }

    /// Row activation resolves to the full record; unknown ids resolve to
    /// nothing.
    #[test]
    fn edit_target_resolution() {
        let page = IndexListPage::new();
        let target = page.edit_target("idx-invoice-archive").unwrap();
        assert_eq!(target.name, "Invoice Archive");
        assert!(page.edit_target("idx-missing").is_none());
    }

    /// The "more" control never navigates, even for a valid row.
    #[test]
    fn more_options_swallows_activation() {
        let page = IndexListPage::new();
        assert!(page.more_options("idx-invoice-archive").is_none());
    }

    /// The footer advertises the whole collection as one page.
    #[test]
    fn footer_labels() {
        let page = IndexListPage::new();
        assert_eq!(page.showing_label(), "1 - 7 / 7");
        assert_eq!(page.page_label(), "Page 1 / 1");
    }
}
