//! Top-level shell: the view router and page headers.
//!
//! Nothing else may change the current view. The router is a closed machine
//! with four transitions: list ⇄ create, list ⇄ edit, and create/edit always
//! return to the list.

use tracing::{debug, info};

use crate::errors::GroundingResult;
use crate::form::page::CreateIndexPage;
use crate::models::{CreateIndexForm, Index};

/// Which page the shell is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    List,
    Create,
    Edit,
}

/// One crumb of the form header's trail.
#[derive(Clone, Debug, PartialEq)]
pub struct Breadcrumb {
    pub label: String,
    pub href: Option<String>,
}

/// Title block rendered at the top of every page.
#[derive(Clone, Debug, PartialEq)]
pub struct PageHeader {
    pub title: String,
    pub subtitle: String,
    pub breadcrumbs: Vec<Breadcrumb>,
}

/// Top-level navigation state.
#[derive(Clone, Debug, Default)]
pub struct Shell {
    current_view: View,
    editing_index: Option<Index>,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_view(&self) -> View {
        self.current_view
    }

    pub fn editing_index(&self) -> Option<&Index> {
        self.editing_index.as_ref()
    }

    /// Open the creation form.
    pub fn create_index(&mut self) {
        debug!("opening create form");
        self.editing_index = None;
        self.current_view = View::Create;
    }

    /// Open the edit form for one index.
    pub fn edit_index(&mut self, index: Index) {
        debug!(index = %index.id, "opening edit form");
        self.editing_index = Some(index);
        self.current_view = View::Edit;
    }

    /// Leave the form without saving; the form state dies with the page.
    pub fn cancel(&mut self) {
        debug!("form cancelled");
        self.editing_index = None;
        self.current_view = View::List;
    }

    /// Hand a committed form to the persistence backend and return to the
    /// list. Persistence itself is out of scope here: the payload is logged
    /// and discarded.
    pub fn save(&mut self, form: CreateIndexForm) -> GroundingResult<()> {
        let payload = serde_json::to_string(&form)?;
        info!(index_name = %form.name, %payload, "saving index form");
        self.editing_index = None;
        self.current_view = View::List;
        Ok(())
    }

    /// Build the form page for the current view; `None` while listing.
    pub fn open_page(&self) -> Option<CreateIndexPage> {
        match self.current_view {
            View::List => None,
            View::Create => Some(CreateIndexPage::create()),
            View::Edit => self.editing_index.as_ref().map(CreateIndexPage::edit),
        }
    }

    /// The current page's title block.
    pub fn header(&self) -> PageHeader {
        match self.current_view {
            View::List => PageHeader {
                title: "Context Grounding Indexes".into(),
                subtitle: "Monitor the status of your indexes and their ingestion progress."
                    .into(),
                breadcrumbs: Vec::new(),
            },
            View::Create | View::Edit => {
                let title = if self.current_view == View::Edit {
                    "Edit Index"
                } else {
                    "Create Index"
                };
                PageHeader {
                    title: title.into(),
                    subtitle: "Create Context Grounding indexes which can be used to ground \
                               LLM calls in your business data. Once created, you can monitor \
                               when the indexes have been synced with the latest data, or \
                               queried by various products like agents."
                        .into(),
                    breadcrumbs: vec![
                        Breadcrumb {
                            label: "Context Grounding Indexes".into(),
                            href: Some("#".into()),
                        },
                        Breadcrumb {
                            label: title.into(),
                            href: None,
                        },
                    ],
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::sample_indexes;

    /// The four transitions and only the four transitions.
    #[test]
    fn closed_state_machine() {
        let mut shell = Shell::new();
        assert_eq!(shell.current_view(), View::List);
        assert!(shell.editing_index().is_none());

        shell.create_index();
        assert_eq!(shell.current_view(), View::Create);
        assert!(shell.editing_index().is_none());

        shell.cancel();
        assert_eq!(shell.current_view(), View::List);

        let index = sample_indexes().remove(0);
        shell.edit_index(index.clone());
        assert_eq!(shell.current_view(), View::Edit);
        assert_eq!(shell.editing_index().unwrap().id, index.id);

        shell.cancel();
        assert_eq!(shell.current_view(), View::List);
        assert!(shell.editing_index().is_none());
    }

    /// Saving returns to the list and clears the editing slot.
    #[test]
    fn save_returns_to_list() {
        let mut shell = Shell::new();
        shell.edit_index(sample_indexes().remove(1));

        let page = shell.open_page().unwrap();
        let form = page.submit().unwrap();
        shell.save(form).unwrap();

        assert_eq!(shell.current_view(), View::List);
        assert!(shell.editing_index().is_none());
    }

    /// The shell builds the right page per view.
    #[test]
    fn open_page_per_view() {
        let mut shell = Shell::new();
        assert!(shell.open_page().is_none());

        shell.create_index();
        let page = shell.open_page().unwrap();
        assert!(!page.is_editing());

        shell.edit_index(sample_indexes().remove(0));
        let page = shell.open_page().unwrap();
        assert!(page.is_editing());
        assert_eq!(page.form.name, "Knowledge Base Articles");
    }

    /// Header titles and breadcrumbs track the view.
    #[test]
    fn headers_track_view() {
        let mut shell = Shell::new();
        assert_eq!(shell.header().title, "Context Grounding Indexes");
        assert!(shell.header().breadcrumbs.is_empty());

        shell.create_index();
        assert_eq!(shell.header().title, "Create Index");
        assert_eq!(shell.header().breadcrumbs.len(), 2);

        shell.edit_index(sample_indexes().remove(0));
        let header = shell.header();
        assert_eq!(header.title, "Edit Index");
        assert_eq!(header.breadcrumbs[1].label, "Edit Index");
        assert_eq!(header.breadcrumbs[0].href.as_deref(), Some("#"));
    }
}
