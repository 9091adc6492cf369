use activity_signup_core::ActivityCatalog;
use yew::prelude::*;

use crate::client::ActivitiesApi;

/// Catalog state shared through the component tree.
#[derive(Clone)]
pub struct CatalogContext {
    /// `None` until the first fetch resolves.
    pub catalog: Option<ActivityCatalog>,

    /// Set when the latest fetch failed; cleared by the next success.
    pub load_failed: bool,

    pub api: ActivitiesApi,

    /// Throws away the current view of the catalog and re-fetches it.
    pub refresh: Callback<()>,
}

impl PartialEq for CatalogContext {
    fn eq(&self, other: &Self) -> bool {
        self.catalog == other.catalog
            && self.load_failed == other.load_failed
            && self.api == other.api
    }
}

/// Hook to access the activity catalog.
#[hook]
pub fn use_catalog() -> CatalogContext {
    use_context::<CatalogContext>().expect("use_catalog must be used within a CatalogProvider")
}
