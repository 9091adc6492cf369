mod use_catalog;

pub use use_catalog::{use_catalog, CatalogContext};
