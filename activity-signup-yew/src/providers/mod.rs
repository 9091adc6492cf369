mod catalog_provider;

pub use catalog_provider::{CatalogProvider, CatalogProviderProps};
