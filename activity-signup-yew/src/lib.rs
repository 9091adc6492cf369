//! # Activity Sign-up Yew Frontend
//!
//! Browser UI for the activity sign-up application: fetches the activity
//! catalog, renders activity cards, and submits or cancels registrations.

pub mod app;
pub mod client;
pub mod components;
pub mod hooks;
pub mod providers;

// Re-exports for convenience
pub use app::App;
pub use client::ActivitiesApi;
pub use components::{ActivityCard, ActivityList, SignupForm, StatusMessage};
pub use hooks::{use_catalog, CatalogContext};
pub use providers::{CatalogProvider, CatalogProviderProps};
