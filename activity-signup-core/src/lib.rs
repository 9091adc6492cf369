pub mod api;
pub mod domain;
pub mod markup;

pub use api::{ApiError, ErrorBody, SignupConfirmation};
pub use domain::{Activity, ActivityCatalog};
