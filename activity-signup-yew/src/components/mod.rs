//! UI components for the activity sign-up frontend

mod activity_card;
mod activity_list;
mod signup_form;
mod status_message;

pub use activity_card::{ActivityCard, ActivityCardProps};
pub use activity_list::ActivityList;
pub use signup_form::SignupForm;
pub use status_message::{Severity, Status, StatusMessage};
