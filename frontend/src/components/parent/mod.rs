//! Screens reachable by a signed-in (or signing-in) parent.

pub mod activity;
pub mod auth;
pub mod events;
pub mod forms;
pub mod home;
pub mod payments;

pub use activity::{ActivityDetails, DailyActivity, MyChildren};
pub use auth::{ForgotPasswordScreen, Landing, LoginScreen, RegisterScreen};
pub use events::{ParentEventDetails, ParentEvents};
pub use forms::{FormView, ParentForms};
pub use home::ParentHome;
pub use payments::ParentPayments;
