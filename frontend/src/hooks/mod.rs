pub mod use_app;
pub mod use_calendar;
pub mod use_feedback;

pub use use_app::{use_app, AppContext, SessionState};
pub use use_calendar::use_calendar;
pub use use_feedback::{use_feedback, Feedback};
