//! Screens for signed-in staff.

pub mod class_list;
pub mod event_editor;
pub mod events;
pub mod fees;
pub mod forms;
pub mod home;
pub mod logs;

pub use class_list::{Attendance, ClassList};
pub use event_editor::{AddEvent, EditEvent};
pub use events::{StaffEventDetails, StaffEvents};
pub use fees::{AddFee, StaffFees};
pub use forms::{StaffFormDetail, StaffForms};
pub use home::StaffHome;
pub use logs::{EditLog, NewLog, ViewLogs};
