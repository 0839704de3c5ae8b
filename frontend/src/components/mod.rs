pub mod calendar;
pub mod child_multi_select;
pub mod common;
pub mod date_picker;
pub mod parent;
pub mod staff;
pub mod time_picker;
