use log::debug;
use shared::{ActivityLog, Event, Form};

use super::NavPayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaffScreen {
    Home,
    Log,
    ClassList,
    Attendance,
    Events,
    EventDetails,
    AddEvent,
    EditEvent,
    ViewLogs,
    EditLog,
    Forms,
    FormDetail,
    Fees,
    AddFee,
}

impl StaffScreen {
    pub const ALL: [StaffScreen; 14] = [
        StaffScreen::Home,
        StaffScreen::Log,
        StaffScreen::ClassList,
        StaffScreen::Attendance,
        StaffScreen::Events,
        StaffScreen::EventDetails,
        StaffScreen::AddEvent,
        StaffScreen::EditEvent,
        StaffScreen::ViewLogs,
        StaffScreen::EditLog,
        StaffScreen::Forms,
        StaffScreen::FormDetail,
        StaffScreen::Fees,
        StaffScreen::AddFee,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            StaffScreen::Home => "staff-home",
            StaffScreen::Log => "staff-log",
            StaffScreen::ClassList => "staff-class-list",
            StaffScreen::Attendance => "staff-attendance",
            StaffScreen::Events => "staff-events",
            StaffScreen::EventDetails => "staff-event-details",
            StaffScreen::AddEvent => "staff-add-event",
            StaffScreen::EditEvent => "staff-edit-event",
            StaffScreen::ViewLogs => "staff-view-logs",
            StaffScreen::EditLog => "staff-edit-log",
            StaffScreen::Forms => "staff-forms",
            StaffScreen::FormDetail => "staff-form-detail",
            StaffScreen::Fees => "staff-fees",
            StaffScreen::AddFee => "staff-add-fee",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|screen| screen.slug() == slug)
    }

    pub fn tab(&self) -> StaffTab {
        match self {
            StaffScreen::Home => StaffTab::Home,
            StaffScreen::Log | StaffScreen::ViewLogs | StaffScreen::EditLog => StaffTab::Log,
            StaffScreen::ClassList | StaffScreen::Attendance => StaffTab::ClassList,
            StaffScreen::Events
            | StaffScreen::EventDetails
            | StaffScreen::AddEvent
            | StaffScreen::EditEvent => StaffTab::Events,
            StaffScreen::Forms | StaffScreen::FormDetail => StaffTab::Forms,
            StaffScreen::Fees | StaffScreen::AddFee => StaffTab::Fees,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaffTab {
    Home,
    Log,
    ClassList,
    Events,
    Forms,
    Fees,
}

impl StaffTab {
    pub const ALL: [StaffTab; 6] = [
        StaffTab::Home,
        StaffTab::Log,
        StaffTab::ClassList,
        StaffTab::Events,
        StaffTab::Forms,
        StaffTab::Fees,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StaffTab::Home => "Home",
            StaffTab::Log => "Log",
            StaffTab::ClassList => "Class List",
            StaffTab::Events => "Events",
            StaffTab::Forms => "Forms",
            StaffTab::Fees => "Fees",
        }
    }

    pub fn screen(&self) -> StaffScreen {
        match self {
            StaffTab::Home => StaffScreen::Home,
            StaffTab::Log => StaffScreen::Log,
            StaffTab::ClassList => StaffScreen::ClassList,
            StaffTab::Events => StaffScreen::Events,
            StaffTab::Forms => StaffScreen::Forms,
            StaffTab::Fees => StaffScreen::Fees,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StaffRouter {
    current: StaffScreen,
    pub selected_event: Option<Event>,
    pub selected_log: Option<ActivityLog>,
    pub selected_form: Option<Form>,
}

impl Default for StaffRouter {
    fn default() -> Self {
        Self {
            current: StaffScreen::Home,
            selected_event: None,
            selected_log: None,
            selected_form: None,
        }
    }
}

impl StaffRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> StaffScreen {
        self.current
    }

    /// Event details and edit event share the event slot
    pub fn navigate(&mut self, screen: StaffScreen, payload: Option<NavPayload>) {
        debug!("🧭 Staff -> {}", screen.slug());
        match screen {
            StaffScreen::EventDetails | StaffScreen::EditEvent => {
                self.selected_event = payload.and_then(NavPayload::into_event);
            }
            StaffScreen::EditLog => {
                self.selected_log = payload.and_then(NavPayload::into_log);
            }
            StaffScreen::FormDetail => {
                self.selected_form = payload.and_then(NavPayload::into_form);
            }
            _ => {}
        }
        self.current = screen;
    }

    pub fn go(&mut self, screen: StaffScreen) {
        self.navigate(screen, None);
    }

    /// Back to staff home with every slot empty
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
