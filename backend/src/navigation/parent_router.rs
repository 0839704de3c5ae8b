use log::debug;
use shared::{ActivityLog, Child, Event, Form, Payment};

use super::NavPayload;

/// Every screen reachable in parent mode, including the signed-out ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParentScreen {
    Landing,
    Login,
    Register,
    ForgotPassword,
    StaffLogin,
    Home,
    Events,
    EventDetails,
    MyChildren,
    DailyActivity,
    ActivityDetails,
    Forms,
    FormView,
    Payments,
}

impl ParentScreen {
    pub const ALL: [ParentScreen; 14] = [
        ParentScreen::Landing,
        ParentScreen::Login,
        ParentScreen::Register,
        ParentScreen::ForgotPassword,
        ParentScreen::StaffLogin,
        ParentScreen::Home,
        ParentScreen::Events,
        ParentScreen::EventDetails,
        ParentScreen::MyChildren,
        ParentScreen::DailyActivity,
        ParentScreen::ActivityDetails,
        ParentScreen::Forms,
        ParentScreen::FormView,
        ParentScreen::Payments,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            ParentScreen::Landing => "landing",
            ParentScreen::Login => "login",
            ParentScreen::Register => "register",
            ParentScreen::ForgotPassword => "forgot-password",
            ParentScreen::StaffLogin => "staff-login",
            ParentScreen::Home => "home",
            ParentScreen::Events => "events",
            ParentScreen::EventDetails => "event-details",
            ParentScreen::MyChildren => "my-children",
            ParentScreen::DailyActivity => "daily-activity",
            ParentScreen::ActivityDetails => "activity-details",
            ParentScreen::Forms => "forms",
            ParentScreen::FormView => "form-view",
            ParentScreen::Payments => "payments",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|screen| screen.slug() == slug)
    }

    /// Bottom tab highlighted on this screen; signed-out screens have no tab bar
    pub fn tab(&self) -> Option<ParentTab> {
        match self {
            ParentScreen::Landing
            | ParentScreen::Login
            | ParentScreen::Register
            | ParentScreen::ForgotPassword
            | ParentScreen::StaffLogin => None,
            ParentScreen::Home => Some(ParentTab::Home),
            ParentScreen::Events | ParentScreen::EventDetails => Some(ParentTab::Events),
            ParentScreen::MyChildren
            | ParentScreen::DailyActivity
            | ParentScreen::ActivityDetails => Some(ParentTab::Activity),
            ParentScreen::Forms | ParentScreen::FormView => Some(ParentTab::Forms),
            ParentScreen::Payments => Some(ParentTab::Pay),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParentTab {
    Home,
    Events,
    Activity,
    Forms,
    Pay,
}

impl ParentTab {
    pub const ALL: [ParentTab; 5] = [
        ParentTab::Home,
        ParentTab::Events,
        ParentTab::Activity,
        ParentTab::Forms,
        ParentTab::Pay,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ParentTab::Home => "Home",
            ParentTab::Events => "Events",
            ParentTab::Activity => "Activity",
            ParentTab::Forms => "Forms",
            ParentTab::Pay => "Pay",
        }
    }

    pub fn screen(&self) -> ParentScreen {
        match self {
            ParentTab::Home => ParentScreen::Home,
            ParentTab::Events => ParentScreen::Events,
            ParentTab::Activity => ParentScreen::MyChildren,
            ParentTab::Forms => ParentScreen::Forms,
            ParentTab::Pay => ParentScreen::Payments,
        }
    }
}

/// Current parent screen and the records the detail screens read
#[derive(Debug, Clone, PartialEq)]
pub struct ParentRouter {
    current: ParentScreen,
    pub selected_event: Option<Event>,
    pub selected_activity: Option<ActivityLog>,
    pub selected_form: Option<Form>,
    pub selected_payment: Option<Payment>,
    pub selected_child: Option<Child>,
}

impl Default for ParentRouter {
    fn default() -> Self {
        Self {
            current: ParentScreen::Landing,
            selected_event: None,
            selected_activity: None,
            selected_form: None,
            selected_payment: None,
            selected_child: None,
        }
    }
}

impl ParentRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ParentScreen {
        self.current
    }

    /// Swap screens, storing the payload in the slot the target reads.
    ///
    /// Detail screens take the payload as-is, so a missing or mismatched
    /// payload clears their slot. Daily activity keeps the previous child
    /// unless a child is handed over.
    pub fn navigate(&mut self, screen: ParentScreen, payload: Option<NavPayload>) {
        debug!("🧭 Parent -> {}", screen.slug());
        match screen {
            ParentScreen::EventDetails => {
                self.selected_event = payload.and_then(NavPayload::into_event);
            }
            ParentScreen::ActivityDetails => {
                self.selected_activity = payload.and_then(NavPayload::into_log);
            }
            ParentScreen::FormView => {
                self.selected_form = payload.and_then(NavPayload::into_form);
            }
            ParentScreen::Payments => {
                self.selected_payment = payload.and_then(NavPayload::into_payment);
            }
            ParentScreen::DailyActivity => {
                if let Some(child) = payload.and_then(NavPayload::into_child) {
                    self.selected_child = Some(child);
                }
            }
            _ => {}
        }
        self.current = screen;
    }

    pub fn go(&mut self, screen: ParentScreen) {
        self.navigate(screen, None);
    }

    /// Back to the landing screen with every slot empty
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::test_utils::{
        sample_child, sample_event, sample_form, sample_payment,
    };

    #[test]
    fn test_slugs_round_trip_for_all_screens() {
        for screen in ParentScreen::ALL {
            assert_eq!(ParentScreen::from_slug(screen.slug()), Some(screen));
        }
        assert_eq!(ParentScreen::from_slug("staff-home"), None);
    }

    #[test]
    fn test_event_details_stores_event() {
        let mut router = ParentRouter::new();
        let event = sample_event("e1", "Drumheller", "2025-11-07", &["c1"]);
        router.navigate(ParentScreen::EventDetails, Some(NavPayload::Event(event.clone())));
        assert_eq!(router.current(), ParentScreen::EventDetails);
        assert_eq!(router.selected_event, Some(event));
    }

    #[test]
    fn test_detail_without_payload_clears_slot() {
        let mut router = ParentRouter::new();
        router.navigate(
            ParentScreen::FormView,
            Some(NavPayload::Form(sample_form("f1", Some("e1"), "c1"))),
        );
        router.go(ParentScreen::FormView);
        assert!(router.selected_form.is_none());
    }

    #[test]
    fn test_payments_slot_cleared_without_payload() {
        let mut router = ParentRouter::new();
        router.navigate(
            ParentScreen::Payments,
            Some(NavPayload::Payment(sample_payment("p1", "c6", 850.0, None))),
        );
        assert!(router.selected_payment.is_some());
        router.go(ParentScreen::Payments);
        assert!(router.selected_payment.is_none());
    }

    #[test]
    fn test_daily_activity_keeps_child_without_payload() {
        let mut router = ParentRouter::new();
        let child = sample_child("c6", "u4", "Rob James");
        router.navigate(ParentScreen::DailyActivity, Some(NavPayload::Child(child.clone())));
        router.go(ParentScreen::ActivityDetails);
        router.go(ParentScreen::DailyActivity);
        assert_eq!(router.selected_child, Some(child));
    }

    #[test]
    fn test_mismatched_payload_is_not_stored() {
        let mut router = ParentRouter::new();
        router.navigate(
            ParentScreen::EventDetails,
            Some(NavPayload::Child(sample_child("c1", "u1", "Noah Bennett"))),
        );
        assert!(router.selected_event.is_none());
        assert!(router.selected_child.is_none());
    }

    #[test]
    fn test_other_screens_leave_slots_alone() {
        let mut router = ParentRouter::new();
        let event = sample_event("e1", "Drumheller", "2025-11-07", &["c1"]);
        router.navigate(ParentScreen::EventDetails, Some(NavPayload::Event(event)));
        router.go(ParentScreen::Forms);
        assert!(router.selected_event.is_some());
    }

    #[test]
    fn test_detail_screens_highlight_section_tab() {
        assert_eq!(ParentScreen::EventDetails.tab(), Some(ParentTab::Events));
        assert_eq!(ParentScreen::ActivityDetails.tab(), Some(ParentTab::Activity));
        assert_eq!(ParentScreen::FormView.tab(), Some(ParentTab::Forms));
        assert_eq!(ParentScreen::Login.tab(), None);
        assert_eq!(ParentTab::Activity.screen(), ParentScreen::MyChildren);
    }
}
