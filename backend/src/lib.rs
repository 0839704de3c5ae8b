//! # Daycare Backend
//!
//! UI-agnostic core of the Sunnyview daycare client. The frontend links this
//! crate directly and calls the services in-process:
//! - Synchronous operations only (no async/await, no network)
//! - One in-memory store seeded from `config/seed.yaml` and shared by every
//!   service
//! - Screen routers and the session controller live in [`navigation`]

use anyhow::Result;
use log::info;
use std::sync::Arc;

pub mod config;
pub mod domain;
pub mod navigation;
pub mod storage;

pub use config::AppConfig;
pub use domain::{
    user_messages, ActivityLogService, AttendanceService, AuthService, CalendarService,
    ChildService, DaycareError, EventService, FormService, PaymentService,
};
pub use navigation::{
    AppMode, DaycareSession, NavPayload, ParentRouter, ParentScreen, ParentTab, StaffRouter,
    StaffScreen, StaffTab,
};
pub use storage::{MemoryConnection, SeedData};

use storage::{
    AccountRepository, ActivityLogRepository, AttendanceRepository, ChildRepository,
    EventRepository, FormRepository, PaymentRepository,
};

/// Main backend struct that orchestrates all services
#[derive(Clone)]
pub struct DaycareBackend {
    pub config: AppConfig,
    pub auth_service: AuthService,
    pub child_service: ChildService,
    pub event_service: EventService,
    pub form_service: FormService,
    pub payment_service: PaymentService,
    pub activity_log_service: ActivityLogService,
    pub attendance_service: AttendanceService,
    pub calendar_service: CalendarService,
}

impl DaycareBackend {
    /// Backend over the embedded config and seed data
    pub fn new() -> Result<Self> {
        Self::with_config_and_seed(AppConfig::load_default()?, SeedData::load_default()?)
    }

    pub fn with_config_and_seed(config: AppConfig, seed: SeedData) -> Result<Self> {
        let dangling = seed.dangling_references();
        if !dangling.is_empty() {
            return Err(DaycareError::Seed(dangling.join(", ")).into());
        }

        let connection = MemoryConnection::from_seed(seed);
        let children = Arc::new(ChildRepository::new(connection.clone()));
        let accounts = Arc::new(AccountRepository::new(connection.clone()));
        let events = Arc::new(EventRepository::new(connection.clone()));
        let forms = Arc::new(FormRepository::new(connection.clone()));
        let payments = Arc::new(PaymentRepository::new(connection.clone()));
        let logs = Arc::new(ActivityLogRepository::new(connection.clone()));
        let attendance = Arc::new(AttendanceRepository::new(connection));

        let backend = DaycareBackend {
            auth_service: AuthService::new(accounts),
            child_service: ChildService::new(children.clone()),
            event_service: EventService::new(events, forms.clone(), payments.clone()),
            form_service: FormService::new(forms),
            payment_service: PaymentService::new(
                payments,
                children.clone(),
                config.card_rules,
                config.currency_symbol.clone(),
            ),
            activity_log_service: ActivityLogService::new(logs, children.clone(), config.today),
            attendance_service: AttendanceService::new(attendance, children),
            calendar_service: CalendarService::new(config.today),
            config,
        };

        info!("🚀 {} backend ready", backend.config.daycare_name);
        Ok(backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{EventDraft, FormSubmission, RecordStatus};

    #[test]
    fn test_default_backend_starts() {
        let backend = DaycareBackend::new().unwrap();
        assert_eq!(backend.child_service.list_children().unwrap().len(), 9);
        assert_eq!(backend.calendar_service.today(), backend.config.today);
    }

    #[test]
    fn test_services_share_one_store() {
        let backend = DaycareBackend::new().unwrap();
        let mut draft = EventDraft::new();
        draft.title = "Pumpkin Patch".to_string();
        draft.location = "Okotoks".to_string();
        draft.date = chrono::NaiveDate::from_ymd_opt(2025, 11, 20);
        draft.children.toggle("c6");
        draft.attach_form("pumpkin-patch.pdf".to_string());
        let created = backend.event_service.create_event(&draft).unwrap();

        let form_id = created.created_forms[0].id.clone();
        let form = backend
            .form_service
            .submit_form(
                &form_id,
                &FormSubmission {
                    parent_name: "Sarah James".to_string(),
                    emergency_contact: "(403) 555-0144".to_string(),
                    notes: String::new(),
                    signature: "Sarah James".to_string(),
                    consent: true,
                },
            )
            .unwrap();
        assert_eq!(form.status, RecordStatus::Pending);
        assert_eq!(backend.form_service.forms_for_child("c6").unwrap().len(), 5);
    }

    #[test]
    fn test_dangling_seed_is_rejected() {
        let seed = SeedData::from_yaml_str(
            "children:\n  - child_id: c1\n    parent_id: u9\n    name: Lost\n    age: 3\n    allergies: None\n    medical: None\n    contact: none\n",
        )
        .unwrap();
        let err = DaycareBackend::with_config_and_seed(AppConfig::load_default().unwrap(), seed)
            .err()
            .unwrap();
        assert!(matches!(
            err.downcast_ref::<DaycareError>(),
            Some(DaycareError::Seed(_))
        ));
    }
}
