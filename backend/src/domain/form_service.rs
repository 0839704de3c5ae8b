use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::domain::errors::DaycareError;
use crate::storage::FormStorage;
use shared::{apply_form_action, Form, FormAction, FormSubmission, FormsByStatus, RecordStatus};

/// Permission forms and their outstanding → pending → completed lifecycle
#[derive(Clone)]
pub struct FormService {
    forms: Arc<dyn FormStorage>,
}

fn sort_for_display(forms: &mut [Form]) {
    forms.sort_by(|a, b| a.status.cmp(&b.status).then(a.due_date.cmp(&b.due_date)));
}

impl FormService {
    pub fn new(forms: Arc<dyn FormStorage>) -> Self {
        Self { forms }
    }

    pub fn list_forms(&self) -> Result<Vec<Form>> {
        self.forms.list_forms()
    }

    pub fn get_form(&self, form_id: &str) -> Result<Option<Form>> {
        self.forms.get_form(form_id)
    }

    /// A child's forms, outstanding first, then by due date
    pub fn forms_for_child(&self, child_id: &str) -> Result<Vec<Form>> {
        let mut forms: Vec<Form> = self
            .forms
            .list_forms()?
            .into_iter()
            .filter(|f| f.child_id == child_id)
            .collect();
        sort_for_display(&mut forms);
        Ok(forms)
    }

    /// The permission form for one child on one event
    pub fn form_for_event_child(&self, event_id: &str, child_id: &str) -> Result<Option<Form>> {
        Ok(self
            .forms
            .list_forms()?
            .into_iter()
            .find(|f| f.belongs_to_event(event_id) && f.child_id == child_id))
    }

    /// Staff forms screen: one section per status, each by due date
    pub fn forms_by_status(&self) -> Result<FormsByStatus> {
        let mut forms = self.forms.list_forms()?;
        sort_for_display(&mut forms);

        let mut grouped = FormsByStatus::default();
        for form in forms {
            match form.status {
                RecordStatus::Outstanding => grouped.outstanding.push(form),
                RecordStatus::Pending => grouped.pending.push(form),
                RecordStatus::Completed => grouped.completed.push(form),
            }
        }
        Ok(grouped)
    }

    /// Parent fills in an outstanding form; it moves to pending
    pub fn submit_form(&self, form_id: &str, submission: &FormSubmission) -> Result<Form> {
        info!("🖊️ Submitting form {}", form_id);
        let mut form = self.load(form_id)?;

        let validation = submission.validate();
        if !validation.is_valid {
            return Err(DaycareError::Validation(validation.errors).into());
        }

        form.status = apply_form_action(form.status, FormAction::Submit).map_err(DaycareError::from)?;
        form.parent_name = submission.parent_name.trim().to_string();
        form.emergency_contact = submission.emergency_contact.trim().to_string();
        form.notes = submission.notes.trim().to_string();
        form.signature = submission.signature.trim().to_string();
        form.consent = submission.consent;
        self.forms.update_form(&form)?;

        info!("✅ Form {} is now {}", form.id, form.status);
        Ok(form)
    }

    /// Staff accepts a pending form
    pub fn approve_form(&self, form_id: &str) -> Result<Form> {
        self.transition(form_id, FormAction::Approve)
    }

    /// Staff sends a pending form back to outstanding
    pub fn reject_form(&self, form_id: &str) -> Result<Form> {
        self.transition(form_id, FormAction::Reject)
    }

    fn transition(&self, form_id: &str, action: FormAction) -> Result<Form> {
        info!("📋 Form {}: {}", form_id, action);
        let mut form = self.load(form_id)?;
        form.status = apply_form_action(form.status, action).map_err(DaycareError::from)?;
        self.forms.update_form(&form)?;
        info!("✅ Form {} is now {}", form.id, form.status);
        Ok(form)
    }

    fn load(&self, form_id: &str) -> Result<Form> {
        Ok(self
            .forms
            .get_form(form_id)?
            .ok_or_else(|| DaycareError::not_found("Form", form_id))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::user_messages;
    use crate::storage::memory::test_utils::TestEnvironment;

    fn service(env: &TestEnvironment) -> FormService {
        FormService::new(env.form_repo())
    }

    fn complete_submission() -> FormSubmission {
        FormSubmission {
            parent_name: "Sarah James".to_string(),
            emergency_contact: "(403) 555-0144".to_string(),
            notes: "Bring sunscreen".to_string(),
            signature: "Sarah James".to_string(),
            consent: true,
        }
    }

    #[test]
    fn test_submit_moves_form_to_pending_and_stores_fields() {
        let env = TestEnvironment::seeded().unwrap();
        let service = service(&env);
        // f17 is pending, f18 is Rob's outstanding zoo form
        let form = service.submit_form("f18", &complete_submission()).unwrap();
        assert_eq!(form.status, RecordStatus::Pending);

        let stored = service.get_form("f18").unwrap().unwrap();
        assert_eq!(stored.signature, "Sarah James");
        assert_eq!(stored.notes, "Bring sunscreen");
        assert!(stored.consent);
    }

    #[test]
    fn test_submit_with_missing_field_leaves_form_outstanding() {
        let env = TestEnvironment::seeded().unwrap();
        let service = service(&env);
        let mut submission = complete_submission();
        submission.signature.clear();

        let err = service.submit_form("f18", &submission).unwrap_err();
        assert_eq!(user_messages(&err), vec!["Please provide your signature".to_string()]);
        assert_eq!(
            service.get_form("f18").unwrap().unwrap().status,
            RecordStatus::Outstanding
        );
    }

    #[test]
    fn test_submit_pending_form_is_refused() {
        let env = TestEnvironment::seeded().unwrap();
        let err = service(&env)
            .submit_form("f17", &complete_submission())
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DaycareError>(),
            Some(DaycareError::Transition(_))
        ));
    }

    #[test]
    fn test_approve_and_reject_only_pending() {
        let env = TestEnvironment::seeded().unwrap();
        let service = service(&env);

        let approved = service.approve_form("f17").unwrap();
        assert_eq!(approved.status, RecordStatus::Completed);
        assert!(service.reject_form("f17").is_err());
        assert!(service.approve_form("f17").is_err());

        let rejected = service.reject_form("f6").unwrap();
        assert_eq!(rejected.status, RecordStatus::Outstanding);
        assert!(service.approve_form("f6").is_err());
    }

    #[test]
    fn test_forms_for_child_sorted_by_status_then_due_date() {
        let env = TestEnvironment::seeded().unwrap();
        let forms = service(&env).forms_for_child("c6").unwrap();
        let statuses: Vec<RecordStatus> = forms.iter().map(|f| f.status).collect();
        let mut sorted = statuses.clone();
        sorted.sort();
        assert_eq!(statuses, sorted);

        let outstanding: Vec<&Form> = forms
            .iter()
            .filter(|f| f.status == RecordStatus::Outstanding)
            .collect();
        assert!(outstanding.windows(2).all(|p| p[0].due_date <= p[1].due_date));
        assert_eq!(forms.last().map(|f| f.id.as_str()), Some("f21"));
    }

    #[test]
    fn test_forms_by_status_groups_everything() {
        let env = TestEnvironment::seeded().unwrap();
        let service = service(&env);
        let grouped = service.forms_by_status().unwrap();
        let total = grouped.outstanding.len() + grouped.pending.len() + grouped.completed.len();
        assert_eq!(total, service.list_forms().unwrap().len());
        assert!(grouped.pending.iter().all(|f| f.status == RecordStatus::Pending));
        assert_eq!(grouped.section(RecordStatus::Completed).len(), 4);
    }

    #[test]
    fn test_form_for_event_child() {
        let env = TestEnvironment::seeded().unwrap();
        let service = service(&env);
        let form = service.form_for_event_child("e1", "c6").unwrap().unwrap();
        assert_eq!(form.id, "f6");
        assert!(service.form_for_event_child("e5", "c6").unwrap().is_none());
    }
}
