//! In-progress input from the data-entry screens.
//!
//! Each draft validates itself into a [`ValidationResult`] whose errors come
//! out in the same order the fields appear on screen.

use crate::clock::{ClockTime, Meridiem};
use crate::models::{ActivityLog, Event};
use crate::selection::ChildSelection;
use crate::status::RecordStatus;
use crate::validation::{
    count_digits, is_blank, is_valid_email, is_valid_expiry, ValidationError, ValidationResult,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Email/password pair typed on either login screen
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        if is_blank(&self.email) {
            errors.push(ValidationError::MissingEmail);
        }
        if self.password.is_empty() {
            errors.push(ValidationError::MissingPassword);
        }
        ValidationResult::from_errors(errors)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterRequest {
    /// Field checks only; the duplicate email check needs the account list
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        if is_blank(&self.full_name) {
            errors.push(ValidationError::MissingFullName);
        }
        if is_blank(&self.email) {
            errors.push(ValidationError::MissingEmail);
        } else if !is_valid_email(&self.email) {
            errors.push(ValidationError::InvalidEmail);
        }
        if self.password.is_empty() {
            errors.push(ValidationError::MissingNewPassword);
        } else if self.password != self.confirm_password {
            errors.push(ValidationError::PasswordMismatch);
        }
        ValidationResult::from_errors(errors)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PasswordResetRequest {
    pub email: String,
}

impl PasswordResetRequest {
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        if is_blank(&self.email) {
            errors.push(ValidationError::MissingEmail);
        }
        ValidationResult::from_errors(errors)
    }
}

/// What a parent fills in on a permission form
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FormSubmission {
    pub parent_name: String,
    pub emergency_contact: String,
    pub notes: String,
    pub signature: String,
    pub consent: bool,
}

impl FormSubmission {
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        if is_blank(&self.parent_name) {
            errors.push(ValidationError::MissingParentName);
        }
        if is_blank(&self.emergency_contact) {
            errors.push(ValidationError::MissingEmergencyContact);
        }
        if is_blank(&self.signature) {
            errors.push(ValidationError::MissingSignature);
        }
        if !self.consent {
            errors.push(ValidationError::MissingConsent);
        }
        ValidationResult::from_errors(errors)
    }
}

/// Minimum digit counts for card entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CardRules {
    pub min_card_digits: usize,
    pub min_cvv_digits: usize,
}

impl Default for CardRules {
    fn default() -> Self {
        Self {
            min_card_digits: 16,
            min_cvv_digits: 3,
        }
    }
}

/// Card details for the mocked payment step. Never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PaymentDetails {
    pub cardholder_name: String,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
}

impl PaymentDetails {
    pub fn validate(&self, rules: &CardRules) -> ValidationResult {
        let mut errors = Vec::new();
        if is_blank(&self.cardholder_name) {
            errors.push(ValidationError::MissingCardholderName);
        }
        if count_digits(&self.card_number) < rules.min_card_digits {
            errors.push(ValidationError::CardNumberTooShort(rules.min_card_digits));
        }
        if !is_valid_expiry(&self.expiry) {
            errors.push(ValidationError::InvalidExpiry);
        }
        if count_digits(&self.cvv) < rules.min_cvv_digits {
            errors.push(ValidationError::CvvTooShort(rules.min_cvv_digits));
        }
        ValidationResult::from_errors(errors)
    }

    /// Last four digits of the card, for the receipt
    pub fn card_last_four(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().filter(|c| c.is_ascii_digit()).collect();
        let start = digits.len().saturating_sub(4);
        digits[start..].iter().collect()
    }
}

pub const DEFAULT_EVENT_START: ClockTime = ClockTime::fixed(8, 0, Meridiem::Am);
pub const DEFAULT_EVENT_END: ClockTime = ClockTime::fixed(3, 30, Meridiem::Pm);

/// Add/edit event screen state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub location: String,
    pub date: Option<NaiveDate>,
    pub start_time: Option<ClockTime>,
    pub end_time: Option<ClockTime>,
    pub description: String,
    pub notes: String,
    pub children: ChildSelection,
    /// `None` leaves the stored flag alone on update
    pub has_form: Option<bool>,
    pub form_file: Option<String>,
}

impl Default for EventDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            location: String::new(),
            date: None,
            start_time: Some(DEFAULT_EVENT_START),
            end_time: Some(DEFAULT_EVENT_END),
            description: String::new(),
            notes: String::new(),
            children: ChildSelection::new(),
            has_form: None,
            form_file: None,
        }
    }
}

impl EventDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefill for the edit screen. The form flag stays unspecified until
    /// a form is attached or removed.
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            location: event.location.clone(),
            date: Some(event.date),
            start_time: Some(event.start_time),
            end_time: Some(event.end_time),
            description: event.description.clone(),
            notes: event.notes.clone(),
            children: ChildSelection::from_ids(event.children.iter().cloned()),
            has_form: None,
            form_file: event.form_file.clone(),
        }
    }

    pub fn attach_form(&mut self, file_name: String) {
        self.form_file = Some(file_name);
        self.has_form = Some(true);
    }

    pub fn remove_form(&mut self) {
        self.form_file = None;
        self.has_form = Some(false);
    }

    /// The flag to store, given what the event currently has
    pub fn resolved_has_form(&self, current: bool) -> bool {
        self.has_form.unwrap_or(current)
    }

    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        if is_blank(&self.title) {
            errors.push(ValidationError::MissingEventTitle);
        }
        if is_blank(&self.location) {
            errors.push(ValidationError::MissingLocation);
        }
        if self.date.is_none() {
            errors.push(ValidationError::MissingEventDate);
        }
        if self.start_time.is_none() {
            errors.push(ValidationError::MissingStartTime);
        }
        if self.end_time.is_none() {
            errors.push(ValidationError::MissingEndTime);
        }
        if self.children.is_empty() {
            errors.push(ValidationError::NoChildrenSelected);
        }
        ValidationResult::from_errors(errors)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FeeType {
    Event,
    Tuition,
}

/// Add fee screen state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeeDraft {
    pub fee_type: FeeType,
    pub amount_input: String,
    pub event_id: Option<String>,
    pub status: RecordStatus,
    pub description: String,
    pub children: ChildSelection,
}

impl Default for FeeDraft {
    fn default() -> Self {
        Self {
            fee_type: FeeType::Event,
            amount_input: String::new(),
            event_id: None,
            status: RecordStatus::Outstanding,
            description: String::new(),
            children: ChildSelection::new(),
        }
    }
}

impl FeeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picking an event replaces the selection with the event's children
    pub fn select_event(&mut self, event: Option<&Event>) {
        match event {
            Some(event) => {
                self.event_id = Some(event.id.clone());
                self.children = ChildSelection::from_ids(event.children.iter().cloned());
            }
            None => {
                self.event_id = None;
                self.children.clear();
            }
        }
    }

    /// Switching fee type starts the child selection over
    pub fn set_fee_type(&mut self, fee_type: FeeType) {
        if self.fee_type == fee_type {
            return;
        }
        self.fee_type = fee_type;
        self.event_id = None;
        self.children.clear();
    }

    /// Amount when the input parses to a number above zero
    pub fn parsed_amount(&self) -> Option<f64> {
        self.amount_input
            .trim()
            .trim_start_matches('$')
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite() && *amount > 0.0)
    }

    /// Event the fee is linked to; tuition never has one
    pub fn linked_event_id(&self) -> Option<String> {
        match self.fee_type {
            FeeType::Event => self.event_id.clone(),
            FeeType::Tuition => None,
        }
    }

    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        if self.parsed_amount().is_none() {
            errors.push(ValidationError::InvalidAmount);
        }
        if self.fee_type == FeeType::Event && self.event_id.is_none() {
            errors.push(ValidationError::MissingEvent);
        }
        if is_blank(&self.description) {
            errors.push(ValidationError::MissingDescription);
        }
        if self.children.is_empty() {
            errors.push(ValidationError::NoChildrenSelected);
        }
        ValidationResult::from_errors(errors)
    }
}

/// A behavioural note being written for one child in the log editor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BehavioralNote {
    pub child_id: String,
    pub note: String,
}

/// Add/edit activity log screen state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityLogDraft {
    pub activity_name: String,
    pub start_time: Option<ClockTime>,
    pub end_time: Option<ClockTime>,
    pub notes: String,
    pub children: ChildSelection,
    pub behavioral_notes: Vec<BehavioralNote>,
}

impl Default for ActivityLogDraft {
    fn default() -> Self {
        Self {
            activity_name: String::new(),
            start_time: None,
            end_time: None,
            notes: String::new(),
            children: ChildSelection::new(),
            behavioral_notes: Vec::new(),
        }
    }
}

impl ActivityLogDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefill for the edit screen. Only selected children with a non-empty
    /// note come back as notes.
    pub fn from_log(log: &ActivityLog) -> Self {
        let selected = log.selected_child_ids();
        let behavioral_notes = log
            .children
            .iter()
            .filter(|entry| entry.selected && !entry.behavioral_note.is_empty())
            .map(|entry| BehavioralNote {
                child_id: entry.child_id.clone(),
                note: entry.behavioral_note.clone(),
            })
            .collect();

        Self {
            activity_name: log.activity_name.clone(),
            start_time: Some(log.start_time),
            end_time: Some(log.end_time),
            notes: log.notes.clone(),
            children: ChildSelection::from_ids(selected),
            behavioral_notes,
        }
    }

    /// Toggle a child; deselecting drops that child's note
    pub fn toggle_child(&mut self, child_id: &str) {
        if !self.children.toggle(child_id) {
            self.behavioral_notes.retain(|note| note.child_id != child_id);
        }
    }

    /// Select All / Deselect All; clearing drops every note
    pub fn toggle_all_children(&mut self, roster: &[String]) {
        self.children.toggle_all(roster);
        if self.children.is_empty() {
            self.behavioral_notes.clear();
        }
    }

    /// Selected children that do not have a note yet
    pub fn children_available_for_note(&self) -> Vec<String> {
        self.children
            .ids()
            .iter()
            .filter(|id| !self.behavioral_notes.iter().any(|note| &note.child_id == *id))
            .cloned()
            .collect()
    }

    /// Start an empty note. Ignored for unselected children or duplicates.
    pub fn add_note(&mut self, child_id: &str) -> bool {
        if !self.children.contains(child_id)
            || self.behavioral_notes.iter().any(|note| note.child_id == child_id)
        {
            return false;
        }
        self.behavioral_notes.push(BehavioralNote {
            child_id: child_id.to_string(),
            note: String::new(),
        });
        true
    }

    pub fn update_note(&mut self, index: usize, text: String) {
        if let Some(note) = self.behavioral_notes.get_mut(index) {
            note.note = text;
        }
    }

    pub fn remove_note(&mut self, index: usize) {
        if index < self.behavioral_notes.len() {
            self.behavioral_notes.remove(index);
        }
    }

    pub fn note_for(&self, child_id: &str) -> Option<&str> {
        self.behavioral_notes
            .iter()
            .find(|note| note.child_id == child_id)
            .map(|note| note.note.as_str())
    }

    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        if self.children.is_empty() {
            errors.push(ValidationError::NoChildrenSelected);
        }
        if is_blank(&self.activity_name) {
            errors.push(ValidationError::MissingActivityName);
        }
        if self.start_time.is_none() {
            errors.push(ValidationError::MissingStartTime);
        }
        if self.end_time.is_none() {
            errors.push(ValidationError::MissingEndTime);
        }
        if is_blank(&self.notes) {
            errors.push(ValidationError::MissingGeneralNotes);
        }
        ValidationResult::from_errors(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LogChildEntry;

    fn valid_card() -> PaymentDetails {
        PaymentDetails {
            cardholder_name: "Sarah James".to_string(),
            card_number: "4111 1111 1111 1234".to_string(),
            expiry: "08/27".to_string(),
            cvv: "123".to_string(),
        }
    }

    #[test]
    fn test_login_requires_both_fields() {
        let result = LoginRequest::default().validate();
        assert_eq!(
            result.errors,
            vec![ValidationError::MissingEmail, ValidationError::MissingPassword]
        );
    }

    #[test]
    fn test_register_checks_email_format_and_password_match() {
        let request = RegisterRequest {
            full_name: "Jo Lee".to_string(),
            email: "jo.example.com".to_string(),
            password: "secret".to_string(),
            confirm_password: "other".to_string(),
        };
        assert_eq!(
            request.validate().errors,
            vec![ValidationError::InvalidEmail, ValidationError::PasswordMismatch]
        );
    }

    #[test]
    fn test_form_submission_reports_each_missing_field() {
        let complete = FormSubmission {
            parent_name: "Sarah James".to_string(),
            emergency_contact: "403-555-0101".to_string(),
            notes: String::new(),
            signature: "Sarah James".to_string(),
            consent: true,
        };
        assert!(complete.validate().is_valid);

        let mut no_signature = complete.clone();
        no_signature.signature = "   ".to_string();
        assert_eq!(
            no_signature.validate().messages(),
            vec!["Please provide your signature".to_string()]
        );

        let mut no_consent = complete.clone();
        no_consent.consent = false;
        assert_eq!(no_consent.validate().errors, vec![ValidationError::MissingConsent]);

        let empty = FormSubmission::default().validate();
        assert_eq!(empty.errors.len(), 4);
        assert_eq!(empty.errors[0], ValidationError::MissingParentName);
    }

    #[test]
    fn test_payment_details_validation() {
        assert!(valid_card().validate(&CardRules::default()).is_valid);

        let short = PaymentDetails {
            card_number: "4111 1111".to_string(),
            expiry: "13/27".to_string(),
            cvv: "12".to_string(),
            ..valid_card()
        };
        assert_eq!(
            short.validate(&CardRules::default()).messages(),
            vec![
                "Card number must be at least 16 digits".to_string(),
                "Expiry date must be in MM/YY format".to_string(),
                "CVV must be at least 3 digits".to_string(),
            ]
        );
    }

    #[test]
    fn test_card_last_four() {
        assert_eq!(valid_card().card_last_four(), "1234");
        let short = PaymentDetails {
            card_number: "12".to_string(),
            ..valid_card()
        };
        assert_eq!(short.card_last_four(), "12");
    }

    #[test]
    fn test_event_draft_defaults_and_validation() {
        let draft = EventDraft::new();
        assert_eq!(draft.start_time.map(|t| t.to_string()), Some("08:00am".to_string()));
        assert_eq!(draft.end_time.map(|t| t.to_string()), Some("03:30pm".to_string()));
        assert_eq!(
            draft.validate().errors,
            vec![
                ValidationError::MissingEventTitle,
                ValidationError::MissingLocation,
                ValidationError::MissingEventDate,
                ValidationError::NoChildrenSelected,
            ]
        );
    }

    #[test]
    fn test_event_draft_form_flag() {
        let mut draft = EventDraft::new();
        assert!(draft.resolved_has_form(true));
        assert!(!draft.resolved_has_form(false));
        draft.attach_form("permission.pdf".to_string());
        assert!(draft.resolved_has_form(false));
        draft.remove_form();
        assert!(!draft.resolved_has_form(true));
        assert!(draft.form_file.is_none());
    }

    #[test]
    fn test_fee_draft_amount_parsing() {
        let mut draft = FeeDraft::new();
        draft.amount_input = "35".to_string();
        assert_eq!(draft.parsed_amount(), Some(35.0));
        draft.amount_input = "$12.50".to_string();
        assert_eq!(draft.parsed_amount(), Some(12.5));
        draft.amount_input = "0".to_string();
        assert_eq!(draft.parsed_amount(), None);
        draft.amount_input = "abc".to_string();
        assert_eq!(draft.parsed_amount(), None);
    }

    #[test]
    fn test_fee_draft_event_requirement_only_for_event_fees() {
        let mut draft = FeeDraft::new();
        draft.amount_input = "850".to_string();
        draft.description = "December Tuition".to_string();
        draft.children.toggle("c1");
        assert_eq!(draft.validate().errors, vec![ValidationError::MissingEvent]);

        draft.set_fee_type(FeeType::Tuition);
        draft.children.toggle("c1");
        assert!(draft.validate().is_valid);
        assert_eq!(draft.linked_event_id(), None);
    }

    #[test]
    fn test_log_draft_deselect_drops_note() {
        let mut draft = ActivityLogDraft::new();
        draft.toggle_child("c1");
        draft.toggle_child("c2");
        assert!(draft.add_note("c1"));
        assert!(!draft.add_note("c1"));
        assert!(!draft.add_note("c3"));
        draft.update_note(0, "Shared toys".to_string());
        assert_eq!(draft.note_for("c1"), Some("Shared toys"));
        assert_eq!(draft.children_available_for_note(), vec!["c2".to_string()]);

        draft.toggle_child("c1");
        assert!(draft.note_for("c1").is_none());
        assert!(draft.behavioral_notes.is_empty());
    }

    #[test]
    fn test_log_draft_from_log_keeps_selected_notes() {
        let log = ActivityLog {
            id: "l1".to_string(),
            activity_name: "Nap Time".to_string(),
            start_time: ClockTime::new(12, 0, Meridiem::Pm).unwrap(),
            end_time: ClockTime::new(1, 0, Meridiem::Pm).unwrap(),
            notes: "Quiet room".to_string(),
            children: vec![
                LogChildEntry {
                    child_id: "c1".to_string(),
                    name: "Noah Bennett".to_string(),
                    selected: true,
                    behavioral_note: "Slept well".to_string(),
                },
                LogChildEntry {
                    child_id: "c2".to_string(),
                    name: "Lucas Carter".to_string(),
                    selected: true,
                    behavioral_note: String::new(),
                },
                LogChildEntry {
                    child_id: "c3".to_string(),
                    name: "Ava Martinez".to_string(),
                    selected: false,
                    behavioral_note: "stale".to_string(),
                },
            ],
            date: None,
        };
        let draft = ActivityLogDraft::from_log(&log);
        assert_eq!(draft.children.ids(), &["c1".to_string(), "c2".to_string()]);
        assert_eq!(draft.behavioral_notes.len(), 1);
        assert_eq!(draft.note_for("c1"), Some("Slept well"));
        assert!(draft.validate().is_valid);
    }

    #[test]
    fn test_log_draft_validation_order() {
        let errors = ActivityLogDraft::new().validate().errors;
        assert_eq!(
            errors,
            vec![
                ValidationError::NoChildrenSelected,
                ValidationError::MissingActivityName,
                ValidationError::MissingStartTime,
                ValidationError::MissingEndTime,
                ValidationError::MissingGeneralNotes,
            ]
        );
    }
}
