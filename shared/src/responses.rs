use crate::models::{Child, Event, Form, ParentAccount, Payment};
use crate::status::RecordStatus;
use serde::{Deserialize, Serialize};

/// Response after creating an event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateEventResponse {
    pub event: Event,
    /// Permission forms generated for the event's children
    pub created_forms: Vec<Form>,
    pub success_message: String,
}

/// Response after editing an event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateEventResponse {
    pub event: Event,
    pub created_forms: Vec<Form>,
    pub deleted_form_ids: Vec<String>,
    pub success_message: String,
}

/// Response after deleting an event and everything hanging off it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteEventResponse {
    pub event_id: String,
    pub deleted_form_ids: Vec<String>,
    pub deleted_payment_ids: Vec<String>,
    pub success_message: String,
}

/// Response after adding a fee to one or more children
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddFeeResponse {
    pub payments: Vec<Payment>,
    pub success_message: String,
}

/// What the confirmation step shows after the mocked card payment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentReceipt {
    pub payment: Payment,
    pub card_last_four: String,
}

/// Overall fee standing for one child
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FeeStatus {
    Outstanding,
    Pending,
    Paid,
}

impl FeeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FeeStatus::Outstanding => "Outstanding",
            FeeStatus::Pending => "Pending",
            FeeStatus::Paid => "Paid",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            FeeStatus::Outstanding => "status-outstanding",
            FeeStatus::Pending => "status-pending",
            FeeStatus::Paid => "status-completed",
        }
    }
}

/// Per-child totals on the staff fees screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeeSummary {
    pub child_id: String,
    pub child_name: String,
    pub outstanding_total: f64,
    pub pending_total: f64,
    /// Outstanding plus pending
    pub total: f64,
    pub status: FeeStatus,
    pub payments: Vec<Payment>,
}

/// Staff forms screen sections
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FormsByStatus {
    pub outstanding: Vec<Form>,
    pub pending: Vec<Form>,
    pub completed: Vec<Form>,
}

impl FormsByStatus {
    pub fn section(&self, status: RecordStatus) -> &[Form] {
        match status {
            RecordStatus::Outstanding => &self.outstanding,
            RecordStatus::Pending => &self.pending,
            RecordStatus::Completed => &self.completed,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterResponse {
    pub account: ParentAccount,
    pub success_message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PasswordResetResponse {
    pub email: String,
    pub success_message: String,
}

/// One row of the attendance sheet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceEntry {
    pub child: Child,
    pub present: bool,
}

/// Response after saving attendance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceSummary {
    pub present_count: usize,
    pub class_size: usize,
    pub success_message: String,
}
