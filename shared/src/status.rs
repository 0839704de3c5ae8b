use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status shared by forms and payments.
///
/// Declaration order is the display order used when sorting records
/// (outstanding first, completed last).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    Outstanding,
    Pending,
    Completed,
}

impl RecordStatus {
    pub const ALL: [RecordStatus; 3] = [
        RecordStatus::Outstanding,
        RecordStatus::Pending,
        RecordStatus::Completed,
    ];

    /// Badge label for a form
    pub fn label(&self) -> &'static str {
        match self {
            RecordStatus::Outstanding => "Outstanding",
            RecordStatus::Pending => "Pending",
            RecordStatus::Completed => "Completed",
        }
    }

    /// Badge label for a payment; a completed payment reads as "Paid"
    pub fn payment_label(&self) -> &'static str {
        match self {
            RecordStatus::Completed => "Paid",
            other => other.label(),
        }
    }

    /// CSS modifier used by status badges
    pub fn css_class(&self) -> &'static str {
        match self {
            RecordStatus::Outstanding => "status-outstanding",
            RecordStatus::Pending => "status-pending",
            RecordStatus::Completed => "status-completed",
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, RecordStatus::Completed)
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Things that can happen to a form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FormAction {
    /// Parent fills in and signs the form
    Submit,
    /// Staff accepts a submitted form
    Approve,
    /// Staff sends a submitted form back to the parent
    Reject,
}

/// Things that can happen to a payment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentAction {
    /// Parent enters card details
    Pay,
    /// Staff confirms the money arrived
    MarkPaid,
}

impl fmt::Display for FormAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormAction::Submit => "submit",
            FormAction::Approve => "approve",
            FormAction::Reject => "reject",
        };
        f.write_str(name)
    }
}

impl fmt::Display for PaymentAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentAction::Pay => "pay",
            PaymentAction::MarkPaid => "mark as paid",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("Cannot {action} a form that is {from}")]
    Form { from: RecordStatus, action: FormAction },
    #[error("Cannot {action} a payment that is {from}")]
    Payment { from: RecordStatus, action: PaymentAction },
}

/// Next status of a form after `action`, or an error when the lifecycle forbids it.
pub fn apply_form_action(
    from: RecordStatus,
    action: FormAction,
) -> Result<RecordStatus, TransitionError> {
    match (from, action) {
        (RecordStatus::Outstanding, FormAction::Submit) => Ok(RecordStatus::Pending),
        (RecordStatus::Pending, FormAction::Approve) => Ok(RecordStatus::Completed),
        (RecordStatus::Pending, FormAction::Reject) => Ok(RecordStatus::Outstanding),
        _ => Err(TransitionError::Form { from, action }),
    }
}

/// Next status of a payment after `action`. Payments never move backwards.
pub fn apply_payment_action(
    from: RecordStatus,
    action: PaymentAction,
) -> Result<RecordStatus, TransitionError> {
    match (from, action) {
        (RecordStatus::Outstanding, PaymentAction::Pay) => Ok(RecordStatus::Pending),
        (RecordStatus::Pending, PaymentAction::MarkPaid) => Ok(RecordStatus::Completed),
        _ => Err(TransitionError::Payment { from, action }),
    }
}
