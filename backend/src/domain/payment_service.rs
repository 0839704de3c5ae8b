use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::domain::errors::DaycareError;
use crate::domain::ids::IdSequence;
use crate::storage::{ChildStorage, PaymentStorage};
use shared::{
    apply_payment_action, format_amount, AddFeeResponse, CardRules, Child, FeeDraft, FeeStatus,
    FeeSummary, Payment, PaymentAction, PaymentDetails, PaymentReceipt, RecordStatus,
    ValidationError,
};

/// Fees owed per child, the mocked card payment and staff fee management
#[derive(Clone)]
pub struct PaymentService {
    payments: Arc<dyn PaymentStorage>,
    children: Arc<dyn ChildStorage>,
    card_rules: CardRules,
    currency_symbol: String,
}

impl PaymentService {
    pub fn new(
        payments: Arc<dyn PaymentStorage>,
        children: Arc<dyn ChildStorage>,
        card_rules: CardRules,
        currency_symbol: String,
    ) -> Self {
        Self {
            payments,
            children,
            card_rules,
            currency_symbol,
        }
    }

    pub fn card_rules(&self) -> &CardRules {
        &self.card_rules
    }

    pub fn list_payments(&self) -> Result<Vec<Payment>> {
        self.payments.list_payments()
    }

    pub fn get_payment(&self, payment_id: &str) -> Result<Option<Payment>> {
        self.payments.get_payment(payment_id)
    }

    pub fn payments_for_child(&self, child_id: &str) -> Result<Vec<Payment>> {
        Ok(self
            .payments
            .list_payments()?
            .into_iter()
            .filter(|p| p.child_id == child_id)
            .collect())
    }

    /// The fee for one child on one event
    pub fn payment_for_event_child(&self, event_id: &str, child_id: &str) -> Result<Option<Payment>> {
        Ok(self
            .payments
            .list_payments()?
            .into_iter()
            .find(|p| p.belongs_to_event(event_id) && p.child_id == child_id))
    }

    /// Mocked card payment: validates the card and moves the payment to
    /// pending. The card details are not kept.
    pub fn pay(&self, payment_id: &str, details: &PaymentDetails) -> Result<PaymentReceipt> {
        info!("💳 Paying {}", payment_id);
        let mut payment = self.load(payment_id)?;

        let validation = details.validate(&self.card_rules);
        if !validation.is_valid {
            return Err(DaycareError::Validation(validation.errors).into());
        }

        payment.status =
            apply_payment_action(payment.status, PaymentAction::Pay).map_err(DaycareError::from)?;
        self.payments.update_payment(&payment)?;

        info!("✅ Payment {} is now {}", payment.payment_id, payment.status);
        Ok(PaymentReceipt {
            card_last_four: details.card_last_four(),
            payment,
        })
    }

    /// Staff confirms a pending payment
    pub fn mark_paid(&self, payment_id: &str) -> Result<Payment> {
        info!("💰 Marking {} as paid", payment_id);
        let mut payment = self.load(payment_id)?;
        payment.status = apply_payment_action(payment.status, PaymentAction::MarkPaid)
            .map_err(DaycareError::from)?;
        self.payments.update_payment(&payment)?;
        Ok(payment)
    }

    /// One new payment per selected child
    pub fn add_fee(&self, draft: &FeeDraft) -> Result<AddFeeResponse> {
        info!("➕ Adding fee '{}'", draft.description.trim());

        let validation = draft.validate();
        if !validation.is_valid {
            return Err(DaycareError::Validation(validation.errors).into());
        }
        let amount = draft
            .parsed_amount()
            .ok_or(DaycareError::Validation(vec![ValidationError::InvalidAmount]))?;

        let existing = self.payments.list_payments()?;
        let mut ids = IdSequence::after("p", existing.iter().map(|p| p.payment_id.as_str()));
        let event_id = draft.linked_event_id();

        let payments: Vec<Payment> = draft
            .children
            .ids()
            .iter()
            .map(|child_id| Payment {
                payment_id: ids.next_id(),
                child_id: child_id.clone(),
                amount,
                description: draft.description.trim().to_string(),
                status: draft.status,
                event_id: event_id.clone(),
                due_date: None,
            })
            .collect();
        self.payments.store_payments(&payments)?;

        let success_message = format!(
            "Fee of {} added to {} child(ren)",
            format_amount(&self.currency_symbol, amount),
            payments.len()
        );
        info!("✅ {}", success_message);
        Ok(AddFeeResponse {
            payments,
            success_message,
        })
    }

    /// Totals for every child on the roster
    pub fn fee_summaries(&self) -> Result<Vec<FeeSummary>> {
        let payments = self.payments.list_payments()?;
        Ok(self
            .children
            .list_children()?
            .iter()
            .map(|child| summarize(child, &payments))
            .collect())
    }

    pub fn fee_summary_for_child(&self, child_id: &str) -> Result<FeeSummary> {
        let child = self
            .children
            .get_child(child_id)?
            .ok_or_else(|| DaycareError::not_found("Child", child_id))?;
        let payments = self.payments.list_payments()?;
        Ok(summarize(&child, &payments))
    }

    fn load(&self, payment_id: &str) -> Result<Payment> {
        Ok(self
            .payments
            .get_payment(payment_id)?
            .ok_or_else(|| DaycareError::not_found("Payment", payment_id))?)
    }
}

fn summarize(child: &Child, payments: &[Payment]) -> FeeSummary {
    let child_payments: Vec<Payment> = payments
        .iter()
        .filter(|p| p.child_id == child.child_id)
        .cloned()
        .collect();

    let total_for = |status: RecordStatus| -> f64 {
        child_payments
            .iter()
            .filter(|p| p.status == status)
            .map(|p| p.amount)
            .sum()
    };
    let outstanding_total = total_for(RecordStatus::Outstanding);
    let pending_total = total_for(RecordStatus::Pending);

    let status = if outstanding_total > 0.0 {
        FeeStatus::Outstanding
    } else if pending_total > 0.0 {
        FeeStatus::Pending
    } else {
        FeeStatus::Paid
    };

    FeeSummary {
        child_id: child.child_id.clone(),
        child_name: child.name.clone(),
        outstanding_total,
        pending_total,
        total: outstanding_total + pending_total,
        status,
        payments: child_payments,
    }
}
