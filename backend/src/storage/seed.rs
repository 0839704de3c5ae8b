//! Sample records compiled into the binary.

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use shared::{ActivityLog, Child, Event, Form, ParentAccount, Payment, StaffAccount};
use std::collections::HashSet;

const DEFAULT_SEED: &str = include_str!("../../config/seed.yaml");

/// Everything the in-memory store starts with
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SeedData {
    #[serde(default)]
    pub children: Vec<Child>,
    #[serde(default)]
    pub parent_accounts: Vec<ParentAccount>,
    #[serde(default)]
    pub staff_accounts: Vec<StaffAccount>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub forms: Vec<Form>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub activity_logs: Vec<ActivityLog>,
}

impl SeedData {
    /// Parse the seed file embedded from `config/seed.yaml`
    pub fn load_default() -> Result<Self> {
        let seed = Self::from_yaml_str(DEFAULT_SEED).context("Failed to parse embedded seed data")?;
        info!(
            "🌱 Loaded seed data: {} children, {} events, {} forms, {} payments, {} logs",
            seed.children.len(),
            seed.events.len(),
            seed.forms.len(),
            seed.payments.len(),
            seed.activity_logs.len()
        );
        Ok(seed)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let seed: SeedData = serde_yaml::from_str(yaml).context("Invalid seed YAML")?;
        Ok(seed)
    }

    /// Empty store, used by tests that build their own records
    pub fn empty() -> Self {
        Self::default()
    }

    /// Ids referenced by a record but missing from the seed
    pub fn dangling_references(&self) -> Vec<String> {
        let child_ids: HashSet<&str> = self.children.iter().map(|c| c.child_id.as_str()).collect();
        let parent_ids: HashSet<&str> = self
            .parent_accounts
            .iter()
            .map(|p| p.parent_id.as_str())
            .collect();
        let event_ids: HashSet<&str> = self.events.iter().map(|e| e.id.as_str()).collect();

        let mut dangling = Vec::new();
        for child in &self.children {
            if !parent_ids.contains(child.parent_id.as_str()) {
                dangling.push(format!("child {} -> parent {}", child.child_id, child.parent_id));
            }
        }
        for event in &self.events {
            for child_id in event.children.iter().filter(|c| !child_ids.contains(c.as_str())) {
                dangling.push(format!("event {} -> child {}", event.id, child_id));
            }
        }
        for form in &self.forms {
            if !child_ids.contains(form.child_id.as_str()) {
                dangling.push(format!("form {} -> child {}", form.id, form.child_id));
            }
            if let Some(event_id) = form.event_id.as_deref() {
                if !event_ids.contains(event_id) {
                    dangling.push(format!("form {} -> event {}", form.id, event_id));
                }
            }
        }
        for payment in &self.payments {
            if !child_ids.contains(payment.child_id.as_str()) {
                dangling.push(format!("payment {} -> child {}", payment.payment_id, payment.child_id));
            }
            if let Some(event_id) = payment.event_id.as_deref() {
                if !event_ids.contains(event_id) {
                    dangling.push(format!("payment {} -> event {}", payment.payment_id, event_id));
                }
            }
        }
        dangling
    }
}
