use anyhow::{anyhow, Result};
use log::{info, warn};
use shared::Payment;

use super::connection::MemoryConnection;
use crate::storage::traits::PaymentStorage;

#[derive(Clone)]
pub struct PaymentRepository {
    connection: MemoryConnection,
}

impl PaymentRepository {
    pub fn new(connection: MemoryConnection) -> Self {
        Self { connection }
    }
}

impl PaymentStorage for PaymentRepository {
    fn list_payments(&self) -> Result<Vec<Payment>> {
        self.connection.read(|store| store.payments.clone())
    }

    fn get_payment(&self, payment_id: &str) -> Result<Option<Payment>> {
        self.connection.read(|store| {
            store
                .payments
                .iter()
                .find(|p| p.payment_id == payment_id)
                .cloned()
        })
    }

    fn store_payments(&self, payments: &[Payment]) -> Result<()> {
        if payments.is_empty() {
            return Ok(());
        }
        info!("💵 Storing {} payments", payments.len());
        self.connection
            .write(|store| store.payments.extend(payments.iter().cloned()))
    }

    fn update_payment(&self, payment: &Payment) -> Result<()> {
        let found = self.connection.write(|store| {
            match store
                .payments
                .iter_mut()
                .find(|p| p.payment_id == payment.payment_id)
            {
                Some(existing) => {
                    *existing = payment.clone();
                    true
                }
                None => false,
            }
        })?;

        if !found {
            warn!("⚠️ Tried to update missing payment {}", payment.payment_id);
            return Err(anyhow!("Payment not found: {}", payment.payment_id));
        }
        Ok(())
    }

    fn delete_payments(&self, payment_ids: &[String]) -> Result<usize> {
        self.connection.write(|store| {
            let before = store.payments.len();
            store
                .payments
                .retain(|p| !payment_ids.contains(&p.payment_id));
            before - store.payments.len()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::test_utils::{sample_payment, TestEnvironment};
    use shared::RecordStatus;

    #[test]
    fn test_store_update_delete_payment() {
        let env = TestEnvironment::empty();
        let repo = PaymentRepository::new(env.connection.clone());
        repo.store_payments(&[
            sample_payment("p1", "c1", 35.0, Some("e1")),
            sample_payment("p2", "c1", 850.0, None),
        ])
        .unwrap();

        let mut payment = repo.get_payment("p1").unwrap().unwrap();
        payment.status = RecordStatus::Pending;
        repo.update_payment(&payment).unwrap();
        assert_eq!(
            repo.get_payment("p1").unwrap().unwrap().status,
            RecordStatus::Pending
        );

        assert_eq!(repo.delete_payments(&["p1".to_string()]).unwrap(), 1);
        assert_eq!(repo.list_payments().unwrap().len(), 1);
    }
}
