use anyhow::{anyhow, Result};
use log::{info, warn};
use shared::Form;

use super::connection::MemoryConnection;
use crate::storage::traits::FormStorage;

#[derive(Clone)]
pub struct FormRepository {
    connection: MemoryConnection,
}

impl FormRepository {
    pub fn new(connection: MemoryConnection) -> Self {
        Self { connection }
    }
}

impl FormStorage for FormRepository {
    fn list_forms(&self) -> Result<Vec<Form>> {
        self.connection.read(|store| store.forms.clone())
    }

    fn get_form(&self, form_id: &str) -> Result<Option<Form>> {
        self.connection
            .read(|store| store.forms.iter().find(|f| f.id == form_id).cloned())
    }

    fn store_forms(&self, forms: &[Form]) -> Result<()> {
        if forms.is_empty() {
            return Ok(());
        }
        info!("📝 Storing {} forms", forms.len());
        self.connection
            .write(|store| store.forms.extend(forms.iter().cloned()))
    }

    fn update_form(&self, form: &Form) -> Result<()> {
        let found = self.connection.write(|store| {
            match store.forms.iter_mut().find(|f| f.id == form.id) {
                Some(existing) => {
                    *existing = form.clone();
                    true
                }
                None => false,
            }
        })?;

        if !found {
            warn!("⚠️ Tried to update missing form {}", form.id);
            return Err(anyhow!("Form not found: {}", form.id));
        }
        Ok(())
    }

    fn delete_forms(&self, form_ids: &[String]) -> Result<usize> {
        self.connection.write(|store| {
            let before = store.forms.len();
            store.forms.retain(|f| !form_ids.contains(&f.id));
            before - store.forms.len()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::test_utils::{sample_form, TestEnvironment};
    use shared::RecordStatus;

    #[test]
    fn test_store_and_update_form() {
        let env = TestEnvironment::empty();
        let repo = FormRepository::new(env.connection.clone());
        repo.store_forms(&[sample_form("f1", Some("e1"), "c1")]).unwrap();

        let mut form = repo.get_form("f1").unwrap().unwrap();
        assert_eq!(form.status, RecordStatus::Outstanding);
        form.status = RecordStatus::Pending;
        repo.update_form(&form).unwrap();
        assert_eq!(repo.get_form("f1").unwrap().unwrap().status, RecordStatus::Pending);
    }

    #[test]
    fn test_delete_forms_counts_only_existing() {
        let env = TestEnvironment::empty();
        let repo = FormRepository::new(env.connection.clone());
        repo.store_forms(&[
            sample_form("f1", Some("e1"), "c1"),
            sample_form("f2", Some("e1"), "c2"),
            sample_form("f3", None, "c1"),
        ])
        .unwrap();

        let deleted = repo
            .delete_forms(&["f1".to_string(), "f3".to_string(), "f99".to_string()])
            .unwrap();
        assert_eq!(deleted, 2);
        let remaining: Vec<String> = repo.list_forms().unwrap().into_iter().map(|f| f.id).collect();
        assert_eq!(remaining, vec!["f2".to_string()]);
    }

    #[test]
    fn test_update_missing_form_fails() {
        let env = TestEnvironment::empty();
        let repo = FormRepository::new(env.connection.clone());
        assert!(repo.update_form(&sample_form("f1", None, "c1")).is_err());
    }
}
