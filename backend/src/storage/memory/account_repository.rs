use anyhow::Result;
use log::info;
use shared::{ParentAccount, StaffAccount};

use super::connection::MemoryConnection;
use crate::storage::traits::AccountStorage;

#[derive(Clone)]
pub struct AccountRepository {
    connection: MemoryConnection,
}

impl AccountRepository {
    pub fn new(connection: MemoryConnection) -> Self {
        Self { connection }
    }
}

impl AccountStorage for AccountRepository {
    fn list_parent_accounts(&self) -> Result<Vec<ParentAccount>> {
        self.connection.read(|store| store.parent_accounts.clone())
    }

    fn list_staff_accounts(&self) -> Result<Vec<StaffAccount>> {
        self.connection.read(|store| store.staff_accounts.clone())
    }

    fn store_parent_account(&self, account: &ParentAccount) -> Result<()> {
        info!("👤 Storing parent account {}", account.parent_id);
        self.connection
            .write(|store| store.parent_accounts.push(account.clone()))
    }
}
