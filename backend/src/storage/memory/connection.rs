use anyhow::{anyhow, Result};
use log::info;
use shared::{ActivityLog, Child, Event, Form, ParentAccount, Payment, StaffAccount};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::storage::seed::SeedData;

/// The canonical collections every screen reads from
#[derive(Debug, Clone, Default)]
pub struct DaycareStore {
    pub children: Vec<Child>,
    pub parent_accounts: Vec<ParentAccount>,
    pub staff_accounts: Vec<StaffAccount>,
    pub events: Vec<Event>,
    pub forms: Vec<Form>,
    pub payments: Vec<Payment>,
    pub activity_logs: Vec<ActivityLog>,
    pub attendance: BTreeMap<String, bool>,
}

impl DaycareStore {
    /// Build the store from seed records. Events are sorted by date and
    /// every child starts the day marked absent.
    pub fn from_seed(seed: SeedData) -> Self {
        let attendance = seed
            .children
            .iter()
            .map(|child| (child.child_id.clone(), false))
            .collect();

        let mut events = seed.events;
        events.sort_by_key(|event| event.date);

        Self {
            children: seed.children,
            parent_accounts: seed.parent_accounts,
            staff_accounts: seed.staff_accounts,
            events,
            forms: seed.forms,
            payments: seed.payments,
            activity_logs: seed.activity_logs,
            attendance,
        }
    }
}

/// MemoryConnection shares one store between all repositories
#[derive(Clone)]
pub struct MemoryConnection {
    store: Arc<RwLock<DaycareStore>>,
}

impl MemoryConnection {
    pub fn new(store: DaycareStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub fn from_seed(seed: SeedData) -> Self {
        let store = DaycareStore::from_seed(seed);
        info!(
            "🗄️ In-memory store ready: {} children, {} events",
            store.children.len(),
            store.events.len()
        );
        Self::new(store)
    }

    /// Connection over an empty store
    pub fn empty() -> Self {
        Self::new(DaycareStore::default())
    }

    /// Run `f` with shared access to the store
    pub fn read<T>(&self, f: impl FnOnce(&DaycareStore) -> T) -> Result<T> {
        let store = self
            .store
            .read()
            .map_err(|_| anyhow!("Daycare store lock poisoned"))?;
        Ok(f(&store))
    }

    /// Run `f` with exclusive access to the store
    pub fn write<T>(&self, f: impl FnOnce(&mut DaycareStore) -> T) -> Result<T> {
        let mut store = self
            .store
            .write()
            .map_err(|_| anyhow!("Daycare store lock poisoned"))?;
        Ok(f(&mut store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_seed_marks_everyone_absent_and_sorts_events() {
        let seed = SeedData::load_default().unwrap();
        let store = DaycareStore::from_seed(seed);
        assert_eq!(store.attendance.len(), store.children.len());
        assert!(store.attendance.values().all(|present| !present));
        assert!(store.events.windows(2).all(|pair| pair[0].date <= pair[1].date));
    }

    #[test]
    fn test_writes_are_visible_to_clones() {
        let connection = MemoryConnection::empty();
        let clone = connection.clone();
        connection
            .write(|store| {
                store.attendance.insert("c1".to_string(), true);
            })
            .unwrap();
        let present = clone.read(|store| store.attendance.get("c1").copied()).unwrap();
        assert_eq!(present, Some(true));
    }
}
