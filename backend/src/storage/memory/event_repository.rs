use anyhow::{anyhow, Result};
use log::{info, warn};
use shared::Event;

use super::connection::MemoryConnection;
use crate::storage::traits::EventStorage;

#[derive(Clone)]
pub struct EventRepository {
    connection: MemoryConnection,
}

impl EventRepository {
    pub fn new(connection: MemoryConnection) -> Self {
        Self { connection }
    }
}

fn sort_by_date(events: &mut [Event]) {
    // stable, so same-day events keep insertion order
    events.sort_by_key(|event| event.date);
}

impl EventStorage for EventRepository {
    fn list_events(&self) -> Result<Vec<Event>> {
        self.connection.read(|store| store.events.clone())
    }

    fn get_event(&self, event_id: &str) -> Result<Option<Event>> {
        self.connection
            .read(|store| store.events.iter().find(|e| e.id == event_id).cloned())
    }

    fn store_event(&self, event: &Event) -> Result<()> {
        info!("📅 Storing event {} ({})", event.id, event.title);
        self.connection.write(|store| {
            store.events.push(event.clone());
            sort_by_date(&mut store.events);
        })
    }

    fn update_event(&self, event: &Event) -> Result<()> {
        let found = self.connection.write(|store| {
            match store.events.iter().position(|e| e.id == event.id) {
                Some(index) => {
                    store.events[index] = event.clone();
                    sort_by_date(&mut store.events);
                    true
                }
                None => false,
            }
        })?;

        if !found {
            warn!("⚠️ Tried to update missing event {}", event.id);
            return Err(anyhow!("Event not found: {}", event.id));
        }
        Ok(())
    }

    fn delete_event(&self, event_id: &str) -> Result<bool> {
        self.connection.write(|store| {
            let before = store.events.len();
            store.events.retain(|e| e.id != event_id);
            store.events.len() != before
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::test_utils::{sample_event, TestEnvironment};
    use chrono::NaiveDate;

    #[test]
    fn test_store_keeps_date_order() {
        let env = TestEnvironment::empty();
        let repo = EventRepository::new(env.connection.clone());

        repo.store_event(&sample_event("e1", "Late", "2025-12-01", &["c1"])).unwrap();
        repo.store_event(&sample_event("e2", "Early", "2025-11-01", &["c1"])).unwrap();

        let titles: Vec<String> = repo.list_events().unwrap().into_iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["Early".to_string(), "Late".to_string()]);
    }

    #[test]
    fn test_update_moves_event_when_date_changes() {
        let env = TestEnvironment::empty();
        let repo = EventRepository::new(env.connection.clone());
        repo.store_event(&sample_event("e1", "First", "2025-11-01", &["c1"])).unwrap();
        repo.store_event(&sample_event("e2", "Second", "2025-11-05", &["c1"])).unwrap();

        let mut moved = repo.get_event("e1").unwrap().unwrap();
        moved.date = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
        repo.update_event(&moved).unwrap();

        let ids: Vec<String> = repo.list_events().unwrap().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["e2".to_string(), "e1".to_string()]);
    }

    #[test]
    fn test_update_missing_event_fails() {
        let env = TestEnvironment::empty();
        let repo = EventRepository::new(env.connection.clone());
        let event = sample_event("e9", "Ghost", "2025-11-01", &[]);
        assert!(repo.update_event(&event).is_err());
    }

    #[test]
    fn test_delete_event() {
        let env = TestEnvironment::empty();
        let repo = EventRepository::new(env.connection.clone());
        repo.store_event(&sample_event("e1", "Trip", "2025-11-01", &["c1"])).unwrap();
        assert!(repo.delete_event("e1").unwrap());
        assert!(!repo.delete_event("e1").unwrap());
        assert!(repo.list_events().unwrap().is_empty());
    }
}
