use anyhow::Result;
use log::debug;
use shared::Child;

use super::connection::MemoryConnection;
use crate::storage::traits::ChildStorage;

/// Roster backed by the in-memory store
#[derive(Clone)]
pub struct ChildRepository {
    connection: MemoryConnection,
}

impl ChildRepository {
    pub fn new(connection: MemoryConnection) -> Self {
        Self { connection }
    }
}

impl ChildStorage for ChildRepository {
    fn list_children(&self) -> Result<Vec<Child>> {
        self.connection.read(|store| store.children.clone())
    }

    fn get_child(&self, child_id: &str) -> Result<Option<Child>> {
        debug!("🔍 Looking up child {}", child_id);
        self.connection.read(|store| {
            store
                .children
                .iter()
                .find(|child| child.child_id == child_id)
                .cloned()
        })
    }

    fn list_children_for_parent(&self, parent_id: &str) -> Result<Vec<Child>> {
        self.connection.read(|store| {
            store
                .children
                .iter()
                .filter(|child| child.parent_id == parent_id)
                .cloned()
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::test_utils::TestEnvironment;

    #[test]
    fn test_children_for_parent() {
        let env = TestEnvironment::seeded().unwrap();
        let repo = ChildRepository::new(env.connection.clone());

        let james_children = repo.list_children_for_parent("u4").unwrap();
        let names: Vec<&str> = james_children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alex James", "Amy James", "Rob James"]);
        assert!(repo.list_children_for_parent("u999").unwrap().is_empty());
    }

    #[test]
    fn test_get_child() {
        let env = TestEnvironment::seeded().unwrap();
        let repo = ChildRepository::new(env.connection.clone());

        let child = repo.get_child("c1").unwrap().unwrap();
        assert_eq!(child.name, "Noah Bennett");
        assert!(repo.get_child("c42").unwrap().is_none());
    }
}
