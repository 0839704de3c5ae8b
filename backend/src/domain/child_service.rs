use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;

use crate::storage::ChildStorage;
use shared::Child;

/// Read-only access to the class roster
#[derive(Clone)]
pub struct ChildService {
    children: Arc<dyn ChildStorage>,
}

impl ChildService {
    pub fn new(children: Arc<dyn ChildStorage>) -> Self {
        Self { children }
    }

    pub fn list_children(&self) -> Result<Vec<Child>> {
        let children = self.children.list_children()?;
        info!("👶 Found {} children on the roster", children.len());
        Ok(children)
    }

    pub fn get_child(&self, child_id: &str) -> Result<Option<Child>> {
        let child = self.children.get_child(child_id)?;
        if child.is_none() {
            warn!("Child not found: {}", child_id);
        }
        Ok(child)
    }

    /// The roster filtered to one parent
    pub fn children_for_parent(&self, parent_id: &str) -> Result<Vec<Child>> {
        self.children.list_children_for_parent(parent_id)
    }

    /// Display name for a child id, falling back to the id itself
    pub fn child_name(&self, child_id: &str) -> Result<String> {
        Ok(self
            .children
            .get_child(child_id)?
            .map(|c| c.name)
            .unwrap_or_else(|| child_id.to_string()))
    }

    /// Roster ids in roster order, for select-all controls
    pub fn roster_ids(&self) -> Result<Vec<String>> {
        Ok(self
            .children
            .list_children()?
            .into_iter()
            .map(|c| c.child_id)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::test_utils::TestEnvironment;

    #[test]
    fn test_children_for_parent_filters_by_parent_id() {
        let env = TestEnvironment::seeded().unwrap();
        let service = ChildService::new(env.child_repo());
        let children = service.children_for_parent("u4").unwrap();
        assert_eq!(children.len(), 3);
        assert!(children.iter().all(|c| c.parent_id == "u4"));
    }

    #[test]
    fn test_child_name_falls_back_to_id() {
        let env = TestEnvironment::seeded().unwrap();
        let service = ChildService::new(env.child_repo());
        assert_eq!(service.child_name("c6").unwrap(), "Rob James");
        assert_eq!(service.child_name("c77").unwrap(), "c77");
    }

    #[test]
    fn test_roster_ids_in_order() {
        let env = TestEnvironment::seeded().unwrap();
        let service = ChildService::new(env.child_repo());
        let ids = service.roster_ids().unwrap();
        assert_eq!(ids.first().map(String::as_str), Some("c1"));
        assert_eq!(ids.len(), 9);
    }
}
