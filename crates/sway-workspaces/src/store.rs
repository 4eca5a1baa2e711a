//! Sorted workspace list
//!
//! Owns every tracked [`Workspace`] and keeps them sorted under the panel
//! ordering after every mutation. Names are unique; inserting under an
//! existing name replaces the old entry. Lookups are linear, which is fine
//! for the tens of workspaces a window manager realistically holds.

use crate::order;
use crate::workspace::Workspace;

/// The ordered collection of tracked workspaces
#[derive(Debug, Default)]
pub struct WorkspaceList {
    entries: Vec<Workspace>,
}

impl WorkspaceList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a workspace at its sorted position
    ///
    /// Any existing entry with the same name is replaced, so the list never
    /// holds two workspaces under one name.
    pub fn insert(&mut self, workspace: Workspace) {
        self.remove(&workspace.name);
        let at = self
            .entries
            .partition_point(|w| order::compare(w, &workspace).is_lt());
        self.entries.insert(at, workspace);
    }

    /// Remove a workspace by name, returning it if present
    pub fn remove(&mut self, name: &str) -> Option<Workspace> {
        let at = self.entries.iter().position(|w| w.name == name)?;
        Some(self.entries.remove(at))
    }

    /// Look up a workspace by name
    pub fn get(&self, name: &str) -> Option<&Workspace> {
        self.entries.iter().find(|w| w.name == name)
    }

    /// Look up a workspace by name for in-place mutation
    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Workspace> {
        self.entries.iter_mut().find(|w| w.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The tracked workspaces in panel order
    pub fn workspaces(&self) -> &[Workspace] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &WorkspaceList) -> Vec<&str> {
        list.workspaces().iter().map(|w| w.name.as_str()).collect()
    }

    #[test]
    fn test_insert_keeps_panel_order() {
        let mut list = WorkspaceList::new();
        for name in ["1", "web", "3", "chat"] {
            list.insert(Workspace::named(name, "DP-1"));
        }
        assert_eq!(names(&list), vec!["web", "chat", "3", "1"]);
    }

    #[test]
    fn test_insert_replaces_same_name() {
        let mut list = WorkspaceList::new();
        list.insert(Workspace::named("web", "DP-1"));

        let mut moved = Workspace::named("web", "HDMI-1");
        moved.urgent = true;
        list.insert(moved);

        assert_eq!(list.len(), 1);
        let ws = list.get("web").unwrap();
        assert_eq!(ws.output, "HDMI-1");
        assert!(ws.urgent);
    }

    #[test]
    fn test_remove_returns_entry() {
        let mut list = WorkspaceList::new();
        list.insert(Workspace::named("a", "DP-1"));
        list.insert(Workspace::named("b", "DP-1"));

        let removed = list.remove("a").unwrap();
        assert_eq!(removed.name, "a");
        assert_eq!(names(&list), vec!["b"]);
        assert!(list.remove("a").is_none());
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut list = WorkspaceList::new();
        list.insert(Workspace::named("a", "DP-1"));

        list.get_mut("a").unwrap().focused = true;
        assert!(list.get("a").unwrap().focused);
        assert!(list.get_mut("missing").is_none());
    }

    #[test]
    fn test_reads_are_idempotent() {
        let mut list = WorkspaceList::new();
        for name in ["5", "mail", "2"] {
            list.insert(Workspace::named(name, "DP-1"));
        }
        let first: Vec<Workspace> = list.workspaces().to_vec();
        let second: Vec<Workspace> = list.workspaces().to_vec();
        assert_eq!(first, second);
    }
}
