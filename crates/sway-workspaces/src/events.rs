//! Workspace notification model
//!
//! The compositor's workspace event carries a change tag plus two container
//! references. The reconcilers only ever need the tag and the container
//! names, so the event is reduced to [`WorkspaceUpdate`] at the boundary,
//! following the same decoupling as the [`Workspace`](crate::Workspace)
//! record itself.

use swayipc::WorkspaceChange;

/// What kind of workspace change the compositor reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeKind {
    /// Focus moved between workspaces
    Focus,
    /// A workspace came into existence
    Init,
    /// A workspace ran out of windows and was removed
    Empty,
    /// A workspace's urgency hint flipped
    Urgent,
    /// A workspace was renamed
    Rename,
    /// A workspace moved to another output
    Move,
    /// Any change kind this crate does not handle (e.g. `reload`)
    ///
    /// Carries the compositor's tag for logging; processing it is a no-op.
    Other(String),
}

pub(crate) fn kind_of(change: &WorkspaceChange) -> ChangeKind {
    match change {
        WorkspaceChange::Focus => ChangeKind::Focus,
        WorkspaceChange::Init => ChangeKind::Init,
        WorkspaceChange::Empty => ChangeKind::Empty,
        WorkspaceChange::Urgent => ChangeKind::Urgent,
        WorkspaceChange::Rename => ChangeKind::Rename,
        WorkspaceChange::Move => ChangeKind::Move,
        other => ChangeKind::Other(format!("{other:?}").to_lowercase()),
    }
}

/// A workspace change notification, reduced to what reconciliation needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceUpdate {
    /// The change kind reported by the compositor
    pub change: ChangeKind,

    /// Name of the workspace the change applies to, when the event carries it
    ///
    /// For focus changes this is the workspace gaining focus.
    pub current: Option<String>,

    /// Name of the previously focused workspace, on focus changes
    pub old: Option<String>,
}

impl WorkspaceUpdate {
    /// Fixture for a focus change between the named workspaces
    #[cfg(test)]
    pub(crate) fn focus(current: Option<&str>, old: Option<&str>) -> Self {
        Self {
            change: ChangeKind::Focus,
            current: current.map(str::to_string),
            old: old.map(str::to_string),
        }
    }
}

impl From<&swayipc::WorkspaceEvent> for WorkspaceUpdate {
    fn from(event: &swayipc::WorkspaceEvent) -> Self {
        Self {
            change: kind_of(&event.change),
            current: event.current.as_ref().and_then(|con| con.name.clone()),
            old: event.old.as_ref().and_then(|con| con.name.clone()),
        }
    }
}
