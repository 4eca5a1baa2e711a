//! Snapshot reconciliation
//!
//! The compositor's workspace events say little more than "something
//! changed". Each handler here fetches a fresh snapshot of the authoritative
//! workspace list, diffs it against the tracked list, applies the first
//! divergence it finds and notifies the matching callback. One event is
//! assumed to carry exactly one atomic change, so every scan stops at the
//! first mismatch; batched changes are not reconstructed.
//!
//! Focus changes are the exception: the event payload already names both
//! sides of the change, so no snapshot is fetched for them.

use tracing::{debug, warn};

use crate::callbacks::Callbacks;
use crate::error::Error;
use crate::events::{ChangeKind, WorkspaceUpdate};
use crate::store::WorkspaceList;
use crate::workspace::Workspace;

/// Source of authoritative workspace snapshots
///
/// Production code fetches from the live compositor connection; tests feed
/// canned lists. Snapshots are requested fresh for every reconciliation and
/// discarded afterwards.
pub trait SnapshotSource {
    /// Fetch the full workspace list as the window manager reports it
    fn snapshot(&mut self) -> Result<Vec<Workspace>, Error>;
}

impl SnapshotSource for swayipc::Connection {
    fn snapshot(&mut self) -> Result<Vec<Workspace>, Error> {
        let replies = self.get_workspaces().map_err(Error::Fetch)?;
        Ok(replies.iter().map(Workspace::from).collect())
    }
}

// Canned snapshots for driving the reconcilers without a compositor.
impl SnapshotSource for Vec<Workspace> {
    fn snapshot(&mut self) -> Result<Vec<Workspace>, Error> {
        Ok(self.clone())
    }
}

/// Route a workspace notification to its reconciliation handler
///
/// Unrecognized change kinds are logged and ignored; they are not an error
/// and cause no state change. Snapshot fetch failures abort the handler and
/// surface to the caller.
pub(crate) fn apply<S: SnapshotSource>(
    update: &WorkspaceUpdate,
    source: &mut S,
    list: &mut WorkspaceList,
    callbacks: &mut Callbacks,
) -> Result<(), Error> {
    match &update.change {
        ChangeKind::Focus => {
            focused(update, list, callbacks);
            Ok(())
        }
        ChangeKind::Init => created(source, list, callbacks),
        ChangeKind::Empty => destroyed(source, list, callbacks),
        ChangeKind::Urgent => urgent(source, list, callbacks),
        ChangeKind::Rename => renamed(source, list, callbacks),
        ChangeKind::Move => moved(source, list, callbacks),
        ChangeKind::Other(kind) => {
            debug!("ignoring unhandled workspace change: {}", kind);
            Ok(())
        }
    }
}

/// A workspace appeared: the first snapshot entry we do not track yet
pub(crate) fn created<S: SnapshotSource>(
    source: &mut S,
    list: &mut WorkspaceList,
    callbacks: &mut Callbacks,
) -> Result<(), Error> {
    let snapshot = source.snapshot()?;

    let fresh = match snapshot.iter().find(|remote| !list.contains(&remote.name)) {
        Some(remote) => remote.clone(),
        None => {
            warn!("workspace created, but every reported workspace is already tracked");
            return Ok(());
        }
    };

    list.insert(fresh.clone());
    callbacks.notify_created(&fresh);
    Ok(())
}

/// A workspace disappeared: the first tracked entry missing from the snapshot
pub(crate) fn destroyed<S: SnapshotSource>(
    source: &mut S,
    list: &mut WorkspaceList,
    callbacks: &mut Callbacks,
) -> Result<(), Error> {
    let snapshot = source.snapshot()?;

    let gone = list
        .workspaces()
        .iter()
        .find(|local| !snapshot.iter().any(|remote| remote.name == local.name))
        .map(|local| local.name.clone());

    let name = match gone {
        Some(name) => name,
        None => {
            warn!("workspace destroyed, but every tracked workspace is still reported");
            return Ok(());
        }
    };

    if let Some(removed) = list.remove(&name) {
        callbacks.notify_destroyed(&removed);
        // removed is dropped here, right after the callback observed it
    }
    Ok(())
}

/// An urgency hint flipped: the first snapshot entry whose flag drifted
pub(crate) fn urgent<S: SnapshotSource>(
    source: &mut S,
    list: &mut WorkspaceList,
    callbacks: &mut Callbacks,
) -> Result<(), Error> {
    let snapshot = source.snapshot()?;

    for remote in &snapshot {
        if let Some(local) = list.get_mut(&remote.name) {
            if local.urgent != remote.urgent {
                local.urgent = remote.urgent;
                callbacks.notify_urgent(local);
                return Ok(());
            }
        }
    }

    debug!("urgency change, but no tracked workspace drifted from the snapshot");
    Ok(())
}

/// A workspace was renamed
///
/// Renaming is handled as creating the new name and removing the old one;
/// consumers observe a created/destroyed pair rather than a dedicated rename
/// notification.
pub(crate) fn renamed<S: SnapshotSource>(
    source: &mut S,
    list: &mut WorkspaceList,
    callbacks: &mut Callbacks,
) -> Result<(), Error> {
    created(source, list, callbacks)?;
    destroyed(source, list, callbacks)
}

/// A workspace moved to another output
///
/// The stale entry is destroyed and a fresh one built from the snapshot, so
/// consumers see the same pair of notifications a cross-output move produces
/// in the window manager itself.
pub(crate) fn moved<S: SnapshotSource>(
    source: &mut S,
    list: &mut WorkspaceList,
    callbacks: &mut Callbacks,
) -> Result<(), Error> {
    let snapshot = source.snapshot()?;

    let relocated = snapshot.iter().find(|remote| {
        list.get(&remote.name)
            .map(|local| local.output != remote.output)
            .unwrap_or(false)
    });

    let remote = match relocated {
        Some(remote) => remote.clone(),
        None => {
            debug!("workspace moved, but no tracked workspace changed output");
            return Ok(());
        }
    };

    if let Some(removed) = list.remove(&remote.name) {
        callbacks.notify_destroyed(&removed);
    }

    list.insert(remote.clone());
    callbacks.notify_created(&remote);
    Ok(())
}

/// Focus moved: blur the old workspace, focus the current one
///
/// The old workspace may legitimately be untracked (focus returning from a
/// scratch container); the blur step is skipped then. The current workspace
/// is expected to be tracked.
pub(crate) fn focused(update: &WorkspaceUpdate, list: &mut WorkspaceList, callbacks: &mut Callbacks) {
    if let Some(old_name) = update.old.as_deref() {
        if let Some(blurred) = list.get_mut(old_name) {
            blurred.focused = false;
            callbacks.notify_blurred(blurred);
        }
    }

    let current_name = match update.current.as_deref() {
        Some(name) => name,
        None => {
            warn!("focus change without a current workspace name");
            return;
        }
    };

    match list.get_mut(current_name) {
        Some(ws) => {
            ws.focused = true;
            callbacks.notify_focused(ws);
        }
        None => warn!("focus change to untracked workspace: {}", current_name),
    }
}
