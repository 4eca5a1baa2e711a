//! Workspace monitor façade
//!
//! [`WorkspaceMonitor`] ties the pieces together: it owns the command
//! connection, the event subscription, the sorted workspace list and the
//! callback registry, and drives reconciliation from the compositor's event
//! stream.
//!
//! Everything runs on the caller's thread. Snapshot fetches and commands are
//! synchronous request/response calls; event processing blocks until the
//! compositor sends the next event. A reconciliation (including its callback
//! invocations) always completes before the next event is looked at.

use swayipc::{Connection, Event, EventStream, EventType};
use tracing::debug;

use crate::callbacks::Callbacks;
use crate::error::Error;
use crate::events::WorkspaceUpdate;
use crate::reconcile;
use crate::store::WorkspaceList;
use crate::workspace::Workspace;

/// Live, ordered view of the window manager's workspaces
///
/// Constructed with [`connect`](WorkspaceMonitor::connect); kept current by
/// pumping [`process_event`](WorkspaceMonitor::process_event) or
/// [`run`](WorkspaceMonitor::run). The monitor owns every tracked
/// [`Workspace`]; callbacks borrow them only for the duration of the call.
///
/// Dropping the monitor closes both compositor connections and releases the
/// tracked workspaces; no callback fires after that.
pub struct WorkspaceMonitor {
    /// Request/response channel: snapshot fetches and commands
    conn: Connection,
    /// Dedicated subscription channel; subscribing consumes its connection
    events: EventStream,
    list: WorkspaceList,
    callbacks: Callbacks,
}

impl WorkspaceMonitor {
    /// Connect to the window manager and build the initial workspace view
    ///
    /// Opens the command connection, populates the workspace list from a
    /// full fetch, then opens and subscribes a second connection to the
    /// `workspace` and `shutdown` event classes. Socket discovery (via
    /// `$SWAYSOCK`/`$I3SOCK`) is handled by the IPC layer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Connect`], [`Error::Fetch`] or [`Error::Subscribe`]
    /// if any step fails; partial state is torn down before returning.
    pub fn connect() -> Result<Self, Error> {
        let mut conn = Connection::new().map_err(Error::Connect)?;

        let mut list = WorkspaceList::new();
        for reply in conn.get_workspaces().map_err(Error::Fetch)? {
            list.insert(Workspace::from(reply));
        }

        let events = Connection::new()
            .map_err(Error::Connect)?
            .subscribe(&[EventType::Workspace, EventType::Shutdown])
            .map_err(Error::Subscribe)?;

        debug!("connected, tracking {} workspace(s)", list.len());

        Ok(Self {
            conn,
            events,
            list,
            callbacks: Callbacks::default(),
        })
    }

    /// The tracked workspaces, in panel order
    ///
    /// Two calls with no event processed in between return equal sequences.
    pub fn workspaces(&self) -> &[Workspace] {
        self.list.workspaces()
    }

    /// Tell the window manager to switch to the given workspace
    pub fn go_to(&mut self, workspace: &Workspace) -> Result<(), Error> {
        self.go_to_name(&workspace.name)
    }

    /// Tell the window manager to switch to the named workspace
    ///
    /// # Errors
    ///
    /// Returns [`Error::Command`] if the command could not be delivered.
    /// The reply payload of a delivered command is discarded.
    pub fn go_to_name(&mut self, name: &str) -> Result<(), Error> {
        let command = format!("workspace {}", name);
        self.conn.run_command(&command).map_err(Error::Command)?;
        Ok(())
    }

    /// Block until the next event is received and processed
    ///
    /// Workspace events are reconciled against a fresh snapshot and the
    /// matching lifecycle callback fires; a shutdown event invokes the
    /// shutdown callback; anything else is ignored. Returns `Ok(false)` once
    /// the event stream has ended.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Receive`] if reading the event fails and
    /// [`Error::Fetch`] if the snapshot refresh inside a reconciliation
    /// fails. The event is considered consumed either way.
    pub fn process_event(&mut self) -> Result<bool, Error> {
        let event = match self.events.next() {
            Some(event) => event.map_err(Error::Receive)?,
            None => return Ok(false),
        };

        match event {
            Event::Workspace(event) => {
                let update = WorkspaceUpdate::from(&*event);
                reconcile::apply(&update, &mut self.conn, &mut self.list, &mut self.callbacks)?;
            }
            Event::Shutdown(_) => {
                debug!("window manager is closing the IPC connection");
                self.callbacks.notify_shutdown();
            }
            _ => {}
        }

        Ok(true)
    }

    /// Process events until the stream ends or an error surfaces
    pub fn run(&mut self) -> Result<(), Error> {
        while self.process_event()? {}
        Ok(())
    }

    /// Set the handler invoked when a workspace is created
    ///
    /// Each setter replaces the slot's previous handler; slots left unset
    /// are skipped when their event fires.
    pub fn set_on_created(&mut self, handler: impl FnMut(&Workspace) + 'static) {
        self.callbacks.created = Some(Box::new(handler));
    }

    /// Set the handler invoked when a workspace is destroyed
    ///
    /// The handler is the last observer of the workspace; the entity is
    /// released right after it returns.
    pub fn set_on_destroyed(&mut self, handler: impl FnMut(&Workspace) + 'static) {
        self.callbacks.destroyed = Some(Box::new(handler));
    }

    /// Set the handler invoked when a workspace loses focus
    pub fn set_on_blurred(&mut self, handler: impl FnMut(&Workspace) + 'static) {
        self.callbacks.blurred = Some(Box::new(handler));
    }

    /// Set the handler invoked when a workspace gains focus
    pub fn set_on_focused(&mut self, handler: impl FnMut(&Workspace) + 'static) {
        self.callbacks.focused = Some(Box::new(handler));
    }

    /// Set the handler invoked when a workspace's urgency hint flips
    pub fn set_on_urgent(&mut self, handler: impl FnMut(&Workspace) + 'static) {
        self.callbacks.urgent = Some(Box::new(handler));
    }

    /// Set the handler for workspace renames
    ///
    /// Renames are currently delivered as a destroyed/created pair, so this
    /// slot is registerable but not yet invoked.
    pub fn set_on_renamed(&mut self, handler: impl FnMut(&Workspace) + 'static) {
        self.callbacks.renamed = Some(Box::new(handler));
    }

    /// Set the handler invoked when the window manager shuts the IPC down
    pub fn set_on_shutdown(&mut self, handler: impl FnMut() + 'static) {
        self.callbacks.shutdown = Some(Box::new(handler));
    }
}
