//! Lifecycle callback registry
//!
//! Consumers register at most one handler per lifecycle event. Slots are
//! independent: any subset may be set, setting a slot replaces the previous
//! handler, and notifying an empty slot is a no-op. Handlers are plain
//! closures; whatever state the consumer needs travels in the capture.

use crate::workspace::Workspace;

/// Handler for a workspace lifecycle event
///
/// The borrowed [`Workspace`] is only valid for the duration of the call.
pub(crate) type WorkspaceHandler = Box<dyn FnMut(&Workspace)>;

/// Handler for the window manager shutting down the IPC connection
pub(crate) type ShutdownHandler = Box<dyn FnMut()>;

/// One optional handler per lifecycle event
#[derive(Default)]
pub(crate) struct Callbacks {
    pub(crate) created: Option<WorkspaceHandler>,
    pub(crate) destroyed: Option<WorkspaceHandler>,
    pub(crate) blurred: Option<WorkspaceHandler>,
    pub(crate) focused: Option<WorkspaceHandler>,
    pub(crate) urgent: Option<WorkspaceHandler>,
    pub(crate) renamed: Option<WorkspaceHandler>,
    pub(crate) shutdown: Option<ShutdownHandler>,
}

fn notify(slot: &mut Option<WorkspaceHandler>, workspace: &Workspace) {
    if let Some(handler) = slot {
        handler(workspace);
    }
}

impl Callbacks {
    pub(crate) fn notify_created(&mut self, workspace: &Workspace) {
        notify(&mut self.created, workspace);
    }

    pub(crate) fn notify_destroyed(&mut self, workspace: &Workspace) {
        notify(&mut self.destroyed, workspace);
    }

    pub(crate) fn notify_blurred(&mut self, workspace: &Workspace) {
        notify(&mut self.blurred, workspace);
    }

    pub(crate) fn notify_focused(&mut self, workspace: &Workspace) {
        notify(&mut self.focused, workspace);
    }

    pub(crate) fn notify_urgent(&mut self, workspace: &Workspace) {
        notify(&mut self.urgent, workspace);
    }

    pub(crate) fn notify_shutdown(&mut self) {
        if let Some(handler) = &mut self.shutdown {
            handler();
        }
    }
}

impl std::fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let set = |slot: bool| if slot { "set" } else { "unset" };
        f.debug_struct("Callbacks")
            .field("created", &set(self.created.is_some()))
            .field("destroyed", &set(self.destroyed.is_some()))
            .field("blurred", &set(self.blurred.is_some()))
            .field("focused", &set(self.focused.is_some()))
            .field("urgent", &set(self.urgent.is_some()))
            .field("renamed", &set(self.renamed.is_some()))
            .field("shutdown", &set(self.shutdown.is_some()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_unset_slots_are_noops() {
        let mut callbacks = Callbacks::default();
        let ws = Workspace::named("a", "DP-1");

        // nothing registered, nothing happens
        callbacks.notify_created(&ws);
        callbacks.notify_destroyed(&ws);
        callbacks.notify_blurred(&ws);
        callbacks.notify_focused(&ws);
        callbacks.notify_urgent(&ws);
        callbacks.notify_shutdown();
    }

    #[test]
    fn test_handlers_receive_the_workspace() {
        let seen = Rc::new(Cell::new(0));
        let seen_in = Rc::clone(&seen);

        let mut callbacks = Callbacks::default();
        callbacks.created = Some(Box::new(move |ws: &Workspace| {
            assert_eq!(ws.name, "a");
            seen_in.set(seen_in.get() + 1);
        }));

        let ws = Workspace::named("a", "DP-1");
        callbacks.notify_created(&ws);
        callbacks.notify_created(&ws);
        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn test_setting_a_slot_replaces_the_handler() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        let mut callbacks = Callbacks::default();
        let count = Rc::clone(&first);
        callbacks.focused = Some(Box::new(move |_| count.set(count.get() + 1)));
        let count = Rc::clone(&second);
        callbacks.focused = Some(Box::new(move |_| count.set(count.get() + 1)));

        callbacks.notify_focused(&Workspace::named("a", "DP-1"));
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn test_shutdown_handler_fires() {
        let fired = Rc::new(Cell::new(false));
        let fired_in = Rc::clone(&fired);

        let mut callbacks = Callbacks::default();
        callbacks.shutdown = Some(Box::new(move || fired_in.set(true)));
        callbacks.notify_shutdown();
        assert!(fired.get());
    }
}
