//! Ordered, event-synchronized workspace state for i3 and sway
//!
//! This crate maintains a local, ordered view of the window manager's
//! workspace set and keeps it consistent with the compositor's authoritative
//! state. Raw "something changed" notifications from the compositor are
//! turned into precise lifecycle deltas (created, destroyed, focused,
//! blurred, urgent) by diffing a freshly fetched workspace snapshot against
//! the cached list, and each delta is delivered to an optional consumer
//! callback.
//!
//! ## Architecture
//!
//! - [`WorkspaceMonitor`]: the façade. Owns the compositor connections, the
//!   sorted workspace list and the callback registry, and pumps the event
//!   stream.
//! - [`Workspace`]: the crate-owned workspace record, decoupled from the
//!   `swayipc` wire types.
//! - [`compare`]: the workspace ordering used everywhere — named workspaces
//!   before numbered ones, each block descending.
//!
//! Socket discovery, the wire protocol and the connection handshake belong
//! to the [`swayipc`] crate; this crate only deals in workspace semantics.
//!
//! ## Example
//!
//! ```no_run
//! use sway_workspaces::WorkspaceMonitor;
//!
//! let mut monitor = WorkspaceMonitor::connect()?;
//! monitor.set_on_focused(|ws| println!("focused {}", ws.name));
//! monitor.set_on_created(|ws| println!("created {}", ws.name));
//! monitor.run()?;
//! # Ok::<(), sway_workspaces::Error>(())
//! ```

mod callbacks;
mod error;
mod events;
mod monitor;
mod order;
mod reconcile;
mod store;
mod workspace;

pub use error::Error;
pub use events::{ChangeKind, WorkspaceUpdate};
pub use monitor::WorkspaceMonitor;
pub use order::{compare, parse_number};
pub use reconcile::SnapshotSource;
pub use store::WorkspaceList;
pub use workspace::Workspace;
