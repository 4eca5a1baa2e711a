//! Error types for workspace monitoring

use thiserror::Error;

/// Errors that can occur while talking to the window manager
///
/// Every variant wraps the underlying [`swayipc::Error`], tagged with the
/// operation that failed so callers can tell a broken subscription apart
/// from a failed snapshot refresh.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to open a connection to the compositor socket
    #[error("failed to connect to the window manager: {0}")]
    Connect(#[source] swayipc::Error),

    /// Failed to subscribe to compositor events
    #[error("failed to subscribe to window manager events: {0}")]
    Subscribe(#[source] swayipc::Error),

    /// A workspace snapshot fetch failed mid-session
    #[error("failed to fetch the workspace list: {0}")]
    Fetch(#[source] swayipc::Error),

    /// A command sent to the compositor failed in transport
    #[error("failed to send command to the window manager: {0}")]
    Command(#[source] swayipc::Error),

    /// Reading the next event from the subscription stream failed
    #[error("failed to read event from the window manager: {0}")]
    Receive(#[source] swayipc::Error),
}
