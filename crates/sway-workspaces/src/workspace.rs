//! Crate-owned workspace record
//!
//! Internal representation of a workspace, decoupled from the `swayipc` wire
//! types. Only the fields consumers actually lay out on a panel survive the
//! conversion; everything else (geometry, layout, window tree) stays at the
//! boundary.

use serde::Serialize;

/// A workspace as tracked by the monitor
///
/// Instances are owned by the monitor's workspace list. Callbacks receive a
/// borrowed reference that is only valid for the duration of the call; the
/// destroyed callback is the last time the entity is observable before it is
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workspace {
    /// The workspace name, unique within the window manager
    pub name: String,

    /// The workspace number, `-1` for named workspaces
    ///
    /// i3 derives this from the name prefix; it is carried verbatim from the
    /// compositor's reply.
    pub num: i32,

    /// Whether this workspace currently has input focus
    pub focused: bool,

    /// Whether a window on this workspace has raised the urgency hint
    pub urgent: bool,

    /// The output (monitor) the workspace is shown on
    pub output: String,
}

impl From<swayipc::Workspace> for Workspace {
    fn from(ws: swayipc::Workspace) -> Self {
        Self {
            name: ws.name,
            num: ws.num,
            focused: ws.focused,
            urgent: ws.urgent,
            output: ws.output,
        }
    }
}

impl From<&swayipc::Workspace> for Workspace {
    fn from(ws: &swayipc::Workspace) -> Self {
        Self {
            name: ws.name.clone(),
            num: ws.num,
            focused: ws.focused,
            urgent: ws.urgent,
            output: ws.output.clone(),
        }
    }
}

#[cfg(test)]
impl Workspace {
    /// Fixture for a named workspace on the given output
    pub(crate) fn named(name: &str, output: &str) -> Self {
        Self {
            name: name.to_string(),
            num: -1,
            focused: false,
            urgent: false,
            output: output.to_string(),
        }
    }

    /// Fixture for a numbered workspace on the given output
    pub(crate) fn numbered(num: i32, output: &str) -> Self {
        Self {
            name: num.to_string(),
            num,
            focused: false,
            urgent: false,
            output: output.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_helpers() {
        let ws = Workspace::named("mail", "DP-1");
        assert_eq!(ws.name, "mail");
        assert_eq!(ws.num, -1);
        assert!(!ws.focused);
        assert!(!ws.urgent);
        assert_eq!(ws.output, "DP-1");

        let ws = Workspace::numbered(3, "HDMI-1");
        assert_eq!(ws.name, "3");
        assert_eq!(ws.num, 3);
    }

    #[test]
    fn test_serializes_for_consumers() {
        let ws = Workspace::named("web", "DP-1");
        let json = serde_json::to_value(&ws).unwrap();
        assert_eq!(json["name"], "web");
        assert_eq!(json["num"], -1);
        assert_eq!(json["output"], "DP-1");
    }
}
