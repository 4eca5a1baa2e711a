//! sway-workspaces CLI
//!
//! Lists, follows and switches i3/sway workspaces from the command line.
//! The `watch` subcommand prints one line per lifecycle event, which is the
//! shape a status bar or launcher would consume.

use anyhow::Result;
use clap::{Parser, Subcommand};
use sway_workspaces::{Workspace, WorkspaceMonitor};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sway-workspaces")]
#[command(about = "Workspace state tool for i3 and sway")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the current workspaces in panel order
    List {
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Follow workspace lifecycle events until the connection closes
    Watch {
        /// Emit one JSON object per event instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Switch to the named workspace
    Goto {
        /// Name of the target workspace
        name: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { json } => cmd_list(json),
        Commands::Watch { json } => cmd_watch(json),
        Commands::Goto { name } => cmd_goto(&name),
    }
}

fn cmd_list(json: bool) -> Result<()> {
    let monitor = WorkspaceMonitor::connect()?;

    if json {
        println!("{}", serde_json::to_string(monitor.workspaces())?);
    } else {
        for workspace in monitor.workspaces() {
            print_workspace(workspace);
        }
    }

    Ok(())
}

fn cmd_watch(json: bool) -> Result<()> {
    let mut monitor = WorkspaceMonitor::connect()?;

    monitor.set_on_created(move |ws| emit("created", ws, json));
    monitor.set_on_destroyed(move |ws| emit("destroyed", ws, json));
    monitor.set_on_blurred(move |ws| emit("blurred", ws, json));
    monitor.set_on_focused(move |ws| emit("focused", ws, json));
    monitor.set_on_urgent(move |ws| emit("urgent", ws, json));
    monitor.set_on_shutdown(move || {
        if json {
            println!("{}", serde_json::json!({ "event": "shutdown" }));
        } else {
            println!("shutdown");
        }
    });

    monitor.run()?;
    Ok(())
}

fn cmd_goto(name: &str) -> Result<()> {
    let mut monitor = WorkspaceMonitor::connect()?;
    monitor.go_to_name(name)?;
    Ok(())
}

fn print_workspace(workspace: &Workspace) {
    let mark = if workspace.focused {
        '*'
    } else if workspace.urgent {
        '!'
    } else {
        ' '
    };
    println!("{} {} ({})", mark, workspace.name, workspace.output);
}

fn emit(event: &str, workspace: &Workspace, json: bool) {
    if json {
        println!(
            "{}",
            serde_json::json!({ "event": event, "workspace": workspace })
        );
    } else {
        println!("{} {}", event, workspace.name);
    }
}
