//! Terminal rendering of replies and supervisor events.

use lycaddy_core::{DirEntry, SupervisorEvent};

/// Which terminal stream a line belongs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Stdout,
    Stderr,
}

/// Render a supervisor event as one terminal line.
///
/// Server output is passed through untouched; lifecycle events get a
/// bracketed tag.
pub fn format_event(event: &SupervisorEvent) -> (Target, String) {
    match event {
        SupervisorEvent::Started { pid } => (Target::Stderr, format!("[started] pid {pid}")),
        SupervisorEvent::Stdout { text } => (Target::Stdout, text.clone()),
        SupervisorEvent::Stderr { text } => (Target::Stderr, text.clone()),
        SupervisorEvent::Stopping { pid } => (Target::Stderr, format!("[stopping] pid {pid}")),
        SupervisorEvent::Exit(info) => (Target::Stderr, format!("[exit] {info}")),
        SupervisorEvent::SpawnError { message } => {
            (Target::Stderr, format!("[spawn error] {message}"))
        }
    }
}

/// Print a supervisor event.
pub fn print_event(event: &SupervisorEvent) {
    match format_event(event) {
        (Target::Stdout, line) => println!("{line}"),
        (Target::Stderr, line) => eprintln!("{line}"),
    }
}

/// Render a directory listing, one entry per line.
pub fn format_listing(entries: &[DirEntry]) -> String {
    if entries.is_empty() {
        return "(empty)".to_string();
    }

    let width = entries
        .iter()
        .map(|e| size_label(e).len())
        .max()
        .unwrap_or_default();

    entries
        .iter()
        .map(|e| {
            let name = if e.is_dir {
                format!("{}/", e.name)
            } else {
                e.name.clone()
            };
            format!("{:>width$}  {name}", size_label(e))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn size_label(entry: &DirEntry) -> String {
    if entry.is_dir {
        "-".to_string()
    } else {
        entry.size.to_string()
    }
}
