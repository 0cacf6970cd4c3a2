//! Interactive console.
//!
//! Terminal input is read on its own thread and turned into requests on a
//! single channel. Requests are handled one at a time, and the input thread
//! waits for each to finish before prompting again, so panel operations never
//! overlap. Supervisor events are printed by a separate task as they arrive.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lycaddy_core::SupervisorEvent;
use lycaddy_gui::types::ServerReply;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::broadcast::Receiver;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use crate::bootstrap::CliContext;
use crate::handlers::files::read_upload_items;
use crate::presentation::{format_listing, print_event};

const PROMPT: &str = "lycaddy> ";

/// One console line.
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct ConsoleLine {
    #[command(subcommand)]
    command: ConsoleCommand,
}

/// Commands accepted at the console prompt.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Start the server
    Start,
    /// Stop the server (does not wait for it to exit)
    Stop,
    /// Restart the server, starting it if stopped
    Restart,
    /// Show whether the server is running
    Status,
    /// Show root directory and port
    Config,
    /// Set the document root, keeping the port
    SetRoot {
        /// New root path
        path: String,
    },
    /// Set the port, keeping the root (invalid input becomes 80)
    SetPort {
        /// New port
        port: String,
    },
    /// Prompt for a new document root
    PickRoot,
    /// Prompt for the upload folder and list it
    PickFolder,
    /// List a directory (defaults to the upload folder)
    Ls {
        /// Directory to list
        dir: Option<String>,
    },
    /// Copy local files into the upload folder
    Upload {
        /// Files to copy
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Target directory instead of the upload folder
        #[arg(long)]
        to: Option<String>,
    },
    /// Leave the console and stop the server
    #[command(alias = "exit")]
    Quit,
}

/// Parse a console line. Words are split on whitespace.
pub fn parse_line(line: &str) -> Result<ConsoleCommand, clap::Error> {
    ConsoleLine::try_parse_from(line.split_whitespace()).map(|parsed| parsed.command)
}

/// Whether the console keeps going after a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A line of input awaiting handling.
struct Request {
    line: String,
    done: oneshot::Sender<Flow>,
}

/// State kept between console commands.
#[derive(Debug, Default)]
pub struct Session {
    /// Folder chosen with `pick-folder`.
    pub upload_dir: Option<String>,
}

/// Run the console until the user quits, then run the shutdown hook.
pub async fn run(ctx: &CliContext) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<Request>(1);
    let printer = tokio::spawn(print_events(ctx.events.subscribe()));
    std::thread::spawn(move || read_input(&tx));

    println!("lycaddy console: type `help` for commands, `quit` to leave");
    let mut session = Session::default();

    while let Some(request) = rx.recv().await {
        let flow = match parse_line(&request.line) {
            Ok(command) => handle(ctx, &mut session, command).await,
            Err(e) => {
                // Help output and usage errors alike
                println!("{}", e.render());
                Flow::Continue
            }
        };
        let _ = request.done.send(flow);
        if flow == Flow::Quit {
            break;
        }
    }

    ctx.shutdown();
    printer.abort();
    Ok(())
}

/// Execute one console command.
pub async fn handle(ctx: &CliContext, session: &mut Session, command: ConsoleCommand) -> Flow {
    let backend = &ctx.backend;
    debug!(?command, "Console command");

    match command {
        ConsoleCommand::Start => report_server(&backend.start_server().await),
        ConsoleCommand::Stop => report_server(&backend.stop_server().await),
        ConsoleCommand::Restart => {
            println!("Restarting...");
            report_server(&backend.restart_server().await);
        }
        ConsoleCommand::Status => {
            let running = backend.get_status().running;
            println!("{}", if running { "running" } else { "stopped" });
        }
        ConsoleCommand::Config => {
            let reply = backend.read_config().await;
            match (reply.root_path, reply.port) {
                (Some(root), Some(port)) if reply.ok => println!("root = {root}\nport = {port}"),
                _ => report_error(reply.error.as_deref()),
            }
        }
        ConsoleCommand::SetRoot { path } => update_config(ctx, Some(path), None).await,
        ConsoleCommand::SetPort { port } => update_config(ctx, None, Some(port)).await,
        ConsoleCommand::PickRoot => match backend.select_directory().await.path {
            Some(path) => update_config(ctx, Some(path), None).await,
            None => println!("Cancelled"),
        },
        ConsoleCommand::PickFolder => match backend.select_upload_folder().await.path {
            Some(path) => {
                println!("Upload folder: {path}");
                list(ctx, Some(&path)).await;
                session.upload_dir = Some(path);
            }
            None => println!("Cancelled"),
        },
        ConsoleCommand::Ls { dir } => {
            list(ctx, dir.as_deref().or(session.upload_dir.as_deref())).await;
        }
        ConsoleCommand::Upload { files, to } => {
            let dir = to.or_else(|| session.upload_dir.clone());
            match read_upload_items(&files) {
                Ok(items) => {
                    let reply = backend.write_files(dir.as_deref(), items).await;
                    match reply.written {
                        Some(written) if reply.ok => {
                            println!("Wrote {} file(s): {}", written.len(), written.join(", "));
                        }
                        _ => report_error(reply.error.as_deref()),
                    }
                }
                Err(e) => println!("Error: {e}"),
            }
        }
        ConsoleCommand::Quit => return Flow::Quit,
    }
    Flow::Continue
}

async fn update_config(ctx: &CliContext, root: Option<String>, port: Option<String>) {
    let current = ctx.backend.read_config().await;
    let (Some(current_root), Some(current_port)) = (current.root_path, current.port) else {
        report_error(current.error.as_deref());
        return;
    };

    let root = root.unwrap_or(current_root);
    let port = port.unwrap_or_else(|| current_port.to_string());
    let reply = ctx.backend.write_config(&root, &port).await;
    if reply.ok {
        println!("Caddyfile updated; restart the server to apply");
    } else {
        report_error(reply.error.as_deref());
    }
}

async fn list(ctx: &CliContext, dir: Option<&str>) {
    let reply = ctx.backend.list_files(dir).await;
    if reply.ok {
        println!("{}", format_listing(&reply.files));
    } else {
        report_error(reply.error.as_deref());
    }
}

fn report_server(reply: &ServerReply) {
    match reply.running {
        Some(true) if reply.ok => println!("Server running"),
        Some(false) if reply.ok => println!("Server stopped"),
        _ => report_error(reply.error.as_deref()),
    }
}

fn report_error(message: Option<&str>) {
    println!("Error: {}", message.unwrap_or("unknown error"));
}

/// Blocking input loop feeding the request channel.
fn read_input(tx: &mpsc::Sender<Request>) {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            warn!(error = %e, "Cannot open terminal for console input");
            let _ = submit(tx, "quit".to_string());
            return;
        }
    };

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => "quit".to_string(),
            Err(e) => {
                warn!(error = %e, "Console input failed");
                "quit".to_string()
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        if let Err(e) = editor.add_history_entry(line.as_str()) {
            debug!(error = %e, "Failed to record console history");
        }

        if submit(tx, line) != Some(Flow::Continue) {
            break;
        }
    }
}

/// Send one request and wait until it has been handled.
fn submit(tx: &mpsc::Sender<Request>, line: String) -> Option<Flow> {
    let (done, done_rx) = oneshot::channel();
    tx.blocking_send(Request { line, done }).ok()?;
    done_rx.blocking_recv().ok()
}

async fn print_events(mut events: Receiver<SupervisorEvent>) {
    loop {
        match events.recv().await {
            Ok(event) => print_event(&event),
            Err(RecvError::Lagged(skipped)) => warn!(skipped, "Console fell behind server output"),
            Err(RecvError::Closed) => break,
        }
    }
}
