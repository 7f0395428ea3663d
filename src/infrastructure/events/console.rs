//! Console Event Sink
//!
//! Human-readable, timestamped lines:
//!
//! ```text
//! 14:02:11 [themesync] create assets/logo.png
//! 14:02:11 [themesync] warning asset directory did not exist and was created
//! ```

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crossterm::style::{Color, Stylize};
use is_terminal::IsTerminal;

use crate::domain::ports::{EventKind, SyncEvent, SyncEventSink};

const TAG: &str = "[themesync]";

fn kind_color(kind: EventKind) -> Color {
    match kind {
        EventKind::Create | EventKind::Update | EventKind::CycleFinish => Color::Green,
        EventKind::Delete => Color::Magenta,
        EventKind::Warning | EventKind::DuplicateIgnored => Color::Yellow,
        EventKind::Error => Color::Red,
        EventKind::Ignored | EventKind::CycleStart | EventKind::Shutdown => Color::DarkGrey,
    }
}

/// Event sink that prints to stderr
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    color: bool,
    /// Paths under this root are printed relative to it
    root: Option<PathBuf>,
}

impl ConsoleEventSink {
    /// Write to stderr, coloured when stderr is a terminal
    pub fn stderr() -> Self {
        let color = io::stderr().is_terminal();
        Self {
            writer: Mutex::new(Box::new(io::stderr())),
            color,
            root: None,
        }
    }

    /// Plain output to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            color: false,
            root: None,
        }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    fn display(&self, path: &Path) -> String {
        let shown = self
            .root
            .as_deref()
            .and_then(|root| path.strip_prefix(root).ok())
            .unwrap_or(path);
        shown.display().to_string()
    }

    fn describe(&self, event: &SyncEvent) -> String {
        match event {
            SyncEvent::CycleStarted { mode, entries } => {
                format!("{} cycle started ({} assets)", mode, entries)
            }
            SyncEvent::Created { path, .. }
            | SyncEvent::Updated { path, .. }
            | SyncEvent::Deleted { path }
            | SyncEvent::Ignored { path } => self.display(path),
            SyncEvent::DuplicateIgnored { path, dest } => format!(
                "{} (destination {} already claimed)",
                self.display(path),
                self.display(dest)
            ),
            SyncEvent::Warning { message, path } => match path {
                Some(path) => format!("{}: {}", message, self.display(path)),
                None => message.clone(),
            },
            SyncEvent::Error {
                message,
                path,
                cause,
            } => match cause {
                Some(cause) => format!("{}: {} ({})", message, self.display(path), cause),
                None => format!("{}: {}", message, self.display(path)),
            },
            SyncEvent::CycleFinished {
                copied,
                skipped,
                deleted,
                errors,
            } => format!(
                "{} copied, {} skipped, {} deleted, {} errors",
                copied, skipped, deleted, errors
            ),
            SyncEvent::Shutdown => "stopped".to_string(),
        }
    }

    fn format_line(&self, event: &SyncEvent) -> String {
        let time = chrono::Local::now().format("%H:%M:%S").to_string();
        let kind = event.kind();
        let body = self.describe(event);

        if self.color {
            format!(
                "{} {} {} {}",
                time.dark_grey(),
                TAG.cyan(),
                kind.as_str().with(kind_color(kind)),
                body
            )
        } else {
            format!("{} {} {} {}", time, TAG, kind, body)
        }
    }
}

impl SyncEventSink for ConsoleEventSink {
    fn on_event(&self, event: SyncEvent) {
        let line = self.format_line(&event);
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
        }
    }

    fn flush(&self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
