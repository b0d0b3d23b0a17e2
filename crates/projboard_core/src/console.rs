//! Line-oriented text console over a `ProjectBoard`.
//!
//! # Responsibility
//! - Translate script lines into form edits, submits and drag gestures.
//! - Print list contents and alerts to any `Write` sink.
//!
//! # Invariants
//! - `#n` always refers to the n-th project created in this session.
//! - Rejected submits are reported as alerts, not console errors.

use crate::board::ProjectBoard;
use crate::drag::{DataTransfer, DragEvent, DragTarget};
use crate::form::project_input::Alert;
use crate::model::project::{ProjectId, ProjectStatus, UnknownStatus};
use crate::view::project_list::ProjectList;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};
use std::rc::Rc;
use uuid::Uuid;

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]*)"|(\S+)"#).expect("valid token regex"));

/// Console failure with the 1-based script line it happened on.
#[derive(Debug)]
pub enum ConsoleError {
    UnknownCommand {
        line: usize,
        command: String,
    },
    MissingArgument {
        line: usize,
        command: &'static str,
        argument: &'static str,
    },
    InvalidStatus {
        line: usize,
        source: UnknownStatus,
    },
    UnknownReference {
        line: usize,
        reference: String,
    },
    Io(io::Error),
}

impl Display for ConsoleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand { line, command } => {
                write!(f, "line {line}: unknown command `{command}`")
            }
            Self::MissingArgument {
                line,
                command,
                argument,
            } => write!(f, "line {line}: `{command}` requires <{argument}>"),
            Self::InvalidStatus { line, source } => write!(f, "line {line}: {source}"),
            Self::UnknownReference { line, reference } => {
                write!(f, "line {line}: unknown project reference `{reference}`")
            }
            Self::Io(err) => write!(f, "console output failed: {err}"),
        }
    }
}

impl Error for ConsoleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidStatus { source, .. } => Some(source),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ConsoleError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Alert sink queuing messages until the console prints them.
#[derive(Debug, Clone, Default)]
struct QueuedAlert {
    messages: Rc<RefCell<Vec<String>>>,
}

impl Alert for QueuedAlert {
    fn alert(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Scripted driver for a project board.
pub struct Console<W: Write> {
    board: ProjectBoard,
    alerts: QueuedAlert,
    created: Vec<ProjectId>,
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        let alerts = QueuedAlert::default();
        let board = ProjectBoard::new(Rc::new(alerts.clone()));
        Self {
            board,
            alerts,
            created: Vec::new(),
            out,
        }
    }

    pub fn board(&self) -> &ProjectBoard {
        &self.board
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs every line of `script`, stopping at the first error.
    pub fn run_script(&mut self, script: &str) -> Result<(), ConsoleError> {
        for (index, line) in script.lines().enumerate() {
            self.run_line(index + 1, line)?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Runs one script line. `line_no` is only used for error reporting.
    pub fn run_line(&mut self, line_no: usize, line: &str) -> Result<(), ConsoleError> {
        let line = line.trim_end();
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(());
        }

        let (command, rest) = match trimmed.split_once(' ') {
            Some((command, rest)) => (command, rest),
            None => (trimmed, ""),
        };
        debug!("event=console_command module=console status=start line={line_no} command={command}");

        match command {
            "title" => self.board.input_mut().set_title(rest),
            "description" => self.board.input_mut().set_description(rest),
            "people" => self.board.input_mut().set_people(rest),
            "submit" => self.submit()?,
            "add" => self.add(line_no, rest)?,
            "drag" => self.drag(line_no, rest)?,
            "dragover" => self.drag_over(line_no, rest)?,
            "leave" => self.leave(line_no, rest)?,
            "list" => self.list()?,
            other => {
                return Err(ConsoleError::UnknownCommand {
                    line: line_no,
                    command: other.to_string(),
                })
            }
        }

        self.flush_alerts()
    }

    fn submit(&mut self) -> Result<(), ConsoleError> {
        if let Ok(id) = self.board.input_mut().submit() {
            self.created.push(id);
            writeln!(self.out, "added #{} {}", self.created.len(), id)?;
        }
        Ok(())
    }

    fn add(&mut self, line_no: usize, rest: &str) -> Result<(), ConsoleError> {
        let mut args = tokenize(rest).into_iter();
        let title = required_arg(args.next(), line_no, "add", "title")?;
        let description = required_arg(args.next(), line_no, "add", "description")?;
        let people = required_arg(args.next(), line_no, "add", "people")?;

        let input = self.board.input_mut();
        input.set_title(title);
        input.set_description(description);
        input.set_people(people);
        self.submit()
    }

    fn drag(&mut self, line_no: usize, rest: &str) -> Result<(), ConsoleError> {
        let mut args = tokenize(rest).into_iter();
        let reference = required_arg(args.next(), line_no, "drag", "project")?;
        let target = parse_status(args.next(), line_no, "drag")?;
        let id = self.resolve(line_no, &reference)?;

        let accepted = self.board.drag_project(id, target);
        let outcome = match self.board.store().get(id) {
            Some(project) if accepted => project.status.to_string(),
            Some(_) => "rejected".to_string(),
            None => "unknown".to_string(),
        };
        writeln!(self.out, "drag {reference} -> {target}: {outcome}")?;
        Ok(())
    }

    fn drag_over(&mut self, line_no: usize, rest: &str) -> Result<(), ConsoleError> {
        let mut args = tokenize(rest).into_iter();
        let target = parse_status(args.next(), line_no, "dragover")?;
        let kind = required_arg(args.next(), line_no, "dragover", "kind")?;

        let mut transfer = DataTransfer::new();
        transfer.set_data(kind, "");
        let mut event = DragEvent::new(transfer);
        let list = self.board.list(target);
        list.drag_over(&mut event);
        let accepted = event.default_prevented();
        let drop_zone = list.drop_zone();
        writeln!(
            self.out,
            "dragover {target}: {} ({drop_zone:?})",
            if accepted { "accepted" } else { "rejected" }
        )?;
        Ok(())
    }

    fn leave(&mut self, line_no: usize, rest: &str) -> Result<(), ConsoleError> {
        let mut args = tokenize(rest).into_iter();
        let target = parse_status(args.next(), line_no, "leave")?;

        let list = self.board.list(target);
        list.drag_leave(&DragEvent::default());
        let drop_zone = list.drop_zone();
        writeln!(self.out, "leave {target}: {drop_zone:?}")?;
        Ok(())
    }

    fn list(&mut self) -> Result<(), ConsoleError> {
        let lines: Vec<String> = self
            .board
            .lists()
            .into_iter()
            .flat_map(|list| self.render_list(list))
            .collect();
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    fn render_list(&self, list: &ProjectList) -> Vec<String> {
        let mut lines = vec![list.heading()];
        let items = list.items();
        if items.is_empty() {
            lines.push("  (empty)".to_string());
        }
        for item in items {
            let project = item.project();
            lines.push(format!(
                "  {} {} - {} - {}",
                self.label(project.id),
                project.title,
                item.assigned_label(),
                project.description
            ));
        }
        lines
    }

    fn label(&self, id: ProjectId) -> String {
        match self.created.iter().position(|created| *created == id) {
            Some(index) => format!("#{}", index + 1),
            None => id.to_string(),
        }
    }

    fn resolve(&self, line_no: usize, reference: &str) -> Result<ProjectId, ConsoleError> {
        let unknown = || ConsoleError::UnknownReference {
            line: line_no,
            reference: reference.to_string(),
        };

        if let Some(index) = reference.strip_prefix('#') {
            let index = index.parse::<usize>().map_err(|_| unknown())?;
            return index
                .checked_sub(1)
                .and_then(|index| self.created.get(index))
                .copied()
                .ok_or_else(unknown);
        }
        Uuid::parse_str(reference).map_err(|_| unknown())
    }

    fn flush_alerts(&mut self) -> Result<(), ConsoleError> {
        let messages: Vec<String> = self.alerts.messages.borrow_mut().drain(..).collect();
        for message in messages {
            writeln!(self.out, "alert: {message}")?;
        }
        Ok(())
    }
}

/// Splits `input` on whitespace, keeping double-quoted runs together.
pub fn tokenize(input: &str) -> Vec<String> {
    TOKEN_RE
        .captures_iter(input)
        .filter_map(|captures| captures.get(1).or_else(|| captures.get(2)))
        .map(|token| token.as_str().to_string())
        .collect()
}

fn required_arg(
    value: Option<String>,
    line: usize,
    command: &'static str,
    argument: &'static str,
) -> Result<String, ConsoleError> {
    value.ok_or(ConsoleError::MissingArgument {
        line,
        command,
        argument,
    })
}

fn parse_status(
    value: Option<String>,
    line: usize,
    command: &'static str,
) -> Result<ProjectStatus, ConsoleError> {
    required_arg(value, line, command, "status")?
        .parse::<ProjectStatus>()
        .map_err(|source| ConsoleError::InvalidStatus { line, source })
}

#[cfg(test)]
mod tests {
    use super::tokenize;

    #[test]
    fn tokenize_keeps_quoted_runs() {
        assert_eq!(
            tokenize(r#""Board app" "build the board"  3"#),
            vec!["Board app", "build the board", "3"]
        );
        assert_eq!(tokenize(r#""" x"#), vec!["", "x"]);
        assert!(tokenize("   ").is_empty());
    }
}
