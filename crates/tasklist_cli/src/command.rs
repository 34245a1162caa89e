//! Line command parsing and list rendering.
//!
//! # Responsibility
//! - Turn one stdin line into a store event or a read request.
//! - Render the current list as plain text rows.

use std::fmt::{Display, Formatter};
use std::io::{self, Write};
use tasklist_core::{Task, TaskAction, TaskId};

pub const HELP_TEXT: &str = "commands:
  add <text>   add a task
  done <id>    mark a task complete
  undo <id>    mark a task not complete
  rm <id>      delete a task
  ls           show the list
  help         show this help
  quit         exit";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Apply(TaskAction),
    List,
    Help,
    Quit,
    /// Blank input line.
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    UnknownVerb(String),
    MissingId(&'static str),
    InvalidId(String),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVerb(verb) => write!(f, "unknown command `{verb}`; try `help`"),
            Self::MissingId(verb) => write!(f, "`{verb}` needs a task id"),
            Self::InvalidId(raw) => write!(f, "invalid task id `{raw}`"),
        }
    }
}

impl std::error::Error for CommandError {}

impl Command {
    /// Parses one input line.
    ///
    /// `add` keeps the remainder verbatim; blank text reaches the store,
    /// which ignores it.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb {
            "" => Ok(Self::Nothing),
            "add" => Ok(Self::Apply(TaskAction::Add {
                label: rest.to_string(),
            })),
            "done" => Ok(Self::Apply(TaskAction::SetDone {
                id: parse_id("done", rest)?,
                done: true,
            })),
            "undo" => Ok(Self::Apply(TaskAction::SetDone {
                id: parse_id("undo", rest)?,
                done: false,
            })),
            "rm" => Ok(Self::Apply(TaskAction::Remove {
                id: parse_id("rm", rest)?,
            })),
            "ls" => Ok(Self::List),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::UnknownVerb(other.to_string())),
        }
    }
}

fn parse_id(verb: &'static str, raw: &str) -> Result<TaskId, CommandError> {
    if raw.is_empty() {
        return Err(CommandError::MissingId(verb));
    }
    raw.parse::<u64>()
        .map(TaskId::from_raw)
        .map_err(|_| CommandError::InvalidId(raw.to_string()))
}

/// Writes one row per task, or `(no tasks)` for an empty list.
pub fn render(tasks: &[Task], out: &mut impl Write) -> io::Result<()> {
    if tasks.is_empty() {
        return writeln!(out, "(no tasks)");
    }
    for task in tasks {
        let mark = if task.is_done() { 'x' } else { ' ' };
        writeln!(out, "[{mark}] {}  {}", task.id(), task.label())?;
    }
    Ok(())
}
