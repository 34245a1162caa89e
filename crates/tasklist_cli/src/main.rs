//! Line-driven task list front end.
//!
//! # Responsibility
//! - Feed stdin commands into one `TaskListStore`.
//! - Redraw the list after every change.

mod command;

use clap::Parser;
use command::{render, Command, HELP_TEXT};
use log::info;
use std::io::{self, BufRead, Write};
use tasklist_core::{default_log_level, init_logging, TaskListStore};

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(version)]
#[command(about = "In-memory task list editor")]
struct Cli {
    /// Log level (trace|debug|info|warn|error); defaults by build mode
    #[arg(long)]
    log_level: Option<String>,
    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long)]
    log_dir: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli
            .log_level
            .unwrap_or_else(|| default_log_level().as_str().to_string());
        if let Err(err) = init_logging(&level, log_dir) {
            eprintln!("tasklist: {err}");
            std::process::exit(2);
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = run(stdin.lock(), &mut stdout.lock()) {
        eprintln!("tasklist: {err}");
        std::process::exit(1);
    }
}

/// Processes commands until `quit` or end of input.
fn run(input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    let mut store = TaskListStore::new();
    info!("event=session_start module=cli status=ok");

    for line in input.lines() {
        let line = line?;
        match Command::parse(&line) {
            Ok(Command::Apply(action)) => {
                if store.dispatch(action).is_some() {
                    render(store.list(), out)?;
                }
            }
            Ok(Command::List) => render(store.list(), out)?,
            Ok(Command::Help) => writeln!(out, "{HELP_TEXT}")?,
            Ok(Command::Quit) => break,
            Ok(Command::Nothing) => {}
            Err(err) => writeln!(out, "{err}")?,
        }
        out.flush()?;
    }

    info!(
        "event=session_end module=cli status=ok count={}",
        store.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run;

    fn run_script(script: &str) -> String {
        let mut out = Vec::new();
        run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn walkthrough_renders_after_each_change() {
        let output = run_script("add Buy milk\ndone 1\nrm 1\n");
        assert_eq!(output, "[ ] 1  Buy milk\n[x] 1  Buy milk\n(no tasks)\n");
    }

    #[test]
    fn noops_do_not_redraw() {
        let output = run_script("add   \nrm 7\nundo 7\nls\n");
        assert_eq!(output, "(no tasks)\n");
    }

    #[test]
    fn bad_commands_report_and_continue() {
        let output = run_script("frobnicate\nadd a\nquit\nadd b\n");
        assert_eq!(output, "unknown command `frobnicate`; try `help`\n[ ] 1  a\n");
    }
}
