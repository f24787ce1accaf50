//! Interactive terminal shell
//!
//! Reads one command per line, forwards it to the session and re-renders
//! the list whenever the store reports an applied change.

use crate::cli::commands::ShellCommand;
use crate::cli::display::{help_text, render_task_list};
use crate::session::Session;
use crate::store::TaskListChange;
use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

const PROMPT: &str = "> ";

/// Run the shell until EOF or `quit`
pub fn run_shell<R, W>(session: &mut Session, input: R, mut out: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let dirty = Rc::new(Cell::new(false));
    let flag = Rc::clone(&dirty);
    let subscription = session.subscribe(move |_: &TaskListChange<'_>| flag.set(true));

    let result = shell_loop(session, input, &mut out, &dirty);
    session.unsubscribe(subscription);

    log::debug!("Shell closed with {} tasks", session.store().len());
    result
}

fn shell_loop<R, W>(
    session: &mut Session,
    input: R,
    out: &mut W,
    dirty: &Cell<bool>,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    render(session, out)?;
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;

        match line.parse::<ShellCommand>() {
            Ok(ShellCommand::Quit) => break,
            Ok(ShellCommand::Empty) => {}
            Ok(ShellCommand::List) => render(session, out)?,
            Ok(ShellCommand::Help) => writeln!(out, "{}", help_text())?,
            Ok(ShellCommand::Add(text)) => {
                session.submit_text(&text);
            }
            Ok(ShellCommand::Remove(position)) => {
                if let Some(index) = position.checked_sub(1) {
                    session.remove(index);
                }
            }
            Ok(ShellCommand::Toggle(position)) => {
                if let Some(index) = position.checked_sub(1) {
                    session.toggle(index);
                }
            }
            Err(e) => writeln!(out, "{}", e)?,
        }

        if dirty.replace(false) {
            render(session, out)?;
        }

        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }

    Ok(())
}

fn render<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    let placeholder = session.placeholder().unwrap_or_default();
    writeln!(
        out,
        "{}",
        render_task_list(session.title(), session.store().tasks(), placeholder)
    )
}
