//! JSON-lines event server
//!
//! Reads one [`InputEvent`] per line, applies it to the session and writes
//! one [`OutputEvent`] per line for every change the store broadcasts.
//! Each line is handled to completion before the next is read.

use crate::protocol::events::{InputEvent, OutputEvent};
use crate::session::Session;
use crate::store::TaskListChange;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Errors that end the event loop
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode event: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Session wrapped for the event protocol
#[derive(Debug)]
pub struct EventServer {
    session: Session,
    outbox: UnboundedReceiver<OutputEvent>,
}

impl EventServer {
    pub fn new(mut session: Session) -> Self {
        let (tx, outbox) = mpsc::unbounded_channel();
        session.subscribe(move |change: &TaskListChange<'_>| {
            // Receiver lives as long as the server; a failed send means it
            // is shutting down.
            let _ = tx.send(OutputEvent::changed(change));
        });

        EventServer { session, outbox }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Handle one protocol line and return the events to emit.
    ///
    /// No-ops produce no events.
    pub fn handle_line(&mut self, line: &str) -> Vec<OutputEvent> {
        let event = match serde_json::from_str::<InputEvent>(line) {
            Ok(event) => event,
            Err(e) => {
                log::warn!("Rejected protocol line: {}", e);
                return vec![OutputEvent::error(format!("Parse error: {}", e))];
            }
        };

        self.handle_event(event)
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Vec<OutputEvent> {
        log::debug!("Handling {:?}", event);

        match event {
            InputEvent::Submit { text } => {
                self.session.submit_text(&text);
            }
            InputEvent::Input { text } => self.session.set_input(text),
            InputEvent::SubmitInput => {
                self.session.submit();
            }
            InputEvent::Remove { index } => {
                self.session.remove(index);
            }
            InputEvent::Toggle { index } => {
                self.session.toggle(index);
            }
            InputEvent::Dismiss { index } => {
                self.session.dismiss(index);
            }
            InputEvent::Snapshot => return vec![OutputEvent::snapshot(&self.session)],
        }

        let mut events = Vec::new();
        while let Ok(event) = self.outbox.try_recv() {
            events.push(event);
        }
        events
    }
}

/// Run the event loop until `input` reaches EOF.
///
/// A snapshot is written first so the renderer can draw the empty state.
pub async fn run_event_server<R, W>(
    mut server: EventServer,
    input: R,
    mut output: W,
) -> Result<(), ProtocolError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_event(&mut output, &OutputEvent::snapshot(server.session())).await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        for event in server.handle_line(trimmed) {
            write_event(&mut output, &event).await?;
        }
    }

    log::info!(
        "Input closed; session ended with {} tasks",
        server.session().store().len()
    );
    Ok(())
}

async fn write_event<W>(output: &mut W, event: &OutputEvent) -> Result<(), ProtocolError>
where
    W: AsyncWrite + Unpin,
{
    let json = serde_json::to_string(event)?;
    output.write_all(json.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}
