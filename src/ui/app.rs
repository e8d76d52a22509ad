//! Interactive front end: renders view states and forwards commands to the
//! listing store.

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

use crate::listing::{ListingHandle, StateSubscription, ViewState};
use crate::ui::alert::{Alert, AlertAction};
use crate::ui::command::{Command, HELP_TEXT};
use crate::ui::render::{render_alert, render_filter_menu, render_snapshot, render_state};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct InteractiveApp {
    handle: ListingHandle,
    subscription: StateSubscription,
    /// Set while a "clear filters?" prompt awaits an answer.
    pending_clear: bool,
}

impl InteractiveApp {
    /// Subscribes immediately, so states emitted after this call are rendered.
    pub fn new(handle: ListingHandle) -> Self {
        let subscription = handle.subscribe();
        Self {
            handle,
            subscription,
            pending_clear: false,
        }
    }

    /// Run until `quit`, end of input, or the store going away.
    pub async fn run<W>(
        mut self,
        mut lines: mpsc::UnboundedReceiver<String>,
        output: &mut W,
    ) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        write_line(output, "Type 'help' for commands.").await?;

        loop {
            tokio::select! {
                biased;
                state = self.subscription.recv() => match state {
                    Some(state) => self.show_state(&state, output).await?,
                    None => break,
                },
                line = lines.recv() => match line {
                    Some(line) => {
                        if self.handle_line(&line, output).await? == Flow::Quit {
                            break;
                        }
                    }
                    None => break,
                },
            }
        }

        tracing::debug!("Interactive session ended");
        Ok(())
    }

    async fn handle_line<W>(&mut self, line: &str, output: &mut W) -> anyhow::Result<Flow>
    where
        W: AsyncWrite + Unpin,
    {
        if self.pending_clear {
            self.pending_clear = false;
            let answer = line.trim().to_ascii_lowercase();
            if answer == "y" || answer == "yes" {
                self.handle.clear_filters()?;
                self.show_next_state(output).await?;
            } else {
                write_line(output, "Filters kept.").await?;
            }
            return Ok(Flow::Continue);
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                write_line(output, &format!("Error: {}. Type 'help' for commands.", e)).await?;
                return Ok(Flow::Continue);
            }
        };

        tracing::debug!(?command, "Command received");

        match command {
            Command::Load => self.handle.load()?,
            Command::Search(text) => self.handle.set_search_text(text)?,
            Command::Toggle(criterion) => self.handle.toggle_filter(criterion)?,
            Command::Filters(criteria) => self.handle.set_filters(criteria)?,
            Command::Clear => self.handle.clear_filters()?,
            Command::Status => {
                let snapshot = self.handle.snapshot().await?;
                write_line(output, &render_snapshot(&snapshot)).await?;
                write_line(output, &render_filter_menu(&snapshot)).await?;
                return Ok(Flow::Continue);
            }
            Command::Help => {
                write_line(output, HELP_TEXT).await?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
        }

        // Every store command emits; render it before reading on
        self.show_next_state(output).await?;
        Ok(Flow::Continue)
    }

    async fn show_next_state<W>(&mut self, output: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        if let Some(state) = self.subscription.recv().await {
            self.show_state(&state, output).await?;
        }
        Ok(())
    }

    async fn show_state<W>(&mut self, state: &ViewState, output: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        write_line(output, &render_state(state)).await?;

        // Failures are already rendered as alerts; only an empty listing
        // needs the filter check
        if !matches!(state, ViewState::Loaded(coins) if coins.is_empty()) {
            return Ok(());
        }

        let snapshot = self.handle.snapshot().await?;
        if let Some(alert) = Alert::for_state(state, &snapshot) {
            write_line(output, &render_alert(&alert)).await?;
            if alert.action == Some(AlertAction::ClearFilters) {
                write_line(output, "Clear filters? [y/N]").await?;
                self.pending_clear = true;
            }
        }
        Ok(())
    }
}

async fn write_line<W>(output: &mut W, line: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(line.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await
}
