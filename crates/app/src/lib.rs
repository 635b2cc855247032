//! Clockwork terminal client
//!
//! Reads commands from a line-oriented input, drives a [`ClientRuntime`] and
//! prints its updates.

pub mod config;
pub mod error;
pub mod render;

use clockwork_application::ports::{Clock, ClockApi, TimezoneResolver};
use clockwork_domain::Tab;
use clockwork_infrastructure::ReqwestClockApi;
use clockwork_ui::{ClientCommand, ClientRuntime, ClientState, ClientUpdate};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

pub use config::ClientConfig;
pub use error::ClientError;
pub use render::Renderer;

/// Builds the HTTP client for the configured server.
///
/// # Errors
/// Returns `ClientError::Api` if the HTTP client cannot be created.
pub fn build_api(config: &ClientConfig) -> Result<ReqwestClockApi, ClientError> {
    Ok(ReqwestClockApi::new(config.server_url.clone())?)
}

/// Help text printed at startup.
pub const HELP: &str = concat!(
    "commands: 12 | 24 | stopwatch | world | start | stop | reset | ",
    "tz <zone> | zones | quit"
);

/// Runs `runtime` against `input` until `quit` or end of input, writing
/// rendered updates to `output`. Returns the final client state.
///
/// # Errors
/// Returns an error if reading input or writing output fails.
pub async fn run_client<A, C, R, I, W>(
    runtime: ClientRuntime<A, C, R>,
    input: I,
    output: &mut W,
) -> Result<ClientState, ClientError>
where
    A: ClockApi,
    C: Clock,
    R: TimezoneResolver,
    I: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, mut update_rx) = mpsc::unbounded_channel();

    // Show the starting tab and the selector contents right away.
    let _ = command_tx.send(ClientCommand::SwitchTab(Tab::default()));
    let _ = command_tx.send(ClientCommand::ListTimezones);

    let error_tx = update_tx.clone();
    let reader = async move {
        read_commands(input, command_tx, error_tx).await?;
        Ok::<_, ClientError>(())
    };
    let run = async { Ok::<_, ClientError>(runtime.run(command_rx, update_tx).await) };
    let printer = async {
        let mut renderer = Renderer::new();
        output.write_all(format!("{HELP}\n").as_bytes()).await?;
        while let Some(update) = update_rx.recv().await {
            if let Some(line) = renderer.render(&update) {
                output.write_all(format!("{line}\n").as_bytes()).await?;
                output.flush().await?;
            }
        }
        Ok::<_, ClientError>(())
    };

    // An output failure ends the session even while input is still open.
    let ((), state, ()) = tokio::try_join!(reader, run, printer)?;
    Ok(state)
}

async fn read_commands<I: AsyncBufRead + Unpin>(
    input: I,
    commands: mpsc::UnboundedSender<ClientCommand>,
    updates: mpsc::UnboundedSender<ClientUpdate>,
) -> std::io::Result<()> {
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<ClientCommand>() {
            Ok(command) => {
                let quit = command == ClientCommand::Quit;
                if commands.send(command).is_err() || quit {
                    break;
                }
            }
            Err(message) => {
                let _ = updates.send(ClientUpdate::Error(message));
            }
        }
    }
    tracing::debug!("command input closed");
    Ok(())
}
