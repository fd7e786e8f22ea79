//! Turns OS termination signals into a `Message::Quit` for the event loop

use std::fmt;
use std::future::Future;

use academy_core::prelude::*;
use tokio::sync::mpsc;

use crate::message::Message;

/// Which OS signal asked the app to stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shutdown {
    /// SIGINT, or Ctrl+C on Windows
    Interrupt,
    /// SIGTERM
    Terminate,
}

impl fmt::Display for Shutdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shutdown::Interrupt => write!(f, "interrupt"),
            Shutdown::Terminate => write!(f, "terminate"),
        }
    }
}

/// Listen for SIGINT/SIGTERM in the background and send `Message::Quit`
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    spawn_quit_on(wait_for_shutdown(), tx);
}

/// Send `Message::Quit` once `shutdown` resolves to a signal
fn spawn_quit_on<F>(shutdown: F, tx: mpsc::Sender<Message>)
where
    F: Future<Output = Result<Shutdown>> + Send + 'static,
{
    tokio::spawn(async move {
        match shutdown.await {
            Ok(signal) => {
                info!(%signal, "Shutdown requested");
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Event loop already stopped");
                }
            }
            // Ctrl+C still arrives as a key event while raw mode is on
            Err(e) => warn!("Signal listener unavailable: {}", e),
        }
    });
}

#[cfg(unix)]
async fn wait_for_shutdown() -> Result<Shutdown> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: &str| {
        signal(kind).map_err(|e| Error::terminal(format!("Cannot listen for {name}: {e}")))
    };
    let mut interrupt = listen(SignalKind::interrupt(), "SIGINT")?;
    let mut terminate = listen(SignalKind::terminate(), "SIGTERM")?;

    Ok(tokio::select! {
        _ = interrupt.recv() => Shutdown::Interrupt,
        _ = terminate.recv() => Shutdown::Terminate,
    })
}

#[cfg(windows)]
async fn wait_for_shutdown() -> Result<Shutdown> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Cannot listen for Ctrl+C: {e}")))?;
    Ok(Shutdown::Interrupt)
}
