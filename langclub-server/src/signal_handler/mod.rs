//! Waiting for the process to be asked to stop

use tokio::signal::unix::{signal, Signal, SignalKind};

fn listen(kind: SignalKind, name: &str) -> Option<Signal> {
    match signal(kind) {
        Ok(x) => Some(x),
        Err(e) => {
            tracing::error!("Failed to install {name} listener: {e}");
            None
        }
    }
}

async fn recv(listener: &mut Option<Signal>) {
    match listener {
        Some(s) => {
            s.recv().await;
        }
        None => std::future::pending::<()>().await,
    }
}

/// Resolves once the first of SIGTERM, SIGHUP, SIGINT or Ctrl-c arrives
///
/// Meant to be handed to axum's graceful shutdown. If Ctrl-c cannot be listened for, this resolves
/// right away so the server does not run without any way to stop it cleanly.
pub async fn shutdown_signal() {
    let mut sigterm = listen(SignalKind::terminate(), "SIGTERM");
    let mut sighup = listen(SignalKind::hangup(), "SIGHUP");
    let mut sigint = listen(SignalKind::interrupt(), "SIGINT");
    tokio::select! {
        _ = recv(&mut sigterm) => {
            tracing::info!("Got SIGTERM. Shutting down.");
        }
        _ = recv(&mut sighup) => {
            tracing::info!("Got SIGHUP. Shutting down.");
        }
        _ = recv(&mut sigint) => {
            tracing::info!("Got SIGINT. Shutting down.");
        }
        x = tokio::signal::ctrl_c() => {
            match x {
                Ok(()) => tracing::info!("Received Ctrl-c. Shutting down."),
                Err(err) => tracing::error!("Unable to listen for shutdown signal: {err}"),
            }
        }
    };
}
