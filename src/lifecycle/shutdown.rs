//! Shutdown coordination for the echo server.

use tokio::sync::broadcast;

/// Coordinator for graceful shutdown.
///
/// The binary triggers it from Ctrl+C; tests trigger it directly.
#[derive(Debug)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// A handle that resolves once [`Shutdown::trigger`] is called or the
    /// coordinator is dropped.
    pub fn signal(&self) -> ShutdownSignal {
        ShutdownSignal {
            rx: self.tx.subscribe(),
        }
    }

    pub fn trigger(&self) {
        // No receivers just means nothing is running yet.
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving half of [`Shutdown`].
#[derive(Debug)]
pub struct ShutdownSignal {
    rx: broadcast::Receiver<()>,
}

impl ShutdownSignal {
    /// Wait for the trigger. A closed or lagged channel also counts.
    pub async fn recv(mut self) {
        let _ = self.rx.recv().await;
    }
}

/// Resolves on the first of Ctrl+C or `signal`.
pub async fn shutdown_signal(signal: ShutdownSignal) {
    tokio::select! {
        res = tokio::signal::ctrl_c() => {
            if let Err(e) = res {
                tracing::error!(error = %e, "Failed to listen for Ctrl+C");
                // Without a signal handler only the coordinator can stop us.
                std::future::pending::<()>().await;
            }
        }
        _ = signal.recv() => {}
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_trigger_wakes_signal() {
        let shutdown = Shutdown::new();
        let signal = shutdown.signal();

        let waiter = tokio::spawn(signal.recv());
        shutdown.trigger();

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("signal did not resolve")
            .unwrap();
    }

    #[tokio::test]
    async fn test_drop_wakes_signal() {
        let shutdown = Shutdown::new();
        let signal = shutdown.signal();
        drop(shutdown);

        tokio::time::timeout(Duration::from_secs(1), signal.recv())
            .await
            .expect("signal did not resolve");
    }

    #[test]
    fn test_trigger_without_listeners() {
        Shutdown::new().trigger();
    }
}
