//! Signal handling for the dictation loop

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::Notify;

/// Shutdown signal for interactive modes.
///
/// SIGINT sets a latched flag and wakes anyone parked on `wait`, so the
/// dictation loop can finish the in-flight transcript instead of dying.
pub struct ShutdownSignal {
    shutdown: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ShutdownSignal {
    /// Create a new shutdown signal handler
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Check if shutdown was requested
    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// Wait until shutdown is requested
    pub async fn wait(&self) {
        if self.is_shutdown() {
            return;
        }
        self.notify.notified().await;
    }

    /// Setup signal handler
    pub fn setup(&self) -> Result<(), std::io::Error> {
        let shutdown = Arc::clone(&self.shutdown);
        let notify = Arc::clone(&self.notify);

        // Handle SIGINT (Ctrl+C)
        let mut sigint = signal(SignalKind::interrupt())?;
        tokio::spawn(async move {
            sigint.recv().await;
            shutdown.store(true, Ordering::SeqCst);
            notify.notify_waiters();
        });

        Ok(())
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}
