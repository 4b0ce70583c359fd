//! Graceful shutdown handling.

use log::warn;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Stops the progress logging task and waits for it.
pub async fn shutdown_gracefully(cancel: CancellationToken, logging_task: Option<JoinHandle<()>>) {
    cancel.cancel();
    if let Some(logging_task) = logging_task {
        let _ = logging_task.await;
    }
}

/// Cancels `cancel` on Ctrl-C.
///
/// In-flight lookups still complete; no new ones are dispatched and the run
/// ends without writing output. Abort the returned handle once the run is over.
pub fn spawn_interrupt_listener(cancel: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, waiting for in-flight lookups to finish");
            cancel.cancel();
        }
    })
}
