//! Action handlers: UpdateAction dispatch and background task spawning

use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
///
/// Deferred messages are delivered back into the update loop through
/// `msg_tx`. Nothing is cancelled here; stale deliveries are dropped by the
/// handlers that receive them.
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>) {
    match action {
        UpdateAction::Defer { after, message } => {
            trace!("Deferring {:?} by {:?}", message, after);
            tokio::spawn(async move {
                tokio::time::sleep(after).await;
                if msg_tx.send(message).await.is_err() {
                    debug!("Deferred message dropped: event loop has exited");
                }
            });
        }
    }
}
