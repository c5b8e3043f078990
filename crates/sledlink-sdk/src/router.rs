//! Event router task.
//!
//! The router drains the transport's event receiver on a dedicated tokio task
//! and relays each event to the listener registry, one at a time and in
//! native arrival order. It offers no buffering, replay, or filtering; a
//! category with no registered listener simply drops its events.

use crate::listeners::ListenerRegistry;
use sledlink_bridge::DeviceEvent;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Spawn the router task.
///
/// Must be called within a tokio runtime. The task ends when the transport
/// closes its event channel; aborting the returned handle stops delivery
/// immediately.
pub(crate) fn spawn(
    mut events: mpsc::UnboundedReceiver<DeviceEvent>,
    listeners: Arc<ListenerRegistry>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            tracing::trace!(event = %event, "relaying device event");
            listeners.dispatch(&event);
        }
        tracing::debug!("event channel closed, router stopping");
    })
}
