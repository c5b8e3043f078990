//! The generic bridge-invocation primitive.

use crate::{Completion, DeviceEvent, Invocation};
use sledlink_core::Result;
use tokio::sync::mpsc;

/// The sole seam between the facade and native, host-controlled code.
///
/// Implementations marshal the invocation into whatever dispatch mechanism
/// the host platform provides and resolve the completion later, exactly once,
/// from whatever thread or queue the native side uses. `invoke` must return
/// without blocking; the facade never awaits inside a forwarding call.
///
/// The trait stays synchronous on purpose: forwarding has no suspension
/// points, so it is object-safe and usable behind `Arc<dyn BridgeTransport>`
/// without an async-trait shim.
///
/// # Errors
///
/// `invoke` fails only when the transport itself is unusable (for example the
/// native channel is gone). Operational failures travel through the
/// completion's error handler with a native-defined reason and are never
/// surfaced as `invoke` errors.
pub trait BridgeTransport: Send + Sync {
    /// Forward one invocation with its completion pair.
    fn invoke(&self, invocation: Invocation, completion: Completion) -> Result<()>;

    /// Take the standing-event receiver.
    ///
    /// Yields `Some` exactly once; subsequent calls return `None`. The
    /// receiver delivers hardware events in native arrival order.
    fn take_events(&self) -> Option<mpsc::UnboundedReceiver<DeviceEvent>>;
}
