//! Mock bridge transport for testing and development.
//!
//! This module provides a programmable stand-in for the native bridge so the
//! facade can be exercised without a host platform or physical hardware. The
//! mock records every invocation verbatim and lets tests resolve pending
//! completions and emit hardware events on demand.

use crate::{BridgeTransport, Completion, DeviceEvent, Invocation, Method};
use serde_json::Value;
use sledlink_core::{Error, Result};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// One invocation as seen by the bridge, with the handler slots flattened to
/// presence flags so tests can assert the forwarding contract.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedInvocation {
    /// Plugin identifier carried by the invocation.
    pub plugin: String,

    /// Target method.
    pub method: Method,

    /// Positional arguments, in caller order.
    pub args: Vec<Value>,

    /// Whether a success handler was supplied.
    pub has_success: bool,

    /// Whether an error handler was supplied.
    pub has_error: bool,
}

/// An invocation whose completion has not been resolved yet.
struct PendingCall {
    method: Method,
    completion: Completion,
}

#[derive(Default)]
struct Shared {
    recorded: Vec<RecordedInvocation>,
    pending: VecDeque<PendingCall>,
}

/// Mock bridge transport.
///
/// Created together with a [`MockBridgeHandle`] that plays the native side.
///
/// # Examples
///
/// ```
/// use sledlink_bridge::{BridgeTransport, Completion, Invocation, Method, MockBridge};
/// use serde_json::json;
///
/// let (bridge, handle) = MockBridge::new();
///
/// bridge
///     .invoke(
///         Invocation::new(Method::GetBatteryInfo, vec![]),
///         Completion::new(|info| assert_eq!(info["percentage"], 80), |_| {}),
///     )
///     .unwrap();
///
/// handle.succeed_next(json!({"percentage": 80})).unwrap();
///
/// let recorded = handle.recorded();
/// assert_eq!(recorded.len(), 1);
/// assert_eq!(recorded[0].method, Method::GetBatteryInfo);
/// ```
pub struct MockBridge {
    shared: Arc<Mutex<Shared>>,
    event_rx: Mutex<Option<mpsc::UnboundedReceiver<DeviceEvent>>>,
}

impl MockBridge {
    /// Create a mock bridge and the handle that drives its native side.
    #[must_use]
    pub fn new() -> (Self, MockBridgeHandle) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let shared = Arc::new(Mutex::new(Shared::default()));

        let bridge = Self {
            shared: shared.clone(),
            event_rx: Mutex::new(Some(event_rx)),
        };

        let handle = MockBridgeHandle { shared, event_tx };

        (bridge, handle)
    }
}

impl BridgeTransport for MockBridge {
    fn invoke(&self, invocation: Invocation, completion: Completion) -> Result<()> {
        tracing::debug!(%invocation, "mock bridge invocation");

        let mut shared = self.shared.lock().expect("mock bridge lock poisoned");
        shared.recorded.push(RecordedInvocation {
            plugin: invocation.plugin().to_string(),
            method: invocation.method(),
            args: invocation.args().to_vec(),
            has_success: completion.has_success(),
            has_error: completion.has_error(),
        });
        shared.pending.push_back(PendingCall {
            method: invocation.method(),
            completion,
        });
        Ok(())
    }

    fn take_events(&self) -> Option<mpsc::UnboundedReceiver<DeviceEvent>> {
        self.event_rx
            .lock()
            .expect("mock bridge lock poisoned")
            .take()
    }
}

/// Handle playing the native side of a [`MockBridge`].
///
/// The handle resolves pending completions in FIFO order and emits standing
/// hardware events, mirroring how the native SDK reports outcomes and scans.
#[derive(Clone)]
pub struct MockBridgeHandle {
    shared: Arc<Mutex<Shared>>,
    event_tx: mpsc::UnboundedSender<DeviceEvent>,
}

impl MockBridgeHandle {
    /// Snapshot of every invocation recorded so far, in call order.
    #[must_use]
    pub fn recorded(&self) -> Vec<RecordedInvocation> {
        self.shared
            .lock()
            .expect("mock bridge lock poisoned")
            .recorded
            .clone()
    }

    /// Number of invocations whose completion is still unresolved.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.shared
            .lock()
            .expect("mock bridge lock poisoned")
            .pending
            .len()
    }

    /// Resolve the oldest pending invocation with a success payload.
    ///
    /// # Errors
    /// Returns `Error::Dispatch` if no invocation is pending.
    pub fn succeed_next(&self, value: Value) -> Result<Method> {
        let call = self.pop_pending()?;
        call.completion.succeed(value);
        Ok(call.method)
    }

    /// Resolve the oldest pending invocation with an error reason.
    ///
    /// # Errors
    /// Returns `Error::Dispatch` if no invocation is pending.
    pub fn fail_next(&self, reason: Value) -> Result<Method> {
        let call = self.pop_pending()?;
        call.completion.fail(reason);
        Ok(call.method)
    }

    /// Resolve the oldest pending invocation of `method` with a success
    /// payload, skipping unrelated pending calls.
    ///
    /// # Errors
    /// Returns `Error::Dispatch` if no such invocation is pending.
    pub fn succeed_method(&self, method: Method, value: Value) -> Result<()> {
        self.pop_pending_method(method)?.completion.succeed(value);
        Ok(())
    }

    /// Resolve the oldest pending invocation of `method` with an error
    /// reason, skipping unrelated pending calls.
    ///
    /// # Errors
    /// Returns `Error::Dispatch` if no such invocation is pending.
    pub fn fail_method(&self, method: Method, reason: Value) -> Result<()> {
        self.pop_pending_method(method)?.completion.fail(reason);
        Ok(())
    }

    /// Emit a standing hardware event.
    ///
    /// # Errors
    /// Returns `Error::TransportClosed` if the event receiver was dropped.
    pub fn emit(&self, event: DeviceEvent) -> Result<()> {
        tracing::debug!(event = %event, "mock bridge event");
        self.event_tx
            .send(event)
            .map_err(|_| Error::TransportClosed)
    }

    fn pop_pending(&self) -> Result<PendingCall> {
        self.shared
            .lock()
            .expect("mock bridge lock poisoned")
            .pending
            .pop_front()
            .ok_or_else(|| Error::Dispatch("no pending invocation to resolve".to_string()))
    }

    fn pop_pending_method(&self, method: Method) -> Result<PendingCall> {
        let mut shared = self.shared.lock().expect("mock bridge lock poisoned");
        let index = shared
            .pending
            .iter()
            .position(|call| call.method == method)
            .ok_or_else(|| {
                Error::Dispatch(format!("no pending {} invocation to resolve", method.as_str()))
            })?;
        Ok(shared.pending.remove(index).expect("index just found"))
    }
}
