//! Bridge boundary for the sled peripheral facade.
//!
//! This crate models the single external collaborator of the facade: a
//! generic invocation primitive that carries a plugin identifier, a method
//! name, and a positional argument list into native, host-controlled code,
//! and later reports outcomes and hardware events back.
//!
//! The native side is opaque. Nothing in this crate talks to hardware; the
//! [`BridgeTransport`] trait is the seam, and [`MockBridge`] is the
//! programmable stand-in used for development and testing.
//!
//! # Invocation Contract
//!
//! Every forwarded operation becomes exactly one [`Invocation`] paired with
//! one [`Completion`]. The transport must return without blocking; the
//! completion is resolved later, exactly once, with a success value or an
//! error reason whose shape is defined by the native SDK.
//!
//! Standing hardware events (scans, connection changes, card reads, button
//! presses) arrive out-of-band on the transport's [`DeviceEvent`] stream,
//! unordered relative to outstanding invocations.

pub mod completion;
pub mod event;
pub mod invocation;
pub mod method;
pub mod mock;
pub mod transport;

pub use completion::{Completion, ErrorHandler, SuccessHandler};
pub use event::DeviceEvent;
pub use invocation::Invocation;
pub use method::Method;
pub use mock::{MockBridge, MockBridgeHandle, RecordedInvocation};
pub use transport::BridgeTransport;

// Re-export types from sledlink-core for convenience
pub use sledlink_core::{Error, Result};
