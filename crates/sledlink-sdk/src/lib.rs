//! Typed facade over the native sled peripheral SDK.
//!
//! This crate is the surface an embedding application links against. It
//! exposes the documented operation set of the native SDK (session bootstrap,
//! connection lifecycle, sync/power configuration, RF module control, barcode
//! engine control) as one forwarding method each, and the standing hardware
//! events as capability-typed listener traits.
//!
//! The facade is pure glue: every call becomes exactly one bridge invocation
//! carrying the fixed plugin identifier, the documented method-name string,
//! and the positional arguments in documented order. All device logic runs on
//! the native side of the [`BridgeTransport`](sledlink_bridge::BridgeTransport)
//! seam.
//!
//! # Forwarding
//!
//! ```
//! use sledlink_bridge::{Completion, MockBridge};
//! use sledlink_core::{DeveloperKey, UsbChargeCurrent};
//! use sledlink_sdk::SledSdk;
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> sledlink_core::Result<()> {
//! let (bridge, native) = MockBridge::new();
//! let sdk = SledSdk::new(Arc::new(bridge));
//!
//! sdk.set_developer_key(&DeveloperKey::new("IPC-DEV-KEY")?)?;
//! sdk.set_usb_charge_current(UsbChargeCurrent::from_milliamps(1000)?, None)?;
//!
//! let recorded = native.recorded();
//! assert_eq!(recorded[1].method.as_str(), "setUSBChargeCurrent");
//! # Ok(())
//! # }
//! ```
//!
//! # Observing events
//!
//! ```
//! use sledlink_bridge::{DeviceEvent, MockBridge};
//! use sledlink_sdk::{SledSdk, listeners::BarcodeListener};
//! use std::sync::Arc;
//!
//! struct LogScans;
//!
//! impl BarcodeListener for LogScans {
//!     fn barcode_data(&self, barcode: &str, symbology: i32) {
//!         println!("scanned {barcode} ({symbology})");
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> sledlink_core::Result<()> {
//! let (bridge, native) = MockBridge::new();
//! let sdk = SledSdk::new(Arc::new(bridge));
//! sdk.set_barcode_listener(Arc::new(LogScans));
//!
//! native.emit(DeviceEvent::BarcodeData {
//!     barcode: "4006381333931".into(),
//!     symbology: 13,
//! })?;
//! # tokio::task::yield_now().await;
//! # Ok(())
//! # }
//! ```

pub mod facade;
pub mod listeners;
mod router;

pub use facade::SledSdk;
pub use listeners::{
    BarcodeListener, ConnectionListener, DeviceButtonListener, ListenerRegistry,
    MagneticCardListener, RfCardListener,
};

// Re-export the boundary types an application needs alongside the facade
pub use sledlink_bridge::{Completion, DeviceEvent, ErrorHandler, SuccessHandler};
pub use sledlink_core::{Error, Result};
