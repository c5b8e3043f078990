//! Standing hardware events pushed by the native side.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sledlink_core::{ConnState, TrackMask};
use std::fmt;

/// An asynchronous hardware notification.
///
/// Events are fired zero-or-more times at the discretion of the native SDK,
/// unordered relative to outstanding invocations, and delivered at most once
/// per native occurrence. Symbology, button, and magnetic `source`/`reason`
/// codes are native-defined and intentionally left as raw integers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DeviceEvent {
    /// A barcode was decoded.
    BarcodeData {
        /// The scanned barcode text.
        barcode: String,
        /// Native symbology code.
        symbology: i32,
    },

    /// The connection state changed.
    ConnectionState {
        /// New state of the native connection state machine.
        state: ConnState,
    },

    /// A wireless card entered the RF field.
    ///
    /// The RF module should be powered off after a successful read.
    RfCardDetected {
        /// Index of the card within the field.
        card_index: i32,
        /// Flat key-value card description, shape defined by the native SDK.
        card_info: Value,
    },

    /// Magnetic card tracks in plain text.
    MagneticCardData {
        track1: Option<String>,
        track2: Option<String>,
        track3: Option<String>,
    },

    /// A magnetic card read failed.
    MagneticCardReadFailed {
        /// Native track-source code.
        source: i32,
        /// Native failure-reason code.
        reason: i32,
    },

    /// A magnetic card was read with an encrypting head.
    MagneticCardEncryptedData {
        /// Native encryption-algorithm code.
        encryption: i32,
        /// Which tracks the encrypted blob contains.
        tracks: TrackMask,
        /// The encrypted card data.
        data: Vec<u8>,
    },

    /// A hardware button was pressed.
    DeviceButtonPressed {
        /// Native button code.
        button: i32,
    },

    /// A hardware button was released.
    DeviceButtonReleased {
        /// Native button code.
        button: i32,
    },
}

impl DeviceEvent {
    /// The documented callback name this event maps to.
    #[must_use]
    pub fn callback_name(&self) -> &'static str {
        match self {
            Self::BarcodeData { .. } => "barcodeData",
            Self::ConnectionState { .. } => "connectionState",
            Self::RfCardDetected { .. } => "rfCardDetected",
            Self::MagneticCardData { .. } => "magneticCardData",
            Self::MagneticCardReadFailed { .. } => "magneticCardReadFailed",
            Self::MagneticCardEncryptedData { .. } => "magneticCardEncryptedData",
            Self::DeviceButtonPressed { .. } => "deviceButtonPressed",
            Self::DeviceButtonReleased { .. } => "deviceButtonReleased",
        }
    }
}

impl fmt::Display for DeviceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.callback_name())
    }
}
