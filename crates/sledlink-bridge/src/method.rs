//! Method names forwarded over the bridge.
//!
//! Every facade operation maps to exactly one method-name string. The
//! strings are the wire contract: the native dispatcher selects the SDK
//! entry point by comparing them verbatim, so they are preserved exactly as
//! documented, including casing.
//!
//! # Method Categories
//!
//! - Session bootstrap: `setDeveloperKey`
//! - Connection lifecycle: `connect`, `disconnect`, `getConnectedDeviceInfo`,
//!   `getConnectedDevicesInfo`
//! - Sync/power configuration: `setPassThroughSync`, `getPassThroughSync`,
//!   `setUSBChargeCurrent`, `getUSBChargeCurrent`, `getBatteryInfo`,
//!   `setAutoOffWhenIdle`
//! - RF module control: `rfInit`, `rfClose`
//! - Barcode engine: `barcodeGetScanButtonMode`, `barcodeSetScanButtonMode`,
//!   `barcodeGetScanMode`, `barcodeSetScanMode`, `barcodeStartScan`,
//!   `barcodeStopScan`
//!
//! # Examples
//!
//! ```
//! use sledlink_bridge::Method;
//!
//! let method = Method::SetAutoOffWhenIdle;
//! assert_eq!(method.as_str(), "setAutoOffWhenIdle");
//!
//! let parsed = Method::parse("rfInit").unwrap();
//! assert_eq!(parsed, Method::RfInit);
//! ```

use serde::{Deserialize, Serialize};
use sledlink_core::{Error, Result};
use std::fmt;

/// Native SDK entry points reachable through the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    // Session bootstrap
    SetDeveloperKey,

    // Connection lifecycle
    Connect,
    Disconnect,
    GetConnectedDeviceInfo,
    GetConnectedDevicesInfo,

    // Sync/power configuration
    SetPassThroughSync,
    GetPassThroughSync,
    SetUsbChargeCurrent,
    GetUsbChargeCurrent,
    GetBatteryInfo,
    SetAutoOffWhenIdle,

    // RF module control
    RfInit,
    RfClose,

    // Barcode engine
    BarcodeGetScanButtonMode,
    BarcodeSetScanButtonMode,
    BarcodeGetScanMode,
    BarcodeSetScanMode,
    BarcodeStartScan,
    BarcodeStopScan,
}

impl Method {
    /// All methods, in documentation order.
    pub const ALL: [Method; 19] = [
        Method::SetDeveloperKey,
        Method::Connect,
        Method::Disconnect,
        Method::GetConnectedDeviceInfo,
        Method::GetConnectedDevicesInfo,
        Method::SetPassThroughSync,
        Method::GetPassThroughSync,
        Method::SetUsbChargeCurrent,
        Method::GetUsbChargeCurrent,
        Method::GetBatteryInfo,
        Method::SetAutoOffWhenIdle,
        Method::RfInit,
        Method::RfClose,
        Method::BarcodeGetScanButtonMode,
        Method::BarcodeSetScanButtonMode,
        Method::BarcodeGetScanMode,
        Method::BarcodeSetScanMode,
        Method::BarcodeStartScan,
        Method::BarcodeStopScan,
    ];

    /// Get the wire-format method name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SetDeveloperKey => "setDeveloperKey",
            Self::Connect => "connect",
            Self::Disconnect => "disconnect",
            Self::GetConnectedDeviceInfo => "getConnectedDeviceInfo",
            Self::GetConnectedDevicesInfo => "getConnectedDevicesInfo",
            Self::SetPassThroughSync => "setPassThroughSync",
            Self::GetPassThroughSync => "getPassThroughSync",
            Self::SetUsbChargeCurrent => "setUSBChargeCurrent",
            Self::GetUsbChargeCurrent => "getUSBChargeCurrent",
            Self::GetBatteryInfo => "getBatteryInfo",
            Self::SetAutoOffWhenIdle => "setAutoOffWhenIdle",
            Self::RfInit => "rfInit",
            Self::RfClose => "rfClose",
            Self::BarcodeGetScanButtonMode => "barcodeGetScanButtonMode",
            Self::BarcodeSetScanButtonMode => "barcodeSetScanButtonMode",
            Self::BarcodeGetScanMode => "barcodeGetScanMode",
            Self::BarcodeSetScanMode => "barcodeSetScanMode",
            Self::BarcodeStartScan => "barcodeStartScan",
            Self::BarcodeStopScan => "barcodeStopScan",
        }
    }

    /// Parse a wire-format method name.
    ///
    /// # Errors
    /// Returns `Error::Dispatch` for names outside the documented set.
    pub fn parse(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == name)
            .ok_or_else(|| Error::Dispatch(format!("unknown method name: {name}")))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Method::SetDeveloperKey, "setDeveloperKey")]
    #[case(Method::Connect, "connect")]
    #[case(Method::Disconnect, "disconnect")]
    #[case(Method::GetConnectedDeviceInfo, "getConnectedDeviceInfo")]
    #[case(Method::GetConnectedDevicesInfo, "getConnectedDevicesInfo")]
    #[case(Method::SetPassThroughSync, "setPassThroughSync")]
    #[case(Method::GetPassThroughSync, "getPassThroughSync")]
    #[case(Method::SetUsbChargeCurrent, "setUSBChargeCurrent")]
    #[case(Method::GetUsbChargeCurrent, "getUSBChargeCurrent")]
    #[case(Method::GetBatteryInfo, "getBatteryInfo")]
    #[case(Method::SetAutoOffWhenIdle, "setAutoOffWhenIdle")]
    #[case(Method::RfInit, "rfInit")]
    #[case(Method::RfClose, "rfClose")]
    #[case(Method::BarcodeGetScanButtonMode, "barcodeGetScanButtonMode")]
    #[case(Method::BarcodeSetScanButtonMode, "barcodeSetScanButtonMode")]
    #[case(Method::BarcodeGetScanMode, "barcodeGetScanMode")]
    #[case(Method::BarcodeSetScanMode, "barcodeSetScanMode")]
    #[case(Method::BarcodeStartScan, "barcodeStartScan")]
    #[case(Method::BarcodeStopScan, "barcodeStopScan")]
    fn wire_names(#[case] method: Method, #[case] name: &str) {
        assert_eq!(method.as_str(), name);
        assert_eq!(Method::parse(name).unwrap(), method);
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert!(Method::parse("selfDestruct").is_err());
        // Casing matters on the wire.
        assert!(Method::parse("setusbchargecurrent").is_err());
    }

    #[test]
    fn all_table_is_complete_and_unique() {
        let mut names: Vec<&str> = Method::ALL.iter().map(|m| m.as_str()).collect();
        assert_eq!(names.len(), 19);
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 19);
    }
}
