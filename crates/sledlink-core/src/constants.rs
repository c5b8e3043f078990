//! Wire-contract constants for the sled peripheral bridge.
//!
//! This module defines the integer vocabularies and fixed strings that make up
//! the contract between the facade and the native SDK behind the bridge. The
//! values are documented by the native SDK and must never drift: embedding
//! applications compare against them, and the native side interprets them.
//!
//! # Constant Categories
//!
//! | Category | Constants |
//! |----------|-----------|
//! | Plugin routing | [`PLUGIN_IDENTIFIER`] |
//! | Device types | `DEVICE_TYPE_*` |
//! | Connection states | `CONN_*` |
//! | Battery gauge chips | `BATTERY_CHIP_*` |
//! | Barcode scan modes | `SCAN_MODE_*` |
//! | Scan button modes | `SCAN_BUTTON_*` |
//! | USB charging | [`USB_CHARGE_CURRENTS_MA`] |
//! | Auto-off timers | `DEFAULT_AUTO_OFF_*` |
//!
//! The typed counterparts of these tables live in [`crate::types`]; the raw
//! integers are kept here so the full table can be asserted in one place.

// ============================================================================
// Plugin Routing
// ============================================================================

/// Fixed identifier naming the native module that receives every forwarded
/// call.
///
/// The bridge carries this string verbatim in each invocation; the host
/// dispatcher uses it to route the call to the sled SDK plugin.
///
/// # Examples
///
/// ```
/// use sledlink_core::constants::PLUGIN_IDENTIFIER;
///
/// assert_eq!(PLUGIN_IDENTIFIER, "InfineaSDKCordova");
/// ```
pub const PLUGIN_IDENTIFIER: &str = "InfineaSDKCordova";

// ============================================================================
// Device Types
// ============================================================================

/// All device types, used when setting the active device.
pub const DEVICE_TYPE_ALL: i32 = -1;

/// Linea Pro 1/2/3/4/4s and LineaTab sleds.
pub const DEVICE_TYPE_LINEA: i32 = 0;

/// Supported printers (PP-60, DPP-250, DPP-350, DPP-450).
pub const DEVICE_TYPE_PRINTER: i32 = 1;

/// Supported pinpads (MPED-400, PPAD1, BP50, BP500).
pub const DEVICE_TYPE_PINPAD: i32 = 2;

/// Transport device for connecting to other devices via Bluetooth.
pub const DEVICE_TYPE_ISERIAL: i32 = 3;

/// Supported ZPL-mode printers (DPP-450).
pub const DEVICE_TYPE_PRINTER_ZPL: i32 = 4;

/// Supported iHUB devices.
pub const DEVICE_TYPE_IHUB: i32 = 5;

/// Supported HID barcode devices.
pub const DEVICE_TYPE_HID_BARCODE: i32 = 6;

/// Supported USB magnetic-stripe reader devices.
pub const DEVICE_TYPE_USB_MSR: i32 = 7;

/// HID keyboard devices.
pub const DEVICE_TYPE_HID_KEYBOARD: i32 = 8;

// ============================================================================
// Connection States
// ============================================================================

/// Device is disconnected; no automatic connection attempts will be made.
pub const CONN_DISCONNECTED: i32 = 0;

/// The native SDK is trying to connect to the device.
pub const CONN_CONNECTING: i32 = 1;

/// Device is connected.
pub const CONN_CONNECTED: i32 = 2;

// ============================================================================
// Battery Gauge Chips
// ============================================================================

/// No battery gauge chip present.
pub const BATTERY_CHIP_NONE: i32 = 0;

/// Texas Instruments BQ27421 gauge chip.
pub const BATTERY_CHIP_BQ27421: i32 = 1;

// ============================================================================
// Barcode Scan Modes
// ============================================================================

/// The engine decodes one barcode per trigger press.
pub const SCAN_MODE_SINGLE_SCAN: i32 = 0;

/// The engine keeps decoding while the trigger is held.
pub const SCAN_MODE_MULTI_SCAN: i32 = 1;

/// The engine arms itself when motion is detected in front of the window.
pub const SCAN_MODE_MOTION_DETECT: i32 = 2;

/// Like single scan, but the decode completes on trigger release.
pub const SCAN_MODE_SINGLE_SCAN_RELEASE: i32 = 3;

/// Multi scan that suppresses duplicate barcodes within one trigger hold.
pub const SCAN_MODE_MULTI_SCAN_NO_DUPLICATES: i32 = 4;

// ============================================================================
// Scan Button Modes
// ============================================================================

/// The hardware scan button is ignored.
pub const SCAN_BUTTON_DISABLED: i32 = 0;

/// The hardware scan button triggers the engine.
pub const SCAN_BUTTON_ENABLED: i32 = 1;

// ============================================================================
// USB Charging
// ============================================================================

/// The charge currents (mA) the sled firmware accepts.
///
/// Any other value is rejected at the facade boundary before it reaches the
/// bridge.
///
/// # Examples
///
/// ```
/// use sledlink_core::constants::USB_CHARGE_CURRENTS_MA;
///
/// assert!(USB_CHARGE_CURRENTS_MA.contains(&1000));
/// assert!(!USB_CHARGE_CURRENTS_MA.contains(&1500));
/// ```
pub const USB_CHARGE_CURRENTS_MA: [u16; 4] = [500, 1000, 2100, 2400];

// ============================================================================
// Auto-off Timers
// ============================================================================

/// Default idle time (seconds) after which the sled powers off, connected or
/// not.
///
/// # Value: 5400 s (90 minutes)
pub const DEFAULT_AUTO_OFF_IDLE_SECS: u32 = 5400;

/// Default time (seconds) with no active program connection after which the
/// sled powers off.
///
/// # Value: 30 s
pub const DEFAULT_AUTO_OFF_DISCONNECTED_SECS: u32 = 30;

// ============================================================================
// Encrypted Track Bitfield
// ============================================================================

/// Bitfield value meaning all three magnetic tracks were read.
///
/// In encrypted card data the `tracks` field is a bitfield where bit 1
/// corresponds to track 1, bit 2 to track 2, and bit 3 to track 3.
pub const TRACKS_ALL: i32 = 0b111;
