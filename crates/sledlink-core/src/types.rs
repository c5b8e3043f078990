use crate::{
    constants::{TRACKS_ALL, USB_CHARGE_CURRENTS_MA},
    error::Error,
    Result,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use subtle::ConstantTimeEq;

/// Peripheral device family attached to or embedded in the handheld.
///
/// The discriminants are the documented wire codes and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum DeviceType {
    /// All device types, used when setting the active device.
    All = -1,
    /// Linea Pro 1/2/3/4/4s and LineaTab sleds.
    Linea = 0,
    /// Supported printers.
    Printer = 1,
    /// Supported pinpads.
    Pinpad = 2,
    /// Bluetooth transport device.
    ISerial = 3,
    /// ZPL-mode printers.
    PrinterZpl = 4,
    /// iHUB devices.
    IHub = 5,
    /// HID barcode devices.
    HidBarcode = 6,
    /// USB magnetic-stripe readers.
    UsbMsr = 7,
    /// HID keyboard devices.
    HidKeyboard = 8,
}

impl DeviceType {
    /// Get the wire code for this device type.
    #[must_use]
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Parse a wire code into a device type.
    ///
    /// # Errors
    /// Returns `Error::UnknownDeviceType` for codes outside the documented
    /// table.
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            -1 => Ok(Self::All),
            0 => Ok(Self::Linea),
            1 => Ok(Self::Printer),
            2 => Ok(Self::Pinpad),
            3 => Ok(Self::ISerial),
            4 => Ok(Self::PrinterZpl),
            5 => Ok(Self::IHub),
            6 => Ok(Self::HidBarcode),
            7 => Ok(Self::UsbMsr),
            8 => Ok(Self::HidKeyboard),
            other => Err(Error::UnknownDeviceType(other)),
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::All => "All",
            Self::Linea => "Linea",
            Self::Printer => "Printer",
            Self::Pinpad => "Pinpad",
            Self::ISerial => "ISerial",
            Self::PrinterZpl => "PrinterZpl",
            Self::IHub => "IHub",
            Self::HidBarcode => "HidBarcode",
            Self::UsbMsr => "UsbMsr",
            Self::HidKeyboard => "HidKeyboard",
        };
        write!(f, "{}", name)
    }
}

/// Connection state reported by the native SDK.
///
/// The state machine is owned and driven entirely by the native side:
/// Disconnected → Connecting → Connected, with Disconnected reachable from
/// either other state at any time and no automatic-reconnect guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum ConnState {
    /// Disconnected; no automatic connection attempts will be made.
    Disconnected = 0,
    /// The native SDK is trying to connect.
    Connecting = 1,
    /// Connected.
    Connected = 2,
}

impl ConnState {
    /// Get the wire code for this connection state.
    #[must_use]
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Parse a wire code into a connection state.
    ///
    /// # Errors
    /// Returns `Error::UnknownConnState` for codes outside the documented
    /// table.
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(Self::Disconnected),
            1 => Ok(Self::Connecting),
            2 => Ok(Self::Connected),
            other => Err(Error::UnknownConnState(other)),
        }
    }
}

impl fmt::Display for ConnState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Disconnected => "Disconnected",
            Self::Connecting => "Connecting",
            Self::Connected => "Connected",
        };
        write!(f, "{}", name)
    }
}

/// Battery gauge chip fitted in the sled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum BatteryChip {
    /// No gauge chip present.
    None = 0,
    /// Texas Instruments BQ27421.
    Bq27421 = 1,
}

impl BatteryChip {
    /// Get the wire code for this battery chip.
    #[must_use]
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Parse a wire code into a battery chip identifier.
    ///
    /// # Errors
    /// Returns `Error::UnknownBatteryChip` for codes outside the documented
    /// table.
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(Self::None),
            1 => Ok(Self::Bq27421),
            other => Err(Error::UnknownBatteryChip(other)),
        }
    }
}

/// Barcode engine scan mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum ScanMode {
    /// One decode per trigger press.
    SingleScan = 0,
    /// Continuous decoding while the trigger is held.
    MultiScan = 1,
    /// Engine arms itself on motion in front of the window.
    MotionDetect = 2,
    /// Decode completes on trigger release.
    SingleScanRelease = 3,
    /// Continuous decoding with duplicate suppression.
    MultiScanNoDuplicates = 4,
}

impl ScanMode {
    /// Get the wire code for this scan mode.
    #[must_use]
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Parse a wire code into a scan mode.
    ///
    /// # Errors
    /// Returns `Error::UnknownScanMode` for codes outside the documented
    /// table.
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(Self::SingleScan),
            1 => Ok(Self::MultiScan),
            2 => Ok(Self::MotionDetect),
            3 => Ok(Self::SingleScanRelease),
            4 => Ok(Self::MultiScanNoDuplicates),
            other => Err(Error::UnknownScanMode(other)),
        }
    }
}

/// Hardware scan button behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum ScanButtonMode {
    /// Button presses are ignored.
    Disabled = 0,
    /// Button presses trigger the engine.
    Enabled = 1,
}

impl ScanButtonMode {
    /// Get the wire code for this scan button mode.
    #[must_use]
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Parse a wire code into a scan button mode.
    ///
    /// # Errors
    /// Returns `Error::UnknownScanButtonMode` for codes outside the
    /// documented table.
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(Self::Disabled),
            1 => Ok(Self::Enabled),
            other => Err(Error::UnknownScanButtonMode(other)),
        }
    }
}

/// USB charge current accepted by the sled firmware.
///
/// Only the four documented values exist; arbitrary currents cannot be
/// represented, which closes the pass-through gap at the facade boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UsbChargeCurrent {
    Ma500,
    Ma1000,
    Ma2100,
    Ma2400,
}

impl UsbChargeCurrent {
    /// Create a charge current from a milliamp value.
    ///
    /// # Errors
    /// Returns `Error::UnsupportedChargeCurrent` unless the value is one of
    /// 500, 1000, 2100 or 2400.
    ///
    /// # Examples
    ///
    /// ```
    /// use sledlink_core::UsbChargeCurrent;
    ///
    /// let current = UsbChargeCurrent::from_milliamps(2100).unwrap();
    /// assert_eq!(current.milliamps(), 2100);
    ///
    /// assert!(UsbChargeCurrent::from_milliamps(1500).is_err());
    /// ```
    pub fn from_milliamps(ma: u16) -> Result<Self> {
        match ma {
            500 => Ok(Self::Ma500),
            1000 => Ok(Self::Ma1000),
            2100 => Ok(Self::Ma2100),
            2400 => Ok(Self::Ma2400),
            other => Err(Error::UnsupportedChargeCurrent(other)),
        }
    }

    /// Get the milliamp value.
    #[must_use]
    pub fn milliamps(&self) -> u16 {
        match self {
            Self::Ma500 => USB_CHARGE_CURRENTS_MA[0],
            Self::Ma1000 => USB_CHARGE_CURRENTS_MA[1],
            Self::Ma2100 => USB_CHARGE_CURRENTS_MA[2],
            Self::Ma2400 => USB_CHARGE_CURRENTS_MA[3],
        }
    }
}

impl fmt::Display for UsbChargeCurrent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mA", self.milliamps())
    }
}

/// Developer key issued by the SDK vendor.
///
/// Must be forwarded before any other operation; validation of the key itself
/// happens on the native side. The facade only rejects keys that are
/// structurally unusable (empty or non-ASCII).
///
/// # Security
/// The key is a credential, so comparison is constant-time and the `Display`
/// implementation redacts everything but the first four characters.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct DeveloperKey(String);

impl DeveloperKey {
    /// Create a developer key with validation.
    ///
    /// The key is trimmed before validation.
    ///
    /// # Errors
    /// Returns `Error::InvalidDeveloperKey` if the trimmed key is empty or
    /// contains non-ASCII characters.
    pub fn new(key: &str) -> Result<Self> {
        let key = key.trim();
        if key.is_empty() {
            return Err(Error::InvalidDeveloperKey("key is empty".to_string()));
        }
        if !key.is_ascii() {
            return Err(Error::InvalidDeveloperKey(
                "key must be ASCII".to_string(),
            ));
        }
        Ok(DeveloperKey(key.to_string()))
    }

    /// Get the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeveloperKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let visible = &self.0[..self.0.len().min(4)];
        write!(f, "{}…", visible)
    }
}

impl std::str::FromStr for DeveloperKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DeveloperKey::new(s)
    }
}

/// Constant-time comparison implementation for DeveloperKey
///
/// This prevents timing attacks by ensuring comparison takes the same time
/// regardless of where the strings differ.
impl PartialEq for DeveloperKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_bytes().ct_eq(other.0.as_bytes()).into()
    }
}

impl std::hash::Hash for DeveloperKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

/// Bitfield describing which magnetic tracks an encrypted read contains.
///
/// Bit 1 corresponds to track 1, bit 2 to track 2, bit 3 to track 3; a value
/// of 7 means all tracks were read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackMask(i32);

impl TrackMask {
    /// Wrap a raw bitfield value from the native side.
    #[must_use]
    pub fn new(bits: i32) -> Self {
        TrackMask(bits)
    }

    /// Get the raw bitfield value.
    #[must_use]
    pub fn bits(&self) -> i32 {
        self.0
    }

    /// Check whether the given track (1-3) is present.
    #[must_use]
    pub fn has_track(&self, track: u8) -> bool {
        matches!(track, 1..=3) && (self.0 >> (track - 1)) & 1 == 1
    }

    /// Check whether all three tracks are present.
    #[must_use]
    pub fn is_all(&self) -> bool {
        self.0 & TRACKS_ALL == TRACKS_ALL
    }
}

impl fmt::Display for TrackMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0b{:03b}", self.0 & TRACKS_ALL)
    }
}
