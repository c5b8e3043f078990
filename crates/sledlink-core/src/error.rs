use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Boundary validation errors
    #[error("Unknown device type code: {0}")]
    UnknownDeviceType(i32),

    #[error("Unknown connection state code: {0}")]
    UnknownConnState(i32),

    #[error("Unknown battery chip code: {0}")]
    UnknownBatteryChip(i32),

    #[error("Unknown scan mode code: {0}")]
    UnknownScanMode(i32),

    #[error("Unknown scan button mode code: {0}")]
    UnknownScanButtonMode(i32),

    #[error("Unsupported USB charge current: {0} mA (must be 500, 1000, 2100 or 2400)")]
    UnsupportedChargeCurrent(u16),

    #[error("Invalid developer key: {0}")]
    InvalidDeveloperKey(String),

    // Bridge errors
    #[error("Bridge transport closed")]
    TransportClosed,

    #[error("Bridge dispatch failed: {0}")]
    Dispatch(String),
}

pub type Result<T> = std::result::Result<T, Error>;
