//! The forwarding facade over the bridge transport.

use crate::listeners::{
    BarcodeListener, ConnectionListener, DeviceButtonListener, ListenerRegistry,
    MagneticCardListener, RfCardListener,
};
use crate::router;
use serde_json::{Value, json};
use sledlink_bridge::{BridgeTransport, Completion, ErrorHandler, Invocation, Method};
use sledlink_core::{
    DeveloperKey, DeviceType, Result, ScanButtonMode, ScanMode, UsbChargeCurrent,
};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Facade over the native sled SDK.
///
/// Every method packages one invocation and hands it to the transport; no
/// validation beyond the typed argument boundary, no retries, and no
/// transformation of results happen here. Outcomes arrive asynchronously
/// through the supplied completion handlers, and standing hardware events
/// through the registered listeners.
///
/// # Examples
///
/// ```
/// use sledlink_bridge::MockBridge;
/// use sledlink_core::DeveloperKey;
/// use sledlink_sdk::SledSdk;
/// use std::sync::Arc;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> sledlink_core::Result<()> {
/// let (bridge, native) = MockBridge::new();
/// let sdk = SledSdk::new(Arc::new(bridge));
///
/// sdk.set_developer_key(&DeveloperKey::new("IPC-DEV-KEY")?)?;
/// sdk.connect()?;
///
/// assert_eq!(native.recorded().len(), 2);
/// # Ok(())
/// # }
/// ```
pub struct SledSdk {
    transport: Arc<dyn BridgeTransport>,
    listeners: Arc<ListenerRegistry>,
    router: Option<JoinHandle<()>>,
}

impl SledSdk {
    /// Wire the facade to a transport and start relaying its events.
    ///
    /// Must be called within a tokio runtime: the event router runs as a
    /// spawned task. If the transport's event receiver was already taken,
    /// the facade still forwards calls but observes no events.
    #[must_use]
    pub fn new(transport: Arc<dyn BridgeTransport>) -> Self {
        let listeners = Arc::new(ListenerRegistry::default());
        let router = transport
            .take_events()
            .map(|events| router::spawn(events, listeners.clone()));

        Self {
            transport,
            listeners,
            router,
        }
    }

    // ------------------------------------------------------------------
    // Listener registration
    // ------------------------------------------------------------------

    /// Register the barcode listener, replacing any previous one.
    pub fn set_barcode_listener(&self, listener: Arc<dyn BarcodeListener>) {
        self.listeners.set_barcode_listener(listener);
    }

    /// Register the connection listener, replacing any previous one.
    pub fn set_connection_listener(&self, listener: Arc<dyn ConnectionListener>) {
        self.listeners.set_connection_listener(listener);
    }

    /// Register the RF card listener, replacing any previous one.
    pub fn set_rf_card_listener(&self, listener: Arc<dyn RfCardListener>) {
        self.listeners.set_rf_card_listener(listener);
    }

    /// Register the magnetic card listener, replacing any previous one.
    pub fn set_magnetic_card_listener(&self, listener: Arc<dyn MagneticCardListener>) {
        self.listeners.set_magnetic_card_listener(listener);
    }

    /// Register the device button listener, replacing any previous one.
    pub fn set_device_button_listener(&self, listener: Arc<dyn DeviceButtonListener>) {
        self.listeners.set_device_button_listener(listener);
    }

    // ------------------------------------------------------------------
    // Session bootstrap
    // ------------------------------------------------------------------

    /// Forward the developer key issued by the SDK vendor.
    ///
    /// Must be the first call; the native side validates the key and gates
    /// every other operation on it.
    pub fn set_developer_key(&self, key: &DeveloperKey) -> Result<()> {
        self.forward(
            Method::SetDeveloperKey,
            vec![json!(key.as_str())],
            Completion::none(),
        )
    }

    // ------------------------------------------------------------------
    // Connection lifecycle
    // ------------------------------------------------------------------

    /// Connect the hardware.
    ///
    /// The outcome is observable only through connection-state events.
    pub fn connect(&self) -> Result<()> {
        self.forward(Method::Connect, vec![], Completion::none())
    }

    /// Disconnect the hardware.
    pub fn disconnect(&self) -> Result<()> {
        self.forward(Method::Disconnect, vec![], Completion::none())
    }

    /// Get info about the connected device of the given type.
    ///
    /// The info arrives as a flat key-value map on the success handler.
    pub fn get_connected_device_info(
        &self,
        device_type: DeviceType,
        completion: Completion,
    ) -> Result<()> {
        self.forward(
            Method::GetConnectedDeviceInfo,
            vec![json!(device_type.code())],
            completion,
        )
    }

    /// Get info about all connected devices.
    pub fn get_connected_devices_info(&self, completion: Completion) -> Result<()> {
        self.forward(Method::GetConnectedDevicesInfo, vec![], completion)
    }

    // ------------------------------------------------------------------
    // Sync/power configuration
    // ------------------------------------------------------------------

    /// Enable or disable pass-through sync.
    pub fn set_pass_through_sync(&self, value: bool, on_error: Option<ErrorHandler>) -> Result<()> {
        self.forward(
            Method::SetPassThroughSync,
            vec![json!(value)],
            Completion::error_only(on_error),
        )
    }

    /// Query whether pass-through sync is enabled.
    pub fn get_pass_through_sync(&self, completion: Completion) -> Result<()> {
        self.forward(Method::GetPassThroughSync, vec![], completion)
    }

    /// Set the USB charge current.
    ///
    /// Only the four documented currents exist; see [`UsbChargeCurrent`].
    pub fn set_usb_charge_current(
        &self,
        current: UsbChargeCurrent,
        on_error: Option<ErrorHandler>,
    ) -> Result<()> {
        self.forward(
            Method::SetUsbChargeCurrent,
            vec![json!(current.milliamps())],
            Completion::error_only(on_error),
        )
    }

    /// Query the current USB charge current.
    pub fn get_usb_charge_current(&self, completion: Completion) -> Result<()> {
        self.forward(Method::GetUsbChargeCurrent, vec![], completion)
    }

    /// Query battery info, delivered as a flat key-value map.
    pub fn get_battery_info(&self, completion: Completion) -> Result<()> {
        self.forward(Method::GetBatteryInfo, vec![], completion)
    }

    /// Set the sled sleep timers.
    ///
    /// `time_idle_secs` is the idle time, connected or not, after which the
    /// sled turns off (default 5400 s). `time_disconnected_secs` is the time
    /// with no active program connection after which it turns off (default
    /// 30 s).
    pub fn set_auto_off_when_idle(
        &self,
        time_idle_secs: u32,
        time_disconnected_secs: u32,
        on_error: Option<ErrorHandler>,
    ) -> Result<()> {
        self.forward(
            Method::SetAutoOffWhenIdle,
            vec![json!(time_idle_secs), json!(time_disconnected_secs)],
            Completion::error_only(on_error),
        )
    }

    // ------------------------------------------------------------------
    // RF module control
    // ------------------------------------------------------------------

    /// Power on the RF module.
    ///
    /// Continuously leaving the module powered on will drain the battery.
    pub fn rf_init(&self, on_error: Option<ErrorHandler>) -> Result<()> {
        self.forward(Method::RfInit, vec![], Completion::error_only(on_error))
    }

    /// Power down the RF module when not in use.
    pub fn rf_close(&self, on_error: Option<ErrorHandler>) -> Result<()> {
        self.forward(Method::RfClose, vec![], Completion::error_only(on_error))
    }

    // ------------------------------------------------------------------
    // Barcode engine
    // ------------------------------------------------------------------

    /// Query the hardware scan button mode.
    pub fn barcode_get_scan_button_mode(&self, completion: Completion) -> Result<()> {
        self.forward(Method::BarcodeGetScanButtonMode, vec![], completion)
    }

    /// Enable or disable the hardware scan button.
    pub fn barcode_set_scan_button_mode(
        &self,
        mode: ScanButtonMode,
        on_error: Option<ErrorHandler>,
    ) -> Result<()> {
        self.forward(
            Method::BarcodeSetScanButtonMode,
            vec![json!(mode.code())],
            Completion::error_only(on_error),
        )
    }

    /// Query the barcode engine scan mode.
    pub fn barcode_get_scan_mode(&self, completion: Completion) -> Result<()> {
        self.forward(Method::BarcodeGetScanMode, vec![], completion)
    }

    /// Set the barcode engine scan mode.
    pub fn barcode_set_scan_mode(
        &self,
        mode: ScanMode,
        on_error: Option<ErrorHandler>,
    ) -> Result<()> {
        self.forward(
            Method::BarcodeSetScanMode,
            vec![json!(mode.code())],
            Completion::error_only(on_error),
        )
    }

    /// Start the barcode engine.
    pub fn barcode_start_scan(&self, on_error: Option<ErrorHandler>) -> Result<()> {
        self.forward(
            Method::BarcodeStartScan,
            vec![],
            Completion::error_only(on_error),
        )
    }

    /// Stop the barcode engine.
    pub fn barcode_stop_scan(&self, on_error: Option<ErrorHandler>) -> Result<()> {
        self.forward(
            Method::BarcodeStopScan,
            vec![],
            Completion::error_only(on_error),
        )
    }

    fn forward(&self, method: Method, args: Vec<Value>, completion: Completion) -> Result<()> {
        let invocation = Invocation::new(method, args);
        tracing::debug!(%invocation, "forwarding to bridge");
        self.transport.invoke(invocation, completion)
    }
}

impl Drop for SledSdk {
    fn drop(&mut self) {
        if let Some(router) = self.router.take() {
            router.abort();
        }
    }
}
