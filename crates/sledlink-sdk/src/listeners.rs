//! Event-listener interfaces and the listener registry.
//!
//! Each standing event category has its own capability-typed listener trait.
//! Every trait method has a no-op default body, so an implementation only
//! overrides the notifications it cares about; an event arriving for an
//! unregistered category is dropped silently.
//!
//! The [`ListenerRegistry`] holds at most one listener per category with
//! last-assignment-wins replacement. The embedding application is the sole
//! writer and the event router the sole reader.

use serde_json::Value;
use sledlink_bridge::DeviceEvent;
use sledlink_core::{ConnState, TrackMask};
use std::sync::{Arc, RwLock};

/// Notifications from the barcode engine.
///
/// # Examples
///
/// ```
/// use sledlink_sdk::listeners::BarcodeListener;
///
/// struct PrintScans;
///
/// impl BarcodeListener for PrintScans {
///     fn barcode_data(&self, barcode: &str, symbology: i32) {
///         println!("scanned {barcode} (symbology {symbology})");
///     }
/// }
/// ```
pub trait BarcodeListener: Send + Sync {
    /// A barcode was decoded. `symbology` is the native type code.
    fn barcode_data(&self, _barcode: &str, _symbology: i32) {}
}

/// Notifications about the native connection state machine.
pub trait ConnectionListener: Send + Sync {
    /// The connection state changed.
    fn connection_state(&self, _state: ConnState) {}
}

/// Notifications from the RF module.
pub trait RfCardListener: Send + Sync {
    /// A wireless card is in the field. The module should be powered off
    /// after a successful read.
    fn card_detected(&self, _card_index: i32, _card_info: &Value) {}
}

/// Notifications from the magnetic-stripe head.
pub trait MagneticCardListener: Send + Sync {
    /// Card tracks in plain text.
    fn card_data(&self, _track1: Option<&str>, _track2: Option<&str>, _track3: Option<&str>) {}

    /// A card read failed. `source` and `reason` are native-defined codes.
    fn read_failed(&self, _source: i32, _reason: i32) {}

    /// A card was read with an encrypting head.
    fn encrypted_data(&self, _encryption: i32, _tracks: TrackMask, _data: &[u8]) {}
}

/// Notifications about the hardware buttons.
pub trait DeviceButtonListener: Send + Sync {
    /// A button was pressed. `button` is the native button code.
    fn pressed(&self, _button: i32) {}

    /// A button was released.
    fn released(&self, _button: i32) {}
}

/// At most one listener per event category, last assignment wins.
#[derive(Default)]
pub struct ListenerRegistry {
    barcode: RwLock<Option<Arc<dyn BarcodeListener>>>,
    connection: RwLock<Option<Arc<dyn ConnectionListener>>>,
    rf_card: RwLock<Option<Arc<dyn RfCardListener>>>,
    magnetic_card: RwLock<Option<Arc<dyn MagneticCardListener>>>,
    device_button: RwLock<Option<Arc<dyn DeviceButtonListener>>>,
}

impl ListenerRegistry {
    /// Register the barcode listener, replacing any previous one.
    pub fn set_barcode_listener(&self, listener: Arc<dyn BarcodeListener>) {
        *self.barcode.write().expect("listener lock poisoned") = Some(listener);
    }

    /// Register the connection listener, replacing any previous one.
    pub fn set_connection_listener(&self, listener: Arc<dyn ConnectionListener>) {
        *self.connection.write().expect("listener lock poisoned") = Some(listener);
    }

    /// Register the RF card listener, replacing any previous one.
    pub fn set_rf_card_listener(&self, listener: Arc<dyn RfCardListener>) {
        *self.rf_card.write().expect("listener lock poisoned") = Some(listener);
    }

    /// Register the magnetic card listener, replacing any previous one.
    pub fn set_magnetic_card_listener(&self, listener: Arc<dyn MagneticCardListener>) {
        *self.magnetic_card.write().expect("listener lock poisoned") = Some(listener);
    }

    /// Register the device button listener, replacing any previous one.
    pub fn set_device_button_listener(&self, listener: Arc<dyn DeviceButtonListener>) {
        *self.device_button.write().expect("listener lock poisoned") = Some(listener);
    }

    /// Deliver one event to the currently registered listener, if any.
    ///
    /// Called once per native occurrence, in arrival order.
    pub fn dispatch(&self, event: &DeviceEvent) {
        match event {
            DeviceEvent::BarcodeData { barcode, symbology } => {
                if let Some(listener) = self.barcode() {
                    listener.barcode_data(barcode, *symbology);
                }
            }
            DeviceEvent::ConnectionState { state } => {
                if let Some(listener) = self.connection() {
                    listener.connection_state(*state);
                }
            }
            DeviceEvent::RfCardDetected {
                card_index,
                card_info,
            } => {
                if let Some(listener) = self.rf_card() {
                    listener.card_detected(*card_index, card_info);
                }
            }
            DeviceEvent::MagneticCardData {
                track1,
                track2,
                track3,
            } => {
                if let Some(listener) = self.magnetic_card() {
                    listener.card_data(track1.as_deref(), track2.as_deref(), track3.as_deref());
                }
            }
            DeviceEvent::MagneticCardReadFailed { source, reason } => {
                if let Some(listener) = self.magnetic_card() {
                    listener.read_failed(*source, *reason);
                }
            }
            DeviceEvent::MagneticCardEncryptedData {
                encryption,
                tracks,
                data,
            } => {
                if let Some(listener) = self.magnetic_card() {
                    listener.encrypted_data(*encryption, *tracks, data);
                }
            }
            DeviceEvent::DeviceButtonPressed { button } => {
                if let Some(listener) = self.device_button() {
                    listener.pressed(*button);
                }
            }
            DeviceEvent::DeviceButtonReleased { button } => {
                if let Some(listener) = self.device_button() {
                    listener.released(*button);
                }
            }
            // Event categories added by future native SDKs have no listener
            // interface yet and are dropped.
            _ => {}
        }
    }

    fn barcode(&self) -> Option<Arc<dyn BarcodeListener>> {
        self.barcode.read().expect("listener lock poisoned").clone()
    }

    fn connection(&self) -> Option<Arc<dyn ConnectionListener>> {
        self.connection
            .read()
            .expect("listener lock poisoned")
            .clone()
    }

    fn rf_card(&self) -> Option<Arc<dyn RfCardListener>> {
        self.rf_card.read().expect("listener lock poisoned").clone()
    }

    fn magnetic_card(&self) -> Option<Arc<dyn MagneticCardListener>> {
        self.magnetic_card
            .read()
            .expect("listener lock poisoned")
            .clone()
    }

    fn device_button(&self) -> Option<Arc<dyn DeviceButtonListener>> {
        self.device_button
            .read()
            .expect("listener lock poisoned")
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicU32, Ordering};

    // Overrides nothing; every notification should hit the no-op defaults.
    struct Inert;
    impl BarcodeListener for Inert {}
    impl ConnectionListener for Inert {}
    impl RfCardListener for Inert {}
    impl MagneticCardListener for Inert {}
    impl DeviceButtonListener for Inert {}

    #[test]
    fn default_listener_methods_are_no_ops() {
        let inert = Inert;
        BarcodeListener::barcode_data(&inert, "0123456789", -42);
        ConnectionListener::connection_state(&inert, ConnState::Connecting);
        RfCardListener::card_detected(&inert, 7, &json!({"weird": [1, 2, 3]}));
        MagneticCardListener::card_data(&inert, Some("%B123^DOE/JOHN?"), None, Some(";123?"));
        MagneticCardListener::read_failed(&inert, i32::MAX, i32::MIN);
        MagneticCardListener::encrypted_data(&inert, 0, TrackMask::new(7), &[0xFF; 64]);
        DeviceButtonListener::pressed(&inert, 0);
        DeviceButtonListener::released(&inert, 0);
    }

    #[test]
    fn dispatch_without_registration_is_silent() {
        let registry = ListenerRegistry::default();
        registry.dispatch(&DeviceEvent::BarcodeData {
            barcode: "123".into(),
            symbology: 1,
        });
        registry.dispatch(&DeviceEvent::MagneticCardReadFailed {
            source: 1,
            reason: 9,
        });
    }

    struct CountingBarcode(AtomicU32);
    impl BarcodeListener for CountingBarcode {
        fn barcode_data(&self, _barcode: &str, _symbology: i32) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn last_assignment_wins() {
        let registry = ListenerRegistry::default();
        let first = Arc::new(CountingBarcode(AtomicU32::new(0)));
        let second = Arc::new(CountingBarcode(AtomicU32::new(0)));

        registry.set_barcode_listener(first.clone());
        registry.set_barcode_listener(second.clone());

        registry.dispatch(&DeviceEvent::BarcodeData {
            barcode: "42".into(),
            symbology: 1,
        });

        assert_eq!(first.0.load(Ordering::SeqCst), 0);
        assert_eq!(second.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn magnetic_events_share_one_listener() {
        struct Counting {
            plain: AtomicU32,
            failed: AtomicU32,
            encrypted: AtomicU32,
        }
        impl MagneticCardListener for Counting {
            fn card_data(&self, _: Option<&str>, _: Option<&str>, _: Option<&str>) {
                self.plain.fetch_add(1, Ordering::SeqCst);
            }
            fn read_failed(&self, _: i32, _: i32) {
                self.failed.fetch_add(1, Ordering::SeqCst);
            }
            fn encrypted_data(&self, _: i32, _: TrackMask, _: &[u8]) {
                self.encrypted.fetch_add(1, Ordering::SeqCst);
            }
        }

        let registry = ListenerRegistry::default();
        let listener = Arc::new(Counting {
            plain: AtomicU32::new(0),
            failed: AtomicU32::new(0),
            encrypted: AtomicU32::new(0),
        });
        registry.set_magnetic_card_listener(listener.clone());

        registry.dispatch(&DeviceEvent::MagneticCardData {
            track1: Some("%B4111?".into()),
            track2: None,
            track3: None,
        });
        registry.dispatch(&DeviceEvent::MagneticCardReadFailed {
            source: 2,
            reason: 5,
        });
        registry.dispatch(&DeviceEvent::MagneticCardEncryptedData {
            encryption: 1,
            tracks: TrackMask::new(0b011),
            data: vec![0xDE, 0xAD],
        });

        assert_eq!(listener.plain.load(Ordering::SeqCst), 1);
        assert_eq!(listener.failed.load(Ordering::SeqCst), 1);
        assert_eq!(listener.encrypted.load(Ordering::SeqCst), 1);
    }
}
