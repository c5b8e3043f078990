//! Event-dispatch tests: native events reach the currently registered
//! listener exactly once each, in arrival order, with no buffering or replay
//! for categories that had no listener at emission time.

use serde_json::json;
use sledlink_bridge::{DeviceEvent, MockBridge, MockBridgeHandle};
use sledlink_core::{ConnState, TrackMask};
use sledlink_sdk::{
    SledSdk,
    listeners::{BarcodeListener, ConnectionListener, MagneticCardListener},
};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU32, Ordering},
};
use std::time::Duration;

fn sdk_pair() -> (SledSdk, MockBridgeHandle) {
    let (bridge, handle) = MockBridge::new();
    (SledSdk::new(Arc::new(bridge)), handle)
}

/// Poll until the counter reaches `expected` or a deadline passes.
async fn wait_for(counter: &AtomicU32, expected: u32) {
    for _ in 0..200 {
        if counter.load(Ordering::SeqCst) >= expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!(
        "expected {expected} deliveries, saw {}",
        counter.load(Ordering::SeqCst)
    );
}

struct CountingBarcode {
    scans: Mutex<Vec<(String, i32)>>,
    count: AtomicU32,
}

impl CountingBarcode {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            scans: Mutex::new(Vec::new()),
            count: AtomicU32::new(0),
        })
    }
}

impl BarcodeListener for CountingBarcode {
    fn barcode_data(&self, barcode: &str, symbology: i32) {
        self.scans
            .lock()
            .unwrap()
            .push((barcode.to_string(), symbology));
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn registered_listener_sees_each_event_once_in_order() {
    let (sdk, native) = sdk_pair();
    let listener = CountingBarcode::new();
    sdk.set_barcode_listener(listener.clone());

    native
        .emit(DeviceEvent::BarcodeData {
            barcode: "4006381333931".into(),
            symbology: 13,
        })
        .unwrap();
    native
        .emit(DeviceEvent::BarcodeData {
            barcode: "0123456789012".into(),
            symbology: 1,
        })
        .unwrap();

    wait_for(&listener.count, 2).await;

    let scans = listener.scans.lock().unwrap();
    assert_eq!(
        *scans,
        vec![
            ("4006381333931".to_string(), 13),
            ("0123456789012".to_string(), 1),
        ]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn replacing_a_listener_reroutes_subsequent_events() {
    let (sdk, native) = sdk_pair();

    let first = CountingBarcode::new();
    sdk.set_barcode_listener(first.clone());

    native
        .emit(DeviceEvent::BarcodeData {
            barcode: "111".into(),
            symbology: 1,
        })
        .unwrap();
    wait_for(&first.count, 1).await;

    let second = CountingBarcode::new();
    sdk.set_barcode_listener(second.clone());

    native
        .emit(DeviceEvent::BarcodeData {
            barcode: "222".into(),
            symbology: 1,
        })
        .unwrap();
    wait_for(&second.count, 1).await;

    assert_eq!(first.count.load(Ordering::SeqCst), 1);
    assert_eq!(second.count.load(Ordering::SeqCst), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn events_before_registration_are_not_replayed() {
    let (sdk, native) = sdk_pair();

    native
        .emit(DeviceEvent::ConnectionState {
            state: ConnState::Connecting,
        })
        .unwrap();

    // Give the router time to drop the unobserved event.
    tokio::time::sleep(Duration::from_millis(20)).await;

    struct States(Mutex<Vec<ConnState>>, AtomicU32);
    impl ConnectionListener for States {
        fn connection_state(&self, state: ConnState) {
            self.0.lock().unwrap().push(state);
            self.1.fetch_add(1, Ordering::SeqCst);
        }
    }

    let listener = Arc::new(States(Mutex::new(Vec::new()), AtomicU32::new(0)));
    sdk.set_connection_listener(listener.clone());

    native
        .emit(DeviceEvent::ConnectionState {
            state: ConnState::Connected,
        })
        .unwrap();
    wait_for(&listener.1, 1).await;

    assert_eq!(*listener.0.lock().unwrap(), vec![ConnState::Connected]);
}

#[tokio::test(flavor = "multi_thread")]
async fn magnetic_card_category_routes_all_three_notifications() {
    let (sdk, native) = sdk_pair();

    #[derive(Default)]
    struct Recorder {
        plain: Mutex<Vec<Option<String>>>,
        failures: Mutex<Vec<(i32, i32)>>,
        encrypted: Mutex<Vec<(i32, TrackMask, Vec<u8>)>>,
        count: AtomicU32,
    }

    impl MagneticCardListener for Recorder {
        fn card_data(&self, track1: Option<&str>, _: Option<&str>, _: Option<&str>) {
            self.plain.lock().unwrap().push(track1.map(String::from));
            self.count.fetch_add(1, Ordering::SeqCst);
        }
        fn read_failed(&self, source: i32, reason: i32) {
            self.failures.lock().unwrap().push((source, reason));
            self.count.fetch_add(1, Ordering::SeqCst);
        }
        fn encrypted_data(&self, encryption: i32, tracks: TrackMask, data: &[u8]) {
            self.encrypted
                .lock()
                .unwrap()
                .push((encryption, tracks, data.to_vec()));
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    let listener = Arc::new(Recorder::default());
    sdk.set_magnetic_card_listener(listener.clone());

    native
        .emit(DeviceEvent::MagneticCardData {
            track1: Some("%B4111111111111111^DOE/JOHN?".into()),
            track2: None,
            track3: None,
        })
        .unwrap();
    native
        .emit(DeviceEvent::MagneticCardReadFailed {
            source: 2,
            reason: 5,
        })
        .unwrap();
    native
        .emit(DeviceEvent::MagneticCardEncryptedData {
            encryption: 1,
            tracks: TrackMask::new(7),
            data: vec![0xDE, 0xAD, 0xBE, 0xEF],
        })
        .unwrap();

    wait_for(&listener.count, 3).await;

    assert_eq!(listener.plain.lock().unwrap().len(), 1);
    assert_eq!(*listener.failures.lock().unwrap(), vec![(2, 5)]);
    let encrypted = listener.encrypted.lock().unwrap();
    assert_eq!(encrypted.len(), 1);
    assert!(encrypted[0].1.is_all());
}

#[tokio::test(flavor = "multi_thread")]
async fn events_and_completions_are_independent() {
    let (sdk, native) = sdk_pair();
    let listener = CountingBarcode::new();
    sdk.set_barcode_listener(listener.clone());

    let resolved = Arc::new(AtomicU32::new(0));
    let r = resolved.clone();
    sdk.get_battery_info(sledlink_bridge::Completion::new(
        move |_| {
            r.fetch_add(1, Ordering::SeqCst);
        },
        |_| {},
    ))
    .unwrap();

    // A standing event arriving while a request is outstanding must not
    // resolve or disturb the pending completion.
    native
        .emit(DeviceEvent::BarcodeData {
            barcode: "555".into(),
            symbology: 8,
        })
        .unwrap();
    wait_for(&listener.count, 1).await;
    assert_eq!(resolved.load(Ordering::SeqCst), 0);
    assert_eq!(native.pending_count(), 1);

    native.succeed_next(json!({"percentage": 50})).unwrap();
    assert_eq!(resolved.load(Ordering::SeqCst), 1);
}
