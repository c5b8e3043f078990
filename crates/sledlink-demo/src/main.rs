//! Demo driver for the sled facade.
//!
//! Wires the facade to the mock bridge and replays a typical session:
//! developer key, connect, a few scans, a battery query, disconnect. Useful
//! as a living usage example and as a smoke test of the whole stack without
//! native code or hardware.

use anyhow::Result;
use clap::Parser;
use serde_json::json;
use sledlink_bridge::{Completion, DeviceEvent, Method, MockBridge};
use sledlink_core::{ConnState, DeveloperKey, ScanMode};
use sledlink_sdk::{
    SledSdk,
    listeners::{BarcodeListener, ConnectionListener},
};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sledlink-demo", about = "Replay a scripted sled session against the mock bridge")]
struct Args {
    /// Developer key forwarded before any other call
    #[arg(long, default_value = "DEMO-KEY")]
    developer_key: String,

    /// Number of simulated barcode scans
    #[arg(long, default_value_t = 3)]
    scans: u32,
}

struct LogScans;

impl BarcodeListener for LogScans {
    fn barcode_data(&self, barcode: &str, symbology: i32) {
        tracing::info!(barcode, symbology, "barcode scanned");
    }
}

struct LogConnection;

impl ConnectionListener for LogConnection {
    fn connection_state(&self, state: ConnState) {
        tracing::info!(%state, "connection state changed");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let (bridge, native) = MockBridge::new();
    let sdk = SledSdk::new(Arc::new(bridge));
    sdk.set_barcode_listener(Arc::new(LogScans));
    sdk.set_connection_listener(Arc::new(LogConnection));

    sdk.set_developer_key(&DeveloperKey::new(&args.developer_key)?)?;
    sdk.connect()?;
    native.emit(DeviceEvent::ConnectionState {
        state: ConnState::Connecting,
    })?;
    native.emit(DeviceEvent::ConnectionState {
        state: ConnState::Connected,
    })?;

    sdk.barcode_set_scan_mode(ScanMode::SingleScan, Some(Box::new(|reason| {
        tracing::warn!(%reason, "scan mode rejected");
    })))?;

    for n in 0..args.scans {
        sdk.barcode_start_scan(None)?;
        native.emit(DeviceEvent::BarcodeData {
            barcode: format!("400638133393{n}"),
            symbology: 13,
        })?;
        sdk.barcode_stop_scan(None)?;
    }

    sdk.get_battery_info(Completion::new(
        |info| tracing::info!(%info, "battery info"),
        |reason| tracing::warn!(%reason, "battery query failed"),
    ))?;
    native.succeed_method(
        Method::GetBatteryInfo,
        json!({"percentage": 80, "voltage": 4093, "chip": 1}),
    )?;

    sdk.disconnect()?;
    native.emit(DeviceEvent::ConnectionState {
        state: ConnState::Disconnected,
    })?;

    // Let the router drain the event channel before reporting.
    tokio::time::sleep(Duration::from_millis(50)).await;

    tracing::info!(
        invocations = native.recorded().len(),
        pending = native.pending_count(),
        "session complete"
    );
    Ok(())
}
