// This file is part of upower_api, a client library for the UPower power-management service.
//
// Copyright 2025 Canonical Ltd.
//
// SPDX-License-Identifier: GPL-3.0-only
//
// upower_api is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License version 3, as published by the Free Software Foundation.
//
// upower_api is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranties of MERCHANTABILITY, SATISFACTORY QUALITY, or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with this program.  If not, see http://www.gnu.org/licenses/.

//! In-process stand-ins for the UPower objects, served over a peer-to-peer connection.

use tokio::net::UnixStream;
use upower_api::UPowerClient;
use upower_api::config::{DISPLAY_DEVICE_PATH, UPOWER_PATH, WAKEUPS_PATH};
use zbus::zvariant::{ObjectPath, OwnedObjectPath};
use zbus::{Connection, Guid, connection, fdo, interface};

pub static BATTERY_PATH: &str = "/org/freedesktop/UPower/devices/battery_BAT0";
pub static LEGACY_BATTERY_PATH: &str = "/org/freedesktop/UPower/devices/battery_BAT1";
pub static LINE_POWER_PATH: &str = "/org/freedesktop/UPower/devices/line_power_AC";
pub static MISSING_PATH: &str = "/org/freedesktop/UPower/devices/battery_BAT9";

pub fn object_path(path: &'static str) -> ObjectPath<'static> {
    ObjectPath::from_static_str(path).expect("valid object path")
}

fn owned_path(path: &str) -> OwnedObjectPath {
    OwnedObjectPath::try_from(path).expect("valid object path")
}

pub struct MockManager {
    pub on_battery: bool,
    pub lid_is_closed: bool,
    pub lid_is_present: bool,
    pub daemon_version: String,
    pub critical_action: String,
    pub devices: Vec<OwnedObjectPath>,
    pub display_device: OwnedObjectPath,
}

impl Default for MockManager {
    fn default() -> Self {
        MockManager {
            on_battery: true,
            lid_is_closed: false,
            lid_is_present: true,
            daemon_version: "1.90.4".to_string(),
            critical_action: "HybridSleep".to_string(),
            devices: vec![owned_path(LINE_POWER_PATH), owned_path(BATTERY_PATH)],
            display_device: owned_path(DISPLAY_DEVICE_PATH),
        }
    }
}

#[interface(name = "org.freedesktop.UPower")]
impl MockManager {
    fn enumerate_devices(&self) -> Vec<OwnedObjectPath> {
        self.devices.clone()
    }

    fn get_display_device(&self) -> OwnedObjectPath {
        self.display_device.clone()
    }

    fn get_critical_action(&self) -> String {
        self.critical_action.clone()
    }

    #[zbus(property)]
    fn on_battery(&self) -> bool {
        self.on_battery
    }

    #[zbus(property)]
    fn lid_is_closed(&self) -> bool {
        self.lid_is_closed
    }

    #[zbus(property)]
    fn lid_is_present(&self) -> bool {
        self.lid_is_present
    }

    #[zbus(property)]
    fn daemon_version(&self) -> String {
        self.daemon_version.clone()
    }
}

/// A device object. With `legacy` set, the properties newer daemons added fail to read.
#[derive(Clone)]
pub struct MockDevice {
    pub legacy: bool,
    pub has_history: bool,
    pub has_statistics: bool,
    pub is_present: bool,
    pub is_rechargeable: bool,
    pub online: bool,
    pub power_supply: bool,
    pub capacity: f64,
    pub energy: f64,
    pub energy_empty: f64,
    pub energy_full: f64,
    pub energy_full_design: f64,
    pub energy_rate: f64,
    pub luminosity: f64,
    pub percentage: f64,
    pub temperature: f64,
    pub voltage: f64,
    pub time_to_empty: i64,
    pub time_to_full: i64,
    pub update_time: u64,
    pub icon_name: String,
    pub model: String,
    pub native_path: String,
    pub serial: String,
    pub vendor: String,
    pub state: u32,
    pub technology: u32,
    pub device_type: u32,
    pub warning_level: u32,
    pub battery_level: u32,
    pub capacity_level: String,
    pub charge_cycles: i32,
    pub charge_start_threshold: u32,
    pub charge_end_threshold: u32,
    pub charge_threshold_enabled: bool,
    pub charge_threshold_supported: bool,
    pub history: Vec<(u32, f64, u32)>,
    pub statistics: Vec<(f64, f64)>,
}

impl MockDevice {
    /// A discharging laptop battery at 87%.
    pub fn battery() -> Self {
        MockDevice {
            legacy: false,
            has_history: true,
            has_statistics: true,
            is_present: true,
            is_rechargeable: true,
            online: false,
            power_supply: true,
            capacity: 94.5,
            energy: 45.1,
            energy_empty: 0.0,
            energy_full: 51.8,
            energy_full_design: 54.8,
            energy_rate: 9.2,
            luminosity: 0.0,
            percentage: 87.0,
            temperature: 31.5,
            voltage: 12.4,
            time_to_empty: 17640,
            time_to_full: 0,
            update_time: 1_760_000_000,
            icon_name: "battery-full-symbolic".to_string(),
            model: "5B10W13930".to_string(),
            native_path: "BAT0".to_string(),
            serial: "1234".to_string(),
            vendor: "SMP".to_string(),
            state: 2,
            technology: 2,
            device_type: 2,
            warning_level: 1,
            battery_level: 1,
            capacity_level: "Normal".to_string(),
            charge_cycles: 112,
            charge_start_threshold: 75,
            charge_end_threshold: 80,
            charge_threshold_enabled: true,
            charge_threshold_supported: true,
            history: vec![(1_760_000_000, 88.0, 2), (1_760_000_120, 87.0, 2)],
            statistics: vec![(1.0, 90.0), (0.98, 85.0)],
        }
    }

    /// The same battery behind a daemon without the charge threshold properties.
    pub fn legacy_battery() -> Self {
        MockDevice {
            legacy: true,
            native_path: "BAT1".to_string(),
            ..MockDevice::battery()
        }
    }

    /// The AC adapter. Line power has no charge properties to speak of.
    pub fn line_power() -> Self {
        MockDevice {
            has_history: false,
            has_statistics: false,
            is_present: false,
            is_rechargeable: false,
            online: true,
            capacity: 0.0,
            energy: 0.0,
            energy_full: 0.0,
            energy_full_design: 0.0,
            energy_rate: 0.0,
            percentage: 0.0,
            temperature: 0.0,
            voltage: 0.0,
            time_to_empty: 0,
            icon_name: "ac-adapter-symbolic".to_string(),
            model: String::new(),
            native_path: "AC".to_string(),
            serial: String::new(),
            vendor: String::new(),
            state: 0,
            technology: 0,
            device_type: 1,
            capacity_level: String::new(),
            charge_cycles: -1,
            charge_start_threshold: 0,
            charge_end_threshold: 100,
            charge_threshold_enabled: false,
            charge_threshold_supported: false,
            history: Vec::new(),
            statistics: Vec::new(),
            ..MockDevice::battery()
        }
    }

    fn recent<T>(&self, value: T) -> fdo::Result<T> {
        if self.legacy {
            return Err(fdo::Error::InvalidArgs(
                "No such property on this daemon version".to_string(),
            ));
        }
        Ok(value)
    }
}

#[interface(name = "org.freedesktop.UPower.Device")]
impl MockDevice {
    fn get_history(&self, _kind: String, _timespan: u32, _resolution: u32) -> Vec<(u32, f64, u32)> {
        self.history.clone()
    }

    fn get_statistics(&self, _kind: String) -> Vec<(f64, f64)> {
        self.statistics.clone()
    }

    #[zbus(property)]
    fn has_history(&self) -> bool {
        self.has_history
    }

    #[zbus(property)]
    fn has_statistics(&self) -> bool {
        self.has_statistics
    }

    #[zbus(property)]
    fn is_present(&self) -> bool {
        self.is_present
    }

    #[zbus(property)]
    fn is_rechargeable(&self) -> bool {
        self.is_rechargeable
    }

    #[zbus(property)]
    fn online(&self) -> bool {
        self.online
    }

    #[zbus(property)]
    fn power_supply(&self) -> bool {
        self.power_supply
    }

    #[zbus(property)]
    fn capacity(&self) -> f64 {
        self.capacity
    }

    #[zbus(property)]
    fn energy(&self) -> f64 {
        self.energy
    }

    #[zbus(property)]
    fn energy_empty(&self) -> f64 {
        self.energy_empty
    }

    #[zbus(property)]
    fn energy_full(&self) -> f64 {
        self.energy_full
    }

    #[zbus(property)]
    fn energy_full_design(&self) -> f64 {
        self.energy_full_design
    }

    #[zbus(property)]
    fn energy_rate(&self) -> f64 {
        self.energy_rate
    }

    #[zbus(property)]
    fn luminosity(&self) -> f64 {
        self.luminosity
    }

    #[zbus(property)]
    fn percentage(&self) -> f64 {
        self.percentage
    }

    #[zbus(property)]
    fn temperature(&self) -> f64 {
        self.temperature
    }

    #[zbus(property)]
    fn voltage(&self) -> f64 {
        self.voltage
    }

    #[zbus(property)]
    fn time_to_empty(&self) -> i64 {
        self.time_to_empty
    }

    #[zbus(property)]
    fn time_to_full(&self) -> i64 {
        self.time_to_full
    }

    #[zbus(property)]
    fn update_time(&self) -> u64 {
        self.update_time
    }

    #[zbus(property)]
    fn icon_name(&self) -> String {
        self.icon_name.clone()
    }

    #[zbus(property)]
    fn model(&self) -> String {
        self.model.clone()
    }

    #[zbus(property)]
    fn native_path(&self) -> String {
        self.native_path.clone()
    }

    #[zbus(property)]
    fn serial(&self) -> String {
        self.serial.clone()
    }

    #[zbus(property)]
    fn vendor(&self) -> String {
        self.vendor.clone()
    }

    #[zbus(property)]
    fn state(&self) -> u32 {
        self.state
    }

    #[zbus(property)]
    fn technology(&self) -> u32 {
        self.technology
    }

    #[zbus(property, name = "Type")]
    fn device_type(&self) -> u32 {
        self.device_type
    }

    #[zbus(property)]
    fn warning_level(&self) -> u32 {
        self.warning_level
    }

    #[zbus(property)]
    fn battery_level(&self) -> fdo::Result<u32> {
        self.recent(self.battery_level)
    }

    #[zbus(property)]
    fn capacity_level(&self) -> fdo::Result<String> {
        self.recent(self.capacity_level.clone())
    }

    #[zbus(property)]
    fn charge_cycles(&self) -> fdo::Result<i32> {
        self.recent(self.charge_cycles)
    }

    #[zbus(property)]
    fn charge_start_threshold(&self) -> fdo::Result<u32> {
        self.recent(self.charge_start_threshold)
    }

    #[zbus(property)]
    fn charge_end_threshold(&self) -> fdo::Result<u32> {
        self.recent(self.charge_end_threshold)
    }

    #[zbus(property)]
    fn charge_threshold_enabled(&self) -> fdo::Result<bool> {
        self.recent(self.charge_threshold_enabled)
    }

    #[zbus(property)]
    fn charge_threshold_supported(&self) -> fdo::Result<bool> {
        self.recent(self.charge_threshold_supported)
    }
}

pub struct MockWakeups {
    pub has_capability: bool,
    pub data: Vec<(bool, u32, f64, String, String)>,
    pub total: u32,
}

impl Default for MockWakeups {
    fn default() -> Self {
        MockWakeups {
            has_capability: true,
            data: vec![
                (true, 1234, 2.5, "/usr/bin/gnome-shell".to_string(), String::new()),
                (false, 9, 0.5, String::new(), "i915".to_string()),
            ],
            total: 3,
        }
    }
}

#[interface(name = "org.freedesktop.UPower.Wakeups")]
impl MockWakeups {
    fn get_data(&self) -> Vec<(bool, u32, f64, String, String)> {
        self.data.clone()
    }

    fn get_total(&self) -> u32 {
        self.total
    }

    #[zbus(property)]
    fn has_capability(&self) -> bool {
        self.has_capability
    }
}

/// What the mock daemon exports.
pub struct MockUPower {
    pub manager: Option<MockManager>,
    pub devices: Vec<(&'static str, MockDevice)>,
    pub wakeups: Option<MockWakeups>,
}

impl Default for MockUPower {
    fn default() -> Self {
        MockUPower {
            manager: Some(MockManager::default()),
            devices: vec![
                (LINE_POWER_PATH, MockDevice::line_power()),
                (BATTERY_PATH, MockDevice::battery()),
                (LEGACY_BATTERY_PATH, MockDevice::legacy_battery()),
                (
                    DISPLAY_DEVICE_PATH,
                    MockDevice {
                        native_path: String::new(),
                        ..MockDevice::battery()
                    },
                ),
            ],
            wakeups: None,
        }
    }
}

impl MockUPower {
    pub fn with_manager(mut self, manager: MockManager) -> Self {
        self.manager = Some(manager);
        self
    }

    pub fn without_manager(mut self) -> Self {
        self.manager = None;
        self
    }

    pub fn with_wakeups(mut self, wakeups: MockWakeups) -> Self {
        self.wakeups = Some(wakeups);
        self
    }

    pub fn with_device(mut self, path: &'static str, device: MockDevice) -> Self {
        self.devices.retain(|(p, _)| *p != path);
        self.devices.push((path, device));
        self
    }
}

/// A connected client and the mock daemon answering it.
pub struct TestBus {
    pub client: UPowerClient,
    pub connection: Connection,
    pub server: Connection,
}

impl TestBus {
    /// Drop the daemon side of the connection. Later queries fail at the transport.
    pub async fn shutdown_daemon(&self) {
        self.server
            .clone()
            .close()
            .await
            .expect("failed to close the daemon connection");
    }
}

pub async fn start(mock: MockUPower) -> TestBus {
    let _ = env_logger::builder().is_test(true).try_init();

    let guid = Guid::generate();
    let (p0, p1) = UnixStream::pair().expect("failed to create socket pair");
    let mut server = connection::Builder::unix_stream(p1)
        .server(guid)
        .expect("failed to set server guid")
        .p2p();
    if let Some(manager) = mock.manager {
        server = server
            .serve_at(UPOWER_PATH, manager)
            .expect("failed to serve manager");
    }
    for (path, device) in mock.devices {
        server = server
            .serve_at(path, device)
            .expect("failed to serve device");
    }
    if let Some(wakeups) = mock.wakeups {
        server = server
            .serve_at(WAKEUPS_PATH, wakeups)
            .expect("failed to serve wakeups");
    }
    let client = connection::Builder::unix_stream(p0).p2p().build();

    let (connection, server) =
        tokio::try_join!(client, server.build()).expect("failed to set up the peer connection");
    TestBus {
        client: UPowerClient::from_connection(connection.clone()),
        connection,
        server,
    }
}

impl TestBus {
    /// Change a served device in place. The next query sees the new values.
    pub async fn update_device(&self, path: &str, update: impl FnOnce(&mut MockDevice)) {
        let iface = self
            .server
            .object_server()
            .interface::<_, MockDevice>(path)
            .await
            .expect("device is not served");
        update(&mut *iface.get_mut().await);
    }
}
