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

//! Value types returned by [`UPowerClient`](crate::UPowerClient).
//!
//! Snapshots serialize as maps keyed by the D-Bus property names, in the field order
//! declared here.

use crate::enums::{BatteryLevel, DeviceState, DeviceType, Technology, WarningLevel};
use crate::error::UPowerError;
use serde::Serialize;

/// Global state of the power manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManagerStatus {
    pub on_battery: bool,
    pub lid_closed: bool,
    pub lid_present: bool,
    /// `DaemonVersion` of the manager. The serialized key is `daemon_version`, not `daemon_ver`.
    pub daemon_version: String,
}

/// Device properties every UPower release exports.
///
/// This is also the whole answer of
/// [`get_legacy_device_information`](crate::UPowerClient::get_legacy_device_information),
/// for daemons predating the charge threshold properties.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BaselineSnapshot {
    // capabilities
    pub has_history: bool,
    pub has_statistics: bool,
    pub is_present: bool,
    pub is_rechargeable: bool,
    pub online: bool,
    pub power_supply: bool,

    // energy, in percent and Wh
    pub capacity: f64,
    pub energy: f64,
    pub energy_empty: f64,
    pub energy_full: f64,
    pub energy_full_design: f64,
    /// W
    pub energy_rate: f64,

    pub luminosity: f64,
    pub percentage: f64,
    /// °C
    pub temperature: f64,
    /// V
    pub voltage: f64,
    /// Seconds, 0 when unknown.
    pub time_to_empty: i64,
    /// Seconds, 0 when unknown.
    pub time_to_full: i64,

    // identity
    pub icon_name: String,
    pub model: String,
    pub native_path: String,
    pub serial: String,
    pub vendor: String,

    pub state: DeviceState,
    pub technology: Technology,
    #[serde(rename = "Type")]
    pub device_type: DeviceType,
    pub warning_level: WarningLevel,
    /// Seconds since the epoch of the last refresh.
    pub update_time: u64,
}

/// Everything UPower knows about a device, read in one call.
///
/// Each field comes from its own property read. The daemon offers no transaction, so
/// the snapshot is a best-effort simultaneous read rather than a point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeviceSnapshot {
    #[serde(flatten)]
    pub baseline: BaselineSnapshot,
    pub battery_level: BatteryLevel,
    pub capacity_level: String,
    pub charge_cycles: i32,
    pub charge_start_threshold: u32,
    pub charge_end_threshold: u32,
    pub charge_threshold_enabled: bool,
    pub charge_threshold_supported: bool,
}

impl From<DeviceSnapshot> for BaselineSnapshot {
    fn from(snapshot: DeviceSnapshot) -> Self {
        snapshot.baseline
    }
}

/// One entry of the wakeups table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WakeupItem {
    pub is_userspace: bool,
    pub id: u32,
    /// Wakeups per second.
    pub value: f64,
    pub cmdline: String,
    pub details: String,
}

impl From<(bool, u32, f64, String, String)> for WakeupItem {
    fn from((is_userspace, id, value, cmdline, details): (bool, u32, f64, String, String)) -> Self {
        WakeupItem {
            is_userspace,
            id,
            value,
            cmdline,
            details,
        }
    }
}

/// One sample of a device history series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryItem {
    /// Seconds since the epoch.
    pub time: u32,
    pub value: f64,
    pub state: DeviceState,
}

impl TryFrom<(u32, f64, u32)> for HistoryItem {
    type Error = UPowerError;

    fn try_from((time, value, state): (u32, f64, u32)) -> Result<Self, Self::Error> {
        Ok(HistoryItem {
            time,
            value,
            state: DeviceState::try_from(state)?,
        })
    }
}

/// One point of a charge or discharge profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsItem {
    pub value: f64,
    pub accuracy: f64,
}

impl From<(f64, f64)> for StatisticsItem {
    fn from((value, accuracy): (f64, f64)) -> Self {
        StatisticsItem { value, accuracy }
    }
}
