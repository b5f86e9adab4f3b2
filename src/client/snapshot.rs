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

//! Whole-device snapshots.
//!
//! The device interface is resolved once per snapshot, then every property is read on
//! its own. Reads within a group are issued concurrently. The first failing read, or an
//! enum code outside the known tables, fails the snapshot; a partially filled record is
//! never returned. Callers that need to cope with missing properties can fall back to
//! the single-property queries.

use crate::client::UPowerClient;
use crate::enums::{BatteryLevel, DeviceState, DeviceType, Technology, WarningLevel};
use crate::error::UPowerError;
use crate::proxies::device_proxy::DeviceProxy;
use crate::records::{BaselineSnapshot, DeviceSnapshot};
use crate::session::RemoteInterface;
use log::trace;
use zbus::zvariant::ObjectPath;

impl UPowerClient {
    /// Every property of `device`, including the charge threshold, cycle count and
    /// capacity level fields of recent UPower releases.
    pub async fn get_full_device_information(
        &self,
        device: &ObjectPath<'_>,
    ) -> Result<DeviceSnapshot, UPowerError> {
        let remote = self.device(device).await?;
        let proxy: DeviceProxy<'_> = remote.proxy().await?;
        let baseline = read_baseline(&remote, &proxy).await?;

        let (
            battery_level,
            capacity_level,
            charge_cycles,
            charge_start_threshold,
            charge_end_threshold,
            charge_threshold_enabled,
            charge_threshold_supported,
        ) = tokio::try_join!(
            remote.read("BatteryLevel", proxy.battery_level()),
            remote.read("CapacityLevel", proxy.capacity_level()),
            remote.read("ChargeCycles", proxy.charge_cycles()),
            remote.read("ChargeStartThreshold", proxy.charge_start_threshold()),
            remote.read("ChargeEndThreshold", proxy.charge_end_threshold()),
            remote.read("ChargeThresholdEnabled", proxy.charge_threshold_enabled()),
            remote.read("ChargeThresholdSupported", proxy.charge_threshold_supported()),
        )?;

        Ok(DeviceSnapshot {
            baseline,
            battery_level: BatteryLevel::try_from(battery_level)?,
            capacity_level,
            charge_cycles,
            charge_start_threshold,
            charge_end_threshold,
            charge_threshold_enabled,
            charge_threshold_supported,
        })
    }

    /// The properties every UPower release exports, for daemons that predate the
    /// charge threshold fields.
    pub async fn get_legacy_device_information(
        &self,
        device: &ObjectPath<'_>,
    ) -> Result<BaselineSnapshot, UPowerError> {
        let remote = self.device(device).await?;
        let proxy: DeviceProxy<'_> = remote.proxy().await?;
        read_baseline(&remote, &proxy).await
    }
}

async fn read_baseline(
    remote: &RemoteInterface,
    device: &DeviceProxy<'_>,
) -> Result<BaselineSnapshot, UPowerError> {
    trace!("reading baseline properties of {}", remote.path());

    let (has_history, has_statistics, is_present, is_rechargeable, online, power_supply) = tokio::try_join!(
        remote.read("HasHistory", device.has_history()),
        remote.read("HasStatistics", device.has_statistics()),
        remote.read("IsPresent", device.is_present()),
        remote.read("IsRechargeable", device.is_rechargeable()),
        remote.read("Online", device.online()),
        remote.read("PowerSupply", device.power_supply()),
    )?;

    let (capacity, energy, energy_empty, energy_full, energy_full_design, energy_rate) = tokio::try_join!(
        remote.read("Capacity", device.capacity()),
        remote.read("Energy", device.energy()),
        remote.read("EnergyEmpty", device.energy_empty()),
        remote.read("EnergyFull", device.energy_full()),
        remote.read("EnergyFullDesign", device.energy_full_design()),
        remote.read("EnergyRate", device.energy_rate()),
    )?;

    let (luminosity, percentage, temperature, voltage, time_to_empty, time_to_full, update_time) = tokio::try_join!(
        remote.read("Luminosity", device.luminosity()),
        remote.read("Percentage", device.percentage()),
        remote.read("Temperature", device.temperature()),
        remote.read("Voltage", device.voltage()),
        remote.read("TimeToEmpty", device.time_to_empty()),
        remote.read("TimeToFull", device.time_to_full()),
        remote.read("UpdateTime", device.update_time()),
    )?;

    let (icon_name, model, native_path, serial, vendor) = tokio::try_join!(
        remote.read("IconName", device.icon_name()),
        remote.read("Model", device.model()),
        remote.read("NativePath", device.native_path()),
        remote.read("Serial", device.serial()),
        remote.read("Vendor", device.vendor()),
    )?;

    let (state, technology, device_type, warning_level) = tokio::try_join!(
        remote.read("State", device.state()),
        remote.read("Technology", device.technology()),
        remote.read("Type", device.device_type()),
        remote.read("WarningLevel", device.warning_level()),
    )?;

    Ok(BaselineSnapshot {
        has_history,
        has_statistics,
        is_present,
        is_rechargeable,
        online,
        power_supply,
        capacity,
        energy,
        energy_empty,
        energy_full,
        energy_full_design,
        energy_rate,
        luminosity,
        percentage,
        temperature,
        voltage,
        time_to_empty,
        time_to_full,
        icon_name,
        model,
        native_path,
        serial,
        vendor,
        state: DeviceState::try_from(state)?,
        technology: Technology::try_from(technology)?,
        device_type: DeviceType::try_from(device_type)?,
        warning_level: WarningLevel::try_from(warning_level)?,
        update_time,
    })
}
