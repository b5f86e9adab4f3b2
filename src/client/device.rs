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

use crate::client::UPowerClient;
use crate::enums::{BatteryLevel, DeviceState, DeviceType, HistoryKind, StatisticsKind, WarningLevel};
use crate::error::UPowerError;
use crate::proxies::device_proxy::DeviceProxy;
use crate::records::{HistoryItem, StatisticsItem};
use log::debug;
use zbus::zvariant::ObjectPath;

impl UPowerClient {
    /// Remaining charge in percent, exactly as the daemon reports it.
    pub async fn get_device_percentage(&self, device: &ObjectPath<'_>) -> Result<f64, UPowerError> {
        let remote = self.device(device).await?;
        let proxy: DeviceProxy<'_> = remote.proxy().await?;
        remote.read("Percentage", proxy.percentage()).await
    }

    /// True iff the device reports the Charging state.
    ///
    /// A device that does not exist, or lacks the device interface, is reported as not
    /// charging instead of failing. Bus faults are still returned.
    pub async fn is_charging(&self, device: &ObjectPath<'_>) -> Result<bool, UPowerError> {
        let Some(remote) = self.optional_device(device).await? else {
            debug!("{device} has no device interface, reporting it as not charging");
            return Ok(false);
        };
        let proxy: DeviceProxy<'_> = remote.proxy().await?;
        let state = remote.read("State", proxy.state()).await?;
        Ok(state == DeviceState::Charging.code())
    }

    /// The decoded `State` property. Fails on codes outside the known table.
    pub async fn get_device_state(&self, device: &ObjectPath<'_>) -> Result<DeviceState, UPowerError> {
        let remote = self.device(device).await?;
        let proxy: DeviceProxy<'_> = remote.proxy().await?;
        DeviceState::try_from(remote.read("State", proxy.state()).await?)
    }

    pub async fn get_device_type(&self, device: &ObjectPath<'_>) -> Result<DeviceType, UPowerError> {
        let remote = self.device(device).await?;
        let proxy: DeviceProxy<'_> = remote.proxy().await?;
        DeviceType::try_from(remote.read("Type", proxy.device_type()).await?)
    }

    pub async fn get_battery_level(&self, device: &ObjectPath<'_>) -> Result<BatteryLevel, UPowerError> {
        let remote = self.device(device).await?;
        let proxy: DeviceProxy<'_> = remote.proxy().await?;
        BatteryLevel::try_from(remote.read("BatteryLevel", proxy.battery_level()).await?)
    }

    pub async fn get_warning_level(&self, device: &ObjectPath<'_>) -> Result<WarningLevel, UPowerError> {
        let remote = self.device(device).await?;
        let proxy: DeviceProxy<'_> = remote.proxy().await?;
        WarningLevel::try_from(remote.read("WarningLevel", proxy.warning_level()).await?)
    }

    /// Samples of one history series over the last `timespan` seconds, thinned to at
    /// most `resolution` points. Devices without `HasHistory` answer with an error.
    pub async fn get_device_history(
        &self,
        device: &ObjectPath<'_>,
        kind: HistoryKind,
        timespan: u32,
        resolution: u32,
    ) -> Result<Vec<HistoryItem>, UPowerError> {
        let remote = self.device(device).await?;
        let proxy: DeviceProxy<'_> = remote.proxy().await?;
        let rows = proxy
            .get_history(kind.as_str(), timespan, resolution)
            .await?;
        rows.into_iter().map(HistoryItem::try_from).collect()
    }

    pub async fn get_device_statistics(
        &self,
        device: &ObjectPath<'_>,
        kind: StatisticsKind,
    ) -> Result<Vec<StatisticsItem>, UPowerError> {
        let remote = self.device(device).await?;
        let proxy: DeviceProxy<'_> = remote.proxy().await?;
        let rows = proxy.get_statistics(kind.as_str()).await?;
        Ok(rows.into_iter().map(StatisticsItem::from).collect())
    }
}
