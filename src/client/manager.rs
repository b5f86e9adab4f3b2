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
use crate::error::UPowerError;
use crate::proxies::device_proxy::DeviceProxy;
use crate::proxies::upower_proxy::UPowerProxy;
use crate::records::ManagerStatus;
use zbus::zvariant::{ObjectPath, OwnedObjectPath};

impl UPowerClient {
    /// Object paths of every power device the daemon knows, in daemon order.
    /// The display device is not included.
    pub async fn enumerate_devices(&self) -> Result<Vec<OwnedObjectPath>, UPowerError> {
        let remote = self.manager().await?;
        let manager: UPowerProxy<'_> = remote.proxy().await?;
        Ok(manager.enumerate_devices().await?)
    }

    /// Object path of the composite device summarizing the system power status.
    pub async fn get_display_device(&self) -> Result<OwnedObjectPath, UPowerError> {
        let remote = self.manager().await?;
        let manager: UPowerProxy<'_> = remote.proxy().await?;
        Ok(manager.get_display_device().await?)
    }

    /// What the daemon does when the battery goes critical, e.g. `HybridSleep`.
    pub async fn get_critical_action(&self) -> Result<String, UPowerError> {
        let remote = self.manager().await?;
        let manager: UPowerProxy<'_> = remote.proxy().await?;
        Ok(manager.get_critical_action().await?)
    }

    /// OnBattery, LidIsClosed, LidIsPresent and DaemonVersion in one record.
    pub async fn get_manager_status(&self) -> Result<ManagerStatus, UPowerError> {
        let remote = self.manager().await?;
        let manager: UPowerProxy<'_> = remote.proxy().await?;
        let (on_battery, lid_closed, daemon_version, lid_present) = tokio::try_join!(
            remote.read("OnBattery", manager.on_battery()),
            remote.read("LidIsClosed", manager.lid_is_closed()),
            remote.read("DaemonVersion", manager.daemon_version()),
            remote.read("LidIsPresent", manager.lid_is_present()),
        )?;
        Ok(ManagerStatus {
            on_battery,
            lid_closed,
            lid_present,
            daemon_version,
        })
    }

    pub async fn get_daemon_version(&self) -> Result<String, UPowerError> {
        let remote = self.manager().await?;
        let manager: UPowerProxy<'_> = remote.proxy().await?;
        remote.read("DaemonVersion", manager.daemon_version()).await
    }

    pub async fn is_lid_present(&self) -> Result<bool, UPowerError> {
        let remote = self.manager().await?;
        let manager: UPowerProxy<'_> = remote.proxy().await?;
        remote.read("LidIsPresent", manager.lid_is_present()).await
    }

    pub async fn is_lid_closed(&self) -> Result<bool, UPowerError> {
        let remote = self.manager().await?;
        let manager: UPowerProxy<'_> = remote.proxy().await?;
        remote.read("LidIsClosed", manager.lid_is_closed()).await
    }

    pub async fn on_battery(&self) -> Result<bool, UPowerError> {
        let remote = self.manager().await?;
        let manager: UPowerProxy<'_> = remote.proxy().await?;
        remote.read("OnBattery", manager.on_battery()).await
    }

    /// Whether the device is in its bay. Only meaningful for batteries.
    pub async fn is_present(&self, device: &ObjectPath<'_>) -> Result<bool, UPowerError> {
        let remote = self.device(device).await?;
        let proxy: DeviceProxy<'_> = remote.proxy().await?;
        remote.read("IsPresent", proxy.is_present()).await
    }
}
