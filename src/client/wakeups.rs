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

//! Wakeup statistics.
//!
//! Many UPower builds do not export the wakeups object at all. Each query here
//! answers with its default (`false`, empty, `0`) in that case. Any other failure,
//! such as a lost connection, is returned as an error.

use crate::client::UPowerClient;
use crate::error::UPowerError;
use crate::proxies::wakeups_proxy::WakeupsProxy;
use crate::records::WakeupItem;

impl UPowerClient {
    pub async fn has_wakeup_capabilities(&self) -> Result<bool, UPowerError> {
        let Some(remote) = self.wakeups().await? else {
            return Ok(false);
        };
        let wakeups: WakeupsProxy<'_> = remote.proxy().await?;
        remote.read("HasCapability", wakeups.has_capability()).await
    }

    pub async fn get_wakeup_data(&self) -> Result<Vec<WakeupItem>, UPowerError> {
        let Some(remote) = self.wakeups().await? else {
            return Ok(Vec::new());
        };
        let wakeups: WakeupsProxy<'_> = remote.proxy().await?;
        let rows = wakeups.get_data().await?;
        Ok(rows.into_iter().map(WakeupItem::from).collect())
    }

    /// Total wakeups per second.
    pub async fn get_wakeup_total(&self) -> Result<u32, UPowerError> {
        let Some(remote) = self.wakeups().await? else {
            return Ok(0);
        };
        let wakeups: WakeupsProxy<'_> = remote.proxy().await?;
        Ok(wakeups.get_total().await?)
    }
}
