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

//! Helpers for tests that talk to the UPower daemon on the machine running them.
//!
//! These tests need a system bus with UPower on it and are ignored by default. Run
//! them with `cargo test -p integration-tests -- --ignored`.

use log::info;
use upower_api::{UPowerClient, UPowerError};
use zbus::zvariant::OwnedObjectPath;

/// A client connected to the system bus.
pub async fn live_client() -> Result<UPowerClient, UPowerError> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut client = UPowerClient::new();
    client.connect().await?;
    info!(
        "connected to UPower {} on the {}",
        client.get_daemon_version().await?,
        client.session().address()
    );
    Ok(client)
}

/// The devices UPower reports, followed by the display device.
pub async fn all_devices(client: &UPowerClient) -> Result<Vec<OwnedObjectPath>, UPowerError> {
    let mut devices = client.enumerate_devices().await?;
    devices.push(client.get_display_device().await?);
    Ok(devices)
}
