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

//! The query surface of the crate.
//!
//! The methods of [`UPowerClient`] are split by the remote object they talk to:
//!
//! - [`manager`] - the manager object at `/org/freedesktop/UPower`
//! - [`wakeups`] - the optional wakeups object, defaulting when it is missing
//! - [`device`] - single properties and methods of one device
//! - [`snapshot`] - every property of one device at once

pub mod device;
pub mod manager;
pub mod snapshot;
pub mod wakeups;

use crate::config::{self, BusAddress};
use crate::error::UPowerError;
use crate::session::{BusSession, RemoteInterface, Requirement};
use zbus::Connection;
use zbus::zvariant::ObjectPath;

#[derive(Debug, Default)]
pub struct UPowerClient {
    session: BusSession,
}

impl UPowerClient {
    /// A client for the system bus. Call [`connect`](Self::connect) before querying.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_address(address: BusAddress) -> Self {
        UPowerClient {
            session: BusSession::with_address(address),
        }
    }

    /// A client that is ready to query through `connection`.
    pub fn from_connection(connection: Connection) -> Self {
        UPowerClient {
            session: BusSession::from_connection(connection),
        }
    }

    pub async fn connect(&mut self) -> Result<(), UPowerError> {
        self.session.connect().await
    }

    pub fn session(&self) -> &BusSession {
        &self.session
    }

    async fn manager(&self) -> Result<RemoteInterface, UPowerError> {
        self.session
            .resolve(config::UPOWER_PATH, config::UPOWER_MANAGER_IFACE)
            .await
    }

    async fn wakeups(&self) -> Result<Option<RemoteInterface>, UPowerError> {
        self.session
            .resolve_with(
                config::WAKEUPS_PATH,
                config::WAKEUPS_IFACE,
                Requirement::Optional,
            )
            .await
    }

    async fn device(&self, device: &ObjectPath<'_>) -> Result<RemoteInterface, UPowerError> {
        self.session
            .resolve(device.as_str(), config::UPOWER_DEVICE_IFACE)
            .await
    }

    async fn optional_device(
        &self,
        device: &ObjectPath<'_>,
    ) -> Result<Option<RemoteInterface>, UPowerError> {
        self.session
            .resolve_with(
                device.as_str(),
                config::UPOWER_DEVICE_IFACE,
                Requirement::Optional,
            )
            .await
    }
}
