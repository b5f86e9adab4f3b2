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

//! Typed, read-only access to the UPower daemon over D-Bus.
//!
//! ```no_run
//! # async fn demo() -> Result<(), upower_api::UPowerError> {
//! let mut client = upower_api::UPowerClient::new();
//! client.connect().await?;
//! for device in client.enumerate_devices().await? {
//!     let state = client.get_device_state(&device).await?;
//!     let percentage = client.get_device_percentage(&device).await?;
//!     println!("{device}: {state}, {percentage}%");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Every query is a fresh round trip to the daemon. Queries take `&self` and may run
//! concurrently over the single shared connection.

pub mod client;
pub mod config;
pub mod enums;
pub mod error;
pub mod proxies;
pub mod records;
pub mod session;

pub use client::UPowerClient;
pub use config::BusAddress;
pub use enums::{
    BatteryLevel, DeviceState, DeviceType, HistoryKind, StatisticsKind, Technology, WarningLevel,
};
pub use error::UPowerError;
pub use proxies::{device_proxy::DeviceProxy, upower_proxy::UPowerProxy, wakeups_proxy::WakeupsProxy};
pub use records::{
    BaselineSnapshot, DeviceSnapshot, HistoryItem, ManagerStatus, StatisticsItem, WakeupItem,
};
pub use session::{BusSession, RemoteInterface, Requirement};
