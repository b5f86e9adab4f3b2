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

use std::fmt;

/// The well-known bus name the UPower daemon owns on the system bus.
pub static UPOWER_SERVICE: &str = "org.freedesktop.UPower";

/// Object path of the UPower manager object.
pub static UPOWER_PATH: &str = "/org/freedesktop/UPower";

/// Interface implemented by the manager object at [`UPOWER_PATH`].
pub static UPOWER_MANAGER_IFACE: &str = "org.freedesktop.UPower";

/// Interface implemented by every power device object, including the display device.
pub static UPOWER_DEVICE_IFACE: &str = "org.freedesktop.UPower.Device";

/// Object path of the wakeups statistics object. Not every UPower build exports it.
pub static WAKEUPS_PATH: &str = "/org/freedesktop/UPower/Wakeups";

/// Interface implemented by the object at [`WAKEUPS_PATH`], when present.
pub static WAKEUPS_IFACE: &str = "org.freedesktop.UPower.Wakeups";

/// Object path UPower uses for the synthetic display device. Prefer
/// `UPowerClient::get_display_device` over hardcoding it.
pub static DISPLAY_DEVICE_PATH: &str = "/org/freedesktop/UPower/devices/DisplayDevice";

/// Which message bus a `BusSession` connects to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BusAddress {
    /// The system-wide bus, where UPower normally lives.
    #[default]
    System,
    /// The per-login session bus. Useful against mocked services such as python-dbusmock.
    Session,
    /// An explicit D-Bus address, e.g. `unix:path=/run/dbus/system_bus_socket`.
    Address(String),
}

impl fmt::Display for BusAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => write!(f, "system bus"),
            Self::Session => write!(f, "session bus"),
            Self::Address(address) => write!(f, "bus at {address}"),
        }
    }
}
