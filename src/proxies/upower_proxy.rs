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

use zbus::zvariant::OwnedObjectPath;
use zbus::{Result, proxy};

#[proxy(
    default_service = "org.freedesktop.UPower",
    interface = "org.freedesktop.UPower",
    default_path = "/org/freedesktop/UPower"
)]
pub trait UPower {
    fn enumerate_devices(&self) -> Result<Vec<OwnedObjectPath>>;
    fn get_display_device(&self) -> Result<OwnedObjectPath>;
    fn get_critical_action(&self) -> Result<String>;

    #[zbus(property)]
    fn daemon_version(&self) -> Result<String>;
    #[zbus(property)]
    fn on_battery(&self) -> Result<bool>;
    #[zbus(property)]
    fn lid_is_closed(&self) -> Result<bool>;
    #[zbus(property)]
    fn lid_is_present(&self) -> Result<bool>;
}
