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

use zbus::{Result, proxy};

#[proxy(
    default_service = "org.freedesktop.UPower",
    interface = "org.freedesktop.UPower.Wakeups",
    default_path = "/org/freedesktop/UPower/Wakeups"
)]
pub trait Wakeups {
    /// Rows of (is_userspace, id, value, cmdline, details).
    fn get_data(&self) -> Result<Vec<(bool, u32, f64, String, String)>>;
    fn get_total(&self) -> Result<u32>;

    #[zbus(property)]
    fn has_capability(&self) -> Result<bool>;
}
