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

//! Typed proxies for the UPower interfaces this crate reads.
//!
//! The proxies are built by [`RemoteInterface::proxy`](crate::RemoteInterface::proxy)
//! once the object has been checked to implement the interface, and never cache
//! properties.
//!
//! - [`upower_proxy`] - the manager at `/org/freedesktop/UPower`
//! - [`device_proxy`] - any device object, including the display device
//! - [`wakeups_proxy`] - the optional wakeups object

pub mod device_proxy;
pub mod upower_proxy;
pub mod wakeups_proxy;
