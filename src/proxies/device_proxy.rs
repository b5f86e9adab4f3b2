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

/// Enum-valued properties are read as raw codes; decoding lives in [`crate::enums`].
#[proxy(
    default_service = "org.freedesktop.UPower",
    interface = "org.freedesktop.UPower.Device"
)]
pub trait Device {
    /// Samples of (time, value, state) for one history series.
    fn get_history(
        &self,
        kind: &str,
        timespan: u32,
        resolution: u32,
    ) -> Result<Vec<(u32, f64, u32)>>;
    /// Points of (value, accuracy) for a charge or discharge profile.
    fn get_statistics(&self, kind: &str) -> Result<Vec<(f64, f64)>>;

    #[zbus(property)]
    fn has_history(&self) -> Result<bool>;
    #[zbus(property)]
    fn has_statistics(&self) -> Result<bool>;
    #[zbus(property)]
    fn is_present(&self) -> Result<bool>;
    #[zbus(property)]
    fn is_rechargeable(&self) -> Result<bool>;
    #[zbus(property)]
    fn online(&self) -> Result<bool>;
    #[zbus(property)]
    fn power_supply(&self) -> Result<bool>;

    #[zbus(property)]
    fn capacity(&self) -> Result<f64>;
    #[zbus(property)]
    fn energy(&self) -> Result<f64>;
    #[zbus(property)]
    fn energy_empty(&self) -> Result<f64>;
    #[zbus(property)]
    fn energy_full(&self) -> Result<f64>;
    #[zbus(property)]
    fn energy_full_design(&self) -> Result<f64>;
    #[zbus(property)]
    fn energy_rate(&self) -> Result<f64>;
    #[zbus(property)]
    fn luminosity(&self) -> Result<f64>;
    #[zbus(property)]
    fn percentage(&self) -> Result<f64>;
    #[zbus(property)]
    fn temperature(&self) -> Result<f64>;
    #[zbus(property)]
    fn voltage(&self) -> Result<f64>;
    #[zbus(property)]
    fn time_to_empty(&self) -> Result<i64>;
    #[zbus(property)]
    fn time_to_full(&self) -> Result<i64>;
    #[zbus(property)]
    fn update_time(&self) -> Result<u64>;

    #[zbus(property)]
    fn icon_name(&self) -> Result<String>;
    #[zbus(property)]
    fn model(&self) -> Result<String>;
    #[zbus(property)]
    fn native_path(&self) -> Result<String>;
    #[zbus(property)]
    fn serial(&self) -> Result<String>;
    #[zbus(property)]
    fn vendor(&self) -> Result<String>;

    #[zbus(property)]
    fn state(&self) -> Result<u32>;
    #[zbus(property)]
    fn technology(&self) -> Result<u32>;
    #[zbus(property, name = "Type")]
    fn device_type(&self) -> Result<u32>;
    #[zbus(property)]
    fn warning_level(&self) -> Result<u32>;

    // Not exported by older daemons.
    #[zbus(property)]
    fn battery_level(&self) -> Result<u32>;
    #[zbus(property)]
    fn capacity_level(&self) -> Result<String>;
    #[zbus(property)]
    fn charge_cycles(&self) -> Result<i32>;
    #[zbus(property)]
    fn charge_start_threshold(&self) -> Result<u32>;
    #[zbus(property)]
    fn charge_end_threshold(&self) -> Result<u32>;
    #[zbus(property)]
    fn charge_threshold_enabled(&self) -> Result<bool>;
    #[zbus(property)]
    fn charge_threshold_supported(&self) -> Result<bool>;
}
