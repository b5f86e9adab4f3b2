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

//! Closed enumerations for the integer codes UPower puts on the wire.
//!
//! Every enum decodes with `TryFrom<u32>`, which fails with
//! [`UPowerError::UnknownCode`] for any code outside the documented table.
//! A new code usually means the daemon speaks a newer protocol than this crate,
//! so it is surfaced instead of being folded into `Unknown`.
//!
//! See <https://upower.freedesktop.org/docs/Device.html> for the tables.

use crate::error::UPowerError;
use serde::{Serialize, Serializer};
use std::fmt;

macro_rules! upower_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $($variant:ident = $code:literal => $label:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u32)]
        pub enum $name {
            $($variant = $code,)+
        }

        impl $name {
            /// Every variant, in code order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// The raw code as sent by the daemon.
            pub fn code(self) -> u32 {
                self as u32
            }

            /// Human-readable label.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl TryFrom<u32> for $name {
            type Error = UPowerError;

            fn try_from(code: u32) -> Result<Self, Self::Error> {
                match code {
                    $($code => Ok($name::$variant),)+
                    _ => Err(UPowerError::UnknownCode { kind: $kind, code }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

upower_enum! {
    /// The `State` property of a device.
    DeviceState("device state") {
        Unknown = 0 => "Unknown",
        Charging = 1 => "Charging",
        Discharging = 2 => "Discharging",
        Empty = 3 => "Empty",
        FullyCharged = 4 => "Fully Charged",
        PendingCharge = 5 => "Pending Charge",
        PendingDischarge = 6 => "Pending Discharge",
    }
}

upower_enum! {
    /// The `Type` property of a device.
    DeviceType("device type") {
        Unknown = 0 => "Unknown",
        LinePower = 1 => "Line Power",
        Battery = 2 => "Battery",
        Ups = 3 => "UPS",
        Monitor = 4 => "Monitor",
        Mouse = 5 => "Mouse",
        Keyboard = 6 => "Keyboard",
        Pda = 7 => "PDA",
        Phone = 8 => "Phone",
        MediaPlayer = 9 => "Media Player",
        Tablet = 10 => "Tablet",
        Computer = 11 => "Computer",
        GamingInput = 12 => "Gaming Input",
        Pen = 13 => "Pen",
        Touchpad = 14 => "Touchpad",
        Modem = 15 => "Modem",
        Network = 16 => "Network",
        Headset = 17 => "Headset",
        Speakers = 18 => "Speakers",
        Headphones = 19 => "Headphones",
        Video = 20 => "Video",
        OtherAudio = 21 => "Other Audio",
        RemoteControl = 22 => "Remote Control",
        Printer = 23 => "Printer",
        Scanner = 24 => "Scanner",
        Camera = 25 => "Camera",
        Wearable = 26 => "Wearable",
        Toy = 27 => "Toy",
        BluetoothGeneric = 28 => "Bluetooth Generic",
    }
}

upower_enum! {
    /// The `Technology` property of a battery.
    Technology("battery technology") {
        Unknown = 0 => "Unknown",
        LithiumIon = 1 => "Lithium ion",
        LithiumPolymer = 2 => "Lithium polymer",
        LithiumIronPhosphate = 3 => "Lithium iron phosphate",
        LeadAcid = 4 => "Lead acid",
        NickelCadmium = 5 => "Nickel cadmium",
        NickelMetalHydride = 6 => "Nickel metal hydride",
    }
}

upower_enum! {
    /// The `WarningLevel` property of a device.
    WarningLevel("warning level") {
        Unknown = 0 => "Unknown",
        None = 1 => "None",
        Discharging = 2 => "Discharging",
        Low = 3 => "Low",
        Critical = 4 => "Critical",
        Action = 5 => "Action",
    }
}

upower_enum! {
    /// The `BatteryLevel` property, for devices reporting coarse levels instead of a
    /// percentage. `None` means the device reports a percentage. Codes 2 and 5 are
    /// unused by the daemon.
    BatteryLevel("battery level") {
        Unknown = 0 => "Unknown",
        None = 1 => "None",
        Low = 3 => "Low",
        Critical = 4 => "Critical",
        Normal = 6 => "Normal",
        High = 7 => "High",
        Full = 8 => "Full",
    }
}

/// Which series `GetHistory` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryKind {
    Rate,
    Charge,
    TimeFull,
    TimeEmpty,
}

impl HistoryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rate => "rate",
            Self::Charge => "charge",
            Self::TimeFull => "time-full",
            Self::TimeEmpty => "time-empty",
        }
    }
}

/// Which profile `GetStatistics` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatisticsKind {
    Charging,
    Discharging,
}

impl StatisticsKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Charging => "charging",
            Self::Discharging => "discharging",
        }
    }
}
