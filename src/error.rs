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

use zbus::fdo;

#[derive(Debug, thiserror::Error)]
pub enum UPowerError {
    #[error("UPowerError::NotConnected: the bus session is not connected, call connect() first")]
    NotConnected,
    #[error("UPowerError::InterfaceNotFound: {path} does not implement {interface}")]
    InterfaceNotFound { path: String, interface: String },
    #[error("UPowerError::Introspection: could not parse introspection data of {path}: {reason}")]
    Introspection { path: String, reason: String },
    #[error("UPowerError::Property: failed to read {interface}.{property} on {path}: {source}")]
    Property {
        path: String,
        interface: String,
        property: String,
        source: zbus::Error,
    },
    #[error("UPowerError::UnknownCode: {code} is not a known {kind} code")]
    UnknownCode { kind: &'static str, code: u32 },
    #[error("UPowerError::Bus: {0}")]
    Bus(#[from] zbus::Error),
}

impl UPowerError {
    pub(crate) fn not_found(path: &str, interface: &str) -> Self {
        UPowerError::InterfaceNotFound {
            path: path.to_string(),
            interface: interface.to_string(),
        }
    }

    /// True when the requested interface is absent from the remote object.
    pub fn is_not_found(&self) -> bool {
        matches!(self, UPowerError::InterfaceNotFound { .. })
    }
}

impl From<fdo::Error> for UPowerError {
    fn from(err: fdo::Error) -> Self {
        UPowerError::Bus(zbus::Error::from(err))
    }
}

/// Whether a bus error means the object path is not exported by the peer.
pub(crate) fn is_unknown_object(err: &zbus::Error) -> bool {
    match err {
        zbus::Error::FDO(e) => matches!(**e, fdo::Error::UnknownObject(_)),
        zbus::Error::MethodError(name, _, _) => {
            name.as_str() == "org.freedesktop.DBus.Error.UnknownObject"
        }
        _ => false,
    }
}
