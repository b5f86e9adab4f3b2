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

//! Connection ownership and interface resolution.
//!
//! A [`BusSession`] holds at most one [`Connection`]. It starts unconnected and moves to
//! connected once, either through [`BusSession::connect`] or by adopting an existing
//! connection with [`BusSession::from_connection`]. Resolving an interface never caches:
//! each call introspects the object again and returns a fresh [`RemoteInterface`].

use crate::config::{self, BusAddress};
use crate::error::{UPowerError, is_unknown_object};
use log::{debug, trace};
use std::future::Future;
use zbus::fdo::IntrospectableProxy;
use zbus::names::InterfaceName;
use zbus::proxy::{CacheProperties, Defaults as ProxyDefault};
use zbus::zvariant::ObjectPath;
use zbus::{Connection, Proxy, connection};
use zbus_xml::Node;

/// How a caller reacts to a remote object lacking the requested interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Absence is an error.
    Required,
    /// Absence resolves to `None`; the caller substitutes its documented default.
    /// Transport faults still propagate.
    Optional,
}

#[derive(Debug, Default)]
pub struct BusSession {
    address: BusAddress,
    connection: Option<Connection>,
}

impl BusSession {
    /// An unconnected session targeting the system bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// An unconnected session targeting `address`.
    pub fn with_address(address: BusAddress) -> Self {
        BusSession {
            address,
            connection: None,
        }
    }

    /// A session that is already connected through `connection`.
    pub fn from_connection(connection: Connection) -> Self {
        BusSession {
            address: BusAddress::default(),
            connection: Some(connection),
        }
    }

    pub fn address(&self) -> &BusAddress {
        &self.address
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// Establish the connection. Calling this on a connected session does nothing.
    pub async fn connect(&mut self) -> Result<(), UPowerError> {
        if self.connection.is_some() {
            debug!("bus session already connected, keeping the existing connection");
            return Ok(());
        }
        let connection = match &self.address {
            BusAddress::System => Connection::system().await?,
            BusAddress::Session => Connection::session().await?,
            BusAddress::Address(address) => {
                connection::Builder::address(address.as_str())?
                    .build()
                    .await?
            }
        };
        debug!(
            "connected to the {} as {:?}",
            self.address,
            connection.unique_name()
        );
        self.connection = Some(connection);
        Ok(())
    }

    pub fn connection(&self) -> Result<&Connection, UPowerError> {
        self.connection.as_ref().ok_or(UPowerError::NotConnected)
    }

    /// Resolve `interface` on the UPower object at `path`, failing if it is absent.
    pub async fn resolve(&self, path: &str, interface: &str) -> Result<RemoteInterface, UPowerError> {
        let connection = self.connection()?;
        trace!("introspecting {path} for {interface}");
        let introspectable = IntrospectableProxy::builder(connection)
            .destination(config::UPOWER_SERVICE)?
            .path(path)?
            .cache_properties(CacheProperties::No)
            .build()
            .await?;
        let xml = match introspectable.introspect().await {
            Ok(xml) => xml,
            Err(e) => {
                let e = zbus::Error::from(e);
                if is_unknown_object(&e) {
                    return Err(UPowerError::not_found(path, interface));
                }
                return Err(e.into());
            }
        };
        if !lists_interface(path, &xml, interface)? {
            return Err(UPowerError::not_found(path, interface));
        }

        Ok(RemoteInterface {
            connection: connection.clone(),
            path: ObjectPath::try_from(path.to_string()).map_err(zbus::Error::from)?,
            interface: InterfaceName::try_from(interface.to_string())
                .map_err(zbus::Error::from)?,
        })
    }

    /// Resolve `interface` on `path` under the given requirement.
    ///
    /// With [`Requirement::Optional`] only a missing interface (or a missing object)
    /// becomes `Ok(None)`. Everything else, including transport faults, is returned as
    /// an error whatever the requirement.
    pub async fn resolve_with(
        &self,
        path: &str,
        interface: &str,
        requirement: Requirement,
    ) -> Result<Option<RemoteInterface>, UPowerError> {
        match self.resolve(path, interface).await {
            Ok(remote) => Ok(Some(remote)),
            Err(e) if e.is_not_found() && requirement == Requirement::Optional => {
                debug!("{interface} is not available on {path}, treating it as unsupported");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

/// Whether the introspection data of `path` lists `interface`.
fn lists_interface(path: &str, xml: &str, interface: &str) -> Result<bool, UPowerError> {
    let node = Node::from_reader(xml.as_bytes()).map_err(|e| UPowerError::Introspection {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    Ok(node
        .interfaces()
        .iter()
        .any(|i| i.name().as_str() == interface))
}

/// An interface known to be implemented by a UPower object.
///
/// Typed proxies built from it go straight to the daemon; nothing is cached.
#[derive(Debug, Clone)]
pub struct RemoteInterface {
    connection: Connection,
    path: ObjectPath<'static>,
    interface: InterfaceName<'static>,
}

impl RemoteInterface {
    pub fn path(&self) -> &ObjectPath<'_> {
        &self.path
    }

    pub fn interface(&self) -> &InterfaceName<'_> {
        &self.interface
    }

    /// A non-caching proxy of type `P` bound to this object and interface.
    ///
    /// `P` must be the proxy generated for [`interface`](Self::interface), e.g.
    /// [`DeviceProxy`](crate::proxies::device_proxy::DeviceProxy) for a device.
    pub async fn proxy<'p, P>(&'p self) -> Result<P, UPowerError>
    where
        P: ProxyDefault + From<Proxy<'p>>,
    {
        trace!("building a {} proxy for {}", self.interface, self.path);
        let proxy = zbus::proxy::Builder::<P>::new(&self.connection)
            .destination(config::UPOWER_SERVICE)?
            .path(self.path.as_str())?
            .interface(self.interface.as_str())?
            .cache_properties(CacheProperties::No)
            .build()
            .await?;
        Ok(proxy)
    }

    /// Await one property read, reporting a failure against `property` of this object.
    pub async fn read<T, F>(&self, property: &'static str, read: F) -> Result<T, UPowerError>
    where
        F: Future<Output = zbus::Result<T>>,
    {
        read.await.map_err(|source| UPowerError::Property {
            path: self.path.to_string(),
            interface: self.interface.to_string(),
            property: property.to_string(),
            source,
        })
    }
}
