/********************************************************************************
 * Copyright (c) 2023 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

use crate::uri::datamodel::UAuthority;
use crate::uri::datamodel::UEntity;
use crate::uri::datamodel::UResource;

/// `UUri` is a data representation of a uProtocol URI.
///
/// URIs are used as a method to uniquely identify devices, services, and resources on a network.
/// This struct is used to represent the source and sink (destination) of uProtocol messages.
/// Defining a common URI for the system allows applications and/or services to publish and
/// discover each other, as well as maintain a database/repository of microservices in various
/// vehicles.
///
/// # Example
///
/// ```ignore
/// //<authority>/<entity>/<version>/<resource>#<message>
/// ```
///
/// A `UUri` without an authority addresses an entity deployed on the local device.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct UUri {
    pub authority: Option<UAuthority>,
    pub entity: Option<UEntity>,
    pub resource: Option<UResource>,
}

impl UUri {
    /// An empty `UUri` instance.
    ///
    /// This is the canonical value the deserializers fall back to for input they cannot parse,
    /// and doesn't contain any information.
    pub const EMPTY: UUri = UUri {
        authority: None,
        entity: None,
        resource: None,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_uri() {
        let uri = UUri::EMPTY;
        assert!(uri.authority.is_none());
        assert!(uri.entity.is_none());
        assert!(uri.resource.is_none());
        assert_eq!(uri, UUri::default());
    }

    #[test]
    fn test_create_full_uri() {
        let uri = UUri {
            authority: Some(UAuthority {
                name: Some("vcu.my_car_vin".to_string()),
                ..Default::default()
            }),
            entity: Some(UEntity {
                name: "body.access".to_string(),
                ..Default::default()
            }),
            resource: Some(UResource {
                name: "door".to_string(),
                instance: Some("front_left".to_string()),
                message: Some("Door".to_string()),
                ..Default::default()
            }),
        };
        assert_eq!(
            Some("vcu.my_car_vin"),
            uri.authority.as_ref().and_then(|authority| authority.get_name())
        );
        assert_eq!("body.access", uri.entity.as_ref().map(|entity| entity.name.as_str()).unwrap());
        assert_eq!("door", uri.resource.as_ref().map(|resource| resource.name.as_str()).unwrap());
    }
}
