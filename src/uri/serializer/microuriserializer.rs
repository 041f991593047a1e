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

use bytes::{Buf, BufMut};
use tracing::debug;

use crate::uri::datamodel::{AddressType, Number, UAuthority, UEntity, UResource, UUri};
use crate::uri::serializer::UriSerializer;
use crate::uri::validator::UriValidator;

const LOCAL_MICRO_URI_LENGTH: usize = 8; // local micro URI length
const IPV4_MICRO_URI_LENGTH: usize = 12; // IPv4 micro URI length
const IPV6_MICRO_URI_LENGTH: usize = 24; // IPv6 micro URI length
const UP_VERSION: u8 = 0x1; // UP version

/// `UriSerializer` that serializes a `UUri` to byte[] (micro format) per
///  <https://github.com/eclipse-uprotocol/uprotocol-spec/blob/main/basics/uri.adoc>
pub struct MicroUriSerializer;

impl UriSerializer<Vec<u8>> for MicroUriSerializer {
    /// Serializes a `UUri` into a `Vec<u8>` following the Micro-URI specifications.
    ///
    /// # Parameters
    /// * `uri`: A reference to the `UUri` data object.
    ///
    /// # Returns
    /// A `Vec<u8>` representing the serialized `UUri`, empty if the URI
    /// cannot be expressed in micro form.
    #[allow(clippy::cast_possible_truncation)]
    fn serialize(uri: &UUri) -> Vec<u8> {
        if UriValidator::is_empty(uri) || !UriValidator::is_micro_form(uri) {
            debug!("URI is empty or not in micro form");
            return Vec::new();
        }

        let mut buf = vec![];
        let mut address_type = AddressType::Local;
        let mut authority_id: Option<Vec<u8>> = None;
        let mut remote_ip: Option<Vec<u8>> = None;

        // UP_VERSION
        buf.put_u8(UP_VERSION);

        // ADDRESS_TYPE
        if let Some(authority) = uri.authority.as_ref() {
            if let Some(id) = authority.get_id() {
                authority_id = Some(id.to_vec());
                address_type = AddressType::ID;
            } else if let Some(ip) = authority.get_ip() {
                match ip.len() {
                    4 => address_type = AddressType::IPv4,
                    16 => address_type = AddressType::IPv6,
                    _ => {
                        debug!("Invalid IP address");
                        return Vec::new();
                    }
                }
                remote_ip = Some(ip.to_vec());
            }
        }

        buf.put_u8(address_type.value());

        // URESOURCE_ID
        if let Some(id) = uri.resource.as_ref().and_then(|resource| resource.id) {
            buf.put_u16(id as u16);
        }

        // UENTITY_ID
        if let Some(id) = uri.entity.as_ref().and_then(|entity| entity.id) {
            buf.put_u16(id as u16);
        }

        // UENTITY_VERSION
        let version = uri
            .entity
            .as_ref()
            .and_then(|entity| entity.version_major)
            .unwrap_or(0);
        buf.put_u8(version as u8);

        // UNUSED
        buf.put_u8(0);

        // UAUTHORITY
        if address_type != AddressType::Local {
            if let Some(id) = authority_id {
                buf.put_u8(id.len() as u8);
                buf.put_slice(&id);
            } else if let Some(ip) = remote_ip {
                buf.put_slice(&ip);
            }
        }
        buf
    }

    /// Creates a `UUri` data object from a uProtocol micro URI.
    ///
    /// # Arguments
    ///
    /// * `micro_uri` - A byte vec representing the uProtocol micro URI.
    ///
    /// # Returns
    ///
    /// Returns the decoded `UUri` data object, or [`UUri::EMPTY`] if the bytes
    /// are not a well formed micro URI.
    fn deserialize(micro_uri: Vec<u8>) -> UUri {
        if micro_uri.len() < LOCAL_MICRO_URI_LENGTH {
            debug!("URI is empty or not in micro form");
            return UUri::EMPTY;
        }

        let mut buf = micro_uri.as_slice();
        // Need to be version 1
        if buf.get_u8() != UP_VERSION {
            debug!("URI is not of expected uProtocol version {}", UP_VERSION);
            return UUri::EMPTY;
        }
        let address_type = match AddressType::from_value(buf.get_u8()) {
            Some(address_type) => address_type,
            None => {
                debug!("URI has an unknown address type");
                return UUri::EMPTY;
            }
        };

        match address_type {
            AddressType::Local => {
                if micro_uri.len() != LOCAL_MICRO_URI_LENGTH {
                    debug!("Invalid micro URI length");
                    return UUri::EMPTY;
                }
            }
            AddressType::IPv4 => {
                if micro_uri.len() != IPV4_MICRO_URI_LENGTH {
                    debug!("Invalid micro URI length");
                    return UUri::EMPTY;
                }
            }
            AddressType::IPv6 => {
                if micro_uri.len() != IPV6_MICRO_URI_LENGTH {
                    debug!("Invalid micro URI length");
                    return UUri::EMPTY;
                }
            }
            AddressType::ID => {
                // the length of the authority ID is carried in the byte following
                // the fixed part
                let id_length = micro_uri.get(LOCAL_MICRO_URI_LENGTH).copied().unwrap_or(0);
                if id_length == 0
                    || micro_uri.len() != LOCAL_MICRO_URI_LENGTH + 1 + id_length as usize
                {
                    debug!("Invalid micro URI length");
                    return UUri::EMPTY;
                }
            }
        }

        // RESOURCE
        let uresource_id = u32::from(buf.get_u16());
        let resource = Some(UResource {
            id: Some(uresource_id),
            ..Default::default()
        });

        // UENTITY
        let ue_id = buf.get_u16();
        let ue_version = buf.get_u8();
        let entity = Some(UEntity {
            id: Some(ue_id.into()),
            version_major: if ue_version == 0 {
                None
            } else {
                Some(u32::from(ue_version))
            },
            ..Default::default()
        });

        // skip unused byte
        buf.advance(1);

        // Calculate uAuthority
        let authority = match address_type {
            AddressType::IPv4 => {
                let ip4_address = buf.copy_to_bytes(4);
                Some(UAuthority {
                    number: Some(Number::Ip(ip4_address.into())),
                    ..Default::default()
                })
            }
            AddressType::IPv6 => {
                let ip6_address = buf.copy_to_bytes(16);
                Some(UAuthority {
                    number: Some(Number::Ip(ip6_address.into())),
                    ..Default::default()
                })
            }
            AddressType::ID => {
                let length = buf.get_u8();
                let authority_id = buf.copy_to_bytes(length as usize);
                Some(UAuthority {
                    number: Some(Number::Id(authority_id.into())),
                    ..Default::default()
                })
            }
            AddressType::Local => None,
        };

        UUri {
            authority,
            entity,
            resource,
        }
    }
}
