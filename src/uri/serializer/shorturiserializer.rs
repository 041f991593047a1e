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

use std::net::IpAddr;

use tracing::debug;

use crate::uri::datamodel::{Number, UAuthority, UEntity, UResource, UUri};
use crate::uri::serializer::UriSerializer;
use crate::uri::validator::UriValidator;

/// `UriSerializer` that serializes a `UUri` to a short format string per
/// <https://github.com/eclipse-uprotocol/uprotocol-spec/blob/main/basics/uri.adoc>
///
/// The short format carries the same positional segments as the long format
/// but uses decimal ids in place of names. An authority is rendered as an IP
/// literal or an opaque textual id.
pub struct ShortUriSerializer;

impl UriSerializer<String> for ShortUriSerializer {
    /// Serializes a `UUri` object into its short URI format.
    ///
    /// # Arguments
    ///
    /// * `uri` - A `UUri` object to be serialized to the short URI format.
    ///
    /// # Returns
    ///
    /// The short URI formatted string of the supplied `UUri`, empty if the URI
    /// cannot be expressed in short form.
    fn serialize(uri: &UUri) -> String {
        if UriValidator::is_empty(uri) {
            debug!("URI is empty, nothing to serialize");
            return String::new();
        }

        let mut output = String::default();
        if let Some(authority) = uri.authority.as_ref() {
            if let Some(ip) = authority.get_ip() {
                match Self::format_ip_address(ip) {
                    Some(address) => {
                        output.push_str("//");
                        output.push_str(&address);
                    }
                    None => {
                        debug!("URI contains an IP address of invalid length");
                        return String::new();
                    }
                }
            } else if let Some(id) = authority.get_id() {
                match String::from_utf8(id.to_vec()) {
                    Ok(id) => {
                        output.push_str("//");
                        output.push_str(&id);
                    }
                    Err(_) => {
                        debug!("URI contains an authority ID that is not valid UTF-8");
                        return String::new();
                    }
                }
            } else if authority.has_name() {
                debug!("URI authority has neither IP address nor ID, cannot be expressed in short form");
                return String::new();
            }
        }
        output.push('/');
        let mut has_entity_id = false;
        if let Some(entity) = uri.entity.as_ref() {
            output.push_str(&Self::build_entity_part_of_uri(entity));
            has_entity_id = entity.has_id();
        }
        // the resource id is positional, it must not appear without an entity id
        if has_entity_id {
            output.push_str(&Self::build_resource_part_of_uri(uri));
        }

        output.trim_end_matches('/').to_string()
    }

    /// Deserializes a short format string into a `UUri` object.
    ///
    /// # Arguments
    ///
    /// * `uprotocol_uri` - A short format uProtocol URI string.
    ///
    /// # Returns
    ///
    /// A `UUri` data object constructed from the provided string, or
    /// [`UUri::EMPTY`] if the string does not parse.
    fn deserialize(uprotocol_uri: String) -> UUri {
        if uprotocol_uri.is_empty() {
            debug!("URI is empty, nothing to deserialize");
            return UUri::EMPTY;
        }

        let uri = if let Some((_, rest)) = uprotocol_uri.split_once(':') {
            rest.to_string()
        } else {
            uprotocol_uri.replace('\\', "/")
        };
        let is_local: bool = !uri.starts_with("//");

        let uri_parts: Vec<&str> = uri.split('/').collect();

        if uri_parts.len() < 2 {
            debug!("URI is invalid [{}]", uprotocol_uri);
            return UUri::EMPTY;
        }

        let mut entity_id_part = "";
        let mut version_part = "";
        let mut resource_part = "";
        let mut authority: Option<UAuthority> = None;

        if is_local {
            if uri_parts.len() > 4 {
                debug!("URI has too many segments [{}]", uprotocol_uri);
                return UUri::EMPTY;
            }
            entity_id_part = uri_parts.get(1).copied().unwrap_or_default();
            version_part = uri_parts.get(2).copied().unwrap_or_default();
            resource_part = uri_parts.get(3).copied().unwrap_or_default();
        } else {
            if uri_parts.len() > 6 {
                debug!("URI has too many segments [{}]", uprotocol_uri);
                return UUri::EMPTY;
            }
            let authority_part = uri_parts.get(2).copied().unwrap_or_default();
            if authority_part.trim().is_empty() {
                debug!("URI is invalid [{}]", uprotocol_uri);
                return UUri::EMPTY;
            }
            authority = Some(Self::parse_authority(authority_part));
            if uri_parts.len() > 3 {
                entity_id_part = uri_parts.get(3).copied().unwrap_or_default();
                version_part = uri_parts.get(4).copied().unwrap_or_default();
                resource_part = uri_parts.get(5).copied().unwrap_or_default();
            } else {
                return UUri {
                    authority,
                    ..Default::default()
                };
            }
        }

        let mut entity_id: Option<u32> = None;
        if !entity_id_part.trim().is_empty() {
            match entity_id_part.parse::<u16>() {
                Ok(parsed) => entity_id = Some(u32::from(parsed)),
                Err(_) => {
                    debug!("URI contains a non-numeric entity ID [{}]", uprotocol_uri);
                    return UUri::EMPTY;
                }
            }
        }

        let mut version: Option<u32> = None;
        if !version_part.trim().is_empty() {
            match version_part.parse::<u8>() {
                Ok(parsed) => version = Some(u32::from(parsed)),
                Err(_) => {
                    debug!("URI contains an invalid version [{}]", uprotocol_uri);
                    return UUri::EMPTY;
                }
            }
        }

        let mut resource: Option<UResource> = None;
        if !resource_part.trim().is_empty() {
            match resource_part.parse::<u16>() {
                Ok(parsed) => {
                    resource = Some(UResource {
                        id: Some(u32::from(parsed)),
                        ..Default::default()
                    });
                }
                Err(_) => {
                    debug!("URI contains a non-numeric resource ID [{}]", uprotocol_uri);
                    return UUri::EMPTY;
                }
            }
        }

        let entity = if entity_id.is_some() || version.is_some() {
            Some(UEntity {
                id: entity_id,
                version_major: version,
                ..Default::default()
            })
        } else {
            None
        };

        UUri {
            authority,
            entity,
            resource,
        }
    }
}

impl ShortUriSerializer {
    fn build_resource_part_of_uri(uri: &UUri) -> String {
        let mut output = String::default();
        if let Some(id) = uri.resource.as_ref().and_then(|resource| resource.id) {
            output.push('/');
            output.push_str(&id.to_string());
        }
        output
    }

    // An entity without an id has no short form, the version would otherwise
    // shift into the id position.
    fn build_entity_part_of_uri(entity: &UEntity) -> String {
        let mut output = String::default();
        if let Some(id) = entity.id {
            output.push_str(&id.to_string());
            output.push('/');
            if let Some(version) = entity.version_major {
                output.push_str(&version.to_string());
            }
        }
        output
    }

    fn format_ip_address(ip: &[u8]) -> Option<String> {
        match ip.len() {
            4 => {
                let octets: [u8; 4] = ip.try_into().ok()?;
                Some(IpAddr::from(octets).to_string())
            }
            16 => {
                let octets: [u8; 16] = ip.try_into().ok()?;
                Some(IpAddr::from(octets).to_string())
            }
            _ => None,
        }
    }

    fn parse_authority(authority_part: &str) -> UAuthority {
        match authority_part.parse::<IpAddr>() {
            Ok(IpAddr::V4(address)) => UAuthority {
                number: Some(Number::Ip(address.octets().to_vec())),
                ..Default::default()
            },
            Ok(IpAddr::V6(address)) => UAuthority {
                number: Some(Number::Ip(address.octets().to_vec())),
                ..Default::default()
            },
            Err(_) => UAuthority {
                number: Some(Number::Id(authority_part.as_bytes().to_vec())),
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_serialize_empty_uuri() {
        let uri = ShortUriSerializer::serialize(&UUri::default());
        assert_eq!("", uri);
    }

    #[test]
    fn test_serialize_local_uri() {
        let uri = UUri {
            entity: Some(UEntity {
                id: Some(1),
                version_major: Some(2),
                ..Default::default()
            }),
            resource: Some(UResource {
                id: Some(3),
                ..Default::default()
            }),
            ..Default::default()
        };
        let uristr = ShortUriSerializer::serialize(&uri);
        assert_eq!("/1/2/3", uristr);
        let uri2 = ShortUriSerializer::deserialize(uristr);
        assert_eq!(uri, uri2);
    }

    #[test]
    fn test_serialize_local_uri_without_version() {
        let uri = UUri {
            entity: Some(UEntity {
                id: Some(2),
                ..Default::default()
            }),
            resource: Some(UResource {
                id: Some(4),
                ..Default::default()
            }),
            ..Default::default()
        };
        let uristr = ShortUriSerializer::serialize(&uri);
        assert_eq!("/2//4", uristr);
        let uri2 = ShortUriSerializer::deserialize(uristr);
        assert_eq!(uri, uri2);
    }

    #[test]
    fn test_serialize_local_uri_without_resource() {
        let uri = UUri {
            entity: Some(UEntity {
                id: Some(2),
                version_major: Some(1),
                ..Default::default()
            }),
            ..Default::default()
        };
        let uristr = ShortUriSerializer::serialize(&uri);
        assert_eq!("/2/1", uristr);
    }

    #[test]
    fn test_serialize_remote_uri_with_ipv4_authority() {
        let address: Ipv4Addr = "10.0.3.3".parse().unwrap();
        let uri = UUri {
            authority: Some(UAuthority {
                number: Some(Number::Ip(address.octets().to_vec())),
                ..Default::default()
            }),
            entity: Some(UEntity {
                id: Some(29999),
                version_major: Some(254),
                ..Default::default()
            }),
            resource: Some(UResource {
                id: Some(19999),
                ..Default::default()
            }),
        };
        let uristr = ShortUriSerializer::serialize(&uri);
        assert_eq!("//10.0.3.3/29999/254/19999", uristr);
        let uri2 = ShortUriSerializer::deserialize(uristr);
        assert_eq!(uri, uri2);
    }

    #[test]
    fn test_serialize_remote_uri_with_ipv6_authority() {
        let address: Ipv6Addr = "2001:0db8:85a3:0000:0000:8a2e:0370:7334".parse().unwrap();
        let uri = UUri {
            authority: Some(UAuthority {
                number: Some(Number::Ip(address.octets().to_vec())),
                ..Default::default()
            }),
            entity: Some(UEntity {
                id: Some(29999),
                version_major: Some(254),
                ..Default::default()
            }),
            resource: Some(UResource {
                id: Some(19999),
                ..Default::default()
            }),
        };
        let uristr = ShortUriSerializer::serialize(&uri);
        assert_eq!("//2001:db8:85a3::8a2e:370:7334/29999/254/19999", uristr);
        let uri2 = ShortUriSerializer::deserialize(uristr);
        assert_eq!(uri, uri2);
    }

    #[test]
    fn test_serialize_remote_uri_with_id_authority() {
        let uri = UUri {
            authority: Some(UAuthority {
                number: Some(Number::Id("steven".as_bytes().to_vec())),
                ..Default::default()
            }),
            entity: Some(UEntity {
                id: Some(1),
                version_major: Some(2),
                ..Default::default()
            }),
            resource: Some(UResource {
                id: Some(3),
                ..Default::default()
            }),
        };
        let uristr = ShortUriSerializer::serialize(&uri);
        assert_eq!("//steven/1/2/3", uristr);
        let uri2 = ShortUriSerializer::deserialize(uristr);
        assert_eq!(uri, uri2);
    }

    #[test]
    fn test_serialize_remote_uri_with_named_authority() {
        let uri = UUri {
            authority: Some(UAuthority {
                name: Some(String::from("vcu.my_car_vin")),
                ..Default::default()
            }),
            entity: Some(UEntity {
                id: Some(1),
                version_major: Some(2),
                ..Default::default()
            }),
            resource: Some(UResource {
                id: Some(3),
                ..Default::default()
            }),
        };
        let uristr = ShortUriSerializer::serialize(&uri);
        assert!(uristr.is_empty());
    }

    #[test]
    fn test_serialize_uri_with_entity_missing_id() {
        let uri = UUri {
            entity: Some(UEntity {
                name: "kaputt".to_string(),
                ..Default::default()
            }),
            resource: Some(UResource {
                id: Some(3),
                ..Default::default()
            }),
            ..Default::default()
        };
        let uristr = ShortUriSerializer::serialize(&uri);
        assert!(uristr.is_empty());
    }

    #[test]
    fn test_deserialize_empty_string() {
        let uri = ShortUriSerializer::deserialize("".to_string());
        assert_eq!(UUri::EMPTY, uri);
    }

    #[test]
    fn test_deserialize_string_with_no_slashes() {
        let uri = ShortUriSerializer::deserialize("abc".to_string());
        assert_eq!(UUri::EMPTY, uri);
    }

    #[test]
    fn test_deserialize_string_with_blank_authority() {
        let uri = ShortUriSerializer::deserialize("///2".to_string());
        assert_eq!(UUri::EMPTY, uri);
    }

    #[test]
    fn test_deserialize_authority_only() {
        let uri = ShortUriSerializer::deserialize("//vcu.vin".to_string());
        assert_eq!(
            Some("vcu.vin".as_bytes()),
            uri.authority.as_ref().unwrap().get_id()
        );
        assert!(uri.entity.is_none());
        assert!(uri.resource.is_none());
    }

    #[test]
    fn test_deserialize_ipv4_authority_only() {
        let uri = ShortUriSerializer::deserialize("//192.168.1.100".to_string());
        let address: Ipv4Addr = "192.168.1.100".parse().unwrap();
        let octets = address.octets();
        assert_eq!(
            Some(octets.as_slice()),
            uri.authority.as_ref().unwrap().get_ip()
        );
    }

    #[test]
    fn test_deserialize_with_custom_scheme() {
        let uri = ShortUriSerializer::deserialize("custom:/1/2/3".to_string());
        assert_eq!(Some(1), uri.entity.as_ref().unwrap().id);
        assert_eq!(Some(2), uri.entity.as_ref().unwrap().version_major);
        assert_eq!(Some(3), uri.resource.as_ref().unwrap().id);
    }

    #[test]
    fn test_deserialize_string_with_invalid_entity_id() {
        let uri = ShortUriSerializer::deserialize("//vcu.vin/abc/1/2".to_string());
        assert_eq!(UUri::EMPTY, uri);
    }

    #[test]
    fn test_deserialize_string_with_entity_id_out_of_range() {
        let uri = ShortUriSerializer::deserialize("/65536/1/2".to_string());
        assert_eq!(UUri::EMPTY, uri);
    }

    #[test]
    fn test_deserialize_string_with_invalid_version() {
        let uri = ShortUriSerializer::deserialize("//vcu.vin/2/abc/2".to_string());
        assert_eq!(UUri::EMPTY, uri);
    }

    #[test]
    fn test_deserialize_string_with_invalid_resource_id() {
        let uri = ShortUriSerializer::deserialize("//vcu.vin/2/1/abc".to_string());
        assert_eq!(UUri::EMPTY, uri);
    }

    #[test]
    fn test_deserialize_local_string_with_too_many_segments() {
        let uri = ShortUriSerializer::deserialize("/1/2/3/4".to_string());
        assert_eq!(UUri::EMPTY, uri);
    }

    #[test]
    fn test_deserialize_remote_string_with_too_many_segments() {
        let uri = ShortUriSerializer::deserialize("//vcu.vin/1/2/3/4".to_string());
        assert_eq!(UUri::EMPTY, uri);
    }
}
