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

use regex::Regex;
use tracing::debug;

use crate::uri::datamodel::{UAuthority, UEntity, UResource, UUri};
use crate::uri::serializer::UriSerializer;
use crate::uri::validator::UriValidator;

/// `UriSerializer` that serializes a `UUri` to a string (long format) per
/// <https://github.com/eclipse-uprotocol/uprotocol-spec/blob/main/basics/uri.adoc>
pub struct LongUriSerializer;

impl UriSerializer<String> for LongUriSerializer {
    fn serialize(uri: &UUri) -> String {
        if UriValidator::is_empty(uri) {
            debug!("URI is empty, nothing to serialize");
            return String::new();
        }

        let mut output = String::default();
        if let Some(authority) = uri.authority.as_ref() {
            output.push_str(&Self::build_authority_part_of_uri(authority));
        }
        output.push('/');
        if let Some(entity) = uri.entity.as_ref() {
            output.push_str(&Self::build_entity_part_of_uri(entity));
        }
        output.push_str(&Self::build_resource_part_of_uri(uri));

        // remove trailing slashes
        Regex::new(r"/+$")
            .unwrap()
            .replace_all(&output, "")
            .into_owned()
    }

    /// Create a `UUri` data object from a long format uProtocol URI string.
    ///
    /// # Arguments
    ///
    /// * `uprotocol_uri` - The uProtocol URI string to be parsed.
    ///
    /// # Returns
    ///
    /// Returns the `UUri` data object created from the given uProtocol URI string,
    /// or [`UUri::EMPTY`] if the string does not parse.
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
        let uri_parts = Self::java_split(&uri, "/");

        if uri_parts.len() < 2 {
            debug!("URI is invalid [{}]", uprotocol_uri);
            return UUri::EMPTY;
        }

        #[allow(unused_assignments)]
        let mut name: String = String::default();
        let mut version: String = String::default();
        let mut resource: Option<UResource> = None;
        let mut authority: Option<UAuthority> = None;

        if is_local {
            name = uri_parts.get(1).cloned().unwrap_or_default();
            if uri_parts.len() > 2 {
                version = uri_parts.get(2).cloned().unwrap_or_default();
            }
            if uri_parts.len() > 3 {
                resource = uri_parts.get(3).map(|part| UResource::from(part.as_str()));
            }
        } else {
            if uri_parts.len() > 2 {
                let authority_name = uri_parts.get(2).cloned().unwrap_or_default();
                if authority_name.trim().is_empty() {
                    debug!("URI is invalid [{}]", uprotocol_uri);
                    return UUri::EMPTY;
                }
                authority = Some(UAuthority {
                    name: Some(authority_name),
                    ..Default::default()
                });
            }
            if uri_parts.len() > 3 {
                name = uri_parts.get(3).cloned().unwrap_or_default();
                if uri_parts.len() > 4 {
                    version = uri_parts.get(4).cloned().unwrap_or_default();
                }
                if uri_parts.len() > 5 {
                    resource = uri_parts.get(5).map(|part| UResource::from(part.as_str()));
                }
            } else {
                return UUri {
                    authority,
                    ..Default::default()
                };
            }
        }

        // The version segment is either a number or absent, an empty segment stays None.
        let mut ve: Option<u32> = None;
        if !version.is_empty() {
            if let Ok(version) = version.parse::<u32>() {
                ve = Some(version);
            } else {
                debug!("URI contains a non-numeric version [{}]", uprotocol_uri);
                return UUri::EMPTY;
            }
        }

        let entity = UEntity {
            name,
            version_major: ve,
            ..Default::default()
        };

        UUri {
            entity: Some(entity),
            authority,
            resource,
        }
    }
}

impl LongUriSerializer {
    /// Creates the resource part of the uProtocol URI from a `UUri` object.
    ///
    /// # Parameters
    ///
    /// - `uri`: A `UUri` object whose resource, such as a Door, is serialized.
    ///
    /// # Returns
    ///
    /// Returns a `String` representing the resource part of the uProtocol URI.
    fn build_resource_part_of_uri(uri: &UUri) -> String {
        let mut output = String::default();

        if let Some(resource) = uri.resource.as_ref() {
            output.push('/');
            output.push_str(&resource.name);

            if let Some(instance) = &resource.instance {
                output.push('.');
                output.push_str(instance);
            }
            if let Some(message) = &resource.message {
                output.push('#');
                output.push_str(message);
            }
        }

        output
    }

    /// Creates the service part of the uProtocol URI from a `UEntity` object representing a service or an application.
    ///
    /// # Parameters
    ///
    /// - `entity`: A `UEntity` object that represents a service or an application.
    ///
    /// # Returns
    ///
    /// Returns a `String` representing the service part of the uProtocol URI.
    fn build_entity_part_of_uri(entity: &UEntity) -> String {
        let mut output = String::from(entity.name.trim());
        output.push('/');

        if let Some(version) = entity.version_major {
            output.push_str(&version.to_string());
        }

        output
    }

    /// Creates the authority part of the uProtocol URI from an authority object.
    ///
    /// # Arguments
    /// * `authority` - Represents the deployment location of a specific Software Entity.
    ///
    /// # Returns
    /// Returns the `String` representation of the `Authority` in the uProtocol URI.
    fn build_authority_part_of_uri(authority: &UAuthority) -> String {
        let mut output = String::from("//");
        if let Some(name) = authority.name.as_ref() {
            output.push_str(name.as_str());
        }
        output
    }

    // This function is meant to replicate the behavior of the Java
    // `String[] java.lang.String.split(String regex)` method.
    fn java_split(input: &str, pattern: &str) -> Vec<String> {
        let mut result: Vec<String> = input
            .split(pattern)
            .map(std::string::ToString::to_string)
            .collect();

        // Remove trailing empty strings, to emulate Java's behavior
        while let Some(last) = result.last() {
            if last.is_empty() {
                result.pop();
            } else {
                break;
            }
        }
        result
    }
}
