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

use crate::uri::datamodel::UUri;
use crate::uri::serializer::{LongUriSerializer, MicroUriSerializer};
use crate::uri::validator::UriValidator;

/// `UUri`s are used in transport layers and hence need to be serialized.
///
/// Each transport supports different serialization formats. For more information,
/// please refer to the [uProtocol URI specification](https://github.com/eclipse-uprotocol/uprotocol-spec/blob/main/basics/uri.adoc).
///
/// The serializers never fail: input that cannot be serialized yields a zero-length
/// output, input that cannot be deserialized yields [`UUri::EMPTY`]. Callers check
/// for emptiness instead of handling errors.
///
/// # Type Parameters
/// * `T`: The data structure that the `UUri` will be serialized into.
///   For example, `String` or `Vec<u8>` (to represent byte arrays).
pub trait UriSerializer<T> {
    /// Deserialize from the format to a `UUri`.
    ///
    /// # Arguments
    /// * `uri` - The serialized `UUri` in format `T`.
    ///
    /// # Returns
    /// Returns the deserialized `UUri` object, or [`UUri::EMPTY`] if the input is not
    /// a valid serialized `UUri`.
    fn deserialize(uri: T) -> UUri;

    /// Serializes a `UUri` into a specific serialization format.
    ///
    /// # Arguments
    /// * `uri` - The `UUri` object to be serialized into the format `T`.
    ///
    /// # Returns
    /// Returns the serialized `UUri` in the specified format, or a zero-length value
    /// if the `UUri` cannot be represented in that format.
    fn serialize(uri: &UUri) -> T;

    /// Builds a fully resolved `UUri` from the serialized long format and the serialized micro format.
    ///
    /// # Arguments
    /// * `long_uri` - `UUri` serialized as a string.
    /// * `micro_uri` - `UUri` serialized as a byte slice.
    ///
    /// # Returns
    /// Returns an `Option<UUri>` object serialized from one of the forms. Returns `None` if the URI
    /// cannot be resolved.
    fn build_resolved(long_uri: &str, micro_uri: &[u8]) -> Option<UUri> {
        if long_uri.is_empty() && micro_uri.is_empty() {
            return Some(UUri {
                ..Default::default()
            });
        }

        let long_uri = LongUriSerializer::deserialize(long_uri.to_string());
        let micro_uri = MicroUriSerializer::deserialize(micro_uri.to_vec());

        let mut auth = micro_uri.authority.unwrap_or_default();
        let mut ue = micro_uri.entity.unwrap_or_default();
        let mut ure = long_uri.resource.unwrap_or_default();

        if let Some(authority) = long_uri.authority.as_ref() {
            if let Some(name) = authority.get_name() {
                auth.name = Some(name.to_owned());
            }
        }
        if let Some(entity) = long_uri.entity.as_ref() {
            ue.name = entity.name.clone();
        }
        if let Some(resource) = micro_uri.resource.as_ref() {
            ure.id = resource.id;
        }

        let uri = UUri {
            authority: Some(auth),
            entity: Some(ue),
            resource: Some(ure),
        };

        UriValidator::is_resolved(&uri).then_some(uri)
    }
}
