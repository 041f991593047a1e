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

use crate::types::ValidationResult;
use crate::uri::datamodel::{UAuthority, UEntity, UResource, UUri};

/// Struct to encapsulate Uri validation logic.
pub struct UriValidator;

impl UriValidator {
    /// The smallest resource id denoting a publish or notification topic.
    /// Resource ids below this value address RPC method slots.
    pub const MIN_TOPIC_ID: u32 = 0x8000;

    /// The reserved resource id of an RPC response.
    pub const RESOURCE_ID_RESPONSE: u32 = 0;

    /// Validates a `UUri` to ensure that it has at least a name for the uEntity.
    ///
    /// # Arguments
    /// * `uri` - The `UUri` to validate.
    ///
    /// # Returns
    /// Returns `ValidationResult` containing a success or a failure with one of the
    /// following messages:
    ///
    /// - "Uri is empty", if the `UUri` does not contain any information.
    /// - "Uri is remote missing uAuthority", if an authority is present but carries
    ///   neither a name nor a number.
    /// - "Uri is missing uSoftware Entity name", if the entity is absent or its name is blank.
    pub fn validate(uri: &UUri) -> ValidationResult {
        if Self::is_empty(uri) {
            return ValidationResult::failure("Uri is empty");
        }
        if uri.authority.is_some() && !Self::is_remote(uri) {
            return ValidationResult::failure("Uri is remote missing uAuthority");
        }
        if uri.entity.as_ref().map_or(true, |entity| !entity.has_name()) {
            return ValidationResult::failure("Uri is missing uSoftware Entity name");
        }
        ValidationResult::Success
    }

    /// Validates a `UUri` that is meant to be used as an RPC method URI.
    /// Used in Request sink values and Response source values.
    ///
    /// # Arguments
    /// * `uri` - The `UUri` to validate.
    ///
    /// # Returns
    /// Returns `ValidationResult` containing a success or a failure with the error message.
    pub fn validate_rpc_method(uri: &UUri) -> ValidationResult {
        let result = Self::validate(uri);
        if result.is_failure() {
            return result;
        }
        if !Self::is_rpc_method(uri) {
            return ValidationResult::failure("Invalid RPC method uri. Uri should be the method to be called, or method from response");
        }
        ValidationResult::Success
    }

    /// Validates a `UUri` that is meant to be used as an RPC response URI.
    /// This is used in Request source values and Response sink values.
    ///
    /// # Arguments
    /// * `uri` - The `UUri` to validate.
    ///
    /// # Returns
    /// Returns `ValidationResult` containing a success or a failure with the error message.
    pub fn validate_rpc_response(uri: &UUri) -> ValidationResult {
        let result = Self::validate(uri);
        if result.is_failure() {
            return result;
        }
        if !Self::is_rpc_response(uri) {
            return ValidationResult::failure("Invalid RPC response type");
        }
        ValidationResult::Success
    }

    /// Validates a `UUri` that is meant to be used as the topic of a publish or
    /// notification message.
    ///
    /// # Arguments
    /// * `uri` - The `UUri` to validate.
    ///
    /// # Returns
    /// Returns `ValidationResult` containing a success or a failure with the error message.
    pub fn validate_topic_uri(uri: &UUri) -> ValidationResult {
        let result = Self::validate(uri);
        if result.is_failure() {
            return result;
        }
        if uri
            .resource
            .as_ref()
            .map_or(true, |resource| !resource.has_name())
        {
            return ValidationResult::failure("UriPart is missing uResource name");
        }
        if !Self::is_topic(uri) {
            return ValidationResult::failure(
                "Invalid topic uri. UriPart should be the topic to be published or subscribed to",
            );
        }
        ValidationResult::Success
    }

    /// Validates a `UUri` that is meant to be used as the application response topic
    /// of an RPC invocation, meaning the source of a Response message.
    ///
    /// # Arguments
    /// * `uri` - The `UUri` to validate.
    ///
    /// # Returns
    /// Returns `ValidationResult` containing a success or a failure with the error message.
    pub fn validate_rpc_topic_uri(uri: &UUri) -> ValidationResult {
        let result = Self::validate(uri);
        if result.is_failure() {
            return result;
        }
        if !Self::is_rpc_response(uri) {
            return ValidationResult::failure(
                "Invalid RPC uri application response topic. UriPart is missing rpc.response",
            );
        }
        ValidationResult::Success
    }

    /// Validates that a `UUri` contains the fields and numbers of the appropriate
    /// size so that it can be serialized into micro format.
    ///
    /// The entity and resource must carry ids that fit their wire fields. An
    /// authority, if present, must carry an IPv4 address, an IPv6 address or an id
    /// of at most 255 bytes; an authority with neither name nor number is treated
    /// like an absent authority.
    ///
    /// # Arguments
    /// * `uri` - The `UUri` to validate.
    ///
    /// # Returns
    /// Returns `ValidationResult` containing a success or a failure with the error message.
    pub fn validate_micro_form(uri: &UUri) -> ValidationResult {
        if Self::is_empty(uri) {
            return ValidationResult::failure("URI is empty");
        }

        if let Some(entity) = uri.entity.as_ref() {
            let result = entity.validate_micro_form();
            if result.is_failure() {
                return ValidationResult::Failure(format!("Entity: {}", result.get_message()));
            }
        } else {
            return ValidationResult::failure("Entity: Is missing");
        }

        if let Some(resource) = uri.resource.as_ref() {
            let result = resource.validate_micro_form();
            if result.is_failure() {
                return ValidationResult::Failure(format!("Resource: {}", result.get_message()));
            }
        } else {
            return ValidationResult::failure("Resource: Is missing");
        }

        if let Some(authority) = uri.authority.as_ref() {
            let result = authority.validate_micro_form();
            if result.is_failure() {
                return ValidationResult::Failure(format!("Authority: {}", result.get_message()));
            }
        }

        ValidationResult::Success
    }

    /// Indicates whether this `UUri` is empty, meaning none of its parts carry
    /// a name or a number.
    ///
    /// # Arguments
    /// * `uri` - The `UUri` to check for emptiness.
    ///
    /// # Returns
    /// Returns `true` if this `UUri` has no valuable information for building
    /// uProtocol sinks or sources.
    pub fn is_empty(uri: &UUri) -> bool {
        uri.authority.as_ref().map_or(true, UAuthority::is_empty)
            && uri.entity.as_ref().map_or(true, UEntity::is_empty)
            && uri.resource.as_ref().map_or(true, UResource::is_empty)
    }

    /// Checks if the URI addresses an entity on a different device.
    ///
    /// # Arguments
    /// * `uri` - The `UUri` to check.
    ///
    /// # Returns
    /// Returns `true` if the URI contains an authority with a name or a number.
    pub fn is_remote(uri: &UUri) -> bool {
        uri.authority
            .as_ref()
            .map_or(false, |authority| !authority.is_empty())
    }

    /// Checks if the URI addresses an entity on the local device, which is
    /// expressed by the absence of an authority.
    pub fn is_local(uri: &UUri) -> bool {
        !Self::is_remote(uri)
    }

    /// Checks if the URI contains both names and numeric representations of the names.
    ///
    /// This indicates that the `UUri` can be serialized to both the long and the
    /// micro format.
    ///
    /// # Arguments
    /// * `uri` - The `UUri` to check if resolved.
    ///
    /// # Returns
    /// Returns `true` if the URI contains both names and numeric representations of the names,
    /// meaning that this `UUri` can be serialized to long or micro formats.
    pub fn is_resolved(uri: &UUri) -> bool {
        Self::is_micro_form(uri) && Self::is_long_form(uri)
    }

    /// Checks if the URI can be serialized into the binary micro format.
    ///
    /// # Arguments
    /// * `uri` - The `UUri` to check.
    ///
    /// # Returns
    /// Returns `true` if the URI satisfies [`UriValidator::validate_micro_form`].
    pub fn is_micro_form(uri: &UUri) -> bool {
        Self::validate_micro_form(uri).is_success()
    }

    /// Checks if the URI can be serialized into the long format without loss.
    ///
    /// The entity and resource must carry names. An authority, if present, must
    /// either carry a name or be empty; an authority with only a number has no
    /// long representation.
    ///
    /// # Arguments
    /// * `uri` - The `UUri` to check.
    ///
    /// # Returns
    /// Returns `true` if the URI contains names so that it can be serialized into
    /// the long format.
    pub fn is_long_form(uri: &UUri) -> bool {
        let authority_has_long_form = uri
            .authority
            .as_ref()
            .map_or(true, |authority| authority.is_empty() || authority.has_name());
        authority_has_long_form
            && uri.entity.as_ref().map_or(false, UEntity::has_name)
            && uri.resource.as_ref().map_or(false, UResource::has_name)
    }

    /// Checks if the URI is the topic of a publish or notification message.
    ///
    /// A resource id at or above [`UriValidator::MIN_TOPIC_ID`] denotes a topic.
    /// A resource that is only identified by name denotes a topic unless the name
    /// marks one of the reserved RPC or default resources.
    ///
    /// # Arguments
    /// * `uri` - The `UUri` to check.
    ///
    /// # Returns
    /// Returns `true` if the URI is a topic.
    pub fn is_topic(uri: &UUri) -> bool {
        if Self::is_empty(uri) {
            return false;
        }
        if let Some(resource) = uri.resource.as_ref() {
            if resource.id.is_some_and(|id| id >= Self::MIN_TOPIC_ID) {
                return true;
            }
            if resource.has_name() {
                return !Self::is_rpc_method(uri)
                    && !Self::is_rpc_response(uri)
                    && !Self::is_default_resource_id(uri);
            }
        }
        false
    }

    /// Checks if the URI is of type RPC method.
    ///
    /// A resource id strictly between [`UriValidator::RESOURCE_ID_RESPONSE`] and
    /// [`UriValidator::MIN_TOPIC_ID`] denotes an RPC method slot, as does the
    /// symbolic form of an "rpc" resource with a non-blank instance naming a
    /// method rather than the reserved response resource.
    ///
    /// # Arguments
    /// * `uri` - The `UUri` to check if it is of type RPC method.
    ///
    /// # Returns
    /// Returns `true` if the URI is of type RPC method.
    pub fn is_rpc_method(uri: &UUri) -> bool {
        if Self::is_empty(uri) {
            return false;
        }
        if let Some(resource) = uri.resource.as_ref() {
            if resource
                .id
                .is_some_and(|id| id > Self::RESOURCE_ID_RESPONSE && id < Self::MIN_TOPIC_ID)
            {
                return true;
            }
            return resource.name.contains("rpc")
                && resource.get_instance().is_some_and(|instance| {
                    !instance.trim().is_empty() && instance != "response"
                });
        }
        false
    }

    /// Checks if the URI is of type RPC response.
    ///
    /// The resource id must equal [`UriValidator::RESOURCE_ID_RESPONSE`]. The long
    /// form parser assigns this reserved id to `rpc.response` resources, so URIs
    /// deserialized from their symbolic form classify as well.
    ///
    /// # Arguments
    /// * `uri` - The `UUri` to check if it is a response for an RPC method.
    ///
    /// # Returns
    /// Returns `true` if the URI is of type RPC response.
    pub fn is_rpc_response(uri: &UUri) -> bool {
        uri.resource
            .as_ref()
            .and_then(|resource| resource.id)
            .map_or(false, |id| id == Self::RESOURCE_ID_RESPONSE)
    }

    /// Checks if the URI addresses an entity as a whole, carrying the reserved
    /// default resource id and no symbolic resource fields.
    ///
    /// # Arguments
    /// * `uri` - The `UUri` to check.
    ///
    /// # Returns
    /// Returns `true` if the URI carries the default resource.
    pub fn is_default_resource_id(uri: &UUri) -> bool {
        if Self::is_empty(uri) {
            return false;
        }
        uri.resource.as_ref().map_or(true, |resource| {
            resource.id.map_or(true, |id| id == Self::RESOURCE_ID_RESPONSE)
                && !resource.has_name()
                && resource.instance.is_none()
                && resource.message.is_none()
        })
    }
}
