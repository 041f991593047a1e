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

const URESOURCE_ID_LENGTH: usize = 16;
const URESOURCE_ID_VALID_BITMASK: u32 = 0xffff << URESOURCE_ID_LENGTH;

/// Represents a service API's resource and methods within a `UEntity`.
///
/// `UResource` encapsulates a service's resources such as "door", an optional specific instance
/// like "front_left", and an optional name of the resource message type, such as "Door". The
/// resource message type aligns with the protobuf service IDL that defines structured data types.
///
/// In micro form URIs the resource is identified by its numeric `id` instead of the symbolic
/// triple.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct UResource {
    pub name: String,
    pub instance: Option<String>,
    pub message: Option<String>,
    pub id: Option<u32>,
}

impl UResource {
    /// The id value matching any resource id in a filter URI.
    pub const WILDCARD_ID: u32 = 0xffff;

    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn has_id(&self) -> bool {
        self.id.is_some()
    }

    pub fn get_instance(&self) -> Option<&str> {
        self.instance.as_deref()
    }

    pub fn get_message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns `true` if this `UResource` identifies nothing, by name or by id.
    pub fn is_empty(&self) -> bool {
        !self.has_name() && self.instance.is_none() && self.message.is_none() && self.id.is_none()
    }

    /// Returns whether a `UResource` satisfies the requirements of a micro form URI.
    pub fn validate_micro_form(&self) -> ValidationResult {
        if let Some(id) = self.id {
            if id & URESOURCE_ID_VALID_BITMASK != 0 {
                return ValidationResult::failure(
                    "ID does not fit within allotted 16 bits in micro form",
                );
            }
        } else {
            return ValidationResult::failure("ID must be present");
        }

        ValidationResult::Success
    }
}

impl From<&str> for UResource {
    /// Parses a long form resource descriptor of the shape `name[.instance][#message]`.
    ///
    /// A descriptor naming the RPC response resource (`rpc.response`) is assigned the
    /// reserved response resource id 0.
    fn from(value: &str) -> Self {
        let mut parts = value.split('#');
        let name_and_instance = parts.next().unwrap_or_default();
        let resource_message = parts.next().map(std::string::ToString::to_string);

        let mut name_and_instance_parts = name_and_instance.split('.');
        let resource_name = name_and_instance_parts
            .next()
            .unwrap_or_default()
            .to_string();
        let resource_instance = name_and_instance_parts
            .next()
            .map(std::string::ToString::to_string);

        let mut resource_id: Option<u32> = None;
        if resource_name.contains("rpc")
            && resource_instance
                .as_ref()
                .is_some_and(|instance| instance.contains("response"))
        {
            resource_id = Some(0);
        }

        UResource {
            name: resource_name,
            id: resource_id,
            instance: resource_instance,
            message: resource_message,
        }
    }
}

impl From<String> for UResource {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string_with_name_only() {
        let resource = UResource::from("door");
        assert_eq!("door", resource.name);
        assert!(resource.instance.is_none());
        assert!(resource.message.is_none());
        assert!(resource.id.is_none());
    }

    #[test]
    fn test_from_string_with_name_and_instance() {
        let resource = UResource::from("door.front_left");
        assert_eq!("door", resource.name);
        assert_eq!(Some("front_left"), resource.get_instance());
        assert!(resource.message.is_none());
    }

    #[test]
    fn test_from_string_with_name_instance_and_message() {
        let resource = UResource::from("door.front_left#Door");
        assert_eq!("door", resource.name);
        assert_eq!(Some("front_left"), resource.get_instance());
        assert_eq!(Some("Door"), resource.get_message());
        assert!(resource.id.is_none());
    }

    #[test]
    fn test_from_string_with_rpc_response() {
        let resource = UResource::from("rpc.response");
        assert_eq!("rpc", resource.name);
        assert_eq!(Some("response"), resource.get_instance());
        assert_eq!(Some(0), resource.id);
    }

    #[test]
    fn test_from_string_with_rpc_method() {
        let resource = UResource::from("rpc.raise");
        assert_eq!("rpc", resource.name);
        assert_eq!(Some("raise"), resource.get_instance());
        assert!(resource.id.is_none());
    }

    #[test]
    fn test_is_empty() {
        assert!(UResource::default().is_empty());
        assert!(!UResource {
            name: "door".to_string(),
            ..Default::default()
        }
        .is_empty());
        assert!(!UResource {
            id: Some(0),
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn test_wildcard_id_fits_micro_form() {
        let resource = UResource {
            id: Some(UResource::WILDCARD_ID),
            ..Default::default()
        };
        assert!(resource.validate_micro_form().is_success());
    }

    #[test]
    fn test_validate_micro_form() {
        let resource = UResource {
            id: Some(19999),
            ..Default::default()
        };
        assert!(resource.validate_micro_form().is_success());

        let resource = UResource {
            name: "door".to_string(),
            ..Default::default()
        };
        let result = resource.validate_micro_form();
        assert!(result.is_failure());
        assert_eq!("ID must be present", result.get_message());

        let resource = UResource {
            id: Some(0x10000),
            ..Default::default()
        };
        assert!(resource.validate_micro_form().is_failure());
    }
}
