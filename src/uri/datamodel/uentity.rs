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

const UENTITY_ID_LENGTH: usize = 16;
const UENTITY_ID_VALID_BITMASK: u32 = 0xffff << UENTITY_ID_LENGTH;
const UENTITY_MAJOR_VERSION_LENGTH: usize = 8;
const UENTITY_MAJOR_VERSION_VALID_BITMASK: u32 = 0xffffff << UENTITY_MAJOR_VERSION_LENGTH;

/// Data representation of a **Software Entity (uE)**.
///
/// A `UEntity` is a piece of software deployed somewhere on an authority,
/// acting in the role of a service or an application. It is identified by a
/// symbolic `name` in long form URIs and by a numeric `id` in micro form URIs,
/// together with the major version of its interface.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct UEntity {
    /// The entity name, such as `body.access`.
    pub name: String,

    /// The entity id used in micro form URIs, 16 bits on the wire.
    pub id: Option<u32>,

    /// The major version of the entity interface. `None` means unspecified,
    /// which micro form URIs express as the wire value 0.
    pub version_major: Option<u32>,
}

impl UEntity {
    /// The id value matching any entity id in a filter URI.
    pub const WILDCARD_ID: u32 = 0xffff;

    /// The major version value matching any version in a filter URI.
    pub const WILDCARD_MAJOR_VERSION: u32 = 0xff;

    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn has_id(&self) -> bool {
        self.id.is_some()
    }

    /// Returns `true` if this `UEntity` identifies nothing, by name or by id.
    pub fn is_empty(&self) -> bool {
        !self.has_name() && self.id.is_none()
    }

    /// Returns whether a `UEntity` satisfies the requirements of a micro form URI.
    pub fn validate_micro_form(&self) -> ValidationResult {
        if let Some(id) = self.id {
            if id & UENTITY_ID_VALID_BITMASK != 0 {
                return ValidationResult::failure(
                    "ID does not fit within allotted 16 bits in micro form",
                );
            }
        } else {
            return ValidationResult::failure("ID must be present");
        }

        if let Some(major_version) = self.version_major {
            if major_version & UENTITY_MAJOR_VERSION_VALID_BITMASK != 0 {
                return ValidationResult::failure(
                    "Major version does not fit within 8 allotted bits in micro form",
                );
            }
        }

        ValidationResult::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(UEntity::default().is_empty());
        assert!(UEntity {
            name: "  ".to_string(),
            ..Default::default()
        }
        .is_empty());
        assert!(!UEntity {
            name: "body.access".to_string(),
            ..Default::default()
        }
        .is_empty());
        assert!(!UEntity {
            id: Some(42),
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn test_validate_micro_form_succeeds() {
        let entity = UEntity {
            id: Some(29999),
            version_major: Some(254),
            ..Default::default()
        };
        assert!(entity.validate_micro_form().is_success());
    }

    #[test]
    fn test_validate_micro_form_without_version() {
        let entity = UEntity {
            id: Some(29999),
            ..Default::default()
        };
        assert!(entity.validate_micro_form().is_success());
    }

    #[test]
    fn test_wildcard_values_fit_micro_form() {
        let entity = UEntity {
            id: Some(UEntity::WILDCARD_ID),
            version_major: Some(UEntity::WILDCARD_MAJOR_VERSION),
            ..Default::default()
        };
        assert!(entity.validate_micro_form().is_success());
    }

    #[test]
    fn test_validate_micro_form_fails_for_missing_id() {
        let entity = UEntity {
            name: "body.access".to_string(),
            ..Default::default()
        };
        let result = entity.validate_micro_form();
        assert!(result.is_failure());
        assert_eq!("ID must be present", result.get_message());
    }

    #[test]
    fn test_validate_micro_form_fails_for_oversized_id() {
        let entity = UEntity {
            id: Some(0x10000),
            ..Default::default()
        };
        let result = entity.validate_micro_form();
        assert!(result.is_failure());
        assert_eq!(
            "ID does not fit within allotted 16 bits in micro form",
            result.get_message()
        );
    }

    #[test]
    fn test_validate_micro_form_fails_for_oversized_version() {
        let entity = UEntity {
            id: Some(29999),
            version_major: Some(256),
            ..Default::default()
        };
        let result = entity.validate_micro_form();
        assert!(result.is_failure());
        assert_eq!(
            "Major version does not fit within 8 allotted bits in micro form",
            result.get_message()
        );
    }
}
