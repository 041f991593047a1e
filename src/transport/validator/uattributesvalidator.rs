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

use std::time::SystemTime;

use crate::transport::datamodel::{UAttributes, UMessageType, UPriority};
use crate::types::ValidationResult;
use crate::uri::validator::UriValidator;

/// `UAttributes` is the struct that defines the message metadata. It serves as the configuration
/// for various aspects like time to live, priority, security tokens, and more. Each role of a
/// message (Publish, Notification, Request, Response) comes with its own rules for which
/// attributes must, may, or must not be set.
///
/// `UAttributesValidator` is a trait implemented by all validators for `UAttributes`. It provides
/// functionality to help validate that a given `UAttributes` instance is correctly configured for
/// the role of message it describes.
pub trait UAttributesValidator {
    /// Takes a `UAttributes` object and runs validations.
    ///
    /// # Arguments
    /// * `attributes` - The `UAttributes` to validate.
    ///
    /// # Returns
    /// Returns a `ValidationResult` that indicates success or failure. If failed, it includes a
    /// message containing all validation errors for invalid configurations. Every check runs,
    /// nothing short-circuits, so a caller gets the complete diagnostic in one pass.
    fn validate(&self, attributes: &UAttributes) -> ValidationResult {
        let error_message = vec![
            self.validate_type(attributes),
            self.validate_id(attributes),
            self.validate_sink(attributes),
            self.validate_ttl(attributes),
            self.validate_priority(attributes),
            self.validate_permission_level(attributes),
            self.validate_reqid(attributes),
        ]
        .into_iter()
        .filter(|status| status.is_failure())
        .map(|status| status.get_message())
        .collect::<Vec<_>>()
        .join(", ");

        if error_message.is_empty() {
            ValidationResult::Success
        } else {
            ValidationResult::Failure(error_message)
        }
    }

    fn type_name(&self) -> &'static str;

    /// Returns the type of message that this validator is responsible for.
    fn message_type(&self) -> UMessageType;

    /// Indicates whether the payload with these [`UAttributes`] has expired.
    ///
    /// A message without a time to live, or with a time to live of zero, never expires.
    ///
    /// # Arguments
    ///
    /// * `attributes` - Reference to a [`UAttributes`] struct containing the time to live value.
    ///
    /// # Returns
    ///
    /// Returns a `ValidationResult` that is success or failed with a failure message.
    fn is_expired(&self, attributes: &UAttributes) -> ValidationResult {
        let ttl = match attributes.ttl {
            Some(ttl) if ttl > 0 => u64::from(ttl),
            Some(_) | None => return ValidationResult::Success,
        };

        if let Some(time) = attributes.id.get_time() {
            let now = SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .map_or(0, |duration| {
                    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
                });
            if now.saturating_sub(time) >= ttl {
                return ValidationResult::Failure("Payload is expired".to_string());
            }
        }
        ValidationResult::Success
    }

    /// Verifies that the message type tag carried in a set of attributes matches the role this
    /// validator is responsible for.
    ///
    /// # Arguments
    ///
    /// * `attributes` - `UAttributes` object containing the message type to validate.
    ///
    /// # Returns
    ///
    /// Returns a `ValidationResult` that is success or failed with a failure message.
    fn validate_type(&self, attributes: &UAttributes) -> ValidationResult {
        if attributes.message_type == self.message_type() {
            ValidationResult::Success
        } else {
            ValidationResult::Failure(format!(
                "Wrong Attribute Type [{}]",
                <&str>::from(attributes.message_type)
            ))
        }
    }

    /// Verifies that a set of attributes contains a valid message id.
    ///
    /// # Arguments
    ///
    /// * `attributes` - `UAttributes` object containing the message id to validate.
    ///
    /// # Returns
    ///
    /// Returns a `ValidationResult` that is success or failed with a failure message.
    fn validate_id(&self, attributes: &UAttributes) -> ValidationResult {
        if attributes.id.is_uprotocol_uuid() {
            ValidationResult::Success
        } else {
            ValidationResult::Failure(
                "Attributes must contain valid uProtocol UUID in id property".to_string(),
            )
        }
    }

    /// Validates the sink URI. By default a message is not addressed to a specific destination,
    /// so the sink must be absent. Roles that require a destination override this check.
    ///
    /// # Arguments
    ///
    /// * `attributes` - `UAttributes` object containing the sink to validate.
    ///
    /// # Returns
    ///
    /// Returns a `ValidationResult` that is success or failed with a failure message.
    fn validate_sink(&self, attributes: &UAttributes) -> ValidationResult {
        if attributes.sink.is_some() {
            ValidationResult::Failure("Message should not contain a sink".to_string())
        } else {
            ValidationResult::Success
        }
    }

    /// Validate the time to live configuration. A time to live is optional in the default case,
    /// and since the value is unsigned any present value is acceptable, zero meaning the message
    /// never expires.
    ///
    /// # Arguments
    ///
    /// * `attributes` - `UAttributes` object containing the time to live to validate.
    ///
    /// # Returns
    ///
    /// Returns a `ValidationResult` that is success or failed with a failure message.
    fn validate_ttl(&self, _attributes: &UAttributes) -> ValidationResult {
        ValidationResult::Success
    }

    /// Validates the priority of the message. Every message must carry at least standard
    /// priority (CS1). RPC roles override this check with a stricter floor.
    ///
    /// # Arguments
    ///
    /// * `attributes` - `UAttributes` object containing the priority to validate.
    ///
    /// # Returns
    ///
    /// Returns a `ValidationResult` that is success or failed with a failure message.
    fn validate_priority(&self, attributes: &UAttributes) -> ValidationResult {
        if attributes.priority.value() >= UPriority::Standard.value() {
            ValidationResult::Success
        } else {
            ValidationResult::Failure(format!(
                "Invalid UPriority [{}]",
                attributes.priority.qos_string()
            ))
        }
    }

    /// Validates the permission level for the default case. If the `UAttributes` does not contain
    /// a permission level then the check passes.
    ///
    /// # Arguments
    ///
    /// * `attributes` - `UAttributes` object containing the permission level to validate.
    ///
    /// # Returns
    ///
    /// Returns a `ValidationResult` that is success or failed with a failure message.
    fn validate_permission_level(&self, attributes: &UAttributes) -> ValidationResult {
        if let Some(plevel) = attributes.plevel {
            if plevel < 1 {
                return ValidationResult::Failure("Invalid Permission Level".to_string());
            }
        }
        ValidationResult::Success
    }

    /// Validates the correlation id. A correlation id only makes sense on an RPC response, so by
    /// default the attribute must be absent. The response role overrides this check.
    ///
    /// # Arguments
    ///
    /// * `attributes` - `UAttributes` object containing the request id to validate.
    ///
    /// # Returns
    ///
    /// Returns a `ValidationResult` that is success or failed with a failure message.
    fn validate_reqid(&self, attributes: &UAttributes) -> ValidationResult {
        if attributes.reqid.is_some() {
            ValidationResult::Failure("Message should not contain a reqid".to_string())
        } else {
            ValidationResult::Success
        }
    }
}

/// Enum that holds the implementations of `UAttributesValidator` according to message type.
pub enum Validators {
    Publish,
    Notification,
    Request,
    Response,
}

impl Validators {
    pub fn validator(&self) -> Box<dyn UAttributesValidator> {
        match self {
            Validators::Publish => Box::new(PublishValidator),
            Validators::Notification => Box::new(NotificationValidator),
            Validators::Request => Box::new(RequestValidator),
            Validators::Response => Box::new(ResponseValidator),
        }
    }

    /// Picks the validator matching the message type carried in a set of attributes.
    pub fn get_validator(attributes: &UAttributes) -> Box<dyn UAttributesValidator> {
        match attributes.message_type {
            UMessageType::Publish => Box::new(PublishValidator),
            UMessageType::Notification => Box::new(NotificationValidator),
            UMessageType::Request => Box::new(RequestValidator),
            UMessageType::Response => Box::new(ResponseValidator),
        }
    }
}

/// Validate `UAttributes` with type `UMessageType::Publish`
pub struct PublishValidator;

impl UAttributesValidator for PublishValidator {
    fn type_name(&self) -> &'static str {
        "UAttributesValidator.Publish"
    }

    fn message_type(&self) -> UMessageType {
        UMessageType::Publish
    }
}

/// Validate `UAttributes` with type `UMessageType::Notification`
pub struct NotificationValidator;

impl UAttributesValidator for NotificationValidator {
    fn type_name(&self) -> &'static str {
        "UAttributesValidator.Notification"
    }

    fn message_type(&self) -> UMessageType {
        UMessageType::Notification
    }

    /// Validates that attributes for a notification carry a destination sink addressing the
    /// default resource of the receiving entity.
    ///
    /// # Arguments
    ///
    /// * `attributes` - `UAttributes` object containing the sink to validate.
    ///
    /// # Returns
    ///
    /// Returns a `ValidationResult` that is success or failed with a failure message.
    fn validate_sink(&self, attributes: &UAttributes) -> ValidationResult {
        if let Some(sink) = &attributes.sink {
            let result = UriValidator::validate(sink);
            if result.is_failure() {
                return result;
            }
            if !UriValidator::is_default_resource_id(sink) {
                return ValidationResult::Failure("Invalid Sink for Notification".to_string());
            }
            ValidationResult::Success
        } else {
            ValidationResult::Failure("Missing Sink".to_string())
        }
    }
}

/// Validate `UAttributes` with type `UMessageType::Request`
pub struct RequestValidator;

impl UAttributesValidator for RequestValidator {
    fn type_name(&self) -> &'static str {
        "UAttributesValidator.Request"
    }

    fn message_type(&self) -> UMessageType {
        UMessageType::Request
    }

    /// Validates that attributes for an RPC request carry the method to be invoked as sink.
    ///
    /// # Arguments
    ///
    /// * `attributes` - `UAttributes` object containing the sink to validate.
    ///
    /// # Returns
    ///
    /// Returns a `ValidationResult` that is success or failed with a failure message.
    fn validate_sink(&self, attributes: &UAttributes) -> ValidationResult {
        if let Some(sink) = &attributes.sink {
            UriValidator::validate_rpc_method(sink)
        } else {
            ValidationResult::Failure("Missing Sink".to_string())
        }
    }

    /// Validate the time to live configuration. In the case of an RPC request, the time to live
    /// is required and must be positive.
    ///
    /// # Arguments
    ///
    /// * `attributes` - `UAttributes` object containing the time to live to validate.
    ///
    /// # Returns
    ///
    /// Returns a `ValidationResult` that is success or failed with a failure message.
    fn validate_ttl(&self, attributes: &UAttributes) -> ValidationResult {
        if let Some(ttl) = attributes.ttl {
            if ttl > 0 {
                ValidationResult::Success
            } else {
                ValidationResult::Failure(format!("Invalid TTL [{ttl}]"))
            }
        } else {
            ValidationResult::Failure("Missing TTL".to_string())
        }
    }

    /// Validates the priority of the message. An RPC request must carry at least realtime
    /// interactive priority (CS4).
    fn validate_priority(&self, attributes: &UAttributes) -> ValidationResult {
        if attributes.priority.value() >= UPriority::RealtimeInteractive.value() {
            ValidationResult::Success
        } else {
            ValidationResult::Failure(format!(
                "Invalid UPriority [{}]",
                attributes.priority.qos_string()
            ))
        }
    }
}

/// Validate `UAttributes` with type `UMessageType::Response`
pub struct ResponseValidator;

impl UAttributesValidator for ResponseValidator {
    fn type_name(&self) -> &'static str {
        "UAttributesValidator.Response"
    }

    fn message_type(&self) -> UMessageType {
        UMessageType::Response
    }

    /// Validates that attributes for an RPC response carry the response topic of the caller
    /// as sink.
    ///
    /// # Arguments
    ///
    /// * `attributes` - `UAttributes` object containing the sink to validate.
    ///
    /// # Returns
    ///
    /// Returns a `ValidationResult` that is success or failed with a failure message.
    fn validate_sink(&self, attributes: &UAttributes) -> ValidationResult {
        if let Some(sink) = &attributes.sink {
            UriValidator::validate_rpc_response(sink)
        } else {
            ValidationResult::Failure("Missing Sink".to_string())
        }
    }

    /// Validate the correlation id. In the case of an RPC response, the correlation id is
    /// required and must be a valid uProtocol UUID.
    ///
    /// # Arguments
    ///
    /// * `attributes` - `UAttributes` object containing the request id to validate.
    ///
    /// # Returns
    ///
    /// Returns a `ValidationResult` that is success or failed with a failure message.
    fn validate_reqid(&self, attributes: &UAttributes) -> ValidationResult {
        if attributes
            .reqid
            .as_ref()
            .is_some_and(|reqid| reqid.is_uprotocol_uuid())
        {
            ValidationResult::Success
        } else {
            ValidationResult::Failure("Missing correlation Id".to_string())
        }
    }

    /// Validates the priority of the message. An RPC response must carry at least realtime
    /// interactive priority (CS4).
    fn validate_priority(&self, attributes: &UAttributes) -> ValidationResult {
        if attributes.priority.value() >= UPriority::RealtimeInteractive.value() {
            ValidationResult::Success
        } else {
            ValidationResult::Failure(format!(
                "Invalid UPriority [{}]",
                attributes.priority.qos_string()
            ))
        }
    }
}
