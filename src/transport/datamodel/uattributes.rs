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

use crate::transport::datamodel::{UMessageType, UPriority};
use crate::uri::datamodel::UUri;
use crate::uuid::datamodel::UUID;

/// When sending data over the transport, the basic API for sending uses a source topic and the payload as the data.
/// Additional information about the message is held in the `UAttributes` struct.
///
/// `UAttributes` holds this additional information along with methods to better understand the message sent. It defines
/// the message and provides options for configuring attributes like time to live, priority, security tokens, and more.
///
/// The message described by `UAttributes` can play different roles:
/// - A published or notified payload carrying a state change,
/// - A payload representing an RPC request,
/// - A payload representing an RPC response.
#[derive(Debug, Clone, Default)]
pub struct UAttributes {
    pub id: UUID,                   // Unique identifier for the message
    pub message_type: UMessageType, // Message type
    pub priority: UPriority,        // Message priority

    pub ttl: Option<u32>,        // Time to live in milliseconds
    pub token: Option<String>,   // Authorization token used for TAP
    pub sink: Option<UUri>,      // Explicit destination URI
    pub plevel: Option<u32>,     // Permission Level
    pub commstatus: Option<i32>, // Communication Status
    pub reqid: Option<UUID>,     // Request ID
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_attributes() {
        let attributes = UAttributes::default();
        assert_eq!(attributes.message_type, UMessageType::Publish);
        assert_eq!(attributes.priority, UPriority::Low);
        assert!(attributes.ttl.is_none());
        assert!(attributes.token.is_none());
        assert!(attributes.sink.is_none());
        assert!(attributes.plevel.is_none());
        assert!(attributes.commstatus.is_none());
        assert!(attributes.reqid.is_none());
    }

    #[test]
    fn test_attributes_can_be_cloned() {
        let attributes = UAttributes {
            message_type: UMessageType::Request,
            priority: UPriority::RealtimeInteractive,
            ttl: Some(1000),
            ..Default::default()
        };
        let cloned = attributes.clone();
        assert_eq!(cloned.message_type, UMessageType::Request);
        assert_eq!(cloned.priority, UPriority::RealtimeInteractive);
        assert_eq!(cloned.ttl, Some(1000));
    }
}
