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

use crate::transport::datamodel::{UAttributes, UMessageType, UPriority};
use crate::uri::datamodel::UUri;
use crate::uuid::builder::UUIDv8Builder;
use crate::uuid::datamodel::UUID;

/// Builder for easy construction of the `UAttributes` object.
///
/// Use one of the role constructors (`publish`, `notification`, `request`, `response`) to
/// obtain a builder whose message type and mandatory attributes match that role, then chain
/// the optional `with_*` setters before calling [`UAttributesBuilder::build`].
pub struct UAttributesBuilder {
    id: UUID,
    message_type: UMessageType,
    priority: UPriority,
    ttl: Option<u32>,
    token: Option<String>,
    sink: Option<UUri>,
    plevel: Option<u32>,
    commstatus: Option<i32>,
    reqid: Option<UUID>,
}

impl UAttributesBuilder {
    /// Gets a builder for creating a publish message.
    ///
    /// # Arguments
    ///
    /// * `priority` - The priority of the message.
    ///
    /// # Returns
    ///
    /// The builder initialized with the given values.
    pub fn publish(priority: UPriority) -> UAttributesBuilder {
        UAttributesBuilder {
            id: UUIDv8Builder::new().build(),
            message_type: UMessageType::Publish,
            priority,
            ttl: None,
            token: None,
            sink: None,
            plevel: None,
            commstatus: None,
            reqid: None,
        }
    }

    /// Gets a builder for creating a notification message.
    ///
    /// # Arguments
    ///
    /// * `priority` - The priority of the message.
    /// * `sink` - The destination URI.
    ///
    /// # Returns
    ///
    /// The builder initialized with the given values.
    pub fn notification(priority: UPriority, sink: UUri) -> UAttributesBuilder {
        UAttributesBuilder {
            id: UUIDv8Builder::new().build(),
            message_type: UMessageType::Notification,
            priority,
            ttl: None,
            token: None,
            sink: Some(sink),
            plevel: None,
            commstatus: None,
            reqid: None,
        }
    }

    /// Gets a builder for creating an RPC request message.
    ///
    /// # Arguments
    ///
    /// * `priority` - The priority of the message.
    /// * `sink` - The URI of the method to invoke.
    /// * `ttl` - The time to live in milliseconds.
    ///
    /// # Returns
    ///
    /// The builder initialized with the given values.
    pub fn request(priority: UPriority, sink: UUri, ttl: u32) -> UAttributesBuilder {
        UAttributesBuilder {
            id: UUIDv8Builder::new().build(),
            message_type: UMessageType::Request,
            priority,
            ttl: Some(ttl),
            token: None,
            sink: Some(sink),
            plevel: None,
            commstatus: None,
            reqid: None,
        }
    }

    /// Gets a builder for creating an RPC response message.
    ///
    /// # Arguments
    ///
    /// * `priority` - The priority of the message.
    /// * `sink` - The destination URI.
    /// * `reqid` - The original request UUID used to correlate the response to the request.
    ///
    /// # Returns
    ///
    /// The builder initialized with the given values.
    pub fn response(priority: UPriority, sink: UUri, reqid: UUID) -> UAttributesBuilder {
        UAttributesBuilder {
            id: UUIDv8Builder::new().build(),
            message_type: UMessageType::Response,
            priority,
            ttl: None,
            token: None,
            sink: Some(sink),
            plevel: None,
            commstatus: None,
            reqid: Some(reqid),
        }
    }

    /// Sets the message's time-to-live.
    ///
    /// # Arguments
    ///
    /// * `ttl` - The time-to-live in milliseconds.
    ///
    /// # Returns
    ///
    /// The builder.
    #[must_use]
    pub fn with_ttl(&mut self, ttl: u32) -> &mut UAttributesBuilder {
        self.ttl = Some(ttl);
        self
    }

    /// Sets the message's authorization token used for TAP.
    ///
    /// # Arguments
    ///
    /// * `token` - The token.
    ///
    /// # Returns
    ///
    /// The builder.
    #[must_use]
    pub fn with_token<T>(&mut self, token: T) -> &mut UAttributesBuilder
    where
        T: Into<String>,
    {
        self.token = Some(token.into());
        self
    }

    /// Sets the message's destination URI.
    ///
    /// # Arguments
    ///
    /// * `sink` - The URI.
    ///
    /// # Returns
    ///
    /// The builder.
    #[must_use]
    pub fn with_sink(&mut self, sink: UUri) -> &mut UAttributesBuilder {
        self.sink = Some(sink);
        self
    }

    /// Sets the message's permission level.
    ///
    /// # Arguments
    ///
    /// * `plevel` - The level.
    ///
    /// # Returns
    ///
    /// The builder.
    #[must_use]
    pub fn with_permission_level(&mut self, plevel: u32) -> &mut UAttributesBuilder {
        self.plevel = Some(plevel);
        self
    }

    /// Sets the message's communication status.
    ///
    /// # Arguments
    ///
    /// * `commstatus` - The status.
    ///
    /// # Returns
    ///
    /// The builder.
    #[must_use]
    pub fn with_commstatus(&mut self, commstatus: i32) -> &mut UAttributesBuilder {
        self.commstatus = Some(commstatus);
        self
    }

    /// Sets the message's request ID.
    ///
    /// # Arguments
    ///
    /// * `reqid` - The ID.
    ///
    /// # Returns
    ///
    /// The builder.
    #[must_use]
    pub fn with_reqid(&mut self, reqid: UUID) -> &mut UAttributesBuilder {
        self.reqid = Some(reqid);
        self
    }

    /// Creates the attributes based on the builder's state.
    ///
    /// # Returns
    ///
    /// The attributes.
    pub fn build(&self) -> UAttributes {
        UAttributes {
            id: self.id.clone(),
            message_type: self.message_type,
            priority: self.priority,
            ttl: self.ttl,
            token: self.token.clone(),
            sink: self.sink.clone(),
            plevel: self.plevel,
            commstatus: self.commstatus,
            reqid: self.reqid.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uri::builder::resourcebuilder::UResourceBuilder;
    use crate::uri::datamodel::{UAuthority, UEntity};

    fn build_sink() -> UUri {
        UUri {
            authority: Some(UAuthority {
                name: Some("vcu.someVin.veh.uprotocol.corp.com".to_string()),
                ..Default::default()
            }),
            entity: Some(UEntity {
                name: "petapp.uprotocol.corp.com".to_string(),
                version_major: Some(1),
                ..Default::default()
            }),
            resource: Some(UResourceBuilder::for_rpc_response()),
        }
    }

    #[test]
    fn test_publish_builder_sets_type_and_priority() {
        let attributes = UAttributesBuilder::publish(UPriority::Low).build();
        assert_eq!(attributes.message_type, UMessageType::Publish);
        assert_eq!(attributes.priority, UPriority::Low);
        assert!(attributes.id.is_uprotocol_uuid());
        assert!(attributes.sink.is_none());
        assert!(attributes.ttl.is_none());
        assert!(attributes.reqid.is_none());
    }

    #[test]
    fn test_notification_builder_sets_sink() {
        let attributes = UAttributesBuilder::notification(UPriority::Standard, build_sink()).build();
        assert_eq!(attributes.message_type, UMessageType::Notification);
        assert_eq!(attributes.priority, UPriority::Standard);
        assert!(attributes.sink.is_some());
    }

    #[test]
    fn test_request_builder_sets_sink_and_ttl() {
        let attributes =
            UAttributesBuilder::request(UPriority::RealtimeInteractive, build_sink(), 1000).build();
        assert_eq!(attributes.message_type, UMessageType::Request);
        assert_eq!(attributes.priority, UPriority::RealtimeInteractive);
        assert_eq!(attributes.ttl, Some(1000));
        assert!(attributes.sink.is_some());
    }

    #[test]
    fn test_response_builder_sets_sink_and_reqid() {
        let reqid = UUIDv8Builder::new().build();
        let attributes = UAttributesBuilder::response(
            UPriority::RealtimeInteractive,
            build_sink(),
            reqid.clone(),
        )
        .build();
        assert_eq!(attributes.message_type, UMessageType::Response);
        assert_eq!(attributes.reqid, Some(reqid));
        assert!(attributes.sink.is_some());
    }

    #[test]
    fn test_builder_chaining_of_optional_attributes() {
        let attributes = UAttributesBuilder::publish(UPriority::Low)
            .with_ttl(1000)
            .with_token("sometoken")
            .with_permission_level(2)
            .with_commstatus(3)
            .build();
        assert_eq!(attributes.ttl, Some(1000));
        assert_eq!(attributes.token, Some("sometoken".to_string()));
        assert_eq!(attributes.plevel, Some(2));
        assert_eq!(attributes.commstatus, Some(3));
    }
}
