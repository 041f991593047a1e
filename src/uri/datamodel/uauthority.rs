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

const REMOTE_IPV4_BYTES: usize = 4;
const REMOTE_IPV6_BYTES: usize = 16;
const REMOTE_ID_MINIMUM_BYTES: usize = 1;
const REMOTE_ID_MAXIMUM_BYTES: usize = 255;

/// The numeric representation of a remote authority, either an IP address
/// (4 bytes for IPv4, 16 bytes for IPv6) or a variable length opaque ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Number {
    Ip(Vec<u8>),
    Id(Vec<u8>),
}

/// Data representation of an **UAuthority**.
///
/// An `UAuthority` represents the deployment location of a specific `UEntity`
/// (uProtocol Software Entity). A local authority is expressed by leaving the
/// authority out of the `UUri` altogether.
///
/// The symbolic `name` is used in long form URIs, the numeric `number` in
/// micro form URIs. Both may be populated at the same time, in which case the
/// authority is resolved.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct UAuthority {
    /// The authority name, such as a device and domain `vcu.my_car_vin`.
    pub name: Option<String>,

    /// The authority address, an IP address or an opaque ID.
    pub number: Option<Number>,
}

/// uProtocol defines a [Micro-URI format](https://github.com/eclipse-uprotocol/uprotocol-spec/blob/main/basics/uri.adoc#42-micro-uris), which contains
/// a type field for which addressing mode is used by a MicroUri. The `AddressType` type implements this definition.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum AddressType {
    Local = 0, // Local authority
    IPv4 = 1,  // Remote authority using IPv4 address
    IPv6 = 2,  // Remote authority using IPv6 address
    ID = 3,    // Remote authority using a variable length ID
}

impl AddressType {
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Maps a wire value to the corresponding `AddressType`, returning `None`
    /// for values outside the defined range.
    pub fn from_value(value: u8) -> Option<AddressType> {
        match value {
            0 => Some(AddressType::Local),
            1 => Some(AddressType::IPv4),
            2 => Some(AddressType::IPv6),
            3 => Some(AddressType::ID),
            _ => None,
        }
    }
}

impl UAuthority {
    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn has_name(&self) -> bool {
        self.name.as_ref().is_some_and(|name| !name.is_empty())
    }

    pub fn has_ip(&self) -> bool {
        matches!(self.number, Some(Number::Ip(_)))
    }

    pub fn has_id(&self) -> bool {
        matches!(self.number, Some(Number::Id(_)))
    }

    pub fn get_ip(&self) -> Option<&[u8]> {
        match &self.number {
            Some(Number::Ip(ip)) => Some(ip),
            Some(Number::Id(_)) | None => None,
        }
    }

    pub fn get_id(&self) -> Option<&[u8]> {
        match &self.number {
            Some(Number::Id(id)) => Some(id),
            Some(Number::Ip(_)) | None => None,
        }
    }

    /// Returns `true` if this `UAuthority` carries neither a name nor a number.
    /// Such an authority conveys no deployment information and is treated like
    /// an absent authority.
    pub fn is_empty(&self) -> bool {
        !self.has_name() && self.number.is_none()
    }

    /// Determine the Micro-URI addressing mode for this `UAuthority`.
    ///
    /// # Returns
    /// The `AddressType` matching the authority number, or `None` for an IP
    /// address that is neither IPv4 nor IPv6 sized.
    pub fn address_type(&self) -> Option<AddressType> {
        match &self.number {
            Some(Number::Ip(ip)) => match ip.len() {
                REMOTE_IPV4_BYTES => Some(AddressType::IPv4),
                REMOTE_IPV6_BYTES => Some(AddressType::IPv6),
                _ => None,
            },
            Some(Number::Id(_)) => Some(AddressType::ID),
            None => Some(AddressType::Local),
        }
    }

    /// Returns whether a `UAuthority` satisfies the requirements of a micro form URI.
    ///
    /// An authority without name and number is treated like an absent authority
    /// and passes; a name-only authority has no micro representation.
    pub fn validate_micro_form(&self) -> ValidationResult {
        match &self.number {
            Some(Number::Ip(ip)) => {
                if !(ip.len() == REMOTE_IPV4_BYTES || ip.len() == REMOTE_IPV6_BYTES) {
                    return ValidationResult::failure(
                        "IP address is not IPv4 (4 bytes) or IPv6 (16 bytes)",
                    );
                }
            }
            Some(Number::Id(id)) => {
                if !matches!(id.len(), REMOTE_ID_MINIMUM_BYTES..=REMOTE_ID_MAXIMUM_BYTES) {
                    return ValidationResult::failure("ID doesn't fit in bytes allocated");
                }
            }
            None => {
                if self.has_name() {
                    return ValidationResult::failure(
                        "Must have IP address or ID set as UAuthority for micro form. Neither are set.",
                    );
                }
            }
        }
        ValidationResult::Success
    }
}
