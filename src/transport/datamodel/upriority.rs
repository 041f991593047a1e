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

use std::convert::TryFrom;

#[derive(Default, Debug, Clone, Copy, Eq, PartialEq)]
pub enum UPriority {
    #[default]
    Low,
    Standard,
    Operations,
    MultimediaStreaming,
    RealtimeInteractive,
    Signaling,
    NetworkControl,
}

impl UPriority {
    pub const CS0: &'static str = "CS0"; // Low Priority. No bandwidth assurance such as File Transfer.
    pub const CS1: &'static str = "CS1"; // Standard, undifferentiated application such as General (unclassified).
    pub const CS2: &'static str = "CS2"; // Operations, Administration, and Management such as Streamer messages (sub, connect, etc…)
    pub const CS3: &'static str = "CS3"; // Multimedia streaming such as Video Streaming
    pub const CS4: &'static str = "CS4"; // Real-time interactive such as High priority (rpc events)
    pub const CS5: &'static str = "CS5"; // Signaling such as Important
    pub const CS6: &'static str = "CS6"; // Network control such as Safety Critical

    pub fn qos_string(&self) -> &'static str {
        match self {
            Self::Low => Self::CS0,
            Self::Standard => Self::CS1,
            Self::Operations => Self::CS2,
            Self::MultimediaStreaming => Self::CS3,
            Self::RealtimeInteractive => Self::CS4,
            Self::Signaling => Self::CS5,
            Self::NetworkControl => Self::CS6,
        }
    }

    pub fn value(&self) -> i32 {
        match self {
            Self::Low => 0,
            Self::Standard => 1,
            Self::Operations => 2,
            Self::MultimediaStreaming => 3,
            Self::RealtimeInteractive => 4,
            Self::Signaling => 5,
            Self::NetworkControl => 6,
        }
    }
}

impl From<i32> for UPriority {
    /// Create a `UPriority` variant from the corresponding numeric priority value.
    ///
    /// # Arguments
    ///
    /// * `value` - A numeric priority value.
    ///
    /// # Returns
    ///
    /// Returns the `UPriority` variant matching the given numeric value. Defaults to `UPriority::Low` if no match is found.
    fn from(value: i32) -> Self {
        match value {
            0 => Self::Low,
            1 => Self::Standard,
            2 => Self::Operations,
            3 => Self::MultimediaStreaming,
            4 => Self::RealtimeInteractive,
            5 => Self::Signaling,
            6 => Self::NetworkControl,
            _ => Self::default(),
        }
    }
}

impl TryFrom<&str> for UPriority {
    type Error = ();

    /// Try to create a `UPriority` variant from the corresponding QOS String.
    ///
    /// # Arguments
    ///
    /// * `qos_string` - A QOS String value.
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing the `UPriority` variant matching the given QOS String value,
    /// or a unit `Err` if no match is found.
    fn try_from(qos_string: &str) -> Result<Self, Self::Error> {
        match qos_string {
            Self::CS0 => Ok(Self::Low),
            Self::CS1 => Ok(Self::Standard),
            Self::CS2 => Ok(Self::Operations),
            Self::CS3 => Ok(Self::MultimediaStreaming),
            Self::CS4 => Ok(Self::RealtimeInteractive),
            Self::CS5 => Ok(Self::Signaling),
            Self::CS6 => Ok(Self::NetworkControl),
            _ => Err(()),
        }
    }
}
