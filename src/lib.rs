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

//! # uProtocol-Core-Rust
//!
//! The purpose of this crate is to provide Rust specific code that builds the core data types
//! defined in the [uProtocol Specifications](https://github.com/eclipse-uprotocol/uprotocol-spec/tree/main).
//!
//! The crate contains factory methods, serializers and validators for the data types used to
//! address software entities and to describe the messages they exchange.
//!
//! For the time being, usage examples can be seen in the test cases that are provided for almost every type.
//! More bespoke examples will be provided asap, once uProtocol runtime components are available.
//!
//! ## This crate includes:
//!
//! - the [`uri`] module, providing convenience wrappers for creation, serialization and validation
//!   of uProtocol-style resource identifiers
//! - the [`uuid`] module which generates and validates UUIDs as per the uProtocol specification
//! - the [`transport`] module with the message attributes accompanying every uProtocol message,
//!   and their validators
//!
//! ## References
//! - [Eclipse-uProtocol Specification](https://github.com/eclipse-uprotocol/uprotocol-spec/tree/main)

mod types {
    pub mod validationresult;

    pub use validationresult::*;
}

pub mod uri {
    pub mod builder {
        pub mod resourcebuilder;
    }
    pub mod datamodel {
        mod uauthority;
        mod uentity;
        mod uresource;
        mod uuri;

        pub use uauthority::*;
        pub use uentity::*;
        pub use uresource::*;
        pub use uuri::*;
    }
    pub mod validator {
        mod urivalidator;

        pub use urivalidator::*;

        pub use crate::types::validationresult::*;
    }
    pub mod serializer {
        mod longuriserializer;
        mod microuriserializer;
        mod shorturiserializer;
        mod uriserializer;

        pub use longuriserializer::*;
        pub use microuriserializer::*;
        pub use shorturiserializer::*;
        pub use uriserializer::*;
    }
}

pub mod uuid {
    pub mod builder {
        mod uuidbuilder;

        pub use uuidbuilder::*;
    }
    pub mod datamodel {
        mod uuid;

        pub use uuid::*;
    }
}

pub mod transport {
    pub mod builder {
        mod uattributesbuilder;

        pub use uattributesbuilder::*;
    }
    pub mod datamodel {
        mod uattributes;
        mod umessagetype;
        mod upriority;

        pub use uattributes::*;
        pub use umessagetype::*;
        pub use upriority::*;
    }
    pub mod validator {
        mod uattributesvalidator;

        pub use uattributesvalidator::*;

        pub use crate::types::validationresult::*;
    }
}
