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

use std::fmt;

/// ValidationResult of success or failure, carrying the failure reason.
#[derive(Debug, PartialEq)]
pub enum ValidationResult {
    Success,
    Failure(String),
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationResult::Success => write!(f, "ValidationResult.Success"),
            ValidationResult::Failure(message) => {
                write!(f, "ValidationResult.Failure(message = '{}')", message)
            }
        }
    }
}

impl ValidationResult {
    // Returns true if ValidationResult is Success
    pub fn is_success(&self) -> bool {
        matches!(self, ValidationResult::Success)
    }

    // Returns true if ValidationResult is Failure
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    // Returns the message of the ValidationResult, if available
    pub fn get_message(&self) -> String {
        match self {
            ValidationResult::Success => String::from(""),
            ValidationResult::Failure(message) => message.clone(),
        }
    }

    pub fn success() -> Self {
        ValidationResult::Success
    }

    pub fn failure(message: &str) -> Self {
        ValidationResult::Failure(message.to_string())
    }
}
