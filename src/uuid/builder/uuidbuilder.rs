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

use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::uuid::datamodel::{UUID, VARIANT_RFC4122, VERSION_8};

const BITMASK_CLEAR_VARIANT: u64 = 0x3fffffffffffffff;

const CLOCK_DRIFT_TOLERANCE: u64 = 10_000_000;
const MAX_COUNT: u64 = 0xfff;
const MAX_TIMESTAMP_BITS: u8 = 48;
const MAX_TIMESTAMP_MASK: u64 = 0xffff << MAX_TIMESTAMP_BITS;

/// A factory for creating UUIDs that can be used with uProtocol.
///
/// The UUIDs are created from the current timestamp, a counter that is
/// incremented for every UUID generated within the same millisecond, and a
/// random number that is generated once per builder and reused afterwards.
/// The counter rolls over into neither the timestamp nor the version bits,
/// so a single builder instance must be reused for all UUIDs of a uEntity.
///
/// The structure of the UUIDs created by this factory is defined in the
/// [uProtocol specification](https://github.com/eclipse-uprotocol/up-spec/blob/main/basics/uuid.adoc).
pub struct UUIDv8Builder {
    msb: Mutex<u64>,
    lsb: u64,
}

impl Default for UUIDv8Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl UUIDv8Builder {
    /// Creates a new builder for creating uProtocol UUIDs.
    ///
    /// The same builder instance can be used to create one or more UUIDs
    /// by means of invoking [`UUIDv8Builder::build`].
    pub fn new() -> Self {
        UUIDv8Builder {
            msb: Mutex::new(VERSION_8),
            // set variant to RFC4122
            lsb: rand::random::<u64>() & BITMASK_CLEAR_VARIANT | VARIANT_RFC4122,
        }
    }

    /// Creates a new UUID for the current system time.
    ///
    /// # Panics
    ///
    /// if the system time is either
    /// * set to a point in time before UNIX Epoch, or
    /// * set to a point in time later than UNIX Epoch + 0xFFFFFFFFFFFF milliseconds
    pub fn build(&self) -> UUID {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("current system time is set to a point in time before UNIX Epoch");
        let now_millis = u64::try_from(now.as_millis())
            .expect("current system time is set to a point in time too far in the future");
        self.build_with_instant(now_millis)
    }

    /// Creates a new UUID for a given timestamp.
    ///
    /// # Arguments
    ///
    /// * `timestamp` - The timestamp (in milliseconds since UNIX EPOCH) to use.
    ///
    /// # Panics
    ///
    /// * if the given timestamp is greater than 2^48 - 1.
    pub(crate) fn build_with_instant(&self, timestamp: u64) -> UUID {
        assert!(
            timestamp & MAX_TIMESTAMP_MASK == 0,
            "Timestamp of UUID must not exceed 48 bits"
        );

        let new_msb = {
            let mut msb = self.msb.lock().unwrap();
            let previous_timestamp = *msb >> 16;

            // The current time may be the same tick as the previous time, or may have
            // moved backwards after a small clock adjustment or a leap second.
            // Drift tolerance = (previous_time - 10s) < current_time <= previous_time
            if timestamp <= previous_timestamp
                && timestamp > previous_timestamp.saturating_sub(CLOCK_DRIFT_TOLERANCE)
            {
                if (*msb & MAX_COUNT) < MAX_COUNT {
                    *msb += 1;
                }
                // no uEntity is expected to emit more than 4095 messages/ms,
                // once exhausted the counter simply stays at MAX_COUNT
            } else {
                *msb = (timestamp << 16) | VERSION_8;
            }

            *msb
        };

        UUID {
            msb: new_msb,
            lsb: self.lsb,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_creates_uprotocol_uuid() {
        let uuid = UUIDv8Builder::new().build();
        assert!(uuid.is_uprotocol_uuid());
        assert!(uuid.get_time().is_some());
    }

    #[test]
    fn test_build_with_instant_creates_uprotocol_uuid() {
        let instant = 0x18C684468F8_u64; // Thu, 14 Dec 2023 12:19:23 GMT
        let uuid = UUIDv8Builder::new().build_with_instant(instant);
        assert!(uuid.is_uprotocol_uuid());
        assert_eq!(uuid.get_time().unwrap(), instant);

        // instant, version (8) and counter (000) should show up in UUID
        assert!(uuid
            .to_hyphenated_string()
            .starts_with("018c6844-68f8-8000-"));
    }

    #[test]
    fn test_uuid_for_subsequent_generation() {
        let instant = 0x18C684468F8_u64; // Thu, 14 Dec 2023 12:19:23 GMT
        let builder = UUIDv8Builder::new();

        let uuid_for_instant = builder.build_with_instant(instant);
        assert!(uuid_for_instant.is_uprotocol_uuid());
        // instant, version (8) and counter (000) should show up in UUID
        assert!(uuid_for_instant
            .to_hyphenated_string()
            .starts_with("018c6844-68f8-8000-"));

        let uuid_for_same_instant = builder.build_with_instant(instant);
        assert!(uuid_for_same_instant.is_uprotocol_uuid());
        // same instant, version (8) and _incremented_ counter (001) should show up in UUID
        assert!(uuid_for_same_instant
            .to_hyphenated_string()
            .starts_with("018c6844-68f8-8001-"));
    }

    #[test]
    fn test_uuid_for_constant_random() {
        let builder = UUIDv8Builder::new();
        let uuid1 = builder.build();
        let uuid2 = builder.build();
        assert_eq!(uuid1.lsb, uuid2.lsb);
    }

    #[test]
    fn test_uuid_counter_freezes_at_max() {
        let instant = 0x18C684468F8_u64;
        let builder = UUIDv8Builder::new();

        let mut last = builder.build_with_instant(instant);
        assert_eq!(0, last.msb & MAX_COUNT);
        for _ in 0..MAX_COUNT {
            let uuid = builder.build_with_instant(instant);
            assert_eq!(Some(instant), uuid.get_time());
            assert_eq!(last.lsb, uuid.lsb);
            last = uuid;
        }
        assert_eq!(MAX_COUNT, last.msb & MAX_COUNT);

        // the counter stays frozen once it is exhausted for the tick
        let frozen = builder.build_with_instant(instant);
        assert_eq!(last, frozen);
    }

    #[test]
    fn test_uuid_for_clock_drift() {
        let instant = 0x18C684468F8_u64;
        let builder = UUIDv8Builder::new();

        let uuid = builder.build_with_instant(instant);
        assert_eq!(Some(instant), uuid.get_time());

        // a small clock rewind keeps the previous timestamp and increments the counter
        let rewound = builder.build_with_instant(instant - 1);
        assert_eq!(Some(instant), rewound.get_time());
        assert_eq!(1, rewound.msb & MAX_COUNT);

        // moving past the previous tick starts a fresh counter
        let advanced = builder.build_with_instant(instant + 1);
        assert_eq!(Some(instant + 1), advanced.get_time());
        assert_eq!(0, advanced.msb & MAX_COUNT);

        // a rewind beyond the drift tolerance takes the new timestamp
        let far_rewound = builder.build_with_instant(instant - CLOCK_DRIFT_TOLERANCE);
        assert_eq!(Some(instant - CLOCK_DRIFT_TOLERANCE), far_rewound.get_time());
    }

    #[test]
    #[should_panic]
    fn test_uuid_panics_for_invalid_timestamp() {
        // maximum value that can be stored in a 48-bit timestamp (in milliseconds)
        let max_48_bit_unix_ts_ms = (1u64 << 48) - 1;

        // add 1 millisecond to the maximum duration, to overflow
        let overflowed_48_bit_unix_ts_ms = max_48_bit_unix_ts_ms + 1;

        let builder = UUIDv8Builder::new();
        let _uprotocol_uuid_past_max_unix_ts_ms =
            builder.build_with_instant(overflowed_48_bit_unix_ts_ms);
    }
}
