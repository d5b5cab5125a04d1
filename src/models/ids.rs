//! Identifier generation and string ID wrappers
//!
//! Ids are opaque strings. Generated ones look like `txn_m5x2k1q0_8f3kz0ab`:
//! a caller-supplied tag, the creation time in base-36 milliseconds and eight
//! random base-36 characters. Collisions are negligible within one process but
//! nothing here is globally unique or cryptographically strong.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const RANDOM_WIDTH: usize = 8;
const RANDOM_SPACE: u64 = 36u64.pow(RANDOM_WIDTH as u32);

/// Generate a new opaque id prefixed with `prefix`
pub fn generate_id(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    // The low bits of a v4 UUID are uniformly random
    let random = (Uuid::new_v4().as_u128() as u64) % RANDOM_SPACE;
    format!(
        "{}_{}_{:0>width$}",
        prefix,
        to_base36(millis),
        to_base36(random),
        width = RANDOM_WIDTH
    )
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Macro to generate string ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh id with this type's prefix
            pub fn generate() -> Self {
                Self(generate_id($prefix))
            }

            /// Wrap an existing id string as-is
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the raw id string
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

define_id!(TransactionId, "txn");
define_id!(CategoryId, "cat");
