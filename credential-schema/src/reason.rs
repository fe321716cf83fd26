//! Status reasons and their wire encoding.
//!
//! A status credential that flags a subject names a reason. Every reason has
//! a single-byte code used on the wire; some also have a human-readable
//! descriptor embedded in the credential body.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::registry::RegistryError;

/// Named justification for a status credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusReason {
    Unreliable,
    Scam,
    Incomplete,
}

impl StatusReason {
    /// Every registered reason.
    pub const ALL: [StatusReason; 3] = [
        StatusReason::Unreliable,
        StatusReason::Scam,
        StatusReason::Incomplete,
    ];

    /// Reason name, as referenced by descriptor `type` fields.
    pub fn as_str(self) -> &'static str {
        match self {
            StatusReason::Unreliable => "Unreliable",
            StatusReason::Scam => "Scam",
            StatusReason::Incomplete => "Incomplete",
        }
    }

    /// Single-byte wire code.
    ///
    /// External indexing infrastructure matches on these exact values.
    pub fn code(self) -> u8 {
        match self {
            StatusReason::Unreliable => 0x00,
            StatusReason::Scam => 0x01,
            StatusReason::Incomplete => 0x02,
        }
    }

    /// Human-readable descriptor for this reason, if one has been written.
    // TODO: add Unreliable and Incomplete descriptors once their wording is settled
    pub fn descriptor(self) -> Option<StatusReasonDescriptor> {
        match self {
            StatusReason::Scam => Some(StatusReasonDescriptor {
                reason_type: self.as_str().to_owned(),
                value: "The subject has been identified as a scam.".to_owned(),
                lang: "en".to_owned(),
            }),
            StatusReason::Unreliable | StatusReason::Incomplete => None,
        }
    }
}

impl FromStr for StatusReason {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusReason::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| RegistryError::UnknownReasonName(s.to_string()))
    }
}

impl fmt::Display for StatusReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-readable reason descriptor, embedded in credential bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReasonDescriptor {
    /// Reason name; must resolve to a [`StatusReason`]
    #[serde(rename = "type")]
    pub reason_type: String,
    /// Description shown to users
    pub value: String,
    /// IETF language tag for `value`
    pub lang: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_codes() {
        assert_eq!(StatusReason::Unreliable.code(), 0x00);
        assert_eq!(StatusReason::Scam.code(), 0x01);
        assert_eq!(StatusReason::Incomplete.code(), 0x02);
    }

    #[test]
    fn test_reason_codes_distinct() {
        for a in StatusReason::ALL {
            for b in StatusReason::ALL {
                if a != b {
                    assert_ne!(a.code(), b.code(), "{a} and {b} share a code");
                }
            }
        }
    }

    #[test]
    fn test_reason_round_trip() {
        for r in StatusReason::ALL {
            assert_eq!(r.as_str().parse::<StatusReason>(), Ok(r));
        }
    }

    #[test]
    fn test_unknown_reason() {
        assert_eq!(
            "Bogus".parse::<StatusReason>(),
            Err(RegistryError::UnknownReasonName("Bogus".to_string()))
        );
    }

    #[test]
    fn test_descriptor_wire_shape() {
        let descriptor = StatusReason::Scam.descriptor().unwrap();
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["type"], "Scam");
        assert_eq!(json["lang"], "en");
        assert!(json["value"].is_string());

        let parsed: StatusReasonDescriptor = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, descriptor);
    }

    #[test]
    fn test_every_descriptor_has_a_code() {
        // Guards against adding a descriptor without registering its code.
        for r in StatusReason::ALL {
            if let Some(d) = r.descriptor() {
                let reason: StatusReason = d.reason_type.parse().unwrap();
                assert_eq!(reason.code(), r.code());
            }
        }
    }
}
