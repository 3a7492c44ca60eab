//! `JobId` — the storage-assigned identifier of a job.
//!
//! Wraps a BSON ObjectId. On the wire it is always the 24-character
//! lowercase hex form.

use std::fmt;
use std::str::FromStr;

use bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobId(ObjectId);

impl JobId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    pub fn object_id(&self) -> ObjectId {
        self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ObjectId> for JobId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl From<JobId> for ObjectId {
    fn from(id: JobId) -> Self {
        id.0
    }
}

impl FromStr for JobId {
    type Err = DomainError;

    /// Accepts exactly 24 hex characters; anything else is `InvalidId`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| DomainError::InvalidId(s.to_string()))
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl Serialize for JobId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de> Deserialize<'de> for JobId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_24_hex_characters() {
        let id: JobId = "65a1f0c2e4b0a1b2c3d4e5f6".parse().expect("valid id");
        assert_eq!(id.to_string(), "65a1f0c2e4b0a1b2c3d4e5f6");
    }

    #[test]
    fn all_zero_id_is_well_formed() {
        assert!("000000000000000000000000".parse::<JobId>().is_ok());
    }

    #[test]
    fn rejects_malformed_ids() {
        for raw in ["not-an-id", "", "65a1f0c2e4b0a1b2c3d4e5f", "65a1f0c2e4b0a1b2c3d4e5fz", "123456789012"] {
            assert_eq!(
                raw.parse::<JobId>(),
                Err(DomainError::InvalidId(raw.to_string())),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn serializes_as_hex_string() {
        let id: JobId = "65a1f0c2e4b0a1b2c3d4e5f6".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"65a1f0c2e4b0a1b2c3d4e5f6\"");
        let back: JobId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
