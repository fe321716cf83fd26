//! Core types used across the credential schema registry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::registry::RegistryError;

/// Schema identifier in the indexing system's schema registry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct SchemaId(pub u32);

impl fmt::Display for SchemaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Credential categories known to the schema registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialType {
    /// Issuer's current opinion of a subject (endorsed or disputed)
    Status,
    /// Peer-to-peer trust assertion
    Trust,
    /// Audit report approving the audited subject
    AuditReportApprove,
    /// Audit report disapproving the audited subject
    AuditReportDisapprove,
    /// Positive opinion of a subject
    Endorsement,
    /// Negative opinion of a subject
    Dispute,
}

impl CredentialType {
    /// Every registered credential type.
    pub const ALL: [CredentialType; 6] = [
        CredentialType::Status,
        CredentialType::Trust,
        CredentialType::AuditReportApprove,
        CredentialType::AuditReportDisapprove,
        CredentialType::Endorsement,
        CredentialType::Dispute,
    ];

    /// Registry name, as carried in credential `type` fields.
    pub fn as_str(self) -> &'static str {
        match self {
            CredentialType::Status => "StatusCredential",
            CredentialType::Trust => "TrustCredential",
            CredentialType::AuditReportApprove => "AuditReportApproveCredential",
            CredentialType::AuditReportDisapprove => "AuditReportDisapproveCredential",
            CredentialType::Endorsement => "EndorsementCredential",
            CredentialType::Dispute => "DisputeCredential",
        }
    }

    /// Registered schema id.
    ///
    /// Endorsement and dispute credentials intentionally share schema 4: both
    /// carry a status opinion and index under the same data shape.
    pub fn schema_id(self) -> SchemaId {
        match self {
            CredentialType::Status => SchemaId(1),
            CredentialType::Trust => SchemaId(2),
            CredentialType::AuditReportApprove => SchemaId(2),
            CredentialType::AuditReportDisapprove => SchemaId(3),
            CredentialType::Endorsement => SchemaId(4),
            CredentialType::Dispute => SchemaId(4),
        }
    }
}

impl FromStr for CredentialType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CredentialType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| RegistryError::UnknownCredentialType(s.to_string()))
    }
}

impl fmt::Display for CredentialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audit report verdict subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditReportType {
    Approve,
    Disapprove,
}

impl AuditReportType {
    /// Both subtypes, in registry order.
    pub const ALL: [AuditReportType; 2] = [AuditReportType::Approve, AuditReportType::Disapprove];

    /// The credential type this verdict is issued as.
    pub fn credential_type(self) -> CredentialType {
        match self {
            AuditReportType::Approve => CredentialType::AuditReportApprove,
            AuditReportType::Disapprove => CredentialType::AuditReportDisapprove,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.credential_type().as_str()
    }
}

impl fmt::Display for AuditReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `currentStatus` labels a status credential may carry.
///
/// The score computer rejects any other label when folding statuses into
/// snap scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusValue {
    Endorsed,
    Disputed,
}

impl StatusValue {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusValue::Endorsed => "Endorsed",
            StatusValue::Disputed => "Disputed",
        }
    }
}

impl fmt::Display for StatusValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_id_table() {
        assert_eq!(CredentialType::Status.schema_id(), SchemaId(1));
        assert_eq!(CredentialType::Trust.schema_id(), SchemaId(2));
        assert_eq!(CredentialType::AuditReportApprove.schema_id(), SchemaId(2));
        assert_eq!(CredentialType::AuditReportDisapprove.schema_id(), SchemaId(3));
        assert_eq!(CredentialType::Endorsement.schema_id(), SchemaId(4));
        assert_eq!(CredentialType::Dispute.schema_id(), SchemaId(4));
    }

    #[test]
    fn test_credential_type_round_trip() {
        for t in CredentialType::ALL {
            assert_eq!(t.as_str().parse::<CredentialType>(), Ok(t));
        }
    }

    #[test]
    fn test_endorsement_dispute_share_schema() {
        assert_eq!(
            CredentialType::Endorsement.schema_id(),
            CredentialType::Dispute.schema_id(),
        );
    }

    #[test]
    fn test_audit_report_names() {
        assert_eq!(AuditReportType::Approve.as_str(), "AuditReportApproveCredential");
        assert_eq!(
            AuditReportType::Disapprove.as_str(),
            "AuditReportDisapproveCredential"
        );
    }

    #[test]
    fn test_status_value_serde() {
        assert_eq!(
            serde_json::to_value(StatusValue::Endorsed).unwrap(),
            serde_json::json!("Endorsed")
        );
        let parsed: StatusValue = serde_json::from_str("\"Disputed\"").unwrap();
        assert_eq!(parsed, StatusValue::Disputed);
        assert!(serde_json::from_str::<StatusValue>("\"Suspended\"").is_err());
    }

    #[test]
    fn test_schema_id_display() {
        assert_eq!(SchemaId(4).to_string(), "4");
        assert_eq!(CredentialType::Status.to_string(), "StatusCredential");
    }
}
