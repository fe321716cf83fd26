//! String-keyed lookups over the schema registry tables.
//!
//! The indexer and its collaborators pass schema and reason names around as
//! text. These functions resolve such names against the typed tables in
//! [`crate::types`] and [`crate::reason`], failing fast on anything
//! unregistered.

use std::str::FromStr;
use thiserror::Error;

use crate::reason::{StatusReason, StatusReasonDescriptor};
use crate::types::{AuditReportType, CredentialType, SchemaId};

/// Errors raised by registry lookups.
///
/// Both variants are caller-input errors. A wrong schema id or reason code
/// would mislabel generated attestation data downstream, so unknown names
/// surface as errors instead of a default value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("unknown credential type {0:?}")]
    UnknownCredentialType(String),

    #[error("unknown status reason {0:?}")]
    UnknownReasonName(String),
}

/// Endorsement polarity values: neutral, positive, negative.
pub const ENDORSEMENT_TYPES: [i32; 3] = [0, 1, -1];

/// Resolve a credential-type name to its registered schema id.
pub fn schema_id(credential_type: &str) -> Result<SchemaId, RegistryError> {
    CredentialType::from_str(credential_type).map(CredentialType::schema_id)
}

/// Allowed endorsement polarity values, in registry order.
pub fn endorsement_types() -> [i32; 3] {
    ENDORSEMENT_TYPES
}

/// The two audit-report credential subtype names, in registry order.
pub fn audit_report_types() -> [&'static str; 2] {
    [
        AuditReportType::Approve.as_str(),
        AuditReportType::Disapprove.as_str(),
    ]
}

/// Descriptors for every reason that has presentation wording.
pub fn status_reason_descriptors() -> Vec<StatusReasonDescriptor> {
    StatusReason::ALL.into_iter().filter_map(StatusReason::descriptor).collect()
}

/// Resolve a reason name to its single-byte wire code.
pub fn status_reason_code(reason: &str) -> Result<u8, RegistryError> {
    StatusReason::from_str(reason).map(StatusReason::code)
}
